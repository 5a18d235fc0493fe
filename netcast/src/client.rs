//! High-level TV client

use tracing::{debug, info, warn};

use netcast_core::constants::{endpoints, handlers, QUERY_PARAM};
use netcast_core::{envelope, Protocol, Query, Session, SessionId, DEFAULT_PORT};
use netcast_transport::{ExchangeRequest, ExchangeResponse, HttpTransport, Transport};
use netcast_types::{ChannelDescriptor, DataFragment};

use crate::error::{Error, Result};

/// LG NetCast TV client
///
/// Owns the device address, the pairing key and the current session. The
/// session is acquired lazily before the first protocol operation and
/// discarded on [`close`](NetCastClient::close) (or on drop); it is never
/// persisted or reused across scopes.
///
/// One logical session per client: callers that control one TV from several
/// tasks must serialize access to a single client instance.
///
/// # Examples
///
/// ```no_run
/// use netcast::{NetCastClient, RemoteKey};
///
/// #[tokio::main]
/// async fn main() -> netcast::Result<()> {
///     let mut client = NetCastClient::new("192.168.1.100", Some("ABCD1234".into()))?;
///
///     client.connect().await?;
///     client.send_command(RemoteKey::MuteToggle).await?;
///
///     client.close();
///     Ok(())
/// }
/// ```
pub struct NetCastClient {
    transport: Box<dyn Transport>,
    session: Session,
    host: String,
    protocol: Protocol,
    access_token: Option<String>,
}

impl NetCastClient {
    /// Create a new client for a TV (default ROAP dialect, HTTP transport)
    ///
    /// `access_token` is the pairing key shown on the TV screen; pass `None`
    /// on first contact to make the TV display it.
    pub fn new(host: impl Into<String>, access_token: Option<String>) -> Result<Self> {
        Ok(Self {
            transport: Box::new(HttpTransport::new().map_err(Error::Transport)?),
            session: Session::new(),
            host: host.into(),
            protocol: Protocol::default(),
            access_token,
        })
    }

    /// Select the protocol dialect (pre-2012 TVs use [`Protocol::Hdcp`])
    pub fn with_protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = protocol;
        self
    }

    /// Replace the transport (used to test protocol logic without a TV)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    /// Set or replace the pairing key
    pub fn set_access_token(&mut self, access_token: impl Into<String>) {
        self.access_token = Some(access_token.into());
    }

    /// Check if a session is established
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Acquire a session now instead of lazily on the first operation
    ///
    /// # Errors
    ///
    /// - [`netcast_core::Error::AccessToken`] when no pairing key is set;
    ///   the TV has been asked to display one
    /// - [`netcast_core::Error::SessionId`] when the TV rejects the key or
    ///   returns an unusable session id
    /// - [`netcast_transport::Error`] when the exchange itself fails;
    ///   timeouts surface as transport errors, not as session errors
    pub async fn connect(&mut self) -> Result<()> {
        self.ensure_session().await?;
        Ok(())
    }

    /// Discard the session
    ///
    /// The client returns to its initial state; a later operation acquires
    /// a fresh session.
    pub fn close(&mut self) {
        self.session.close();
    }

    /// Send a remote control key press to the TV
    ///
    /// Best-effort: a non-success status from the TV is logged and ignored,
    /// matching the protocol's command semantics. Transport failures and
    /// session acquisition failures still propagate.
    pub async fn send_command(&mut self, key: impl Into<u16>) -> Result<()> {
        let code = key.into();
        let session_id = self.ensure_session().await?;

        debug!(code, "sending key input");

        let body = envelope::command_request(
            &session_id,
            handlers::KEY_INPUT,
            &envelope::key_input_payload(code),
        );
        let response = self
            .exchange(endpoints::COMMAND, ExchangeRequest::post(body))
            .await?;

        if !response.is_success() {
            warn!(code, status = response.status, "TV declined key input");
        }

        Ok(())
    }

    /// Switch to a channel previously obtained from [`Query::ChannelList`]
    ///
    /// Same best-effort semantics as [`send_command`](Self::send_command).
    pub async fn change_channel(&mut self, channel: &ChannelDescriptor) -> Result<()> {
        let session_id = self.ensure_session().await?;

        debug!(channel = %channel, "changing channel");

        let body =
            envelope::command_request(&session_id, handlers::CHANNEL_CHANGE, channel.as_xml());
        let response = self
            .exchange(endpoints::COMMAND, ExchangeRequest::post(body))
            .await?;

        if !response.is_success() {
            warn!(status = response.status, "TV declined channel change");
        }

        Ok(())
    }

    /// Query status information from the TV
    ///
    /// Returns the `data` elements of the response in document order. A
    /// query the TV declines yields an empty vector (logged at warn level),
    /// the same as a query that matched nothing; the reference protocol
    /// does not distinguish the two.
    pub async fn query_data(&mut self, query: Query) -> Result<Vec<DataFragment>> {
        self.ensure_session().await?;

        debug!(%query, "querying data");

        let response = self
            .exchange(
                endpoints::DATA,
                ExchangeRequest::get(QUERY_PARAM, query.as_str()),
            )
            .await?;

        if !response.is_success() {
            warn!(%query, status = response.status, "TV declined query");
            return Ok(Vec::new());
        }

        Ok(envelope::parse_data_fragments(&response.body)?)
    }

    // Helper methods

    /// Return the current session id, acquiring a session first if needed
    ///
    /// A previous failed acquisition is re-attempted; recovery after
    /// a missing pairing key is setting the token and calling again.
    async fn ensure_session(&mut self) -> Result<SessionId> {
        if let Some(session_id) = self.session.session_id() {
            return Ok(session_id);
        }
        self.acquire_session().await
    }

    async fn acquire_session(&mut self) -> Result<SessionId> {
        self.session.begin()?;

        // An empty pairing key means "not yet paired", same as no key at all
        let token = self
            .access_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(String::from);

        let Some(token) = token else {
            info!("no pairing key set - asking the TV to display one");
            let request = ExchangeRequest::post(envelope::auth_key_request());
            // Fire and forget; the on-screen display matters, not the reply
            if let Err(err) = self.exchange(endpoints::AUTH, request).await {
                warn!("pairing key display request failed: {err}");
            }
            self.session.fail()?;
            return Err(netcast_core::Error::AccessToken.into());
        };

        let request = ExchangeRequest::post(envelope::auth_session_request(&token));
        let response = match self.exchange(endpoints::AUTH, request).await {
            Ok(response) => response,
            Err(err) => {
                self.session.fail()?;
                return Err(err);
            }
        };

        if !response.is_success() {
            self.session.fail()?;
            return Err(netcast_core::Error::SessionId(format!(
                "TV rejected authentication with status {}",
                response.status
            ))
            .into());
        }

        let session_id = match envelope::parse_session_id(&response.body) {
            Ok(session_id) => session_id,
            Err(err) => {
                self.session.fail()?;
                return Err(err.into());
            }
        };

        info!(session_id = %session_id, "session established");
        self.session.authenticate(session_id.clone())?;

        Ok(session_id)
    }

    async fn exchange(
        &self,
        suffix: &'static str,
        request: ExchangeRequest,
    ) -> Result<ExchangeResponse> {
        let url = format!(
            "http://{}:{}/{}/api/{}",
            self.host,
            DEFAULT_PORT,
            self.protocol.as_str(),
            self.protocol.map_endpoint(suffix)
        );
        Ok(self.transport.exchange(&url, request).await?)
    }
}

impl Drop for NetCastClient {
    /// Sessions do not outlive the client's scope
    fn drop(&mut self) {
        self.session.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use netcast_core::RemoteKey;

    enum Reply {
        Respond(u16, &'static str),
        Timeout,
    }

    /// Scripted transport: replays queued replies and records every request
    #[derive(Clone, Default)]
    struct ScriptedTransport {
        inner: Arc<ScriptedInner>,
    }

    #[derive(Default)]
    struct ScriptedInner {
        script: Mutex<VecDeque<Reply>>,
        requests: Mutex<Vec<(String, ExchangeRequest)>>,
    }

    impl ScriptedTransport {
        fn new() -> Self {
            Self::default()
        }

        fn push(&self, reply: Reply) -> &Self {
            self.inner.script.lock().unwrap().push_back(reply);
            self
        }

        fn requests(&self) -> Vec<(String, ExchangeRequest)> {
            self.inner.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for ScriptedTransport {
        async fn exchange(
            &self,
            url: &str,
            request: ExchangeRequest,
        ) -> netcast_transport::Result<ExchangeResponse> {
            self.inner
                .requests
                .lock()
                .unwrap()
                .push((url.to_string(), request));

            match self.inner.script.lock().unwrap().pop_front() {
                Some(Reply::Respond(status, body)) => Ok(ExchangeResponse {
                    status,
                    body: body.to_string(),
                }),
                Some(Reply::Timeout) => Err(netcast_transport::Error::Timeout),
                None => Ok(ExchangeResponse {
                    status: 200,
                    body: String::new(),
                }),
            }
        }
    }

    const AUTH_OK: &str = "<auth><session>SESSIONID123</session></auth>";

    fn client(transport: &ScriptedTransport, token: Option<&str>) -> NetCastClient {
        NetCastClient::new("192.168.1.100", token.map(String::from))
            .unwrap()
            .with_transport(Box::new(transport.clone()))
    }

    fn post_body(request: &ExchangeRequest) -> &str {
        match request {
            ExchangeRequest::Post { body } => body,
            ExchangeRequest::Get { .. } => panic!("expected POST"),
        }
    }

    #[tokio::test]
    async fn test_connect_with_token() {
        let transport = ScriptedTransport::new();
        transport.push(Reply::Respond(200, AUTH_OK));

        let mut client = client(&transport, Some("ABCD1234"));
        client.connect().await.unwrap();

        assert!(client.is_authenticated());

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, "http://192.168.1.100:8080/roap/api/auth");
        assert_eq!(
            post_body(&requests[0].1),
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\
             <auth><type>AuthReq</type><value>ABCD1234</value></auth>"
        );
    }

    #[tokio::test]
    async fn test_connect_without_token_displays_pairing_key() {
        let transport = ScriptedTransport::new();
        let mut client = client(&transport, None);

        let err = client.connect().await.unwrap_err();
        assert!(err.is_access_token());
        assert!(!client.is_authenticated());

        // The display request went out before the failure
        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, "http://192.168.1.100:8080/roap/api/auth");
        assert!(post_body(&requests[0].1).contains("<type>AuthKeyReq</type>"));
    }

    #[tokio::test]
    async fn test_connect_empty_token_displays_pairing_key() {
        // An empty pairing key is "not yet paired", not a valid token
        let transport = ScriptedTransport::new();
        let mut client = client(&transport, Some(""));

        let err = client.connect().await.unwrap_err();
        assert!(err.is_access_token());
        assert!(!client.is_authenticated());

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert!(post_body(&requests[0].1).contains("<type>AuthKeyReq</type>"));
        assert!(!post_body(&requests[0].1).contains("<type>AuthReq</type>"));
    }

    #[tokio::test]
    async fn test_connect_whitespace_token_displays_pairing_key() {
        let transport = ScriptedTransport::new();
        let mut client = client(&transport, Some("   "));

        let err = client.connect().await.unwrap_err();
        assert!(err.is_access_token());
    }

    #[tokio::test]
    async fn test_connect_no_token_ignores_display_failure() {
        // The display request failing does not change the outcome
        let transport = ScriptedTransport::new();
        transport.push(Reply::Timeout);

        let mut client = client(&transport, None);
        let err = client.connect().await.unwrap_err();
        assert!(err.is_access_token());
    }

    #[tokio::test]
    async fn test_connect_rejected_status() {
        let transport = ScriptedTransport::new();
        transport.push(Reply::Respond(401, ""));

        let mut client = client(&transport, Some("WRONGKEY"));
        let err = client.connect().await.unwrap_err();

        assert!(matches!(
            err,
            Error::Core(netcast_core::Error::SessionId(_))
        ));
    }

    #[tokio::test]
    async fn test_connect_short_session_id() {
        let transport = ScriptedTransport::new();
        transport.push(Reply::Respond(200, "<auth><session>short</session></auth>"));

        let mut client = client(&transport, Some("ABCD1234"));
        let err = client.connect().await.unwrap_err();

        assert!(matches!(
            err,
            Error::Core(netcast_core::Error::SessionId(_))
        ));
        assert!(!client.is_authenticated());
    }

    #[tokio::test]
    async fn test_connect_timeout_is_transport_error() {
        let transport = ScriptedTransport::new();
        transport.push(Reply::Timeout);

        let mut client = client(&transport, Some("ABCD1234"));
        let err = client.connect().await.unwrap_err();

        assert!(matches!(
            err,
            Error::Transport(netcast_transport::Error::Timeout)
        ));
    }

    #[tokio::test]
    async fn test_retry_after_failure_with_new_token() {
        let transport = ScriptedTransport::new();
        let mut client = client(&transport, None);

        assert!(client.connect().await.is_err());

        transport.push(Reply::Respond(200, AUTH_OK));
        client.set_access_token("ABCD1234");
        client.connect().await.unwrap();

        assert!(client.is_authenticated());
    }

    #[tokio::test]
    async fn test_send_command_envelope() {
        let transport = ScriptedTransport::new();
        transport.push(Reply::Respond(200, AUTH_OK));
        transport.push(Reply::Respond(200, ""));

        let mut client = client(&transport, Some("ABCD1234"));
        client.connect().await.unwrap();
        client.send_command(24u16).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].0, "http://192.168.1.100:8080/roap/api/command");
        assert!(post_body(&requests[1].1).contains(
            "<session>SESSIONID123</session><type>HandleKeyInput</type><value>24</value>"
        ));
    }

    #[tokio::test]
    async fn test_send_command_acquires_session_lazily() {
        let transport = ScriptedTransport::new();
        transport.push(Reply::Respond(200, AUTH_OK));
        transport.push(Reply::Respond(200, ""));

        let mut client = client(&transport, Some("ABCD1234"));
        client.send_command(RemoteKey::VolumeUp).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert!(requests[0].0.ends_with("/auth"));
        assert!(requests[1].0.ends_with("/command"));
    }

    #[tokio::test]
    async fn test_send_command_best_effort_on_declined() {
        let transport = ScriptedTransport::new();
        transport.push(Reply::Respond(200, AUTH_OK));
        transport.push(Reply::Respond(503, ""));

        let mut client = client(&transport, Some("ABCD1234"));
        client.connect().await.unwrap();

        // Non-success status is not an error for commands
        client.send_command(RemoteKey::Power).await.unwrap();
    }

    #[tokio::test]
    async fn test_send_command_transport_failure_propagates() {
        let transport = ScriptedTransport::new();
        transport.push(Reply::Respond(200, AUTH_OK));
        transport.push(Reply::Timeout);

        let mut client = client(&transport, Some("ABCD1234"));
        client.connect().await.unwrap();

        let err = client.send_command(RemoteKey::Power).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Transport(netcast_transport::Error::Timeout)
        ));
    }

    #[tokio::test]
    async fn test_change_channel_embeds_descriptor() {
        let transport = ScriptedTransport::new();
        transport.push(Reply::Respond(200, AUTH_OK));
        transport.push(Reply::Respond(200, ""));

        let channel =
            ChannelDescriptor::from_xml("<data><major>7</major><minor>1</minor></data>").unwrap();

        let mut client = client(&transport, Some("ABCD1234"));
        client.connect().await.unwrap();
        client.change_channel(&channel).await.unwrap();

        let requests = transport.requests();
        assert!(post_body(&requests[1].1).contains(
            "<type>HandleChannelChange</type><data><major>7</major><minor>1</minor></data>"
        ));
    }

    #[tokio::test]
    async fn test_query_data_fragments_in_order() {
        let transport = ScriptedTransport::new();
        transport.push(Reply::Respond(200, AUTH_OK));
        transport.push(Reply::Respond(
            200,
            "<envelope><data>5</data><data>muted=false</data></envelope>",
        ));

        let mut client = client(&transport, Some("ABCD1234"));
        client.connect().await.unwrap();

        let fragments = client.query_data(Query::VolumeInfo).await.unwrap();
        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0].text(), "5");
        assert_eq!(fragments[1].text(), "muted=false");

        let requests = transport.requests();
        assert_eq!(requests[1].0, "http://192.168.1.100:8080/roap/api/data");
        assert_eq!(
            requests[1].1,
            ExchangeRequest::get("target", "volume_info")
        );
    }

    #[tokio::test]
    async fn test_query_data_no_matches_is_empty() {
        let transport = ScriptedTransport::new();
        transport.push(Reply::Respond(200, AUTH_OK));
        transport.push(Reply::Respond(200, "<envelope></envelope>"));

        let mut client = client(&transport, Some("ABCD1234"));
        client.connect().await.unwrap();

        let fragments = client.query_data(Query::Is3d).await.unwrap();
        assert!(fragments.is_empty());
    }

    #[tokio::test]
    async fn test_query_data_declined_is_empty() {
        let transport = ScriptedTransport::new();
        transport.push(Reply::Respond(200, AUTH_OK));
        transport.push(Reply::Respond(404, ""));

        let mut client = client(&transport, Some("ABCD1234"));
        client.connect().await.unwrap();

        let fragments = client.query_data(Query::ContextUi).await.unwrap();
        assert!(fragments.is_empty());
    }

    #[tokio::test]
    async fn test_close_discards_session() {
        let transport = ScriptedTransport::new();
        transport.push(Reply::Respond(200, AUTH_OK));

        let mut client = client(&transport, Some("ABCD1234"));
        client.connect().await.unwrap();
        assert!(client.is_authenticated());

        client.close();
        assert!(!client.is_authenticated());

        // Next operation acquires a fresh session
        transport.push(Reply::Respond(200, AUTH_OK));
        transport.push(Reply::Respond(200, ""));
        client.send_command(RemoteKey::Ok).await.unwrap();
        assert_eq!(transport.requests().len(), 3);
    }

    #[tokio::test]
    async fn test_hdcp_endpoint_rewrite() {
        let transport = ScriptedTransport::new();
        transport.push(Reply::Respond(200, AUTH_OK));
        transport.push(Reply::Respond(200, ""));

        let mut client = client(&transport, Some("ABCD1234")).with_protocol(Protocol::Hdcp);
        client.send_command(RemoteKey::Power).await.unwrap();

        let requests = transport.requests();
        assert_eq!(
            requests[0].0,
            "http://192.168.1.100:8080/hdcp/api/dtv_wifirc"
        );
        assert_eq!(requests[1].0, "http://192.168.1.100:8080/hdcp/api/command");
    }
}
