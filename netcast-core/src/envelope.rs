//! ROAP request envelope building and response parsing
//!
//! # Wire format
//!
//! Every request is a UTF-8 XML document with a fixed declaration:
//!
//! ```text
//! <?xml version="1.0" encoding="utf-8"?><auth><type>AuthKeyReq</type></auth>
//! <?xml version="1.0" encoding="utf-8"?><auth><type>AuthReq</type><value>KEY</value></auth>
//! <?xml version="1.0" encoding="utf-8"?><command><session>ID</session><type>HANDLER</type>...</command>
//! ```
//!
//! Responses are XML documents whose root may contain a `session` element
//! (auth) or zero or more `data` elements (queries).
//!
//! Building is exact string templating since the format is fixed; parsing
//! goes through a real XML parser so malformed responses surface as
//! [`Error::Parse`] instead of being silently ignored.

use netcast_types::DataFragment;

use crate::constants::XML_DECLARATION;
use crate::error::{Error, Result};
use crate::session::SessionId;

/// Auth `type` asking the TV to display the pairing key on screen
pub const AUTH_TYPE_KEY_REQUEST: &str = "AuthKeyReq";

/// Auth `type` requesting a session for a pairing key
pub const AUTH_TYPE_SESSION_REQUEST: &str = "AuthReq";

/// Build the request that makes the TV display its pairing key
pub fn auth_key_request() -> String {
    format!("{XML_DECLARATION}<auth><type>{AUTH_TYPE_KEY_REQUEST}</type></auth>")
}

/// Build the authentication request for a pairing key
pub fn auth_session_request(access_token: &str) -> String {
    format!(
        "{XML_DECLARATION}<auth><type>{AUTH_TYPE_SESSION_REQUEST}</type>\
         <value>{access_token}</value></auth>"
    )
}

/// Build a command envelope
///
/// `inner` is either a [`key_input_payload`] or a serialized channel
/// element, embedded verbatim.
pub fn command_request(session_id: &SessionId, handler: &str, inner: &str) -> String {
    format!(
        "{XML_DECLARATION}<command><session>{session_id}</session>\
         <type>{handler}</type>{inner}</command>"
    )
}

/// Inner payload of a key-input command
pub fn key_input_payload(code: u16) -> String {
    format!("<value>{code}</value>")
}

/// Extract the session id from an auth response body
///
/// # Errors
///
/// Returns an error if:
/// - The body is not well-formed XML
/// - No `session` element is present
/// - The session id is shorter than [`SessionId::MIN_LEN`]
pub fn parse_session_id(body: &str) -> Result<SessionId> {
    let doc = roxmltree::Document::parse(body)?;
    let text = doc
        .descendants()
        .find(|node| node.has_tag_name("session"))
        .and_then(|node| node.text())
        .ok_or_else(|| Error::SessionId("no session element in auth response".into()))?;

    SessionId::new(text)
}

/// Collect every `data` element in a query response, in document order
///
/// A response without `data` elements yields an empty vector, not an error.
pub fn parse_data_fragments(body: &str) -> Result<Vec<DataFragment>> {
    let doc = roxmltree::Document::parse(body)?;
    Ok(doc
        .descendants()
        .filter(|node| node.is_element() && node.has_tag_name("data"))
        .map(to_fragment)
        .collect())
}

fn to_fragment(node: roxmltree::Node<'_, '_>) -> DataFragment {
    DataFragment {
        name: node.tag_name().name().to_string(),
        attributes: node
            .attributes()
            .map(|a| (a.name().to_string(), a.value().to_string()))
            .collect(),
        text: node.text().map(str::to_string),
        children: node
            .children()
            .filter(|child| child.is_element())
            .map(to_fragment)
            .collect(),
    }
}
