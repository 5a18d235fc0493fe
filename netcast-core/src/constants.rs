//! Protocol constants

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// XML declaration prefixed to every request envelope
pub const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>";

/// Content type for POST request bodies
pub const CONTENT_TYPE: &str = "application/atom+xml";

/// Query parameter carrying the query id on data requests
pub const QUERY_PARAM: &str = "target";

/// Device-side command handlers named in a command envelope's `type` element
pub mod handlers {
    /// Remote control key press
    pub const KEY_INPUT: &str = "HandleKeyInput";

    /// Pointer move
    pub const TOUCH_MOVE: &str = "HandleTouchMove";

    /// Pointer click
    pub const TOUCH_CLICK: &str = "HandleTouchClick";

    /// Scroll wheel
    pub const TOUCH_WHEEL: &str = "HandleTouchWheel";

    /// Channel switch
    pub const CHANNEL_CHANGE: &str = "HandleChannelChange";
}

/// Endpoint suffixes under `/{protocol}/api/`
pub mod endpoints {
    /// Pairing and session authentication
    pub const AUTH: &str = "auth";

    /// Remote control commands
    pub const COMMAND: &str = "command";

    /// Status queries
    pub const DATA: &str = "data";

    /// Combined auth/data endpoint on pre-2012 (hdcp) TVs
    pub const HDCP_REMOTE: &str = "dtv_wifirc";
}

/// Protocol dialects
///
/// NetCast 3.0/4.0 TVs (2012+) speak ROAP; pre-2012 models use the older
/// hdcp dialect with the same envelopes on different endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Protocol {
    #[default]
    Roap,
    Hdcp,
}

impl Protocol {
    /// Path segment for this dialect
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Roap => "roap",
            Self::Hdcp => "hdcp",
        }
    }

    /// Map an endpoint suffix to the one this dialect serves it on
    ///
    /// hdcp TVs accept everything except commands on `dtv_wifirc`.
    pub fn map_endpoint(self, suffix: &'static str) -> &'static str {
        match self {
            Self::Hdcp if suffix != endpoints::COMMAND => endpoints::HDCP_REMOTE,
            _ => suffix,
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "roap" => Ok(Self::Roap),
            "hdcp" => Ok(Self::Hdcp),
            other => Err(Error::UnknownProtocol(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_roundtrip() {
        assert_eq!("roap".parse::<Protocol>().unwrap(), Protocol::Roap);
        assert_eq!("hdcp".parse::<Protocol>().unwrap(), Protocol::Hdcp);
        assert!("dlna".parse::<Protocol>().is_err());
    }

    #[test]
    fn test_roap_endpoints_unchanged() {
        assert_eq!(Protocol::Roap.map_endpoint(endpoints::AUTH), "auth");
        assert_eq!(Protocol::Roap.map_endpoint(endpoints::DATA), "data");
        assert_eq!(Protocol::Roap.map_endpoint(endpoints::COMMAND), "command");
    }

    #[test]
    fn test_hdcp_endpoint_rewrite() {
        assert_eq!(Protocol::Hdcp.map_endpoint(endpoints::AUTH), "dtv_wifirc");
        assert_eq!(Protocol::Hdcp.map_endpoint(endpoints::DATA), "dtv_wifirc");
        assert_eq!(Protocol::Hdcp.map_endpoint(endpoints::COMMAND), "command");
    }
}
