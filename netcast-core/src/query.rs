//! Status query definitions

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// TV status queries
///
/// The query id is passed as the `target` parameter of a data request.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Query {
    /// Currently tuned channel
    CurrentChannel,

    /// All channels known to the tuner
    ChannelList,

    /// Name of the UI context on screen
    ContextUi,

    /// Volume level and mute state
    VolumeInfo,

    /// Screenshot of the current screen
    ScreenImage,

    /// Whether the TV is in 3D mode
    Is3d,
}

impl Query {
    /// Wire-format query id
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CurrentChannel => "cur_channel",
            Self::ChannelList => "channel_list",
            Self::ContextUi => "context_ui",
            Self::VolumeInfo => "volume_info",
            Self::ScreenImage => "screen_image",
            Self::Is3d => "is_3d",
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Query {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cur_channel" => Ok(Self::CurrentChannel),
            "channel_list" => Ok(Self::ChannelList),
            "context_ui" => Ok(Self::ContextUi),
            "volume_info" => Ok(Self::VolumeInfo),
            "screen_image" => Ok(Self::ScreenImage),
            "is_3d" => Ok(Self::Is3d),
            other => Err(Error::UnknownQuery(other.to_string())),
        }
    }
}
