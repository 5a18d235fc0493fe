//! Channel switch payloads

use std::fmt;

use crate::data::DataFragment;
use crate::error::{Error, Result};

/// Opaque channel element embedded verbatim into a change-channel request
///
/// The TV describes channels itself via the `channel_list` query; the usual
/// flow is to pick one of the returned fragments and hand it back unchanged:
///
/// ```
/// use netcast_types::{ChannelDescriptor, DataFragment};
///
/// let mut data = DataFragment::new("data");
/// data.children.push(DataFragment::with_text("major", "7"));
/// let channel = ChannelDescriptor::from_fragment(&data);
/// assert_eq!(channel.as_xml(), "<data><major>7</major></data>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelDescriptor {
    xml: String,
}

impl ChannelDescriptor {
    /// Wrap a raw XML element
    ///
    /// The content is not validated beyond being non-empty; the TV rejects
    /// payloads it does not understand on its own.
    pub fn from_xml(xml: impl Into<String>) -> Result<Self> {
        let xml = xml.into();
        if xml.trim().is_empty() {
            return Err(Error::Validation("channel descriptor is empty".into()));
        }
        Ok(Self { xml })
    }

    /// Serialize a query result fragment into a channel descriptor
    pub fn from_fragment(fragment: &DataFragment) -> Self {
        Self {
            xml: fragment.to_string(),
        }
    }

    /// The serialized channel element
    pub fn as_xml(&self) -> &str {
        &self.xml
    }
}

impl fmt::Display for ChannelDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.xml)
    }
}
