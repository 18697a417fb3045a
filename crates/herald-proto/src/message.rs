//! Chat and action-bar text payloads.

use std::fmt;

/// A plain text payload for chat and action-bar delivery.
///
/// The platform routes content opaquely; styling and markup are host
/// concerns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    text: String,
}

impl Message {
    /// Create a message from text.
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The message body.
    pub fn content(&self) -> &str {
        &self.text
    }

    /// Whether the body is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Self::text(text)
    }
}
