//! Title payloads.

use crate::message::Message;
use std::time::Duration;

/// Fade and hold timings for a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TitleTimes {
    /// Time spent fading the title in.
    pub fade_in: Duration,
    /// Time the title stays at full opacity.
    pub stay: Duration,
    /// Time spent fading the title out.
    pub fade_out: Duration,
}

/// A title/subtitle pair shown across the center of a viewer's screen.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Title {
    /// The large headline text.
    pub title: Message,
    /// The smaller line under the headline.
    pub subtitle: Message,
    /// Timings; `None` keeps whatever the host last applied.
    pub times: Option<TitleTimes>,
}

impl Title {
    /// Create a title with no explicit timings.
    pub fn new(title: impl Into<Message>, subtitle: impl Into<Message>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            times: None,
        }
    }

    /// Attach explicit fade/stay timings.
    pub fn with_times(mut self, times: TitleTimes) -> Self {
        self.times = Some(times);
        self
    }
}
