//! Boss bar payloads.

use crate::error::UnknownName;
use crate::message::Message;
use std::fmt;
use std::str::FromStr;

/// Color variants a host may support for boss bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BossBarColor {
    /// Pink.
    Pink,
    /// Blue.
    Blue,
    /// Red.
    Red,
    /// Green.
    Green,
    /// Yellow.
    Yellow,
    /// Purple.
    Purple,
    /// White.
    White,
}

impl BossBarColor {
    /// Every color, in canonical order.
    pub const ALL: [BossBarColor; 7] = [
        Self::Pink,
        Self::Blue,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Purple,
        Self::White,
    ];

    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pink => "pink",
            Self::Blue => "blue",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Purple => "purple",
            Self::White => "white",
        }
    }
}

impl fmt::Display for BossBarColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BossBarColor {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|color| color.name() == s)
            .ok_or_else(|| UnknownName::new("boss bar color", s))
    }
}

/// Notch overlay variants for the bar texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BossBarOverlay {
    /// A continuous, unsegmented bar.
    Progress,
    /// Six segments.
    Notched6,
    /// Ten segments.
    Notched10,
    /// Twelve segments.
    Notched12,
    /// Twenty segments.
    Notched20,
}

impl BossBarOverlay {
    /// Every overlay, in canonical order.
    pub const ALL: [BossBarOverlay; 5] = [
        Self::Progress,
        Self::Notched6,
        Self::Notched10,
        Self::Notched12,
        Self::Notched20,
    ];

    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Progress => "progress",
            Self::Notched6 => "notched_6",
            Self::Notched10 => "notched_10",
            Self::Notched12 => "notched_12",
            Self::Notched20 => "notched_20",
        }
    }
}

impl fmt::Display for BossBarOverlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BossBarOverlay {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|overlay| overlay.name() == s)
            .ok_or_else(|| UnknownName::new("boss bar overlay", s))
    }
}

/// A named progress meter pinned to the top of a viewer's screen.
///
/// Progress is kept within `[0.0, 1.0]`; out-of-range and NaN inputs are
/// clamped rather than rejected.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BossBar {
    name: Message,
    progress: f32,
    color: BossBarColor,
    overlay: BossBarOverlay,
}

impl BossBar {
    /// Create a bar.
    pub fn new(name: Message, progress: f32, color: BossBarColor, overlay: BossBarOverlay) -> Self {
        Self {
            name,
            progress: clamp_progress(progress),
            color,
            overlay,
        }
    }

    /// The text shown above the bar.
    pub fn name(&self) -> &Message {
        &self.name
    }

    /// Fill fraction in `[0.0, 1.0]`.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// The bar color.
    pub fn color(&self) -> BossBarColor {
        self.color
    }

    /// The notch overlay.
    pub fn overlay(&self) -> BossBarOverlay {
        self.overlay
    }

    /// Replace the text shown above the bar.
    pub fn set_name(&mut self, name: Message) {
        self.name = name;
    }

    /// Replace the fill fraction, clamping into `[0.0, 1.0]`.
    pub fn set_progress(&mut self, progress: f32) {
        self.progress = clamp_progress(progress);
    }

    /// Replace the bar color.
    pub fn set_color(&mut self, color: BossBarColor) {
        self.color = color;
    }

    /// Replace the notch overlay.
    pub fn set_overlay(&mut self, overlay: BossBarOverlay) {
        self.overlay = overlay;
    }
}

fn clamp_progress(progress: f32) -> f32 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}
