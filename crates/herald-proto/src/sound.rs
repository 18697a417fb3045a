//! Sound payloads.

use crate::error::UnknownName;
use crate::key::Key;
use std::fmt;
use std::str::FromStr;

/// Mixer category a sound plays through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SoundSource {
    /// The master channel.
    Master,
    /// Background music.
    Music,
    /// Jukebox/record playback.
    Record,
    /// Weather effects.
    Weather,
    /// Block sounds.
    Block,
    /// Hostile creatures.
    Hostile,
    /// Neutral creatures.
    Neutral,
    /// Player-generated sounds.
    Player,
    /// Ambient/environment sounds.
    Ambient,
    /// Voice/speech.
    Voice,
}

impl SoundSource {
    /// Every source, in canonical order.
    pub const ALL: [SoundSource; 10] = [
        Self::Master,
        Self::Music,
        Self::Record,
        Self::Weather,
        Self::Block,
        Self::Hostile,
        Self::Neutral,
        Self::Player,
        Self::Ambient,
        Self::Voice,
    ];

    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Master => "master",
            Self::Music => "music",
            Self::Record => "record",
            Self::Weather => "weather",
            Self::Block => "block",
            Self::Hostile => "hostile",
            Self::Neutral => "neutral",
            Self::Player => "player",
            Self::Ambient => "ambient",
            Self::Voice => "voice",
        }
    }
}

impl fmt::Display for SoundSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SoundSource {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|source| source.name() == s)
            .ok_or_else(|| UnknownName::new("sound source", s))
    }
}

/// A sound event played at a viewer's position.
///
/// Volume and pitch are multipliers; negative and NaN inputs are clamped to
/// zero.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sound {
    /// The catalog key of the sound event.
    pub name: Key,
    /// The mixer category.
    pub source: SoundSource,
    /// Volume multiplier.
    pub volume: f32,
    /// Pitch multiplier.
    pub pitch: f32,
}

impl Sound {
    /// Create a sound event.
    pub fn new(name: Key, source: SoundSource, volume: f32, pitch: f32) -> Self {
        Self {
            name,
            source,
            volume: non_negative(volume),
            pitch: non_negative(pitch),
        }
    }
}

fn non_negative(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.max(0.0)
    }
}
