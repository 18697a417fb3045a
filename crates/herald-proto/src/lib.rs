//! # herald-proto
//!
//! Payload types for the herald delivery platform.
//!
//! Every message kind the platform can route has a payload type here:
//! chat and action-bar text ([`Message`]), titles ([`Title`]), boss bars
//! ([`BossBar`]) and sounds ([`Sound`]), plus the namespaced [`Key`] type
//! that identifies catalog entries such as sound events.
//!
//! These types carry content only. Rendering, styling, and the wire shape a
//! host uses to show them are host concerns and deliberately absent.
//!
//! ## Quick Start
//!
//! ```rust
//! use herald_proto::{BossBar, BossBarColor, BossBarOverlay, Message, Sound, SoundSource};
//!
//! let greeting = Message::text("welcome aboard");
//! assert_eq!(greeting.content(), "welcome aboard");
//!
//! // Progress is clamped into [0.0, 1.0].
//! let bar = BossBar::new(
//!     Message::text("raid"),
//!     1.7,
//!     BossBarColor::Red,
//!     BossBarOverlay::Notched10,
//! );
//! assert_eq!(bar.progress(), 1.0);
//!
//! let chime: Sound = Sound::new(
//!     "ui/chime".parse().expect("valid key"),
//!     SoundSource::Master,
//!     1.0,
//!     1.0,
//! );
//! assert_eq!(chime.name.to_string(), "herald:ui/chime");
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod bossbar;
pub mod error;
pub mod key;
pub mod message;
pub mod sound;
pub mod title;

pub use bossbar::{BossBar, BossBarColor, BossBarOverlay};
pub use error::{KeyError, UnknownName};
pub use key::{Key, DEFAULT_NAMESPACE};
pub use message::Message;
pub use sound::{Sound, SoundSource};
pub use title::{Title, TitleTimes};
