//! Viewer identity and shape model.
//!
//! A viewer is any recipient of messages the host knows about. The platform
//! never owns the host object; it keys registry entries on [`ViewerId`] and
//! resolution decisions on [`ViewerShape`].

use std::any::Any;
use std::fmt;
use uuid::Uuid;

/// Stable identity of a registered viewer.
///
/// Identity-bearing viewers (players) carry a unique id assigned by the
/// host; the console is an anonymous singleton and compares by variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewerId {
    /// A connected player.
    Player(Uuid),
    /// The host console.
    Console,
}

impl fmt::Display for ViewerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player(id) => write!(f, "player:{id}"),
            Self::Console => f.write_str("console"),
        }
    }
}

/// Runtime shape of a viewer.
///
/// Handler applicability is a property of the environment and viewer class,
/// not of the individual viewer, so resolution caches key on this tag. The
/// number of distinct shapes a process sees stays small regardless of how
/// many viewers connect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewerShape {
    /// A full in-game player.
    Player,
    /// The server console.
    Console,
    /// Any other message receiver the host wires in, tagged by the host.
    Other(&'static str),
}

impl ViewerShape {
    /// Label used in log fields.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::Console => "console",
            Self::Other(tag) => tag,
        }
    }
}

impl fmt::Display for ViewerShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A host-owned recipient of messages.
///
/// The platform needs only identity and shape. Handlers that must reach the
/// native object downcast through [`Viewer::as_any`].
pub trait Viewer: Send + Sync {
    /// Stable identity used as the registry key.
    fn id(&self) -> ViewerId;

    /// Runtime shape used as the resolution-cache key.
    fn shape(&self) -> ViewerShape;

    /// Access to the concrete host object for handler downcasts.
    fn as_any(&self) -> &dyn Any;
}
