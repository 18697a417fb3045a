//! Delivery handler contract.

use crate::viewer::{Viewer, ViewerShape};
use herald_proto::{BossBar, Message, Sound, Title};
use std::fmt;
use std::sync::Arc;

/// The message kinds the platform can route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    /// Chat messages.
    Chat,
    /// Action-bar text.
    ActionBar,
    /// Titles.
    Title,
    /// Boss bars.
    BossBar,
    /// Sounds.
    Sound,
}

impl MessageKind {
    /// Label used in log fields.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::ActionBar => "action_bar",
            Self::Title => "title",
            Self::BossBar => "boss_bar",
            Self::Sound => "sound",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One delivery strategy for one message kind.
///
/// Implementations are supplied by the host adaptation layer, immutable once
/// constructed, and free of side effects other than the delivery itself.
/// A handler that rides on an optional compatibility layer holds a
/// [`CachedProbe`](crate::CachedProbe) and declines to apply while the
/// provider is absent.
pub trait Handler<P>: Send + Sync {
    /// Label used in log fields.
    fn name(&self) -> &'static str;

    /// Whether this handler can serve viewers of the given shape.
    ///
    /// Invoked at most once per shape per chain; the outcome is memoized for
    /// the process lifetime.
    fn applies_to(&self, shape: ViewerShape) -> bool;

    /// Deliver the payload to the viewer. Fire-and-forget: delivery calls
    /// host primitives and must not block.
    fn deliver(&self, viewer: &dyn Viewer, payload: &P);
}

/// Preference-ordered handlers for every message kind, supplied by the host
/// at registry construction.
///
/// Order is most-capable first: a handler that can use a detected
/// compatibility layer goes before the plain native one, so enhanced
/// delivery wins whenever it applies and resolution falls back gracefully
/// otherwise.
#[derive(Default)]
pub struct HandlerSet {
    /// Chat handlers.
    pub chat: Vec<Arc<dyn Handler<Message>>>,
    /// Action-bar handlers.
    pub action_bar: Vec<Arc<dyn Handler<Message>>>,
    /// Title handlers.
    pub title: Vec<Arc<dyn Handler<Title>>>,
    /// Boss-bar handlers.
    pub boss_bar: Vec<Arc<dyn Handler<BossBar>>>,
    /// Sound handlers.
    pub sound: Vec<Arc<dyn Handler<Sound>>>,
}
