//! Per-viewer delivery facade.

use crate::chain::HandlerChain;
use crate::viewer::{Viewer, ViewerId, ViewerShape};
use chrono::{DateTime, Utc};
use herald_proto::{BossBar, Message, Sound, Title};
use std::sync::Arc;

/// Binds one connected viewer to the shared handler chains so callers can
/// send without re-resolving capability per call.
///
/// Created by [`ViewerRegistry::on_connect`](crate::ViewerRegistry::on_connect)
/// and dropped from the registry by
/// [`ViewerRegistry::on_disconnect`](crate::ViewerRegistry::on_disconnect).
/// Holding and using a facade after its viewer was removed is a caller
/// error, not a delivery failure; the contract leaves it undefined.
///
/// Kinds the viewer's shape cannot possibly support are left unbound; their
/// operations are no-ops.
pub struct ViewerFacade {
    viewer: Arc<dyn Viewer>,
    connected_at: DateTime<Utc>,
    chat: Option<Arc<HandlerChain<Message>>>,
    action_bar: Option<Arc<HandlerChain<Message>>>,
    title: Option<Arc<HandlerChain<Title>>>,
    boss_bar: Option<Arc<HandlerChain<BossBar>>>,
    sound: Option<Arc<HandlerChain<Sound>>>,
}

impl ViewerFacade {
    pub(crate) fn new(
        viewer: Arc<dyn Viewer>,
        chat: Option<Arc<HandlerChain<Message>>>,
        action_bar: Option<Arc<HandlerChain<Message>>>,
        title: Option<Arc<HandlerChain<Title>>>,
        boss_bar: Option<Arc<HandlerChain<BossBar>>>,
        sound: Option<Arc<HandlerChain<Sound>>>,
    ) -> Self {
        Self {
            viewer,
            connected_at: Utc::now(),
            chat,
            action_bar,
            title,
            boss_bar,
            sound,
        }
    }

    /// Identity of the bound viewer.
    pub fn id(&self) -> ViewerId {
        self.viewer.id()
    }

    /// Shape of the bound viewer.
    pub fn shape(&self) -> ViewerShape {
        self.viewer.shape()
    }

    /// The bound host viewer.
    pub fn viewer(&self) -> &Arc<dyn Viewer> {
        &self.viewer
    }

    /// When this facade was registered.
    pub fn connected_at(&self) -> DateTime<Utc> {
        self.connected_at
    }

    /// Send a chat message to the bound viewer.
    pub fn send_chat(&self, message: &Message) {
        if let Some(chain) = &self.chat {
            chain.deliver(self.viewer.as_ref(), message);
        }
    }

    /// Show action-bar text to the bound viewer.
    pub fn send_action_bar(&self, message: &Message) {
        if let Some(chain) = &self.action_bar {
            chain.deliver(self.viewer.as_ref(), message);
        }
    }

    /// Show a title to the bound viewer.
    pub fn show_title(&self, title: &Title) {
        if let Some(chain) = &self.title {
            chain.deliver(self.viewer.as_ref(), title);
        }
    }

    /// Show a boss bar to the bound viewer.
    pub fn show_boss_bar(&self, bar: &BossBar) {
        if let Some(chain) = &self.boss_bar {
            chain.deliver(self.viewer.as_ref(), bar);
        }
    }

    /// Play a sound for the bound viewer.
    pub fn play_sound(&self, sound: &Sound) {
        if let Some(chain) = &self.sound {
            chain.deliver(self.viewer.as_ref(), sound);
        }
    }
}
