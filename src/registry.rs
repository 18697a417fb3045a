//! Viewer lifecycle registry and broadcast operations.

use crate::chain::HandlerChain;
use crate::config::PlatformConfig;
use crate::facade::ViewerFacade;
use crate::handler::{HandlerSet, MessageKind};
use crate::telemetry;
use crate::viewer::{Viewer, ViewerId, ViewerShape};
use chrono::Utc;
use dashmap::DashMap;
use herald_proto::{BossBar, Message, Sound, Title};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// The shared handler chains, one per message kind.
///
/// Built once at registry construction and never mutated afterward except
/// for each chain's internal resolution cache.
pub struct ChainSet {
    /// Chat chain.
    pub chat: Arc<HandlerChain<Message>>,
    /// Action-bar chain.
    pub action_bar: Arc<HandlerChain<Message>>,
    /// Title chain.
    pub title: Arc<HandlerChain<Title>>,
    /// Boss-bar chain.
    pub boss_bar: Arc<HandlerChain<BossBar>>,
    /// Sound chain.
    pub sound: Arc<HandlerChain<Sound>>,
}

/// Tracks connected viewers and routes sends and broadcasts through the
/// shared handler chains.
///
/// Connect and disconnect signals originate from the host adaptation layer,
/// which calls [`on_connect`](Self::on_connect) /
/// [`on_disconnect`](Self::on_disconnect) from its own notifications; the
/// registry does not detect connectivity itself. Both entry points tolerate
/// duplicate signals.
pub struct ViewerRegistry {
    chains: ChainSet,
    viewers: DashMap<ViewerId, Arc<ViewerFacade>>,
    config: PlatformConfig,
}

impl ViewerRegistry {
    /// Build a registry from explicit configuration and preference-ordered
    /// handlers for each message kind.
    pub fn new(config: PlatformConfig, handlers: HandlerSet) -> Self {
        let chains = ChainSet {
            chat: Arc::new(HandlerChain::new(MessageKind::Chat, handlers.chat)),
            action_bar: Arc::new(HandlerChain::new(MessageKind::ActionBar, handlers.action_bar)),
            title: Arc::new(HandlerChain::new(MessageKind::Title, handlers.title)),
            boss_bar: Arc::new(HandlerChain::new(MessageKind::BossBar, handlers.boss_bar)),
            sound: Arc::new(HandlerChain::new(MessageKind::Sound, handlers.sound)),
        };

        info!(platform = %config.name, "viewer registry started");

        Self {
            chains,
            viewers: DashMap::new(),
            config,
        }
    }

    /// The configuration this registry was built with.
    pub fn config(&self) -> &PlatformConfig {
        &self.config
    }

    /// The shared chain for each message kind.
    pub fn chains(&self) -> &ChainSet {
        &self.chains
    }

    /// Number of registered viewers.
    pub fn len(&self) -> usize {
        self.viewers.len()
    }

    /// Whether no viewer is registered.
    pub fn is_empty(&self) -> bool {
        self.viewers.is_empty()
    }

    /// Register a viewer and build its facade.
    ///
    /// At most one live facade exists per identity: a connect signal for an
    /// id that is still registered replaces the old facade rather than
    /// creating a second one.
    pub fn on_connect(&self, viewer: Arc<dyn Viewer>) -> Arc<ViewerFacade> {
        let id = viewer.id();
        let shape = viewer.shape();
        let facade = Arc::new(self.facade_for(viewer));

        if self.viewers.insert(id, Arc::clone(&facade)).is_some() {
            warn!(viewer = %id, "replaced live facade on duplicate connect");
        }
        debug!(viewer = %id, shape = %shape, "viewer connected");
        facade
    }

    /// Drop the facade registered under `id`.
    ///
    /// Disconnect signals are not assumed deduplicated: removing an id that
    /// was never added, or was already removed, is a no-op.
    pub fn on_disconnect(&self, id: &ViewerId) {
        match self.viewers.remove(id) {
            Some((_, facade)) => {
                let session_secs = (Utc::now() - facade.connected_at()).num_seconds();
                debug!(viewer = %id, session_secs, "viewer disconnected");
            }
            None => debug!(viewer = %id, "disconnect for unknown viewer ignored"),
        }
    }

    /// Facade for a single viewer, for targeted sends.
    pub fn viewer(&self, id: &ViewerId) -> Option<Arc<ViewerFacade>> {
        self.viewers.get(id).map(|entry| Arc::clone(entry.value()))
    }

    /// Run `action` over a point-in-time snapshot of registered facades.
    ///
    /// Concurrent connects and disconnects are tolerated: a sweep begun
    /// after a removal completes never observes the removed facade, and one
    /// begun concurrently sees either outcome.
    pub fn for_each(&self, mut action: impl FnMut(&ViewerFacade)) {
        let snapshot: Vec<Arc<ViewerFacade>> = self
            .viewers
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();
        for facade in &snapshot {
            action(facade);
        }
    }

    /// Send a chat message to every registered viewer.
    pub fn broadcast_chat(&self, message: &Message) {
        let _span = telemetry::spans::broadcast(MessageKind::Chat, self.len()).entered();
        self.for_each(|facade| facade.send_chat(message));
    }

    /// Show action-bar text to every registered viewer.
    pub fn broadcast_action_bar(&self, message: &Message) {
        let _span = telemetry::spans::broadcast(MessageKind::ActionBar, self.len()).entered();
        self.for_each(|facade| facade.send_action_bar(message));
    }

    /// Show a title to every registered viewer.
    pub fn broadcast_title(&self, title: &Title) {
        let _span = telemetry::spans::broadcast(MessageKind::Title, self.len()).entered();
        self.for_each(|facade| facade.show_title(title));
    }

    /// Show a boss bar to every registered viewer.
    pub fn broadcast_boss_bar(&self, bar: &BossBar) {
        let _span = telemetry::spans::broadcast(MessageKind::BossBar, self.len()).entered();
        self.for_each(|facade| facade.show_boss_bar(bar));
    }

    /// Play a sound for every registered viewer.
    pub fn broadcast_sound(&self, sound: &Sound) {
        let _span = telemetry::spans::broadcast(MessageKind::Sound, self.len()).entered();
        self.for_each(|facade| facade.play_sound(sound));
    }

    /// Bind the chains a viewer of this shape can possibly support.
    ///
    /// Players take everything; the console and other plain receivers take
    /// text only.
    fn facade_for(&self, viewer: Arc<dyn Viewer>) -> ViewerFacade {
        match viewer.shape() {
            ViewerShape::Player => ViewerFacade::new(
                viewer,
                Some(Arc::clone(&self.chains.chat)),
                Some(Arc::clone(&self.chains.action_bar)),
                Some(Arc::clone(&self.chains.title)),
                Some(Arc::clone(&self.chains.boss_bar)),
                Some(Arc::clone(&self.chains.sound)),
            ),
            ViewerShape::Console | ViewerShape::Other(_) => ViewerFacade::new(
                viewer,
                Some(Arc::clone(&self.chains.chat)),
                Some(Arc::clone(&self.chains.action_bar)),
                None,
                None,
                None,
            ),
        }
    }
}
