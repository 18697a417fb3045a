//! Shared test doubles for the integration suite.
//!
//! Provides stand-in viewers, recording handlers, and a switchable provider
//! probe so tests can observe resolution and delivery decisions.

#![allow(dead_code)]

use herald::{
    CachedProbe, Handler, HandlerSet, PlatformConfig, ProviderProbe, Viewer, ViewerId,
    ViewerRegistry, ViewerShape,
};
use herald_proto::{BossBar, Message, Sound, Title};
use parking_lot::Mutex;
use std::any::Any;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use uuid::Uuid;

/// A stand-in host viewer.
pub struct TestViewer {
    id: ViewerId,
    shape: ViewerShape,
}

impl TestViewer {
    pub fn player() -> Arc<Self> {
        Self::player_with(Uuid::new_v4())
    }

    pub fn player_with(id: Uuid) -> Arc<Self> {
        Arc::new(Self {
            id: ViewerId::Player(id),
            shape: ViewerShape::Player,
        })
    }

    pub fn console() -> Arc<Self> {
        Arc::new(Self {
            id: ViewerId::Console,
            shape: ViewerShape::Console,
        })
    }
}

impl Viewer for TestViewer {
    fn id(&self) -> ViewerId {
        self.id
    }

    fn shape(&self) -> ViewerShape {
        self.shape
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Handler double that applies per a fixed predicate and records every
/// delivery it performs.
pub struct RecordingHandler<P> {
    name: &'static str,
    applies: fn(ViewerShape) -> bool,
    pub applies_calls: AtomicUsize,
    pub delivered: Mutex<Vec<(ViewerId, P)>>,
}

impl<P> RecordingHandler<P> {
    pub fn new(name: &'static str, applies: fn(ViewerShape) -> bool) -> Arc<Self> {
        Arc::new(Self {
            name,
            applies,
            applies_calls: AtomicUsize::new(0),
            delivered: Mutex::new(Vec::new()),
        })
    }

    pub fn applying_to_all(name: &'static str) -> Arc<Self> {
        Self::new(name, |_| true)
    }

    pub fn applying_to_none(name: &'static str) -> Arc<Self> {
        Self::new(name, |_| false)
    }

    pub fn count(&self) -> usize {
        self.delivered.lock().len()
    }

    pub fn delivered_ids(&self) -> Vec<ViewerId> {
        self.delivered.lock().iter().map(|(id, _)| *id).collect()
    }
}

impl<P: Clone + Send> Handler<P> for RecordingHandler<P> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn applies_to(&self, shape: ViewerShape) -> bool {
        self.applies_calls.fetch_add(1, Ordering::SeqCst);
        (self.applies)(shape)
    }

    fn deliver(&self, viewer: &dyn Viewer, payload: &P) {
        self.delivered.lock().push((viewer.id(), payload.clone()));
    }
}

/// Shared switchable state backing a [`SwitchProbe`].
#[derive(Default)]
pub struct ProbeState {
    pub up: AtomicBool,
    pub lookups: AtomicUsize,
}

/// Provider probe whose availability tests flip at will.
#[derive(Clone, Default)]
pub struct SwitchProbe {
    pub state: Arc<ProbeState>,
}

impl SwitchProbe {
    pub fn down() -> Self {
        Self::default()
    }

    pub fn up() -> Self {
        let probe = Self::default();
        probe.state.up.store(true, Ordering::SeqCst);
        probe
    }
}

impl ProviderProbe for SwitchProbe {
    type Handle = &'static str;

    fn available(&self) -> bool {
        self.state.up.load(Ordering::SeqCst)
    }

    fn resolve(&self) -> Option<&'static str> {
        self.state.lookups.fetch_add(1, Ordering::SeqCst);
        self.available().then_some("provider")
    }
}

/// Chat handler that applies only while its probe reports the provider
/// available, the way a compat-layer handler would.
pub struct GatedHandler {
    probe: Arc<CachedProbe<SwitchProbe>>,
    pub applies_calls: AtomicUsize,
    pub delivered: Mutex<Vec<(ViewerId, Message)>>,
}

impl GatedHandler {
    pub fn new(probe: Arc<CachedProbe<SwitchProbe>>) -> Arc<Self> {
        Arc::new(Self {
            probe,
            applies_calls: AtomicUsize::new(0),
            delivered: Mutex::new(Vec::new()),
        })
    }

    pub fn count(&self) -> usize {
        self.delivered.lock().len()
    }
}

impl Handler<Message> for GatedHandler {
    fn name(&self) -> &'static str {
        "compat_chat"
    }

    fn applies_to(&self, _shape: ViewerShape) -> bool {
        self.applies_calls.fetch_add(1, Ordering::SeqCst);
        self.probe.available()
    }

    fn deliver(&self, viewer: &dyn Viewer, payload: &Message) {
        self.delivered.lock().push((viewer.id(), payload.clone()));
    }
}

/// Registry with only the chat chain populated.
pub fn chat_registry(handlers: Vec<Arc<dyn Handler<Message>>>) -> ViewerRegistry {
    ViewerRegistry::new(
        PlatformConfig::default(),
        HandlerSet {
            chat: handlers,
            ..Default::default()
        },
    )
}

/// Recording handlers for every message kind.
pub struct RecordingSet {
    pub chat: Arc<RecordingHandler<Message>>,
    pub action_bar: Arc<RecordingHandler<Message>>,
    pub title: Arc<RecordingHandler<Title>>,
    pub boss_bar: Arc<RecordingHandler<BossBar>>,
    pub sound: Arc<RecordingHandler<Sound>>,
}

/// Registry with a recording handler on every chain.
pub fn recording_registry() -> (ViewerRegistry, RecordingSet) {
    let set = RecordingSet {
        chat: RecordingHandler::applying_to_all("chat"),
        action_bar: RecordingHandler::applying_to_all("action_bar"),
        title: RecordingHandler::applying_to_all("title"),
        boss_bar: RecordingHandler::applying_to_all("boss_bar"),
        sound: RecordingHandler::applying_to_all("sound"),
    };
    let registry = ViewerRegistry::new(
        PlatformConfig::default(),
        HandlerSet {
            chat: vec![set.chat.clone()],
            action_bar: vec![set.action_bar.clone()],
            title: vec![set.title.clone()],
            boss_bar: vec![set.boss_bar.clone()],
            sound: vec![set.sound.clone()],
        },
    );
    (registry, set)
}

/// Initialize test logging; safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
