//! Optional-provider probing.
//!
//! A probe answers "is optional compatibility layer X present, and if so
//! hand me its provider object". Handlers that ride on such a layer hold a
//! [`CachedProbe`] and decline to apply while the provider is absent,
//! letting resolution fall through to a native handler.
//!
//! Availability is re-checked on every access; only a successfully resolved
//! handle is cached, since a provider may load after the registry starts.
//! [`ProbeConfig::cache_absent`](crate::config::ProbeConfig) opts into
//! treating the first negative result as permanent.

use crate::config::ProbeConfig;
use crate::viewer::{Viewer, ViewerId};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;
use uuid::Uuid;

/// Host-implemented lookup for one optional compatibility layer.
pub trait ProviderProbe: Send + Sync {
    /// The resolved provider object.
    type Handle: Clone + Send + Sync;

    /// Cheap existence check. Called on every resolution attempt, so this
    /// must not do real work.
    fn available(&self) -> bool;

    /// Look up the provider object. May be expensive; invoked only until it
    /// first succeeds.
    fn resolve(&self) -> Option<Self::Handle>;

    /// Stable id the provider knows a viewer by.
    ///
    /// `None` for viewers the provider cannot serve. The default accepts
    /// identity-bearing viewers only.
    fn viewer_uuid(&self, viewer: &dyn Viewer) -> Option<Uuid> {
        match viewer.id() {
            ViewerId::Player(id) => Some(id),
            ViewerId::Console => None,
        }
    }
}

/// Caching wrapper around a [`ProviderProbe`].
///
/// The handle cell is single-assignment in effect: two threads racing to
/// resolve an unresolved provider both compute the same handle and one write
/// wins, which is a correct outcome rather than an error.
pub struct CachedProbe<P: ProviderProbe> {
    probe: P,
    handle: RwLock<Option<P::Handle>>,
    absent: AtomicBool,
    cache_absent: bool,
}

impl<P: ProviderProbe> CachedProbe<P> {
    /// Wrap a probe under the given caching policy.
    pub fn new(probe: P, config: &ProbeConfig) -> Self {
        Self {
            probe,
            handle: RwLock::new(None),
            absent: AtomicBool::new(false),
            cache_absent: config.cache_absent,
        }
    }

    /// Whether the provider is currently present.
    pub fn available(&self) -> bool {
        if self.cache_absent && self.absent.load(Ordering::Relaxed) {
            return false;
        }
        let up = self.probe.available();
        if !up && self.cache_absent {
            self.absent.store(true, Ordering::Relaxed);
        }
        up
    }

    /// The provider handle, if the provider is present and resolvable.
    ///
    /// Returns `None` whenever [`available`](Self::available) is false.
    pub fn handle(&self) -> Option<P::Handle> {
        if let Some(handle) = self.handle.read().clone() {
            return Some(handle);
        }
        if !self.available() {
            return None;
        }
        match self.probe.resolve() {
            Some(handle) => {
                *self.handle.write() = Some(handle.clone());
                Some(handle)
            }
            None => {
                debug!("provider reported available but lookup returned nothing");
                if self.cache_absent {
                    self.absent.store(true, Ordering::Relaxed);
                }
                None
            }
        }
    }

    /// Stable id the provider knows a viewer by, if any.
    pub fn viewer_uuid(&self, viewer: &dyn Viewer) -> Option<Uuid> {
        self.probe.viewer_uuid(viewer)
    }
}
