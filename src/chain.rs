//! Handler resolution and dispatch for one message kind.

use crate::handler::{Handler, MessageKind};
use crate::viewer::{Viewer, ViewerShape};
use dashmap::DashMap;
use std::sync::Arc;
use tracing::{debug, trace};

/// Preference-ordered handlers for one message kind, with per-shape
/// resolution memoized.
///
/// The handler list is immutable after construction and walked
/// first-match-wins. The cache maps a viewer shape to the index of the first
/// applicable handler ("none applies" is a cached outcome too) and is never
/// invalidated: applicability is a property of the environment and shape,
/// fixed for the process lifetime. Probe-gated handlers therefore see the
/// probe's state as of the first resolution for a shape, which also bounds
/// `applies_to` to at most one call per handler per shape.
pub struct HandlerChain<P> {
    kind: MessageKind,
    handlers: Vec<Arc<dyn Handler<P>>>,
    resolved: DashMap<ViewerShape, Option<usize>>,
}

impl<P> HandlerChain<P> {
    /// Build a chain from handlers in preference order, most capable first.
    pub fn new(kind: MessageKind, handlers: Vec<Arc<dyn Handler<P>>>) -> Self {
        Self {
            kind,
            handlers,
            resolved: DashMap::new(),
        }
    }

    /// The message kind this chain routes.
    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    /// First handler applicable to the shape, memoized per shape.
    pub fn resolve(&self, shape: ViewerShape) -> Option<Arc<dyn Handler<P>>> {
        let slot = *self.resolved.entry(shape).or_insert_with(|| {
            let slot = self.handlers.iter().position(|h| h.applies_to(shape));
            match slot {
                Some(i) => trace!(
                    kind = %self.kind,
                    shape = %shape,
                    handler = self.handlers[i].name(),
                    "resolved delivery handler"
                ),
                None => debug!(kind = %self.kind, shape = %shape, "no delivery handler applies"),
            }
            slot
        });
        slot.map(|i| Arc::clone(&self.handlers[i]))
    }

    /// Deliver the payload to the viewer through the resolved handler.
    ///
    /// A shape no handler serves is an expected degradation, not an error:
    /// the call is a no-op.
    pub fn deliver(&self, viewer: &dyn Viewer, payload: &P) {
        if let Some(handler) = self.resolve(viewer.shape()) {
            trace!(
                kind = %self.kind,
                viewer = %viewer.id(),
                handler = handler.name(),
                "deliver"
            );
            handler.deliver(viewer, payload);
        }
    }
}
