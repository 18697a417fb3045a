//! Tracing utilities for delivery observability.

/// Standardized span constructors for platform operations.
pub mod spans {
    use crate::handler::MessageKind;
    use crate::viewer::ViewerId;
    use tracing::{info_span, Span};

    /// Create a span for one viewer's registration lifetime.
    pub fn viewer(id: ViewerId, shape: &str) -> Span {
        info_span!("viewer", id = %id, shape = shape)
    }

    /// Create a span for a targeted delivery.
    pub fn delivery(kind: MessageKind, viewer: ViewerId) -> Span {
        info_span!("delivery", kind = %kind, viewer = %viewer)
    }

    /// Create a span for a broadcast sweep over `viewers` facades.
    pub fn broadcast(kind: MessageKind, viewers: usize) -> Span {
        info_span!("broadcast", kind = %kind, viewers)
    }
}
