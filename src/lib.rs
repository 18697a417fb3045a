//! herald - capability-probed message delivery.
//!
//! A registry that tracks connected viewers (players, the console, arbitrary
//! receivers) and, per viewer shape and per message kind, picks the best
//! available delivery handler from a preference-ordered list: handlers that
//! ride on an optional compatibility layer win when its probe finds one,
//! with graceful fallback to native delivery otherwise. Decisions are
//! memoized per shape, so steady-state sends pay no resolution cost, and
//! facades are created and dropped as viewers connect and disconnect.
//!
//! The host adaptation layer supplies the moving parts: concrete
//! [`Handler`]s per message kind, a [`ProviderProbe`] per optional
//! compatibility layer, and connect/disconnect signals wired into
//! [`ViewerRegistry::on_connect`] / [`ViewerRegistry::on_disconnect`].
//!
//! ```rust,ignore
//! let config = PlatformConfig::load("herald.toml")?;
//! let probe = Arc::new(CachedProbe::new(MyCompatProbe::new(), &config.probe));
//!
//! let registry = ViewerRegistry::new(config, HandlerSet {
//!     chat: vec![Arc::new(CompatChat::new(probe.clone())), Arc::new(NativeChat)],
//!     ..Default::default()
//! });
//!
//! // From the host's connect notification:
//! registry.on_connect(Arc::new(player));
//! registry.broadcast_chat(&Message::text("server restarting soon"));
//! ```

pub mod catalog;
pub mod chain;
pub mod config;
pub mod error;
pub mod facade;
pub mod handler;
pub mod probe;
pub mod registry;
pub mod telemetry;
pub mod viewer;

pub use catalog::NameTable;
pub use chain::HandlerChain;
pub use config::{ConfigError, PlatformConfig, ProbeConfig};
pub use error::CatalogError;
pub use facade::ViewerFacade;
pub use handler::{Handler, HandlerSet, MessageKind};
pub use probe::{CachedProbe, ProviderProbe};
pub use registry::{ChainSet, ViewerRegistry};
pub use viewer::{Viewer, ViewerId, ViewerShape};
