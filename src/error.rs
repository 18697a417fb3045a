//! Error types for the delivery platform.
//!
//! Missing capability is not represented here at all: a viewer shape no
//! handler serves degrades silently by design. Errors are reserved for
//! genuine environment mismatches.

use thiserror::Error;

/// Errors translating between platform values and host catalog names.
///
/// A failed translation means the running environment does not match what
/// the caller was configured for, so it surfaces immediately instead of
/// being swallowed like a capability gap.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No value of the expected kind is registered under the given name.
    #[error("no {kind} value is registered under the name {name:?}")]
    UnknownName {
        /// What kind of value was being looked up.
        kind: &'static str,
        /// The name that failed to resolve.
        name: String,
    },

    /// The value has no registered host name.
    #[error("{kind} value {value} has no registered host name")]
    UnknownValue {
        /// What kind of value was being looked up.
        kind: &'static str,
        /// Debug rendering of the unmapped value.
        value: String,
    },
}
