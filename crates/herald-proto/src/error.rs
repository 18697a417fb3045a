//! Error types for payload construction and parsing.

use thiserror::Error;

/// Errors from constructing or parsing a namespaced [`Key`](crate::Key).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// The namespace was empty or contained a character outside `[a-z0-9_.-]`.
    #[error("invalid key namespace {0:?}")]
    InvalidNamespace(String),

    /// The value was empty or contained a character outside `[a-z0-9_.-/]`.
    #[error("invalid key value {0:?}")]
    InvalidValue(String),
}

/// A name that no value of the expected kind is registered under.
///
/// Returned when parsing catalog-named enums such as
/// [`BossBarColor`](crate::BossBarColor) from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} name {name:?}")]
pub struct UnknownName {
    /// What kind of value was being looked up (for the error message).
    pub kind: &'static str,
    /// The name that failed to resolve.
    pub name: String,
}

impl UnknownName {
    /// Build an error for a failed `kind` lookup of `name`.
    pub fn new(kind: &'static str, name: &str) -> Self {
        Self {
            kind,
            name: name.to_string(),
        }
    }
}
