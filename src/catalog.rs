//! Host catalog name translation.
//!
//! Hosts identify colors, overlays, and sound sources by their own catalog
//! names. Handlers build a [`NameTable`] per kind at construction time and
//! translate through it when delivering.

use crate::error::CatalogError;
use std::fmt;

/// Immutable bidirectional table between platform values and the names a
/// host catalog knows them by.
///
/// A failed lookup here is a real mismatch between the expected and actual
/// environment, not an expected capability gap, so both directions fail
/// loudly instead of degrading.
pub struct NameTable<T> {
    kind: &'static str,
    entries: Vec<(&'static str, T)>,
}

impl<T: Copy + PartialEq + fmt::Debug> NameTable<T> {
    /// Build a table for `kind` (used in error messages) from name/value
    /// pairs.
    pub fn new(kind: &'static str, entries: Vec<(&'static str, T)>) -> Self {
        Self { kind, entries }
    }

    /// The value registered under a host name.
    pub fn value_of(&self, name: &str) -> Result<T, CatalogError> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
            .ok_or_else(|| CatalogError::UnknownName {
                kind: self.kind,
                name: name.to_string(),
            })
    }

    /// The host name registered for a value.
    pub fn name_of(&self, value: T) -> Result<&'static str, CatalogError> {
        self.entries
            .iter()
            .find(|(_, v)| *v == value)
            .map(|(n, _)| *n)
            .ok_or_else(|| CatalogError::UnknownValue {
                kind: self.kind,
                value: format!("{value:?}"),
            })
    }
}
