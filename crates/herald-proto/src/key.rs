//! Namespaced identifiers for catalog entries.

use crate::error::KeyError;
use std::fmt;
use std::str::FromStr;

/// Namespace applied when parsing a bare value with no `namespace:` part.
pub const DEFAULT_NAMESPACE: &str = "herald";

/// A namespaced identifier such as `herald:ui/chime`.
///
/// Namespaces may contain `[a-z0-9_.-]`; values additionally allow `/`.
/// Both parts must be non-empty.
///
/// ```rust
/// use herald_proto::Key;
///
/// let key: Key = "audio:alarm/low".parse().unwrap();
/// assert_eq!(key.namespace(), "audio");
/// assert_eq!(key.value(), "alarm/low");
///
/// // A bare value picks up the default namespace.
/// let bare: Key = "alarm".parse().unwrap();
/// assert_eq!(bare.to_string(), "herald:alarm");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Key {
    namespace: String,
    value: String,
}

impl Key {
    /// Create a key from a namespace and value, validating both parts.
    pub fn new(namespace: impl Into<String>, value: impl Into<String>) -> Result<Self, KeyError> {
        let namespace = namespace.into();
        let value = value.into();

        if namespace.is_empty() || !namespace.bytes().all(is_namespace_byte) {
            return Err(KeyError::InvalidNamespace(namespace));
        }
        if value.is_empty() || !value.bytes().all(is_value_byte) {
            return Err(KeyError::InvalidValue(value));
        }

        Ok(Self { namespace, value })
    }

    /// The namespace part.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The value part.
    pub fn value(&self) -> &str {
        &self.value
    }
}

fn is_namespace_byte(b: u8) -> bool {
    matches!(b, b'a'..=b'z' | b'0'..=b'9' | b'_' | b'.' | b'-')
}

fn is_value_byte(b: u8) -> bool {
    is_namespace_byte(b) || b == b'/'
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.value)
    }
}

impl FromStr for Key {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((namespace, value)) => Self::new(namespace, value),
            None => Self::new(DEFAULT_NAMESPACE, s),
        }
    }
}
