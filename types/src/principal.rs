//! Principal type — the account identifier attributed by the host chain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A principal: an account identifier on the host chain.
///
/// Used both as the balance-table key and as the caller identity the host
/// attributes to each call. The ledger treats the identifier as an opaque,
/// comparable string; its encoding is owned by the host.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Principal(String);

impl Principal {
    /// Create a principal from a raw identifier string.
    ///
    /// # Panics
    /// Panics if the identifier is empty.
    pub fn new(raw: impl Into<String>) -> Self {
        let s = raw.into();
        assert!(!s.is_empty(), "principal identifier must be non-empty");
        Self(s)
    }

    /// Return the raw identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Principal {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
