//! Transfer memo — an opaque byte string carried through for off-ledger use.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque memo attached to a transfer.
///
/// The ledger never interprets memo bytes; they are passed through so the
/// host can log or index them off-ledger. Capped at [`Memo::MAX_LEN`] bytes
/// to match the host wire format.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memo(Vec<u8>);

impl Memo {
    /// Maximum memo length in bytes on the host wire format.
    pub const MAX_LEN: usize = 34;

    /// Create a memo from raw bytes.
    ///
    /// # Panics
    /// Panics if the byte string exceeds [`Memo::MAX_LEN`].
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        let bytes = bytes.into();
        assert!(bytes.len() <= Self::MAX_LEN, "memo exceeds {} bytes", Self::MAX_LEN);
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Memo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}
