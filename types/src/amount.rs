//! Token amount type.
//!
//! Amounts are represented as fixed-point integers (u128) to avoid floating-point errors.
//! The smallest unit is 1 raw; one whole WANDE is `TOKEN_UNIT` raw (6 decimals).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Raw units per whole WANDE token (10^6, matching the token's 6 decimals).
pub const TOKEN_UNIT: u128 = 1_000_000;

/// A WandeCoin amount in raw units.
///
/// Internally stored as raw units (u128) for precision. Ledger arithmetic
/// goes through the checked constructors so underflow and overflow fail
/// closed instead of wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TokenAmount(u128);

impl TokenAmount {
    pub const ZERO: Self = Self(0);

    pub fn new(raw: u128) -> Self {
        Self(raw)
    }

    /// Convert a whole-token count into raw units.
    pub fn from_whole(units: u128) -> Self {
        Self(units * TOKEN_UNIT)
    }

    /// Truncating conversion back to whole tokens.
    pub fn to_whole(self) -> u128 {
        self.0 / TOKEN_UNIT
    }

    pub fn raw(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl Add for TokenAmount {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for TokenAmount {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
