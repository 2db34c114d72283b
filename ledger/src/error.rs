//! Ledger error taxonomy.
//!
//! Every rejection carries a stable numeric code that the host surfaces
//! unchanged to its caller. Codes 100 through 102 are fixed by the deployed
//! contract surface; external integrations match on them and the values
//! must never change across versions. Code 103 rejects arithmetic
//! overflow explicitly instead of aborting.

use thiserror::Error;

/// Owner-gated operation invoked by a non-owner.
pub const ERR_OWNER_ONLY: u32 = 100;
/// Transfer invoked by someone other than the declared sender.
pub const ERR_NOT_TOKEN_OWNER: u32 = 101;
/// Transfer or burn would drive a balance below zero.
pub const ERR_INSUFFICIENT_BALANCE: u32 = 102;
/// Mint would overflow the supply width.
pub const ERR_SUPPLY_OVERFLOW: u32 = 103;

/// A rejected state transition.
///
/// Each variant is a deterministic, final rejection of the requested
/// transition, not a transient fault. No operation partially applies
/// before returning one of these.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("caller is not the contract owner")]
    OwnerOnly,

    #[error("caller {caller} does not own the funds declared by sender {sender}")]
    NotTokenOwner { caller: String, sender: String },

    #[error("insufficient balance: need {needed}, have {available}")]
    InsufficientBalance { needed: u128, available: u128 },

    #[error("applying {amount} raw units would overflow the supply width")]
    SupplyOverflow { amount: u128 },
}

impl LedgerError {
    /// The stable numeric code the host returns to its caller.
    pub fn code(&self) -> u32 {
        match self {
            LedgerError::OwnerOnly => ERR_OWNER_ONLY,
            LedgerError::NotTokenOwner { .. } => ERR_NOT_TOKEN_OWNER,
            LedgerError::InsufficientBalance { .. } => ERR_INSUFFICIENT_BALANCE,
            LedgerError::SupplyOverflow { .. } => ERR_SUPPLY_OVERFLOW,
        }
    }
}
