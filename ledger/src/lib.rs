//! WandeCoin token ledger.
//!
//! A single balance table plus a handful of scalar fields, mutated only
//! through guarded state transitions. The host execution environment
//! invokes operations atomically and serially, one call at a time, and
//! supplies the caller identity for every call; the ledger itself needs
//! no locking and no async machinery.

pub mod call;
pub mod error;
pub mod genesis;
pub mod ledger;
pub mod snapshot;

pub use call::{dispatch, Call, CallResult, Value};
pub use error::{
    LedgerError, ERR_INSUFFICIENT_BALANCE, ERR_NOT_TOKEN_OWNER, ERR_OWNER_ONLY, ERR_SUPPLY_OVERFLOW,
};
pub use genesis::{deploy, DeployConfig};
pub use ledger::TokenLedger;
pub use snapshot::{BalanceEntry, LedgerSnapshot, SnapshotError};
