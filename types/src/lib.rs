//! Fundamental types for the WandeCoin ledger.
//!
//! This crate defines the core types shared across the workspace:
//! principals, token amounts, transfer memos, and token parameters.

pub mod amount;
pub mod memo;
pub mod params;
pub mod principal;

pub use amount::{TokenAmount, TOKEN_UNIT};
pub use memo::Memo;
pub use params::TokenParams;
pub use principal::Principal;
