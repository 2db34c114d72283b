//! Token parameters — the compiled-in metadata of the deployed ledger.

use crate::amount::TokenAmount;
use serde::{Deserialize, Serialize};

/// Compiled-in token metadata plus the one-time issuance amount.
///
/// Name, symbol, and decimals are constants of the deployed ledger, not
/// persisted state. The initial supply is credited once, at deploy time,
/// to the deployer's balance.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenParams {
    /// Human-readable token name.
    pub name: String,

    /// Ticker symbol.
    pub symbol: String,

    /// Number of decimal places in the raw-unit representation.
    pub decimals: u8,

    /// Raw units credited to the deployer at construction.
    pub initial_supply: TokenAmount,
}

impl TokenParams {
    /// WandeCoin defaults — the deployed configuration.
    ///
    /// 1,000,000,000,000,000 raw units at 6 decimals is one billion
    /// whole WANDE.
    pub fn wande_defaults() -> Self {
        Self {
            name: "WandeCoin".into(),
            symbol: "WANDE".into(),
            decimals: 6,
            initial_supply: TokenAmount::new(1_000_000_000_000_000),
        }
    }
}

/// Default is the WandeCoin configuration.
impl Default for TokenParams {
    fn default() -> Self {
        Self::wande_defaults()
    }
}
