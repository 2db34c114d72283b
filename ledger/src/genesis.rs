//! Ledger deployment — constructing the initial state.
//!
//! The ledger is constructed exactly once. The deploying principal becomes
//! the contract owner and receives the entire initial supply; no other
//! implicit issuance ever occurs.

use std::collections::HashMap;

use wande_types::{Principal, TokenParams};

use crate::ledger::TokenLedger;

/// Configuration for deploying a ledger.
pub struct DeployConfig {
    /// The principal deploying the contract. Becomes the owner and the
    /// holder of the entire initial supply.
    pub deployer: Principal,
    /// Token metadata and the one-time issuance amount.
    pub params: TokenParams,
}

/// Deploy a fresh ledger.
///
/// The resulting state is `owner = deployer`,
/// `balances = {deployer: initial_supply}`, `total_supply = initial_supply`,
/// and no token URI.
pub fn deploy(config: &DeployConfig) -> TokenLedger {
    let supply = config.params.initial_supply;
    let mut balances = HashMap::new();
    balances.insert(config.deployer.clone(), supply);

    tracing::info!(
        deployer = %config.deployer,
        supply = %supply,
        name = config.params.name.as_str(),
        "ledger deployed"
    );

    TokenLedger::from_parts(
        config.params.clone(),
        config.deployer.clone(),
        supply,
        balances,
        None,
    )
}
