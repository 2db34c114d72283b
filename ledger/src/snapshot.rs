//! Ledger snapshots — the durable state surface.
//!
//! Four fields must round-trip through the host's storage: the balance
//! table, the total supply, the owner, and the token URI. A snapshot
//! captures exactly those, with balance rows in sorted order so the
//! integrity hash is deterministic, and verifies on the way back in so a
//! tampered or inconsistent snapshot can never become a live ledger.
//! Name, symbol, and decimals are compiled-in constants and are not
//! persisted.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use wande_types::{Principal, TokenAmount, TokenParams};

use crate::ledger::TokenLedger;

/// Snapshot format version for compatibility.
pub const SNAPSHOT_VERSION: u32 = 1;

/// A point-in-time capture of the ledger's durable state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    /// Blake2b-256 hash of the serialized state fields.
    pub hash: [u8; 32],
    /// Snapshot format version.
    pub version: u32,
    /// The contract owner at capture time.
    pub owner: Principal,
    /// The running total supply at capture time.
    pub total_supply: TokenAmount,
    /// The metadata URI, if one had been set.
    pub token_uri: Option<String>,
    /// Balance rows, sorted by account for a deterministic hash.
    pub balances: Vec<BalanceEntry>,
}

/// One row of the balance table.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BalanceEntry {
    pub account: Principal,
    pub balance: TokenAmount,
}

/// Why a snapshot could not be decoded or restored.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot decode failed: {0}")]
    Decode(String),

    #[error("snapshot hash does not match its contents")]
    HashMismatch,

    #[error("duplicate balance entry for account {0}")]
    DuplicateAccount(String),

    #[error("recorded supply {recorded} does not equal balance sum {computed}")]
    SupplyMismatch { recorded: u128, computed: u128 },
}

impl LedgerSnapshot {
    /// Capture the ledger's durable fields.
    pub fn capture(ledger: &TokenLedger) -> Self {
        // A zero balance and an absent entry are indistinguishable on the
        // read surface, so zero rows are not persisted.
        let mut balances: Vec<BalanceEntry> = ledger
            .balances()
            .filter(|(_, balance)| !balance.is_zero())
            .map(|(account, balance)| BalanceEntry {
                account: account.clone(),
                balance,
            })
            .collect();
        balances.sort_by(|a, b| a.account.cmp(&b.account));

        let mut snap = Self {
            hash: [0u8; 32],
            version: SNAPSHOT_VERSION,
            owner: ledger.contract_owner().clone(),
            total_supply: ledger.total_supply(),
            token_uri: ledger.token_uri().map(str::to_owned),
            balances,
        };
        snap.hash = snap.compute_hash();
        snap
    }

    /// Compute the Blake2b-256 hash of this snapshot deterministically.
    fn compute_hash(&self) -> [u8; 32] {
        use blake2::digest::consts::U32;
        use blake2::{Blake2b, Digest};

        let mut hasher = Blake2b::<U32>::new();
        hasher.update(&self.version.to_le_bytes());
        hasher.update(self.owner.as_str().as_bytes());
        hasher.update(&self.total_supply.raw().to_le_bytes());
        match &self.token_uri {
            Some(uri) => {
                hasher.update([1u8]);
                hasher.update(uri.as_bytes());
            }
            None => hasher.update([0u8]),
        }
        for entry in &self.balances {
            hasher.update(entry.account.as_str().as_bytes());
            hasher.update(&entry.balance.raw().to_le_bytes());
        }

        let result = hasher.finalize();
        let mut out = [0u8; 32];
        out.copy_from_slice(&result);
        out
    }

    /// Verify the snapshot hash matches the state it carries.
    pub fn verify(&self) -> bool {
        self.hash == self.compute_hash()
    }

    /// Serialize the snapshot to bytes (bincode).
    pub fn to_bytes(&self) -> Vec<u8> {
        bincode::serialize(self).expect("snapshot serialization should not fail")
    }

    /// Deserialize a snapshot from bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(|e| SnapshotError::Decode(e.to_string()))
    }

    /// Rebuild a live ledger from this snapshot.
    ///
    /// Rejects snapshots whose hash does not match, that carry duplicate
    /// accounts, or whose recorded supply does not equal the sum of the
    /// balance rows, so the conservation invariant holds for every ledger
    /// that can come out of storage. Metadata constants are compiled in,
    /// not read from the snapshot.
    pub fn restore(self) -> Result<TokenLedger, SnapshotError> {
        if !self.verify() {
            return Err(SnapshotError::HashMismatch);
        }

        let mut computed = TokenAmount::ZERO;
        let mut balances = HashMap::with_capacity(self.balances.len());
        for entry in self.balances {
            computed = computed
                .checked_add(entry.balance)
                .ok_or(SnapshotError::SupplyMismatch {
                    recorded: self.total_supply.raw(),
                    computed: u128::MAX,
                })?;
            if balances
                .insert(entry.account.clone(), entry.balance)
                .is_some()
            {
                return Err(SnapshotError::DuplicateAccount(
                    entry.account.to_string(),
                ));
            }
        }
        if computed != self.total_supply {
            return Err(SnapshotError::SupplyMismatch {
                recorded: self.total_supply.raw(),
                computed: computed.raw(),
            });
        }

        Ok(TokenLedger::from_parts(
            TokenParams::wande_defaults(),
            self.owner,
            self.total_supply,
            balances,
            self.token_uri,
        ))
    }

    /// Number of balance rows in this snapshot.
    pub fn account_count(&self) -> usize {
        self.balances.len()
    }
}
