//! The token ledger core — one balance table plus scalar fields.
//!
//! Every mutating operation takes the caller identity as an explicit
//! parameter, so authorization checks are pure and unit-testable without a
//! simulated host. All preconditions are evaluated before any field is
//! touched: an operation either fully applies or returns a typed error
//! with no observable partial update.

use std::collections::HashMap;

use wande_types::{Memo, Principal, TokenAmount, TokenParams};

use crate::error::LedgerError;

/// The WandeCoin ledger.
///
/// Holds all mutable state: the balance table, the running total supply,
/// the contract owner, and the optional metadata URI. Name, symbol, and
/// decimals are compiled-in constants carried by [`TokenParams`].
pub struct TokenLedger {
    params: TokenParams,
    owner: Principal,
    total_supply: TokenAmount,
    balances: HashMap<Principal, TokenAmount>,
    token_uri: Option<String>,
}

impl TokenLedger {
    pub(crate) fn from_parts(
        params: TokenParams,
        owner: Principal,
        total_supply: TokenAmount,
        balances: HashMap<Principal, TokenAmount>,
        token_uri: Option<String>,
    ) -> Self {
        Self {
            params,
            owner,
            total_supply,
            balances,
            token_uri,
        }
    }

    // ── Read-only operations ─────────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.params.name
    }

    pub fn symbol(&self) -> &str {
        &self.params.symbol
    }

    pub fn decimals(&self) -> u8 {
        self.params.decimals
    }

    pub fn total_supply(&self) -> TokenAmount {
        self.total_supply
    }

    pub fn contract_owner(&self) -> &Principal {
        &self.owner
    }

    /// Balance of an account. Accounts absent from the table read as zero;
    /// a persisted zero entry and an absent entry are indistinguishable.
    pub fn balance(&self, account: &Principal) -> TokenAmount {
        self.balances
            .get(account)
            .copied()
            .unwrap_or(TokenAmount::ZERO)
    }

    /// The metadata URI, absent until first set.
    pub fn token_uri(&self) -> Option<&str> {
        self.token_uri.as_deref()
    }

    /// Iterate the existing balance-table entries.
    pub fn balances(&self) -> impl Iterator<Item = (&Principal, TokenAmount)> {
        self.balances.iter().map(|(account, amount)| (account, *amount))
    }

    // ── Mutating operations ──────────────────────────────────────────────

    /// Move `amount` from `sender` to `recipient`.
    ///
    /// The caller must be the sender: no delegated or approved transfers
    /// exist. The memo is pass-through; it is logged for off-ledger use and
    /// never affects state. A zero-amount transfer succeeds as a no-op.
    pub fn transfer(
        &mut self,
        caller: &Principal,
        amount: TokenAmount,
        sender: &Principal,
        recipient: &Principal,
        memo: Option<&Memo>,
    ) -> Result<(), LedgerError> {
        if caller != sender {
            return Err(LedgerError::NotTokenOwner {
                caller: caller.to_string(),
                sender: sender.to_string(),
            });
        }

        let available = self.balance(sender);
        let debited = available
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientBalance {
                needed: amount.raw(),
                available: available.raw(),
            })?;
        // The credit is computed against the post-debit balance so a
        // self-transfer nets out instead of double-counting. Overflow here
        // is unreachable while the supply invariant holds (any balance is
        // bounded by the total supply), but it still fails closed.
        let recipient_base = if recipient == sender {
            debited
        } else {
            self.balance(recipient)
        };
        let credited = recipient_base
            .checked_add(amount)
            .ok_or(LedgerError::SupplyOverflow {
                amount: amount.raw(),
            })?;

        self.balances.insert(sender.clone(), debited);
        self.balances.insert(recipient.clone(), credited);

        if let Some(memo) = memo {
            tracing::debug!(memo = %memo, "transfer memo");
        }
        tracing::debug!(
            sender = %sender,
            recipient = %recipient,
            amount = %amount,
            "transfer applied"
        );
        Ok(())
    }

    /// Create `amount` new units on `recipient`'s balance. Owner only.
    pub fn mint(
        &mut self,
        caller: &Principal,
        amount: TokenAmount,
        recipient: &Principal,
    ) -> Result<(), LedgerError> {
        self.require_owner(caller)?;

        let supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(LedgerError::SupplyOverflow {
                amount: amount.raw(),
            })?;
        let credited = self
            .balance(recipient)
            .checked_add(amount)
            .ok_or(LedgerError::SupplyOverflow {
                amount: amount.raw(),
            })?;

        self.total_supply = supply;
        self.balances.insert(recipient.clone(), credited);

        tracing::debug!(
            recipient = %recipient,
            amount = %amount,
            supply = %self.total_supply,
            "mint applied"
        );
        Ok(())
    }

    /// Destroy `amount` units from the caller's own balance.
    ///
    /// There is no recipient argument: the implicit account is the caller.
    pub fn burn(&mut self, caller: &Principal, amount: TokenAmount) -> Result<(), LedgerError> {
        let available = self.balance(caller);
        let debited = available
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientBalance {
                needed: amount.raw(),
                available: available.raw(),
            })?;
        // total_supply bounds every individual balance, so this cannot
        // underflow once the balance check passed.
        let supply = self
            .total_supply
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientBalance {
                needed: amount.raw(),
                available: self.total_supply.raw(),
            })?;

        self.balances.insert(caller.clone(), debited);
        self.total_supply = supply;

        tracing::debug!(
            account = %caller,
            amount = %amount,
            supply = %self.total_supply,
            "burn applied"
        );
        Ok(())
    }

    /// Point the token metadata URI at a new location. Owner only.
    pub fn set_token_uri(&mut self, caller: &Principal, uri: String) -> Result<(), LedgerError> {
        self.require_owner(caller)?;
        self.token_uri = Some(uri);
        tracing::debug!(uri = self.token_uri.as_deref(), "token URI updated");
        Ok(())
    }

    /// Hand the contract over to a new owner. Owner only.
    ///
    /// Takes effect immediately for all subsequent calls; the call that
    /// performs the transfer itself still ran as the old owner.
    pub fn transfer_ownership(
        &mut self,
        caller: &Principal,
        new_owner: Principal,
    ) -> Result<(), LedgerError> {
        self.require_owner(caller)?;
        tracing::info!(old_owner = %self.owner, new_owner = %new_owner, "ownership transferred");
        self.owner = new_owner;
        Ok(())
    }

    /// The single authorization gate for owner-only operations.
    fn require_owner(&self, caller: &Principal) -> Result<(), LedgerError> {
        if caller != &self.owner {
            return Err(LedgerError::OwnerOnly);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genesis::{deploy, DeployConfig};

    fn deployer() -> Principal {
        Principal::new("ST_DEPLOYER")
    }

    fn wallet(n: u8) -> Principal {
        Principal::new(format!("ST_WALLET_{n}"))
    }

    fn fresh_ledger() -> TokenLedger {
        deploy(&DeployConfig {
            deployer: deployer(),
            params: TokenParams::wande_defaults(),
        })
    }

    fn balances_total(ledger: &TokenLedger) -> u128 {
        ledger.balances().map(|(_, amount)| amount.raw()).sum()
    }

    #[test]
    fn transfer_moves_value_and_conserves_supply() {
        let mut ledger = fresh_ledger();
        let supply_before = ledger.total_supply();

        ledger
            .transfer(
                &deployer(),
                TokenAmount::new(1_000_000),
                &deployer(),
                &wallet(1),
                None,
            )
            .unwrap();

        assert_eq!(ledger.balance(&wallet(1)).raw(), 1_000_000);
        assert_eq!(
            ledger.balance(&deployer()),
            supply_before - TokenAmount::new(1_000_000)
        );
        assert_eq!(ledger.total_supply(), supply_before);
        assert_eq!(balances_total(&ledger), supply_before.raw());
    }

    #[test]
    fn transfer_requires_caller_to_be_sender() {
        let mut ledger = fresh_ledger();
        let before = ledger.balance(&deployer());

        let err = ledger
            .transfer(
                &wallet(1),
                TokenAmount::new(1_000_000),
                &deployer(),
                &wallet(2),
                None,
            )
            .unwrap_err();

        assert_eq!(err.code(), 101);
        assert_eq!(ledger.balance(&deployer()), before);
        assert!(ledger.balance(&wallet(2)).is_zero());
    }

    #[test]
    fn transfer_rejects_insufficient_balance_without_state_change() {
        let mut ledger = fresh_ledger();

        let err = ledger
            .transfer(
                &wallet(1),
                TokenAmount::new(42),
                &wallet(1),
                &wallet(2),
                None,
            )
            .unwrap_err();

        assert_eq!(
            err,
            LedgerError::InsufficientBalance {
                needed: 42,
                available: 0,
            }
        );
        assert!(ledger.balance(&wallet(2)).is_zero());
        assert_eq!(balances_total(&ledger), ledger.total_supply().raw());
    }

    #[test]
    fn zero_transfer_is_a_successful_noop() {
        let mut ledger = fresh_ledger();
        let before = ledger.balance(&deployer());

        ledger
            .transfer(&wallet(1), TokenAmount::ZERO, &wallet(1), &wallet(2), None)
            .unwrap();
        ledger
            .transfer(&deployer(), TokenAmount::ZERO, &deployer(), &wallet(1), None)
            .unwrap();

        assert_eq!(ledger.balance(&deployer()), before);
        assert!(ledger.balance(&wallet(1)).is_zero());
        assert!(ledger.balance(&wallet(2)).is_zero());
    }

    #[test]
    fn self_transfer_leaves_balance_unchanged() {
        let mut ledger = fresh_ledger();
        let before = ledger.balance(&deployer());

        ledger
            .transfer(
                &deployer(),
                TokenAmount::new(5_000),
                &deployer(),
                &deployer(),
                None,
            )
            .unwrap();

        assert_eq!(ledger.balance(&deployer()), before);
        assert_eq!(balances_total(&ledger), ledger.total_supply().raw());
    }

    #[test]
    fn memo_is_accepted_without_state_effect() {
        let mut ledger = fresh_ledger();
        let memo = Memo::new(*b"invoice 42");

        ledger
            .transfer(
                &deployer(),
                TokenAmount::new(1_000),
                &deployer(),
                &wallet(1),
                Some(&memo),
            )
            .unwrap();

        assert_eq!(ledger.balance(&wallet(1)).raw(), 1_000);
        assert_eq!(balances_total(&ledger), ledger.total_supply().raw());
    }

    #[test]
    fn mint_is_owner_gated() {
        let mut ledger = fresh_ledger();

        let err = ledger
            .mint(&wallet(1), TokenAmount::new(500_000), &wallet(1))
            .unwrap_err();

        assert_eq!(err, LedgerError::OwnerOnly);
        assert!(ledger.balance(&wallet(1)).is_zero());
    }

    #[test]
    fn mint_grows_balance_and_supply_together() {
        let mut ledger = fresh_ledger();
        let supply_before = ledger.total_supply();

        ledger
            .mint(&deployer(), TokenAmount::new(500_000), &wallet(2))
            .unwrap();

        assert_eq!(ledger.balance(&wallet(2)).raw(), 500_000);
        assert_eq!(
            ledger.total_supply(),
            supply_before + TokenAmount::new(500_000)
        );
        assert_eq!(balances_total(&ledger), ledger.total_supply().raw());
    }

    #[test]
    fn mint_overflow_is_rejected_atomically() {
        let mut ledger = fresh_ledger();
        let supply_before = ledger.total_supply();

        let err = ledger
            .mint(&deployer(), TokenAmount::new(u128::MAX), &wallet(1))
            .unwrap_err();

        assert_eq!(err.code(), 103);
        assert_eq!(ledger.total_supply(), supply_before);
        assert!(ledger.balance(&wallet(1)).is_zero());
    }

    #[test]
    fn burn_shrinks_balance_and_supply_together() {
        let mut ledger = fresh_ledger();
        let supply_before = ledger.total_supply();

        ledger.burn(&deployer(), TokenAmount::new(250_000)).unwrap();

        assert_eq!(
            ledger.total_supply(),
            supply_before - TokenAmount::new(250_000)
        );
        assert_eq!(balances_total(&ledger), ledger.total_supply().raw());
    }

    #[test]
    fn burn_rejects_more_than_held() {
        let mut ledger = fresh_ledger();

        let err = ledger
            .burn(&wallet(2), TokenAmount::new(10_000_000_000))
            .unwrap_err();

        assert_eq!(err.code(), 102);
        assert_eq!(balances_total(&ledger), ledger.total_supply().raw());
    }

    #[test]
    fn mint_then_burn_restores_prior_state() {
        let mut ledger = fresh_ledger();
        let supply_before = ledger.total_supply();
        let amount = TokenAmount::new(777_777);

        ledger.mint(&deployer(), amount, &wallet(1)).unwrap();
        ledger.burn(&wallet(1), amount).unwrap();

        assert_eq!(ledger.total_supply(), supply_before);
        assert!(ledger.balance(&wallet(1)).is_zero());
        assert_eq!(balances_total(&ledger), supply_before.raw());
    }

    #[test]
    fn token_uri_is_owner_gated_and_absent_until_set() {
        let mut ledger = fresh_ledger();
        assert_eq!(ledger.token_uri(), None);

        let err = ledger
            .set_token_uri(&wallet(1), "https://malicious.example/fake.json".into())
            .unwrap_err();
        assert_eq!(err.code(), 100);
        assert_eq!(ledger.token_uri(), None);

        ledger
            .set_token_uri(&deployer(), "https://example.com/wandecoin.json".into())
            .unwrap();
        assert_eq!(ledger.token_uri(), Some("https://example.com/wandecoin.json"));
    }

    #[test]
    fn ownership_transfer_takes_effect_for_subsequent_calls() {
        let mut ledger = fresh_ledger();

        ledger.transfer_ownership(&deployer(), wallet(1)).unwrap();
        assert_eq!(ledger.contract_owner(), &wallet(1));

        // The new owner can mint; the old owner no longer can.
        ledger
            .mint(&wallet(1), TokenAmount::new(100), &wallet(1))
            .unwrap();
        let err = ledger
            .mint(&deployer(), TokenAmount::new(100), &deployer())
            .unwrap_err();
        assert_eq!(err, LedgerError::OwnerOnly);
    }

    #[test]
    fn ownership_transfer_is_owner_gated() {
        let mut ledger = fresh_ledger();

        let err = ledger.transfer_ownership(&wallet(1), wallet(2)).unwrap_err();

        assert_eq!(err.code(), 100);
        assert_eq!(ledger.contract_owner(), &deployer());
    }
}
