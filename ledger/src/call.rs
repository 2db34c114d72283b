//! The host call surface.
//!
//! The host execution environment invokes the ledger through a named call
//! with a fixed, typed argument list and an out-of-band caller identity.
//! Every mutating call answers `Ok(Value::Bool(true))` or `Err(code)`;
//! read-only calls answer `Ok(value)` and never fail on well-formed input.
//! Wire encoding of principals, optionals, and strings is owned by the
//! host; this module only fixes the response shape.

use serde::{Deserialize, Serialize};

use wande_types::{Memo, Principal, TokenAmount};

use crate::ledger::TokenLedger;

/// One invocation of the ledger, as named on the deployed surface.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Call {
    GetName,
    GetSymbol,
    GetDecimals,
    GetTotalSupply,
    GetContractOwner,
    GetBalance {
        account: Principal,
    },
    GetTokenUri,
    Transfer {
        amount: TokenAmount,
        sender: Principal,
        recipient: Principal,
        memo: Option<Memo>,
    },
    Mint {
        amount: TokenAmount,
        recipient: Principal,
    },
    Burn {
        amount: TokenAmount,
    },
    SetTokenUri {
        uri: String,
    },
    TransferOwnership {
        new_owner: Principal,
    },
}

impl Call {
    /// The deployed function name for this call.
    pub fn method(&self) -> &'static str {
        match self {
            Call::GetName => "get-name",
            Call::GetSymbol => "get-symbol",
            Call::GetDecimals => "get-decimals",
            Call::GetTotalSupply => "get-total-supply",
            Call::GetContractOwner => "get-contract-owner",
            Call::GetBalance { .. } => "get-balance",
            Call::GetTokenUri => "get-token-uri",
            Call::Transfer { .. } => "transfer",
            Call::Mint { .. } => "mint",
            Call::Burn { .. } => "burn",
            Call::SetTokenUri { .. } => "set-token-uri",
            Call::TransferOwnership { .. } => "transfer-ownership",
        }
    }
}

/// A typed response payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    Bool(bool),
    Uint(u128),
    Text(String),
    Principal(Principal),
    Optional(Option<Box<Value>>),
}

/// The wire contract: a typed payload on success, a stable numeric code
/// on rejection.
pub type CallResult = Result<Value, u32>;

/// Execute one call against the ledger on behalf of `caller`.
pub fn dispatch(ledger: &mut TokenLedger, caller: &Principal, call: Call) -> CallResult {
    let method = call.method();
    let result = match call {
        Call::GetName => Ok(Value::Text(ledger.name().to_owned())),
        Call::GetSymbol => Ok(Value::Text(ledger.symbol().to_owned())),
        Call::GetDecimals => Ok(Value::Uint(u128::from(ledger.decimals()))),
        Call::GetTotalSupply => Ok(Value::Uint(ledger.total_supply().raw())),
        Call::GetContractOwner => Ok(Value::Principal(ledger.contract_owner().clone())),
        Call::GetBalance { account } => Ok(Value::Uint(ledger.balance(&account).raw())),
        Call::GetTokenUri => Ok(Value::Optional(
            ledger
                .token_uri()
                .map(|uri| Box::new(Value::Text(uri.to_owned()))),
        )),
        Call::Transfer {
            amount,
            sender,
            recipient,
            memo,
        } => ledger
            .transfer(caller, amount, &sender, &recipient, memo.as_ref())
            .map(|()| Value::Bool(true))
            .map_err(|e| e.code()),
        Call::Mint { amount, recipient } => ledger
            .mint(caller, amount, &recipient)
            .map(|()| Value::Bool(true))
            .map_err(|e| e.code()),
        Call::Burn { amount } => ledger
            .burn(caller, amount)
            .map(|()| Value::Bool(true))
            .map_err(|e| e.code()),
        Call::SetTokenUri { uri } => ledger
            .set_token_uri(caller, uri)
            .map(|()| Value::Bool(true))
            .map_err(|e| e.code()),
        Call::TransferOwnership { new_owner } => ledger
            .transfer_ownership(caller, new_owner)
            .map(|()| Value::Bool(true))
            .map_err(|e| e.code()),
    };

    if let Err(code) = &result {
        tracing::debug!(method, caller = %caller, code = *code, "call rejected");
    }
    result
}
