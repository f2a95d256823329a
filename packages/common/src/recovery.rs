//! Stray balance recovery.
//!
//! Value can reach a contract outside any batch: a plain CW20 `Transfer`, or a
//! bank send, which no contract code can refuse. These helpers sweep the full
//! current balance of one asset to a recipient.

use cosmwasm_std::{Addr, CosmosMsg, QuerierWrapper, StdResult, Uint128};
use cw20::{BalanceResponse, Cw20QueryMsg};

use crate::asset::AssetRef;
use crate::mover::{cw20_transfer, native_send};

/// A planned sweep. `message` is `None` when there is nothing to move.
#[derive(Debug, Clone, PartialEq)]
pub struct Sweep {
    pub asset: AssetRef,
    pub amount: Uint128,
    pub message: Option<CosmosMsg>,
}

/// Query CW20 token balance
pub fn query_cw20_balance(
    querier: &QuerierWrapper,
    token: &Addr,
    account: &Addr,
) -> StdResult<Uint128> {
    let response: BalanceResponse = querier.query_wasm_smart(
        token,
        &Cw20QueryMsg::Balance {
            address: account.to_string(),
        },
    )?;
    Ok(response.balance)
}

/// Sweep the contract's whole balance of `token` to `recipient`.
pub fn sweep_cw20(
    querier: &QuerierWrapper,
    contract: &Addr,
    token: &Addr,
    recipient: &Addr,
) -> StdResult<Sweep> {
    let amount = query_cw20_balance(querier, token, contract)?;
    let message = if amount.is_zero() {
        None
    } else {
        Some(cw20_transfer(token, recipient, amount)?)
    };
    Ok(Sweep {
        asset: AssetRef::Cw20(token.clone()),
        amount,
        message,
    })
}

/// Sweep the contract's whole balance of the native denom to `recipient`.
pub fn sweep_native(
    querier: &QuerierWrapper,
    contract: &Addr,
    denom: &str,
    recipient: &Addr,
) -> StdResult<Sweep> {
    let amount = querier.query_balance(contract, denom)?.amount;
    let message = (!amount.is_zero()).then(|| native_send(recipient, denom, amount));
    Ok(Sweep {
        asset: AssetRef::Native,
        amount,
        message,
    })
}
