//! Interface of the downstream bridge contract.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{coins, to_json_binary, Addr, CosmosMsg, StdResult, Uint128, WasmMsg};

/// Execute messages the bridge accepts from this contract.
#[cw_serde]
pub enum BridgeExecuteMsg {
    /// Deposit the attached native coin for `recipient`
    DepositNative { recipient: String },
    /// Deposit `amount` of `token` for `recipient`. The bridge pulls the
    /// tokens from the sender with `TransferFrom`.
    DepositCw20 {
        token: String,
        amount: Uint128,
        recipient: String,
    },
}

/// Forward `amount` of the native coin to the bridge.
pub fn deposit_native(
    bridge: &Addr,
    denom: &str,
    amount: Uint128,
    recipient: &Addr,
) -> StdResult<CosmosMsg> {
    Ok(WasmMsg::Execute {
        contract_addr: bridge.to_string(),
        msg: to_json_binary(&BridgeExecuteMsg::DepositNative {
            recipient: recipient.to_string(),
        })?,
        funds: coins(amount.u128(), denom),
    }
    .into())
}

/// Ask the bridge to pull `amount` of `token` from this contract.
pub fn deposit_cw20(
    bridge: &Addr,
    token: &Addr,
    amount: Uint128,
    recipient: &Addr,
) -> StdResult<CosmosMsg> {
    Ok(WasmMsg::Execute {
        contract_addr: bridge.to_string(),
        msg: to_json_binary(&BridgeExecuteMsg::DepositCw20 {
            token: token.to_string(),
            amount,
            recipient: recipient.to_string(),
        })?,
        funds: vec![],
    }
    .into())
}
