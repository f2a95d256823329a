//! Message builders for moving value.
//!
//! Nothing here touches balances: the bank module and the CW20 contracts keep
//! their own books, and the contract only sequences calls into them.

use cosmwasm_std::{
    to_json_binary, Addr, BankMsg, Coin, CosmosMsg, StdResult, SubMsg, Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;

use crate::reply::LegReply;

/// Bank send of `amount` native coin to `recipient`.
pub fn native_send(recipient: &Addr, denom: &str, amount: Uint128) -> CosmosMsg {
    CosmosMsg::Bank(BankMsg::Send {
        to_address: recipient.to_string(),
        amount: vec![Coin {
            denom: denom.to_string(),
            amount,
        }],
    })
}

/// Pull `amount` of `token` from `owner` to `recipient` using the allowance
/// `owner` granted to this contract.
pub fn cw20_pull(
    token: &Addr,
    owner: &Addr,
    recipient: &Addr,
    amount: Uint128,
) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: owner.to_string(),
            recipient: recipient.to_string(),
            amount,
        })?,
        funds: vec![],
    }))
}

/// Transfer `amount` of `token` held by this contract to `recipient`.
pub fn cw20_transfer(token: &Addr, recipient: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: recipient.to_string(),
            amount,
        })?,
        funds: vec![],
    }))
}

/// Wrap a leg message so its failure is reported through `reply`.
pub fn guarded(msg: CosmosMsg, reply: LegReply) -> SubMsg {
    SubMsg::reply_on_error(msg, reply.id())
}
