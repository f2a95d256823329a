//! Bridge allowance management.
//!
//! The bridge pulls deposited tokens out of this contract with `TransferFrom`,
//! so it needs an allowance on every accepted token. Amounts are never stored
//! here: the bridge consumes them, so the token contract is the only source
//! of truth.

use common::{ensure_nonpayable, events, ACCESS_GATE};
use cosmwasm_std::{
    to_json_binary, Addr, CosmosMsg, DepsMut, Env, MessageInfo, QuerierWrapper, Response,
    StdResult, Uint128, WasmMsg,
};
use cw20::{AllowanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

use crate::error::ContractError;
use crate::state::{ACCEPTED_TOKENS, CONFIG};

/// Live allowance `owner` grants `spender` on `token`.
pub(crate) fn query_allowance(
    querier: &QuerierWrapper,
    token: &Addr,
    owner: &Addr,
    spender: &Addr,
) -> StdResult<AllowanceResponse> {
    querier.query_wasm_smart(
        token,
        &Cw20QueryMsg::Allowance {
            owner: owner.to_string(),
            spender: spender.to_string(),
        },
    )
}

/// Message moving an allowance from `current` to exactly `target`.
/// `None` when they already match.
pub(crate) fn allowance_delta(
    token: &Addr,
    spender: &Addr,
    current: Uint128,
    target: Uint128,
) -> StdResult<Option<CosmosMsg>> {
    let msg = if target > current {
        Cw20ExecuteMsg::IncreaseAllowance {
            spender: spender.to_string(),
            amount: target - current,
            expires: None,
        }
    } else if target < current {
        Cw20ExecuteMsg::DecreaseAllowance {
            spender: spender.to_string(),
            amount: current - target,
            expires: None,
        }
    } else {
        return Ok(None);
    };

    Ok(Some(
        WasmMsg::Execute {
            contract_addr: token.to_string(),
            msg: to_json_binary(&msg)?,
            funds: vec![],
        }
        .into(),
    ))
}

/// Set the bridge's allowance on `token` to exactly `amount`.
pub fn execute_set_allowance(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_nonpayable(&info)?;
    ACCESS_GATE.load(deps.storage)?.ensure_owner(&info.sender)?;

    let config = CONFIG.load(deps.storage)?;
    let token = deps.api.addr_validate(&token)?;
    let current = query_allowance(
        &deps.querier,
        &token,
        &env.contract.address,
        &config.bridge,
    )?
    .allowance;
    let msg = allowance_delta(&token, &config.bridge, current, amount)?;
    ACCEPTED_TOKENS.save(deps.storage, &token, &true)?;

    Ok(Response::new()
        .add_messages(msg)
        .add_event(events::allowance_set(&token, amount))
        .add_attribute("method", "set_allowance")
        .add_attribute("previous_amount", current))
}
