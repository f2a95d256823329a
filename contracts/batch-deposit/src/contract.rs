//! Batch Deposit Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers
//! - `bridge` - Messages sent to the downstream bridge

use common::admin::{
    execute_pause, execute_transfer_ownership, execute_unpause, execute_withdraw_native,
    execute_withdraw_token,
};
use common::{AccessGate, LegReply, ACCESS_GATE};
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult, SubMsgResult, Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{allowance_delta, execute_deposit, execute_set_allowance};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_accepted_tokens, query_bridge_allowance, query_config, query_required_funds,
};
use crate::state::{Config, ACCEPTED_TOKENS, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.native_denom.trim().is_empty() {
        return Err(ContractError::InvalidConfig {
            reason: "native_denom cannot be empty".to_string(),
        });
    }
    let bridge = deps.api.addr_validate(&msg.bridge)?;
    if bridge == env.contract.address {
        return Err(ContractError::InvalidConfig {
            reason: "bridge cannot be the contract itself".to_string(),
        });
    }

    let gate = AccessGate::new(info.sender);
    ACCESS_GATE.save(deps.storage, &gate)?;
    CONFIG.save(
        deps.storage,
        &Config {
            bridge: bridge.clone(),
            native_denom: msg.native_denom.clone(),
        },
    )?;

    // Fresh contract: every allowance starts at zero. A token listed twice
    // is granted once.
    let mut response = Response::new();
    for token in &msg.accepted_tokens {
        let token = deps.api.addr_validate(token)?;
        if ACCEPTED_TOKENS.has(deps.storage, &token) {
            continue;
        }
        ACCEPTED_TOKENS.save(deps.storage, &token, &true)?;
        response = response.add_messages(allowance_delta(
            &token,
            &bridge,
            Uint128::zero(),
            Uint128::MAX,
        )?);
    }

    Ok(response
        .add_attribute("method", "instantiate")
        .add_attribute("owner", gate.owner)
        .add_attribute("bridge", bridge)
        .add_attribute("native_denom", msg.native_denom)
        .add_attribute("accepted_tokens", msg.accepted_tokens.len().to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Deposit {
            recipient,
            deposits,
        } => execute_deposit(deps, env, info, recipient, deposits),

        // Admin operations
        ExecuteMsg::TransferOwnership { new_owner } => {
            Ok(execute_transfer_ownership(deps, info, new_owner)?)
        }
        ExecuteMsg::Pause {} => Ok(execute_pause(deps, info)?),
        ExecuteMsg::Unpause {} => Ok(execute_unpause(deps, info)?),
        ExecuteMsg::SetAllowance { token, amount } => {
            execute_set_allowance(deps, env, info, token, amount)
        }
        ExecuteMsg::WithdrawToken { token, recipient } => {
            Ok(execute_withdraw_token(deps, env, info, token, recipient)?)
        }
        ExecuteMsg::WithdrawNative { recipient } => {
            let config = CONFIG.load(deps.storage)?;
            Ok(execute_withdraw_native(
                deps,
                env,
                info,
                &config.native_denom,
                recipient,
            )?)
        }
    }
}

// ============================================================================
// Reply
// ============================================================================

/// Leg messages reply only on error; the named error reverts the batch.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(_deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    let leg = LegReply::from_id(msg.id)?;
    match msg.result {
        SubMsgResult::Err(reason) => Err(leg.into_error(reason).into()),
        SubMsgResult::Ok(_) => Ok(Response::new()),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::AcceptedTokens { start_after, limit } => {
            to_json_binary(&query_accepted_tokens(deps, start_after, limit)?)
        }
        QueryMsg::Allowance { token } => {
            to_json_binary(&query_bridge_allowance(deps, env, token)?)
        }
        QueryMsg::RequiredFunds {
            recipient,
            deposits,
        } => to_json_binary(&query_required_funds(deps, env, recipient, deposits)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
