//! Bulk Checkout Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use common::admin::{
    execute_pause, execute_transfer_ownership, execute_unpause, execute_withdraw_native,
    execute_withdraw_token,
};
use common::{AccessGate, LegReply, ACCESS_GATE};
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult, SubMsgResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::execute_donate;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{query_config, query_required_funds};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.native_denom.trim().is_empty() {
        return Err(ContractError::InvalidConfig {
            reason: "native_denom cannot be empty".to_string(),
        });
    }

    let gate = AccessGate::new(info.sender);
    ACCESS_GATE.save(deps.storage, &gate)?;
    CONFIG.save(
        deps.storage,
        &Config {
            native_denom: msg.native_denom.clone(),
        },
    )?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", gate.owner)
        .add_attribute("native_denom", msg.native_denom))
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
        ExecuteMsg::Donate { donations } => execute_donate(deps, env, info, donations),

        // Admin operations
        ExecuteMsg::TransferOwnership { new_owner } => {
            Ok(execute_transfer_ownership(deps, info, new_owner)?)
        }
        ExecuteMsg::Pause {} => Ok(execute_pause(deps, info)?),
        ExecuteMsg::Unpause {} => Ok(execute_unpause(deps, info)?),
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

/// Leg messages reply only on error; turn the failure into a named error,
/// which reverts the whole donation batch.
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
        QueryMsg::RequiredFunds { donations } => {
            to_json_binary(&query_required_funds(deps, env, donations)?)
        }
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
