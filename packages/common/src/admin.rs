//! Admin operations handlers shared by both contracts.
//!
//! This module handles:
//! - Pause/unpause contract
//! - Ownership transfer (single step)
//! - Stray balance recovery
//!
//! Every handler refuses attached funds and checks the owner before doing
//! anything else.

use cosmwasm_std::{DepsMut, Env, MessageInfo, Response};

use crate::access::{ensure_nonpayable, ACCESS_GATE};
use crate::error::SettlementError;
use crate::events;
use crate::recovery::{sweep_cw20, sweep_native};

// ============================================================================
// Pause/Unpause
// ============================================================================

/// Pause the contract (stops all batches).
pub fn execute_pause(deps: DepsMut, info: MessageInfo) -> Result<Response, SettlementError> {
    ensure_nonpayable(&info)?;
    let mut gate = ACCESS_GATE.load(deps.storage)?;
    gate.pause(&info.sender)?;
    ACCESS_GATE.save(deps.storage, &gate)?;

    Ok(Response::new()
        .add_event(events::paused(&info.sender))
        .add_attribute("method", "pause"))
}

pub fn execute_unpause(deps: DepsMut, info: MessageInfo) -> Result<Response, SettlementError> {
    ensure_nonpayable(&info)?;
    let mut gate = ACCESS_GATE.load(deps.storage)?;
    gate.unpause(&info.sender)?;
    ACCESS_GATE.save(deps.storage, &gate)?;

    Ok(Response::new()
        .add_event(events::unpaused(&info.sender))
        .add_attribute("method", "unpause"))
}

// ============================================================================
// Ownership
// ============================================================================

pub fn execute_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, SettlementError> {
    ensure_nonpayable(&info)?;
    let mut gate = ACCESS_GATE.load(deps.storage)?;
    gate.ensure_owner(&info.sender)?;
    let new_owner = deps.api.addr_validate(&new_owner)?;
    let previous = gate.transfer_ownership(&info.sender, new_owner.clone())?;
    ACCESS_GATE.save(deps.storage, &gate)?;

    Ok(Response::new()
        .add_event(events::ownership_transferred(&previous, &new_owner))
        .add_attribute("method", "transfer_ownership")
        .add_attribute("new_owner", new_owner))
}

// ============================================================================
// Stray Balance Recovery
// ============================================================================

/// Sweep the contract's whole balance of a CW20 token.
pub fn execute_withdraw_token(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: String,
    recipient: String,
) -> Result<Response, SettlementError> {
    ensure_nonpayable(&info)?;
    ACCESS_GATE.load(deps.storage)?.ensure_owner(&info.sender)?;

    let token = deps.api.addr_validate(&token)?;
    let recipient = deps.api.addr_validate(&recipient)?;
    let sweep = sweep_cw20(&deps.querier, &env.contract.address, &token, &recipient)?;

    Ok(Response::new()
        .add_messages(sweep.message)
        .add_event(events::token_withdrawn(&sweep.asset, sweep.amount, &recipient))
        .add_attribute("method", "withdraw_token")
        .add_attribute("amount", sweep.amount))
}

/// Sweep the contract's whole `denom` balance, including coins sent to it
/// with a plain bank transfer.
pub fn execute_withdraw_native(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    denom: &str,
    recipient: String,
) -> Result<Response, SettlementError> {
    ensure_nonpayable(&info)?;
    ACCESS_GATE.load(deps.storage)?.ensure_owner(&info.sender)?;

    let recipient = deps.api.addr_validate(&recipient)?;
    let sweep = sweep_native(&deps.querier, &env.contract.address, denom, &recipient)?;

    Ok(Response::new()
        .add_messages(sweep.message)
        .add_event(events::token_withdrawn(&sweep.asset, sweep.amount, &recipient))
        .add_attribute("method", "withdraw_native")
        .add_attribute("amount", sweep.amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::AccessGate;
    use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info};
    use cosmwasm_std::{coins, Addr};

    fn setup_gate(deps: DepsMut) {
        ACCESS_GATE
            .save(deps.storage, &AccessGate::new(Addr::unchecked("owner")))
            .unwrap();
    }

    #[test]
    fn test_pause_then_unpause() {
        let mut deps = mock_dependencies();
        setup_gate(deps.as_mut());

        let res = execute_pause(deps.as_mut(), mock_info("owner", &[])).unwrap();
        assert_eq!(res.events[0].ty, events::PAUSED);
        assert!(ACCESS_GATE.load(&deps.storage).unwrap().paused);

        execute_unpause(deps.as_mut(), mock_info("owner", &[])).unwrap();
        assert!(!ACCESS_GATE.load(&deps.storage).unwrap().paused);
    }

    #[test]
    fn test_funds_refused_before_owner_check() {
        let mut deps = mock_dependencies();
        setup_gate(deps.as_mut());

        let err = execute_pause(deps.as_mut(), mock_info("mallory", &coins(1, "uluna")))
            .unwrap_err();
        assert_eq!(err, SettlementError::NonPayable);

        let err = execute_withdraw_native(
            deps.as_mut(),
            mock_env(),
            mock_info("mallory", &[]),
            "uluna",
            "mallory".to_string(),
        )
        .unwrap_err();
        assert_eq!(err, SettlementError::Unauthorized);
    }

    #[test]
    fn test_transfer_ownership_returns_previous_owner() {
        let mut deps = mock_dependencies();
        setup_gate(deps.as_mut());

        let res = execute_transfer_ownership(
            deps.as_mut(),
            mock_info("owner", &[]),
            "newowner".to_string(),
        )
        .unwrap();
        assert_eq!(res.events[0].attributes[0].value, "owner");
        assert_eq!(
            ACCESS_GATE.load(&deps.storage).unwrap().owner,
            Addr::unchecked("newowner")
        );
    }
}
