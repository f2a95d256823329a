//! Donate handler.
//!
//! Native donations are forwarded with bank sends; token donations are pulled
//! from the caller directly to each destination, so the contract never holds
//! custody of the donated value.

use common::leg::parse_legs;
use common::mover::{cw20_pull, guarded, native_send};
use common::{events, plan_batch, AssetRef, LegMsg, LegReply, NativeLedger, ACCESS_GATE};
use cosmwasm_std::{DepsMut, Env, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::CONFIG;

/// Pay every donation in order, atomically.
pub fn execute_donate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    donations: Vec<LegMsg>,
) -> Result<Response, ContractError> {
    ACCESS_GATE.load(deps.storage)?.ensure_not_paused()?;
    let config = CONFIG.load(deps.storage)?;

    let legs = parse_legs(deps.api, &env.contract.address, &donations)?;
    let ledger = NativeLedger::open(&config.native_denom, &info.funds, &legs)?;

    let caller = &info.sender;
    let denom = config.native_denom.as_str();
    let plan = plan_batch(&legs, ledger, events::DONATION_SENT, caller, |index, leg| {
        let msg = match &leg.asset {
            AssetRef::Native => guarded(
                native_send(&leg.destination, denom, leg.amount),
                LegReply::native(index),
            ),
            AssetRef::Cw20(token) => guarded(
                cw20_pull(token, caller, &leg.destination, leg.amount)?,
                LegReply::token(index),
            ),
        };
        Ok(vec![msg])
    })?;

    Ok(Response::new()
        .add_submessages(plan.messages)
        .add_events(plan.events)
        .add_attribute("method", "donate")
        .add_attribute("caller", caller)
        .add_attribute("leg_count", legs.len().to_string())
        .add_attribute("native_total", plan.native_total))
}
