//! Deposit handler.
//!
//! Every leg goes to the bridge on behalf of one recipient. Native legs are
//! forwarded with the coin attached. Token legs are pulled into this contract
//! and then pulled again by the bridge, so the contract only holds them for
//! the span of two consecutive messages.

use common::mover::{cw20_pull, guarded};
use common::{events, plan_batch, AssetRef, Leg, LegReply, NativeLedger, ACCESS_GATE};
use cosmwasm_std::{Addr, Deps, DepsMut, Env, MessageInfo, Response};

use crate::bridge::{deposit_cw20, deposit_native};
use crate::error::ContractError;
use crate::msg::DepositLeg;
use crate::state::{ACCEPTED_TOKENS, CONFIG};

/// Validate a batch of deposits for `recipient`.
///
/// Token legs must name an accepted token; this is checked before any
/// message is built.
pub(crate) fn parse_deposits(
    deps: Deps,
    contract: &Addr,
    recipient: &str,
    deposits: &[DepositLeg],
) -> Result<Vec<Leg>, ContractError> {
    deposits
        .iter()
        .enumerate()
        .map(|(index, deposit)| {
            let leg = Leg::parse(
                deps.api,
                contract,
                index,
                &deposit.token,
                deposit.amount,
                recipient,
            )?;
            if let AssetRef::Cw20(token) = &leg.asset {
                if !ACCEPTED_TOKENS
                    .may_load(deps.storage, token)?
                    .unwrap_or(false)
                {
                    return Err(ContractError::TokenNotAccepted {
                        token: token.to_string(),
                    });
                }
            }
            Ok(leg)
        })
        .collect()
}

/// Forward every deposit to the bridge, in order, atomically.
pub fn execute_deposit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    deposits: Vec<DepositLeg>,
) -> Result<Response, ContractError> {
    ACCESS_GATE.load(deps.storage)?.ensure_not_paused()?;
    let config = CONFIG.load(deps.storage)?;

    let contract = &env.contract.address;
    let legs = parse_deposits(deps.as_ref(), contract, &recipient, &deposits)?;
    let ledger = NativeLedger::open(&config.native_denom, &info.funds, &legs)?;

    let caller = &info.sender;
    let bridge = &config.bridge;
    let denom = config.native_denom.as_str();
    let plan = plan_batch(&legs, ledger, events::DEPOSIT_MADE, caller, |index, leg| {
        let msgs = match &leg.asset {
            AssetRef::Native => vec![guarded(
                deposit_native(bridge, denom, leg.amount, &leg.destination)?,
                LegReply::native(index),
            )],
            AssetRef::Cw20(token) => vec![
                guarded(
                    cw20_pull(token, caller, contract, leg.amount)?,
                    LegReply::token(index),
                ),
                guarded(
                    deposit_cw20(bridge, token, leg.amount, &leg.destination)?,
                    LegReply::token(index),
                ),
            ],
        };
        Ok(msgs)
    })?;

    Ok(Response::new()
        .add_submessages(plan.messages)
        .add_events(plan.events)
        .add_attribute("method", "deposit")
        .add_attribute("caller", caller)
        .add_attribute("recipient", recipient)
        .add_attribute("leg_count", legs.len().to_string())
        .add_attribute("native_total", plan.native_total))
}
