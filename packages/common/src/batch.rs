//! Batch planning.
//!
//! `plan_batch` walks validated legs in order and produces every sub-message
//! and event of the call. All native accounting is settled inside the walk,
//! before the host dispatches anything, so external calls only ever see a
//! fully reconciled batch.

use cosmwasm_std::{Addr, Event, SubMsg, Uint128};

use crate::error::SettlementError;
use crate::events::leg_event;
use crate::funds::NativeLedger;
use crate::leg::Leg;

/// Everything a batch call hands back to the host.
#[derive(Debug, Default)]
pub struct BatchPlan {
    /// Guarded leg messages, in leg order
    pub messages: Vec<SubMsg>,
    /// One event per leg, in leg order
    pub events: Vec<Event>,
    /// Native value moved by the batch (equals the attached value)
    pub native_total: Uint128,
}

/// Plan a batch.
///
/// `route` turns one leg into the sub-messages that move it; it is where the
/// checkout and deposit contracts differ.
pub fn plan_batch<F>(
    legs: &[Leg],
    mut ledger: NativeLedger,
    event_kind: &str,
    caller: &Addr,
    mut route: F,
) -> Result<BatchPlan, SettlementError>
where
    F: FnMut(usize, &Leg) -> Result<Vec<SubMsg>, SettlementError>,
{
    let mut plan = BatchPlan {
        messages: Vec::with_capacity(legs.len()),
        events: Vec::with_capacity(legs.len()),
        native_total: Uint128::zero(),
    };

    for (index, leg) in legs.iter().enumerate() {
        if leg.asset.is_native() {
            ledger.debit(index, leg.amount)?;
        }
        plan.messages.extend(route(index, leg)?);
        plan.events.push(leg_event(event_kind, index, leg, caller));
    }

    plan.native_total = ledger.close()?;
    Ok(plan)
}
