//! Event construction.
//!
//! One event per completed leg and one per admin action, so off-chain
//! indexers can reconcile without parsing response attributes.

use cosmwasm_std::{Addr, Event, Uint128};

use crate::asset::AssetRef;
use crate::leg::Leg;

pub const DONATION_SENT: &str = "donation_sent";
pub const DEPOSIT_MADE: &str = "deposit_made";
pub const ALLOWANCE_SET: &str = "allowance_set";
pub const TOKEN_WITHDRAWN: &str = "token_withdrawn";
pub const OWNERSHIP_TRANSFERRED: &str = "ownership_transferred";
pub const PAUSED: &str = "paused";
pub const UNPAUSED: &str = "unpaused";

/// Event for leg `index` of a batch.
pub fn leg_event(kind: &str, index: usize, leg: &Leg, caller: &Addr) -> Event {
    Event::new(kind)
        .add_attribute("leg", index.to_string())
        .add_attribute("asset", leg.asset.to_wire())
        .add_attribute("amount", leg.amount)
        .add_attribute("destination", &leg.destination)
        .add_attribute("caller", caller)
}

pub fn allowance_set(token: &Addr, amount: Uint128) -> Event {
    Event::new(ALLOWANCE_SET)
        .add_attribute("token", token)
        .add_attribute("amount", amount)
}

pub fn token_withdrawn(asset: &AssetRef, amount: Uint128, destination: &Addr) -> Event {
    Event::new(TOKEN_WITHDRAWN)
        .add_attribute("asset", asset.to_wire())
        .add_attribute("amount", amount)
        .add_attribute("destination", destination)
}

pub fn ownership_transferred(previous_owner: &Addr, new_owner: &Addr) -> Event {
    Event::new(OWNERSHIP_TRANSFERRED)
        .add_attribute("previous_owner", previous_owner)
        .add_attribute("new_owner", new_owner)
}

pub fn paused(account: &Addr) -> Event {
    Event::new(PAUSED).add_attribute("account", account)
}

pub fn unpaused(account: &Addr) -> Event {
    Event::new(UNPAUSED).add_attribute("account", account)
}
