//! State definitions for the Bulk Checkout contract
//!
//! Ownership and pause state live in `common::ACCESS_GATE`.

use cosmwasm_schema::cw_serde;
use cw_storage_plus::Item;

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Bank denom treated as the native coin
    pub native_denom: String,
}

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:bulk-checkout";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const CONFIG: Item<Config> = Item::new("config");
