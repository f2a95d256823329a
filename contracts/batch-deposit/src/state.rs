//! State definitions for the Batch Deposit contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Bridge contract every deposit is forwarded to
    pub bridge: Addr,
    /// Bank denom accepted as the native coin
    pub native_denom: String,
}

pub const CONTRACT_NAME: &str = "crates.io:batch-deposit";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const CONFIG: Item<Config> = Item::new("config");

/// CW20 tokens the bridge has been granted an allowance for.
/// The allowance amount itself lives in the token contract.
pub const ACCEPTED_TOKENS: Map<&Addr, bool> = Map::new("accepted_tokens");
