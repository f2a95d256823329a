//! Message types for the Bulk Checkout contract

use common::LegMsg;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Coin};

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message. The sender becomes the owner.
#[cw_serde]
pub struct InstantiateMsg {
    /// Bank denom accepted as the native coin (e.g. "uluna")
    pub native_denom: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Pay every donation in order, atomically.
    ///
    /// Attach exactly the sum of the native donations. Token donations are
    /// pulled from the sender, who must have approved this contract.
    Donate { donations: Vec<LegMsg> },

    // ========================================================================
    // Admin Operations
    // ========================================================================
    /// Hand ownership to a new address (single step)
    TransferOwnership { new_owner: String },

    /// Stop accepting donations
    Pause {},

    /// Resume accepting donations
    Unpause {},

    /// Send the contract's whole balance of a CW20 token to `recipient`
    WithdrawToken { token: String, recipient: String },

    /// Send the contract's whole native balance to `recipient`
    WithdrawNative { recipient: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Owner, pause flag and native denom
    #[returns(ConfigResponse)]
    Config {},

    /// Native coin that must be attached to `Donate` for these donations
    #[returns(RequiredFundsResponse)]
    RequiredFunds { donations: Vec<LegMsg> },
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub paused: bool,
    pub native_denom: String,
}

#[cw_serde]
pub struct RequiredFundsResponse {
    pub amount: Coin,
}
