//! Message types for the Batch Deposit contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Coin, Uint128};

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message. The sender becomes the owner.
#[cw_serde]
pub struct InstantiateMsg {
    /// Bridge contract receiving every deposit
    pub bridge: String,
    /// Bank denom accepted as the native coin (e.g. "uluna")
    pub native_denom: String,
    /// CW20 tokens the bridge is granted an unlimited allowance for
    pub accepted_tokens: Vec<String>,
}

/// One deposit of a batch. The batch recipient is the destination.
#[cw_serde]
pub struct DepositLeg {
    /// CW20 contract address, or `"native"` for the native coin
    pub token: String,
    pub amount: Uint128,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Forward every deposit to the bridge for `recipient`, atomically.
    ///
    /// Attach exactly the sum of the native deposits. Token deposits are
    /// pulled from the sender, who must have approved this contract.
    Deposit {
        recipient: String,
        deposits: Vec<DepositLeg>,
    },

    // ========================================================================
    // Admin Operations
    // ========================================================================
    /// Hand ownership to a new address (single step)
    TransferOwnership { new_owner: String },

    /// Stop accepting deposits
    Pause {},

    /// Resume accepting deposits
    Unpause {},

    /// Set the bridge's allowance on `token` to exactly `amount`.
    /// Zero revokes it.
    SetAllowance { token: String, amount: Uint128 },

    /// Send the contract's whole balance of a CW20 token to `recipient`
    WithdrawToken { token: String, recipient: String },

    /// Send the contract's whole native balance to `recipient`
    WithdrawNative { recipient: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Owner, pause flag, bridge and native denom
    #[returns(ConfigResponse)]
    Config {},

    /// Paginated list of accepted tokens
    #[returns(AcceptedTokensResponse)]
    AcceptedTokens {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    /// Live allowance this contract grants the bridge on `token`
    #[returns(cw20::AllowanceResponse)]
    Allowance { token: String },

    /// Native coin that must be attached to `Deposit` for these deposits.
    /// The batch is validated exactly as `Deposit` would validate it.
    #[returns(RequiredFundsResponse)]
    RequiredFunds {
        recipient: String,
        deposits: Vec<DepositLeg>,
    },
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub paused: bool,
    pub bridge: Addr,
    pub native_denom: String,
}

#[cw_serde]
pub struct AcceptedTokensResponse {
    pub tokens: Vec<Addr>,
}

#[cw_serde]
pub struct RequiredFundsResponse {
    pub amount: Coin,
}
