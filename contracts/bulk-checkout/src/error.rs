//! Error types for the Bulk Checkout contract

use common::SettlementError;
use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error(transparent)]
    Settlement(#[from] SettlementError),

    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },
}
