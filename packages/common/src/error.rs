//! Error taxonomy shared by the batch settlement contracts.

use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SettlementError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    // ========================================================================
    // Access Errors
    // ========================================================================

    #[error("Unauthorized: caller is not the owner")]
    Unauthorized,

    #[error("Contract is paused")]
    Paused,

    #[error("Invalid pause state: paused is already {paused}")]
    InvalidPauseState { paused: bool },

    // ========================================================================
    // Funds Errors
    // ========================================================================

    #[error("This message does not accept funds")]
    NonPayable,

    #[error("Unexpected funds: {denom} is not the native denom")]
    UnexpectedFunds { denom: String },

    #[error("Too much native value sent: attached {attached}, legs declare {declared}")]
    ExcessNativeValue { attached: Uint128, declared: Uint128 },

    #[error("Insufficient balance: leg {index} needs {required}, {available} left")]
    InsufficientBalance {
        index: usize,
        required: Uint128,
        available: Uint128,
    },

    // ========================================================================
    // Leg Errors
    // ========================================================================

    #[error("Invalid leg {index}: {reason}")]
    InvalidLeg { index: usize, reason: String },

    #[error("Native transfer failed on leg {index}: {reason}")]
    TransferFailed { index: usize, reason: String },

    #[error("Token transfer failed on leg {index}: {reason}")]
    TokenTransferFailed { index: usize, reason: String },

    #[error("Unknown reply id: {id}")]
    UnknownReplyId { id: u64 },
}
