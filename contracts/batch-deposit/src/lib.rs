//! Batch Deposit Contract
//!
//! Takes a list of native coin and CW20 deposits for a single recipient and
//! forwards each of them into a fixed bridge contract, in order, inside one
//! atomic call.
//!
//! ## Flow
//! - Native deposits are forwarded to the bridge with the coin attached
//! - Token deposits are pulled from the caller into this contract, then the
//!   bridge pulls them onward using the allowance this contract granted it
//! - Any failing leg reverts the whole batch

pub mod bridge;
pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

mod execute;
mod query;

pub use crate::error::ContractError;
