//! Bulk Checkout Contract - Atomic Multi-Destination Payments
//!
//! A caller submits an ordered list of donations, each naming an asset (the
//! native coin or a CW20 token), an amount and a destination. All of them are
//! paid in one call, or none are.
//!
//! # Donate Flow
//! 1. Caller approves this contract on every CW20 token used in the batch
//! 2. Caller sends `Donate` with exactly the sum of native donations attached
//! 3. Native donations are forwarded with bank sends, token donations are
//!    pulled straight from the caller to each destination
//!
//! # Security
//! - Zero-slack native accounting: surplus and deficit both revert
//! - Funds held by the contract never fund a donation
//! - Owner-gated pause, ownership transfer and stray-balance recovery

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
