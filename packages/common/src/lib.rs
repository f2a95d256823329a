//! Common - Shared Settlement Core for the Batch Transfer Contracts
//!
//! This package holds everything the checkout and deposit contracts have in
//! common: the asset model, leg validation, the owner/pause gate, native
//! value reconciliation, message construction for each leg, failure replies,
//! event construction and stray-balance recovery.
//!
//! # Batch Flow
//! 1. `AccessGate` rejects the call if the contract is paused
//! 2. Legs are parsed from their wire form and validated
//! 3. `NativeLedger` reconciles attached native value against native legs
//! 4. `plan_batch` walks legs in order, debiting the ledger and routing each
//!    leg to guarded sub-messages
//! 5. The host dispatches the sub-messages; any failure reverts the call

pub mod access;
pub mod admin;
pub mod asset;
pub mod batch;
pub mod error;
pub mod events;
pub mod funds;
pub mod leg;
pub mod mover;
pub mod recovery;
pub mod reply;

pub use access::{ensure_nonpayable, AccessGate, ACCESS_GATE};
pub use asset::{AssetRef, NATIVE_ASSET_SENTINEL};
pub use batch::{plan_batch, BatchPlan};
pub use error::SettlementError;
pub use funds::NativeLedger;
pub use leg::{Leg, LegMsg};
pub use reply::{LegFailure, LegReply};
