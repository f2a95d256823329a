//! Execute handlers for the Bulk Checkout contract.
//!
//! - `donate` - the batch entry point
//!
//! Admin messages are served by `common::admin`.

mod donate;

pub use donate::*;
