//! Execute message handlers.
//!
//! Admin messages other than `SetAllowance` are served by `common::admin`.

mod allowance;
mod deposit;

pub use allowance::*;
pub use deposit::*;
