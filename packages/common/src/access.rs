//! Owner and pause gate.
//!
//! Every state-changing admin message goes through [`AccessGate::ensure_owner`];
//! every batch entry point goes through [`AccessGate::ensure_not_paused`].

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, MessageInfo};
use cw_storage_plus::Item;

use crate::error::SettlementError;

/// Ownership and pause state of a contract.
#[cw_serde]
pub struct AccessGate {
    /// Address allowed to run admin messages
    pub owner: Addr,
    /// Whether batch entry points are currently disabled
    pub paused: bool,
}

/// Gate storage, shared key across both contracts
pub const ACCESS_GATE: Item<AccessGate> = Item::new("access_gate");

impl AccessGate {
    /// A fresh, unpaused gate owned by `owner`.
    pub fn new(owner: Addr) -> Self {
        Self {
            owner,
            paused: false,
        }
    }

    pub fn ensure_owner(&self, sender: &Addr) -> Result<(), SettlementError> {
        if sender != &self.owner {
            return Err(SettlementError::Unauthorized);
        }
        Ok(())
    }

    pub fn ensure_not_paused(&self) -> Result<(), SettlementError> {
        if self.paused {
            return Err(SettlementError::Paused);
        }
        Ok(())
    }

    /// Owner-only transition into the paused state.
    pub fn pause(&mut self, sender: &Addr) -> Result<(), SettlementError> {
        self.set_paused(sender, true)
    }

    /// Owner-only transition out of the paused state.
    pub fn unpause(&mut self, sender: &Addr) -> Result<(), SettlementError> {
        self.set_paused(sender, false)
    }

    fn set_paused(&mut self, sender: &Addr, paused: bool) -> Result<(), SettlementError> {
        self.ensure_owner(sender)?;
        if self.paused == paused {
            return Err(SettlementError::InvalidPauseState {
                paused: self.paused,
            });
        }
        self.paused = paused;
        Ok(())
    }

    /// Single-step ownership handoff. Returns the previous owner.
    pub fn transfer_ownership(
        &mut self,
        sender: &Addr,
        new_owner: Addr,
    ) -> Result<Addr, SettlementError> {
        self.ensure_owner(sender)?;
        Ok(std::mem::replace(&mut self.owner, new_owner))
    }
}

/// Reject funds attached to messages that do not move value.
pub fn ensure_nonpayable(info: &MessageInfo) -> Result<(), SettlementError> {
    if !info.funds.is_empty() {
        return Err(SettlementError::NonPayable);
    }
    Ok(())
}
