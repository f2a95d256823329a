//! Native value reconciliation.
//!
//! The ledger is built from the funds attached to the current call only. It
//! never looks at the contract's bank balance, so stray coins held by the
//! contract cannot fund a leg, and a re-entrant call starts from its own
//! (usually empty) attachment.

use cosmwasm_std::{Coin, Uint128};

use crate::error::SettlementError;
use crate::leg::Leg;

/// Per-call accounting of attached native value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeLedger {
    declared: Uint128,
    remaining: Uint128,
}

impl NativeLedger {
    /// Sum of all native legs, with overflow checking.
    pub fn declared_total(legs: &[Leg]) -> Result<Uint128, SettlementError> {
        legs.iter()
            .filter(|leg| leg.asset.is_native())
            .try_fold(Uint128::zero(), |total, leg| {
                total.checked_add(leg.amount).map_err(SettlementError::from)
            })
    }

    /// Amount of `denom` attached to the call. Any other denom is rejected.
    pub fn attached(denom: &str, funds: &[Coin]) -> Result<Uint128, SettlementError> {
        let mut attached = Uint128::zero();
        for coin in funds {
            if coin.denom != denom {
                return Err(SettlementError::UnexpectedFunds {
                    denom: coin.denom.clone(),
                });
            }
            attached = attached.checked_add(coin.amount)?;
        }
        Ok(attached)
    }

    /// Open the ledger for a batch.
    ///
    /// Surplus is rejected here, before any leg is processed. A deficit is
    /// only detected when the first unfundable native leg is debited.
    pub fn open(denom: &str, funds: &[Coin], legs: &[Leg]) -> Result<Self, SettlementError> {
        let declared = Self::declared_total(legs)?;
        let attached = Self::attached(denom, funds)?;
        if attached > declared {
            return Err(SettlementError::ExcessNativeValue { attached, declared });
        }
        Ok(Self {
            declared,
            remaining: attached,
        })
    }

    /// Fund native leg `index` from the remaining attached value.
    pub fn debit(&mut self, index: usize, amount: Uint128) -> Result<(), SettlementError> {
        let available = self.remaining;
        self.remaining =
            available
                .checked_sub(amount)
                .map_err(|_| SettlementError::InsufficientBalance {
                    index,
                    required: amount,
                    available,
                })?;
        Ok(())
    }

    pub fn declared(&self) -> Uint128 {
        self.declared
    }

    pub fn remaining(&self) -> Uint128 {
        self.remaining
    }

    /// Close the ledger once every leg was debited. Nothing may be left over.
    pub fn close(self) -> Result<Uint128, SettlementError> {
        if !self.remaining.is_zero() {
            return Err(SettlementError::ExcessNativeValue {
                attached: self.declared + self.remaining,
                declared: self.declared,
            });
        }
        Ok(self.declared)
    }
}
