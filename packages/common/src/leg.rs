//! Transfer legs: wire form and validation.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Api, Uint128};

use crate::asset::AssetRef;
use crate::error::SettlementError;

/// One transfer instruction as submitted by the caller.
#[cw_serde]
pub struct LegMsg {
    /// CW20 contract address, or `"native"` for the native coin
    pub token: String,
    /// Amount in the asset's smallest unit
    pub amount: Uint128,
    /// Address receiving the value
    pub dest: String,
}

/// A validated transfer instruction.
#[cw_serde]
pub struct Leg {
    pub asset: AssetRef,
    pub amount: Uint128,
    pub destination: Addr,
}

impl Leg {
    /// Validate one leg of a batch.
    ///
    /// Zero amounts and destinations equal to the contract itself are
    /// rejected: neither can move value out of the caller's hands.
    pub fn parse(
        api: &dyn Api,
        contract: &Addr,
        index: usize,
        token: &str,
        amount: Uint128,
        dest: &str,
    ) -> Result<Self, SettlementError> {
        if amount.is_zero() {
            return Err(SettlementError::InvalidLeg {
                index,
                reason: "amount must be greater than zero".to_string(),
            });
        }

        let asset = AssetRef::from_wire(api, token)?;
        let destination = api.addr_validate(dest)?;
        if &destination == contract {
            return Err(SettlementError::InvalidLeg {
                index,
                reason: "destination cannot be the contract itself".to_string(),
            });
        }

        Ok(Self {
            asset,
            amount,
            destination,
        })
    }
}

/// Validate a full batch of wire legs, preserving order.
pub fn parse_legs(
    api: &dyn Api,
    contract: &Addr,
    legs: &[LegMsg],
) -> Result<Vec<Leg>, SettlementError> {
    legs.iter()
        .enumerate()
        .map(|(index, leg)| Leg::parse(api, contract, index, &leg.token, leg.amount, &leg.dest))
        .collect()
}
