//! Asset references.
//!
//! On the wire a leg names its asset with a single `token` string. Exactly one
//! value, [`NATIVE_ASSET_SENTINEL`], stands for the native coin; anything else
//! must be a CW20 contract address. Bech32 addresses never equal the
//! sentinel, so the encoding is unambiguous.

use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Api, StdResult};

/// Wire token denoting the native coin.
pub const NATIVE_ASSET_SENTINEL: &str = "native";

/// The asset moved by one leg.
#[cw_serde]
pub enum AssetRef {
    /// The chain's base currency, in the contract's configured denom
    Native,
    /// A CW20 token contract
    Cw20(Addr),
}

impl AssetRef {
    /// Decode the wire form, validating CW20 addresses.
    pub fn from_wire(api: &dyn Api, token: &str) -> StdResult<Self> {
        if token == NATIVE_ASSET_SENTINEL {
            return Ok(AssetRef::Native);
        }
        Ok(AssetRef::Cw20(api.addr_validate(token)?))
    }

    /// Encode back to the wire form used in messages and event attributes.
    pub fn to_wire(&self) -> String {
        match self {
            AssetRef::Native => NATIVE_ASSET_SENTINEL.to_string(),
            AssetRef::Cw20(addr) => addr.to_string(),
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, AssetRef::Native)
    }
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetRef::Native => f.write_str(NATIVE_ASSET_SENTINEL),
            AssetRef::Cw20(addr) => write!(f, "{addr}"),
        }
    }
}
