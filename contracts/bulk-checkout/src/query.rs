//! Query handlers for the Bulk Checkout contract.

use common::leg::parse_legs;
use common::{LegMsg, NativeLedger, ACCESS_GATE};
use cosmwasm_std::{Coin, Deps, Env, StdError, StdResult};

use crate::msg::{ConfigResponse, RequiredFundsResponse};
use crate::state::CONFIG;

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let gate = ACCESS_GATE.load(deps.storage)?;
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: gate.owner,
        paused: gate.paused,
        native_denom: config.native_denom,
    })
}

/// Exact native coin a `Donate` with these donations must carry.
pub fn query_required_funds(
    deps: Deps,
    env: Env,
    donations: Vec<LegMsg>,
) -> StdResult<RequiredFundsResponse> {
    let config = CONFIG.load(deps.storage)?;
    let amount = parse_legs(deps.api, &env.contract.address, &donations)
        .and_then(|legs| NativeLedger::declared_total(&legs))
        .map_err(|e| StdError::generic_err(e.to_string()))?;

    Ok(RequiredFundsResponse {
        amount: Coin {
            denom: config.native_denom,
            amount,
        },
    })
}
