//! Query handlers for the Batch Deposit contract.

use common::{NativeLedger, ACCESS_GATE};
use cosmwasm_std::{Addr, Coin, Deps, Env, Order, StdError, StdResult};
use cw20::AllowanceResponse;
use cw_storage_plus::Bound;

use crate::execute::{parse_deposits, query_allowance};
use crate::msg::{AcceptedTokensResponse, ConfigResponse, DepositLeg, RequiredFundsResponse};
use crate::state::{ACCEPTED_TOKENS, CONFIG};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let gate = ACCESS_GATE.load(deps.storage)?;
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: gate.owner,
        paused: gate.paused,
        bridge: config.bridge,
        native_denom: config.native_denom,
    })
}

/// Query paginated list of accepted tokens.
pub fn query_accepted_tokens(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<AcceptedTokensResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start_after = start_after
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;
    let start = start_after.as_ref().map(Bound::exclusive);

    let tokens = ACCEPTED_TOKENS
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .collect::<StdResult<Vec<Addr>>>()?;

    Ok(AcceptedTokensResponse { tokens })
}

/// Live allowance this contract grants the bridge on `token`.
pub fn query_bridge_allowance(deps: Deps, env: Env, token: String) -> StdResult<AllowanceResponse> {
    let config = CONFIG.load(deps.storage)?;
    let token = deps.api.addr_validate(&token)?;
    query_allowance(&deps.querier, &token, &env.contract.address, &config.bridge)
}

/// Exact native coin a `Deposit` with these deposits must carry.
pub fn query_required_funds(
    deps: Deps,
    env: Env,
    recipient: String,
    deposits: Vec<DepositLeg>,
) -> StdResult<RequiredFundsResponse> {
    let config = CONFIG.load(deps.storage)?;
    let amount = parse_deposits(deps, &env.contract.address, &recipient, &deposits)
        .map_err(|e| StdError::generic_err(e.to_string()))
        .and_then(|legs| {
            NativeLedger::declared_total(&legs).map_err(|e| StdError::generic_err(e.to_string()))
        })?;

    Ok(RequiredFundsResponse {
        amount: Coin {
            denom: config.native_denom,
            amount,
        },
    })
}
