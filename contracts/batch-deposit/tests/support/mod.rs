//! Shared setup for the Batch Deposit integration tests.
//!
//! Provides a mock bridge that records deposits and pulls CW20 deposits from
//! the sender with `TransferFrom`, like a real bridge would.

#![allow(dead_code)]

use batch_deposit::bridge::BridgeExecuteMsg;
use batch_deposit::msg::{DepositLeg, ExecuteMsg, InstantiateMsg};
use batch_deposit::ContractError;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    coins, to_json_binary, Addr, Binary, Coin, Deps, DepsMut, Empty, Env, MessageInfo, Response,
    StdError, StdResult, Uint128, WasmMsg,
};
use cw20::{Cw20Coin, Cw20ExecuteMsg};
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};
use cw_storage_plus::{Item, Map};

pub const DENOM: &str = "uluna";
pub const TOKEN_MINT: u128 = 100;

// ============================================================================
// Mock Bridge
// ============================================================================

#[cw_serde]
pub struct MockBridgeInstantiateMsg {
    /// Refuse every native deposit
    pub reject_native: bool,
}

#[cw_serde]
pub enum MockBridgeQueryMsg {
    /// Total deposited for `recipient`; `token` is `"native"` or a CW20 address
    Deposited { token: String, recipient: String },
}

const REJECT_NATIVE: Item<bool> = Item::new("reject_native");
const DEPOSITED: Map<(&str, &str), Uint128> = Map::new("deposited");

fn record(deps: DepsMut, token: &str, recipient: &str, amount: Uint128) -> StdResult<()> {
    DEPOSITED.update(deps.storage, (token, recipient), |total| {
        Ok::<_, StdError>(total.unwrap_or_default() + amount)
    })?;
    Ok(())
}

fn bridge_instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: MockBridgeInstantiateMsg,
) -> StdResult<Response> {
    REJECT_NATIVE.save(deps.storage, &msg.reject_native)?;
    Ok(Response::new())
}

fn bridge_execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: BridgeExecuteMsg,
) -> StdResult<Response> {
    match msg {
        BridgeExecuteMsg::DepositNative { recipient } => {
            if REJECT_NATIVE.load(deps.storage)? {
                return Err(StdError::generic_err("native deposits disabled"));
            }
            let amount: Uint128 = info
                .funds
                .iter()
                .filter(|c| c.denom == DENOM)
                .map(|c| c.amount)
                .sum();
            record(deps, "native", &recipient, amount)?;
            Ok(Response::new())
        }
        BridgeExecuteMsg::DepositCw20 {
            token,
            amount,
            recipient,
        } => {
            record(deps, &token, &recipient, amount)?;
            let pull = WasmMsg::Execute {
                contract_addr: token,
                msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
                    owner: info.sender.to_string(),
                    recipient: env.contract.address.to_string(),
                    amount,
                })?,
                funds: vec![],
            };
            Ok(Response::new().add_message(pull))
        }
    }
}

fn bridge_query(deps: Deps, _env: Env, msg: MockBridgeQueryMsg) -> StdResult<Binary> {
    match msg {
        MockBridgeQueryMsg::Deposited { token, recipient } => to_json_binary(
            &DEPOSITED
                .may_load(deps.storage, (&token, &recipient))?
                .unwrap_or_default(),
        ),
    }
}

// ============================================================================
// Contracts
// ============================================================================

pub fn contract_deposit() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        batch_deposit::contract::execute,
        batch_deposit::contract::instantiate,
        batch_deposit::contract::query,
    )
    .with_reply(batch_deposit::contract::reply);
    Box::new(contract)
}

fn contract_bridge() -> Box<dyn cw_multi_test::Contract<Empty>> {
    Box::new(ContractWrapper::new(
        bridge_execute,
        bridge_instantiate,
        bridge_query,
    ))
}

fn contract_cw20() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

// ============================================================================
// Test Setup
// ============================================================================

pub struct Suite {
    pub app: App,
    pub deposit: Addr,
    pub bridge: Addr,
    pub dai: Addr,
    pub usdc: Addr,
    pub owner: Addr,
    pub user: Addr,
    pub alice: Addr,
    pub cw20_code: u64,
}

pub fn setup() -> Suite {
    setup_with(false)
}

/// Setup with a bridge that refuses native deposits.
pub fn setup_with(reject_native: bool) -> Suite {
    let mut app = App::default();
    let owner = Addr::unchecked("terra1owner");
    let user = Addr::unchecked("terra1user");
    let alice = Addr::unchecked("terra1alice");

    app.init_modules(|router, _, storage| {
        router
            .bank
            .init_balance(
                storage,
                &user,
                vec![Coin::new(1_000, DENOM), Coin::new(1_000, "uusd")],
            )
            .unwrap();
        router
            .bank
            .init_balance(storage, &owner, coins(1_000, DENOM))
            .unwrap();
    });

    let cw20_code = app.store_code(contract_cw20());
    let dai = create_token(&mut app, cw20_code, &owner, &user, "DAI");
    let usdc = create_token(&mut app, cw20_code, &owner, &user, "USDC");

    let bridge_code = app.store_code(contract_bridge());
    let bridge = app
        .instantiate_contract(
            bridge_code,
            owner.clone(),
            &MockBridgeInstantiateMsg { reject_native },
            &[],
            "bridge",
            None,
        )
        .unwrap();

    let deposit_code = app.store_code(contract_deposit());
    let deposit = app
        .instantiate_contract(
            deposit_code,
            owner.clone(),
            &InstantiateMsg {
                bridge: bridge.to_string(),
                native_denom: DENOM.to_string(),
                accepted_tokens: vec![dai.to_string(), usdc.to_string()],
            },
            &[],
            "batch-deposit",
            Some(owner.to_string()),
        )
        .unwrap();

    for token in [&dai, &usdc] {
        approve(&mut app, &user, token, &deposit, u128::MAX);
    }

    Suite {
        app,
        deposit,
        bridge,
        dai,
        usdc,
        owner,
        user,
        alice,
        cw20_code,
    }
}

pub fn create_token(
    app: &mut App,
    code_id: u64,
    minter: &Addr,
    holder: &Addr,
    symbol: &str,
) -> Addr {
    app.instantiate_contract(
        code_id,
        minter.clone(),
        &cw20_base::msg::InstantiateMsg {
            name: format!("Test Token {symbol}"),
            symbol: symbol.to_string(),
            decimals: 6,
            initial_balances: vec![Cw20Coin {
                address: holder.to_string(),
                amount: Uint128::from(TOKEN_MINT),
            }],
            mint: None,
            marketing: None,
        },
        &[],
        symbol,
        None,
    )
    .unwrap()
}

pub fn approve(app: &mut App, owner: &Addr, token: &Addr, spender: &Addr, amount: u128) {
    app.execute_contract(
        owner.clone(),
        token.clone(),
        &Cw20ExecuteMsg::IncreaseAllowance {
            spender: spender.to_string(),
            amount: Uint128::from(amount),
            expires: None,
        },
        &[],
    )
    .unwrap();
}

pub fn dep(token: &str, amount: u128) -> DepositLeg {
    DepositLeg {
        token: token.to_string(),
        amount: Uint128::from(amount),
    }
}

/// User deposits for alice with `native` uluna attached.
pub fn deposit(
    suite: &mut Suite,
    deposits: Vec<DepositLeg>,
    native: u128,
) -> Result<AppResponse, String> {
    let funds = if native > 0 {
        coins(native, DENOM)
    } else {
        vec![]
    };
    let msg = ExecuteMsg::Deposit {
        recipient: suite.alice.to_string(),
        deposits,
    };
    suite
        .app
        .execute_contract(suite.user.clone(), suite.deposit.clone(), &msg, &funds)
        .map_err(|e| format!("{e:?}"))
}

pub fn execute(
    suite: &mut Suite,
    sender: &Addr,
    msg: &ExecuteMsg,
    funds: &[Coin],
) -> Result<AppResponse, String> {
    suite
        .app
        .execute_contract(sender.clone(), suite.deposit.clone(), msg, funds)
        .map_err(|e| format!("{e:?}"))
}

/// The error chain of a failed execution must mention `expected`.
pub fn assert_failed_with<T: std::fmt::Debug>(
    res: Result<T, String>,
    expected: impl Into<ContractError>,
) {
    let expected = expected.into().to_string();
    let err = res.unwrap_err();
    assert!(
        err.contains(&expected),
        "expected error containing {expected:?}, got: {err}"
    );
}

pub fn cw20_balance(app: &App, token: &Addr, account: &Addr) -> u128 {
    let res: cw20::BalanceResponse = app
        .wrap()
        .query_wasm_smart(
            token,
            &cw20::Cw20QueryMsg::Balance {
                address: account.to_string(),
            },
        )
        .unwrap();
    res.balance.u128()
}

pub fn native_balance(app: &App, account: &Addr) -> u128 {
    app.wrap()
        .query_balance(account, DENOM)
        .unwrap()
        .amount
        .u128()
}

/// Amount the bridge credited to `recipient` in `token`.
pub fn bridged(suite: &Suite, token: &str, recipient: &Addr) -> u128 {
    let amount: Uint128 = suite
        .app
        .wrap()
        .query_wasm_smart(
            &suite.bridge,
            &MockBridgeQueryMsg::Deposited {
                token: token.to_string(),
                recipient: recipient.to_string(),
            },
        )
        .unwrap();
    amount.u128()
}

pub fn event_attr(res: &AppResponse, ty: &str, key: &str) -> Option<String> {
    res.events
        .iter()
        .find(|e| e.ty == format!("wasm-{ty}"))
        .and_then(|e| e.attributes.iter().find(|a| a.key == key))
        .map(|a| a.value.clone())
}
