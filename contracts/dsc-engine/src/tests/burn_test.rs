use super::test_helpers::*;
use crate::EngineError;
use soroban_sdk::{contract, contractimpl, testutils::Address as _, token, vec, Address, Env};

/// Token that mints and moves balances but traps on `burn`.
#[contract]
pub struct NonBurningToken;

#[contractimpl]
impl NonBurningToken {
    pub fn mint(_env: Env, _to: Address, _amount: i128) -> bool {
        true
    }

    pub fn transfer_from(
        _env: Env,
        _spender: Address,
        _from: Address,
        _to: Address,
        _amount: i128,
    ) {
    }

    pub fn burn(_env: Env, _amount: i128) {
        panic!("burn disabled");
    }
}

#[test]
fn test_burn_retires_debt_and_supply() {
    let env = create_env();
    let ctx = setup(&env);
    let user = ctx.open_position(units(10), units(9_000));
    ctx.approve_dsc(&user, units(4_000));

    let remaining = ctx.client.burn_dsc(&user, &units(4_000));

    assert_eq!(remaining, units(5_000));
    assert_eq!(ctx.client.get_dsc_minted(&user), units(5_000));
    assert_eq!(ctx.dsc.balance(&user), units(5_000));
    assert_eq!(ctx.dsc.total_supply(), units(5_000));
    assert_eq!(ctx.dsc.balance(&ctx.engine), 0);
}

#[test]
fn test_burn_full_debt_restores_no_debt_health_factor() {
    let env = create_env();
    let ctx = setup(&env);
    let user = ctx.open_position(units(10), units(9_000));
    ctx.approve_dsc(&user, units(9_000));

    ctx.client.burn_dsc(&user, &units(9_000));

    assert_eq!(ctx.client.get_dsc_minted(&user), 0);
    assert_eq!(ctx.client.get_health_factor(&user), i128::MAX);
}

#[test]
fn test_burn_more_than_debt_fails() {
    let env = create_env();
    let ctx = setup(&env);
    let user = ctx.open_position(units(10), units(1_000));
    ctx.approve_dsc(&user, units(2_000));

    assert_eq!(
        ctx.client.try_burn_dsc(&user, &units(1_001)),
        Err(Ok(EngineError::InsufficientDebt))
    );
    assert_eq!(ctx.client.get_dsc_minted(&user), units(1_000));
}

#[test]
fn test_burn_without_allowance_fails() {
    let env = create_env();
    let ctx = setup(&env);
    let user = ctx.open_position(units(10), units(1_000));

    assert_eq!(
        ctx.client.try_burn_dsc(&user, &units(500)),
        Err(Ok(EngineError::TransferFailed))
    );
    assert_eq!(ctx.client.get_dsc_minted(&user), units(1_000));
    assert_eq!(ctx.dsc.balance(&user), units(1_000));
}

#[test]
fn test_burn_zero_fails() {
    let env = create_env();
    let ctx = setup(&env);
    let user = ctx.open_position(units(10), units(1_000));

    assert_eq!(
        ctx.client.try_burn_dsc(&user, &0),
        Err(Ok(EngineError::NeedsMoreThanZero))
    );
}

#[test]
fn test_failed_token_burn_rolls_back_debt() {
    let env = create_env();
    let (_, client) = create_engine(&env);
    let weth = create_collateral_token(&env);
    let feed = create_price_feed(&env, ETH_USD_PRICE);
    let non_burning = env.register(NonBurningToken, ());
    client.initialize(&vec![&env, weth.clone()], &vec![&env, feed.address.clone()], &non_burning);

    let user = Address::generate(&env);
    token::StellarAssetClient::new(&env, &weth).mint(&user, &units(10));
    token::Client::new(&env, &weth).approve(&user, &client.address, &units(10), &APPROVAL_LEDGER);
    client.deposit_collateral_and_mint_dsc(&user, &weth, &units(10), &units(1_000));

    assert_eq!(
        client.try_burn_dsc(&user, &units(400)),
        Err(Ok(EngineError::BurnFailed))
    );
    assert_eq!(client.get_dsc_minted(&user), units(1_000));
}
