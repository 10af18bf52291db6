use super::test_helpers::*;
use crate::constants::MIN_HEALTH_FACTOR;
use crate::EngineError;
use soroban_sdk::{contract, contractimpl, testutils::Address as _, vec, Address, Env};

/// Token that accepts the call but reports the mint as not done.
#[contract]
pub struct RefusingToken;

#[contractimpl]
impl RefusingToken {
    pub fn mint(_env: Env, _to: Address, _amount: i128) -> bool {
        false
    }
}

#[test]
fn test_mint_records_debt_and_credits_dsc() {
    let env = create_env();
    let ctx = setup(&env);
    let user = ctx.funded_user(&ctx.weth, units(10));
    ctx.client.deposit_collateral(&user, &ctx.weth, &units(10));

    let debt = ctx.client.mint_dsc(&user, &units(9_000));

    assert_eq!(debt, units(9_000));
    assert_eq!(ctx.client.get_dsc_minted(&user), units(9_000));
    assert_eq!(ctx.dsc.balance(&user), units(9_000));
    assert_eq!(ctx.dsc.total_supply(), units(9_000));
}

#[test]
fn test_mint_up_to_exact_threshold() {
    let env = create_env();
    let ctx = setup(&env);
    // $20 000 of collateral backs at most $10 000 of debt
    let user = ctx.open_position(units(10), units(10_000));

    assert_eq!(ctx.client.get_health_factor(&user), MIN_HEALTH_FACTOR);
}

#[test]
fn test_mint_breaking_health_factor_fails() {
    let env = create_env();
    let ctx = setup(&env);
    let user = ctx.funded_user(&ctx.weth, units(10));
    ctx.client.deposit_collateral(&user, &ctx.weth, &units(10));

    assert_eq!(
        ctx.client.try_mint_dsc(&user, &(units(10_000) + 1)),
        Err(Ok(EngineError::BreaksHealthFactor))
    );
    assert_eq!(ctx.client.get_dsc_minted(&user), 0);
    assert_eq!(ctx.dsc.balance(&user), 0);
}

#[test]
fn test_mint_without_collateral_fails() {
    let env = create_env();
    let ctx = setup(&env);
    let user = Address::generate(&env);

    assert_eq!(
        ctx.client.try_mint_dsc(&user, &1),
        Err(Ok(EngineError::BreaksHealthFactor))
    );
}

#[test]
fn test_mint_zero_fails() {
    let env = create_env();
    let ctx = setup(&env);
    let user = ctx.open_position(units(1), units(100));

    assert_eq!(
        ctx.client.try_mint_dsc(&user, &0),
        Err(Ok(EngineError::NeedsMoreThanZero))
    );
}

#[test]
fn test_mint_accumulates_debt() {
    let env = create_env();
    let ctx = setup(&env);
    let user = ctx.open_position(units(10), units(3_000));

    ctx.client.mint_dsc(&user, &units(2_000));

    assert_eq!(ctx.client.get_dsc_minted(&user), units(5_000));
    assert_eq!(ctx.dsc.balance(&user), units(5_000));
}

#[test]
fn test_deposit_and_mint_composite_is_atomic() {
    let env = create_env();
    let ctx = setup(&env);
    let user = ctx.funded_user(&ctx.weth, units(1));

    // $2 000 collateral cannot back $1 001 debt
    let result = ctx.client.try_deposit_collateral_and_mint_dsc(
        &user,
        &ctx.weth,
        &units(1),
        &units(1_001),
    );
    assert_eq!(result, Err(Ok(EngineError::BreaksHealthFactor)));
    assert_eq!(ctx.client.get_collateral_balance_of_user(&user, &ctx.weth), 0);
    assert_eq!(ctx.collateral_balance(&user, &ctx.weth), units(1));
}

#[test]
fn test_refused_mint_fails_with_mint_failed() {
    let env = create_env();
    let (_, client) = create_engine(&env);
    let weth = create_collateral_token(&env);
    let feed = create_price_feed(&env, ETH_USD_PRICE);
    let refusing = env.register(RefusingToken, ());
    client.initialize(&vec![&env, weth.clone()], &vec![&env, feed.address.clone()], &refusing);

    let user = Address::generate(&env);
    soroban_sdk::token::StellarAssetClient::new(&env, &weth).mint(&user, &units(10));
    soroban_sdk::token::Client::new(&env, &weth).approve(
        &user,
        &client.address,
        &units(10),
        &APPROVAL_LEDGER,
    );
    client.deposit_collateral(&user, &weth, &units(10));

    assert_eq!(
        client.try_mint_dsc(&user, &units(100)),
        Err(Ok(EngineError::MintFailed))
    );
    assert_eq!(client.get_dsc_minted(&user), 0);
}
