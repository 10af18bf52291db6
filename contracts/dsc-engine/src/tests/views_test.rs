use super::test_helpers::*;
use crate::constants::{
    LIQUIDATION_BONUS, LIQUIDATION_PRECISION, LIQUIDATION_THRESHOLD, MIN_HEALTH_FACTOR,
    ORACLE_TIMEOUT, PRECISION,
};
use crate::{AccountInformation, EngineError};
use soroban_sdk::{testutils::Address as _, Address};

#[test]
fn test_account_information() {
    let env = create_env();
    let ctx = setup(&env);
    let user = ctx.open_position(units(10), units(9_000));

    assert_eq!(
        ctx.client.get_account_information(&user),
        AccountInformation {
            total_dsc_minted: units(9_000),
            collateral_value_in_usd: units(20_000),
        }
    );
}

#[test]
fn test_account_information_of_unknown_user_is_empty() {
    let env = create_env();
    let ctx = setup(&env);
    let stranger = Address::generate(&env);

    assert_eq!(
        ctx.client.get_account_information(&stranger),
        AccountInformation {
            total_dsc_minted: 0,
            collateral_value_in_usd: 0,
        }
    );
    assert_eq!(ctx.client.get_account_collateral_value(&stranger), 0);
    assert_eq!(
        ctx.client.get_collateral_balance_of_user(&stranger, &ctx.weth),
        0
    );
    assert_eq!(ctx.client.get_dsc_minted(&stranger), 0);
}

#[test]
fn test_account_information_follows_price() {
    let env = create_env();
    let ctx = setup(&env);
    let user = ctx.open_position(units(10), units(1_000));

    ctx.set_eth_price(3_000);

    assert_eq!(
        ctx.client.get_account_information(&user).collateral_value_in_usd,
        units(30_000)
    );
}

#[test]
fn test_reads_are_idempotent() {
    let env = create_env();
    let ctx = setup(&env);
    let user = ctx.open_position(units(10), units(9_000));

    let first = (
        ctx.client.get_account_information(&user),
        ctx.client.get_health_factor(&user),
    );
    let second = (
        ctx.client.get_account_information(&user),
        ctx.client.get_health_factor(&user),
    );
    assert_eq!(first, second);
}

#[test]
fn test_protocol_constants() {
    let env = create_env();
    let ctx = setup(&env);

    assert_eq!(ctx.client.get_precision(), PRECISION);
    assert_eq!(ctx.client.get_liquidation_threshold(), LIQUIDATION_THRESHOLD);
    assert_eq!(ctx.client.get_liquidation_precision(), LIQUIDATION_PRECISION);
    assert_eq!(ctx.client.get_liquidation_bonus(), LIQUIDATION_BONUS);
    assert_eq!(ctx.client.get_min_health_factor(), MIN_HEALTH_FACTOR);
    assert_eq!(ctx.client.get_timeout(), ORACLE_TIMEOUT);
    assert_eq!(ctx.client.get_liquidation_threshold(), 50);
    assert_eq!(ctx.client.get_liquidation_bonus(), 10);
}

#[test]
fn test_additional_feed_precision_for_8_decimal_feed() {
    let env = create_env();
    let ctx = setup(&env);

    assert_eq!(
        ctx.client.get_additional_feed_precision(&ctx.weth),
        10_000_000_000
    );
}

#[test]
fn test_unregistered_asset_reads_fail() {
    let env = create_env();
    let ctx = setup(&env);
    let other = create_collateral_token(&env);

    assert_eq!(
        ctx.client.try_get_collateral_token_price_feed(&other),
        Err(Ok(EngineError::NotAllowedToken))
    );
    assert_eq!(
        ctx.client.try_get_usd_value(&other, &units(1)),
        Err(Ok(EngineError::NotAllowedToken))
    );
    assert_eq!(
        ctx.client.try_get_additional_feed_precision(&other),
        Err(Ok(EngineError::NotAllowedToken))
    );
}

#[test]
fn test_usd_round_trip_recovers_amount() {
    let env = create_env();
    let ctx = setup(&env);
    ctx.set_eth_price(1_234);

    for amount in [1, 7, 999_999, units(3) + 17, units(12_345)] {
        let usd = ctx.client.get_usd_value(&ctx.weth, &amount);
        let back = ctx.client.get_token_amount_from_usd(&ctx.weth, &usd);
        assert!(
            amount - back <= 1 && back <= amount,
            "amount {} came back as {}",
            amount,
            back
        );
    }
}
