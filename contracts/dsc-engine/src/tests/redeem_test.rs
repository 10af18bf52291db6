use super::test_helpers::*;
use crate::EngineError;

#[test]
fn test_redeem_returns_collateral() {
    let env = create_env();
    let ctx = setup(&env);
    let user = ctx.funded_user(&ctx.weth, units(10));
    ctx.client.deposit_collateral(&user, &ctx.weth, &units(10));

    let remaining = ctx.client.redeem_collateral(&user, &ctx.weth, &units(4));

    assert_eq!(remaining, units(6));
    assert_eq!(ctx.collateral_balance(&user, &ctx.weth), units(4));
    assert_eq!(ctx.collateral_balance(&ctx.engine, &ctx.weth), units(6));
}

#[test]
fn test_redeem_more_than_deposited_fails() {
    let env = create_env();
    let ctx = setup(&env);
    let user = ctx.funded_user(&ctx.weth, units(1));
    ctx.client.deposit_collateral(&user, &ctx.weth, &units(1));

    assert_eq!(
        ctx.client.try_redeem_collateral(&user, &ctx.weth, &(units(1) + 1)),
        Err(Ok(EngineError::InsufficientCollateral))
    );
    assert_eq!(
        ctx.client.get_collateral_balance_of_user(&user, &ctx.weth),
        units(1)
    );
}

#[test]
fn test_redeem_zero_fails() {
    let env = create_env();
    let ctx = setup(&env);
    let user = ctx.funded_user(&ctx.weth, units(1));
    ctx.client.deposit_collateral(&user, &ctx.weth, &units(1));

    assert_eq!(
        ctx.client.try_redeem_collateral(&user, &ctx.weth, &0),
        Err(Ok(EngineError::NeedsMoreThanZero))
    );
}

#[test]
fn test_redeem_keeping_health_factor_at_one_succeeds() {
    let env = create_env();
    let ctx = setup(&env);
    let user = ctx.open_position(units(10), units(9_000));

    // 9 wETH at $2 000, half counted: exactly $9 000
    ctx.client.redeem_collateral(&user, &ctx.weth, &units(1));

    assert_eq!(ctx.client.get_health_factor(&user), units(1));
}

#[test]
fn test_redeem_breaking_health_factor_fails() {
    let env = create_env();
    let ctx = setup(&env);
    let user = ctx.open_position(units(10), units(9_000));

    assert_eq!(
        ctx.client.try_redeem_collateral(&user, &ctx.weth, &units(2)),
        Err(Ok(EngineError::BreaksHealthFactor))
    );
    assert_eq!(
        ctx.client.get_collateral_balance_of_user(&user, &ctx.weth),
        units(10)
    );
    assert_eq!(ctx.collateral_balance(&user, &ctx.weth), 0);
}

#[test]
fn test_redeem_collateral_for_dsc_closes_position() {
    let env = create_env();
    let ctx = setup(&env);
    let user = ctx.open_position(units(10), units(9_000));
    ctx.approve_dsc(&user, units(9_000));

    let remaining =
        ctx.client
            .redeem_collateral_for_dsc(&user, &ctx.weth, &units(10), &units(9_000));

    assert_eq!(remaining, 0);
    assert_eq!(ctx.client.get_dsc_minted(&user), 0);
    assert_eq!(ctx.collateral_balance(&user, &ctx.weth), units(10));
    assert_eq!(ctx.dsc.balance(&user), 0);
    assert_eq!(ctx.dsc.total_supply(), 0);
}

#[test]
fn test_redeem_collateral_for_dsc_checks_reduced_debt() {
    let env = create_env();
    let ctx = setup(&env);
    let user = ctx.open_position(units(10), units(9_000));
    ctx.approve_dsc(&user, units(1_000));

    // debt 8 000 needs 8 wETH; 7 would remain
    let result =
        ctx.client
            .try_redeem_collateral_for_dsc(&user, &ctx.weth, &units(3), &units(1_000));
    assert_eq!(result, Err(Ok(EngineError::BreaksHealthFactor)));
    assert_eq!(ctx.client.get_dsc_minted(&user), units(9_000));
    assert_eq!(ctx.dsc.balance(&user), units(9_000));

    // 8 wETH remaining backs 8 000 exactly
    ctx.client
        .redeem_collateral_for_dsc(&user, &ctx.weth, &units(2), &units(1_000));
    assert_eq!(ctx.client.get_dsc_minted(&user), units(8_000));
    assert_eq!(ctx.client.get_health_factor(&user), units(1));
}
