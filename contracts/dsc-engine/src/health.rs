//! # Health Factor
//!
//! `health_factor = (collateral_value * LIQUIDATION_THRESHOLD / LIQUIDATION_PRECISION) * PRECISION / debt`
//!
//! `PRECISION` (1e18) is 1.0. At or above it the position is solvent; below it
//! the position can be liquidated. A position without debt reports
//! `HEALTH_FACTOR_NO_DEBT`.

use soroban_sdk::{Address, Env};

use crate::constants::{
    HEALTH_FACTOR_NO_DEBT, LIQUIDATION_PRECISION, LIQUIDATION_THRESHOLD, MIN_HEALTH_FACTOR,
    PRECISION,
};
use crate::errors::EngineError;
use crate::math::{mul_div_floor, percent_of};
use crate::storage::read_debt;
use crate::valuation::account_collateral_value;

/// Pure health factor over a debt amount and a collateral value.
///
/// A negative collateral value is rejected with `NeedsMoreThanZero`.
pub fn calculate_health_factor(
    env: &Env,
    total_dsc_minted: i128,
    collateral_value_in_usd: i128,
) -> Result<i128, EngineError> {
    if collateral_value_in_usd < 0 {
        return Err(EngineError::NeedsMoreThanZero);
    }
    if total_dsc_minted <= 0 {
        return Ok(HEALTH_FACTOR_NO_DEBT);
    }
    let adjusted = percent_of(
        collateral_value_in_usd,
        LIQUIDATION_THRESHOLD,
        LIQUIDATION_PRECISION,
    )?;
    mul_div_floor(env, adjusted, PRECISION, total_dsc_minted)
}

/// Debt and collateral value of `user` at current prices.
pub fn account_information(env: &Env, user: &Address) -> Result<(i128, i128), EngineError> {
    let total_dsc_minted = read_debt(env, user);
    let collateral_value = account_collateral_value(env, user)?;
    Ok((total_dsc_minted, collateral_value))
}

/// Health factor of `user` at current prices.
pub fn health_factor(env: &Env, user: &Address) -> Result<i128, EngineError> {
    let total_dsc_minted = read_debt(env, user);
    if total_dsc_minted == 0 {
        return Ok(HEALTH_FACTOR_NO_DEBT);
    }
    let collateral_value = account_collateral_value(env, user)?;
    calculate_health_factor(env, total_dsc_minted, collateral_value)
}

/// Fail with `BreaksHealthFactor` if `user` is below `MIN_HEALTH_FACTOR`.
pub fn revert_if_health_factor_is_broken(env: &Env, user: &Address) -> Result<(), EngineError> {
    if health_factor(env, user)? < MIN_HEALTH_FACTOR {
        return Err(EngineError::BreaksHealthFactor);
    }
    Ok(())
}
