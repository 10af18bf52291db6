//! # Liquidation
//!
//! Anyone may repay part of the DSC debt of a position whose health factor is
//! below `MIN_HEALTH_FACTOR`. In exchange the liquidator receives collateral
//! worth the repaid amount plus `LIQUIDATION_BONUS` percent.
//!
//! ## Invariants
//! - Only positions below `MIN_HEALTH_FACTOR` can be liquidated.
//! - A successful liquidation strictly raises the debtor's health factor.
//! - The liquidator is left solvent.
//! - Seizing more collateral than the debtor holds of `collateral_asset`
//!   fails with `InsufficientCollateral`. Once collateral value falls below
//!   debt plus bonus the position is therefore no longer attractive to
//!   liquidate; this limitation is accepted.

use soroban_sdk::{contracttype, log, Address, Env};

use crate::burn::burn;
use crate::constants::{LIQUIDATION_BONUS, LIQUIDATION_PRECISION, MIN_HEALTH_FACTOR};
use crate::errors::{require_more_than_zero, EngineError};
use crate::events::Liquidation;
use crate::health::health_factor;
use crate::math::percent_of;
use crate::redeem::redeem;
use crate::storage::require_allowed_token;
use crate::valuation::asset_amount_from_usd;

/// Outcome of a successful liquidation
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LiquidationResult {
    /// DSC burned from the liquidator against the debtor's debt
    pub debt_covered: i128,
    /// Collateral sent to the liquidator, bonus included
    pub collateral_seized: i128,
    /// Bonus part of `collateral_seized`
    pub bonus: i128,
    pub start_health_factor: i128,
    pub end_health_factor: i128,
}

/// Collateral owed for repaying `debt_to_cover` USD: `(base, bonus)`.
pub fn seizure_amounts(
    env: &Env,
    collateral_asset: &Address,
    debt_to_cover: i128,
) -> Result<(i128, i128), EngineError> {
    let base = asset_amount_from_usd(env, collateral_asset, debt_to_cover)?;
    let bonus = percent_of(base, LIQUIDATION_BONUS, LIQUIDATION_PRECISION)?;
    Ok((base, bonus))
}

/// Liquidate part of `user`'s position.
///
/// # Arguments
/// * `liquidator` - Pays `debt_to_cover` DSC and receives the collateral
/// * `collateral_asset` - Collateral to seize
/// * `user` - Undercollateralized position
/// * `debt_to_cover` - DSC to repay on behalf of `user`
///
/// # Errors
/// * `NeedsMoreThanZero` - `debt_to_cover` is zero or negative
/// * `NotAllowedToken` - asset is not in the registry
/// * `HealthFactorOk` - `user` is not liquidatable
/// * `InsufficientCollateral` - `user` holds too little of the asset
/// * `InsufficientDebt` - `debt_to_cover` exceeds `user`'s debt
/// * `HealthFactorNotImproved` - the debtor's health factor did not rise
/// * `LiquidatorHealthFactorBroken` - the liquidator ends up insolvent
pub fn liquidate(
    env: &Env,
    liquidator: &Address,
    collateral_asset: &Address,
    user: &Address,
    debt_to_cover: i128,
) -> Result<LiquidationResult, EngineError> {
    require_more_than_zero(debt_to_cover)?;
    require_allowed_token(env, collateral_asset)?;

    let start_health_factor = health_factor(env, user)?;
    if start_health_factor >= MIN_HEALTH_FACTOR {
        return Err(EngineError::HealthFactorOk);
    }

    let (base, bonus) = seizure_amounts(env, collateral_asset, debt_to_cover)?;
    let collateral_seized = base.checked_add(bonus).ok_or(EngineError::Overflow)?;

    redeem(env, user, liquidator, collateral_asset, collateral_seized)?;
    burn(env, user, liquidator, debt_to_cover)?;

    let end_health_factor = health_factor(env, user)?;
    if end_health_factor <= start_health_factor {
        log!(
            env,
            "liquidation did not improve health factor",
            start_health_factor,
            end_health_factor
        );
        return Err(EngineError::HealthFactorNotImproved);
    }

    if health_factor(env, liquidator)? < MIN_HEALTH_FACTOR {
        return Err(EngineError::LiquidatorHealthFactorBroken);
    }

    Liquidation {
        liquidator: liquidator.clone(),
        user: user.clone(),
        collateral_asset: collateral_asset.clone(),
        debt_covered: debt_to_cover,
        collateral_seized,
        bonus,
        end_health_factor,
    }
    .publish(env);

    Ok(LiquidationResult {
        debt_covered: debt_to_cover,
        collateral_seized,
        bonus,
        start_health_factor,
        end_health_factor,
    })
}
