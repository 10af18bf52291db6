//! # Valuation
//!
//! Converts collateral amounts to USD and USD amounts back to collateral,
//! using the registered price feed of each asset.
//!
//! - `usd_value = price * scale * amount / PRECISION`
//! - `asset_amount_from_usd = usd * PRECISION / (price * scale)`
//!
//! where `scale` lifts the feed's decimals to 18. Both round down.

use soroban_sdk::{Address, Env};

use crate::constants::PRECISION;
use crate::errors::EngineError;
use crate::math::mul_div_floor;
use crate::oracle::{latest_price, PriceQuote};
use crate::storage::{read_collateral, read_collateral_tokens, read_price_feed};

fn quote(env: &Env, asset: &Address) -> Result<PriceQuote, EngineError> {
    let feed = read_price_feed(env, asset)?;
    Ok(latest_price(env, &feed)?)
}

fn normalized_price(env: &Env, asset: &Address) -> Result<i128, EngineError> {
    quote(env, asset)?.normalized().ok_or(EngineError::Overflow)
}

/// USD value (18 decimals) of `amount` of `asset`.
pub fn usd_value(env: &Env, asset: &Address, amount: i128) -> Result<i128, EngineError> {
    if amount < 0 {
        return Err(EngineError::NeedsMoreThanZero);
    }
    let price = normalized_price(env, asset)?;
    mul_div_floor(env, price, amount, PRECISION)
}

/// Amount of `asset` worth `usd_amount` (18 decimals).
pub fn asset_amount_from_usd(
    env: &Env,
    asset: &Address,
    usd_amount: i128,
) -> Result<i128, EngineError> {
    if usd_amount < 0 {
        return Err(EngineError::NeedsMoreThanZero);
    }
    let price = normalized_price(env, asset)?;
    mul_div_floor(env, usd_amount, PRECISION, price)
}

/// Total USD value of everything `user` has deposited, across the registry.
pub fn account_collateral_value(env: &Env, user: &Address) -> Result<i128, EngineError> {
    let mut total: i128 = 0;
    for asset in read_collateral_tokens(env)?.iter() {
        let amount = read_collateral(env, user, &asset);
        if amount == 0 {
            continue;
        }
        total = total
            .checked_add(usd_value(env, &asset, amount)?)
            .ok_or(EngineError::Overflow)?;
    }
    Ok(total)
}
