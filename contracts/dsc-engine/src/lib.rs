//! # DSC Engine
//!
//! Collateralized debt engine behind the DSC synthetic dollar.
//!
//! Users deposit allow-listed collateral tokens and mint DSC against them.
//! Every position must keep a health factor of at least 1.0, where only
//! `LIQUIDATION_THRESHOLD` percent of the collateral value counts toward the
//! debt (200% backing). Positions that drop below 1.0 after a price move can
//! be partially repaid by anyone in exchange for the matching collateral plus
//! a `LIQUIDATION_BONUS` percent reward.
//!
//! The engine owns the DSC token contract: it is the only address allowed to
//! mint or burn DSC.
//!
//! ## Atomicity
//! Every entry point is a single invocation. Any error reverts all of its
//! storage writes and token movements, so ledgers never hold the effect of a
//! half-finished operation. State-changing entry points additionally hold a
//! reentrancy guard for their whole duration.

#![no_std]
#![allow(deprecated)]

use soroban_sdk::{contract, contractimpl, Address, Env, Map, Vec};

pub mod constants;
mod dsc;
pub mod errors;
mod events;
mod health;
mod math;
pub mod oracle;
mod reentrancy;
mod storage;
mod valuation;
mod views;

mod burn;
mod deposit;
mod liquidate;
mod mint;
mod redeem;

#[cfg(test)]
mod tests;

pub use dsc::{StableTokenClient, StableTokenInterface};
pub use errors::EngineError;
pub use liquidate::LiquidationResult;
pub use oracle::{OracleError, PriceFeedClient, PriceFeedInterface, RoundData};
pub use views::AccountInformation;

use constants::{
    LIQUIDATION_BONUS, LIQUIDATION_PRECISION, LIQUIDATION_THRESHOLD, MIN_HEALTH_FACTOR,
    ORACLE_TIMEOUT, PRECISION,
};
use events::EngineInitialized;
use reentrancy::ReentrancyGuard;
use storage::require_initialized;

#[contract]
pub struct DscEngine;

#[contractimpl]
impl DscEngine {
    /// Record the deployer allowed to run `initialize`
    pub fn __constructor(env: Env, admin: Address) {
        storage::write_admin(&env, &admin);
    }

    /// Set the collateral registry and the DSC token address (admin only)
    ///
    /// Can only be called once. `collateral_assets[i]` is priced by
    /// `price_feeds[i]`. Ownership of the DSC token must be transferred to
    /// this contract before DSC can be minted.
    ///
    /// # Errors
    /// - `AlreadyInitialized` - Called more than once
    /// - `AssetFeedLengthMismatch` - Lists differ in length
    /// - `DuplicateAsset` - An asset is listed twice
    pub fn initialize(
        env: Env,
        collateral_assets: Vec<Address>,
        price_feeds: Vec<Address>,
        dsc: Address,
    ) -> Result<(), EngineError> {
        if storage::is_initialized(&env) {
            return Err(EngineError::AlreadyInitialized);
        }
        storage::read_admin(&env)?.require_auth();

        if collateral_assets.len() != price_feeds.len() {
            return Err(EngineError::AssetFeedLengthMismatch);
        }

        let mut seen: Map<Address, bool> = Map::new(&env);
        for asset in collateral_assets.iter() {
            if seen.contains_key(asset.clone()) {
                return Err(EngineError::DuplicateAsset);
            }
            seen.set(asset, true);
        }

        storage::write_config(&env, &collateral_assets, &price_feeds, &dsc);

        EngineInitialized {
            collateral_tokens: collateral_assets,
            price_feeds,
            dsc,
        }
        .publish(&env);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Position operations
    // ─────────────────────────────────────────────────────────────────────

    /// Deposit collateral
    ///
    /// The engine pulls `amount` of `asset` with `transfer_from`, so `user`
    /// must have approved the engine beforehand.
    ///
    /// # Arguments
    /// * `user` - Depositor (must authorize)
    /// * `asset` - Registered collateral asset
    /// * `amount` - Amount in the asset's smallest unit
    ///
    /// # Returns
    /// The user's new collateral balance in `asset`
    ///
    /// # Errors
    /// - `NeedsMoreThanZero` - Amount is zero or negative
    /// - `NotAllowedToken` - Asset is not registered
    /// - `TransferFailed` - Balance or allowance too low
    pub fn deposit_collateral(
        env: Env,
        user: Address,
        asset: Address,
        amount: i128,
    ) -> Result<i128, EngineError> {
        require_initialized(&env)?;
        let _guard = ReentrancyGuard::new(&env)?;
        user.require_auth();
        deposit::deposit_collateral(&env, &user, &asset, amount)
    }

    /// Withdraw collateral
    ///
    /// # Returns
    /// The user's remaining collateral balance in `asset`
    ///
    /// # Errors
    /// - `NeedsMoreThanZero` - Amount is zero or negative
    /// - `InsufficientCollateral` - More than deposited
    /// - `BreaksHealthFactor` - Remaining collateral does not back the debt
    pub fn redeem_collateral(
        env: Env,
        user: Address,
        asset: Address,
        amount: i128,
    ) -> Result<i128, EngineError> {
        require_initialized(&env)?;
        let _guard = ReentrancyGuard::new(&env)?;
        user.require_auth();
        let remaining = redeem::redeem(&env, &user, &user, &asset, amount)?;
        health::revert_if_health_factor_is_broken(&env, &user)?;
        Ok(remaining)
    }

    /// Mint DSC against deposited collateral
    ///
    /// # Returns
    /// The user's total debt
    ///
    /// # Errors
    /// - `NeedsMoreThanZero` - Amount is zero or negative
    /// - `BreaksHealthFactor` - Not enough collateral
    /// - `MintFailed` - Token did not mint
    pub fn mint_dsc(env: Env, user: Address, amount: i128) -> Result<i128, EngineError> {
        require_initialized(&env)?;
        let _guard = ReentrancyGuard::new(&env)?;
        user.require_auth();
        mint::mint_dsc(&env, &user, amount)
    }

    /// Repay DSC debt
    ///
    /// The engine pulls `amount` DSC with `transfer_from` and burns it, so
    /// `user` must have approved the engine on the DSC token.
    ///
    /// # Returns
    /// The user's remaining debt
    ///
    /// # Errors
    /// - `NeedsMoreThanZero` - Amount is zero or negative
    /// - `InsufficientDebt` - More than owed
    /// - `TransferFailed` - DSC balance or allowance too low
    pub fn burn_dsc(env: Env, user: Address, amount: i128) -> Result<i128, EngineError> {
        require_initialized(&env)?;
        let _guard = ReentrancyGuard::new(&env)?;
        user.require_auth();
        let remaining = burn::burn(&env, &user, &user, amount)?;
        health::revert_if_health_factor_is_broken(&env, &user)?;
        Ok(remaining)
    }

    /// Deposit collateral and mint DSC in one step
    ///
    /// # Returns
    /// The user's total debt
    pub fn deposit_collateral_and_mint_dsc(
        env: Env,
        user: Address,
        asset: Address,
        collateral_amount: i128,
        dsc_amount: i128,
    ) -> Result<i128, EngineError> {
        require_initialized(&env)?;
        let _guard = ReentrancyGuard::new(&env)?;
        user.require_auth();
        deposit::deposit_collateral(&env, &user, &asset, collateral_amount)?;
        mint::mint_dsc(&env, &user, dsc_amount)
    }

    /// Repay DSC and withdraw collateral in one step
    ///
    /// Debt is burned first so the withdrawal is checked against the reduced
    /// debt.
    ///
    /// # Returns
    /// The user's remaining collateral balance in `asset`
    pub fn redeem_collateral_for_dsc(
        env: Env,
        user: Address,
        asset: Address,
        collateral_amount: i128,
        dsc_amount: i128,
    ) -> Result<i128, EngineError> {
        require_initialized(&env)?;
        let _guard = ReentrancyGuard::new(&env)?;
        user.require_auth();
        burn::burn(&env, &user, &user, dsc_amount)?;
        let remaining = redeem::redeem(&env, &user, &user, &asset, collateral_amount)?;
        health::revert_if_health_factor_is_broken(&env, &user)?;
        Ok(remaining)
    }

    /// Liquidate an undercollateralized position
    ///
    /// The liquidator repays `debt_to_cover` DSC of `user`'s debt (DSC
    /// approval to the engine required) and receives collateral worth that
    /// amount plus the liquidation bonus.
    ///
    /// # Errors
    /// - `HealthFactorOk` - Position is not liquidatable
    /// - `HealthFactorNotImproved` - Position did not get healthier
    /// - `LiquidatorHealthFactorBroken` - Liquidator left insolvent
    /// - `InsufficientCollateral` - Not enough collateral to seize
    pub fn liquidate(
        env: Env,
        liquidator: Address,
        collateral_asset: Address,
        user: Address,
        debt_to_cover: i128,
    ) -> Result<LiquidationResult, EngineError> {
        require_initialized(&env)?;
        let _guard = ReentrancyGuard::new(&env)?;
        liquidator.require_auth();
        liquidate::liquidate(&env, &liquidator, &collateral_asset, &user, debt_to_cover)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Views
    // ─────────────────────────────────────────────────────────────────────

    pub fn get_account_information(
        env: Env,
        user: Address,
    ) -> Result<AccountInformation, EngineError> {
        require_initialized(&env)?;
        views::get_account_information(&env, &user)
    }

    /// Total USD value (18 decimals) of `user`'s collateral
    pub fn get_account_collateral_value(env: Env, user: Address) -> Result<i128, EngineError> {
        require_initialized(&env)?;
        valuation::account_collateral_value(&env, &user)
    }

    pub fn get_collateral_balance_of_user(
        env: Env,
        user: Address,
        asset: Address,
    ) -> Result<i128, EngineError> {
        require_initialized(&env)?;
        Ok(storage::read_collateral(&env, &user, &asset))
    }

    pub fn get_dsc_minted(env: Env, user: Address) -> Result<i128, EngineError> {
        require_initialized(&env)?;
        Ok(storage::read_debt(&env, &user))
    }

    /// USD value (18 decimals) of `amount` of `asset`
    pub fn get_usd_value(env: Env, asset: Address, amount: i128) -> Result<i128, EngineError> {
        require_initialized(&env)?;
        valuation::usd_value(&env, &asset, amount)
    }

    /// Amount of `asset` worth `usd_amount` (18 decimals), rounded down
    pub fn get_token_amount_from_usd(
        env: Env,
        asset: Address,
        usd_amount: i128,
    ) -> Result<i128, EngineError> {
        require_initialized(&env)?;
        valuation::asset_amount_from_usd(&env, &asset, usd_amount)
    }

    /// Health factor of `user` (1e18 == 1.0, `i128::MAX` without debt)
    pub fn get_health_factor(env: Env, user: Address) -> Result<i128, EngineError> {
        require_initialized(&env)?;
        health::health_factor(&env, &user)
    }

    /// Health factor for hypothetical debt and collateral values
    pub fn calculate_health_factor(
        env: Env,
        total_dsc_minted: i128,
        collateral_value_in_usd: i128,
    ) -> Result<i128, EngineError> {
        require_initialized(&env)?;
        health::calculate_health_factor(&env, total_dsc_minted, collateral_value_in_usd)
    }

    pub fn get_collateral_tokens(env: Env) -> Result<Vec<Address>, EngineError> {
        storage::read_collateral_tokens(&env)
    }

    pub fn get_collateral_token_price_feed(
        env: Env,
        asset: Address,
    ) -> Result<Address, EngineError> {
        require_initialized(&env)?;
        storage::read_price_feed(&env, &asset)
    }

    pub fn get_dsc(env: Env) -> Result<Address, EngineError> {
        storage::read_dsc(&env)
    }

    /// Deployer that ran `initialize`
    pub fn get_admin(env: Env) -> Result<Address, EngineError> {
        storage::read_admin(&env)
    }

    pub fn get_precision(env: Env) -> Result<i128, EngineError> {
        require_initialized(&env)?;
        Ok(PRECISION)
    }

    /// Factor lifting the feed price of `asset` to 18 decimals
    pub fn get_additional_feed_precision(env: Env, asset: Address) -> Result<i128, EngineError> {
        require_initialized(&env)?;
        views::get_additional_feed_precision(&env, &asset)
    }

    pub fn get_liquidation_threshold(env: Env) -> Result<i128, EngineError> {
        require_initialized(&env)?;
        Ok(LIQUIDATION_THRESHOLD)
    }

    pub fn get_liquidation_precision(env: Env) -> Result<i128, EngineError> {
        require_initialized(&env)?;
        Ok(LIQUIDATION_PRECISION)
    }

    pub fn get_liquidation_bonus(env: Env) -> Result<i128, EngineError> {
        require_initialized(&env)?;
        Ok(LIQUIDATION_BONUS)
    }

    pub fn get_min_health_factor(env: Env) -> Result<i128, EngineError> {
        require_initialized(&env)?;
        Ok(MIN_HEALTH_FACTOR)
    }

    /// Maximum accepted price age in seconds
    pub fn get_timeout(env: Env) -> Result<u64, EngineError> {
        require_initialized(&env)?;
        Ok(ORACLE_TIMEOUT)
    }
}
