//! # Engine Storage
//!
//! ## Storage Layout
//! - `Admin` (instance): deployer allowed to call `initialize`
//! - `CollateralTokens` (instance): ordered collateral registry
//! - `PriceFeed(asset)` (instance): price feed of each registered asset
//! - `Dsc` (instance): DSC token contract
//! - `CollateralDeposited(user, asset)` (persistent): collateral ledger
//! - `DscMinted(user)` (persistent): debt ledger
//! - `Busy` (temporary): reentrancy lock
//!
//! `Admin` is written by the constructor. Registry entries are written once by
//! `initialize`. Ledger entries are never
//! removed, only zeroed, and their TTL is extended on every write.

use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::constants::{
    INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_LIFETIME_THRESHOLD,
};
use crate::errors::EngineError;

#[contracttype]
#[derive(Clone)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub enum EngineDataKey {
    Admin,
    CollateralTokens,
    PriceFeed(Address),
    Dsc,
    CollateralDeposited(Address, Address),
    DscMinted(Address),
    Busy,
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn bump_persistent(env: &Env, key: &EngineDataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn write_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&EngineDataKey::Admin, admin);
    bump_instance(env);
}

pub fn read_admin(env: &Env) -> Result<Address, EngineError> {
    env.storage()
        .instance()
        .get(&EngineDataKey::Admin)
        .ok_or(EngineError::NotInitialized)
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&EngineDataKey::Dsc)
}

pub fn require_initialized(env: &Env) -> Result<(), EngineError> {
    if !is_initialized(env) {
        return Err(EngineError::NotInitialized);
    }
    Ok(())
}

/// Write the collateral registry and DSC address. Validation is done by the caller.
pub fn write_config(
    env: &Env,
    collateral_tokens: &Vec<Address>,
    price_feeds: &Vec<Address>,
    dsc: &Address,
) {
    let instance = env.storage().instance();
    for (asset, feed) in collateral_tokens.iter().zip(price_feeds.iter()) {
        instance.set(&EngineDataKey::PriceFeed(asset), &feed);
    }
    instance.set(&EngineDataKey::CollateralTokens, collateral_tokens);
    instance.set(&EngineDataKey::Dsc, dsc);
    bump_instance(env);
}

pub fn read_collateral_tokens(env: &Env) -> Result<Vec<Address>, EngineError> {
    env.storage()
        .instance()
        .get(&EngineDataKey::CollateralTokens)
        .ok_or(EngineError::NotInitialized)
}

/// Price feed of `asset`, or `NotAllowedToken` if the asset is not registered.
pub fn read_price_feed(env: &Env, asset: &Address) -> Result<Address, EngineError> {
    env.storage()
        .instance()
        .get(&EngineDataKey::PriceFeed(asset.clone()))
        .ok_or(EngineError::NotAllowedToken)
}

pub fn require_allowed_token(env: &Env, asset: &Address) -> Result<(), EngineError> {
    if !env
        .storage()
        .instance()
        .has(&EngineDataKey::PriceFeed(asset.clone()))
    {
        return Err(EngineError::NotAllowedToken);
    }
    Ok(())
}

pub fn read_dsc(env: &Env) -> Result<Address, EngineError> {
    env.storage()
        .instance()
        .get(&EngineDataKey::Dsc)
        .ok_or(EngineError::NotInitialized)
}

// ─────────────────────────────────────────────────────────────────────────────
// Collateral ledger
// ─────────────────────────────────────────────────────────────────────────────

pub fn read_collateral(env: &Env, user: &Address, asset: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&EngineDataKey::CollateralDeposited(user.clone(), asset.clone()))
        .unwrap_or(0)
}

fn write_collateral(env: &Env, user: &Address, asset: &Address, amount: i128) {
    let key = EngineDataKey::CollateralDeposited(user.clone(), asset.clone());
    env.storage().persistent().set(&key, &amount);
    bump_persistent(env, &key);
}

/// Credit `amount` of `asset` to `user`. Returns the new balance.
pub fn increase_collateral(
    env: &Env,
    user: &Address,
    asset: &Address,
    amount: i128,
) -> Result<i128, EngineError> {
    let balance = read_collateral(env, user, asset)
        .checked_add(amount)
        .ok_or(EngineError::Overflow)?;
    write_collateral(env, user, asset, balance);
    Ok(balance)
}

/// Debit `amount` of `asset` from `user`. Returns the new balance.
pub fn decrease_collateral(
    env: &Env,
    user: &Address,
    asset: &Address,
    amount: i128,
) -> Result<i128, EngineError> {
    let current = read_collateral(env, user, asset);
    if current < amount {
        return Err(EngineError::InsufficientCollateral);
    }
    let balance = current - amount;
    write_collateral(env, user, asset, balance);
    Ok(balance)
}

// ─────────────────────────────────────────────────────────────────────────────
// Debt ledger
// ─────────────────────────────────────────────────────────────────────────────

pub fn read_debt(env: &Env, user: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&EngineDataKey::DscMinted(user.clone()))
        .unwrap_or(0)
}

fn write_debt(env: &Env, user: &Address, amount: i128) {
    let key = EngineDataKey::DscMinted(user.clone());
    env.storage().persistent().set(&key, &amount);
    bump_persistent(env, &key);
}

pub fn increase_debt(env: &Env, user: &Address, amount: i128) -> Result<i128, EngineError> {
    let debt = read_debt(env, user)
        .checked_add(amount)
        .ok_or(EngineError::Overflow)?;
    write_debt(env, user, debt);
    Ok(debt)
}

pub fn decrease_debt(env: &Env, user: &Address, amount: i128) -> Result<i128, EngineError> {
    let current = read_debt(env, user);
    if current < amount {
        return Err(EngineError::InsufficientDebt);
    }
    let debt = current - amount;
    write_debt(env, user, debt);
    Ok(debt)
}
