//! # DSC Token Ledger
//!
//! Balance, allowance and supply accounting for the DSC stablecoin.
//!
//! ## Storage Layout
//! - `Owner` (instance): the only address allowed to mint and burn
//! - `TotalSupply` (instance): outstanding supply
//! - `Balance(holder)` (persistent): per-holder balance
//! - `Allowance(from, spender)` (persistent): approved amount and expiry ledger
//!
//! ## Invariants
//! - Balances and supply never go negative.
//! - Sum of balances equals `TotalSupply`.
//! - Mint and burn require the owner's authorization.

use soroban_sdk::{contracterror, contractevent, contracttype, Address, Env};

use crate::owner::require_owner;

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const BALANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const BALANCE_LIFETIME_THRESHOLD: u32 = BALANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Errors returned by the DSC token
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    /// No owner recorded
    NotInitialized = 1,
    /// Amount must be strictly positive
    MustBeMoreThanZero = 2,
    /// Owner tried to burn more than it holds
    BurnAmountExceedsBalance = 3,
    /// Sender balance is too low
    InsufficientBalance = 4,
    /// Spender allowance is too low or expired
    InsufficientAllowance = 5,
    /// Allowance expiration ledger is in the past
    InvalidExpiration = 6,
    /// Arithmetic overflow
    Overflow = 7,
}

#[contracttype]
#[derive(Clone)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub enum TokenDataKey {
    Owner,
    TotalSupply,
    Balance(Address),
    Allowance(AllowanceKey),
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct AllowanceKey {
    pub from: Address,
    pub spender: Address,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct Mint {
    #[topic]
    pub to: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct Burn {
    #[topic]
    pub from: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct Transfer {
    #[topic]
    pub from: Address,
    #[topic]
    pub to: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct Approve {
    #[topic]
    pub from: Address,
    #[topic]
    pub spender: Address,
    pub amount: i128,
    pub expiration_ledger: u32,
}

pub(crate) fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn read_balance(env: &Env, holder: &Address) -> i128 {
    let key = TokenDataKey::Balance(holder.clone());
    match env.storage().persistent().get::<TokenDataKey, i128>(&key) {
        Some(balance) => {
            env.storage().persistent().extend_ttl(
                &key,
                BALANCE_LIFETIME_THRESHOLD,
                BALANCE_BUMP_AMOUNT,
            );
            balance
        }
        None => 0,
    }
}

fn write_balance(env: &Env, holder: &Address, amount: i128) {
    let key = TokenDataKey::Balance(holder.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn read_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&TokenDataKey::TotalSupply)
        .unwrap_or(0)
}

fn write_total_supply(env: &Env, amount: i128) {
    env.storage()
        .instance()
        .set(&TokenDataKey::TotalSupply, &amount);
}

fn receive_balance(env: &Env, holder: &Address, amount: i128) -> Result<(), TokenError> {
    let balance = read_balance(env, holder)
        .checked_add(amount)
        .ok_or(TokenError::Overflow)?;
    write_balance(env, holder, balance);
    Ok(())
}

fn spend_balance(env: &Env, holder: &Address, amount: i128) -> Result<(), TokenError> {
    let balance = read_balance(env, holder);
    if balance < amount {
        return Err(TokenError::InsufficientBalance);
    }
    write_balance(env, holder, balance - amount);
    Ok(())
}

pub fn read_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceValue {
    let key = TokenDataKey::Allowance(AllowanceKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    match env
        .storage()
        .persistent()
        .get::<TokenDataKey, AllowanceValue>(&key)
    {
        Some(allowance) if allowance.expiration_ledger >= env.ledger().sequence() => allowance,
        Some(allowance) => AllowanceValue {
            amount: 0,
            expiration_ledger: allowance.expiration_ledger,
        },
        None => AllowanceValue {
            amount: 0,
            expiration_ledger: 0,
        },
    }
}

fn write_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), TokenError> {
    if amount > 0 && expiration_ledger < env.ledger().sequence() {
        return Err(TokenError::InvalidExpiration);
    }

    let key = TokenDataKey::Allowance(AllowanceKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    env.storage().persistent().set(
        &key,
        &AllowanceValue {
            amount,
            expiration_ledger,
        },
    );

    if amount > 0 {
        let live_for = expiration_ledger.saturating_sub(env.ledger().sequence());
        env.storage().persistent().extend_ttl(&key, live_for, live_for);
    }
    Ok(())
}

fn spend_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), TokenError> {
    let allowance = read_allowance(env, from, spender);
    if allowance.amount < amount {
        return Err(TokenError::InsufficientAllowance);
    }
    if amount > 0 {
        write_allowance(
            env,
            from,
            spender,
            allowance.amount - amount,
            allowance.expiration_ledger,
        )?;
    }
    Ok(())
}

fn require_positive(amount: i128) -> Result<(), TokenError> {
    if amount <= 0 {
        return Err(TokenError::MustBeMoreThanZero);
    }
    Ok(())
}

/// Mint `amount` to `to`. Owner only.
pub fn mint(env: &Env, to: Address, amount: i128) -> Result<bool, TokenError> {
    require_owner(env)?;
    require_positive(amount)?;

    let supply = read_total_supply(env)
        .checked_add(amount)
        .ok_or(TokenError::Overflow)?;
    receive_balance(env, &to, amount)?;
    write_total_supply(env, supply);
    bump_instance(env);

    Mint { to, amount }.publish(env);
    Ok(true)
}

/// Burn `amount` from the owner's own balance. Owner only.
pub fn burn(env: &Env, amount: i128) -> Result<(), TokenError> {
    let owner = require_owner(env)?;
    require_positive(amount)?;

    if read_balance(env, &owner) < amount {
        return Err(TokenError::BurnAmountExceedsBalance);
    }
    spend_balance(env, &owner, amount)?;
    write_total_supply(env, read_total_supply(env) - amount);
    bump_instance(env);

    Burn {
        from: owner,
        amount,
    }
    .publish(env);
    Ok(())
}

pub fn transfer(env: &Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
    from.require_auth();
    require_positive(amount)?;

    spend_balance(env, &from, amount)?;
    receive_balance(env, &to, amount)?;

    Transfer { from, to, amount }.publish(env);
    Ok(())
}

pub fn transfer_from(
    env: &Env,
    spender: Address,
    from: Address,
    to: Address,
    amount: i128,
) -> Result<(), TokenError> {
    spender.require_auth();
    require_positive(amount)?;

    spend_allowance(env, &from, &spender, amount)?;
    spend_balance(env, &from, amount)?;
    receive_balance(env, &to, amount)?;

    Transfer { from, to, amount }.publish(env);
    Ok(())
}

pub fn approve(
    env: &Env,
    from: Address,
    spender: Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), TokenError> {
    from.require_auth();
    if amount < 0 {
        return Err(TokenError::MustBeMoreThanZero);
    }

    write_allowance(env, &from, &spender, amount, expiration_ledger)?;

    Approve {
        from,
        spender,
        amount,
        expiration_ledger,
    }
    .publish(env);
    Ok(())
}
