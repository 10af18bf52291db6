//! # DSC Stablecoin Token
//!
//! Fungible token for the DSC synthetic dollar. Supply is controlled by a
//! single owner: in a deployment, ownership is transferred to the DSC engine
//! right after deployment, so DSC can only be minted against collateral
//! and burned when debt is repaid.
//!
//! Holders use the usual `transfer` / `transfer_from` / `approve` flow. `burn`
//! acts on the owner's own balance: the engine first pulls DSC into custody
//! and then burns it.

#![no_std]
#![allow(deprecated)]

use soroban_sdk::{contract, contractimpl, Address, Env, String};
use soroban_token_sdk::metadata::TokenMetadata;
use soroban_token_sdk::TokenUtils;

mod owner;
mod token;

pub use token::{AllowanceValue, TokenError};


#[contract]
pub struct DscToken;

#[contractimpl]
impl DscToken {
    /// Set the owner and metadata at deployment
    ///
    /// # Arguments
    /// * `owner` - Address allowed to mint and burn
    /// * `decimal` - Number of decimals (18 for DSC)
    /// * `name` - Token name
    /// * `symbol` - Token symbol
    pub fn __constructor(env: Env, owner: Address, decimal: u32, name: String, symbol: String) {
        owner::write_owner(&env, &owner);
        TokenUtils::new(&env).metadata().set_metadata(&TokenMetadata {
            decimal,
            name,
            symbol,
        });
    }

    /// Mint `amount` to `to` (owner only)
    ///
    /// # Returns
    /// `true` once the balance has been credited
    ///
    /// # Errors
    /// - `MustBeMoreThanZero` - Amount is zero or negative
    /// - `NotInitialized` - No owner set
    pub fn mint(env: Env, to: Address, amount: i128) -> Result<bool, TokenError> {
        token::mint(&env, to, amount)
    }

    /// Burn `amount` from the owner's own balance (owner only)
    ///
    /// # Errors
    /// - `MustBeMoreThanZero` - Amount is zero or negative
    /// - `BurnAmountExceedsBalance` - Owner holds less than `amount`
    pub fn burn(env: Env, amount: i128) -> Result<(), TokenError> {
        token::burn(&env, amount)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        token::transfer(&env, from, to, amount)
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        token::transfer_from(&env, spender, from, to, amount)
    }

    /// Allow `spender` to move up to `amount` of `from`'s balance until
    /// `expiration_ledger`
    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), TokenError> {
        token::approve(&env, from, spender, amount, expiration_ledger)
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        token::read_allowance(&env, &from, &spender).amount
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        token::read_balance(&env, &id)
    }

    pub fn total_supply(env: Env) -> i128 {
        token::read_total_supply(&env)
    }

    pub fn owner(env: Env) -> Result<Address, TokenError> {
        owner::get_owner(&env)
    }

    /// Move mint/burn rights to `new_owner` (owner only)
    pub fn transfer_ownership(env: Env, new_owner: Address) -> Result<(), TokenError> {
        owner::transfer_ownership(&env, new_owner)
    }

    pub fn decimals(env: Env) -> u32 {
        TokenUtils::new(&env).metadata().get_metadata().decimal
    }

    pub fn name(env: Env) -> String {
        TokenUtils::new(&env).metadata().get_metadata().name
    }

    pub fn symbol(env: Env) -> String {
        TokenUtils::new(&env).metadata().get_metadata().symbol
    }
}
