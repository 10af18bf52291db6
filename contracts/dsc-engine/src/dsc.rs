//! Client for the DSC token the engine owns.
//!
//! Only the calls the engine makes are declared here, so the engine does not
//! link the token crate into its own wasm.

use soroban_sdk::{contractclient, Address, Env};

#[contractclient(name = "StableTokenClient")]
pub trait StableTokenInterface {
    /// Owner-only mint; `true` once `to` has been credited.
    fn mint(env: Env, to: Address, amount: i128) -> bool;
    /// Owner-only burn from the caller's own balance.
    fn burn(env: Env, amount: i128);
    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128);
}
