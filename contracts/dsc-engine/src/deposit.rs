//! # Deposit
//!
//! Moves an allow-listed collateral token from the user into engine custody
//! and credits the collateral ledger.
//!
//! The ledger is written before the token transfer. If the transfer fails the
//! invocation returns `TransferFailed` and the host discards the ledger write
//! together with everything else in the invocation.
//!
//! The token pull uses `transfer_from` with the engine as spender, so the user
//! must have approved the engine for at least `amount`.

use soroban_sdk::{token, Address, Env};

use crate::errors::{require_more_than_zero, EngineError};
use crate::events::emit_collateral_deposited;
use crate::storage::{increase_collateral, require_allowed_token};

/// Deposit `amount` of `asset` for `user`.
///
/// # Returns
/// The user's new collateral balance in `asset`
///
/// # Errors
/// * `NeedsMoreThanZero` - amount is zero or negative
/// * `NotAllowedToken` - asset is not in the registry
/// * `TransferFailed` - the token refused the transfer
pub fn deposit_collateral(
    env: &Env,
    user: &Address,
    asset: &Address,
    amount: i128,
) -> Result<i128, EngineError> {
    require_more_than_zero(amount)?;
    require_allowed_token(env, asset)?;

    let balance = increase_collateral(env, user, asset, amount)?;
    emit_collateral_deposited(env, user, asset, amount);

    let engine = env.current_contract_address();
    let token_client = token::Client::new(env, asset);
    match token_client.try_transfer_from(&engine, user, &engine, &amount) {
        Ok(Ok(())) => Ok(balance),
        _ => Err(EngineError::TransferFailed),
    }
}
