//! # Redeem
//!
//! Releases collateral from engine custody. The same primitive serves plain
//! withdrawals (`from == to`) and liquidation payouts (`to` is the
//! liquidator); the caller decides whose solvency is checked afterwards.

use soroban_sdk::{token, Address, Env};

use crate::errors::{require_more_than_zero, EngineError};
use crate::events::emit_collateral_redeemed;
use crate::storage::{decrease_collateral, require_allowed_token};

/// Debit `amount` of `asset` from `from`'s collateral and send it to `to`.
///
/// No health check is done here.
///
/// # Returns
/// `from`'s remaining collateral balance in `asset`
///
/// # Errors
/// * `NeedsMoreThanZero` - amount is zero or negative
/// * `NotAllowedToken` - asset is not in the registry
/// * `InsufficientCollateral` - `from` holds less than `amount`
/// * `TransferFailed` - the token refused the transfer
pub fn redeem(
    env: &Env,
    from: &Address,
    to: &Address,
    asset: &Address,
    amount: i128,
) -> Result<i128, EngineError> {
    require_more_than_zero(amount)?;
    require_allowed_token(env, asset)?;

    let remaining = decrease_collateral(env, from, asset, amount)?;
    emit_collateral_redeemed(env, from, to, asset, amount);

    let token_client = token::Client::new(env, asset);
    match token_client.try_transfer(&env.current_contract_address(), to, &amount) {
        Ok(Ok(())) => Ok(remaining),
        _ => Err(EngineError::TransferFailed),
    }
}
