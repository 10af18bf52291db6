//! # Burn
//!
//! Retires debt of `on_behalf_of` with DSC supplied by `payer`. The DSC is
//! pulled into engine custody with `transfer_from` and then burned from the
//! engine's own balance, which is what the token's owner-only `burn` acts on.
//!
//! For a plain repayment both addresses are the same user. During a
//! liquidation the liquidator pays down the debtor's position.

use soroban_sdk::{Address, Env};

use crate::dsc::StableTokenClient;
use crate::errors::{require_more_than_zero, EngineError};
use crate::events::emit_dsc_burned;
use crate::storage::{decrease_debt, read_dsc};

/// Burn `amount` DSC from `payer` against the debt of `on_behalf_of`.
///
/// # Returns
/// The remaining debt of `on_behalf_of`
///
/// # Errors
/// * `NeedsMoreThanZero` - amount is zero or negative
/// * `InsufficientDebt` - `on_behalf_of` owes less than `amount`
/// * `TransferFailed` - `payer` balance or allowance is short
/// * `BurnFailed` - the token refused the burn
pub fn burn(
    env: &Env,
    on_behalf_of: &Address,
    payer: &Address,
    amount: i128,
) -> Result<i128, EngineError> {
    require_more_than_zero(amount)?;

    let remaining = decrease_debt(env, on_behalf_of, amount)?;
    emit_dsc_burned(env, on_behalf_of, payer, amount);

    let engine = env.current_contract_address();
    let dsc = StableTokenClient::new(env, &read_dsc(env)?);
    match dsc.try_transfer_from(&engine, payer, &engine, &amount) {
        Ok(Ok(())) => {}
        _ => return Err(EngineError::TransferFailed),
    }
    match dsc.try_burn(&amount) {
        Ok(Ok(())) => Ok(remaining),
        _ => Err(EngineError::BurnFailed),
    }
}
