//! # Mint
//!
//! Debt is recorded and the solvency check passes before any DSC exists.

use soroban_sdk::{log, Address, Env};

use crate::dsc::StableTokenClient;
use crate::errors::{require_more_than_zero, EngineError};
use crate::events::emit_dsc_minted;
use crate::health::revert_if_health_factor_is_broken;
use crate::storage::{increase_debt, read_dsc};

/// Mint `amount` DSC to `user` against their deposited collateral.
///
/// # Returns
/// The user's total debt after minting
///
/// # Errors
/// * `NeedsMoreThanZero` - amount is zero or negative
/// * `BreaksHealthFactor` - the new debt is not sufficiently backed
/// * `MintFailed` - the token did not confirm the mint
pub fn mint_dsc(env: &Env, user: &Address, amount: i128) -> Result<i128, EngineError> {
    require_more_than_zero(amount)?;

    let debt = increase_debt(env, user, amount)?;
    revert_if_health_factor_is_broken(env, user)?;

    let dsc = StableTokenClient::new(env, &read_dsc(env)?);
    match dsc.try_mint(user, &amount) {
        Ok(Ok(true)) => {}
        _ => {
            log!(env, "dsc mint failed", user.clone(), amount);
            return Err(EngineError::MintFailed);
        }
    }

    emit_dsc_minted(env, user, amount);
    Ok(debt)
}
