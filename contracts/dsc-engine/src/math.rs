//! Fixed-point helpers. Products of two 18-decimal quantities do not fit in
//! `i128`, so they are formed in 256 bits and narrowed back explicitly.
//! Every division floors.

use soroban_sdk::{Env, I256};

use crate::errors::EngineError;

/// `a * b / denominator`, floored. Operands must be non-negative and
/// `denominator` positive.
pub fn mul_div_floor(env: &Env, a: i128, b: i128, denominator: i128) -> Result<i128, EngineError> {
    if a < 0 || b < 0 || denominator <= 0 {
        return Err(EngineError::Overflow);
    }
    if a == 0 || b == 0 {
        return Ok(0);
    }

    I256::from_i128(env, a)
        .mul(&I256::from_i128(env, b))
        .div(&I256::from_i128(env, denominator))
        .to_i128()
        .ok_or(EngineError::Overflow)
}

/// `amount * pct / precision` for percentage-style constants.
pub fn percent_of(amount: i128, pct: i128, precision: i128) -> Result<i128, EngineError> {
    amount
        .checked_mul(pct)
        .ok_or(EngineError::Overflow)?
        .checked_div(precision)
        .ok_or(EngineError::Overflow)
}
