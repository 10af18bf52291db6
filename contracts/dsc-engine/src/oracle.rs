//! # Price Oracle Adapter
//!
//! Reads USD prices from per-asset price feed contracts and refuses to hand
//! out stale or invalid answers.
//!
//! A price feed exposes `decimals()` and `latest_round_data()`. An answer is
//! stale when:
//! - it was never updated (`updated_at == 0`),
//! - it was carried over from an older round (`answered_in_round < round_id`),
//! - its timestamp is ahead of the ledger clock, or
//! - it is older than `ORACLE_TIMEOUT`.
//!
//! Prices are never cached: each valuation reads the feed again.

use soroban_sdk::{contractclient, contracterror, contracttype, log, Address, Env};

use crate::constants::{ORACLE_TIMEOUT, PRECISION_DECIMALS};

/// Errors that can occur while reading a price feed
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum OracleError {
    /// Answer is missing, carried over, from the future, or too old
    StalePrice = 1,
    /// Answer is zero or negative
    InvalidPrice = 2,
    /// Feed has more decimals than the engine precision
    UnsupportedDecimals = 3,
    /// The feed contract call itself failed
    FeedUnavailable = 4,
}

/// Latest round reported by a price feed
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct RoundData {
    pub round_id: u64,
    /// USD price per whole unit of the asset, with `decimals()` fractional digits
    pub answer: i128,
    pub started_at: u64,
    pub updated_at: u64,
    pub answered_in_round: u64,
}

/// Price feed contract interface.
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeedInterface {
    fn decimals(env: Env) -> u32;
    fn latest_round_data(env: Env) -> RoundData;
}

/// A validated price together with the factor lifting it to `PRECISION`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PriceQuote {
    /// Feed answer, strictly positive
    pub price: i128,
    /// `10^(18 - feed decimals)`
    pub scale: i128,
}

impl PriceQuote {
    /// Price expressed with 18 fractional digits.
    pub fn normalized(&self) -> Option<i128> {
        self.price.checked_mul(self.scale)
    }
}

/// Whether `round` must be rejected at the current ledger time.
pub fn is_stale(env: &Env, round: &RoundData) -> bool {
    if round.updated_at == 0 || round.answered_in_round < round.round_id {
        return true;
    }

    let now = env.ledger().timestamp();
    if now < round.updated_at {
        return true;
    }

    now - round.updated_at > ORACLE_TIMEOUT
}

/// Read the latest round from `feed`, failing if it is stale.
pub fn stale_check_latest_round_data(env: &Env, feed: &Address) -> Result<RoundData, OracleError> {
    let client = PriceFeedClient::new(env, feed);
    let round = match client.try_latest_round_data() {
        Ok(Ok(round)) => round,
        _ => return Err(OracleError::FeedUnavailable),
    };

    if is_stale(env, &round) {
        log!(env, "stale price feed", feed.clone(), round.updated_at);
        return Err(OracleError::StalePrice);
    }

    Ok(round)
}

/// Factor lifting a feed with `decimals` fractional digits to `PRECISION`.
pub fn scale_for_decimals(decimals: u32) -> Result<i128, OracleError> {
    if decimals > PRECISION_DECIMALS {
        return Err(OracleError::UnsupportedDecimals);
    }
    10i128
        .checked_pow(PRECISION_DECIMALS - decimals)
        .ok_or(OracleError::UnsupportedDecimals)
}

/// Fresh, positive price from `feed`.
pub fn latest_price(env: &Env, feed: &Address) -> Result<PriceQuote, OracleError> {
    let round = stale_check_latest_round_data(env, feed)?;
    if round.answer <= 0 {
        return Err(OracleError::InvalidPrice);
    }

    let decimals = match PriceFeedClient::new(env, feed).try_decimals() {
        Ok(Ok(decimals)) => decimals,
        _ => return Err(OracleError::FeedUnavailable),
    };

    Ok(PriceQuote {
        price: round.answer,
        scale: scale_for_decimals(decimals)?,
    })
}

/// Scale factor of `feed` without validating its current answer.
pub fn feed_scale(env: &Env, feed: &Address) -> Result<i128, OracleError> {
    match PriceFeedClient::new(env, feed).try_decimals() {
        Ok(Ok(decimals)) => scale_for_decimals(decimals),
        _ => Err(OracleError::FeedUnavailable),
    }
}
