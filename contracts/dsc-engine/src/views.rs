//! # Views
//!
//! Read-only queries for frontends, liquidation bots and tests. Values are
//! computed from live storage and fresh oracle reads; nothing is cached, so
//! two calls at the same ledger return the same answer.

use soroban_sdk::{contracttype, Address, Env};

use crate::errors::EngineError;
use crate::health::account_information;
use crate::oracle::feed_scale;
use crate::storage::read_price_feed;

/// Debt and collateral value of a position, both with 18 decimals
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccountInformation {
    pub total_dsc_minted: i128,
    pub collateral_value_in_usd: i128,
}

pub fn get_account_information(
    env: &Env,
    user: &Address,
) -> Result<AccountInformation, EngineError> {
    let (total_dsc_minted, collateral_value_in_usd) = account_information(env, user)?;
    Ok(AccountInformation {
        total_dsc_minted,
        collateral_value_in_usd,
    })
}

/// `10^(18 - feed decimals)` for the feed of `asset`.
pub fn get_additional_feed_precision(env: &Env, asset: &Address) -> Result<i128, EngineError> {
    let feed = read_price_feed(env, asset)?;
    Ok(feed_scale(env, &feed)?)
}
