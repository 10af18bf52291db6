use soroban_sdk::contracterror;

use crate::oracle::OracleError;

/// Errors returned by every engine entry point.
///
/// A failing invocation leaves no state behind: the host discards all storage
/// writes of an invocation that returns an error.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum EngineError {
    /// Amount must be strictly positive
    NeedsMoreThanZero = 1,
    /// Collateral asset and price feed lists differ in length
    AssetFeedLengthMismatch = 2,
    /// Asset is not in the collateral registry
    NotAllowedToken = 3,
    /// Same collateral asset listed twice at initialization
    DuplicateAsset = 4,
    /// `initialize` was already called
    AlreadyInitialized = 5,
    /// Engine has not been initialized
    NotInitialized = 6,
    /// Operation would leave the user's health factor below 1.0
    BreaksHealthFactor = 7,
    /// Target position is healthy and cannot be liquidated
    HealthFactorOk = 8,
    /// Liquidation did not raise the target's health factor
    HealthFactorNotImproved = 9,
    /// Liquidation would leave the liquidator below 1.0
    LiquidatorHealthFactorBroken = 10,
    /// Collateral or DSC transfer failed
    TransferFailed = 11,
    /// DSC mint failed
    MintFailed = 12,
    /// DSC burn failed
    BurnFailed = 13,
    /// Price feed answer is stale
    StalePrice = 14,
    /// Price feed answer is zero or negative
    InvalidPrice = 15,
    /// Price feed reports more than 18 decimals
    UnsupportedFeedDecimals = 16,
    /// Price feed contract call failed
    PriceFeedUnavailable = 17,
    /// Redeem or seize more collateral than deposited
    InsufficientCollateral = 18,
    /// Burn more DSC than minted
    InsufficientDebt = 19,
    /// Arithmetic overflow
    Overflow = 20,
    /// State-changing call while another one is in flight
    Reentrancy = 21,
}

impl From<OracleError> for EngineError {
    fn from(err: OracleError) -> Self {
        match err {
            OracleError::StalePrice => EngineError::StalePrice,
            OracleError::InvalidPrice => EngineError::InvalidPrice,
            OracleError::UnsupportedDecimals => EngineError::UnsupportedFeedDecimals,
            OracleError::FeedUnavailable => EngineError::PriceFeedUnavailable,
        }
    }
}

pub fn require_more_than_zero(amount: i128) -> Result<(), EngineError> {
    if amount <= 0 {
        return Err(EngineError::NeedsMoreThanZero);
    }
    Ok(())
}
