//! Protocol constants. All USD values and DSC amounts carry 18 fractional
//! digits (`PRECISION`).

/// Fixed-point unit: 1e18 == 1.0
pub const PRECISION: i128 = 1_000_000_000_000_000_000;

/// Decimals of `PRECISION`
pub const PRECISION_DECIMALS: u32 = 18;

/// Share of collateral value counted toward solvency, in `LIQUIDATION_PRECISION` units (50% => 200% backing)
pub const LIQUIDATION_THRESHOLD: i128 = 50;

/// Extra collateral paid to liquidators, in `LIQUIDATION_PRECISION` units (10%)
pub const LIQUIDATION_BONUS: i128 = 10;

pub const LIQUIDATION_PRECISION: i128 = 100;

/// Health factor below which a position is liquidatable (1.0)
pub const MIN_HEALTH_FACTOR: i128 = PRECISION;

/// Health factor reported for a position without debt
pub const HEALTH_FACTOR_NO_DEBT: i128 = i128::MAX;

/// Maximum age of a price feed answer, in seconds (3 hours)
pub const ORACLE_TIMEOUT: u64 = 3 * 60 * 60;

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;
