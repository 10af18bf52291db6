//! # Engine Events
//!
//! One `#[contractevent]` struct per state change. The snake_case struct name
//! is the leading topic; `#[topic]` fields become additional topics and the
//! rest is the data map. Indexers follow positions by filtering on the user
//! topics.

use soroban_sdk::{contractevent, Address, Env, Vec};

/// Emitted once when the collateral registry is set.
#[contractevent]
#[derive(Clone, Debug)]
pub struct EngineInitialized {
    pub collateral_tokens: Vec<Address>,
    pub price_feeds: Vec<Address>,
    pub dsc: Address,
}

/// Emitted when collateral enters the engine.
#[contractevent]
#[derive(Clone, Debug)]
pub struct CollateralDeposited {
    #[topic]
    pub user: Address,
    #[topic]
    pub asset: Address,
    pub amount: i128,
}

/// Emitted when collateral leaves the engine, either as a withdrawal
/// (`from == to`) or as liquidation proceeds (`to` is the liquidator).
#[contractevent]
#[derive(Clone, Debug)]
pub struct CollateralRedeemed {
    #[topic]
    pub from: Address,
    #[topic]
    pub to: Address,
    #[topic]
    pub asset: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct DscMinted {
    #[topic]
    pub user: Address,
    pub amount: i128,
}

/// Emitted when debt of `on_behalf_of` is retired with DSC paid by `payer`.
#[contractevent]
#[derive(Clone, Debug)]
pub struct DscBurned {
    #[topic]
    pub on_behalf_of: Address,
    #[topic]
    pub payer: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct Liquidation {
    #[topic]
    pub liquidator: Address,
    #[topic]
    pub user: Address,
    pub collateral_asset: Address,
    pub debt_covered: i128,
    pub collateral_seized: i128,
    pub bonus: i128,
    pub end_health_factor: i128,
}

pub fn emit_collateral_deposited(env: &Env, user: &Address, asset: &Address, amount: i128) {
    CollateralDeposited {
        user: user.clone(),
        asset: asset.clone(),
        amount,
    }
    .publish(env);
}

pub fn emit_collateral_redeemed(
    env: &Env,
    from: &Address,
    to: &Address,
    asset: &Address,
    amount: i128,
) {
    CollateralRedeemed {
        from: from.clone(),
        to: to.clone(),
        asset: asset.clone(),
        amount,
    }
    .publish(env);
}

pub fn emit_dsc_minted(env: &Env, user: &Address, amount: i128) {
    DscMinted {
        user: user.clone(),
        amount,
    }
    .publish(env);
}

pub fn emit_dsc_burned(env: &Env, on_behalf_of: &Address, payer: &Address, amount: i128) {
    DscBurned {
        on_behalf_of: on_behalf_of.clone(),
        payer: payer.clone(),
        amount,
    }
    .publish(env);
}
