//! # Ownership
//!
//! The token has a single owner. Only the owner may mint or burn; in a
//! deployment the owner is the DSC engine contract, so supply can only change
//! through engine operations.

use soroban_sdk::{contractevent, Address, Env};

use crate::token::{bump_instance, TokenDataKey, TokenError};

/// Emitted when ownership moves to a new address.
#[contractevent]
#[derive(Clone, Debug)]
pub struct OwnershipTransferred {
    #[topic]
    pub previous_owner: Address,
    #[topic]
    pub new_owner: Address,
}

pub fn get_owner(env: &Env) -> Result<Address, TokenError> {
    env.storage()
        .instance()
        .get(&TokenDataKey::Owner)
        .ok_or(TokenError::NotInitialized)
}

pub fn write_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&TokenDataKey::Owner, owner);
    bump_instance(env);
}

/// Load the owner and require its authorization for the current invocation.
pub fn require_owner(env: &Env) -> Result<Address, TokenError> {
    let owner = get_owner(env)?;
    owner.require_auth();
    Ok(owner)
}

/// Hand ownership to `new_owner` (current owner only).
pub fn transfer_ownership(env: &Env, new_owner: Address) -> Result<(), TokenError> {
    let previous_owner = require_owner(env)?;
    write_owner(env, &new_owner);

    OwnershipTransferred {
        previous_owner,
        new_owner,
    }
    .publish(env);

    Ok(())
}
