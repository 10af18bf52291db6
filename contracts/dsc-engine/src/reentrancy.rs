use soroban_sdk::Env;

use crate::errors::EngineError;
use crate::storage::EngineDataKey;

/// Busy flag held for the duration of a state-changing entry point.
///
/// Acquired at the top of the call and released when dropped, so every
/// return path clears it. A nested state-changing call (for example from a
/// token callback during a transfer) finds the flag set and fails with
/// `EngineError::Reentrancy`.
pub struct ReentrancyGuard<'a> {
    env: &'a Env,
}

impl<'a> ReentrancyGuard<'a> {
    pub fn new(env: &'a Env) -> Result<Self, EngineError> {
        let key = EngineDataKey::Busy;
        if env.storage().temporary().has(&key) {
            return Err(EngineError::Reentrancy);
        }
        env.storage().temporary().set(&key, &true);
        Ok(Self { env })
    }
}

impl<'a> Drop for ReentrancyGuard<'a> {
    fn drop(&mut self) {
        self.env.storage().temporary().remove(&EngineDataKey::Busy);
    }
}
