//! Authorization predicates.
//!
//! Read-only checks against the registry as it stands at call time. Nothing
//! here writes storage or caches results across calls.

use soroban_sdk::{Address, Env};

use crate::errors::RecoveryError;
use crate::registry;

pub fn is_guardian(env: &Env, wallet: &Address, principal: &Address) -> bool {
    registry::get_guardians(env, wallet)
        .map(|guardians| guardians.contains(principal))
        .unwrap_or(false)
}

pub fn is_owner(env: &Env, wallet: &Address, principal: &Address) -> bool {
    registry::get_owner(env, wallet) == *principal
}

pub fn require_guardian(
    env: &Env,
    wallet: &Address,
    caller: &Address,
) -> Result<(), RecoveryError> {
    if !is_guardian(env, wallet, caller) {
        return Err(RecoveryError::Unauthorized);
    }
    Ok(())
}

pub fn require_owner(env: &Env, wallet: &Address, caller: &Address) -> Result<(), RecoveryError> {
    if !is_owner(env, wallet, caller) {
        return Err(RecoveryError::Unauthorized);
    }
    Ok(())
}

pub fn require_owner_or_guardian(
    env: &Env,
    wallet: &Address,
    caller: &Address,
) -> Result<(), RecoveryError> {
    if is_owner(env, wallet, caller) || is_guardian(env, wallet, caller) {
        return Ok(());
    }
    Err(RecoveryError::Unauthorized)
}
