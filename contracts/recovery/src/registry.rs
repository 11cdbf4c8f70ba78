//! # Guardian Registry
//!
//! Per-wallet guardian sets, vote thresholds, and the wallet → owner
//! relation. A wallet that has never been recovered is owned by its own
//! address; a finalized recovery records the new owner explicitly.

use soroban_sdk::{Address, Env, Vec};

use crate::errors::RecoveryError;
use crate::storage::{GuardianConfig, RecoveryDataKey};

/// Checks a candidate guardian list and threshold.
///
/// # Errors
/// - [`RecoveryError::EmptyGuardianSet`] if `guardians` is empty.
/// - [`RecoveryError::DuplicateGuardian`] if an address repeats.
/// - [`RecoveryError::InvalidThreshold`] unless `1 <= threshold <= guardians.len()`.
pub fn validate_guardian_config(
    guardians: &Vec<Address>,
    threshold: u32,
) -> Result<(), RecoveryError> {
    if guardians.is_empty() {
        return Err(RecoveryError::EmptyGuardianSet);
    }

    for (i, guardian) in guardians.iter().enumerate() {
        for other in guardians.iter().skip(i + 1) {
            if guardian == other {
                return Err(RecoveryError::DuplicateGuardian);
            }
        }
    }

    if threshold == 0 || threshold > guardians.len() {
        return Err(RecoveryError::InvalidThreshold);
    }
    Ok(())
}

pub fn get_guardian_config(env: &Env, wallet: &Address) -> Option<GuardianConfig> {
    env.storage()
        .persistent()
        .get(&RecoveryDataKey::Guardians(wallet.clone()))
}

/// Replaces the wallet's guardian configuration. Callers validate first.
pub(crate) fn set_guardian_config(env: &Env, wallet: &Address, config: &GuardianConfig) {
    env.storage()
        .persistent()
        .set(&RecoveryDataKey::Guardians(wallet.clone()), config);
}

/// Returns the wallet's guardians, or `None` if it was never configured.
pub fn get_guardians(env: &Env, wallet: &Address) -> Option<Vec<Address>> {
    get_guardian_config(env, wallet).map(|config| config.guardians)
}

/// Returns the wallet's threshold, or `None` if it was never configured.
pub fn get_threshold(env: &Env, wallet: &Address) -> Option<u32> {
    get_guardian_config(env, wallet).map(|config| config.threshold)
}

/// Returns the current owner of `wallet`.
pub fn get_owner(env: &Env, wallet: &Address) -> Address {
    env.storage()
        .persistent()
        .get(&RecoveryDataKey::Owner(wallet.clone()))
        .unwrap_or_else(|| wallet.clone())
}

pub(crate) fn set_owner(env: &Env, wallet: &Address, owner: &Address) {
    env.storage()
        .persistent()
        .set(&RecoveryDataKey::Owner(wallet.clone()), owner);
}
