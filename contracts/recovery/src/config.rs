//! # Configuration Module
//!
//! Contract-wide settings kept in instance storage:
//! - the admin allowed to change them,
//! - how guardian reconfiguration interacts with a pending recovery,
//! - an optional expiry period for recovery requests.
//!
//! The contract is usable without ever calling `initialize`; in that case
//! [`RecoveryConfig::default`] applies and nobody can change it.

use soroban_sdk::{contracttype, Address, Env};

use crate::errors::RecoveryError;
use crate::events::{emit_config_updated, ConfigUpdatedEvent};
use crate::storage::RecoveryDataKey;

/// Lower bound for a non-zero [`RecoveryConfig::recovery_period`] (one day).
pub const MIN_RECOVERY_PERIOD: u64 = 24 * 60 * 60;

/// Upper bound for [`RecoveryConfig::recovery_period`] (one year).
pub const MAX_RECOVERY_PERIOD: u64 = 365 * 24 * 60 * 60;

/// What `configure_guardians` does while the wallet has a pending recovery.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ReconfigurePolicy {
    /// Refuse the change until the recovery is finalized, cancelled, or expired
    Reject = 0,
    /// Apply the change and drop votes from guardians that were removed
    TrimVotes = 1,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecoveryConfig {
    pub reconfigure_policy: ReconfigurePolicy,
    /// Seconds a request stays live after `start_recovery`; `0` disables expiry
    pub recovery_period: u64,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            reconfigure_policy: ReconfigurePolicy::Reject,
            recovery_period: 0,
        }
    }
}

impl RecoveryConfig {
    /// A period of `0` disables expiry; anything else must lie within
    /// [`MIN_RECOVERY_PERIOD`]..=[`MAX_RECOVERY_PERIOD`].
    pub fn validate(&self) -> Result<(), RecoveryError> {
        if self.recovery_period == 0 {
            return Ok(());
        }
        if !(MIN_RECOVERY_PERIOD..=MAX_RECOVERY_PERIOD).contains(&self.recovery_period) {
            return Err(RecoveryError::InvalidConfig);
        }
        Ok(())
    }

    /// Expiry timestamp for a request opened at `now`, or `0` for none.
    pub fn expiry_from(&self, now: u64) -> u64 {
        if self.recovery_period == 0 {
            0
        } else {
            now.saturating_add(self.recovery_period)
        }
    }
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&RecoveryDataKey::Admin)
}

pub fn get_config(env: &Env) -> RecoveryConfig {
    env.storage()
        .instance()
        .get(&RecoveryDataKey::Config)
        .unwrap_or_default()
}

/// Sets the admin and initial configuration. Can only be called once.
///
/// # Errors
/// - [`RecoveryError::AlreadyInitialized`] if an admin already exists.
/// - [`RecoveryError::InvalidConfig`] if a non-zero `recovery_period` is
///   outside [`MIN_RECOVERY_PERIOD`]..=[`MAX_RECOVERY_PERIOD`].
pub fn initialize(
    env: &Env,
    admin: Address,
    config: RecoveryConfig,
) -> Result<(), RecoveryError> {
    if env.storage().instance().has(&RecoveryDataKey::Admin) {
        return Err(RecoveryError::AlreadyInitialized);
    }
    config.validate()?;

    env.storage().instance().set(&RecoveryDataKey::Admin, &admin);
    env.storage()
        .instance()
        .set(&RecoveryDataKey::Config, &config);

    emit_config_updated(
        env,
        ConfigUpdatedEvent {
            admin,
            reconfigure_policy: config.reconfigure_policy,
            recovery_period: config.recovery_period,
        },
    );
    Ok(())
}

/// Replaces the configuration (admin only).
///
/// A new `recovery_period` applies to requests opened afterwards; live
/// requests keep the expiry they were created with.
///
/// # Errors
/// - [`RecoveryError::NotInitialized`] if no admin was set.
/// - [`RecoveryError::Unauthorized`] if `caller` is not the admin.
/// - [`RecoveryError::InvalidConfig`] if a non-zero `recovery_period` is
///   outside [`MIN_RECOVERY_PERIOD`]..=[`MAX_RECOVERY_PERIOD`].
pub fn update_config(
    env: &Env,
    caller: Address,
    config: RecoveryConfig,
) -> Result<(), RecoveryError> {
    let admin = get_admin(env).ok_or(RecoveryError::NotInitialized)?;
    if caller != admin {
        return Err(RecoveryError::Unauthorized);
    }
    config.validate()?;

    env.storage()
        .instance()
        .set(&RecoveryDataKey::Config, &config);

    emit_config_updated(
        env,
        ConfigUpdatedEvent {
            admin,
            reconfigure_policy: config.reconfigure_policy,
            recovery_period: config.recovery_period,
        },
    );
    Ok(())
}
