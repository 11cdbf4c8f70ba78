//! # Keynest Recovery Contract
//!
//! Social recovery for wallets on Soroban. A wallet's owner designates a set
//! of guardians and a vote threshold; if the owner loses access, the
//! guardians can jointly move the wallet to a new owner without any single
//! guardian being able to do so alone.
//!
//! - **Registry**: guardian set, threshold, and current owner per wallet
//! - **Recovery ledger**: at most one pending request per wallet
//! - **Authorization guard**: owner / guardian predicates
//! - **Recovery engine**: configure, start, vote, finalize, cancel, expire
//! - **Configuration**: admin-managed reconfiguration policy and expiry period
//!
//! Callers are authenticated by the host through `require_auth`; the
//! contract then checks what the authenticated address is allowed to do.

#![no_std]

use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

mod config;
mod errors;
mod events;
mod guard;
mod ledger;
mod recovery;
mod registry;
mod storage;

pub use config::{
    ReconfigurePolicy, RecoveryConfig, MAX_RECOVERY_PERIOD, MIN_RECOVERY_PERIOD,
};
pub use errors::RecoveryError;
pub use events::{
    ConfigUpdatedEvent, GuardiansConfiguredEvent, RecoveryCancelledEvent, RecoveryExpiredEvent,
    RecoveryFinalizedEvent, RecoveryStartedEvent, RecoveryVotedEvent,
};
pub use ledger::RecoveryRequest;
pub use storage::GuardianConfig;

#[cfg(test)]
mod registry_test;
#[cfg(test)]
mod test_helpers;

#[contract]
pub struct RecoveryContract;

#[contractimpl]
impl RecoveryContract {
    /// Initialize the contract admin and configuration
    ///
    /// Optional: without it the default configuration applies
    /// (`Reject` reconfiguration while pending, no expiry).
    ///
    /// # Arguments
    /// * `admin` - The address allowed to change the configuration (must authorize)
    /// * `config` - Initial configuration
    ///
    /// # Errors
    /// - `AlreadyInitialized` - An admin is already set
    /// - `InvalidConfig` - Non-zero recovery period outside
    ///   `MIN_RECOVERY_PERIOD..=MAX_RECOVERY_PERIOD`
    pub fn initialize(
        env: Env,
        admin: Address,
        config: RecoveryConfig,
    ) -> Result<(), RecoveryError> {
        admin.require_auth();
        config::initialize(&env, admin, config)
    }

    /// Replace the configuration (admin only)
    ///
    /// # Errors
    /// - `NotInitialized` - `initialize` was never called
    /// - `Unauthorized` - Caller is not the admin
    /// - `InvalidConfig` - Non-zero recovery period outside
    ///   `MIN_RECOVERY_PERIOD..=MAX_RECOVERY_PERIOD`
    pub fn update_config(
        env: Env,
        caller: Address,
        config: RecoveryConfig,
    ) -> Result<(), RecoveryError> {
        caller.require_auth();
        config::update_config(&env, caller, config)
    }

    /// Get the current configuration
    pub fn get_config(env: Env) -> RecoveryConfig {
        config::get_config(&env)
    }

    /// Get the admin address, if the contract was initialized
    pub fn get_admin(env: Env) -> Option<Address> {
        config::get_admin(&env)
    }

    /// Set the guardians and vote threshold of a wallet (owner only)
    ///
    /// Replaces any previous configuration. Guardian set and threshold are
    /// always written together.
    ///
    /// # Arguments
    /// * `wallet` - The wallet being configured
    /// * `caller` - The wallet's current owner (must authorize)
    /// * `guardians` - Distinct guardian addresses
    /// * `threshold` - Votes needed to finalize a recovery
    ///
    /// # Errors
    /// - `Unauthorized` - Caller is not the owner
    /// - `EmptyGuardianSet` - No guardians given
    /// - `DuplicateGuardian` - A guardian is listed twice
    /// - `InvalidThreshold` - Threshold is zero or exceeds the guardian count
    /// - `ReconfigurationWhilePending` - A recovery is pending and the policy is `Reject`
    pub fn configure_guardians(
        env: Env,
        wallet: Address,
        caller: Address,
        guardians: Vec<Address>,
        threshold: u32,
    ) -> Result<(), RecoveryError> {
        caller.require_auth();
        recovery::configure_guardians(&env, wallet, caller, guardians, threshold)
    }

    /// Start a recovery proposing a new owner (guardian only)
    ///
    /// The initiating guardian's call counts as its vote. An expired request
    /// is cleared and replaced in the same call.
    ///
    /// # Errors
    /// - `Unauthorized` - Caller is not a guardian of the wallet
    /// - `RecoveryAlreadyPending` - The wallet has a pending request that has not expired
    pub fn start_recovery(
        env: Env,
        wallet: Address,
        caller: Address,
        proposed_owner: Address,
    ) -> Result<(), RecoveryError> {
        caller.require_auth();
        recovery::start_recovery(&env, wallet, caller, proposed_owner)
    }

    /// Vote for the pending recovery (guardian only)
    ///
    /// # Returns
    /// The number of distinct votes. Repeat votes leave it unchanged.
    ///
    /// # Errors
    /// - `Unauthorized` - Caller is not a guardian of the wallet
    /// - `NoPendingRecovery` - No request to vote on
    /// - `RecoveryExpired` - The request passed its expiry
    pub fn vote_recovery(env: Env, wallet: Address, caller: Address) -> Result<u32, RecoveryError> {
        caller.require_auth();
        recovery::vote_recovery(&env, wallet, caller)
    }

    /// Finalize the pending recovery and transfer ownership (guardian only)
    ///
    /// # Returns
    /// The new owner
    ///
    /// # Errors
    /// - `Unauthorized` - Caller is not a guardian of the wallet
    /// - `NoPendingRecovery` - No request to finalize
    /// - `RecoveryExpired` - The request passed its expiry
    /// - `QuorumNotMet` - Fewer votes than the wallet's threshold
    pub fn finalize_recovery(
        env: Env,
        wallet: Address,
        caller: Address,
    ) -> Result<Address, RecoveryError> {
        caller.require_auth();
        recovery::finalize_recovery(&env, wallet, caller)
    }

    /// Cancel the pending recovery (owner only)
    ///
    /// # Errors
    /// - `Unauthorized` - Caller is not the owner
    /// - `NoPendingRecovery` - No request to cancel
    pub fn cancel_recovery(
        env: Env,
        wallet: Address,
        caller: Address,
    ) -> Result<(), RecoveryError> {
        caller.require_auth();
        recovery::cancel_recovery(&env, wallet, caller)
    }

    /// Clear a pending recovery that outlived the recovery period
    /// (owner or guardian)
    ///
    /// # Errors
    /// - `Unauthorized` - Caller is neither owner nor guardian
    /// - `NoPendingRecovery` - No request to clear
    /// - `RecoveryNotExpired` - The request has no expiry or has not reached it
    pub fn expire_recovery(
        env: Env,
        wallet: Address,
        caller: Address,
    ) -> Result<(), RecoveryError> {
        caller.require_auth();
        recovery::expire_recovery(&env, wallet, caller)
    }

    /// Get a wallet's guardians, or `None` if never configured
    pub fn get_guardians(env: Env, wallet: Address) -> Option<Vec<Address>> {
        registry::get_guardians(&env, &wallet)
    }

    /// Get a wallet's threshold, or `None` if never configured
    pub fn get_threshold(env: Env, wallet: Address) -> Option<u32> {
        registry::get_threshold(&env, &wallet)
    }

    /// Get a wallet's current owner
    ///
    /// A wallet that has never been recovered is owned by its own address.
    pub fn get_owner(env: Env, wallet: Address) -> Address {
        registry::get_owner(&env, &wallet)
    }

    /// Get the pending recovery request, or `None` if there is none
    pub fn get_recovery_state(env: Env, wallet: Address) -> Option<RecoveryRequest> {
        recovery::get_recovery_state(&env, &wallet)
    }

    /// Get the number of distinct votes on the pending request
    pub fn get_vote_count(env: Env, wallet: Address) -> u32 {
        recovery::get_vote_count(&env, &wallet)
    }

    /// Check whether the pending request meets the wallet's threshold
    pub fn has_quorum(env: Env, wallet: Address) -> bool {
        recovery::has_quorum(&env, &wallet)
    }

    /// Check whether `principal` is one of the wallet's guardians
    pub fn is_guardian(env: Env, wallet: Address, principal: Address) -> bool {
        guard::is_guardian(&env, &wallet, &principal)
    }

    /// Check whether `principal` is the wallet's current owner
    pub fn is_owner(env: Env, wallet: Address, principal: Address) -> bool {
        guard::is_owner(&env, &wallet, &principal)
    }
}
