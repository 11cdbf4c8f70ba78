//! # Recovery Events
//!
//! One `#[contractevent]` struct per successful state transition. The macro
//! uses the snake_case struct name as the leading topic; the wallet is a
//! second `#[topic]` so indexers can follow a single wallet's history.
//! Failed calls emit nothing.

use soroban_sdk::{contractevent, Address, Env};

use crate::config::ReconfigurePolicy;

/// Emitted when a wallet's guardian set and threshold are replaced.
///
/// `votes_dropped` is non-zero only when a pending request lost votes
/// under [`ReconfigurePolicy::TrimVotes`].
#[contractevent]
#[derive(Clone, Debug)]
pub struct GuardiansConfiguredEvent {
    #[topic]
    pub wallet: Address,
    pub guardian_count: u32,
    pub threshold: u32,
    pub votes_dropped: u32,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct RecoveryStartedEvent {
    #[topic]
    pub wallet: Address,
    pub initiator: Address,
    pub proposed_owner: Address,
    pub expires_at: u64,
}

/// Emitted for every accepted vote, including a repeated one.
///
/// `counted` is `false` when the guardian had already voted.
#[contractevent]
#[derive(Clone, Debug)]
pub struct RecoveryVotedEvent {
    #[topic]
    pub wallet: Address,
    pub guardian: Address,
    pub vote_count: u32,
    pub counted: bool,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct RecoveryFinalizedEvent {
    #[topic]
    pub wallet: Address,
    pub previous_owner: Address,
    pub new_owner: Address,
    pub executor: Address,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct RecoveryCancelledEvent {
    #[topic]
    pub wallet: Address,
    pub owner: Address,
    pub proposed_owner: Address,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct RecoveryExpiredEvent {
    #[topic]
    pub wallet: Address,
    pub caller: Address,
    pub expires_at: u64,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct ConfigUpdatedEvent {
    pub admin: Address,
    pub reconfigure_policy: ReconfigurePolicy,
    pub recovery_period: u64,
}

pub fn emit_guardians_configured(e: &Env, event: GuardiansConfiguredEvent) {
    event.publish(e);
}

pub fn emit_recovery_started(e: &Env, event: RecoveryStartedEvent) {
    event.publish(e);
}

pub fn emit_recovery_voted(e: &Env, event: RecoveryVotedEvent) {
    event.publish(e);
}

/// Call this after the owner record is written and the request removed.
pub fn emit_recovery_finalized(e: &Env, event: RecoveryFinalizedEvent) {
    event.publish(e);
}

pub fn emit_recovery_cancelled(e: &Env, event: RecoveryCancelledEvent) {
    event.publish(e);
}

pub fn emit_recovery_expired(e: &Env, event: RecoveryExpiredEvent) {
    event.publish(e);
}

pub fn emit_config_updated(e: &Env, event: ConfigUpdatedEvent) {
    event.publish(e);
}
