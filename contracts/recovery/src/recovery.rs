//! # Recovery State Machine
//!
//! Implements the start → vote → finalize/cancel flow that lets a wallet's
//! guardians hand it to a new owner.
//!
//! ## How It Works
//! 1. The owner registers guardians and a threshold with [`configure_guardians`].
//! 2. A guardian opens a request with [`start_recovery`]; that call is also
//!    its first vote.
//! 3. Other guardians approve with [`vote_recovery`] until the threshold is met.
//! 4. Any guardian executes the transfer with [`finalize_recovery`].
//!
//! The owner can abort at any point with [`cancel_recovery`]. When the
//! contract config sets a recovery period, a request that outlives it can
//! no longer be voted on or finalized. It is cleared with [`expire_recovery`]
//! or replaced by the next [`start_recovery`].
//!
//! ## Safety Guarantees
//! - Only the current owner can change guardians or cancel.
//! - Only guardians can start, vote, or finalize.
//! - A wallet has at most one pending request.
//! - A guardian's vote counts once no matter how often it votes.
//! - Ownership changes only through a finalize that meets the threshold.
//!
//! Every function validates all of its preconditions before it writes.

use soroban_sdk::{log, Address, Env, Vec};

use crate::config::{self, ReconfigurePolicy};
use crate::errors::RecoveryError;
use crate::events::{
    emit_guardians_configured, emit_recovery_cancelled, emit_recovery_expired,
    emit_recovery_finalized, emit_recovery_started, emit_recovery_voted,
    GuardiansConfiguredEvent, RecoveryCancelledEvent, RecoveryExpiredEvent,
    RecoveryFinalizedEvent, RecoveryStartedEvent, RecoveryVotedEvent,
};
use crate::guard;
use crate::ledger::{self, RecoveryRequest};
use crate::registry;
use crate::storage::GuardianConfig;

// ============================================================================
// Guardian Management
// ============================================================================

/// Replaces the guardian set and threshold of `wallet`.
///
/// If a recovery is pending, the contract's [`ReconfigurePolicy`] decides
/// whether the change is refused or applied with stale votes removed.
///
/// # Errors
/// - [`RecoveryError::Unauthorized`] if `caller` is not the wallet owner.
/// - [`RecoveryError::EmptyGuardianSet`], [`RecoveryError::DuplicateGuardian`],
///   [`RecoveryError::InvalidThreshold`] for a malformed configuration.
/// - [`RecoveryError::ReconfigurationWhilePending`] under
///   [`ReconfigurePolicy::Reject`] while a request is pending.
pub fn configure_guardians(
    env: &Env,
    wallet: Address,
    caller: Address,
    guardians: Vec<Address>,
    threshold: u32,
) -> Result<(), RecoveryError> {
    guard::require_owner(env, &wallet, &caller)?;
    registry::validate_guardian_config(&guardians, threshold)?;

    let mut votes_dropped = 0;
    if let Some(mut request) = ledger::get_request(env, &wallet) {
        match config::get_config(env).reconfigure_policy {
            ReconfigurePolicy::Reject => {
                return Err(RecoveryError::ReconfigurationWhilePending);
            }
            ReconfigurePolicy::TrimVotes => {
                votes_dropped = request.retain_votes(env, &guardians);
                if votes_dropped > 0 {
                    ledger::put_request(env, &wallet, &request);
                }
            }
        }
    }

    let guardian_count = guardians.len();
    registry::set_guardian_config(
        env,
        &wallet,
        &GuardianConfig {
            guardians,
            threshold,
        },
    );

    emit_guardians_configured(
        env,
        GuardiansConfiguredEvent {
            wallet: wallet.clone(),
            guardian_count,
            threshold,
            votes_dropped,
        },
    );
    log!(env, "guardians configured", wallet, guardian_count, threshold);
    Ok(())
}

// ============================================================================
// Recovery Lifecycle
// ============================================================================

/// Opens a recovery request proposing `proposed_owner` as the new owner.
///
/// The initiating guardian is recorded as the first vote. A request that
/// has already expired is cleared first, publishing the same event as
/// [`expire_recovery`].
///
/// # Errors
/// - [`RecoveryError::Unauthorized`] if `caller` is not a guardian of `wallet`.
/// - [`RecoveryError::RecoveryAlreadyPending`] if a live request exists.
pub fn start_recovery(
    env: &Env,
    wallet: Address,
    caller: Address,
    proposed_owner: Address,
) -> Result<(), RecoveryError> {
    guard::require_guardian(env, &wallet, &caller)?;

    let now = env.ledger().timestamp();
    if let Some(stale) = ledger::get_request(env, &wallet) {
        if !stale.is_expired(now) {
            return Err(RecoveryError::RecoveryAlreadyPending);
        }
        ledger::remove_request(env, &wallet);
        emit_recovery_expired(
            env,
            RecoveryExpiredEvent {
                wallet: wallet.clone(),
                caller: caller.clone(),
                expires_at: stale.expires_at,
            },
        );
    }

    let expires_at = config::get_config(env).expiry_from(now);
    let request = RecoveryRequest::new(
        env,
        proposed_owner.clone(),
        caller.clone(),
        now,
        expires_at,
    );
    ledger::put_request(env, &wallet, &request);

    emit_recovery_started(
        env,
        RecoveryStartedEvent {
            wallet: wallet.clone(),
            initiator: caller,
            proposed_owner: proposed_owner.clone(),
            expires_at,
        },
    );
    log!(env, "recovery started", wallet, proposed_owner);
    Ok(())
}

/// Records `caller`'s approval of the pending request.
///
/// Voting again is a successful no-op; the count does not change.
///
/// # Returns
/// The number of distinct votes after this call.
///
/// # Errors
/// - [`RecoveryError::Unauthorized`] if `caller` is not a guardian of `wallet`.
/// - [`RecoveryError::NoPendingRecovery`] if there is no request.
/// - [`RecoveryError::RecoveryExpired`] if the request is past its expiry.
pub fn vote_recovery(env: &Env, wallet: Address, caller: Address) -> Result<u32, RecoveryError> {
    guard::require_guardian(env, &wallet, &caller)?;

    let mut request =
        ledger::get_request(env, &wallet).ok_or(RecoveryError::NoPendingRecovery)?;
    if request.is_expired(env.ledger().timestamp()) {
        return Err(RecoveryError::RecoveryExpired);
    }

    let counted = request.record_vote(caller.clone());
    if counted {
        ledger::put_request(env, &wallet, &request);
    }

    let vote_count = request.vote_count();
    emit_recovery_voted(
        env,
        RecoveryVotedEvent {
            wallet,
            guardian: caller,
            vote_count,
            counted,
        },
    );
    Ok(vote_count)
}

/// Transfers ownership of `wallet` to the proposed owner once the vote
/// threshold is met, and clears the request.
///
/// The caller must be a guardian but does not need to have voted.
///
/// # Returns
/// The new owner.
///
/// # Errors
/// - [`RecoveryError::Unauthorized`] if `caller` is not a guardian of `wallet`.
/// - [`RecoveryError::NoPendingRecovery`] if there is no request.
/// - [`RecoveryError::RecoveryExpired`] if the request is past its expiry.
/// - [`RecoveryError::QuorumNotMet`] if fewer guardians voted than the
///   wallet's current threshold.
pub fn finalize_recovery(
    env: &Env,
    wallet: Address,
    caller: Address,
) -> Result<Address, RecoveryError> {
    guard::require_guardian(env, &wallet, &caller)?;

    let request = ledger::get_request(env, &wallet).ok_or(RecoveryError::NoPendingRecovery)?;
    if request.is_expired(env.ledger().timestamp()) {
        return Err(RecoveryError::RecoveryExpired);
    }

    let threshold = registry::get_threshold(env, &wallet).ok_or(RecoveryError::Unauthorized)?;
    if !request.has_quorum(threshold) {
        return Err(RecoveryError::QuorumNotMet);
    }

    let previous_owner = registry::get_owner(env, &wallet);
    registry::set_owner(env, &wallet, &request.proposed_owner);
    ledger::remove_request(env, &wallet);

    emit_recovery_finalized(
        env,
        RecoveryFinalizedEvent {
            wallet: wallet.clone(),
            previous_owner,
            new_owner: request.proposed_owner.clone(),
            executor: caller,
        },
    );
    log!(env, "recovery finalized", wallet, request.proposed_owner);
    Ok(request.proposed_owner)
}

/// Aborts the pending request. Only the current owner may cancel.
///
/// # Errors
/// - [`RecoveryError::Unauthorized`] if `caller` is not the wallet owner.
/// - [`RecoveryError::NoPendingRecovery`] if there is no request.
pub fn cancel_recovery(env: &Env, wallet: Address, caller: Address) -> Result<(), RecoveryError> {
    guard::require_owner(env, &wallet, &caller)?;

    let request = ledger::get_request(env, &wallet).ok_or(RecoveryError::NoPendingRecovery)?;
    ledger::remove_request(env, &wallet);

    emit_recovery_cancelled(
        env,
        RecoveryCancelledEvent {
            wallet: wallet.clone(),
            owner: caller,
            proposed_owner: request.proposed_owner,
        },
    );
    log!(env, "recovery cancelled", wallet);
    Ok(())
}

/// Clears a request that has passed its expiry.
///
/// # Errors
/// - [`RecoveryError::Unauthorized`] if `caller` is neither the owner nor a
///   guardian of `wallet`.
/// - [`RecoveryError::NoPendingRecovery`] if there is no request.
/// - [`RecoveryError::RecoveryNotExpired`] if the request never expires or
///   its expiry has not passed.
pub fn expire_recovery(env: &Env, wallet: Address, caller: Address) -> Result<(), RecoveryError> {
    guard::require_owner_or_guardian(env, &wallet, &caller)?;

    let request = ledger::get_request(env, &wallet).ok_or(RecoveryError::NoPendingRecovery)?;
    if !request.is_expired(env.ledger().timestamp()) {
        return Err(RecoveryError::RecoveryNotExpired);
    }
    ledger::remove_request(env, &wallet);

    emit_recovery_expired(
        env,
        RecoveryExpiredEvent {
            wallet: wallet.clone(),
            caller,
            expires_at: request.expires_at,
        },
    );
    log!(env, "recovery expired", wallet);
    Ok(())
}

// ============================================================================
// View Functions
// ============================================================================

/// Returns the pending request, or `None` when no recovery is in progress.
pub fn get_recovery_state(env: &Env, wallet: &Address) -> Option<RecoveryRequest> {
    ledger::get_request(env, wallet)
}

/// Returns the number of distinct votes on the pending request (`0` if none).
pub fn get_vote_count(env: &Env, wallet: &Address) -> u32 {
    ledger::get_request(env, wallet)
        .map(|request| request.vote_count())
        .unwrap_or(0)
}

/// Returns `true` if a pending request currently meets the wallet's threshold.
pub fn has_quorum(env: &Env, wallet: &Address) -> bool {
    match (
        ledger::get_request(env, wallet),
        registry::get_threshold(env, wallet),
    ) {
        (Some(request), Some(threshold)) => request.has_quorum(threshold),
        _ => false,
    }
}
