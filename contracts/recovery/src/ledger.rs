//! # Recovery Ledger
//!
//! Holds at most one live [`RecoveryRequest`] per wallet. The request is
//! created by `start_recovery`, only ever gains votes while pending, and is
//! removed by finalize, cancel, or expiry.

use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::storage::RecoveryDataKey;

/// A pending proposal to hand a wallet to a new owner.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct RecoveryRequest {
    /// Principal that becomes owner if the request is finalized
    pub proposed_owner: Address,
    /// Distinct guardians that have approved, initiator first
    pub votes: Vec<Address>,
    /// Guardian that opened the request
    pub initiator: Address,
    /// Ledger timestamp when the request was opened
    pub initiated_at: u64,
    /// Ledger timestamp after which the request is stale; `0` never expires
    pub expires_at: u64,
}

impl RecoveryRequest {
    pub fn new(
        env: &Env,
        proposed_owner: Address,
        initiator: Address,
        initiated_at: u64,
        expires_at: u64,
    ) -> Self {
        let mut votes = Vec::new(env);
        votes.push_back(initiator.clone());
        Self {
            proposed_owner,
            votes,
            initiator,
            initiated_at,
            expires_at,
        }
    }

    pub fn vote_count(&self) -> u32 {
        self.votes.len()
    }

    pub fn has_voted(&self, guardian: &Address) -> bool {
        self.votes.contains(guardian)
    }

    pub fn has_quorum(&self, threshold: u32) -> bool {
        self.vote_count() >= threshold
    }

    pub fn is_expired(&self, now: u64) -> bool {
        self.expires_at != 0 && now > self.expires_at
    }

    /// Adds `guardian` to the votes. Returns `false` if it had already voted.
    pub fn record_vote(&mut self, guardian: Address) -> bool {
        if self.has_voted(&guardian) {
            return false;
        }
        self.votes.push_back(guardian);
        true
    }

    /// Drops every vote not cast by a member of `guardians`.
    ///
    /// Returns the number of votes removed.
    pub fn retain_votes(&mut self, env: &Env, guardians: &Vec<Address>) -> u32 {
        let before = self.votes.len();
        let mut kept = Vec::new(env);
        for vote in self.votes.iter() {
            if guardians.contains(&vote) {
                kept.push_back(vote);
            }
        }
        self.votes = kept;
        before - self.votes.len()
    }
}

pub fn get_request(env: &Env, wallet: &Address) -> Option<RecoveryRequest> {
    env.storage()
        .persistent()
        .get(&RecoveryDataKey::Recovery(wallet.clone()))
}

pub(crate) fn put_request(env: &Env, wallet: &Address, request: &RecoveryRequest) {
    env.storage()
        .persistent()
        .set(&RecoveryDataKey::Recovery(wallet.clone()), request);
}

pub(crate) fn remove_request(env: &Env, wallet: &Address) {
    env.storage()
        .persistent()
        .remove(&RecoveryDataKey::Recovery(wallet.clone()));
}
