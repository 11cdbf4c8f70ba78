use soroban_sdk::contracterror;

/// All errors returned by the recovery contract.
///
/// Codes are surfaced as `u32` values in the Soroban result envelope so
/// that callers can match them programmatically. Every variant is a
/// precondition failure: retrying with the same arguments fails the same way.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RecoveryError {
    /// Caller is not allowed to perform this action on the wallet.
    Unauthorized = 1,
    /// Threshold is zero or larger than the guardian set.
    InvalidThreshold = 2,
    /// Guardian list is empty.
    EmptyGuardianSet = 3,
    /// The wallet already has a live recovery request.
    RecoveryAlreadyPending = 4,
    /// The wallet has no live recovery request.
    NoPendingRecovery = 5,
    /// Fewer distinct guardian votes than the wallet's threshold.
    QuorumNotMet = 6,
    /// The same principal appears more than once in the guardian list.
    DuplicateGuardian = 7,
    /// Reconfiguration was attempted while a recovery is pending and the
    /// contract policy rejects that.
    ReconfigurationWhilePending = 8,
    /// The pending request has passed its expiry.
    RecoveryExpired = 9,
    /// The pending request has no expiry or has not reached it yet.
    RecoveryNotExpired = 10,
    /// `initialize` has already been called.
    AlreadyInitialized = 11,
    /// The contract has no admin yet.
    NotInitialized = 12,
    /// Contract configuration values are out of range.
    InvalidConfig = 13,
}
