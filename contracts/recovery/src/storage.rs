use soroban_sdk::{contracttype, Address, Vec};

/// Storage keys for the recovery contract.
///
/// `Admin` and `Config` live in instance storage; every per-wallet entry
/// lives in persistent storage keyed by the wallet address, so operations on
/// different wallets never touch the same entry.
#[derive(Clone)]
#[contracttype]
pub enum RecoveryDataKey {
    Admin,
    Config,
    /// Guardian set and threshold of a wallet
    Guardians(Address),
    /// The wallet's live recovery request, if any
    Recovery(Address),
    /// Owner installed by the last finalized recovery
    Owner(Address),
}

/// Guardian set and vote threshold of a single wallet.
///
/// Both fields are written as one entry so a reconfiguration can never
/// leave a new set paired with a stale threshold.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct GuardianConfig {
    pub guardians: Vec<Address>,
    pub threshold: u32,
}
