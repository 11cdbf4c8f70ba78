use soroban_sdk::{testutils::Address as _, Address, Env, Vec};

use crate::{RecoveryContract, RecoveryContractClient};

/// Registers a fresh contract with all auths mocked.
pub fn setup(env: &Env) -> RecoveryContractClient<'_> {
    env.mock_all_auths();
    let contract_id = env.register(RecoveryContract, ());
    RecoveryContractClient::new(env, &contract_id)
}

pub fn addresses(env: &Env, count: u32) -> Vec<Address> {
    let mut list = Vec::new(env);
    for _ in 0..count {
        list.push_back(Address::generate(env));
    }
    list
}

/// Creates a wallet guarded by `count` fresh guardians with `threshold`.
///
/// The wallet owns itself, so it is also the configuring caller.
pub fn configured_wallet(
    env: &Env,
    client: &RecoveryContractClient,
    count: u32,
    threshold: u32,
) -> (Address, Vec<Address>) {
    let wallet = Address::generate(env);
    let guardians = addresses(env, count);
    client.configure_guardians(&wallet, &wallet, &guardians, &threshold);
    (wallet, guardians)
}
