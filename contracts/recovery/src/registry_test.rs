use soroban_sdk::{testutils::Address as _, Address, Env, Vec};

use crate::errors::RecoveryError;
use crate::registry::validate_guardian_config;
use crate::test_helpers::{addresses, configured_wallet, setup};

// ── validate_guardian_config ─────────────────────────────────────────────────

#[test]
fn test_validate_accepts_threshold_bounds() {
    let env = Env::default();
    let guardians = addresses(&env, 3);
    assert_eq!(validate_guardian_config(&guardians, 1), Ok(()));
    assert_eq!(validate_guardian_config(&guardians, 3), Ok(()));
}

#[test]
fn test_validate_rejects_zero_and_oversized_threshold() {
    let env = Env::default();
    let guardians = addresses(&env, 3);
    assert_eq!(
        validate_guardian_config(&guardians, 0),
        Err(RecoveryError::InvalidThreshold)
    );
    assert_eq!(
        validate_guardian_config(&guardians, 4),
        Err(RecoveryError::InvalidThreshold)
    );
}

#[test]
fn test_validate_empty_takes_precedence_over_threshold() {
    let env = Env::default();
    let empty: Vec<Address> = Vec::new(&env);
    assert_eq!(
        validate_guardian_config(&empty, 0),
        Err(RecoveryError::EmptyGuardianSet)
    );
    assert_eq!(
        validate_guardian_config(&empty, 1),
        Err(RecoveryError::EmptyGuardianSet)
    );
}

#[test]
fn test_validate_rejects_duplicates_anywhere_in_list() {
    let env = Env::default();
    let a = Address::generate(&env);
    let b = Address::generate(&env);
    let c = Address::generate(&env);
    let guardians = Vec::from_array(&env, [a.clone(), b, c, a]);
    assert_eq!(
        validate_guardian_config(&guardians, 2),
        Err(RecoveryError::DuplicateGuardian)
    );
}

// ── configure_guardians ──────────────────────────────────────────────────────

#[test]
fn test_unconfigured_wallet_reads_none() {
    let env = Env::default();
    let client = setup(&env);
    let wallet = Address::generate(&env);

    assert_eq!(client.get_guardians(&wallet), None);
    assert_eq!(client.get_threshold(&wallet), None);
    assert_eq!(client.get_recovery_state(&wallet), None);
    assert_eq!(client.get_owner(&wallet), wallet);
}

#[test]
fn test_configure_sets_guardians_and_threshold() {
    let env = Env::default();
    let client = setup(&env);
    let (wallet, guardians) = configured_wallet(&env, &client, 3, 2);

    assert_eq!(client.get_guardians(&wallet), Some(guardians.clone()));
    assert_eq!(client.get_threshold(&wallet), Some(2));
    for guardian in guardians.iter() {
        assert!(client.is_guardian(&wallet, &guardian));
    }
    assert!(!client.is_guardian(&wallet, &wallet));
}

#[test]
fn test_configure_replaces_previous_set() {
    let env = Env::default();
    let client = setup(&env);
    let (wallet, old) = configured_wallet(&env, &client, 3, 3);

    let new = addresses(&env, 2);
    client.configure_guardians(&wallet, &wallet, &new, &1);

    assert_eq!(client.get_guardians(&wallet), Some(new));
    assert_eq!(client.get_threshold(&wallet), Some(1));
    assert!(!client.is_guardian(&wallet, &old.get(0).unwrap()));
}

#[test]
fn test_configure_by_non_owner_is_unauthorized() {
    let env = Env::default();
    let client = setup(&env);
    let wallet = Address::generate(&env);
    let stranger = Address::generate(&env);
    let guardians = addresses(&env, 2);

    let result = client.try_configure_guardians(&wallet, &stranger, &guardians, &1);
    assert_eq!(result, Err(Ok(RecoveryError::Unauthorized)));
    assert_eq!(client.get_guardians(&wallet), None);
}

#[test]
fn test_guardian_cannot_reconfigure() {
    let env = Env::default();
    let client = setup(&env);
    let (wallet, guardians) = configured_wallet(&env, &client, 3, 2);
    let guardian = guardians.get(0).unwrap();

    let result = client.try_configure_guardians(&wallet, &guardian, &addresses(&env, 1), &1);
    assert_eq!(result, Err(Ok(RecoveryError::Unauthorized)));
}

#[test]
fn test_unauthorized_is_checked_before_validation() {
    let env = Env::default();
    let client = setup(&env);
    let wallet = Address::generate(&env);
    let stranger = Address::generate(&env);

    let result = client.try_configure_guardians(&wallet, &stranger, &Vec::new(&env), &0);
    assert_eq!(result, Err(Ok(RecoveryError::Unauthorized)));
}

#[test]
fn test_configure_rejects_empty_set() {
    let env = Env::default();
    let client = setup(&env);
    let wallet = Address::generate(&env);

    let result = client.try_configure_guardians(&wallet, &wallet, &Vec::new(&env), &1);
    assert_eq!(result, Err(Ok(RecoveryError::EmptyGuardianSet)));
}

#[test]
fn test_configure_rejects_invalid_threshold() {
    let env = Env::default();
    let client = setup(&env);
    let wallet = Address::generate(&env);
    let guardians = addresses(&env, 2);

    assert_eq!(
        client.try_configure_guardians(&wallet, &wallet, &guardians, &0),
        Err(Ok(RecoveryError::InvalidThreshold))
    );
    assert_eq!(
        client.try_configure_guardians(&wallet, &wallet, &guardians, &3),
        Err(Ok(RecoveryError::InvalidThreshold))
    );
}

#[test]
fn test_failed_reconfigure_keeps_previous_config() {
    let env = Env::default();
    let client = setup(&env);
    let (wallet, guardians) = configured_wallet(&env, &client, 3, 2);

    let result = client.try_configure_guardians(&wallet, &wallet, &addresses(&env, 2), &5);
    assert_eq!(result, Err(Ok(RecoveryError::InvalidThreshold)));
    assert_eq!(client.get_guardians(&wallet), Some(guardians));
    assert_eq!(client.get_threshold(&wallet), Some(2));
}

#[test]
fn test_owner_may_be_a_guardian() {
    let env = Env::default();
    let client = setup(&env);
    let wallet = Address::generate(&env);
    let other = Address::generate(&env);
    let guardians = Vec::from_array(&env, [wallet.clone(), other]);

    client.configure_guardians(&wallet, &wallet, &guardians, &2);
    assert!(client.is_guardian(&wallet, &wallet));
    assert!(client.is_owner(&wallet, &wallet));
}

#[test]
fn test_wallets_are_configured_independently() {
    let env = Env::default();
    let client = setup(&env);
    let (wallet_a, guardians_a) = configured_wallet(&env, &client, 2, 1);
    let (wallet_b, guardians_b) = configured_wallet(&env, &client, 3, 3);

    assert_eq!(client.get_threshold(&wallet_a), Some(1));
    assert_eq!(client.get_threshold(&wallet_b), Some(3));
    assert!(!client.is_guardian(&wallet_b, &guardians_a.get(0).unwrap()));
    assert!(!client.is_guardian(&wallet_a, &guardians_b.get(0).unwrap()));
}
