//! Error and Edge Case Tests
//!
//! These tests verify:
//! - Unauthorized access attempts
//! - Invalid input handling
//! - Replay-like behavior (double settle, double withdraw, double claim)
//! - Boundary values (0, exact cap, window edges)
//! - Failed transfers leaving no trace

use crate::harness::{TestHarness, DEFAULT_DURATION, DEFAULT_HARD_CAP, ONE_TOKEN};
use launchpad::LaunchpadError;
use shared_utils::RATE_SCALE;
use soroban_sdk::{testutils::Address as _, Address};

// ============================================================================
// Initialization
// ============================================================================

#[test]
fn test_error_operations_before_initialize() {
    let harness = TestHarness::uninitialized();
    let client = harness.launchpad();
    let now = harness.current_timestamp();

    let result = client.try_create_presale(
        &harness.accounts.creator,
        &harness.contracts.sale_token,
        &harness.contracts.payment_token,
        &RATE_SCALE,
        &now,
        &(now + DEFAULT_DURATION),
        &DEFAULT_HARD_CAP,
    );
    assert_eq!(result, Err(Ok(LaunchpadError::NotInitialized)));
    assert_eq!(
        client.try_set_paused(&harness.accounts.admin, &true),
        Err(Ok(LaunchpadError::NotInitialized))
    );
}

#[test]
fn test_error_reinitialize_by_attacker() {
    let harness = TestHarness::new();
    let client = harness.launchpad();

    assert_eq!(
        client.try_initialize(&harness.accounts.attacker),
        Err(Ok(LaunchpadError::AlreadyInitialized))
    );
    assert_eq!(client.get_admin(), harness.accounts.admin);
}

// ============================================================================
// Unauthorized Access Tests
// ============================================================================

#[test]
fn test_error_attacker_cannot_pause() {
    let harness = TestHarness::new();
    let client = harness.launchpad();

    assert_eq!(
        client.try_set_paused(&harness.accounts.attacker, &true),
        Err(Ok(LaunchpadError::Unauthorized))
    );
    assert!(!client.is_paused());
}

#[test]
fn test_error_attacker_cannot_force_end() {
    let harness = TestHarness::new();
    let client = harness.launchpad();
    let sale = &harness.contracts.sale_token;
    harness.create_default_presale();

    assert_eq!(
        client.try_end_presale(&harness.accounts.attacker, sale),
        Err(Ok(LaunchpadError::PresaleStillActive))
    );
    // The creator has no force-end right either
    assert_eq!(
        client.try_end_presale(&harness.accounts.creator, sale),
        Err(Ok(LaunchpadError::PresaleStillActive))
    );
}

#[test]
fn test_error_attacker_cannot_withdraw_raise() {
    let harness = TestHarness::new();
    let client = harness.launchpad();
    let sale = &harness.contracts.sale_token;
    harness.create_default_presale();
    client.buy_token(&harness.accounts.user1, sale, &(100 * ONE_TOKEN));
    harness.close_presale(sale);

    let attacker_before = harness.payment_balance(&harness.accounts.attacker);
    assert_eq!(
        client.try_withdraw_funds(&harness.accounts.attacker, sale),
        Err(Ok(LaunchpadError::Unauthorized))
    );
    assert_eq!(
        harness.payment_balance(&harness.accounts.attacker),
        attacker_before
    );
    assert_eq!(harness.escrowed_payment(), 100 * ONE_TOKEN);
}

#[test]
fn test_error_attacker_cannot_take_unsold() {
    let harness = TestHarness::new();
    let client = harness.launchpad();
    let sale = &harness.contracts.sale_token;
    harness.create_default_presale();
    client.fund_presale(&harness.accounts.creator, sale, &(1_000 * ONE_TOKEN));
    harness.close_presale(sale);

    assert_eq!(
        client.try_withdraw_unsold(&harness.accounts.attacker, sale),
        Err(Ok(LaunchpadError::Unauthorized))
    );
    assert_eq!(harness.sale_balance(&harness.accounts.attacker), 0);
}

#[test]
fn test_error_attacker_cannot_claim_someone_elses_allocation() {
    let harness = TestHarness::new();
    let client = harness.launchpad();
    let sale = &harness.contracts.sale_token;
    harness.create_default_presale();
    client.fund_presale(&harness.accounts.creator, sale, &(1_000 * ONE_TOKEN));
    client.buy_token(&harness.accounts.user1, sale, &ONE_TOKEN);
    harness.close_presale(sale);

    assert_eq!(
        client.try_claim_tokens(&harness.accounts.attacker, sale),
        Err(Ok(LaunchpadError::NothingToClaim))
    );
    assert_eq!(client.claim_tokens(&harness.accounts.user1, sale), 10 * ONE_TOKEN);
}

// ============================================================================
// Invalid Input Tests
// ============================================================================

#[test]
fn test_error_invalid_presale_parameters() {
    let harness = TestHarness::new();
    let client = harness.launchpad();
    let now = harness.current_timestamp();
    let creator = &harness.accounts.creator;
    let sale = &harness.contracts.sale_token;
    let payment = &harness.contracts.payment_token;

    let cases: [(i128, u64, u64, i128); 5] = [
        (0, now, now + DEFAULT_DURATION, DEFAULT_HARD_CAP),
        (-RATE_SCALE, now, now + DEFAULT_DURATION, DEFAULT_HARD_CAP),
        (RATE_SCALE, now, now + DEFAULT_DURATION, 0),
        (RATE_SCALE, now + 10, now + 5, DEFAULT_HARD_CAP),
        (RATE_SCALE, now - 100, now, DEFAULT_HARD_CAP),
    ];
    for (rate, start, end, cap) in cases {
        assert_eq!(
            client.try_create_presale(creator, sale, payment, &rate, &start, &end, &cap),
            Err(Ok(LaunchpadError::InvalidParameters))
        );
    }
    assert_eq!(client.get_presale_count(), 0);
}

#[test]
fn test_error_unknown_presale() {
    let harness = TestHarness::new();
    let client = harness.launchpad();
    let ghost = Address::generate(&harness.env);
    let user = &harness.accounts.user1;
    let not_found = LaunchpadError::PresaleNotFound;

    assert_eq!(client.try_get_presale(&ghost), Err(Ok(not_found)));
    assert_eq!(client.try_get_presale_status(&ghost), Err(Ok(not_found)));
    assert_eq!(client.try_buy_token(user, &ghost, &ONE_TOKEN), Err(Ok(not_found)));
    assert_eq!(client.try_end_presale(user, &ghost), Err(Ok(not_found)));
    assert_eq!(client.try_withdraw_funds(user, &ghost), Err(Ok(not_found)));
    assert_eq!(client.try_claim_tokens(user, &ghost), Err(Ok(not_found)));
    assert_eq!(
        client.try_fund_presale(user, &ghost, &ONE_TOKEN),
        Err(Ok(not_found))
    );
    assert_eq!(client.try_withdraw_unsold(user, &ghost), Err(Ok(not_found)));

    // Contributor views default to empty
    assert_eq!(client.get_contribution(&ghost, user), 0);
    assert_eq!(client.get_allocation(&ghost, user), 0);
    assert_eq!(client.get_contributor_count(&ghost), 0);
    assert_eq!(client.get_contributors(&ghost, &0, &10).len(), 0);
}

// ============================================================================
// Replay-like Behavior
// ============================================================================

#[test]
fn test_error_double_settlement_and_withdrawal() {
    let harness = TestHarness::new();
    let client = harness.launchpad();
    let sale = &harness.contracts.sale_token;
    let creator = &harness.accounts.creator;
    harness.create_default_presale();
    client.buy_token(&harness.accounts.user1, sale, &(5 * ONE_TOKEN));
    harness.close_presale(sale);

    assert_eq!(
        client.try_end_presale(&harness.accounts.admin, sale),
        Err(Ok(LaunchpadError::AlreadySettled))
    );

    client.withdraw_funds(creator, sale);
    harness.advance_time(60);
    assert_eq!(
        client.try_withdraw_funds(creator, sale),
        Err(Ok(LaunchpadError::AlreadyWithdrawn))
    );
    assert_eq!(harness.payment_balance(creator), 5 * ONE_TOKEN);
}

#[test]
fn test_error_closed_presale_rejects_buys() {
    let harness = TestHarness::new();
    let client = harness.launchpad();
    let sale = &harness.contracts.sale_token;
    harness.create_default_presale();
    harness.close_presale(sale);

    assert_eq!(
        client.try_buy_token(&harness.accounts.user1, sale, &ONE_TOKEN),
        Err(Ok(LaunchpadError::PresaleClosed))
    );
}

// ============================================================================
// Boundary Value Tests
// ============================================================================

#[test]
fn test_error_window_edges() {
    let harness = TestHarness::new();
    let client = harness.launchpad();
    let sale = &harness.contracts.sale_token;
    let user = &harness.accounts.user1;
    let start = harness.current_timestamp() + 100;

    client.create_presale(
        &harness.accounts.creator,
        sale,
        &harness.contracts.payment_token,
        &RATE_SCALE,
        &start,
        &(start + DEFAULT_DURATION),
        &DEFAULT_HARD_CAP,
    );

    harness.set_timestamp(start - 1);
    assert_eq!(
        client.try_buy_token(user, sale, &ONE_TOKEN),
        Err(Ok(LaunchpadError::OutsideSaleWindow))
    );

    harness.set_timestamp(start);
    client.buy_token(user, sale, &ONE_TOKEN);

    harness.set_timestamp(start + DEFAULT_DURATION);
    assert_eq!(
        client.try_buy_token(user, sale, &ONE_TOKEN),
        Err(Ok(LaunchpadError::OutsideSaleWindow))
    );
    assert_eq!(client.get_presale(sale).total_raised, ONE_TOKEN);
}

#[test]
fn test_error_hard_cap_boundary() {
    let harness = TestHarness::new();
    let client = harness.launchpad();
    let sale = &harness.contracts.sale_token;
    harness.create_default_presale();

    client.buy_token(&harness.accounts.user1, sale, &(DEFAULT_HARD_CAP - 1));
    assert_eq!(
        client.try_buy_token(&harness.accounts.user2, sale, &2),
        Err(Ok(LaunchpadError::HardCapExceeded))
    );
    client.buy_token(&harness.accounts.user2, sale, &1);

    assert_eq!(client.get_presale(sale).total_raised, DEFAULT_HARD_CAP);
    assert_eq!(client.get_contributor_count(sale), 2);
}

#[test]
fn test_error_zero_and_negative_amounts() {
    let harness = TestHarness::new();
    let client = harness.launchpad();
    let sale = &harness.contracts.sale_token;
    harness.create_default_presale();

    for amount in [0i128, -1, i128::MIN] {
        assert_eq!(
            client.try_buy_token(&harness.accounts.user1, sale, &amount),
            Err(Ok(LaunchpadError::InvalidAmount))
        );
    }
    assert_eq!(
        client.try_fund_presale(&harness.accounts.creator, sale, &0),
        Err(Ok(LaunchpadError::InvalidAmount))
    );
}

#[test]
fn test_error_page_limits() {
    let harness = TestHarness::new();
    let client = harness.launchpad();
    harness.create_default_presale();

    assert_eq!(
        client.try_get_presales(&0, &0),
        Err(Ok(LaunchpadError::InvalidParameters))
    );
    assert_eq!(client.get_presales(&0, &100).len(), 1);
    assert_eq!(client.get_presales(&u32::MAX, &1).len(), 0);
}

// ============================================================================
// Failed Transfer Tests
// ============================================================================

#[test]
fn test_error_insufficient_balance_leaves_no_trace() {
    let harness = TestHarness::new();
    let client = harness.launchpad();
    let sale = &harness.contracts.sale_token;
    harness.create_default_presale();
    let poor = harness.new_buyer(ONE_TOKEN - 1);

    assert_eq!(
        client.try_buy_token(&poor, sale, &ONE_TOKEN),
        Err(Ok(LaunchpadError::TransferFailed))
    );

    let presale = client.get_presale(sale);
    assert_eq!(presale.total_raised, 0);
    assert_eq!(presale.total_allocated, 0);
    assert_eq!(client.get_contribution(sale, &poor), 0);
    assert_eq!(client.get_contributor_count(sale), 0);
    assert_eq!(harness.payment_balance(&poor), ONE_TOKEN - 1);
    assert_eq!(harness.escrowed_payment(), 0);

    // Retrying with an affordable amount succeeds
    client.buy_token(&poor, sale, &(ONE_TOKEN - 1));
    assert_eq!(client.get_presale(sale).total_raised, ONE_TOKEN - 1);
}

#[test]
fn test_error_fund_beyond_creator_balance() {
    let harness = TestHarness::new();
    let client = harness.launchpad();
    let sale = &harness.contracts.sale_token;
    let creator = &harness.accounts.creator;
    harness.create_default_presale();

    let held = harness.sale_balance(creator);
    assert_eq!(
        client.try_fund_presale(creator, sale, &(held + 1)),
        Err(Ok(LaunchpadError::TransferFailed))
    );
    assert_eq!(client.get_presale(sale).sale_tokens_funded, 0);
    assert_eq!(harness.sale_balance(creator), held);
}

// ============================================================================
// Pause Tests
// ============================================================================

#[test]
fn test_error_paused_launchpad() {
    let harness = TestHarness::new();
    let client = harness.launchpad();
    let sale = &harness.contracts.sale_token;
    let admin = &harness.accounts.admin;
    harness.create_default_presale();
    client.buy_token(&harness.accounts.user1, sale, &ONE_TOKEN);

    client.set_paused(admin, &true);
    assert_eq!(
        client.try_buy_token(&harness.accounts.user1, sale, &ONE_TOKEN),
        Err(Ok(LaunchpadError::LaunchpadPaused))
    );

    // Exits stay open while paused
    harness.close_presale(sale);
    client.withdraw_funds(&harness.accounts.creator, sale);
    assert_eq!(harness.payment_balance(&harness.accounts.creator), ONE_TOKEN);

    client.set_paused(admin, &false);
    assert!(!client.is_paused());
}
