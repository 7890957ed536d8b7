use std::sync::Arc;

use signin_policy::{
    AuthResult, CoordinationError, Credentials, Destination, ErrorCategory,
    InMemoryOnboardingStore, RawAuthError, SignInConfig, SignInCoordinator, SignInOutcome,
};

use crate::common::{GatedProvider, TestAccounts, init_test_environment, seeded_coordinator};

/// Test sign-in flows end to end
///
/// These tests verify:
/// - routing precedence for password sign-in (verification, onboarding, home)
/// - the federated path and its verification policy
/// - recovery from onboarding lookup failures
/// - the single in-flight action rule

/// Correct credentials on an unverified account land on email verification and
/// never touch the onboarding store.
#[tokio::test]
async fn test_unverified_login_goes_to_email_verification() {
    init_test_environment();
    let account = TestAccounts::unverified_user();
    let coordinator = seeded_coordinator(&[TestAccounts::unverified_user()]).await;

    let outcome = coordinator
        .sign_in_with_password(&Credentials::new(account.identifier, account.secret))
        .await
        .expect("sign-in should not error");

    assert_eq!(
        outcome,
        SignInOutcome::Navigate(Destination::EmailVerification)
    );
    assert_eq!(coordinator.provider().refresh_count(), 1);
    assert_eq!(coordinator.onboarding().lookup_count(), 0);
    assert!(!coordinator.is_busy());
}

#[tokio::test]
async fn test_returning_user_goes_home() {
    init_test_environment();
    let account = TestAccounts::returning_user();
    let coordinator =
        seeded_coordinator(&[TestAccounts::returning_user(), TestAccounts::new_user()]).await;

    let outcome = coordinator
        .sign_in_with_password(&Credentials::new(account.identifier, account.secret))
        .await
        .expect("sign-in should not error");

    assert_eq!(outcome.destination(), Some(Destination::Home));
    assert_eq!(coordinator.onboarding().lookup_count(), 1);
}

#[tokio::test]
async fn test_new_user_goes_to_onboarding() {
    init_test_environment();
    let account = TestAccounts::new_user();
    let coordinator = seeded_coordinator(&[TestAccounts::new_user()]).await;

    let outcome = coordinator
        .sign_in_with_password(&Credentials::new(account.identifier, account.secret))
        .await
        .expect("sign-in should not error");

    assert_eq!(outcome.destination(), Some(Destination::Onboarding));
}

/// Verify the email between two attempts: the second attempt must see the fresh
/// flag through the refresh call.
#[tokio::test]
async fn test_verification_picked_up_on_next_login() {
    init_test_environment();
    let account = TestAccounts::unverified_user();
    let coordinator = seeded_coordinator(&[TestAccounts::unverified_user()]).await;
    let credentials = Credentials::new(account.identifier, account.secret);

    let first = coordinator.sign_in_with_password(&credentials).await.unwrap();
    assert_eq!(first.destination(), Some(Destination::EmailVerification));

    coordinator
        .provider()
        .set_email_verified(account.account_id, true)
        .await;

    let second = coordinator.sign_in_with_password(&credentials).await.unwrap();
    assert_eq!(second.destination(), Some(Destination::Home));
}

#[tokio::test]
async fn test_provider_failures_surface_short_messages() {
    init_test_environment();
    let account = TestAccounts::returning_user();
    let coordinator = seeded_coordinator(&[TestAccounts::returning_user()]).await;

    let cases = [
        (
            Credentials::new("nobody@example.com", "whatever"),
            ErrorCategory::WrongCredentials,
        ),
        (
            Credentials::new(account.identifier, "wrong"),
            ErrorCategory::WrongCredentials,
        ),
        (
            Credentials::new("not-an-email", "whatever"),
            ErrorCategory::InvalidEmail,
        ),
    ];

    for (credentials, expected) in cases {
        let outcome = coordinator
            .sign_in_with_password(&credentials)
            .await
            .unwrap();
        let rejection = outcome.rejection().expect("expected a rejection");
        assert_eq!(rejection.category, expected, "{credentials:?}");
        assert!(!rejection.display_message.is_empty());
        assert!(!rejection.display_message.contains("auth/"));
        assert!(!coordinator.is_busy());
    }

    coordinator.provider().disable_account(account.identifier).await;
    let outcome = coordinator
        .sign_in_with_password(&Credentials::new(account.identifier, account.secret))
        .await
        .unwrap();
    assert_eq!(
        outcome.rejection().map(|e| e.category),
        Some(ErrorCategory::AccountDisabled)
    );
}

#[tokio::test]
async fn test_rate_limited_then_retry_succeeds() {
    init_test_environment();
    let account = TestAccounts::returning_user();
    let coordinator = seeded_coordinator(&[TestAccounts::returning_user()]).await;
    let credentials = Credentials::new(account.identifier, account.secret);

    coordinator
        .provider()
        .fail_next(RawAuthError::with_message("Too many requests, try later"))
        .await;

    let first = coordinator.sign_in_with_password(&credentials).await.unwrap();
    assert_eq!(
        first.rejection().map(|e| e.category),
        Some(ErrorCategory::RateLimited)
    );

    let second = coordinator.sign_in_with_password(&credentials).await.unwrap();
    assert_eq!(second.destination(), Some(Destination::Home));
}

#[tokio::test]
async fn test_onboarding_lookup_failure_shows_onboarding_again() {
    init_test_environment();
    let account = TestAccounts::returning_user();
    let coordinator = seeded_coordinator(&[TestAccounts::returning_user()]).await;
    coordinator.onboarding().set_failing(true);

    let outcome = coordinator
        .sign_in_with_password(&Credentials::new(account.identifier, account.secret))
        .await
        .expect("lookup failure must not propagate");

    assert_eq!(outcome.destination(), Some(Destination::Onboarding));
    assert!(!coordinator.is_busy());
}

#[tokio::test]
async fn test_federated_sign_in_routes_past_verification() {
    init_test_environment();
    let coordinator = seeded_coordinator(&[]).await;
    coordinator
        .provider()
        .set_federated_outcome(Ok(AuthResult::new("acct_federated", false)))
        .await;

    let outcome = coordinator.sign_in_federated().await.unwrap();
    assert_eq!(outcome.destination(), Some(Destination::Onboarding));

    coordinator.onboarding().mark_onboarded("acct_federated").await;
    let outcome = coordinator.sign_in_federated().await.unwrap();
    assert_eq!(outcome.destination(), Some(Destination::Home));
}

#[tokio::test]
async fn test_federated_provider_error_is_classified() {
    init_test_environment();
    let coordinator = seeded_coordinator(&[]).await;
    coordinator
        .provider()
        .set_federated_outcome(Err(RawAuthError::new(
            "auth/network-request-failed",
            "Firebase: Error (auth/network-request-failed).",
        )))
        .await;

    let outcome = coordinator.sign_in_federated().await.unwrap();
    assert_eq!(
        outcome.rejection().map(|e| e.category),
        Some(ErrorCategory::NetworkError)
    );
}

/// A second submission while the first is parked inside the provider is refused,
/// and the flag clears once the first completes.
#[tokio::test]
async fn test_second_submission_refused_while_in_flight() {
    init_test_environment();
    let coordinator = Arc::new(SignInCoordinator::with_config(
        GatedProvider::default(),
        InMemoryOnboardingStore::new(),
        SignInConfig::default(),
    ));

    let first = {
        let coordinator = Arc::clone(&coordinator);
        tokio::spawn(async move {
            coordinator
                .sign_in_with_password(&Credentials::new("first@example.com", "pw"))
                .await
        })
    };

    coordinator.provider().entered.notified().await;
    assert!(coordinator.is_busy());

    let second = coordinator
        .sign_in_with_password(&Credentials::new("second@example.com", "pw"))
        .await;
    assert_eq!(second, Err(CoordinationError::AlreadyInFlight));

    coordinator.provider().release.notify_one();
    let first = first.await.expect("task panicked").expect("sign-in errored");
    assert_eq!(first.destination(), Some(Destination::Onboarding));
    assert!(!coordinator.is_busy());
}
