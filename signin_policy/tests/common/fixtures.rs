use signin_policy::{
    InMemoryAuthProvider, InMemoryOnboardingStore, SignInConfig, SignInCoordinator,
};

/// Test account fixtures for sign-in flows
pub struct TestAccounts;

impl TestAccounts {
    /// Verified account that finished onboarding
    pub fn returning_user() -> TestAccount {
        TestAccount {
            identifier: "returning@example.com",
            secret: "correct horse",
            account_id: "acct_returning",
            email_verified: true,
            onboarded: true,
        }
    }

    /// Verified account that never finished onboarding
    pub fn new_user() -> TestAccount {
        TestAccount {
            identifier: "new@example.com",
            secret: "battery staple",
            account_id: "acct_new",
            email_verified: true,
            onboarded: false,
        }
    }

    /// Account whose email link was never clicked
    pub fn unverified_user() -> TestAccount {
        TestAccount {
            identifier: "unverified@example.com",
            secret: "s3cret-pass",
            account_id: "acct_unverified",
            email_verified: false,
            onboarded: true,
        }
    }
}

pub struct TestAccount {
    pub identifier: &'static str,
    pub secret: &'static str,
    pub account_id: &'static str,
    pub email_verified: bool,
    pub onboarded: bool,
}

pub type MemoryCoordinator = SignInCoordinator<InMemoryAuthProvider, InMemoryOnboardingStore>;

/// Coordinator seeded with the given accounts and default configuration
pub async fn seeded_coordinator(accounts: &[TestAccount]) -> MemoryCoordinator {
    let provider = InMemoryAuthProvider::new();
    let onboarding = InMemoryOnboardingStore::new();

    for account in accounts {
        provider
            .add_account(
                account.identifier,
                account.secret,
                account.account_id,
                account.email_verified,
            )
            .await;
        if account.onboarded {
            onboarding.mark_onboarded(account.account_id).await;
        }
    }

    SignInCoordinator::with_config(provider, onboarding, SignInConfig::default())
}
