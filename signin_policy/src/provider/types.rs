use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::classify::RawAuthError;

use super::errors::OnboardingError;

/// Result of a successful authentication
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResult {
    pub account_id: String,
    pub email_verified: bool,
}

impl AuthResult {
    pub fn new(account_id: impl Into<String>, email_verified: bool) -> Self {
        Self {
            account_id: account_id.into(),
            email_verified,
        }
    }
}

/// Identifier and secret submitted from the sign-in form
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub identifier: String,
    pub secret: String,
}

impl Credentials {
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
        }
    }
}

// The secret must never reach a log line
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("secret", &"********")
            .finish()
    }
}

/// Authentication provider the sign-in flow talks to.
///
/// Failures are reported as the provider's own [`RawAuthError`]; turning them into
/// something a user can read is the classifier's job.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Sign in with an identifier (email) and password.
    async fn authenticate(&self, identifier: &str, secret: &str)
    -> Result<AuthResult, RawAuthError>;

    /// Sign in through a third-party identity provider.
    async fn authenticate_federated(&self) -> Result<AuthResult, RawAuthError>;

    /// Re-fetch the account to obtain its current verification flag.
    ///
    /// `Ok(None)` after a successful sign-in means the provider broke its contract.
    async fn refresh_account_state(
        &self,
        account_id: &str,
    ) -> Result<Option<AuthResult>, RawAuthError>;
}

/// Read-only view of the profile store's onboarding bookkeeping
#[async_trait]
pub trait OnboardingStore: Send + Sync {
    async fn lookup_onboarding_status(&self, account_id: &str) -> Result<bool, OnboardingError>;
}
