use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::Mutex;

use crate::classify::RawAuthError;

use super::errors::OnboardingError;
use super::types::{AuthProvider, AuthResult, OnboardingStore};

#[derive(Debug, Clone)]
struct StoredAccount {
    account_id: String,
    secret: String,
    email_verified: bool,
    disabled: bool,
}

/// In-memory authentication provider that reports failures the way a
/// code-based provider does ("auth/..." codes with a prefixed message).
#[derive(Debug, Default)]
pub struct InMemoryAuthProvider {
    accounts: Mutex<HashMap<String, StoredAccount>>,
    federated: Mutex<Option<Result<AuthResult, RawAuthError>>>,
    pending_failure: Mutex<Option<RawAuthError>>,
    refresh_calls: AtomicUsize,
}

impl InMemoryAuthProvider {
    pub fn new() -> Self {
        tracing::info!("Creating new in-memory auth provider");
        Self::default()
    }

    /// Register a password account under `identifier`.
    pub async fn add_account(
        &self,
        identifier: &str,
        secret: &str,
        account_id: &str,
        email_verified: bool,
    ) {
        let account = StoredAccount {
            account_id: account_id.to_string(),
            secret: secret.to_string(),
            email_verified,
            disabled: false,
        };
        self.accounts
            .lock()
            .await
            .insert(identifier.to_lowercase(), account);
    }

    /// Flip the verification flag, as clicking the emailed link would.
    pub async fn set_email_verified(&self, account_id: &str, verified: bool) {
        let mut accounts = self.accounts.lock().await;
        for account in accounts.values_mut() {
            if account.account_id == account_id {
                account.email_verified = verified;
            }
        }
    }

    pub async fn disable_account(&self, identifier: &str) {
        if let Some(account) = self.accounts.lock().await.get_mut(&identifier.to_lowercase()) {
            account.disabled = true;
        }
    }

    /// Set what the next federated sign-ins return.
    pub async fn set_federated_outcome(&self, outcome: Result<AuthResult, RawAuthError>) {
        *self.federated.lock().await = Some(outcome);
    }

    /// Make the next `authenticate` call fail with `err` regardless of credentials.
    pub async fn fail_next(&self, err: RawAuthError) {
        *self.pending_failure.lock().await = Some(err);
    }

    pub fn refresh_count(&self) -> usize {
        self.refresh_calls.load(Ordering::SeqCst)
    }

    fn provider_error(code: &str) -> RawAuthError {
        RawAuthError::new(
            format!("auth/{code}"),
            format!("Firebase: Error (auth/{code})."),
        )
    }
}

#[async_trait]
impl AuthProvider for InMemoryAuthProvider {
    async fn authenticate(
        &self,
        identifier: &str,
        secret: &str,
    ) -> Result<AuthResult, RawAuthError> {
        if let Some(err) = self.pending_failure.lock().await.take() {
            return Err(err);
        }

        let accounts = self.accounts.lock().await;
        let account = accounts
            .get(&identifier.to_lowercase())
            .ok_or_else(|| Self::provider_error("user-not-found"))?;

        if account.secret != secret {
            return Err(Self::provider_error("wrong-password"));
        }
        if account.disabled {
            return Err(Self::provider_error("user-disabled"));
        }

        Ok(AuthResult::new(
            account.account_id.clone(),
            account.email_verified,
        ))
    }

    async fn authenticate_federated(&self) -> Result<AuthResult, RawAuthError> {
        match self.federated.lock().await.as_ref() {
            Some(outcome) => outcome.clone(),
            None => Err(Self::provider_error("popup-closed-by-user")),
        }
    }

    async fn refresh_account_state(
        &self,
        account_id: &str,
    ) -> Result<Option<AuthResult>, RawAuthError> {
        self.refresh_calls.fetch_add(1, Ordering::SeqCst);

        let accounts = self.accounts.lock().await;
        let found = accounts
            .values()
            .find(|account| account.account_id == account_id)
            .map(|account| AuthResult::new(account.account_id.clone(), account.email_verified));
        if found.is_some() {
            return Ok(found);
        }
        drop(accounts);

        let federated = match self.federated.lock().await.as_ref() {
            Some(Ok(result)) if result.account_id == account_id => Some(result.clone()),
            _ => None,
        };
        Ok(federated)
    }
}

/// In-memory onboarding store that counts lookups and can be told to fail
#[derive(Debug, Default)]
pub struct InMemoryOnboardingStore {
    onboarded: Mutex<HashSet<String>>,
    failing: AtomicBool,
    lookups: AtomicUsize,
}

impl InMemoryOnboardingStore {
    pub fn new() -> Self {
        tracing::info!("Creating new in-memory onboarding store");
        Self::default()
    }

    pub async fn mark_onboarded(&self, account_id: &str) {
        self.onboarded.lock().await.insert(account_id.to_string());
    }

    /// While set, every lookup fails with a storage error.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OnboardingStore for InMemoryOnboardingStore {
    async fn lookup_onboarding_status(&self, account_id: &str) -> Result<bool, OnboardingError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(OnboardingError::Storage(
                "onboarding store unavailable".to_string(),
            ));
        }
        Ok(self.onboarded.lock().await.contains(account_id))
    }
}
