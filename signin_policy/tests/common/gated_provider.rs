use async_trait::async_trait;
use tokio::sync::Notify;

use signin_policy::{AuthProvider, AuthResult, RawAuthError};

/// Provider that parks inside `authenticate` until released, so a test can act
/// while a sign-in is outstanding.
#[derive(Default)]
pub struct GatedProvider {
    pub entered: Notify,
    pub release: Notify,
}

#[async_trait]
impl AuthProvider for GatedProvider {
    async fn authenticate(
        &self,
        identifier: &str,
        _secret: &str,
    ) -> Result<AuthResult, RawAuthError> {
        self.entered.notify_one();
        self.release.notified().await;
        Ok(AuthResult::new(format!("acct_{identifier}"), true))
    }

    async fn authenticate_federated(&self) -> Result<AuthResult, RawAuthError> {
        Err(RawAuthError::with_code("auth/popup-closed-by-user"))
    }

    async fn refresh_account_state(
        &self,
        account_id: &str,
    ) -> Result<Option<AuthResult>, RawAuthError> {
        Ok(Some(AuthResult::new(account_id, true)))
    }
}
