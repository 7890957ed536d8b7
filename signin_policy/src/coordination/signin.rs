use crate::classify::{ClassifiedError, ErrorCategory, RawAuthError, classify_with_config};
use crate::config::{SIGNIN_CONFIG, SignInConfig};
use crate::provider::{AuthProvider, AuthResult, Credentials, OnboardingStore};
use crate::routing::{SignInMethod, resolve_destination};

use super::errors::CoordinationError;
use super::in_flight::InFlightLatch;
use super::types::SignInOutcome;

/// Drives a sign-in action from provider call to routing decision.
///
/// Owns the collaborators and the busy flag for one sign-in screen. Provider
/// failures come back as [`SignInOutcome::Rejected`]; only a concurrent action or a
/// collaborator breaking its contract is an `Err`.
pub struct SignInCoordinator<P, S> {
    provider: P,
    onboarding: S,
    config: SignInConfig,
    in_flight: InFlightLatch,
}

impl<P, S> SignInCoordinator<P, S>
where
    P: AuthProvider,
    S: OnboardingStore,
{
    /// Create a coordinator using the process-wide configuration
    pub fn new(provider: P, onboarding: S) -> Self {
        Self::with_config(provider, onboarding, SIGNIN_CONFIG.clone())
    }

    pub fn with_config(provider: P, onboarding: S, config: SignInConfig) -> Self {
        Self {
            provider,
            onboarding,
            config,
            in_flight: InFlightLatch::default(),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn onboarding(&self) -> &S {
        &self.onboarding
    }

    pub fn config(&self) -> &SignInConfig {
        &self.config
    }

    /// Whether a sign-in action is outstanding; drives the UI's disabled state.
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_busy()
    }

    /// Sign in with an identifier and password.
    ///
    /// # Flow
    /// 1. Reject malformed input without contacting the provider
    /// 2. Authenticate with the provider
    /// 3. Re-fetch the account for a fresh verification flag
    /// 4. Resolve the destination (onboarding is looked up only for verified accounts)
    ///
    /// # Errors
    /// * `CoordinationError::AlreadyInFlight` - another action is outstanding
    /// * `CoordinationError::ContractViolation` - the provider returned an unusable account
    pub async fn sign_in_with_password(
        &self,
        credentials: &Credentials,
    ) -> Result<SignInOutcome, CoordinationError> {
        let _guard = self
            .in_flight
            .try_acquire()
            .ok_or_else(|| CoordinationError::AlreadyInFlight.log())?;

        if let Some(rejection) = self.validate_credentials(credentials) {
            tracing::debug!(
                category = %rejection.category,
                "Credentials rejected before submission"
            );
            return Ok(SignInOutcome::Rejected(rejection));
        }

        let identifier = credentials.identifier.trim();
        tracing::debug!(identifier = %identifier, "Submitting password sign-in");

        let auth = match self
            .provider
            .authenticate(identifier, &credentials.secret)
            .await
        {
            Ok(auth) => auth,
            Err(e) => return Ok(self.reject(&e, SignInMethod::Password)),
        };

        self.complete(auth, SignInMethod::Password).await
    }

    /// Sign in through the federated identity provider.
    ///
    /// Unless configured otherwise, the provider's verification is trusted and the
    /// account is routed straight to the onboarding check.
    ///
    /// # Errors
    /// Same as [`sign_in_with_password`](Self::sign_in_with_password).
    pub async fn sign_in_federated(&self) -> Result<SignInOutcome, CoordinationError> {
        let _guard = self
            .in_flight
            .try_acquire()
            .ok_or_else(|| CoordinationError::AlreadyInFlight.log())?;

        tracing::debug!("Starting federated sign-in");

        let auth = match self.provider.authenticate_federated().await {
            Ok(auth) => auth,
            Err(e) => return Ok(self.reject(&e, SignInMethod::Federated)),
        };

        self.complete(auth, SignInMethod::Federated).await
    }

    async fn complete(
        &self,
        auth: AuthResult,
        method: SignInMethod,
    ) -> Result<SignInOutcome, CoordinationError> {
        if auth.account_id.trim().is_empty() {
            return Err(CoordinationError::ContractViolation(format!(
                "{method} sign-in succeeded without an account id"
            ))
            .log());
        }

        let trust_provider =
            method == SignInMethod::Federated && self.config.federated_skips_verification;
        let verified = if trust_provider {
            true
        } else {
            match self.refresh(&auth).await? {
                Ok(refreshed) => refreshed.email_verified,
                Err(e) => return Ok(self.reject(&e, method)),
            }
        };

        let destination = resolve_destination(verified, &auth.account_id, &self.onboarding).await;
        tracing::info!(
            account_id = %auth.account_id,
            method = %method,
            destination = %destination,
            "Sign-in completed"
        );
        Ok(SignInOutcome::Navigate(destination))
    }

    /// Re-fetch the account. The outer `Result` carries contract violations, the
    /// inner one provider failures to classify.
    async fn refresh(
        &self,
        auth: &AuthResult,
    ) -> Result<Result<AuthResult, RawAuthError>, CoordinationError> {
        let refreshed = match self.provider.refresh_account_state(&auth.account_id).await {
            Ok(Some(refreshed)) => refreshed,
            Ok(None) => {
                return Err(CoordinationError::ContractViolation(format!(
                    "Account {} vanished between sign-in and refresh",
                    auth.account_id
                ))
                .log());
            }
            Err(e) => return Ok(Err(e)),
        };

        if refreshed.account_id != auth.account_id {
            return Err(CoordinationError::ContractViolation(format!(
                "Refresh for account {} returned account {}",
                auth.account_id, refreshed.account_id
            ))
            .log());
        }

        Ok(Ok(refreshed))
    }

    fn reject(&self, err: &RawAuthError, method: SignInMethod) -> SignInOutcome {
        let classified = classify_with_config(err, &self.config);
        tracing::info!(
            method = %method,
            category = %classified.category,
            "Sign-in rejected by provider"
        );
        SignInOutcome::Rejected(classified)
    }

    fn validate_credentials(&self, credentials: &Credentials) -> Option<ClassifiedError> {
        let identifier = credentials.identifier.trim();
        if identifier.is_empty() || !is_plausible_email(identifier) {
            return Some(ClassifiedError::from_category(
                ErrorCategory::InvalidEmail,
                &self.config,
            ));
        }
        if credentials.secret.is_empty() {
            return Some(ClassifiedError::from_category(
                ErrorCategory::WrongCredentials,
                &self.config,
            ));
        }
        None
    }
}

/// One '@' with a non-empty local part and a dotted domain; the provider does the
/// real validation.
fn is_plausible_email(identifier: &str) -> bool {
    match identifier.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split('.')
                    .filter(|label| !label.is_empty())
                    .count()
                    >= 2
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !identifier.chars().any(char::is_whitespace)
        }
        None => false,
    }
}
