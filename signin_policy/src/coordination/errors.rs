//! Error types for sign-in coordination

use thiserror::Error;

/// Errors that end a sign-in action without a routable or displayable outcome.
///
/// Provider failures are not errors at this level; they come back as
/// [`SignInOutcome::Rejected`](super::SignInOutcome::Rejected).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoordinationError {
    /// Another sign-in action is still outstanding
    #[error("A sign-in request is already in flight")]
    AlreadyInFlight,

    /// A collaborator returned something its contract rules out
    #[error("Contract violation: {0}")]
    ContractViolation(String),
}

impl CoordinationError {
    /// Log the error and return self
    ///
    /// This method logs the error with appropriate context and returns self,
    /// allowing for method chaining and explicit logging when needed.
    pub fn log(self) -> Self {
        match &self {
            Self::AlreadyInFlight => tracing::debug!("Sign-in request already in flight"),
            Self::ContractViolation(msg) => tracing::error!("Contract violation: {}", msg),
        }
        self
    }
}
