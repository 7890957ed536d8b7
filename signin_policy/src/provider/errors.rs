use thiserror::Error;

/// Errors from the onboarding-status collaborator
#[derive(Clone, Error, Debug, PartialEq, Eq)]
pub enum OnboardingError {
    #[error("Storage error: {0}")]
    Storage(String),
}
