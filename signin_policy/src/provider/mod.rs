//! Collaborator interfaces
//!
//! The authentication provider and the onboarding store are external systems; this
//! crate only consumes them through the traits defined here. In-memory
//! implementations are provided for tests and demos.

mod errors;
mod memory;
mod types;

pub use errors::OnboardingError;
pub use memory::{InMemoryAuthProvider, InMemoryOnboardingStore};
pub use types::{AuthProvider, AuthResult, Credentials, OnboardingStore};
