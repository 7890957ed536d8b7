//! signin_policy - Sign-in outcome routing and provider error classification
//!
//! This crate holds the decisions a login screen makes around an external
//! authentication provider:
//! - where a successfully signed-in user goes next (email verification,
//!   onboarding, or home)
//! - how a provider failure is turned into a short, user-facing message
//!
//! The provider and the onboarding store are consumed through the traits in
//! [`AuthProvider`] and [`OnboardingStore`]; [`SignInCoordinator`] wires them
//! together.

mod classify;
mod config;
mod coordination;
mod provider;
mod routing;

pub use classify::{ClassifiedError, ErrorCategory, RawAuthError, classify, classify_with_config};

pub use config::{
    DEFAULT_GENERIC_ERROR_MESSAGE, DEFAULT_MESSAGE_THRESHOLD, SIGNIN_CONFIG, SignInConfig,
};

pub use coordination::{CoordinationError, SignInCoordinator, SignInOutcome};

pub use provider::{
    AuthProvider, AuthResult, Credentials, InMemoryAuthProvider, InMemoryOnboardingStore,
    OnboardingError, OnboardingStore,
};

pub use routing::{
    Destination, SignInMethod, lookup_onboarding_best_effort, resolve_destination, route,
    route_federated,
};
