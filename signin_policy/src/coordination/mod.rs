//! Sign-in coordination
//!
//! Ties the authentication provider, the outcome router and the error classifier
//! into the two actions a sign-in screen exposes: password sign-in and federated
//! sign-in. Only one action runs at a time per coordinator.

mod errors;
mod in_flight;
mod signin;
mod types;

pub use errors::CoordinationError;
pub use signin::SignInCoordinator;
pub use types::SignInOutcome;
