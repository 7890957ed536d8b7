//! Sign-in outcome routing
//!
//! Decides which screen follows a successful authentication. The decision itself
//! is pure; the onboarding lookup feeding it is best-effort.

mod core;
mod types;

pub use self::core::{lookup_onboarding_best_effort, resolve_destination, route, route_federated};
pub use types::{Destination, SignInMethod};
