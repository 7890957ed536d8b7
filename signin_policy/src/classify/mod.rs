//! Provider error classification
//!
//! Normalizes the errors thrown by authentication providers into a small set of
//! user-facing categories. Providers expose failures differently (stable codes
//! for one family, free text for the other), so both pathways are supported.

mod main;
mod types;

pub use main::{classify, classify_with_config};
pub use types::{ClassifiedError, ErrorCategory, RawAuthError};
