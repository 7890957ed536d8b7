pub mod fixtures;
pub mod gated_provider;

pub use fixtures::*;
pub use gated_provider::GatedProvider;

use std::sync::Once;

/// Load `.env_test` (falling back to `.env`) once per test binary
pub fn init_test_environment() {
    static ENV_INIT: Once = Once::new();
    ENV_INIT.call_once(|| {
        if dotenvy::from_filename(".env_test").is_err() {
            dotenvy::dotenv().ok();
        }
    });
}
