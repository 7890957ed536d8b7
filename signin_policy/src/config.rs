//! Central configuration for the signin_policy crate

use std::env;
use std::sync::LazyLock;

/// Default cutoff below which an unrecognized provider message is shown verbatim.
pub const DEFAULT_MESSAGE_THRESHOLD: usize = 30;

/// Default message shown when nothing about a provider error is presentable.
pub const DEFAULT_GENERIC_ERROR_MESSAGE: &str = "error occurred";

/// Settings that shape the classifier fallback and the federated routing policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInConfig {
    /// Messages with fewer characters than this are surfaced verbatim when unrecognized
    pub message_threshold: usize,
    /// Message used when a provider error cannot be shown to the user
    pub generic_message: String,
    /// Whether federated sign-in treats the provider-verified flag as always true
    pub federated_skips_verification: bool,
}

impl Default for SignInConfig {
    fn default() -> Self {
        Self {
            message_threshold: DEFAULT_MESSAGE_THRESHOLD,
            generic_message: DEFAULT_GENERIC_ERROR_MESSAGE.to_string(),
            federated_skips_verification: true,
        }
    }
}

impl SignInConfig {
    /// Read the configuration from environment variables, falling back to defaults.
    ///
    /// - `SIGNIN_MESSAGE_THRESHOLD`: positive integer (default 30)
    /// - `SIGNIN_GENERIC_ERROR_MESSAGE`: non-empty string (default "error occurred")
    /// - `SIGNIN_FEDERATED_SKIPS_VERIFICATION`: true/false (default true)
    pub fn from_env() -> Self {
        Self {
            message_threshold: parse_threshold(env::var("SIGNIN_MESSAGE_THRESHOLD").ok()),
            generic_message: parse_generic_message(env::var("SIGNIN_GENERIC_ERROR_MESSAGE").ok()),
            federated_skips_verification: parse_bool_flag(
                "SIGNIN_FEDERATED_SKIPS_VERIFICATION",
                env::var("SIGNIN_FEDERATED_SKIPS_VERIFICATION").ok(),
                true,
            ),
        }
    }

    /// The generic message, never empty even if the field was cleared by hand.
    pub(crate) fn generic_message(&self) -> &str {
        let trimmed = self.generic_message.trim();
        if trimmed.is_empty() {
            DEFAULT_GENERIC_ERROR_MESSAGE
        } else {
            trimmed
        }
    }
}

/// Process-wide configuration, read once from the environment
pub static SIGNIN_CONFIG: LazyLock<SignInConfig> = LazyLock::new(SignInConfig::from_env);

fn parse_threshold(value: Option<String>) -> usize {
    match value {
        None => DEFAULT_MESSAGE_THRESHOLD,
        Some(v) => match v.trim().parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => {
                tracing::warn!(
                    "Invalid SIGNIN_MESSAGE_THRESHOLD: {}. Using default {}",
                    v,
                    DEFAULT_MESSAGE_THRESHOLD
                );
                DEFAULT_MESSAGE_THRESHOLD
            }
        },
    }
}

fn parse_generic_message(value: Option<String>) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_GENERIC_ERROR_MESSAGE.to_string())
}

fn parse_bool_flag(name: &str, value: Option<String>, default: bool) -> bool {
    match value {
        None => default,
        Some(v) => match v.to_lowercase().as_str() {
            "true" | "1" | "yes" => true,
            "false" | "0" | "no" => false,
            invalid => {
                tracing::warn!("Invalid {}: {}. Using default '{}'", name, invalid, default);
                default
            }
        },
    }
}
