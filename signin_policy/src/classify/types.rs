use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

use crate::config::SignInConfig;

/// The fixed set of user-facing failure categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    WrongCredentials,
    EmailUnverified,
    EmailInUse,
    WeakPassword,
    InvalidEmail,
    AccountDisabled,
    RateLimited,
    NetworkError,
    Unknown,
}

impl ErrorCategory {
    /// Message shown for this category when the provider supplies nothing better.
    ///
    /// `Unknown` has no message of its own; the configured generic message is used.
    pub fn default_message(self) -> Option<&'static str> {
        match self {
            Self::WrongCredentials => Some("Wrong email or password"),
            Self::EmailUnverified => Some("Please verify your email"),
            Self::EmailInUse => Some("Email already in use"),
            Self::WeakPassword => Some("Password is too weak"),
            Self::InvalidEmail => Some("Invalid email address"),
            Self::AccountDisabled => Some("Account disabled"),
            Self::RateLimited => Some("Too many attempts, try later"),
            Self::NetworkError => Some("Network error, check connection"),
            Self::Unknown => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::WrongCredentials => "wrong_credentials",
            Self::EmailUnverified => "email_unverified",
            Self::EmailInUse => "email_in_use",
            Self::WeakPassword => "weak_password",
            Self::InvalidEmail => "invalid_email",
            Self::AccountDisabled => "account_disabled",
            Self::RateLimited => "rate_limited",
            Self::NetworkError => "network_error",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A provider failure normalized for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedError {
    pub category: ErrorCategory,
    pub display_message: String,
}

impl ClassifiedError {
    pub fn new(category: ErrorCategory, display_message: impl Into<String>) -> Self {
        Self {
            category,
            display_message: display_message.into(),
        }
    }

    /// The category's own message, or the configured generic one for `Unknown`.
    pub(crate) fn from_category(category: ErrorCategory, config: &SignInConfig) -> Self {
        let message = category
            .default_message()
            .unwrap_or_else(|| config.generic_message());
        Self::new(category, message)
    }
}

impl fmt::Display for ClassifiedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_message)
    }
}

/// Error thrown by an authentication provider.
///
/// The shape belongs to the provider: some expose a stable `code`, others only a
/// free-text `message`, and either may be missing.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[error("Auth provider error (code: {code:?}, message: {message:?})")]
pub struct RawAuthError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RawAuthError {
    pub fn with_code(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: None,
        }
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: Some(message.into()),
        }
    }

    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: Some(message.into()),
        }
    }

    /// Build a `RawAuthError` from a provider's JSON error body.
    ///
    /// Accepts `{code, message}`, `{error_code, msg}` and the OAuth2 style
    /// `{error, error_description}`. Non-string fields (such as a numeric HTTP
    /// status stored under `code`) are ignored.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(body)?;
        Ok(Self::from_value(&value))
    }

    pub fn from_value(value: &Value) -> Self {
        let pick = |keys: &[&str]| {
            keys.iter()
                .filter_map(|key| value.get(*key).and_then(Value::as_str))
                .map(str::trim)
                .find(|s| !s.is_empty())
                .map(str::to_string)
        };

        Self {
            code: pick(&["error_code", "code", "error"]),
            message: pick(&["message", "msg", "error_description"]),
        }
    }
}
