use serde::{Deserialize, Serialize};
use std::fmt;

/// Screen the user lands on after a successful sign-in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    EmailVerification,
    Onboarding,
    Home,
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::EmailVerification => "email_verification",
            Self::Onboarding => "onboarding",
            Self::Home => "home",
        };
        f.write_str(name)
    }
}

/// How an authentication result was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInMethod {
    Password,
    Federated,
}

impl fmt::Display for SignInMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Password => f.write_str("password"),
            Self::Federated => f.write_str("federated"),
        }
    }
}
