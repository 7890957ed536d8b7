use crate::classify::types::ErrorCategory;

/// Lowercase phrases matched against free-text messages, first match wins.
///
/// Specific phrases must come before the generic ones they contain: "invalid email"
/// before "invalid", "email not confirmed" before anything mentioning email.
pub(super) const PHRASE_RULES: &[(&str, ErrorCategory)] = &[
    ("email not confirmed", ErrorCategory::EmailUnverified),
    ("email not verified", ErrorCategory::EmailUnverified),
    ("verify your email", ErrorCategory::EmailUnverified),
    ("invalid login credentials", ErrorCategory::WrongCredentials),
    ("invalid email", ErrorCategory::InvalidEmail),
    ("email address is invalid", ErrorCategory::InvalidEmail),
    ("badly formatted", ErrorCategory::InvalidEmail),
    ("unable to validate email", ErrorCategory::InvalidEmail),
    ("already registered", ErrorCategory::EmailInUse),
    ("already in use", ErrorCategory::EmailInUse),
    ("already exists", ErrorCategory::EmailInUse),
    ("password should be", ErrorCategory::WeakPassword),
    ("weak password", ErrorCategory::WeakPassword),
    ("password is too weak", ErrorCategory::WeakPassword),
    ("banned", ErrorCategory::AccountDisabled),
    ("disabled", ErrorCategory::AccountDisabled),
    ("too many requests", ErrorCategory::RateLimited),
    ("rate limit", ErrorCategory::RateLimited),
    ("network", ErrorCategory::NetworkError),
    ("failed to fetch", ErrorCategory::NetworkError),
    ("timed out", ErrorCategory::NetworkError),
    ("timeout", ErrorCategory::NetworkError),
    ("user not found", ErrorCategory::WrongCredentials),
    ("no user record", ErrorCategory::WrongCredentials),
    ("wrong password", ErrorCategory::WrongCredentials),
    ("password is invalid", ErrorCategory::WrongCredentials),
    ("invalid", ErrorCategory::WrongCredentials),
];

pub(super) fn match_phrase(message: &str) -> Option<ErrorCategory> {
    let lowered = message.to_lowercase();
    PHRASE_RULES
        .iter()
        .find(|(phrase, _)| lowered.contains(phrase))
        .map(|(_, category)| *category)
}
