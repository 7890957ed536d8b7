use crate::classify::types::ErrorCategory;

use super::utils::normalize_code;

/// An entry of the structured code table.
///
/// `message` overrides the category's default message when a code carries more
/// specific meaning than its category.
pub(super) struct CodeRule {
    pub(super) code: &'static str,
    pub(super) category: ErrorCategory,
    pub(super) message: Option<&'static str>,
}

const fn rule(code: &'static str, category: ErrorCategory) -> CodeRule {
    CodeRule {
        code,
        category,
        message: None,
    }
}

const fn rule_with_message(
    code: &'static str,
    category: ErrorCategory,
    message: &'static str,
) -> CodeRule {
    CodeRule {
        code,
        category,
        message: Some(message),
    }
}

const VERIFICATION_LINK_MESSAGE: &str = "Verification link is invalid or expired";

/// Normalized provider codes covering both provider families
pub(super) const CODE_RULES: &[CodeRule] = &[
    rule("user not found", ErrorCategory::WrongCredentials),
    rule("wrong password", ErrorCategory::WrongCredentials),
    rule("invalid credential", ErrorCategory::WrongCredentials),
    rule("invalid credentials", ErrorCategory::WrongCredentials),
    rule("invalid login credentials", ErrorCategory::WrongCredentials),
    rule("invalid password", ErrorCategory::WrongCredentials),
    rule("invalid email", ErrorCategory::InvalidEmail),
    rule("email address invalid", ErrorCategory::InvalidEmail),
    rule("missing email", ErrorCategory::InvalidEmail),
    rule("email already in use", ErrorCategory::EmailInUse),
    rule("user already exists", ErrorCategory::EmailInUse),
    rule("email exists", ErrorCategory::EmailInUse),
    rule("weak password", ErrorCategory::WeakPassword),
    rule("user disabled", ErrorCategory::AccountDisabled),
    rule("user banned", ErrorCategory::AccountDisabled),
    rule("network request failed", ErrorCategory::NetworkError),
    rule("network failure", ErrorCategory::NetworkError),
    rule("request timeout", ErrorCategory::NetworkError),
    rule("too many requests", ErrorCategory::RateLimited),
    rule("over request rate limit", ErrorCategory::RateLimited),
    rule("over email send rate limit", ErrorCategory::RateLimited),
    rule("email not verified", ErrorCategory::EmailUnverified),
    rule("email not confirmed", ErrorCategory::EmailUnverified),
    rule("unverified email", ErrorCategory::EmailUnverified),
    rule_with_message(
        "email already verified",
        ErrorCategory::Unknown,
        "Email already verified",
    ),
    rule("internal error", ErrorCategory::Unknown),
    rule("unexpected failure", ErrorCategory::Unknown),
    rule_with_message(
        "invalid action code",
        ErrorCategory::Unknown,
        VERIFICATION_LINK_MESSAGE,
    ),
    rule_with_message(
        "expired action code",
        ErrorCategory::Unknown,
        VERIFICATION_LINK_MESSAGE,
    ),
    rule_with_message("otp expired", ErrorCategory::Unknown, VERIFICATION_LINK_MESSAGE),
];

pub(super) fn lookup_code(code: &str) -> Option<&'static CodeRule> {
    let normalized = normalize_code(code);
    if normalized.is_empty() {
        return None;
    }
    CODE_RULES.iter().find(|rule| rule.code == normalized)
}
