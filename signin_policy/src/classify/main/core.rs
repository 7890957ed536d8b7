use crate::classify::types::{ClassifiedError, ErrorCategory, RawAuthError};
use crate::config::{SIGNIN_CONFIG, SignInConfig};

use super::codes::{CodeRule, lookup_code};
use super::phrases::match_phrase;
use super::utils::{extract_embedded_code, remove_embedded_code, strip_provider_prefix};

/// Map a provider error to a user-facing category and message.
///
/// Uses the process-wide configuration. See [`classify_with_config`].
pub fn classify(err: &RawAuthError) -> ClassifiedError {
    classify_with_config(err, &SIGNIN_CONFIG)
}

/// Map a provider error to a user-facing category and message.
///
/// Resolution order:
/// 1. the structured `code`, looked up in the code table
/// 2. a code embedded in the message as "(auth/...)"
/// 3. the message (provider prefix stripped) against the ordered phrase table
/// 4. the stripped message verbatim if it is shorter than the configured threshold
/// 5. `Unknown` with the generic message
///
/// Never fails and always returns a non-empty `display_message`.
pub fn classify_with_config(err: &RawAuthError, config: &SignInConfig) -> ClassifiedError {
    let message = err
        .message
        .as_deref()
        .map(strip_provider_prefix)
        .map(str::trim)
        .filter(|m| !m.is_empty());

    if let Some(rule) = err.code.as_deref().and_then(lookup_code) {
        return from_rule(rule, config, "code");
    }

    let embedded_code = message.and_then(extract_embedded_code);
    if let Some(rule) = embedded_code.and_then(lookup_code) {
        return from_rule(rule, config, "embedded code");
    }

    // Phrase matching must not see the vendor code text ("invalid-api-key"
    // would otherwise hit the bare "invalid" rule).
    let prose = match (message, embedded_code) {
        (Some(m), Some(_)) => Some(remove_embedded_code(m)),
        (m, None) => m.map(str::to_string),
        (None, Some(_)) => None,
    };
    if let Some(category) = prose.as_deref().and_then(match_phrase) {
        tracing::debug!(category = %category, "Classified provider error by message");
        return ClassifiedError::from_category(category, config);
    }

    // Messages carrying an embedded vendor code are provider-formatted, not
    // user-presentable, even when short.
    match message {
        Some(m) if embedded_code.is_none() && m.chars().count() < config.message_threshold => {
            tracing::debug!("Surfacing unrecognized provider message verbatim");
            ClassifiedError::new(ErrorCategory::Unknown, m)
        }
        _ => {
            tracing::debug!(
                code = ?err.code,
                "Unrecognized provider error, using generic message"
            );
            ClassifiedError::new(ErrorCategory::Unknown, config.generic_message())
        }
    }
}

fn from_rule(rule: &CodeRule, config: &SignInConfig, source: &str) -> ClassifiedError {
    tracing::debug!(
        category = %rule.category,
        code = rule.code,
        "Classified provider error by {}",
        source
    );
    match rule.message {
        Some(message) => ClassifiedError::new(rule.category, message),
        None => ClassifiedError::from_category(rule.category, config),
    }
}
