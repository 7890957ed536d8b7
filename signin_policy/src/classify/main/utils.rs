/// Provider-name prefixes that never belong in a user-facing message
const PROVIDER_PREFIXES: &[&str] = &[
    "Firebase:",
    "FirebaseError:",
    "AuthApiError:",
    "AuthRetryableFetchError:",
    "AuthWeakPasswordError:",
    "AuthError:",
    "Error:",
];

/// Strip every recognized provider prefix from the start of `message`.
///
/// Prefixes can be stacked ("Firebase: Error: ..."), so stripping repeats until
/// none match. Matching is ASCII case-insensitive.
pub(super) fn strip_provider_prefix(message: &str) -> &str {
    let mut rest = message.trim_start();
    loop {
        let stripped = PROVIDER_PREFIXES.iter().find_map(|prefix| {
            rest.get(..prefix.len())
                .filter(|head| head.eq_ignore_ascii_case(prefix))
                .map(|_| rest[prefix.len()..].trim_start())
        });
        match stripped {
            Some(next) => rest = next,
            None => return rest,
        }
    }
}

/// Normalize a provider code for table lookup.
///
/// "auth/user-not-found", "USER_NOT_FOUND" and "user not found" all become
/// "user not found".
pub(super) fn normalize_code(code: &str) -> String {
    let lowered = code.trim().to_lowercase();
    let without_namespace = lowered.strip_prefix("auth/").unwrap_or(&lowered);
    without_namespace
        .split(|c: char| c == '-' || c == '_' || c == '/' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extract a code embedded in a message as "(auth/some-code)".
pub(super) fn extract_embedded_code(message: &str) -> Option<&str> {
    let start = message.find("(auth/")? + 1;
    let len = message[start..].find(')')?;
    let code = &message[start..start + len];
    if code.len() > "auth/".len() {
        Some(code)
    } else {
        None
    }
}

/// Drop a "(auth/some-code)" segment so phrase matching sees only the prose.
pub(super) fn remove_embedded_code(message: &str) -> String {
    let segment = message
        .find("(auth/")
        .zip(extract_embedded_code(message))
        .map(|(start, code)| (start, start + code.len() + 2));
    match segment {
        Some((start, end)) => format!("{}{}", &message[..start], &message[end..]),
        None => message.to_string(),
    }
}
