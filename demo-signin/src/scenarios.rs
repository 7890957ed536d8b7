/// A scripted sign-in attempt against the seeded collaborators
pub(crate) struct Scenario {
    pub(crate) name: &'static str,
    pub(crate) step: Step,
    pub(crate) onboarding_down: bool,
    /// JSON error body the provider returns instead of checking credentials
    pub(crate) provider_failure: Option<&'static str>,
}

pub(crate) enum Step {
    Password {
        identifier: &'static str,
        secret: &'static str,
    },
    Federated,
}

const fn password(name: &'static str, identifier: &'static str, secret: &'static str) -> Scenario {
    Scenario {
        name,
        step: Step::Password { identifier, secret },
        onboarding_down: false,
        provider_failure: None,
    }
}

pub(crate) fn all() -> Vec<Scenario> {
    vec![
        password("verified and onboarded", "home@example.com", "password1"),
        password("verified, not onboarded", "fresh@example.com", "password2"),
        password("unverified", "pending@example.com", "password3"),
        password("wrong password", "home@example.com", "nope"),
        password("unknown account", "ghost@example.com", "password1"),
        password("malformed identifier", "home-at-example", "password1"),
        Scenario {
            onboarding_down: true,
            ..password("onboarding store down", "home@example.com", "password1")
        },
        Scenario {
            provider_failure: Some(r#"{"message": "Too many requests, try later"}"#),
            ..password("rate limited", "home@example.com", "password1")
        },
        Scenario {
            provider_failure: Some(
                r#"{"code": 500, "error_code": "unexpected_failure", "msg": "Unexpected failure while contacting upstream identity service"}"#,
            ),
            ..password("provider outage", "home@example.com", "password1")
        },
        Scenario {
            name: "federated",
            step: Step::Federated,
            onboarding_down: false,
            provider_failure: None,
        },
    ]
}
