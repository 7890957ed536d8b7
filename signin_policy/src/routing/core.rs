use crate::provider::OnboardingStore;

use super::types::Destination;

/// Decide where a signed-in user goes next.
///
/// Precedence, highest first:
/// 1. unverified email goes to email verification, whatever the onboarding state
/// 2. verified but not onboarded goes to onboarding
/// 3. everything else goes home
pub fn route(verified: bool, onboarded: bool) -> Destination {
    if !verified {
        Destination::EmailVerification
    } else if !onboarded {
        Destination::Onboarding
    } else {
        Destination::Home
    }
}

/// Route a federated sign-in, whose provider has already verified the email.
pub fn route_federated(onboarded: bool) -> Destination {
    route(true, onboarded)
}

/// Look up the onboarding status, treating any failure as "not onboarded".
///
/// Showing onboarding twice is harmless; skipping it for good is not.
pub async fn lookup_onboarding_best_effort<S>(store: &S, account_id: &str) -> bool
where
    S: OnboardingStore + ?Sized,
{
    match store.lookup_onboarding_status(account_id).await {
        Ok(onboarded) => onboarded,
        Err(e) => {
            tracing::warn!(
                account_id = %account_id,
                error = %e,
                "Onboarding lookup failed, assuming not onboarded"
            );
            false
        }
    }
}

/// Resolve the destination for an account, consulting the onboarding store only
/// when the email is verified.
pub async fn resolve_destination<S>(verified: bool, account_id: &str, store: &S) -> Destination
where
    S: OnboardingStore + ?Sized,
{
    if !verified {
        tracing::debug!(account_id = %account_id, "Email not verified, skipping onboarding lookup");
        return route(false, false);
    }

    let onboarded = lookup_onboarding_best_effort(store, account_id).await;
    let destination = route(true, onboarded);
    tracing::debug!(
        account_id = %account_id,
        onboarded = onboarded,
        destination = %destination,
        "Resolved sign-in destination"
    );
    destination
}
