use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use signin_policy::{
    AuthResult, Credentials, InMemoryAuthProvider, InMemoryOnboardingStore, RawAuthError,
    SignInCoordinator,
};

mod scenarios;

use crate::scenarios::{Scenario, Step};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}=debug,signin_policy=debug", env!("CARGO_CRATE_NAME")).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let coordinator = SignInCoordinator::new(seed_provider().await, seed_onboarding().await);

    for scenario in scenarios::all() {
        run_scenario(&coordinator, &scenario).await?;
    }

    Ok(())
}

async fn seed_provider() -> InMemoryAuthProvider {
    let provider = InMemoryAuthProvider::new();
    provider
        .add_account("home@example.com", "password1", "acct_home", true)
        .await;
    provider
        .add_account("fresh@example.com", "password2", "acct_fresh", true)
        .await;
    provider
        .add_account("pending@example.com", "password3", "acct_pending", false)
        .await;
    provider
        .set_federated_outcome(Ok(AuthResult::new("acct_federated", false)))
        .await;
    provider
}

async fn seed_onboarding() -> InMemoryOnboardingStore {
    let store = InMemoryOnboardingStore::new();
    store.mark_onboarded("acct_home").await;
    store.mark_onboarded("acct_pending").await;
    store
}

async fn run_scenario(
    coordinator: &SignInCoordinator<InMemoryAuthProvider, InMemoryOnboardingStore>,
    scenario: &Scenario,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Scenario: {}", scenario.name);
    coordinator.onboarding().set_failing(scenario.onboarding_down);
    if let Some(body) = scenario.provider_failure {
        coordinator
            .provider()
            .fail_next(RawAuthError::from_json(body)?)
            .await;
    }

    let outcome = match &scenario.step {
        Step::Password { identifier, secret } => {
            coordinator
                .sign_in_with_password(&Credentials::new(*identifier, *secret))
                .await?
        }
        Step::Federated => coordinator.sign_in_federated().await?,
    };

    println!("{:<40} {}", scenario.name, serde_json::to_string(&outcome)?);
    coordinator.onboarding().set_failing(false);
    Ok(())
}
