use serde::{Deserialize, Serialize};

use crate::classify::ClassifiedError;
use crate::routing::Destination;

/// What the UI does after a sign-in action completes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "value", rename_all = "snake_case")]
pub enum SignInOutcome {
    /// Navigate to the given screen
    Navigate(Destination),
    /// Stay on the form and show the message
    Rejected(ClassifiedError),
}

impl SignInOutcome {
    pub fn destination(&self) -> Option<Destination> {
        match self {
            Self::Navigate(destination) => Some(*destination),
            Self::Rejected(_) => None,
        }
    }

    pub fn rejection(&self) -> Option<&ClassifiedError> {
        match self {
            Self::Navigate(_) => None,
            Self::Rejected(err) => Some(err),
        }
    }
}
