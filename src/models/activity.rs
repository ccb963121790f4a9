use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::{IntoParams, ToSchema};

/// One extracurricular offering.
///
/// The activity name is the catalog key and is not repeated in the record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Capacity ceiling. Stored and reported, not enforced on signup.
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
        participants: &[&str],
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

/// Activity name → activity record, as served by `GET /activities`.
pub type Catalog = BTreeMap<String, Activity>;

/// `email` query parameter of the signup and unregister endpoints.
#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmailQuery {
    /// Student email address, matched exactly
    pub email: String,
}

/// Successful mutation response.
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn signed_up(activity_name: &str, email: &str) -> Self {
        Self {
            message: format!("Signed up {} for {}", email, activity_name),
        }
    }

    pub fn unregistered(activity_name: &str, email: &str) -> Self {
        Self {
            message: format!("Unregistered {} from {}", email, activity_name),
        }
    }
}

/// Error body returned alongside 4xx statuses.
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
