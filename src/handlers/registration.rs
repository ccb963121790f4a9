use crate::error::ActivityError;
use crate::models::activity::{Catalog, MessageResponse};
use crate::store::ActivityRepository;
use tracing::{info, warn};

/// Full catalog snapshot. Never fails.
pub async fn list_activities(repo: &dyn ActivityRepository) -> Catalog {
    repo.get_all().await
}

/// Registers `email` for `activity_name`.
///
/// Capacity is not checked: signups past `max_participants`
/// are accepted.
pub async fn signup(
    repo: &dyn ActivityRepository,
    activity_name: &str,
    email: &str,
) -> Result<MessageResponse, ActivityError> {
    match repo.add_participant(activity_name, email).await {
        Ok(()) => {
            info!(activity = activity_name, email, "student signed up");
            Ok(MessageResponse::signed_up(activity_name, email))
        }
        Err(e) => {
            warn!(activity = activity_name, email, error = %e, "signup rejected");
            Err(e)
        }
    }
}

/// Removes `email` from the roster of `activity_name`.
pub async fn unregister(
    repo: &dyn ActivityRepository,
    activity_name: &str,
    email: &str,
) -> Result<MessageResponse, ActivityError> {
    match repo.remove_participant(activity_name, email).await {
        Ok(()) => {
            info!(activity = activity_name, email, "student unregistered");
            Ok(MessageResponse::unregistered(activity_name, email))
        }
        Err(e) => {
            warn!(activity = activity_name, email, error = %e, "unregister rejected");
            Err(e)
        }
    }
}
