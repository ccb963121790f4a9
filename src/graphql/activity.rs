use crate::error::ActivityError;
use crate::handlers::registration;
use crate::models::activity::Activity;
use crate::store::ActivityRepository;
use async_graphql::{Context, Error, ErrorExtensions, Object, Result, SimpleObject};
use std::sync::Arc;

/// GraphQL view of one activity, with its name inlined.
#[derive(SimpleObject, Debug, Clone, PartialEq)]
pub struct ActivityObject {
    /// Catalog key
    pub name: String,
    pub description: String,
    pub schedule: String,
    /// Capacity ceiling, not enforced
    pub max_participants: u32,
    /// Registered student emails
    pub participants: Vec<String>,
}

impl ActivityObject {
    fn from_entry(name: String, activity: Activity) -> Self {
        Self {
            name,
            description: activity.description,
            schedule: activity.schedule,
            max_participants: activity.max_participants,
            participants: activity.participants,
        }
    }
}

/// Detail message as the GraphQL error message, with a `code` extension.
fn to_graphql_error(err: ActivityError) -> Error {
    let code = err.code();
    Error::new(err.to_string()).extend_with(|_, ext| ext.set("code", code))
}

fn repository<'a>(ctx: &Context<'a>) -> Result<&'a Arc<dyn ActivityRepository>> {
    ctx.data::<Arc<dyn ActivityRepository>>()
}

#[derive(Default)]
pub struct ActivityQuery;

#[Object]
impl ActivityQuery {
    /// Every activity in the catalog
    async fn activities(&self, ctx: &Context<'_>) -> Result<Vec<ActivityObject>> {
        let catalog = registration::list_activities(repository(ctx)?.as_ref()).await;
        Ok(catalog
            .into_iter()
            .map(|(name, activity)| ActivityObject::from_entry(name, activity))
            .collect())
    }

    /// Exact-match lookup by name; null when absent
    async fn activity(&self, ctx: &Context<'_>, name: String) -> Result<Option<ActivityObject>> {
        let activity = repository(ctx)?.get(&name).await;
        Ok(activity.map(|a| ActivityObject::from_entry(name, a)))
    }
}

#[derive(Default)]
pub struct ActivityMutation;

#[Object]
impl ActivityMutation {
    /// Signs a student up; returns the confirmation message
    async fn signup(&self, ctx: &Context<'_>, activity: String, email: String) -> Result<String> {
        registration::signup(repository(ctx)?.as_ref(), &activity, &email)
            .await
            .map(|r| r.message)
            .map_err(to_graphql_error)
    }

    /// Removes a student from an activity; returns the confirmation message
    async fn unregister(
        &self,
        ctx: &Context<'_>,
        activity: String,
        email: String,
    ) -> Result<String> {
        registration::unregister(repository(ctx)?.as_ref(), &activity, &email)
            .await
            .map(|r| r.message)
            .map_err(to_graphql_error)
    }
}
