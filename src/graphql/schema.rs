use super::activity::{ActivityMutation, ActivityQuery};
use super::health::HealthQuery;
use crate::store::ActivityRepository;
use async_graphql::{EmptySubscription, MergedObject, Schema};
use std::sync::Arc;

/// Root query combining health and activity lookups.
#[derive(MergedObject, Default)]
pub struct QueryRoot(HealthQuery, ActivityQuery);

/// Main GraphQL schema of the application.
///
/// - `QueryRoot`: `health`, `activities`, `activity(name)`
/// - `ActivityMutation`: `signup` and `unregister`
pub type AppSchema = Schema<QueryRoot, ActivityMutation, EmptySubscription>;

/// Builds the schema over the shared activity repository.
///
/// # Example
///
/// ```rust,no_run
/// use mergington_activities::graphql::schema::create_schema;
/// use mergington_activities::store::{ActivityRepository, InMemoryActivityStore};
/// use std::sync::Arc;
///
/// let repo: Arc<dyn ActivityRepository> = Arc::new(InMemoryActivityStore::seeded());
/// let schema = create_schema(repo);
/// ```
pub fn create_schema(repo: Arc<dyn ActivityRepository>) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        ActivityMutation,
        EmptySubscription,
    )
    .data(repo)
    .finish()
}
