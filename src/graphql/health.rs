use crate::models::health::HealthResponse;
use crate::store::ActivityRepository;
use async_graphql::{Context, Object, Result, SimpleObject};
use std::sync::Arc;

/// GraphQL mirror of the REST health payload
#[derive(SimpleObject, Debug)]
pub struct Health {
    pub status: String,
    pub timestamp: String,
    /// Number of activities in the catalog
    pub activities: usize,
}

impl From<HealthResponse> for Health {
    fn from(response: HealthResponse) -> Self {
        Self {
            status: response.status,
            timestamp: response.timestamp,
            activities: response.activities,
        }
    }
}

#[derive(Default)]
pub struct HealthQuery;

#[Object]
impl HealthQuery {
    /// Checks service health status
    async fn health(&self, ctx: &Context<'_>) -> Result<Health> {
        let repo = ctx.data::<Arc<dyn ActivityRepository>>()?;
        let activities = repo.get_all().await.len();
        Ok(Health::from(HealthResponse::up(activities)))
    }
}
