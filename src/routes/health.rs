use crate::models::health::HealthResponse;
use crate::store::ActivityRepository;
use actix_web::{HttpResponse, Responder, get, web};

/// # Health Check Endpoint
///
/// Returns the service status, a timestamp and the catalog size.
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "UP",
///   "timestamp": "2026-10-05T12:34:56.789Z",
///   "activities": 9
/// }
/// ```
#[utoipa::path(
    get,
    path = "/api/v1/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Health Check"
)]
#[get("/health")]
pub async fn health(repo: web::Data<dyn ActivityRepository>) -> impl Responder {
    let activities = repo.get_all().await.len();
    HttpResponse::Ok().json(HealthResponse::up(activities))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}
