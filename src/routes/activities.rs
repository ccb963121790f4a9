use crate::error::ActivityError;
use crate::handlers::registration;
use crate::models::activity::{Activity, EmailQuery, ErrorResponse, MessageResponse};
use crate::store::ActivityRepository;
use actix_web::error::InternalError;
use actix_web::{HttpResponse, Responder, get, post, web};
use std::collections::BTreeMap;

/// # List Activities
///
/// Returns every activity keyed by name.
///
/// ## Responses
/// - **200 OK**: JSON object `name → {description, schedule, max_participants, participants}`
#[utoipa::path(
    get,
    path = "/activities",
    responses(
        (status = 200, description = "Activity catalog keyed by name", body = BTreeMap<String, Activity>)
    ),
    tag = "Activities"
)]
#[get("/activities")]
pub async fn get_activities(repo: web::Data<dyn ActivityRepository>) -> impl Responder {
    HttpResponse::Ok().json(registration::list_activities(repo.get_ref()).await)
}

/// # Sign Up For An Activity
///
/// ## Request
/// - Path: `activity_name`, percent-encoded, matched exactly
/// - Query: `email`
///
/// ## Responses
/// - **200 OK**: `{"message": "Signed up <email> for <activity_name>"}`
/// - **400 Bad Request**: student already signed up
/// - **404 Not Found**: unknown activity
/// - **422 Unprocessable Entity**: `email` missing
///
/// ## Example Request
/// ```text
/// POST /activities/Chess%20Club/signup?email=newstudent@mergington.edu
/// ```
#[utoipa::path(
    post,
    path = "/activities/{activity_name}/signup",
    params(
        ("activity_name" = String, Path, description = "Exact activity name"),
        EmailQuery
    ),
    responses(
        (status = 200, description = "Student signed up", body = MessageResponse),
        (status = 400, description = "Student is already signed up", body = ErrorResponse),
        (status = 404, description = "Activity not found", body = ErrorResponse),
        (status = 422, description = "Missing email parameter", body = ErrorResponse)
    ),
    tag = "Activities"
)]
#[post("/activities/{activity_name}/signup")]
pub async fn signup_for_activity(
    path: web::Path<String>,
    query: web::Query<EmailQuery>,
    repo: web::Data<dyn ActivityRepository>,
) -> Result<HttpResponse, ActivityError> {
    let activity_name = path.into_inner();
    let response = registration::signup(repo.get_ref(), &activity_name, &query.email).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// # Unregister From An Activity
///
/// ## Responses
/// - **200 OK**: `{"message": "Unregistered <email> from <activity_name>"}`
/// - **400 Bad Request**: student not signed up
/// - **404 Not Found**: unknown activity
/// - **422 Unprocessable Entity**: `email` missing
#[utoipa::path(
    post,
    path = "/activities/{activity_name}/unregister",
    params(
        ("activity_name" = String, Path, description = "Exact activity name"),
        EmailQuery
    ),
    responses(
        (status = 200, description = "Student unregistered", body = MessageResponse),
        (status = 400, description = "Student is not signed up", body = ErrorResponse),
        (status = 404, description = "Activity not found", body = ErrorResponse),
        (status = 422, description = "Missing email parameter", body = ErrorResponse)
    ),
    tag = "Activities"
)]
#[post("/activities/{activity_name}/unregister")]
pub async fn unregister_from_activity(
    path: web::Path<String>,
    query: web::Query<EmailQuery>,
    repo: web::Data<dyn ActivityRepository>,
) -> Result<HttpResponse, ActivityError> {
    let activity_name = path.into_inner();
    let response = registration::unregister(repo.get_ref(), &activity_name, &query.email).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Rejects a missing or malformed query string with 422 and a `detail` body.
fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let detail = err.to_string();
        InternalError::from_response(
            err,
            HttpResponse::UnprocessableEntity().json(ErrorResponse::new(detail)),
        )
        .into()
    })
}

/// # Route Configuration
///
/// - `GET /activities`
/// - `POST /activities/{activity_name}/signup`
/// - `POST /activities/{activity_name}/unregister`
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(query_config())
        .service(get_activities)
        .service(signup_for_activity)
        .service(unregister_from_activity);
}
