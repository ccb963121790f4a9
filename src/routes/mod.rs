use actix_web::web;

/// # Root Redirect And Static Front-End
///
/// `GET /` answers 307 with `Location: /static/index.html`; the static
/// directory is mounted separately by [`root::configure_static`].
pub mod root;

/// # Activity Endpoints
///
/// ## Routes
/// - `GET /activities`: full catalog keyed by name
/// - `POST /activities/{activity_name}/signup?email=...`
/// - `POST /activities/{activity_name}/unregister?email=...`
///
/// ## Responses
/// - **200 OK**: `{"message": ...}`
/// - **400 Bad Request**: roster conflict, `{"detail": ...}`
/// - **404 Not Found**: `{"detail": "Activity not found"}`
/// - **422 Unprocessable Entity**: missing `email`
pub mod activities;

/// # Health Check Endpoint
pub mod health;

/// # GraphQL Endpoint And Playground
pub mod graphql;


/// # API Route Configuration
///
/// The activity contract lives at the root; auxiliary endpoints are
/// versioned under `/api/v1`.
///
/// ```text
/// GET  /                                  - redirect to the front-end
/// GET  /activities                        - activity catalog
/// POST /activities/{name}/signup          - register a student
/// POST /activities/{name}/unregister      - remove a registration
/// GET  /api/v1/health                     - service health status
/// POST /api/v1/graphql                    - GraphQL endpoint
/// GET  /api/v1/playground                 - GraphQL Playground
/// ```
///
/// Expects `web::Data<dyn ActivityRepository>` and `web::Data<AppSchema>`
/// to be registered on the app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(root::configure_routes)
        .configure(activities::configure_routes)
        .service(
            web::scope("/api/v1")
                .configure(health::configure_routes)
                .configure(graphql::configure_routes),
        );
}
