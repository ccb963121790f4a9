use utoipa::OpenApi;

/// OpenAPI document for the REST surface.
///
/// Served at `/api-docs/openapi.json` with Swagger UI at `/swagger-ui/`.
/// GraphQL is self-describing and not listed here.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::root::root,
        crate::routes::activities::get_activities,
        crate::routes::activities::signup_for_activity,
        crate::routes::activities::unregister_from_activity,
        crate::routes::health::health,
    ),
    components(
        schemas(
            crate::models::activity::Activity,
            crate::models::activity::MessageResponse,
            crate::models::activity::ErrorResponse,
            crate::models::health::HealthResponse
        )
    ),
    tags(
        (name = "Activities", description = "Activity catalog and student registration"),
        (name = "Health Check", description = "Service health monitoring endpoints")
    ),
    info(
        description = "Signup API for Mergington High School extracurricular activities",
        title = "Mergington Activities API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
