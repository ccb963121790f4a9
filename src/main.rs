use actix_web::{App, HttpServer, middleware::Logger, web::Data};
use mergington_activities::config::Config;
use mergington_activities::graphql::schema::create_schema;
use mergington_activities::openapi::ApiDoc;
use mergington_activities::store::{ActivityRepository, InMemoryActivityStore};
use mergington_activities::{logging, routes};
use std::sync::Arc;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Mergington Activities Service Entry Point
///
/// Loads `.env`, reads [`Config`], seeds the in-memory catalog once and shares
/// it with every worker.
///
/// # Endpoints
/// - Activities: `/activities` (see [`routes::configure`])
/// - GraphQL: `/api/v1/graphql`
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
/// - Front-end: `/static/*` when `STATIC_DIR` exists
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env().map_err(std::io::Error::other)?;
    logging::init(config.log_filter.as_deref());

    let repo: Arc<dyn ActivityRepository> = Arc::new(InMemoryActivityStore::seeded());
    let schema = create_schema(repo.clone());
    let static_dir = config.static_dir.clone();

    info!(host = %config.host, port = config.port, "starting activities service");

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .wrap(Logger::default())
            .app_data(Data::from(repo.clone()))
            .app_data(Data::new(schema.clone()))
            .configure(routes::configure)
            .configure(routes::root::configure_static(&static_dir))
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
