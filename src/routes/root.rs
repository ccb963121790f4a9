use actix_web::{HttpResponse, Responder, get, http::header, web};
use std::path::Path;
use tracing::warn;

/// Front-end entry point that `GET /` redirects to.
pub const INDEX_PATH: &str = "/static/index.html";

/// # Root Redirect
///
/// - **307 Temporary Redirect** to `/static/index.html`
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 307, description = "Redirect to the front-end")
    ),
    tag = "Activities"
)]
#[get("/")]
pub async fn root() -> impl Responder {
    HttpResponse::TemporaryRedirect()
        .insert_header((header::LOCATION, INDEX_PATH))
        .finish()
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(root);
}

/// Mounts `dir` under `/static` when it exists on disk.
pub fn configure_static(dir: &Path) -> impl FnOnce(&mut web::ServiceConfig) + '_ {
    move |cfg| {
        if dir.is_dir() {
            cfg.service(actix_files::Files::new("/static", dir).index_file("index.html"));
        } else {
            warn!(dir = %dir.display(), "static directory not found, /static is not served");
        }
    }
}
