use actix_cors::Cors;
use actix_web::{error, web, HttpRequest};

use crate::error::RelayError;
use crate::web::handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/", web::get().to(handlers::index))
        .route("/chat", web::post().to(handlers::chat));
}

// Any origin may call the API.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
}

// Bodies that fail to decode go through the same catch-all as other faults.
fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    RelayError::Internal(anyhow::anyhow!(err.to_string())).into()
}
