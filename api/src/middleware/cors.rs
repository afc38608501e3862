use actix_cors::Cors;
use actix_web::http::{header, Method};
use tracing::info;

use sf_shared::CorsConfig;

/// Creates the CORS middleware for the admin API.
///
/// An empty origin list or a `*` entry allows any origin (development).
/// Otherwise only the configured origins are accepted.
pub fn create_cors(config: &CorsConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(config.max_age);

    if config.allows_any_origin() {
        info!("Configuring CORS to allow any origin");
        return cors.allow_any_origin();
    }

    config
        .allowed_origins
        .iter()
        .fold(cors.supports_credentials(), |cors, origin| {
            info!("Adding allowed origin: {}", origin);
            cors.allowed_origin(origin)
        })
}
