//! Application state and factory
//!
//! This module holds the shared state handed to every handler and builds
//! the Actix-web application: routes, the not-found trap and middleware.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, Error,
};
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

use sf_core::{CatalogRepository, MediaStore};
use sf_shared::AppConfig;

use crate::config::ErrorConfig;
use crate::handlers::not_found;
use crate::middleware::{create_cors, ErrorResponder};
use crate::routes;

/// Application state that holds shared services
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogRepository>,
    pub media: Arc<dyn MediaStore>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn CatalogRepository>, media: Arc<dyn MediaStore>) -> Self {
        Self { catalog, media }
    }
}

/// Create and configure the application with all dependencies
///
/// Middleware order, outermost first: request tracing, CORS, error
/// responder. The responder therefore sees every failure raised by a
/// handler, an extractor or the not-found trap.
pub fn create_app(
    state: web::Data<AppState>,
    config: &AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let max_payload = config.server.max_payload_size;

    App::new()
        .app_data(state)
        .app_data(web::JsonConfig::default().limit(max_payload))
        .app_data(web::PayloadConfig::new(max_payload))
        .wrap(ErrorResponder::new(ErrorConfig::from_app_config(config)))
        .wrap(create_cors(&config.cors))
        .wrap(TracingLogger::default())
        .configure(routes::configure)
        .default_service(web::to(not_found))
}
