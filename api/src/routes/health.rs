use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::app::AppState;

/// Handler for GET /health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "storefront-api",
        "version": env!("CARGO_PKG_VERSION"),
        "mediaProvider": state.media.provider_name(),
    }))
}
