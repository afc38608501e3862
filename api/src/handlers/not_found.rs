use actix_web::{HttpRequest, HttpResponse};

use crate::errors::ApiError;

/// Default service: every unmatched request becomes a 404 failure
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    Err(ApiError::not_found(&req.uri().to_string()))
}
