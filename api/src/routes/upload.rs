use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::Value;
use tracing::info;

use sf_core::media::DEFAULT_FOLDER;
use sf_core::validation::{rules, Location};
use sf_shared::ApiResponse;

use crate::app::AppState;
use crate::dto::DeleteImagesRequest;
use crate::errors::ApiError;
use crate::middleware::validation::{request_input, request_input_with_body, validate};

/// Handler for POST /api/upload?folder=
///
/// The request body is the raw image. Without `folder` the image goes to
/// the default products folder.
pub async fn upload_image(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let input = request_input(&req);
    if let Some(rejection) = validate(&[rules::UPLOAD_FOLDER], &input) {
        return Ok(rejection);
    }

    if body.is_empty() {
        return Err(ApiError::bad_request("No file uploaded"));
    }

    let folder = input
        .lookup(Location::Query, "folder")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|folder| !folder.is_empty())
        .unwrap_or(DEFAULT_FOLDER);

    let result = state.media.upload_buffer(&body, folder).await?;
    info!("Uploaded {} bytes as {}", body.len(), result.public_id);

    Ok(HttpResponse::Created().json(ApiResponse::success(result)))
}

/// Handler for DELETE /api/upload
///
/// # Request Body
///
/// ```json
/// { "publicIds": ["products/kx1v0p", "products/q81mze"] }
/// ```
pub async fn delete_images(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let input = request_input_with_body(&req, body.into_inner());
    if let Some(rejection) = validate(&[rules::IMAGE_DELETE], &input) {
        return Ok(rejection);
    }

    let request: DeleteImagesRequest = serde_json::from_value(input.body)?;
    if request.public_ids.is_empty() {
        return Err(ApiError::bad_request("No images to delete"));
    }

    let ack = state.media.delete_many(&request.public_ids).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(ack)))
}

/// Handler for DELETE /api/upload/{public_id}
pub async fn delete_image(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let public_id = req.match_info().query("public_id");
    let ack = state.media.delete(public_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(ack)))
}
