use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::Value;
use tracing::{info, warn};

use sf_core::validation::rules;
use sf_core::{DomainError, MediaError, NewProduct, ProductPatch};
use sf_shared::ApiResponse;

use super::{pagination, path_id};
use crate::app::AppState;
use crate::errors::ApiError;
use crate::middleware::validation::{request_input, request_input_with_body, validate};

/// Handler for GET /api/products
pub async fn list_products(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let input = request_input(&req);
    if let Some(rejection) = validate(&[rules::PAGINATION], &input) {
        return Ok(rejection);
    }

    let pagination = pagination(&input);
    let page = state.catalog.list_products(pagination).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::paginated(
        page.items,
        pagination.page_info(page.total),
    )))
}

/// Handler for GET /api/products/{id}
pub async fn get_product(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let input = request_input(&req);
    if let Some(rejection) = validate(&[rules::ID_PARAM], &input) {
        return Ok(rejection);
    }

    let id = path_id(&req)?;
    let product = state
        .catalog
        .find_product(&id)
        .await?
        .ok_or_else(|| DomainError::not_found("Product"))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(product)))
}

/// Handler for POST /api/products
///
/// # Request Body
///
/// ```json
/// {
///     "name": "Desk lamp",
///     "description": "Warm light, brass finish",
///     "price": 24.5,
///     "stock": 3,
///     "category": "507f1f77bcf86cd799439011",
///     "images": [{ "url": "https://...", "publicId": "products/kx1v0p" }]
/// }
/// ```
pub async fn create_product(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let input = request_input_with_body(&req, body.into_inner());
    if let Some(rejection) = validate(&[rules::PRODUCT_CREATE], &input) {
        return Ok(rejection);
    }

    let new_product: NewProduct = serde_json::from_value(input.body)?;
    let product = state.catalog.create_product(new_product).await?;
    info!("Created product {} ({})", product.id, product.name);

    Ok(HttpResponse::Created().json(ApiResponse::success(product)))
}

/// Handler for PUT /api/products/{id}
pub async fn update_product(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let input = request_input_with_body(&req, body.into_inner());
    if let Some(rejection) = validate(&[rules::ID_PARAM, rules::PRODUCT_UPDATE.as_slice()], &input) {
        return Ok(rejection);
    }

    let id = path_id(&req)?;
    let patch: ProductPatch = serde_json::from_value(input.body)?;
    let product = state.catalog.update_product(&id, patch).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(product)))
}

/// Handler for DELETE /api/products/{id}
///
/// Images the product holds in the media store are deleted first. Images
/// already gone from the store are skipped; any other media failure aborts
/// the request and leaves the product in place.
pub async fn delete_product(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let input = request_input(&req);
    if let Some(rejection) = validate(&[rules::ID_PARAM], &input) {
        return Ok(rejection);
    }

    let id = path_id(&req)?;
    let product = state
        .catalog
        .find_product(&id)
        .await?
        .ok_or_else(|| DomainError::not_found("Product"))?;

    let image_ids = product.hosted_image_ids();
    if !image_ids.is_empty() {
        match state.media.delete_many(&image_ids).await {
            Ok(_) => {}
            Err(MediaError::NotFound(missing)) => {
                warn!("Product {} referenced missing image(s): {:?}", id, missing);
            }
            Err(err) => return Err(err.into()),
        }
    }

    let product = state.catalog.delete_product(&id).await?;
    info!("Deleted product {} and {} image(s)", product.id, image_ids.len());

    Ok(HttpResponse::Ok().json(ApiResponse::success(product)))
}
