use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::Value;
use tracing::info;

use sf_core::validation::rules;
use sf_core::{CategoryPatch, DomainError, NewCategory};
use sf_shared::ApiResponse;

use super::{pagination, path_id};
use crate::app::AppState;
use crate::errors::ApiError;
use crate::middleware::validation::{request_input, request_input_with_body, validate};

/// Handler for GET /api/categories
pub async fn list_categories(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let input = request_input(&req);
    if let Some(rejection) = validate(&[rules::PAGINATION], &input) {
        return Ok(rejection);
    }

    let pagination = pagination(&input);
    let page = state.catalog.list_categories(pagination).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::paginated(
        page.items,
        pagination.page_info(page.total),
    )))
}

/// Handler for GET /api/categories/{id}
pub async fn get_category(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let input = request_input(&req);
    if let Some(rejection) = validate(&[rules::ID_PARAM], &input) {
        return Ok(rejection);
    }

    let id = path_id(&req)?;
    let category = state
        .catalog
        .find_category(&id)
        .await?
        .ok_or_else(|| DomainError::not_found("Category"))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(category)))
}

/// Handler for POST /api/categories
pub async fn create_category(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let input = request_input_with_body(&req, body.into_inner());
    if let Some(rejection) = validate(&[rules::CATEGORY_CREATE], &input) {
        return Ok(rejection);
    }

    let new_category: NewCategory = serde_json::from_value(input.body)?;
    let category = state.catalog.create_category(new_category).await?;
    info!("Created category {} ({})", category.id, category.name);

    Ok(HttpResponse::Created().json(ApiResponse::success(category)))
}

/// Handler for PUT /api/categories/{id}
pub async fn update_category(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let input = request_input_with_body(&req, body.into_inner());
    if let Some(rejection) = validate(&[rules::ID_PARAM, rules::CATEGORY_UPDATE.as_slice()], &input) {
        return Ok(rejection);
    }

    let id = path_id(&req)?;
    let patch: CategoryPatch = serde_json::from_value(input.body)?;
    let category = state.catalog.update_category(&id, patch).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(category)))
}

/// Handler for DELETE /api/categories/{id}
pub async fn delete_category(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let input = request_input(&req);
    if let Some(rejection) = validate(&[rules::ID_PARAM], &input) {
        return Ok(rejection);
    }

    let id = path_id(&req)?;
    let category = state.catalog.delete_category(&id).await?;
    info!("Deleted category {}", category.id);

    Ok(HttpResponse::Ok().json(ApiResponse::success(category)))
}
