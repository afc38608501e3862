use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::Value;
use tracing::info;

use sf_core::validation::rules;
use sf_core::{DomainError, NewSlider, SliderPatch};
use sf_shared::ApiResponse;

use super::{pagination, path_id};
use crate::app::AppState;
use crate::errors::ApiError;
use crate::middleware::validation::{request_input, request_input_with_body, validate};

/// Handler for GET /api/sliders
pub async fn list_sliders(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let input = request_input(&req);
    if let Some(rejection) = validate(&[rules::PAGINATION], &input) {
        return Ok(rejection);
    }

    let pagination = pagination(&input);
    let page = state.catalog.list_sliders(pagination).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::paginated(
        page.items,
        pagination.page_info(page.total),
    )))
}

/// Handler for GET /api/sliders/{id}
pub async fn get_slider(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let input = request_input(&req);
    if let Some(rejection) = validate(&[rules::ID_PARAM], &input) {
        return Ok(rejection);
    }

    let id = path_id(&req)?;
    let slider = state
        .catalog
        .find_slider(&id)
        .await?
        .ok_or_else(|| DomainError::not_found("Slider"))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(slider)))
}

/// Handler for POST /api/sliders
pub async fn create_slider(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let input = request_input_with_body(&req, body.into_inner());
    if let Some(rejection) = validate(&[rules::SLIDER_CREATE], &input) {
        return Ok(rejection);
    }

    let new_slider: NewSlider = serde_json::from_value(input.body)?;
    let slider = state.catalog.create_slider(new_slider).await?;
    info!("Created slider {} ({})", slider.id, slider.title);

    Ok(HttpResponse::Created().json(ApiResponse::success(slider)))
}

/// Handler for PUT /api/sliders/{id}
pub async fn update_slider(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let input = request_input_with_body(&req, body.into_inner());
    if let Some(rejection) = validate(&[rules::ID_PARAM, rules::SLIDER_UPDATE.as_slice()], &input) {
        return Ok(rejection);
    }

    let id = path_id(&req)?;
    let patch: SliderPatch = serde_json::from_value(input.body)?;
    let slider = state.catalog.update_slider(&id, patch).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(slider)))
}

/// Handler for DELETE /api/sliders/{id}
pub async fn delete_slider(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let input = request_input(&req);
    if let Some(rejection) = validate(&[rules::ID_PARAM], &input) {
        return Ok(rejection);
    }

    let id = path_id(&req)?;
    let slider = state.catalog.delete_slider(&id).await?;
    info!("Deleted slider {}", slider.id);

    Ok(HttpResponse::Ok().json(ApiResponse::success(slider)))
}
