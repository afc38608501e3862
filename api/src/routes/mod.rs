//! Route table for the admin API.
//!
//! Every handler runs its rule sets through the validation gate first and
//! returns `Result<HttpResponse, ApiError>`; failures are rendered by the
//! error responder.

pub mod categories;
pub mod health;
pub mod products;
pub mod sliders;
pub mod upload;

use actix_web::{web, HttpRequest};

use sf_core::validation::{Location, RequestInput};
use sf_core::ObjectId;
use sf_shared::types::pagination::{DEFAULT_LIMIT, DEFAULT_PAGE};
use sf_shared::validation::validators::as_integer;
use sf_shared::Pagination;

use crate::errors::ApiError;
use crate::handlers::not_found;

/// Register all routes on `cfg`
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check)).service(
        web::scope("/api")
            .service(
                web::scope("/products")
                    .service(
                        web::resource("")
                            .route(web::get().to(products::list_products))
                            .route(web::post().to(products::create_product))
                            .default_service(web::to(not_found)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(products::get_product))
                            .route(web::put().to(products::update_product))
                            .route(web::delete().to(products::delete_product))
                            .default_service(web::to(not_found)),
                    ),
            )
            .service(
                web::scope("/categories")
                    .service(
                        web::resource("")
                            .route(web::get().to(categories::list_categories))
                            .route(web::post().to(categories::create_category))
                            .default_service(web::to(not_found)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(categories::get_category))
                            .route(web::put().to(categories::update_category))
                            .route(web::delete().to(categories::delete_category))
                            .default_service(web::to(not_found)),
                    ),
            )
            .service(
                web::scope("/sliders")
                    .service(
                        web::resource("")
                            .route(web::get().to(sliders::list_sliders))
                            .route(web::post().to(sliders::create_slider))
                            .default_service(web::to(not_found)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(sliders::get_slider))
                            .route(web::put().to(sliders::update_slider))
                            .route(web::delete().to(sliders::delete_slider))
                            .default_service(web::to(not_found)),
                    ),
            )
            .service(
                web::resource("/upload")
                    .route(web::post().to(upload::upload_image))
                    .route(web::delete().to(upload::delete_images))
                    .default_service(web::to(not_found)),
            )
            .service(
                web::resource("/upload/{public_id:.+}")
                    .route(web::delete().to(upload::delete_image))
                    .default_service(web::to(not_found)),
            ),
    );
}

/// Identifier from the `{id}` path segment of `req`
pub(crate) fn path_id(req: &HttpRequest) -> Result<ObjectId, ApiError> {
    Ok(req.match_info().query("id").parse()?)
}

/// Pagination from the gated `page` and `limit` query parameters
pub(crate) fn pagination(input: &RequestInput) -> Pagination {
    let param = |name: &str, default: u32| {
        input
            .lookup(Location::Query, name)
            .and_then(as_integer)
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(default)
    };

    Pagination::new(param("page", DEFAULT_PAGE), param("limit", DEFAULT_LIMIT))
}
