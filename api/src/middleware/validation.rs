//! Validation gate applied by route handlers before any business logic.
//!
//! The gate evaluates the route's rule sets against the request's body,
//! query and path parameters. Any violation short-circuits the request with
//! `400 {"success": false, "errors": [...]}`; this response is produced
//! here and never reaches the error responder.

use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

use sf_core::validation::{evaluate_all, FieldConstraint, RequestInput};
use sf_shared::ValidationFailure;

/// Collect the query and path parameters of `req`
pub fn request_input(req: &HttpRequest) -> RequestInput {
    let query = web::Query::<HashMap<String, String>>::from_query(req.query_string())
        .map(web::Query::into_inner)
        .unwrap_or_default();
    let path: Vec<(String, String)> = req
        .match_info()
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();

    RequestInput::new().with_query(query).with_path(path)
}

/// Collect query, path and the JSON body of `req`
pub fn request_input_with_body(req: &HttpRequest, body: Value) -> RequestInput {
    request_input(req).with_body(body)
}

/// Run `rule_sets` against `input`
///
/// Returns the rejection to send when a rule is violated; `None` lets the
/// handler continue with the unmodified input.
pub fn validate(rule_sets: &[&[FieldConstraint]], input: &RequestInput) -> Option<HttpResponse> {
    let errors = evaluate_all(rule_sets, input);
    if errors.is_empty() {
        return None;
    }

    debug!("Request rejected with {} validation error(s)", errors.len());
    Some(HttpResponse::BadRequest().json(ValidationFailure::new(errors.into_errors())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test};
    use serde_json::json;
    use sf_core::validation::rules;

    #[actix_web::test]
    async fn test_request_input_reads_query() {
        let req = test::TestRequest::get()
            .uri("/api/products?page=2&limit=10")
            .to_http_request();
        let input = request_input(&req);

        assert_eq!(input.query.get("page"), Some(&json!("2")));
        assert_eq!(input.query.get("limit"), Some(&json!("10")));
    }

    #[actix_web::test]
    async fn test_request_input_reads_path() {
        let req = test::TestRequest::get()
            .uri("/api/products/abc")
            .param("id", "abc")
            .to_http_request();
        let input = request_input(&req);

        assert_eq!(input.path.get("id"), Some(&json!("abc")));
    }

    #[actix_web::test]
    async fn test_validate_rejects_with_field_errors() {
        let input = RequestInput::new().with_body(json!({ "name": "Lamp" }));
        let rejection = validate(&[rules::PRODUCT_CREATE], &input).unwrap();
        assert_eq!(rejection.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_validate_passes_valid_input() {
        let input = RequestInput::new().with_query([("page", "1"), ("limit", "20")]);
        assert!(validate(&[rules::PAGINATION], &input).is_none());
    }
}
