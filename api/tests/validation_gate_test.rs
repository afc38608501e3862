// Integration tests for request validation on the catalog routes

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};

use sf_api::create_app;
use sf_shared::Environment;

use common::{config, context};

fn field_names(body: &Value) -> Vec<String> {
    body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap().to_string())
        .collect()
}

#[actix_web::test]
async fn test_missing_field_is_reported() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state, &config(Environment::Development))).await;

    let req = test::TestRequest::post()
        .uri("/api/products")
        .set_json(json!({
            "description": "Solid oak",
            "price": 899.0,
            "stock": 4,
            "category": "507f1f77bcf86cd799439011"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(field_names(&body), vec!["name"]);
    assert_eq!(body["errors"][0]["message"], "Product name is required");
}

#[actix_web::test]
async fn test_every_violation_is_reported() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state, &config(Environment::Development))).await;

    let req = test::TestRequest::post()
        .uri("/api/products")
        .set_json(json!({
            "name": "Table",
            "description": "Solid oak",
            "price": -3,
            "stock": 1.5,
            "category": "not-an-id"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    let fields = field_names(&body);
    assert_eq!(fields.len(), 3);
    assert!(fields.contains(&"price".to_string()));
    assert!(fields.contains(&"stock".to_string()));
    assert!(fields.contains(&"category".to_string()));
}

#[actix_web::test]
async fn test_update_checks_only_present_fields() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state, &config(Environment::Development))).await;

    let req = test::TestRequest::put()
        .uri("/api/products/507f1f77bcf86cd799439011")
        .set_json(json!({ "price": -1 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(field_names(&body), vec!["price"]);
}

#[actix_web::test]
async fn test_invalid_id_is_rejected() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state, &config(Environment::Development))).await;

    let req = test::TestRequest::get().uri("/api/categories/42").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({
            "success": false,
            "errors": [{ "field": "id", "message": "Invalid ID format" }]
        })
    );
}

#[actix_web::test]
async fn test_pagination_limit_is_bounded() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state, &config(Environment::Development))).await;

    let req = test::TestRequest::get()
        .uri("/api/sliders?limit=500")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(field_names(&body), vec!["limit"]);
    assert_eq!(body["errors"][0]["message"], "Limit must be between 1 and 100");
}

#[actix_web::test]
async fn test_rejection_is_not_rewritten_in_production() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state, &config(Environment::Production))).await;

    let req = test::TestRequest::post()
        .uri("/api/sliders")
        .set_json(json!({ "image": "https://cdn.example.com/hero.jpg" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert!(body.get("stack").is_none());
    assert_eq!(field_names(&body), vec!["title"]);
}

#[actix_web::test]
async fn test_update_rejects_blank_required_fields() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state, &config(Environment::Development))).await;

    let req = test::TestRequest::put()
        .uri("/api/products/507f1f77bcf86cd799439011")
        .set_json(json!({ "name": "   ", "description": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(field_names(&body), vec!["name", "description"]);
    assert_eq!(body["errors"][0]["message"], "Product name is required");
}

#[actix_web::test]
async fn test_float_stock_is_itemized() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state, &config(Environment::Development))).await;

    let req = test::TestRequest::post()
        .uri("/api/products")
        .set_json(json!({
            "name": "Table",
            "description": "Solid oak",
            "price": 899.0,
            "stock": 4.0,
            "category": "507f1f77bcf86cd799439011"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(field_names(&body), vec!["stock"]);
}
