use actix_web::{
    body::{EitherBody, MessageBody},
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::{Method, StatusCode},
    Error, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;
use tracing::{error, warn};

use sf_shared::ErrorEnvelope;

use crate::config::ErrorConfig;
use crate::errors::{resolve_status, ApiError};

/// Middleware rendering every failed request as an [`ErrorEnvelope`].
///
/// Catches errors returned by handlers, extractors and the default service
/// as well as errors raised by inner middleware,
/// resolves the status (a failure without a status becomes 500) and writes
/// `{message, stack, data}`. The stack is replaced by a placeholder unless
/// the configuration allows traces.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorResponder {
    config: ErrorConfig,
}

impl ErrorResponder {
    pub fn new(config: ErrorConfig) -> Self {
        Self { config }
    }
}

impl<S, B> Transform<S, ServiceRequest> for ErrorResponder
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = ErrorResponderService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorResponderService {
            service: Rc::new(service),
            config: self.config,
        }))
    }
}

pub struct ErrorResponderService<S> {
    service: Rc<S>,
    config: ErrorConfig,
}

impl<S, B> Service<ServiceRequest> for ErrorResponderService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let config = self.config;
        // Routing needs sole ownership of the request, so only copies are kept
        let method = req.method().clone();
        let path = req.path().to_owned();

        Box::pin(async move {
            match service.call(req).await {
                Ok(res) => {
                    let rendered = res
                        .response()
                        .error()
                        .map(|err| render_failure(&config, &method, &path, err, res.status()));

                    match rendered {
                        Some(response) => {
                            let (request, _) = res.into_parts();
                            Ok(ServiceResponse::new(request, response).map_into_right_body())
                        }
                        None => Ok(res.map_into_left_body()),
                    }
                }
                Err(err) => {
                    let status = err.as_response_error().status_code();
                    let response = render_failure(&config, &method, &path, &err, status);
                    Err(InternalError::from_response(err.to_string(), response).into())
                }
            }
        })
    }
}

/// Build the envelope response for `err`, currently answered with `status`
fn render_failure(
    config: &ErrorConfig,
    method: &Method,
    path: &str,
    err: &Error,
    status: StatusCode,
) -> HttpResponse {
    let status = resolve_status(status);

    let (message, trace, data) = match err.as_error::<ApiError>() {
        Some(api_error) => (
            api_error.message.clone(),
            api_error.trace(),
            api_error.data.clone(),
        ),
        None => (err.to_string(), format!("{:?}", err), None),
    };

    if status.is_server_error() {
        error!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            "{}",
            trace
        );
    } else {
        warn!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            "{}",
            message
        );
    }

    let envelope = ErrorEnvelope::new(message, trace, data, config.include_trace);
    HttpResponse::build(status).json(envelope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App};
    use serde_json::Value;
    use sf_shared::STACK_PLACEHOLDER;

    async fn failing() -> Result<HttpResponse, ApiError> {
        Err(ApiError::unhandled("Something broke"))
    }

    async fn teapot() -> Result<HttpResponse, ApiError> {
        Err(ApiError::new(StatusCode::IM_A_TEAPOT, "Short and stout"))
    }

    async fn fine() -> HttpResponse {
        HttpResponse::Ok().body("fine")
    }

    #[actix_web::test]
    async fn test_unset_status_becomes_500() {
        let app = test::init_service(
            App::new()
                .wrap(ErrorResponder::new(ErrorConfig::development()))
                .route("/", web::get().to(failing)),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Something broke");
        assert!(body["stack"].as_str().unwrap().contains("Something broke"));
        assert!(body["data"].is_null());
    }

    #[actix_web::test]
    async fn test_status_is_preserved_and_trace_hidden() {
        let app = test::init_service(
            App::new()
                .wrap(ErrorResponder::new(ErrorConfig::production()))
                .route("/", web::get().to(teapot)),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::IM_A_TEAPOT);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Short and stout");
        assert_eq!(body["stack"], STACK_PLACEHOLDER);
    }

    async fn echo(path: web::Path<String>) -> HttpResponse {
        HttpResponse::Ok().body(path.into_inner())
    }

    #[actix_web::test]
    async fn test_path_parameters_reach_handlers() {
        let app = test::init_service(
            App::new()
                .wrap(ErrorResponder::default())
                .service(web::scope("/items").route("/{id}", web::get().to(echo))),
        )
        .await;

        let req = test::TestRequest::get().uri("/items/42").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body(resp).await, "42");
    }

    #[actix_web::test]
    async fn test_middleware_errors_are_rendered() {
        let app = test::init_service(
            App::new()
                .wrap_fn(|_req, _srv| async {
                    Err::<ServiceResponse, Error>(
                        ApiError::new(StatusCode::CONFLICT, "Gate closed").into(),
                    )
                })
                .wrap(ErrorResponder::new(ErrorConfig::production()))
                .route("/", web::get().to(fine)),
        )
        .await;

        let err = test::try_call_service(&app, test::TestRequest::get().uri("/").to_request())
            .await
            .err()
            .unwrap();
        let resp = err.error_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let bytes = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "Gate closed");
        assert_eq!(body["stack"], STACK_PLACEHOLDER);
    }

    #[actix_web::test]
    async fn test_successful_responses_pass_through() {
        let app = test::init_service(
            App::new()
                .wrap(ErrorResponder::default())
                .route("/", web::get().to(fine)),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert_eq!(body, "fine");
    }
}
