//! # Storefront API
//!
//! Actix-web layer of the storefront admin backend: catalog and image
//! routes, the request validation gate, the not-found trap and the error
//! responder that renders every failure as `{message, stack, data}`.

pub mod app;
pub mod config;
pub mod dto;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::{create_app, AppState};
pub use errors::ApiError;
