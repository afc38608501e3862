//! Shared setup for API integration tests

use actix_web::web;
use std::sync::Arc;

use sf_api::AppState;
use sf_core::{InMemoryCatalog, InMemoryMediaStore};
use sf_shared::{AppConfig, Environment};

pub const UNKNOWN_ID: &str = "507f1f77bcf86cd799439011";

pub struct TestContext {
    pub state: web::Data<AppState>,
    pub media: Arc<InMemoryMediaStore>,
}

pub fn context() -> TestContext {
    let media = Arc::new(InMemoryMediaStore::new());
    let state = web::Data::new(AppState::new(
        Arc::new(InMemoryCatalog::new()),
        media.clone(),
    ));
    TestContext { state, media }
}

pub fn config(environment: Environment) -> AppConfig {
    AppConfig {
        environment,
        ..AppConfig::default()
    }
}
