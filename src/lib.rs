//! Product catalog and comparison service.
//!
//! Layers:
//! - [`domain`]: `Product`, the comparison engine and the repository port
//! - [`application`]: `ProductService` use cases
//! - [`infrastructure`]: JSON file repository
//! - [`api`]: axum routes, validation and response shaping

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logger;

use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use api::AppState;
pub use application::ProductService;
pub use config::Config;

/// Routes plus middleware. Used by `main` and by the integration tests.
pub fn build_app(service: ProductService) -> Router {
    api::router(AppState::new(service))
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
