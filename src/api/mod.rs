//! Driving adapter: the REST API under `/products`.

mod handlers;
pub mod mapper;
pub mod validation;

use axum::{Router, routing::get};

use crate::application::ProductService;

#[derive(Clone)]
pub struct AppState {
    pub service: ProductService,
}

impl AppState {
    pub fn new(service: ProductService) -> Self {
        Self { service }
    }
}

/// All routes, no middleware.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .merge(product_routes())
        .fallback(handlers::fallback)
        .with_state(state)
}

/// Every product route also answers with a trailing slash.
fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(handlers::list))
        .route("/products/", get(handlers::list))
        .route("/products/compare", get(handlers::compare))
        .route("/products/compare/", get(handlers::compare))
        .route("/products/:id", get(handlers::get_by_id))
        .route("/products/:id/", get(handlers::get_by_id))
}
