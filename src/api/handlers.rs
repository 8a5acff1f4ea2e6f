//! Product HTTP handlers

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
};
use serde_json::{Value, json};

use super::AppState;
use super::mapper::{ComparisonDto, ProductDto};
use super::validation::{
    Location, unreadable_param, validate_compare_products, validate_get_product_by_id,
};
use crate::error::{AppError, AppResult, ROUTE_NOT_FOUND_MESSAGE};

/// Raw query pairs. Repeated keys are legal; the first occurrence wins.
type QueryPairs = Vec<(String, String)>;

fn first_value<'a>(pairs: &'a QueryPairs, key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "products": state.service.product_count(),
    }))
}

/// GET /products
pub async fn list(State(state): State<AppState>) -> Json<Vec<ProductDto>> {
    let products = state
        .service
        .get_all_products()
        .iter()
        .map(ProductDto::from)
        .collect();
    Json(products)
}

/// GET /products/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> AppResult<Json<ProductDto>> {
    let Path(id) = id.map_err(|e| {
        tracing::warn!(error = %e, "Unreadable path parameter");
        unreadable_param("id", Location::Params)
    })?;
    validate_get_product_by_id(&id)?;

    let product = state.service.get_product_by_id(&id)?;
    Ok(Json(product.into()))
}

/// GET /products/compare?id1=..&id2=..
pub async fn compare(
    State(state): State<AppState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> AppResult<Json<ComparisonDto>> {
    let Query(pairs) = query.map_err(|e| {
        tracing::warn!(error = %e, "Unreadable query string");
        unreadable_param("id1", Location::Query)
    })?;
    let (id1, id2) = (first_value(&pairs, "id1"), first_value(&pairs, "id2"));
    validate_compare_products(id1, id2)?;

    // Both are present and non-empty once validation passed.
    let comparison = state
        .service
        .compare_products(id1.unwrap_or_default(), id2.unwrap_or_default())?;
    Ok(Json(comparison.into()))
}

pub async fn fallback() -> AppError {
    AppError::NotFound(ROUTE_NOT_FOUND_MESSAGE.to_string())
}
