//! Product use cases
//!
//! `ProductService` orchestrates the repository and the comparison engine.
//! Absence of a product is raised here as [`ServiceError::ProductNotFound`]
//! so the HTTP boundary can tell it apart from internal failures.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::{Product, ProductComparison, ProductRepository};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    #[error("{message}")]
    ProductNotFound { id: String, message: String },
}

impl ServiceError {
    fn not_found(id: &str) -> Self {
        Self::ProductNotFound {
            id: id.to_string(),
            message: format!("Producto con id {id} no encontrado"),
        }
    }

    fn not_found_for_comparison(id: &str) -> Self {
        Self::ProductNotFound {
            id: id.to_string(),
            message: format!("Producto con id {id} no fue encontrado para la comparación"),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub fn get_all_products(&self) -> &[Product] {
        self.repository.find_all()
    }

    pub fn get_product_by_id(&self, id: &str) -> ServiceResult<&Product> {
        self.repository
            .find_by_id(id)
            .ok_or_else(|| ServiceError::not_found(id))
    }

    /// Compare two products. When both are missing, `id1` is reported.
    pub fn compare_products(&self, id1: &str, id2: &str) -> ServiceResult<ProductComparison<'_>> {
        let product1 = self
            .repository
            .find_by_id(id1)
            .ok_or_else(|| ServiceError::not_found_for_comparison(id1))?;
        let product2 = self
            .repository
            .find_by_id(id2)
            .ok_or_else(|| ServiceError::not_found_for_comparison(id2))?;

        Ok(ProductComparison::new(product1, product2))
    }

    pub fn product_count(&self) -> usize {
        self.repository.find_all().len()
    }
}
