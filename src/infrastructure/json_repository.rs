//! JSON file product repository
//!
//! Reads a JSON array of product records once, validates each record into a
//! [`Product`] and keeps the list for the lifetime of the process. Any load
//! failure is logged and leaves the repository empty.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::{Product, ProductError, ProductRepository, Specs};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed product data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid product at index {index}: {source}")]
    InvalidProduct {
        index: usize,
        #[source]
        source: ProductError,
    },
}

/// Record layout of the data file.
#[derive(Debug, Deserialize)]
struct RawProduct {
    id: String,
    name: String,
    price: f64,
    rating: f64,
    #[serde(default)]
    image_url: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    specs: Specs,
}

impl RawProduct {
    fn into_product(self) -> Result<Product, ProductError> {
        Product::new(
            self.id,
            self.name,
            self.price,
            self.rating,
            self.image_url,
            self.description,
            self.specs,
        )
    }
}

#[derive(Debug, Default)]
pub struct JsonProductRepository {
    products: Vec<Product>,
}

impl JsonProductRepository {
    /// Load products from `path`. Never fails: errors are logged and the
    /// repository comes up empty.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::read_products(path) {
            Ok(products) => {
                tracing::info!(path = %path.display(), count = products.len(), "Products loaded");
                Self { products }
            }
            Err(e) => {
                tracing::error!(
                    path = %path.display(),
                    error = %e,
                    "Error loading products from JSON"
                );
                Self::default()
            }
        }
    }

    /// Parse a JSON document into validated products.
    pub fn parse(content: &str) -> Result<Vec<Product>, RepositoryError> {
        let raw: Vec<RawProduct> = serde_json::from_str(content)?;
        raw.into_iter()
            .enumerate()
            .map(|(index, record)| {
                record
                    .into_product()
                    .map_err(|source| RepositoryError::InvalidProduct { index, source })
            })
            .collect()
    }

    fn read_products(path: &Path) -> Result<Vec<Product>, RepositoryError> {
        let content = std::fs::read_to_string(path).map_err(|source| RepositoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl From<Vec<Product>> for JsonProductRepository {
    fn from(products: Vec<Product>) -> Self {
        Self { products }
    }
}

impl ProductRepository for JsonProductRepository {
    fn find_all(&self) -> &[Product] {
        &self.products
    }
}
