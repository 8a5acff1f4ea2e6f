//! Product entity
//!
//! A `Product` validates itself on construction and is immutable afterwards:
//! every field is private and only exposed through read-only accessors.

use indexmap::IndexMap;
use thiserror::Error;

/// Specification name -> value, in source order.
pub type Specs = IndexMap<String, String>;

pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 5.0;

/// Invariant violations raised while building a [`Product`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProductError {
    #[error("El ID del producto es obligatorio.")]
    MissingId,

    #[error("El precio no puede ser negativo.")]
    NegativePrice(f64),

    #[error("El rating debe estar entre 0 y 5.")]
    RatingOutOfRange(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: String,
    name: String,
    price: f64,
    rating: f64,
    image_url: String,
    description: String,
    specs: Specs,
}

impl Product {
    /// Build a product, rejecting an empty id, a negative price or a rating
    /// outside `[0, 5]`. NaN values never satisfy the range checks.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        rating: f64,
        image_url: impl Into<String>,
        description: impl Into<String>,
        specs: Specs,
    ) -> Result<Self, ProductError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ProductError::MissingId);
        }
        if price.is_nan() || price < 0.0 {
            return Err(ProductError::NegativePrice(price));
        }
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(ProductError::RatingOutOfRange(rating));
        }

        Ok(Self {
            id,
            name: name.into(),
            price,
            rating,
            image_url: image_url.into(),
            description: description.into(),
            specs,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn specs(&self) -> &Specs {
        &self.specs
    }

    /// Value of a spec, treating an empty string the same as a missing key.
    pub fn spec(&self, key: &str) -> Option<&str> {
        self.specs
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}
