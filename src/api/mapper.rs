//! Domain -> API response shapes

use serde::Serialize;

use crate::domain::json_number;
use crate::domain::{ComparisonDetails, Product, ProductComparison, Specs};

pub const CURRENCY: &str = "COP";
pub const CATEGORY: &str = "General";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    #[serde(serialize_with = "json_number::serialize")]
    pub price: f64,
    pub currency: &'static str,
    #[serde(serialize_with = "json_number::serialize")]
    pub rating: f64,
    pub category: &'static str,
    pub image: String,
    pub description: String,
    pub specs: Specs,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonDto {
    pub product1: ProductDto,
    pub product2: ProductDto,
    pub comparison: ComparisonDetails,
}

impl From<&Product> for ProductDto {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id().to_string(),
            name: product.name().to_string(),
            price: product.price(),
            currency: CURRENCY,
            rating: product.rating(),
            category: CATEGORY,
            image: product.image_url().to_string(),
            description: product.description().to_string(),
            specs: product.specs().clone(),
        }
    }
}

impl From<ProductComparison<'_>> for ComparisonDto {
    fn from(result: ProductComparison<'_>) -> Self {
        Self {
            product1: result.product1.into(),
            product2: result.product2.into(),
            comparison: result.comparison,
        }
    }
}
