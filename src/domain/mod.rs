//! Domain layer: entities, the comparison engine and the repository port.

mod comparison;
pub(crate) mod json_number;
mod product;
mod repository;

pub use comparison::{ComparisonDetails, ProductComparison};
pub use product::{MAX_RATING, MIN_RATING, Product, ProductError, Specs};
pub use repository::ProductRepository;
