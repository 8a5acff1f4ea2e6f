//! Application layer: use cases over the repository port.

mod product_service;

pub use product_service::{ProductService, ServiceError, ServiceResult};
