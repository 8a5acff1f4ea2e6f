//! Driven adapters.

mod json_repository;

pub use json_repository::{JsonProductRepository, RepositoryError};
