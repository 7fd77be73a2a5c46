//! Orchestration of catalog operations over the repository traits.

pub mod category;
pub mod errors;
pub mod product;

pub use errors::{ServiceError, ServiceResult};
