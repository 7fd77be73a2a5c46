//! Database models shared across the catalog repository.

pub mod category;
pub mod config;
pub mod product;
