//! JSON payloads accepted by the catalog write endpoints.

use serde::{Deserialize, Deserializer};
use thiserror::Error;
use validator::ValidationErrors;

pub mod category;
pub mod product;

#[derive(Debug, Error)]
/// Errors that can occur when processing payload data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid name")]
    InvalidName,

    #[error("invalid price")]
    InvalidPrice,

    #[error("invalid stock quantity")]
    InvalidStock,

    #[error("invalid category id")]
    InvalidCategoryId,
}

/// Keeps an explicit `null` apart from an omitted field: omitted stays `None`
/// (through `#[serde(default)]`), `null` becomes `Some(None)`.
pub(crate) fn deserialize_nullable<'de, D, T>(
    deserializer: D,
) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
