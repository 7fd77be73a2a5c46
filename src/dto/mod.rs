//! DTO modules that bridge services with the JSON API.

use serde::Serialize;

pub mod category;
pub mod product;

/// Body returned with every non-2xx answer.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status_code: u16,
    pub message: String,
    pub error: String,
}
