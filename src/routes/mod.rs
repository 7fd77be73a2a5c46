//! HTTP handlers for the catalog API.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, error, web};
use log::error;

use crate::dto::ErrorResponse;
use crate::services::ServiceError;

pub mod category;
pub mod product;

/// Registers every catalog endpoint on `cfg`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        let response = error_response(StatusCode::BAD_REQUEST, err.to_string());
        error::InternalError::from_response(err, response).into()
    }))
    .service(category::list_categories)
    .service(category::list_all_categories)
    .service(category::show_category)
    .service(category::create_category)
    .service(category::update_category)
    .service(category::delete_category)
    .service(product::list_products)
    .service(product::show_product)
    .service(product::create_product)
    .service(product::update_product)
    .service(product::delete_product);
}

/// JSON error body with the given status.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        status_code: status.as_u16(),
        message: message.into(),
        error: status
            .canonical_reason()
            .unwrap_or("Unknown Error")
            .to_string(),
    })
}

/// Maps a service failure onto its HTTP status.
pub fn service_error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound(message) => error_response(StatusCode::NOT_FOUND, message),
        ServiceError::Form(message) => error_response(StatusCode::BAD_REQUEST, message),
        ServiceError::Repository(err) => {
            error!("Repository failure: {err}");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
            )
        }
    }
}
