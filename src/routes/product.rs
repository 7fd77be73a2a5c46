use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::product::{ProductResponse, ProductsQuery};
use crate::forms::product::{CreateProductForm, UpdateProductForm};
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::product as service;

#[get("/produtos")]
pub async fn list_products(
    params: web::Query<ProductsQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match service::list_products(repo.get_ref(), params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page.map(ProductResponse::from)),
        Err(e) => service_error_response(e),
    }
}

#[get("/produtos/{id}")]
pub async fn show_product(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match service::get_product(repo.get_ref(), id.into_inner()) {
        Ok(product) => HttpResponse::Ok().json(ProductResponse::from(product)),
        Err(e) => service_error_response(e),
    }
}

#[post("/produtos")]
pub async fn create_product(
    form: web::Json<CreateProductForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match service::create_product(repo.get_ref(), form.into_inner()) {
        Ok(product) => HttpResponse::Created().json(ProductResponse::from(product)),
        Err(e) => service_error_response(e),
    }
}

#[put("/produtos/{id}")]
pub async fn update_product(
    id: web::Path<i32>,
    form: web::Json<UpdateProductForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match service::update_product(repo.get_ref(), id.into_inner(), form.into_inner()) {
        Ok(product) => HttpResponse::Ok().json(ProductResponse::from(product)),
        Err(e) => service_error_response(e),
    }
}

#[delete("/produtos/{id}")]
pub async fn delete_product(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match service::delete_product(repo.get_ref(), id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => service_error_response(e),
    }
}
