use actix_web::{HttpResponse, Responder, delete, get, patch, post, web};

use crate::dto::category::{CategoriesQuery, CategoryResponse, CategorySearchQuery};
use crate::forms::category::{CreateCategoryForm, UpdateCategoryForm};
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::category as service;

#[get("/categorias")]
pub async fn list_categories(
    params: web::Query<CategoriesQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match service::list_categories(repo.get_ref(), params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page.map(CategoryResponse::from)),
        Err(e) => service_error_response(e),
    }
}

/// Every matching category as a plain array, for selection lists.
#[get("/categorias/simple/all")]
pub async fn list_all_categories(
    params: web::Query<CategorySearchQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match service::list_all_categories(repo.get_ref(), params.into_inner()) {
        Ok(categories) => HttpResponse::Ok().json(
            categories
                .into_iter()
                .map(CategoryResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => service_error_response(e),
    }
}

#[get("/categorias/{id}")]
pub async fn show_category(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match service::get_category(repo.get_ref(), id.into_inner()) {
        Ok(category) => HttpResponse::Ok().json(CategoryResponse::from(category)),
        Err(e) => service_error_response(e),
    }
}

#[post("/categorias")]
pub async fn create_category(
    form: web::Json<CreateCategoryForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match service::create_category(repo.get_ref(), form.into_inner()) {
        Ok(category) => HttpResponse::Created().json(CategoryResponse::from(category)),
        Err(e) => service_error_response(e),
    }
}

#[patch("/categorias/{id}")]
pub async fn update_category(
    id: web::Path<i32>,
    form: web::Json<UpdateCategoryForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match service::update_category(repo.get_ref(), id.into_inner(), form.into_inner()) {
        Ok(category) => HttpResponse::Ok().json(CategoryResponse::from(category)),
        Err(e) => service_error_response(e),
    }
}

#[delete("/categorias/{id}")]
pub async fn delete_category(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match service::delete_category(repo.get_ref(), id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => service_error_response(e),
    }
}
