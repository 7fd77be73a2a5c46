use log::{error, info};

use crate::domain::product::{NewProduct, Product, UpdateProduct};
use crate::domain::types::{CategoryId, ProductId};
use crate::dto::product::ProductsQuery;
use crate::forms::product::{CreateProductForm, UpdateProductForm};
use crate::pagination::{
    DEFAULT_ITEMS_PER_PAGE, PageRequest, Paginated, normalize_search, parse_id_filter,
};
use crate::repository::{CategoryReader, ProductListQuery, ProductReader, ProductWriter};
use crate::services::category::category_not_found;
use crate::services::{ServiceError, ServiceResult};

fn product_not_found(id: i32) -> ServiceError {
    ServiceError::NotFound(format!("Produto {id} not found"))
}

/// A product may only point at a category that exists at write time.
fn ensure_category_exists<R>(repo: &R, category_id: CategoryId) -> ServiceResult<()>
where
    R: CategoryReader + ?Sized,
{
    match repo.get_category_by_id(category_id)? {
        Some(_) => Ok(()),
        None => Err(category_not_found(category_id.get())),
    }
}

/// Lists products with their categories, newest first.
pub fn list_products<R>(repo: &R, params: ProductsQuery) -> ServiceResult<Paginated<Product>>
where
    R: ProductReader + ?Sized,
{
    let page = PageRequest::resolve(
        params.page.as_deref(),
        params.limit.as_deref(),
        DEFAULT_ITEMS_PER_PAGE,
    );

    let mut query = ProductListQuery::new().page(page);
    if let Some(term) = normalize_search(params.search) {
        query = query.search(term);
    }
    if let Some(category_id) = parse_id_filter(params.category_id.as_deref())
        .and_then(|id| CategoryId::new(id).ok())
    {
        query = query.category_id(category_id);
    }

    let (total, products) = repo.list_products(query).map_err(|err| {
        error!("Failed to list products: {err}");
        err
    })?;

    Ok(Paginated::new(products, total, page))
}

/// Fetches a product, failing with [`ServiceError::NotFound`] when absent.
pub fn get_product<R>(repo: &R, id: i32) -> ServiceResult<Product>
where
    R: ProductReader + ?Sized,
{
    let product_id = ProductId::new(id).map_err(|_| product_not_found(id))?;

    repo.get_product_by_id(product_id)
        .map_err(ServiceError::from)?
        .ok_or_else(|| product_not_found(id))
}

pub fn create_product<R>(repo: &R, form: CreateProductForm) -> ServiceResult<Product>
where
    R: CategoryReader + ProductWriter + ?Sized,
{
    let new_product =
        NewProduct::try_from(form).map_err(|err| ServiceError::Form(err.to_string()))?;

    if let Some(category_id) = new_product.category_id {
        ensure_category_exists(repo, category_id)?;
    }

    let product = repo.create_product(&new_product).map_err(|err| {
        error!("Failed to create product: {err}");
        err
    })?;

    info!("Created product {}", product.id);
    Ok(product)
}

/// Applies the fields present in `form` to an existing product.
pub fn update_product<R>(repo: &R, id: i32, form: UpdateProductForm) -> ServiceResult<Product>
where
    R: CategoryReader + ProductReader + ProductWriter + ?Sized,
{
    let update =
        UpdateProduct::try_from(form).map_err(|err| ServiceError::Form(err.to_string()))?;

    let mut product = get_product(repo, id)?;

    if let Some(Some(category_id)) = update.category_id {
        ensure_category_exists(repo, category_id)?;
    }

    product.apply_update(update);

    repo.update_product(&product).map_err(|err| {
        error!("Failed to update product {id}: {err}");
        ServiceError::from(err)
    })
}

pub fn delete_product<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: ProductReader + ProductWriter + ?Sized,
{
    let product = get_product(repo, id)?;

    repo.delete_product(product.id).map_err(|err| {
        error!("Failed to delete product {id}: {err}");
        ServiceError::from(err)
    })?;

    info!("Deleted product {id}");
    Ok(())
}
