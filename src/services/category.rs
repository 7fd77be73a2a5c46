use log::{error, info};

use crate::domain::category::{Category, NewCategory, UpdateCategory};
use crate::domain::types::CategoryId;
use crate::dto::category::{CategoriesQuery, CategorySearchQuery};
use crate::forms::category::{CreateCategoryForm, UpdateCategoryForm};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, PageRequest, Paginated, normalize_search};
use crate::repository::{CategoryListQuery, CategoryReader, CategoryWriter};
use crate::services::{ServiceError, ServiceResult};

pub(crate) fn category_not_found(id: i32) -> ServiceError {
    ServiceError::NotFound(format!("Categoria {id} not found"))
}

fn search_query(search: Option<String>) -> CategoryListQuery {
    match normalize_search(search) {
        Some(term) => CategoryListQuery::new().search(term),
        None => CategoryListQuery::new(),
    }
}

/// Lists categories matching the optional search term, paginated when the
/// caller asks for a page or a limit.
pub fn list_categories<R>(repo: &R, params: CategoriesQuery) -> ServiceResult<Paginated<Category>>
where
    R: CategoryReader + ?Sized,
{
    let page = PageRequest::resolve(
        params.page.as_deref(),
        params.limit.as_deref(),
        DEFAULT_ITEMS_PER_PAGE,
    );

    let (total, categories) = repo
        .list_categories(search_query(params.search).page(page))
        .map_err(|err| {
            error!("Failed to list categories: {err}");
            err
        })?;

    Ok(Paginated::new(categories, total, page))
}

/// Returns every matching category without a pagination envelope.
pub fn list_all_categories<R>(repo: &R, params: CategorySearchQuery) -> ServiceResult<Vec<Category>>
where
    R: CategoryReader + ?Sized,
{
    let (_total, categories) = repo
        .list_categories(search_query(params.search))
        .map_err(|err| {
            error!("Failed to list categories: {err}");
            err
        })?;

    Ok(categories)
}

/// Fetches a category, failing with [`ServiceError::NotFound`] when absent.
pub fn get_category<R>(repo: &R, id: i32) -> ServiceResult<Category>
where
    R: CategoryReader + ?Sized,
{
    let category_id = CategoryId::new(id).map_err(|_| category_not_found(id))?;

    repo.get_category_by_id(category_id)
        .map_err(ServiceError::from)?
        .ok_or_else(|| category_not_found(id))
}

pub fn create_category<R>(repo: &R, form: CreateCategoryForm) -> ServiceResult<Category>
where
    R: CategoryWriter + ?Sized,
{
    let new_category =
        NewCategory::try_from(form).map_err(|err| ServiceError::Form(err.to_string()))?;

    let category = repo.create_category(&new_category).map_err(|err| {
        error!("Failed to create category: {err}");
        err
    })?;

    info!("Created category {}", category.id);
    Ok(category)
}

/// Applies the fields present in `form` to an existing category.
pub fn update_category<R>(repo: &R, id: i32, form: UpdateCategoryForm) -> ServiceResult<Category>
where
    R: CategoryReader + CategoryWriter + ?Sized,
{
    let update =
        UpdateCategory::try_from(form).map_err(|err| ServiceError::Form(err.to_string()))?;

    let mut category = get_category(repo, id)?;
    if update.is_empty() {
        return Ok(category);
    }

    category.apply_update(update);

    repo.update_category(&category).map_err(|err| {
        error!("Failed to update category {id}: {err}");
        ServiceError::from(err)
    })
}

/// Deletes a category. Products referencing it lose their category.
pub fn delete_category<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: CategoryReader + CategoryWriter + ?Sized,
{
    let category = get_category(repo, id)?;

    repo.delete_category(category.id).map_err(|err| {
        error!("Failed to delete category {id}: {err}");
        ServiceError::from(err)
    })?;

    info!("Deleted category {id}");
    Ok(())
}
