use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        category::{Category, NewCategory},
        product::{NewProduct, Product},
        types::{CategoryId, ProductId},
    },
    pagination::PageRequest,
    repository::errors::RepositoryResult,
};

pub mod category;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod product;

/// Diesel-backed store handle shared by every request.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryListQuery {
    /// Case-insensitive substring matched against name or description.
    pub search: Option<String>,
    pub page: PageRequest,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductListQuery {
    /// Case-insensitive substring matched against the product name.
    pub search: Option<String>,
    pub category_id: Option<CategoryId>,
    pub page: PageRequest,
}

impl CategoryListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn paginate(mut self, page: usize, limit: usize) -> Self {
        self.page = PageRequest::Paginated { page, limit };
        self
    }

    pub fn page(mut self, page: PageRequest) -> Self {
        self.page = page;
        self
    }
}

impl ProductListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn category_id(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn paginate(mut self, page: usize, limit: usize) -> Self {
        self.page = PageRequest::Paginated { page, limit };
        self
    }

    pub fn page(mut self, page: PageRequest) -> Self {
        self.page = page;
        self
    }
}

pub trait CategoryReader {
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
    /// Returns the number of matches ignoring pagination, and the requested slice.
    fn list_categories(&self, query: CategoryListQuery)
    -> RepositoryResult<(usize, Vec<Category>)>;
}

pub trait CategoryWriter {
    fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
    /// Persists every mutable column of `category`.
    fn update_category(&self, category: &Category) -> RepositoryResult<Category>;
    /// Deletes the category and clears the reference on every product using it.
    fn delete_category(&self, id: CategoryId) -> RepositoryResult<()>;
}

pub trait ProductReader {
    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>>;
    /// Returns the number of matches ignoring pagination, and the requested slice.
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
}

pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    /// Persists every mutable column of `product`.
    fn update_product(&self, product: &Product) -> RepositoryResult<Product>;
    fn delete_product(&self, id: ProductId) -> RepositoryResult<()>;
}

/// Escape character used with [`like_pattern`].
const LIKE_ESCAPE: char = '\\';

/// Builds a `LIKE` pattern matching `term` as a literal substring of a
/// [`unicode_lower`](crate::db::unicode_lower)-ed column.
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.to_lowercase().chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
