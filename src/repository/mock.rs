//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::category::{Category, NewCategory};
use crate::domain::product::{NewProduct, Product};
use crate::domain::types::{CategoryId, ProductId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    CategoryListQuery, CategoryReader, CategoryWriter, ProductListQuery, ProductReader,
    ProductWriter,
};

mock! {
    pub Repository {}

    impl CategoryReader for Repository {
        fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
        fn list_categories(
            &self,
            query: CategoryListQuery,
        ) -> RepositoryResult<(usize, Vec<Category>)>;
    }

    impl CategoryWriter for Repository {
        fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
        fn update_category(&self, category: &Category) -> RepositoryResult<Category>;
        fn delete_category(&self, id: CategoryId) -> RepositoryResult<()>;
    }

    impl ProductReader for Repository {
        fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
    }

    impl ProductWriter for Repository {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn update_product(&self, product: &Product) -> RepositoryResult<Product>;
        fn delete_product(&self, id: ProductId) -> RepositoryResult<()>;
    }
}
