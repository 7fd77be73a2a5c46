//! Repository implementation for catalog products.

use diesel::prelude::*;
use diesel::sqlite::{Sqlite, SqliteConnection};

use crate::{
    db::unicode_lower,
    domain::{
        product::{NewProduct, Product},
        types::{CategoryId, ProductId},
    },
    models::product::{
        NewProduct as DbNewProduct, ProductWithCategory, UpdateProduct as DbUpdateProduct,
    },
    repository::{
        DieselRepository, ProductListQuery, ProductReader, ProductWriter, LIKE_ESCAPE,
        errors::{RepositoryError, RepositoryResult},
        like_pattern,
    },
};

/// Loads one product together with its category, if any.
fn load_product(conn: &mut SqliteConnection, id: i32) -> QueryResult<ProductWithCategory> {
    use crate::schema::{categorias, produtos};

    produtos::table
        .left_join(categorias::table)
        .filter(produtos::id.eq(id))
        .select((produtos::all_columns, categorias::all_columns.nullable()))
        .first::<ProductWithCategory>(conn)
}

impl ProductReader for DieselRepository {
    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        let mut conn = self.conn()?;
        let row = load_product(&mut conn, id.get()).optional()?;

        row.map(Product::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }

    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)> {
        use crate::schema::{categorias, produtos};

        let mut conn = self.conn()?;
        let pattern = query.search.as_deref().map(like_pattern);
        let category_id = query.category_id.map(CategoryId::get);

        // LEFT JOIN on a many-to-one key: one row per product, category or not.
        let query_builder = || {
            let mut items = produtos::table
                .left_join(categorias::table)
                .into_boxed::<Sqlite>();

            if let Some(pattern) = &pattern {
                items = items.filter(
                    unicode_lower(produtos::nome.nullable())
                        .like(pattern.clone())
                        .escape(LIKE_ESCAPE),
                );
            }
            if let Some(category_id) = category_id {
                items = items.filter(produtos::categoria_id.eq(category_id));
            }
            items
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = query_builder()
            .select((produtos::all_columns, categorias::all_columns.nullable()))
            .order(produtos::id.desc());
        if let Some((offset, limit)) = query.page.offset_limit() {
            items = items.offset(offset).limit(limit);
        }

        let products = items
            .load::<ProductWithCategory>(&mut conn)?
            .into_iter()
            .map(Product::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((total, products))
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product> {
        use crate::schema::produtos;

        let mut conn = self.conn()?;
        let db_new_product: DbNewProduct = new_product.into();

        let row = conn.transaction::<_, diesel::result::Error, _>(|conn| {
            let id = diesel::insert_into(produtos::table)
                .values(&db_new_product)
                .returning(produtos::id)
                .get_result::<i32>(conn)?;

            load_product(conn, id)
        })?;

        Ok(Product::try_from(row)?)
    }

    fn update_product(&self, product: &Product) -> RepositoryResult<Product> {
        use crate::schema::produtos;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateProduct = product.into();
        let id = product.id.get();

        let row = conn.transaction::<_, diesel::result::Error, _>(|conn| {
            diesel::update(produtos::table.find(id))
                .set(&db_updates)
                .execute(conn)?;

            load_product(conn, id)
        })?;

        Ok(Product::try_from(row)?)
    }

    fn delete_product(&self, id: ProductId) -> RepositoryResult<()> {
        use crate::schema::produtos;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(produtos::table.find(id.get())).execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
