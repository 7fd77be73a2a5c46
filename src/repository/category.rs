//! Repository implementation for catalog categories.

use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::{
    db::unicode_lower,
    domain::{
        category::{Category, NewCategory},
        types::CategoryId,
    },
    models::category::{
        Category as DbCategory, NewCategory as DbNewCategory, UpdateCategory as DbUpdateCategory,
    },
    repository::{
        CategoryListQuery, CategoryReader, CategoryWriter, DieselRepository, LIKE_ESCAPE,
        errors::{RepositoryError, RepositoryResult},
        like_pattern,
    },
};

impl CategoryReader for DieselRepository {
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        use crate::schema::categorias;

        let mut conn = self.conn()?;
        let db_category = categorias::table
            .find(id.get())
            .first::<DbCategory>(&mut conn)
            .optional()?;

        db_category
            .map(Category::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }

    fn list_categories(
        &self,
        query: CategoryListQuery,
    ) -> RepositoryResult<(usize, Vec<Category>)> {
        use crate::schema::categorias;

        let mut conn = self.conn()?;
        let pattern = query.search.as_deref().map(like_pattern);

        let query_builder = || {
            let mut items = categorias::table.into_boxed::<Sqlite>();

            if let Some(pattern) = &pattern {
                items = items.filter(
                    unicode_lower(categorias::nome.nullable())
                        .like(pattern.clone())
                        .escape(LIKE_ESCAPE)
                        .or(unicode_lower(categorias::descricao)
                            .like(pattern.clone())
                            .escape(LIKE_ESCAPE)),
                );
            }
            items
        };

        // Count before slicing so the envelope reflects every match.
        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = query_builder().order(categorias::id.asc());
        if let Some((offset, limit)) = query.page.offset_limit() {
            items = items.offset(offset).limit(limit);
        }

        let categories = items
            .load::<DbCategory>(&mut conn)?
            .into_iter()
            .map(Category::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((total, categories))
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category> {
        use crate::schema::categorias;

        let mut conn = self.conn()?;
        let db_new_category: DbNewCategory = new_category.into();

        let created = diesel::insert_into(categorias::table)
            .values(&db_new_category)
            .get_result::<DbCategory>(&mut conn)?;

        Ok(Category::try_from(created)?)
    }

    fn update_category(&self, category: &Category) -> RepositoryResult<Category> {
        use crate::schema::categorias;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateCategory = category.into();

        let updated = diesel::update(categorias::table.find(category.id.get()))
            .set(&db_updates)
            .get_result::<DbCategory>(&mut conn)?;

        Ok(Category::try_from(updated)?)
    }

    fn delete_category(&self, id: CategoryId) -> RepositoryResult<()> {
        use crate::schema::{categorias, produtos};

        let mut conn = self.conn()?;

        // ON DELETE SET NULL only fires with `foreign_keys` enabled.
        let deleted = conn.transaction::<usize, diesel::result::Error, _>(|conn| {
            diesel::update(produtos::table.filter(produtos::categoria_id.eq(id.get())))
                .set(produtos::categoria_id.eq(None::<i32>))
                .execute(conn)?;

            diesel::delete(categorias::table.find(id.get())).execute(conn)
        })?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
