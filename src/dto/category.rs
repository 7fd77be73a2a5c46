//! DTOs exposed by the category endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::category::Category;

/// Query parameters accepted by `GET /categorias`.
///
/// Numbers are kept as raw strings so malformed values can be ignored.
#[derive(Debug, Default, Deserialize)]
pub struct CategoriesQuery {
    pub search: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Query parameters accepted by `GET /categorias/simple/all`.
#[derive(Debug, Default, Deserialize)]
pub struct CategorySearchQuery {
    pub search: Option<String>,
}

/// Category as rendered on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub id: i32,
    pub nome: String,
    pub descricao: Option<String>,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.get(),
            nome: category.name.into_inner(),
            descricao: category.description.map(|d| d.into_inner()),
        }
    }
}
