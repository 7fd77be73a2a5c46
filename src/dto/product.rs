//! DTOs exposed by the product endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::product::Product;
use crate::dto::category::CategoryResponse;

/// Query parameters accepted by `GET /produtos`.
///
/// Numbers are kept as raw strings so malformed values can be ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ProductsQuery {
    pub search: Option<String>,
    #[serde(rename = "categoriaId", alias = "categoryId")]
    pub category_id: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Product as rendered on the wire, with its category inlined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: i32,
    pub nome: String,
    pub descricao: Option<String>,
    pub preco: Decimal,
    pub estoque: i32,
    #[serde(rename = "categoriaId")]
    pub categoria_id: Option<i32>,
    pub categoria: Option<CategoryResponse>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.get(),
            nome: product.name.into_inner(),
            descricao: product.description.map(|d| d.into_inner()),
            preco: product.price.amount(),
            estoque: product.stock.get(),
            categoria_id: product.category_id.map(|id| id.get()),
            categoria: product.category.map(CategoryResponse::from),
        }
    }
}
