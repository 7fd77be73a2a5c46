use diesel::prelude::*;

use crate::domain::category::Category as DomainCategory;
use crate::domain::product::{NewProduct as DomainNewProduct, Product as DomainProduct};
use crate::domain::types::{
    CategoryId, Description, ProductId, ProductName, ProductPrice, StockQuantity,
    TypeConstraintError,
};
use crate::models::category::Category as DbCategory;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::produtos)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::product::Product`].
pub struct Product {
    pub id: i32,
    pub nome: String,
    pub descricao: Option<String>,
    pub preco_centavos: i64,
    pub estoque: i32,
    pub categoria_id: Option<i32>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::produtos)]
/// Insertable form of [`Product`].
pub struct NewProduct<'a> {
    pub nome: &'a str,
    pub descricao: Option<&'a str>,
    pub preco_centavos: i64,
    pub estoque: i32,
    pub categoria_id: Option<i32>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::produtos)]
#[diesel(treat_none_as_null = true)]
/// Full set of mutable columns written when saving a [`Product`].
pub struct UpdateProduct<'a> {
    pub nome: &'a str,
    pub descricao: Option<&'a str>,
    pub preco_centavos: i64,
    pub estoque: i32,
    pub categoria_id: Option<i32>,
}

/// Row produced by the `produtos LEFT JOIN categorias` query.
pub type ProductWithCategory = (Product, Option<DbCategory>);

impl TryFrom<ProductWithCategory> for DomainProduct {
    type Error = TypeConstraintError;

    fn try_from((product, category): ProductWithCategory) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ProductId::new(product.id)?,
            name: ProductName::new(product.nome)?,
            description: product.descricao.map(Description::from),
            price: ProductPrice::from_cents(product.preco_centavos)?,
            stock: StockQuantity::new(product.estoque)?,
            category_id: product.categoria_id.map(CategoryId::new).transpose()?,
            category: category.map(DomainCategory::try_from).transpose()?,
        })
    }
}

impl<'a> From<&'a DomainNewProduct> for NewProduct<'a> {
    fn from(product: &'a DomainNewProduct) -> Self {
        Self {
            nome: product.name.as_str(),
            descricao: product.description.as_ref().map(|d| d.as_str()),
            preco_centavos: product.price.cents(),
            estoque: product.stock.get(),
            categoria_id: product.category_id.map(CategoryId::get),
        }
    }
}

impl<'a> From<&'a DomainProduct> for UpdateProduct<'a> {
    fn from(product: &'a DomainProduct) -> Self {
        Self {
            nome: product.name.as_str(),
            descricao: product.description.as_ref().map(|d| d.as_str()),
            preco_centavos: product.price.cents(),
            estoque: product.stock.get(),
            categoria_id: product.category_id.map(CategoryId::get),
        }
    }
}
