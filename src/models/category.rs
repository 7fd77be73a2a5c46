use diesel::prelude::*;

use crate::domain::category::{Category as DomainCategory, NewCategory as DomainNewCategory};
use crate::domain::types::{CategoryId, CategoryName, Description, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::categorias)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::category::Category`].
pub struct Category {
    pub id: i32,
    pub nome: String,
    pub descricao: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::categorias)]
/// Insertable form of [`Category`].
pub struct NewCategory<'a> {
    pub nome: &'a str,
    pub descricao: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::categorias)]
#[diesel(treat_none_as_null = true)]
/// Full set of mutable columns written when saving a [`Category`].
pub struct UpdateCategory<'a> {
    pub nome: &'a str,
    pub descricao: Option<&'a str>,
}

impl TryFrom<Category> for DomainCategory {
    type Error = TypeConstraintError;

    fn try_from(category: Category) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CategoryId::new(category.id)?,
            name: CategoryName::new(category.nome)?,
            description: category.descricao.map(Description::from),
        })
    }
}

impl<'a> From<&'a DomainNewCategory> for NewCategory<'a> {
    fn from(category: &'a DomainNewCategory) -> Self {
        Self {
            nome: category.name.as_str(),
            descricao: category.description.as_ref().map(|d| d.as_str()),
        }
    }
}

impl<'a> From<&'a DomainCategory> for UpdateCategory<'a> {
    fn from(category: &'a DomainCategory) -> Self {
        Self {
            nome: category.name.as_str(),
            descricao: category.description.as_ref().map(|d| d.as_str()),
        }
    }
}
