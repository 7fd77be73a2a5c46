use serde::Deserialize;
use validator::Validate;

use crate::domain::category::{NewCategory, UpdateCategory};
use crate::domain::types::{CategoryName, Description};
use crate::forms::{FormError, deserialize_nullable};

#[derive(Debug, Deserialize, Validate)]
/// Payload of `POST /categorias`.
pub struct CreateCategoryForm {
    #[serde(rename = "nome")]
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate)]
/// Payload of `PATCH /categorias/{id}`; omitted fields are left untouched.
pub struct UpdateCategoryForm {
    #[serde(rename = "nome", default)]
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[serde(
        rename = "descricao",
        default,
        deserialize_with = "deserialize_nullable"
    )]
    pub description: Option<Option<String>>,
}

impl TryFrom<CreateCategoryForm> for NewCategory {
    type Error = FormError;

    fn try_from(form: CreateCategoryForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let name = CategoryName::new(form.name).map_err(|_| FormError::InvalidName)?;
        let description = form.description.map(Description::new);

        Ok(NewCategory::new(name, description))
    }
}

impl TryFrom<UpdateCategoryForm> for UpdateCategory {
    type Error = FormError;

    fn try_from(form: UpdateCategoryForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(UpdateCategory {
            name: form
                .name
                .map(CategoryName::new)
                .transpose()
                .map_err(|_| FormError::InvalidName)?,
            description: form
                .description
                .map(|description| description.map(Description::new)),
        })
    }
}
