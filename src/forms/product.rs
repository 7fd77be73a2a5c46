use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use crate::domain::product::{NewProduct, UpdateProduct};
use crate::domain::types::{CategoryId, Description, ProductName, ProductPrice, StockQuantity};
use crate::forms::{FormError, deserialize_nullable};

#[derive(Debug, Deserialize, Validate)]
/// Payload of `POST /produtos`.
pub struct CreateProductForm {
    #[serde(rename = "nome")]
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    #[serde(rename = "preco")]
    pub price: Decimal,
    #[serde(rename = "estoque", default)]
    #[validate(range(min = 0))]
    pub stock: Option<i32>,
    #[serde(rename = "categoriaId", alias = "categoryId", default)]
    pub category_id: Option<i32>,
}

#[derive(Debug, Default, Deserialize, Validate)]
/// Payload of `PUT /produtos/{id}`; omitted fields are left untouched.
pub struct UpdateProductForm {
    #[serde(rename = "nome", default)]
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[serde(
        rename = "descricao",
        default,
        deserialize_with = "deserialize_nullable"
    )]
    pub description: Option<Option<String>>,
    #[serde(rename = "preco", default)]
    pub price: Option<Decimal>,
    #[serde(rename = "estoque", default)]
    #[validate(range(min = 0))]
    pub stock: Option<i32>,
    #[serde(
        rename = "categoriaId",
        alias = "categoryId",
        default,
        deserialize_with = "deserialize_nullable"
    )]
    pub category_id: Option<Option<i32>>,
}

fn parse_price(price: Decimal) -> Result<ProductPrice, FormError> {
    ProductPrice::new(price).map_err(|_| FormError::InvalidPrice)
}

fn parse_stock(stock: i32) -> Result<StockQuantity, FormError> {
    StockQuantity::new(stock).map_err(|_| FormError::InvalidStock)
}

fn parse_category_id(id: i32) -> Result<CategoryId, FormError> {
    CategoryId::new(id).map_err(|_| FormError::InvalidCategoryId)
}

impl TryFrom<CreateProductForm> for NewProduct {
    type Error = FormError;

    fn try_from(form: CreateProductForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(NewProduct::new(
            ProductName::new(form.name).map_err(|_| FormError::InvalidName)?,
            form.description.map(Description::new),
            parse_price(form.price)?,
            form.stock.map(parse_stock).transpose()?,
            form.category_id.map(parse_category_id).transpose()?,
        ))
    }
}

impl TryFrom<UpdateProductForm> for UpdateProduct {
    type Error = FormError;

    fn try_from(form: UpdateProductForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(UpdateProduct {
            name: form
                .name
                .map(ProductName::new)
                .transpose()
                .map_err(|_| FormError::InvalidName)?,
            description: form
                .description
                .map(|description| description.map(Description::new)),
            price: form.price.map(parse_price).transpose()?,
            stock: form.stock.map(parse_stock).transpose()?,
            category_id: form
                .category_id
                .map(|id| id.map(parse_category_id).transpose())
                .transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn create_form_from_json() {
        let form: CreateProductForm = serde_json::from_str(
            r#"{"nome": "Teclado", "descricao": "ABNT2", "preco": 149.9, "categoriaId": 2}"#,
        )
        .unwrap();
        let new = NewProduct::try_from(form).unwrap();

        assert_eq!(new.name.as_str(), "Teclado");
        assert_eq!(new.description.unwrap().as_str(), "ABNT2");
        assert_eq!(new.price.amount(), Decimal::from_str("149.90").unwrap());
        assert_eq!(new.stock.get(), 0);
        assert_eq!(new.category_id.map(CategoryId::get), Some(2));
    }

    #[test]
    fn create_form_accepts_missing_category() {
        let form: CreateProductForm =
            serde_json::from_str(r#"{"nome": "Cabo", "preco": 10, "estoque": 5}"#).unwrap();
        let new = NewProduct::try_from(form).unwrap();

        assert_eq!(new.stock.get(), 5);
        assert!(new.category_id.is_none());
    }

    #[test]
    fn create_form_rejects_invalid_numbers() {
        let negative_stock = CreateProductForm {
            name: "Cabo".to_string(),
            description: None,
            price: Decimal::from(1),
            stock: Some(-1),
            category_id: None,
        };
        assert!(matches!(
            NewProduct::try_from(negative_stock),
            Err(FormError::Validation(_))
        ));

        let negative_price = CreateProductForm {
            name: "Cabo".to_string(),
            description: None,
            price: Decimal::from(-1),
            stock: None,
            category_id: None,
        };
        assert!(matches!(
            NewProduct::try_from(negative_price),
            Err(FormError::InvalidPrice)
        ));

        let bad_category = CreateProductForm {
            name: "Cabo".to_string(),
            description: None,
            price: Decimal::from(1),
            stock: None,
            category_id: Some(0),
        };
        assert!(matches!(
            NewProduct::try_from(bad_category),
            Err(FormError::InvalidCategoryId)
        ));
    }

    #[test]
    fn update_form_keeps_missing_fields_absent() {
        let form: UpdateProductForm = serde_json::from_str(r#"{"descricao": "new"}"#).unwrap();
        let update = UpdateProduct::try_from(form).unwrap();

        assert_eq!(
            update.description.unwrap().map(|d| d.into_inner()),
            Some("new".to_string())
        );
        assert!(update.name.is_none());
        assert!(update.price.is_none());
        assert!(update.stock.is_none());
        assert!(update.category_id.is_none());
    }

    #[test]
    fn update_form_null_category_clears_reference() {
        let form: UpdateProductForm = serde_json::from_str(r#"{"categoriaId": null}"#).unwrap();
        let update = UpdateProduct::try_from(form).unwrap();
        assert_eq!(update.category_id, Some(None));

        let form: UpdateProductForm = serde_json::from_str(r#"{"categoryId": 4}"#).unwrap();
        let update = UpdateProduct::try_from(form).unwrap();
        assert_eq!(update.category_id.flatten().map(CategoryId::get), Some(4));
    }
}
