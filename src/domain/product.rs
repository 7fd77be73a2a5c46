use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::types::{
    CategoryId, Description, ProductId, ProductName, ProductPrice, StockQuantity,
};

/// A catalog item.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub description: Option<Description>,
    pub price: ProductPrice,
    pub stock: StockQuantity,
    pub category_id: Option<CategoryId>,
    /// Category loaded through the left join on `categoria_id`.
    pub category: Option<Category>,
}

/// Information required to create a new [`Product`].
#[derive(Clone, Debug, PartialEq)]
pub struct NewProduct {
    pub name: ProductName,
    pub description: Option<Description>,
    pub price: ProductPrice,
    pub stock: StockQuantity,
    pub category_id: Option<CategoryId>,
}

impl NewProduct {
    #[must_use]
    pub fn new(
        name: ProductName,
        description: Option<Description>,
        price: ProductPrice,
        stock: Option<StockQuantity>,
        category_id: Option<CategoryId>,
    ) -> Self {
        Self {
            name,
            description,
            price,
            stock: stock.unwrap_or_default(),
            category_id,
        }
    }
}

/// Partial update of a [`Product`]. `None` leaves the field untouched;
/// `Some(None)` on an optional field clears it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateProduct {
    pub name: Option<ProductName>,
    pub description: Option<Option<Description>>,
    pub price: Option<ProductPrice>,
    pub stock: Option<StockQuantity>,
    pub category_id: Option<Option<CategoryId>>,
}

impl Product {
    /// Overwrites only the fields present in `update`.
    ///
    /// Changing the category reference drops the joined [`Category`]; it is
    /// reloaded by the repository after the write.
    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
        if let Some(category_id) = update.category_id {
            if self.category_id != category_id {
                self.category = None;
            }
            self.category_id = category_id;
        }
    }
}
