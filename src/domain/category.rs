use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, CategoryName, Description};

/// A named grouping that products may reference.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub description: Option<Description>,
}

/// Information required to create a new [`Category`].
#[derive(Clone, Debug, PartialEq)]
pub struct NewCategory {
    pub name: CategoryName,
    pub description: Option<Description>,
}

impl NewCategory {
    #[must_use]
    pub fn new(name: CategoryName, description: Option<Description>) -> Self {
        Self { name, description }
    }
}

/// Partial update of a [`Category`]. `None` leaves the field untouched;
/// `Some(None)` on an optional field clears it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateCategory {
    pub name: Option<CategoryName>,
    pub description: Option<Option<Description>>,
}

impl UpdateCategory {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

impl Category {
    /// Overwrites only the fields present in `update`.
    pub fn apply_update(&mut self, update: UpdateCategory) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Category {
        Category {
            id: CategoryId::new(1).unwrap(),
            name: CategoryName::new("Periféricos").unwrap(),
            description: Some(Description::new("Teclados e mouses")),
        }
    }

    #[test]
    fn apply_update_changes_only_present_fields() {
        let mut category = sample();
        category.apply_update(UpdateCategory {
            name: Some(CategoryName::new("Acessórios").unwrap()),
            description: None,
        });

        assert_eq!(category.name.as_str(), "Acessórios");
        assert_eq!(
            category.description.as_ref().map(|d| d.as_str()),
            Some("Teclados e mouses")
        );
        assert_eq!(category.id.get(), 1);
    }

    #[test]
    fn apply_update_can_clear_description() {
        let mut category = sample();
        category.apply_update(UpdateCategory {
            name: None,
            description: Some(None),
        });

        assert_eq!(category.name.as_str(), "Periféricos");
        assert!(category.description.is_none());
    }

    #[test]
    fn empty_update_is_a_no_op() {
        let mut category = sample();
        let update = UpdateCategory::default();
        assert!(update.is_empty());
        category.apply_update(update);
        assert_eq!(category, sample());
    }
}
