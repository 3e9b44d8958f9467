//! Core category domain types.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::database_id::DatabaseId;

/// Database identifier for a category.
pub type CategoryId = DatabaseId;

/// The name used for categories in error messages and logs.
pub const CATEGORY_ENTITY_NAME: &str = "category";

/// A category for grouping expenses and incomes (e.g., 'Groceries', 'Salary').
///
/// Two categories are equal when they have the same ID. A category without an
/// ID has not been stored yet and is only equal to itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Category {
    /// The ID assigned by the database, `None` until the category is first saved.
    #[serde(default)]
    pub id: Option<CategoryId>,
    /// The display name of the category.
    #[serde(default)]
    pub name: String,
}

impl Category {
    /// Create a category that has not been stored yet.
    pub fn new(name: &str) -> Self {
        Self {
            id: None,
            name: name.to_owned(),
        }
    }

    /// Set the ID of the category.
    pub fn with_id(mut self, id: CategoryId) -> Self {
        self.id = Some(id);
        self
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        match (self.id, other.id) {
            (Some(id), Some(other_id)) => id == other_id,
            _ => std::ptr::eq(self, other),
        }
    }
}

impl Eq for Category {}

impl Hash for Category {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod category_equality_tests {
    use serde_json::json;

    use super::Category;

    #[test]
    fn same_id_is_equal_regardless_of_name() {
        let left = Category::new("Foo").with_id(1);
        let right = Category::new("Bar").with_id(1);

        assert_eq!(left, right);
    }

    #[test]
    fn different_ids_are_not_equal() {
        assert_ne!(Category::new("Foo").with_id(1), Category::new("Foo").with_id(2));
    }

    #[test]
    fn unsaved_categories_are_only_equal_to_themselves() {
        let category = Category::new("Foo");
        let other = Category::new("Foo");

        let same_category = &category;

        assert_eq!(&category, same_category);
        assert_ne!(category, other);
        assert_ne!(category, category.clone());
        assert_ne!(category, Category::new("Foo").with_id(1));
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let category: Category = serde_json::from_value(json!({ "name": "Food" })).unwrap();

        assert_eq!(category.id, None);
        assert_eq!(category.name, "Food");

        let reference: Category = serde_json::from_value(json!({ "id": 3 })).unwrap();

        assert_eq!(reference.id, Some(3));
        assert_eq!(reference.name, "");
    }

    #[test]
    fn serializes_id_and_name() {
        let category = Category::new("Food").with_id(3);

        assert_eq!(
            serde_json::to_value(category).unwrap(),
            json!({ "id": 3, "name": "Food" })
        );
    }
}
