//! Orchestrates saving and retrieving categories.

use std::sync::Arc;

use crate::{
    Error,
    category::{Category, CategoryId},
    stores::{SortOrder, Store},
};

/// Reads and writes categories through a [Store].
///
/// Categories carry no dates, so saving is a plain pass-through to the store.
#[derive(Clone)]
pub struct CategoryService {
    store: Arc<dyn Store<Category>>,
}

impl CategoryService {
    /// Create a service backed by `store`.
    pub fn new(store: Arc<dyn Store<Category>>) -> Self {
        Self { store }
    }

    /// Insert `category` if it has no ID, otherwise update the stored category.
    pub fn save(&self, category: Category) -> Result<Category, Error> {
        self.store.save(category)
    }

    /// Get all categories.
    pub fn find_all(&self, order: SortOrder) -> Result<Vec<Category>, Error> {
        self.store.find_all(order)
    }

    /// Get the category with `id`, if it exists.
    pub fn find_one(&self, id: CategoryId) -> Result<Option<Category>, Error> {
        self.store.find_by_id(id)
    }

    /// Delete the category with `id`. Does nothing if there is no such category.
    pub fn delete(&self, id: CategoryId) -> Result<(), Error> {
        self.store.delete_by_id(id)
    }
}
