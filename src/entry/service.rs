//! Orchestrates saving and retrieving expenses and incomes.

use std::sync::Arc;

use crate::{
    Error,
    entry::{Entry, EntryId, EntryKind},
    stores::{SortOrder, Store},
    timestamp::current_timestamp,
};

/// Reads and writes entries of the kind `K` through a [Store], stamping dates on save.
pub struct EntryService<K> {
    store: Arc<dyn Store<Entry<K>>>,
}

// Derived `Clone` would require `K: Clone` even though only the store is cloned.
impl<K> Clone for EntryService<K> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<K: EntryKind> EntryService<K> {
    /// Create a service backed by `store`.
    pub fn new(store: Arc<dyn Store<Entry<K>>>) -> Self {
        Self { store }
    }

    /// Stamp `entry` with the current time and save it.
    ///
    /// An entry without an ID is new, so both its creation and update dates are
    /// set. Otherwise only the update date is set. Dates have a resolution of
    /// one second.
    ///
    /// # Errors
    /// Returns an [Error::InvalidDate] if the current time cannot be converted
    /// into a timestamp, or any error from the store.
    pub fn save(&self, mut entry: Entry<K>) -> Result<Entry<K>, Error> {
        let now = current_timestamp().map_err(|error| {
            tracing::error!("could not create timestamp for {}: {error}", K::ENTITY_NAME);
            Error::InvalidDate {
                entity: K::ENTITY_NAME,
            }
        })?;

        if entry.id.is_none() {
            entry.created_date = Some(now);
        }

        entry.updated_date = Some(now);

        self.store.save(entry)
    }

    /// Get all entries.
    pub fn find_all(&self, order: SortOrder) -> Result<Vec<Entry<K>>, Error> {
        self.store.find_all(order)
    }

    /// Get the entry with `id`, if it exists.
    pub fn find_one(&self, id: EntryId) -> Result<Option<Entry<K>>, Error> {
        self.store.find_by_id(id)
    }

    /// Delete the entry with `id`. Does nothing if there is no such entry.
    pub fn delete(&self, id: EntryId) -> Result<(), Error> {
        self.store.delete_by_id(id)
    }
}
