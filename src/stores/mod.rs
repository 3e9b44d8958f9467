//! Contains the storage trait and implementations for objects that store the domain records.

pub mod sqlite;

use std::str::FromStr;

use serde::Deserialize;

use crate::{Error, database_id::DatabaseId};

/// Saves, retrieves and deletes records of type `R`.
///
/// A record with no ID has never been stored. Saving it inserts a new row and
/// the returned record carries the ID assigned by the store. Saving a record
/// with an ID overwrites the stored record with the same ID.
pub trait Store<R>: Send + Sync {
    /// Insert or update `record` and return the record as it was stored.
    ///
    /// # Errors
    /// Returns an [Error::UpdateMissingRecord] if `record` has an ID that is not
    /// in the store.
    fn save(&self, record: R) -> Result<R, Error>;

    /// Get every record in the store ordered by ID.
    fn find_all(&self, order: SortOrder) -> Result<Vec<R>, Error>;

    /// Get the record with `id`, or `None` if there is no such record.
    fn find_by_id(&self, id: DatabaseId) -> Result<Option<R>, Error>;

    /// Delete the record with `id`.
    ///
    /// Deleting a record that does not exist is not an error.
    fn delete_by_id(&self, id: DatabaseId) -> Result<(), Error>;
}

/// The order to list records in, by ID.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Sort in order of increasing value.
    #[default]
    Ascending,
    /// Sort in order of decreasing value.
    Descending,
}

impl SortOrder {
    /// The SQL keyword for this order.
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "ASC",
            SortOrder::Descending => "DESC",
        }
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    /// Parse a sort parameter of the form "id", "id,asc" or "id,desc".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',').map(str::trim);

        let field = parts.next().unwrap_or_default();
        let direction = parts.next();

        if field != "id" || parts.next().is_some() {
            return Err(Error::InvalidSortOrder(s.to_owned()));
        }

        match direction.map(str::to_ascii_lowercase).as_deref() {
            None | Some("asc") => Ok(SortOrder::Ascending),
            Some("desc") => Ok(SortOrder::Descending),
            Some(_) => Err(Error::InvalidSortOrder(s.to_owned())),
        }
    }
}

/// The query string accepted when listing records, e.g. `?sort=id,desc`.
#[derive(Debug, Default, Deserialize)]
pub struct SortQuery {
    /// The requested order, ascending by ID when absent.
    pub sort: Option<String>,
}

impl SortQuery {
    /// Parse the requested order.
    ///
    /// # Errors
    /// Returns an [Error::InvalidSortOrder] if `sort` is not a valid order.
    pub fn order(&self) -> Result<SortOrder, Error> {
        self.sort
            .as_deref()
            .map_or(Ok(SortOrder::default()), str::parse)
    }
}
