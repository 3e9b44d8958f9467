//! Implements a SQLite backed store for expenses and incomes.

use std::{
    marker::PhantomData,
    sync::{Arc, Mutex},
};

use rusqlite::{Connection, OptionalExtension, Row};

use crate::{
    Error,
    category::CategoryId,
    database_id::DatabaseId,
    db::{CreateTable, MapRow},
    entry::{Entry, EntryKind},
    stores::{SortOrder, Store},
};

use super::{SQLiteCategoryStore, lock_connection};

/// Stores entries of the kind `K` in the SQLite table named by [EntryKind::TABLE_NAME].
///
/// Entries may reference a category, so the category table must be set up in
/// the database.
#[derive(Debug, Clone)]
pub struct SQLiteEntryStore<K> {
    connection: Arc<Mutex<Connection>>,
    kind: PhantomData<K>,
}

impl<K: EntryKind> SQLiteEntryStore<K> {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self {
            connection,
            kind: PhantomData,
        }
    }

    /// Build a query for entries joined with their category, followed by `clause`.
    fn select_query(clause: &str) -> String {
        format!(
            "SELECT e.id, e.note, e.amount, e.created_date, e.updated_date, c.id, c.name
             FROM {} e
             LEFT JOIN category c ON c.id = e.category_id
             {clause};",
            K::TABLE_NAME
        )
    }

    fn select_by_id(id: DatabaseId, connection: &Connection) -> Result<Option<Entry<K>>, Error> {
        connection
            .prepare(&Self::select_query("WHERE e.id = :id"))?
            .query_row(&[(":id", &id)], Self::map_row)
            .optional()
            .map_err(|error| error.into())
    }

    fn insert(
        entry: &Entry<K>,
        category_id: Option<CategoryId>,
        connection: &Connection,
    ) -> Result<DatabaseId, rusqlite::Error> {
        connection.execute(
            &format!(
                "INSERT INTO {} (note, amount, created_date, updated_date, category_id)
                 VALUES (?1, ?2, ?3, ?4, ?5);",
                K::TABLE_NAME
            ),
            (
                &entry.note,
                entry.amount,
                entry.created_date,
                entry.updated_date,
                category_id,
            ),
        )?;

        Ok(connection.last_insert_rowid())
    }

    /// Overwrite every column except the creation date, which is set once on insert.
    fn update(
        id: DatabaseId,
        entry: &Entry<K>,
        category_id: Option<CategoryId>,
        connection: &Connection,
    ) -> Result<usize, rusqlite::Error> {
        connection.execute(
            &format!(
                "UPDATE {} SET note = ?1, amount = ?2, updated_date = ?3, category_id = ?4
                 WHERE id = ?5;",
                K::TABLE_NAME
            ),
            (
                &entry.note,
                entry.amount,
                entry.updated_date,
                category_id,
                id,
            ),
        )
    }
}

/// Get the ID of the category `entry` is filed under.
///
/// # Errors
/// Returns an [Error::InvalidCategory] if the entry refers to a category without an ID.
fn category_id_of<K>(entry: &Entry<K>) -> Result<Option<CategoryId>, Error> {
    match &entry.category {
        None => Ok(None),
        Some(category) => category.id.map(Some).ok_or(Error::InvalidCategory(None)),
    }
}

impl<K: EntryKind> Store<Entry<K>> for SQLiteEntryStore<K> {
    /// Insert an entry without an ID or overwrite the entry with the same ID.
    ///
    /// The stored entry is read back so that the returned entry has its
    /// category name and creation date filled in.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::InvalidCategory] if the category does not refer to a stored category,
    /// - [Error::UpdateMissingRecord] if `entry` has an ID that is not in the database,
    /// - [Error::SqlError] if there is some other SQL error.
    fn save(&self, entry: Entry<K>) -> Result<Entry<K>, Error> {
        let category_id = category_id_of(&entry)?;
        let connection = lock_connection(&self.connection)?;

        let with_category_id = |error: rusqlite::Error| match Error::from(error) {
            Error::InvalidCategory(_) => Error::InvalidCategory(category_id),
            error => error,
        };

        let id = match entry.id {
            None => Self::insert(&entry, category_id, &connection).map_err(with_category_id)?,
            Some(id) => {
                let rows_affected =
                    Self::update(id, &entry, category_id, &connection).map_err(with_category_id)?;

                if rows_affected == 0 {
                    return Err(Error::UpdateMissingRecord {
                        entity: K::ENTITY_NAME,
                    });
                }

                id
            }
        };

        Self::select_by_id(id, &connection)?.ok_or(Error::NotFound)
    }

    fn find_all(&self, order: SortOrder) -> Result<Vec<Entry<K>>, Error> {
        lock_connection(&self.connection)?
            .prepare(&Self::select_query(&format!(
                "ORDER BY e.id {}",
                order.as_sql()
            )))?
            .query_map([], Self::map_row)?
            .map(|maybe_entry| maybe_entry.map_err(|error| error.into()))
            .collect()
    }

    fn find_by_id(&self, id: DatabaseId) -> Result<Option<Entry<K>>, Error> {
        let connection = lock_connection(&self.connection)?;

        Self::select_by_id(id, &connection)
    }

    fn delete_by_id(&self, id: DatabaseId) -> Result<(), Error> {
        lock_connection(&self.connection)?.execute(
            &format!("DELETE FROM {} WHERE id = ?1;", K::TABLE_NAME),
            [id],
        )?;

        Ok(())
    }
}

impl<K: EntryKind> CreateTable for SQLiteEntryStore<K> {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        let table = K::TABLE_NAME;

        connection.execute_batch(&format!(
            "CREATE TABLE IF NOT EXISTS {table} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                note TEXT,
                amount REAL,
                created_date TEXT NOT NULL,
                updated_date TEXT NOT NULL,
                category_id INTEGER,
                FOREIGN KEY(category_id) REFERENCES category(id) ON UPDATE CASCADE ON DELETE SET NULL
            );

            CREATE INDEX IF NOT EXISTS idx_{table}_category_id ON {table}(category_id);"
        ))?;

        Ok(())
    }
}

impl<K: EntryKind> MapRow for SQLiteEntryStore<K> {
    type ReturnType = Entry<K>;

    /// Expects the entry columns followed by the joined category's ID and name.
    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        let category_id: Option<CategoryId> = row.get(offset + 5)?;
        let category = match category_id {
            Some(_) => Some(SQLiteCategoryStore::map_row_with_offset(row, offset + 5)?),
            None => None,
        };

        let mut entry = Entry::default();
        entry.id = row.get(offset)?;
        entry.note = row.get(offset + 1)?;
        entry.amount = row.get(offset + 2)?;
        entry.created_date = row.get(offset + 3)?;
        entry.updated_date = row.get(offset + 4)?;
        entry.category = category;

        Ok(entry)
    }
}
