//! Implements a SQLite backed category store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, OptionalExtension, Row};

use crate::{
    Error,
    category::{CATEGORY_ENTITY_NAME, Category},
    database_id::DatabaseId,
    db::{CreateTable, MapRow},
    stores::{SortOrder, Store},
};

use super::lock_connection;

/// Creates, retrieves and deletes categories in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteCategoryStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteCategoryStore {
    /// Create a new category store with a SQLite database.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl Store<Category> for SQLiteCategoryStore {
    /// Insert a category without an ID or rename the category with the same ID.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::UpdateMissingRecord] if `category` has an ID that is not in the database,
    /// - [Error::SqlError] if there is some other SQL error.
    fn save(&self, category: Category) -> Result<Category, Error> {
        let connection = lock_connection(&self.connection)?;

        let Some(id) = category.id else {
            return connection
                .prepare("INSERT INTO category (name) VALUES (?1) RETURNING id, name;")?
                .query_row((&category.name,), Self::map_row)
                .map_err(|error| error.into());
        };

        let rows_affected = connection.execute(
            "UPDATE category SET name = ?1 WHERE id = ?2;",
            (&category.name, id),
        )?;

        if rows_affected == 0 {
            return Err(Error::UpdateMissingRecord {
                entity: CATEGORY_ENTITY_NAME,
            });
        }

        Ok(category)
    }

    fn find_all(&self, order: SortOrder) -> Result<Vec<Category>, Error> {
        lock_connection(&self.connection)?
            .prepare(&format!(
                "SELECT id, name FROM category ORDER BY id {};",
                order.as_sql()
            ))?
            .query_map([], Self::map_row)?
            .map(|maybe_category| maybe_category.map_err(|error| error.into()))
            .collect()
    }

    fn find_by_id(&self, id: DatabaseId) -> Result<Option<Category>, Error> {
        lock_connection(&self.connection)?
            .prepare("SELECT id, name FROM category WHERE id = :id;")?
            .query_row(&[(":id", &id)], Self::map_row)
            .optional()
            .map_err(|error| error.into())
    }

    fn delete_by_id(&self, id: DatabaseId) -> Result<(), Error> {
        lock_connection(&self.connection)?.execute("DELETE FROM category WHERE id = ?1;", [id])?;

        Ok(())
    }
}

impl CreateTable for SQLiteCategoryStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS category (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL
            );",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SQLiteCategoryStore {
    type ReturnType = Category;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        let id = row.get(offset)?;
        let name = row.get(offset + 1)?;

        Ok(Category { id: Some(id), name })
    }
}
