//! SQLite backed implementations of [Store](crate::stores::Store).

mod category;
mod entry;

pub use category::SQLiteCategoryStore;
pub use entry::SQLiteEntryStore;

use std::sync::{Mutex, MutexGuard};

use rusqlite::Connection;

use crate::Error;

/// Acquire the lock on the shared database connection.
///
/// # Errors
/// Returns an [Error::DatabaseLockError] if the lock is poisoned.
fn lock_connection(connection: &Mutex<Connection>) -> Result<MutexGuard<'_, Connection>, Error> {
    connection.lock().map_err(|error| {
        tracing::error!("could not acquire database lock: {error}");
        Error::DatabaseLockError
    })
}
