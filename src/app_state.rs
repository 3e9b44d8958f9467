//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;
use rusqlite::Connection;

use crate::{
    Error,
    category::{Category, CategoryService},
    db::initialize,
    entry::{EntryService, Expense, ExpenseKind, Income, IncomeKind},
    stores::{
        Store,
        sqlite::{SQLiteCategoryStore, SQLiteEntryStore},
    },
};

/// The state of the REST server.
///
/// Each service owns a handle to its store, so handlers only see the service
/// for the records they serve.
#[derive(Clone)]
pub struct AppState {
    /// Reads and writes categories.
    pub category_service: CategoryService,
    /// Reads and writes expenses.
    pub expense_service: EntryService<ExpenseKind>,
    /// Reads and writes incomes.
    pub income_service: EntryService<IncomeKind>,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the tables for the domain models.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(db_connection: Connection) -> Result<Self, Error> {
        initialize(&db_connection)?;

        let connection = Arc::new(Mutex::new(db_connection));

        Ok(Self::from_stores(
            Arc::new(SQLiteCategoryStore::new(connection.clone())),
            Arc::new(SQLiteEntryStore::<ExpenseKind>::new(connection.clone())),
            Arc::new(SQLiteEntryStore::<IncomeKind>::new(connection)),
        ))
    }

    /// Create a new [AppState] from already initialized stores.
    pub fn from_stores(
        category_store: Arc<dyn Store<Category>>,
        expense_store: Arc<dyn Store<Expense>>,
        income_store: Arc<dyn Store<Income>>,
    ) -> Self {
        Self {
            category_service: CategoryService::new(category_store),
            expense_service: EntryService::new(expense_store),
            income_service: EntryService::new(income_store),
        }
    }
}

impl FromRef<AppState> for CategoryService {
    fn from_ref(state: &AppState) -> Self {
        state.category_service.clone()
    }
}

impl FromRef<AppState> for EntryService<ExpenseKind> {
    fn from_ref(state: &AppState) -> Self {
        state.expense_service.clone()
    }
}

impl FromRef<AppState> for EntryService<IncomeKind> {
    fn from_ref(state: &AppState) -> Self {
        state.income_service.clone()
    }
}
