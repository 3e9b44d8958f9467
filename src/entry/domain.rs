//! Core domain types for expenses and incomes.
//!
//! Expenses and incomes have the same fields and rules, so both are an [Entry]
//! that is told apart by its [EntryKind] marker type.

use std::{
    hash::{Hash, Hasher},
    marker::PhantomData,
};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{category::Category, database_id::DatabaseId, endpoints};

/// Database identifier for an expense or income.
pub type EntryId = DatabaseId;

/// Describes where and under what name a kind of entry is stored and served.
pub trait EntryKind: std::fmt::Debug + Clone + Default + Send + Sync + 'static {
    /// The name used in error messages and logs, e.g. "expense".
    const ENTITY_NAME: &'static str;
    /// The database table holding entries of this kind.
    const TABLE_NAME: &'static str;
    /// The route for the collection of entries, e.g. "/api/expenses".
    const COLLECTION_ENDPOINT: &'static str;
    /// The route for a single entry, e.g. "/api/expenses/{expense_id}".
    const ITEM_ENDPOINT: &'static str;
}

/// Marker for money going out.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpenseKind;

impl EntryKind for ExpenseKind {
    const ENTITY_NAME: &'static str = "expense";
    const TABLE_NAME: &'static str = "expense";
    const COLLECTION_ENDPOINT: &'static str = endpoints::EXPENSES;
    const ITEM_ENDPOINT: &'static str = endpoints::EXPENSE;
}

/// Marker for money coming in.
#[derive(Debug, Clone, Copy, Default)]
pub struct IncomeKind;

impl EntryKind for IncomeKind {
    const ENTITY_NAME: &'static str = "income";
    const TABLE_NAME: &'static str = "income";
    const COLLECTION_ENDPOINT: &'static str = endpoints::INCOMES;
    const ITEM_ENDPOINT: &'static str = endpoints::INCOME;
}

/// An amount of money spent or received, optionally filed under a [Category].
///
/// Two entries are equal when they have the same ID. An entry without an ID
/// has not been stored yet and is only equal to itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound = "")]
pub struct Entry<K> {
    /// The ID assigned by the database, `None` until the entry is first saved.
    #[serde(default)]
    pub id: Option<EntryId>,
    /// A free text description.
    #[serde(default)]
    pub note: Option<String>,
    /// The amount of money.
    #[serde(default)]
    pub amount: Option<f64>,
    /// When the entry was first saved.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_date: Option<OffsetDateTime>,
    /// When the entry was last saved.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_date: Option<OffsetDateTime>,
    /// The category the entry is filed under.
    ///
    /// Only the category ID is used when saving an entry.
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(skip)]
    kind: PhantomData<K>,
}

/// Money spent.
pub type Expense = Entry<ExpenseKind>;

/// Money received.
pub type Income = Entry<IncomeKind>;

impl<K> Entry<K> {
    /// Create an entry that has not been stored yet.
    pub fn new(note: &str, amount: f64) -> Self {
        Self {
            note: Some(note.to_owned()),
            amount: Some(amount),
            ..Default::default()
        }
    }

    /// Set the ID of the entry.
    pub fn with_id(mut self, id: EntryId) -> Self {
        self.id = Some(id);
        self
    }

    /// File the entry under `category`.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }
}

impl<K> Default for Entry<K> {
    fn default() -> Self {
        Self {
            id: None,
            note: None,
            amount: None,
            created_date: None,
            updated_date: None,
            category: None,
            kind: PhantomData,
        }
    }
}

impl<K> PartialEq for Entry<K> {
    fn eq(&self, other: &Self) -> bool {
        match (self.id, other.id) {
            (Some(id), Some(other_id)) => id == other_id,
            _ => std::ptr::eq(self, other),
        }
    }
}

impl<K> Eq for Entry<K> {}

impl<K> Hash for Entry<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
