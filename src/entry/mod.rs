//! Expenses and incomes, the money going out and coming in.

mod domain;
mod endpoints;
mod service;

pub use domain::{Entry, EntryId, EntryKind, Expense, ExpenseKind, Income, IncomeKind};
pub use endpoints::{
    create_entry_endpoint, delete_entry_endpoint, get_entry_endpoint, list_entries_endpoint,
    update_entry_endpoint,
};
pub use service::EntryService;
