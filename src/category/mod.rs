//! Categories for grouping expenses and incomes.

mod domain;
mod endpoints;
mod service;

pub use domain::{CATEGORY_ENTITY_NAME, Category, CategoryId};
pub use endpoints::{
    create_category_endpoint, delete_category_endpoint, get_category_endpoint,
    list_categories_endpoint, update_category_endpoint,
};
pub use service::CategoryService;
