//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/expenses/{expense_id}', use [format_endpoint].

/// The route to create, update and list categories.
pub const CATEGORIES: &str = "/api/categories";
/// The route to get or delete a single category.
pub const CATEGORY: &str = "/api/categories/{category_id}";
/// The route to create, update and list expenses.
pub const EXPENSES: &str = "/api/expenses";
/// The route to get or delete a single expense.
pub const EXPENSE: &str = "/api/expenses/{expense_id}";
/// The route to create, update and list incomes.
pub const INCOMES: &str = "/api/incomes";
/// The route to get or delete a single income.
pub const INCOME: &str = "/api/incomes/{income_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/api/expenses/{expense_id}', '{expense_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.char_indices() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let Some(param_start) = param_start else {
        return endpoint_path.to_string();
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
