//! Application router configuration with the REST routes for each resource.

use axum::{
    Router,
    extract::FromRef,
    routing::{get, post},
};

use crate::{
    AppState,
    category::{
        create_category_endpoint, delete_category_endpoint, get_category_endpoint,
        list_categories_endpoint, update_category_endpoint,
    },
    endpoints,
    entry::{
        EntryKind, EntryService, ExpenseKind, IncomeKind, create_entry_endpoint,
        delete_entry_endpoint, get_entry_endpoint, list_entries_endpoint, update_entry_endpoint,
    },
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            endpoints::CATEGORIES,
            post(create_category_endpoint)
                .put(update_category_endpoint)
                .get(list_categories_endpoint),
        )
        .route(
            endpoints::CATEGORY,
            get(get_category_endpoint).delete(delete_category_endpoint),
        )
        .merge(entry_routes::<ExpenseKind>())
        .merge(entry_routes::<IncomeKind>())
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The collection and item routes for one kind of entry.
fn entry_routes<K: EntryKind>() -> Router<AppState>
where
    EntryService<K>: FromRef<AppState>,
{
    Router::new()
        .route(
            K::COLLECTION_ENDPOINT,
            post(create_entry_endpoint::<K>)
                .put(update_entry_endpoint::<K>)
                .get(list_entries_endpoint::<K>),
        )
        .route(
            K::ITEM_ENDPOINT,
            get(get_entry_endpoint::<K>).delete(delete_entry_endpoint::<K>),
        )
}

#[cfg(test)]
mod category_route_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::{Value, json};

    use crate::{AppState, endpoints, endpoints::format_endpoint};

    use super::build_router;

    fn get_test_server() -> TestServer {
        let connection = Connection::open_in_memory().expect("Could not open database in memory.");
        let state = AppState::new(connection).expect("Could not create app state.");

        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    async fn create_category(server: &TestServer, name: &str) -> i64 {
        server
            .post(endpoints::CATEGORIES)
            .json(&json!({ "name": name }))
            .await
            .json::<Value>()["id"]
            .as_i64()
            .expect("created category should have an ID")
    }

    #[tokio::test]
    async fn create_category_returns_created() {
        let server = get_test_server();

        let response = server
            .post(endpoints::CATEGORIES)
            .json(&json!({ "name": "Groceries" }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body = response.json::<Value>();
        let id = body["id"].as_i64().expect("response should have an ID");
        assert_eq!(body["name"], "Groceries");
        assert_eq!(
            response.header("location"),
            format_endpoint(endpoints::CATEGORY, id).as_str()
        );
        assert_eq!(
            response.header("x-expensestracker-alert"),
            format!("A new category is created with identifier {id}").as_str()
        );
    }

    #[tokio::test]
    async fn create_category_with_id_is_rejected() {
        let server = get_test_server();

        let response = server
            .post(endpoints::CATEGORIES)
            .json(&json!({ "id": 1, "name": "Groceries" }))
            .await;

        response.assert_status_bad_request();
        assert_eq!(
            response.json::<Value>(),
            json!({
                "entityName": "category",
                "message": "A new category cannot have already an Id!",
            })
        );
    }

    #[tokio::test]
    async fn update_category_without_id_is_rejected() {
        let server = get_test_server();

        let response = server
            .put(endpoints::CATEGORIES)
            .json(&json!({ "name": "Groceries" }))
            .await;

        response.assert_status_bad_request();
        assert_eq!(response.json::<Value>()["message"], "Invalid Id!");
    }

    #[tokio::test]
    async fn update_category_renames_it() {
        let server = get_test_server();
        let id = create_category(&server, "Groceries").await;

        let response = server
            .put(endpoints::CATEGORIES)
            .json(&json!({ "id": id, "name": "Food" }))
            .await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>(), json!({ "id": id, "name": "Food" }));

        let fetched = server
            .get(&format_endpoint(endpoints::CATEGORY, id))
            .await
            .json::<Value>();
        assert_eq!(fetched["name"], "Food");
    }

    #[tokio::test]
    async fn create_category_with_malformed_body_is_rejected() {
        let server = get_test_server();

        let response = server
            .post(endpoints::CATEGORIES)
            .json(&json!({ "name": 42 }))
            .await;

        response.assert_status_bad_request();
        assert_eq!(response.json::<Value>()["entityName"], "category");
    }

    #[tokio::test]
    async fn update_missing_category_is_not_found() {
        let server = get_test_server();

        let response = server
            .put(endpoints::CATEGORIES)
            .json(&json!({ "id": 42, "name": "Food" }))
            .await;

        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn get_missing_category_is_not_found() {
        let server = get_test_server();

        let response = server
            .get(&format_endpoint(endpoints::CATEGORY, i64::MAX))
            .await;

        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn list_categories_in_requested_order() {
        let server = get_test_server();
        let first = create_category(&server, "Groceries").await;
        let second = create_category(&server, "Salary").await;

        let ascending = server.get(endpoints::CATEGORIES).await;
        ascending.assert_status_ok();
        assert_eq!(
            ascending.json::<Value>(),
            json!([
                { "id": first, "name": "Groceries" },
                { "id": second, "name": "Salary" },
            ])
        );

        let descending = server
            .get(endpoints::CATEGORIES)
            .add_query_param("sort", "id,desc")
            .await;
        descending.assert_status_ok();
        assert_eq!(
            descending.json::<Value>(),
            json!([
                { "id": second, "name": "Salary" },
                { "id": first, "name": "Groceries" },
            ])
        );
    }

    #[tokio::test]
    async fn list_categories_with_invalid_sort_is_rejected() {
        let server = get_test_server();

        server
            .get(endpoints::CATEGORIES)
            .add_query_param("sort", "name,asc")
            .await
            .assert_status_bad_request();
    }

    #[tokio::test]
    async fn delete_category() {
        let server = get_test_server();
        let id = create_category(&server, "Groceries").await;
        let path = format_endpoint(endpoints::CATEGORY, id);

        server.delete(&path).await.assert_status_ok();

        server.get(&path).await.assert_status_not_found();
        // Deleting again still succeeds.
        server.delete(&path).await.assert_status_ok();
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let server = get_test_server();

        server.get("/api/budgets").await.assert_status_not_found();
    }
}

#[cfg(test)]
mod entry_route_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::{Value, json};
    use time::{OffsetDateTime, format_description::well_known::Rfc3339};

    use crate::{AppState, endpoints, endpoints::format_endpoint};

    use super::build_router;

    fn get_test_server() -> TestServer {
        let connection = Connection::open_in_memory().expect("Could not open database in memory.");
        let state = AppState::new(connection).expect("Could not create app state.");

        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    async fn create_entry(server: &TestServer, collection: &str, body: Value) -> Value {
        let response = server.post(collection).json(&body).await;
        response.assert_status(StatusCode::CREATED);

        response.json::<Value>()
    }

    #[tokio::test]
    async fn create_expense_stamps_dates() {
        let server = get_test_server();

        let response = server
            .post(endpoints::EXPENSES)
            .json(&json!({ "note": "AAAAA" }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body = response.json::<Value>();
        let id = body["id"].as_i64().expect("response should have an ID");
        assert_eq!(body["note"], "AAAAA");
        assert!(body["createdDate"].is_string());
        assert_eq!(body["createdDate"], body["updatedDate"]);
        assert_eq!(
            response.header("location"),
            format_endpoint(endpoints::EXPENSE, id).as_str()
        );
        assert_eq!(response.header("x-expensestracker-params"), id.to_string().as_str());
    }

    #[tokio::test]
    async fn create_expense_ignores_client_dates() {
        let server = get_test_server();

        let body = create_entry(
            &server,
            endpoints::EXPENSES,
            json!({ "note": "AAAAA", "createdDate": "2000-01-01T00:00:00Z" }),
        )
        .await;

        assert_ne!(body["createdDate"], "2000-01-01T00:00:00Z");
    }

    #[tokio::test]
    async fn create_expense_with_id_is_rejected() {
        let server = get_test_server();

        let response = server
            .post(endpoints::EXPENSES)
            .json(&json!({ "id": 1, "note": "AAAAA" }))
            .await;

        response.assert_status_bad_request();
        assert_eq!(
            response.json::<Value>(),
            json!({
                "entityName": "expense",
                "message": "A new expense cannot have already an Id!",
            })
        );
    }

    #[tokio::test]
    async fn create_income_with_unknown_category_is_rejected() {
        let server = get_test_server();

        server
            .post(endpoints::INCOMES)
            .json(&json!({ "note": "Salary", "category": { "id": 99 } }))
            .await
            .assert_status_bad_request();
    }

    #[tokio::test]
    async fn create_income_with_category() {
        let server = get_test_server();
        let category = server
            .post(endpoints::CATEGORIES)
            .json(&json!({ "name": "Work" }))
            .await
            .json::<Value>();

        let body = create_entry(
            &server,
            endpoints::INCOMES,
            json!({ "note": "Salary", "amount": 1234.5, "category": { "id": category["id"] } }),
        )
        .await;

        assert_eq!(body["amount"], 1234.5);
        assert_eq!(body["category"], category);
    }

    fn parse_date(value: &Value) -> OffsetDateTime {
        OffsetDateTime::parse(value.as_str().expect("date should be a string"), &Rfc3339)
            .expect("date should be RFC 3339")
    }

    #[tokio::test]
    async fn update_expense_keeps_created_date() {
        let server = get_test_server();
        let created = create_entry(&server, endpoints::EXPENSES, json!({ "note": "AAAAA" })).await;
        let path = format_endpoint(endpoints::EXPENSE, created["id"].as_i64().unwrap());

        server
            .put(endpoints::EXPENSES)
            .json(&json!({
                "id": created["id"],
                "note": "BBBBB",
                "createdDate": "2000-01-01T00:00:00Z",
            }))
            .await
            .assert_status_ok();

        let response = server.get(&path).await;
        response.assert_status_ok();
        let fetched = response.json::<Value>();
        assert_eq!(fetched["id"], created["id"]);
        assert_eq!(fetched["note"], "BBBBB");
        assert_eq!(fetched["createdDate"], created["createdDate"]);
        assert!(parse_date(&fetched["updatedDate"]) >= parse_date(&created["updatedDate"]));
    }

    #[tokio::test]
    async fn create_expense_with_malformed_date_is_rejected() {
        let server = get_test_server();

        let response = server
            .post(endpoints::EXPENSES)
            .json(&json!({ "note": "AAAAA", "createdDate": "not-a-date" }))
            .await;

        response.assert_status_bad_request();
        let body = response.json::<Value>();
        assert_eq!(body["entityName"], "expense");
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn update_income_with_malformed_date_is_rejected() {
        let server = get_test_server();
        let created = create_entry(&server, endpoints::INCOMES, json!({ "note": "Salary" })).await;

        let response = server
            .put(endpoints::INCOMES)
            .json(&json!({ "id": created["id"], "updatedDate": "2024-13-45" }))
            .await;

        response.assert_status_bad_request();
        assert_eq!(response.json::<Value>()["entityName"], "income");

        let fetched = server
            .get(&format_endpoint(endpoints::INCOME, created["id"].as_i64().unwrap()))
            .await
            .json::<Value>();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn update_expense_without_id_is_rejected() {
        let server = get_test_server();

        let response = server
            .put(endpoints::EXPENSES)
            .json(&json!({ "note": "BBBBB" }))
            .await;

        response.assert_status_bad_request();
        assert_eq!(
            response.json::<Value>(),
            json!({ "entityName": "expense", "message": "Invalid Id!" })
        );
    }

    #[tokio::test]
    async fn update_missing_income_is_not_found() {
        let server = get_test_server();

        server
            .put(endpoints::INCOMES)
            .json(&json!({ "id": 42, "note": "BBBBB" }))
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn get_income() {
        let server = get_test_server();
        let created = create_entry(&server, endpoints::INCOMES, json!({ "note": "Salary" })).await;
        let id = created["id"].as_i64().unwrap();

        let response = server.get(&format_endpoint(endpoints::INCOME, id)).await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>(), created);
    }

    #[tokio::test]
    async fn delete_income() {
        let server = get_test_server();
        let created = create_entry(&server, endpoints::INCOMES, json!({ "note": "Salary" })).await;
        let path = format_endpoint(endpoints::INCOME, created["id"].as_i64().unwrap());

        server.delete(&path).await.assert_status_ok();

        server.get(&path).await.assert_status_not_found();
    }

    #[tokio::test]
    async fn expenses_and_incomes_are_separate() {
        let server = get_test_server();
        create_entry(&server, endpoints::EXPENSES, json!({ "note": "Coffee" })).await;

        let incomes = server.get(endpoints::INCOMES).await;

        incomes.assert_status_ok();
        assert_eq!(incomes.json::<Value>(), json!([]));
    }

    #[tokio::test]
    async fn list_expenses_in_descending_order() {
        let server = get_test_server();
        let first = create_entry(&server, endpoints::EXPENSES, json!({ "note": "A" })).await;
        let second = create_entry(&server, endpoints::EXPENSES, json!({ "note": "B" })).await;

        let response = server
            .get(endpoints::EXPENSES)
            .add_query_param("sort", "id,desc")
            .await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>(), json!([second, first]));
    }

    #[tokio::test]
    async fn list_expenses_with_invalid_sort_is_rejected() {
        let server = get_test_server();

        server
            .get(endpoints::EXPENSES)
            .add_query_param("sort", "amount")
            .await
            .assert_status_bad_request();
    }
}
