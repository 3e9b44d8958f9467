//! Alert headers that tell the client what happened to a record.

use axum::{
    Json,
    http::{HeaderName, StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::database_id::DatabaseId;

/// Header carrying a human readable description of what happened.
pub const ALERT_HEADER: HeaderName = HeaderName::from_static("x-expensestracker-alert");
/// Header carrying the ID of the record the alert is about.
pub const PARAMS_HEADER: HeaderName = HeaderName::from_static("x-expensestracker-params");

/// Respond with 201 Created, the new `record` as JSON and its location.
///
/// `location` should be the route for getting the record by `id`.
pub fn created_response<T: Serialize>(
    location: String,
    entity: &str,
    id: DatabaseId,
    record: T,
) -> Response {
    (
        StatusCode::CREATED,
        [
            (LOCATION, location),
            (
                ALERT_HEADER,
                format!("A new {entity} is created with identifier {id}"),
            ),
            (PARAMS_HEADER, id.to_string()),
        ],
        Json(record),
    )
        .into_response()
}
