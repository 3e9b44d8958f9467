//! Route handlers shared by the expense and income REST resources.
//!
//! The handlers are generic over [EntryKind], so `create_entry_endpoint::<ExpenseKind>`
//! serves `/api/expenses` and `create_entry_endpoint::<IncomeKind>` serves `/api/incomes`.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    alert::created_response,
    endpoints::format_endpoint,
    entry::{Entry, EntryId, EntryKind, EntryService},
    internal_server_error::get_internal_server_error_response,
    not_found::get_404_not_found_response,
    stores::SortQuery,
};

/// Create an entry. The entry must not have an ID yet.
///
/// Any creation or update dates in the request body are replaced.
pub async fn create_entry_endpoint<K: EntryKind>(
    State(service): State<EntryService<K>>,
    body: Result<Json<Entry<K>>, JsonRejection>,
) -> Response {
    let Json(entry) = match body {
        Ok(body) => body,
        Err(rejection) => return Error::invalid_body(K::ENTITY_NAME, rejection).into_response(),
    };

    tracing::debug!("REST request to save {}: {entry:?}", K::ENTITY_NAME);

    if entry.id.is_some() {
        return Error::NewRecordHasId {
            entity: K::ENTITY_NAME,
        }
        .into_response();
    }

    match service.save(entry) {
        Ok(entry) => {
            let Some(id) = entry.id else {
                tracing::error!("the saved {} {entry:?} has no ID", K::ENTITY_NAME);
                return get_internal_server_error_response();
            };

            created_response(
                format_endpoint(K::ITEM_ENDPOINT, id),
                K::ENTITY_NAME,
                id,
                entry,
            )
        }
        Err(error) => error.into_response(),
    }
}

/// Update a stored entry. The entry must have an ID.
///
/// The creation date is kept from the stored entry.
pub async fn update_entry_endpoint<K: EntryKind>(
    State(service): State<EntryService<K>>,
    body: Result<Json<Entry<K>>, JsonRejection>,
) -> Response {
    let Json(entry) = match body {
        Ok(body) => body,
        Err(rejection) => return Error::invalid_body(K::ENTITY_NAME, rejection).into_response(),
    };

    tracing::debug!("REST request to update {}: {entry:?}", K::ENTITY_NAME);

    if entry.id.is_none() {
        return Error::MissingId {
            entity: K::ENTITY_NAME,
        }
        .into_response();
    }

    match service.save(entry) {
        Ok(entry) => (StatusCode::OK, Json(entry)).into_response(),
        Err(error) => error.into_response(),
    }
}

/// List all entries, optionally sorted with `?sort=id,desc`.
pub async fn list_entries_endpoint<K: EntryKind>(
    State(service): State<EntryService<K>>,
    Query(query): Query<SortQuery>,
) -> Response {
    tracing::debug!("REST request to get all {} records", K::ENTITY_NAME);

    match query.order().and_then(|order| service.find_all(order)) {
        Ok(entries) => (StatusCode::OK, Json(entries)).into_response(),
        Err(error) => error.into_response(),
    }
}

/// Get an entry by its ID, responding with 404 if it does not exist.
pub async fn get_entry_endpoint<K: EntryKind>(
    State(service): State<EntryService<K>>,
    Path(entry_id): Path<EntryId>,
) -> Response {
    tracing::debug!("REST request to get {}: {entry_id}", K::ENTITY_NAME);

    match service.find_one(entry_id) {
        Ok(Some(entry)) => (StatusCode::OK, Json(entry)).into_response(),
        Ok(None) => get_404_not_found_response(),
        Err(error) => error.into_response(),
    }
}

/// Delete an entry by its ID. Deleting a missing entry still succeeds.
pub async fn delete_entry_endpoint<K: EntryKind>(
    State(service): State<EntryService<K>>,
    Path(entry_id): Path<EntryId>,
) -> Response {
    tracing::debug!("REST request to delete {}: {entry_id}", K::ENTITY_NAME);

    match service.delete(entry_id) {
        Ok(()) => StatusCode::OK.into_response(),
        Err(error) => error.into_response(),
    }
}
