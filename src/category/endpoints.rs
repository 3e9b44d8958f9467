//! Route handlers for the category REST resource.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    alert::created_response,
    category::{CATEGORY_ENTITY_NAME, Category, CategoryId, CategoryService},
    endpoints::{self, format_endpoint},
    internal_server_error::get_internal_server_error_response,
    not_found::get_404_not_found_response,
    stores::SortQuery,
};

/// Create a category. The category must not have an ID yet.
pub async fn create_category_endpoint(
    State(service): State<CategoryService>,
    body: Result<Json<Category>, JsonRejection>,
) -> Response {
    let Json(category) = match body {
        Ok(body) => body,
        Err(rejection) => {
            return Error::invalid_body(CATEGORY_ENTITY_NAME, rejection).into_response();
        }
    };

    tracing::debug!("REST request to save category: {category:?}");

    if category.id.is_some() {
        return Error::NewRecordHasId {
            entity: CATEGORY_ENTITY_NAME,
        }
        .into_response();
    }

    match service.save(category) {
        Ok(category) => {
            let Some(id) = category.id else {
                tracing::error!("the saved category {category:?} has no ID");
                return get_internal_server_error_response();
            };

            created_response(
                format_endpoint(endpoints::CATEGORY, id),
                CATEGORY_ENTITY_NAME,
                id,
                category,
            )
        }
        Err(error) => error.into_response(),
    }
}

/// Update a stored category. The category must have an ID.
pub async fn update_category_endpoint(
    State(service): State<CategoryService>,
    body: Result<Json<Category>, JsonRejection>,
) -> Response {
    let Json(category) = match body {
        Ok(body) => body,
        Err(rejection) => {
            return Error::invalid_body(CATEGORY_ENTITY_NAME, rejection).into_response();
        }
    };

    tracing::debug!("REST request to update category: {category:?}");

    if category.id.is_none() {
        return Error::MissingId {
            entity: CATEGORY_ENTITY_NAME,
        }
        .into_response();
    }

    match service.save(category) {
        Ok(category) => (StatusCode::OK, Json(category)).into_response(),
        Err(error) => error.into_response(),
    }
}

/// List all categories, optionally sorted with `?sort=id,desc`.
pub async fn list_categories_endpoint(
    State(service): State<CategoryService>,
    Query(query): Query<SortQuery>,
) -> Response {
    tracing::debug!("REST request to get all categories");

    match query.order().and_then(|order| service.find_all(order)) {
        Ok(categories) => (StatusCode::OK, Json(categories)).into_response(),
        Err(error) => error.into_response(),
    }
}

/// Get a category by its ID, responding with 404 if it does not exist.
pub async fn get_category_endpoint(
    State(service): State<CategoryService>,
    Path(category_id): Path<CategoryId>,
) -> Response {
    tracing::debug!("REST request to get category: {category_id}");

    match service.find_one(category_id) {
        Ok(Some(category)) => (StatusCode::OK, Json(category)).into_response(),
        Ok(None) => get_404_not_found_response(),
        Err(error) => error.into_response(),
    }
}

/// Delete a category by its ID. Deleting a missing category still succeeds.
pub async fn delete_category_endpoint(
    State(service): State<CategoryService>,
    Path(category_id): Path<CategoryId>,
) -> Response {
    tracing::debug!("REST request to delete category: {category_id}");

    match service.delete(category_id) {
        Ok(()) => StatusCode::OK.into_response(),
        Err(error) => error.into_response(),
    }
}
