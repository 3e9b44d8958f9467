//! Defines the app level error type and its conversion into JSON responses.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{
    database_id::DatabaseId, internal_server_error::get_internal_server_error_response,
    not_found::get_404_not_found_response,
};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A record sent for creation already has an ID.
    ///
    /// IDs are assigned by the database on the first insert, so clients must
    /// leave the ID empty and use the update route for existing records.
    #[error("A new {entity} cannot have already an Id!")]
    NewRecordHasId {
        /// The name of the entity, e.g. "expense".
        entity: &'static str,
    },

    /// A record sent for an update does not have an ID.
    #[error("Invalid Id!")]
    MissingId {
        /// The name of the entity, e.g. "expense".
        entity: &'static str,
    },

    /// The current time could not be converted into a second-resolution timestamp.
    #[error("Invalid date")]
    InvalidDate {
        /// The name of the entity, e.g. "expense".
        entity: &'static str,
    },

    /// The request body is not valid JSON for the record, e.g. a date that is
    /// not an RFC 3339 timestamp.
    #[error("Invalid request body: {reason}")]
    InvalidBody {
        /// The name of the entity, e.g. "expense".
        entity: &'static str,
        /// Why the body could not be read.
        reason: String,
    },

    /// The category attached to an expense or income does not refer to a stored category.
    ///
    /// A category reference must carry the ID of a category that has already
    /// been created.
    #[error("the category ID {0:?} does not refer to a valid category")]
    InvalidCategory(Option<DatabaseId>),

    /// The `sort` query parameter could not be parsed.
    #[error("invalid sort order \"{0}\", expected \"id\", \"id,asc\" or \"id,desc\"")]
    InvalidSortOrder(String),

    /// Tried to update a record that does not exist.
    #[error("tried to update a {entity} that is not in the database")]
    UpdateMissingRecord {
        /// The name of the entity, e.g. "expense".
        entity: &'static str,
    },

    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl Error {
    /// The name of the entity the error relates to, if any.
    pub fn entity_name(&self) -> Option<&'static str> {
        match self {
            Error::NewRecordHasId { entity }
            | Error::MissingId { entity }
            | Error::InvalidDate { entity }
            | Error::InvalidBody { entity, .. }
            | Error::UpdateMissingRecord { entity } => Some(*entity),
            _ => None,
        }
    }

    /// Convert a rejected JSON body for `entity` into an [Error::InvalidBody].
    pub fn invalid_body(entity: &'static str, rejection: JsonRejection) -> Self {
        tracing::debug!("rejected {entity} body: {rejection}");

        Error::InvalidBody {
            entity,
            reason: rejection.body_text(),
        }
    }

    fn client_error_response(&self, status: StatusCode) -> Response {
        let body = match self.entity_name() {
            Some(entity) => json!({
                "entityName": entity,
                "message": self.to_string(),
            }),
            None => json!({
                "message": self.to_string(),
            }),
        };

        (status, Json(body)).into_response()
    }
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            // Code 787 occurs when a FOREIGN KEY constraint failed.
            rusqlite::Error::SqliteFailure(sql_error, _) if sql_error.extended_code == 787 => {
                Error::InvalidCategory(None)
            }
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NewRecordHasId { .. }
            | Error::MissingId { .. }
            | Error::InvalidDate { .. }
            | Error::InvalidBody { .. }
            | Error::InvalidCategory(_)
            | Error::InvalidSortOrder(_) => self.client_error_response(StatusCode::BAD_REQUEST),
            Error::UpdateMissingRecord { .. } => {
                self.client_error_response(StatusCode::NOT_FOUND)
            }
            Error::NotFound => get_404_not_found_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                get_internal_server_error_response()
            }
        }
    }
}
