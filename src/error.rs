//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    alert::Alert, internal_server_error::InternalServerError, invoice::FormErrors,
    not_found::NotFoundError,
};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The submitted invoice form did not match the expected schema.
    ///
    /// No store operation is attempted when this error is returned.
    #[error("invalid form: {0}")]
    InvalidForm(FormErrors),

    /// A read from the store failed.
    ///
    /// The string is a fixed message describing the failed operation, e.g.,
    /// "Failed to fetch invoices.". The underlying cause is logged where the
    /// error occurs and is not passed on to the caller.
    #[error("{0}")]
    FetchFailed(&'static str),

    /// A string could not be parsed as an ISO 8601 calendar date.
    #[error("\"{0}\" is not a valid calendar date")]
    InvalidDate(String),

    /// A locale tag that has no date format defined for it.
    #[error("unsupported locale \"{0}\"")]
    UnsupportedLocale(String),

    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// An unexpected error occurred with the underlying hashing library.
    ///
    /// The error string should only be logged for debugging on the server.
    #[error("hashing failed: {0}")]
    HashingError(String),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// A blocking task running a store operation panicked or was cancelled.
    #[error("store task failed: {0}")]
    TaskFailed(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => Error::SqlError(error),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => NotFoundError.into_response(),
            Error::FetchFailed(message) => InternalServerError {
                description: message,
                fix: "Try again later or check the server logs",
            }
            .into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::InvalidForm(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Alert::Error {
                    message: "Missing Fields. Failed to save invoice.".to_owned(),
                    details: errors.to_string(),
                },
            ),
            Error::NotFound => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Could not find invoice".to_owned(),
                    details: "The invoice could not be found. \
                    Try refreshing the page to see if it has been deleted."
                        .to_owned(),
                },
            ),
            Error::FetchFailed(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: message.to_owned(),
                    details: "Try again later or check the server logs.".to_owned(),
                },
            ),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Alert::Error {
                        message: "Something went wrong".to_owned(),
                        details:
                            "An unexpected error occurred, check the server logs for more details."
                                .to_owned(),
                    },
                )
            }
        };

        (status_code, alert.into_html()).into_response()
    }
}
