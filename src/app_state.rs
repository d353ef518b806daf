//! Implements a struct that holds the state of the web server.

use rusqlite::Connection;

use crate::{Error, format::Locale, store::Store};

/// The state of the web server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The handle to the application database.
    pub store: Store,

    /// The locale that dates are displayed in.
    pub locale: Locale,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the tables for the domain models.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(db_connection: Connection, locale: Locale) -> Result<Self, Error> {
        Ok(Self {
            store: Store::new(db_connection)?,
            locale,
        })
    }
}
