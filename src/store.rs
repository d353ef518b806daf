//! The handle through which every part of the app reaches the SQLite database.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{
    Error, customer::create_customer_table, dashboard::create_revenue_table,
    invoice::create_invoice_table, user::create_user_table,
};

/// A clonable handle to the application database.
///
/// Construct it once and pass it to the layers that need it. Each call to
/// [Store::run] holds the connection only for the duration of one operation.
#[derive(Debug, Clone)]
pub struct Store {
    connection: Arc<Mutex<Connection>>,
}

impl Store {
    /// Create a store from an open SQLite connection.
    ///
    /// This enables foreign key enforcement and creates any missing tables.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(connection: Connection) -> Result<Self, Error> {
        initialize(&connection)?;

        Ok(Self {
            connection: Arc::new(Mutex::new(connection)),
        })
    }

    /// Run `operation` against the database on the blocking thread pool.
    ///
    /// The connection is locked for the duration of `operation` and released
    /// when it returns, whether it succeeds or fails.
    ///
    /// # Errors
    /// Returns the error produced by `operation`, [Error::DatabaseLockError] if
    /// the lock is poisoned, or [Error::TaskFailed] if the task panicked.
    pub async fn run<T, F>(&self, operation: F) -> Result<T, Error>
    where
        F: FnOnce(&Connection) -> Result<T, Error> + Send + 'static,
        T: Send + 'static,
    {
        let connection = self.connection.clone();

        tokio::task::spawn_blocking(move || {
            let connection = connection
                .lock()
                .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
                .map_err(|_| Error::DatabaseLockError)?;

            operation(&connection)
        })
        .await
        .map_err(|error| Error::TaskFailed(error.to_string()))?
    }
}

/// Create the tables for the domain models if they do not already exist.
///
/// # Errors
/// Returns an error if a table could not be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    connection.pragma_update(None, "foreign_keys", true)?;

    let transaction = connection.unchecked_transaction()?;

    create_user_table(&transaction)?;
    create_customer_table(&transaction)?;
    create_invoice_table(&transaction)?;
    create_revenue_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}

#[cfg(test)]
pub(crate) fn get_test_store() -> Store {
    let connection = Connection::open_in_memory().expect("Could not open in-memory database");
    Store::new(connection).expect("Could not initialize database")
}
