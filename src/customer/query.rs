//! Read queries for customers.

use crate::{
    Error,
    customer::{CustomerField, CustomerTableRow},
    store::Store,
};

use super::db::{select_customer_fields, select_filtered_customers};

/// Fetch the ID and name of every customer, sorted by name.
///
/// # Errors
/// Returns [Error::FetchFailed] if the store could not be read. The cause is logged.
pub async fn fetch_customers(store: &Store) -> Result<Vec<CustomerField>, Error> {
    store
        .run(select_customer_fields)
        .await
        .inspect_err(|error| tracing::error!("Database Error: {error}"))
        .map_err(|_| Error::FetchFailed("Failed to fetch all customers."))
}

/// Fetch the customers whose name or email contains `query`, along with the
/// number of invoices and the pending and paid totals for each.
///
/// # Errors
/// Returns [Error::FetchFailed] if the store could not be read. The cause is logged.
pub async fn fetch_filtered_customers(
    store: &Store,
    query: &str,
) -> Result<Vec<CustomerTableRow>, Error> {
    let query = query.to_owned();

    store
        .run(move |connection| select_filtered_customers(&query, connection))
        .await
        .inspect_err(|error| tracing::error!("Database Error: {error}"))
        .map_err(|_| Error::FetchFailed("Failed to fetch customer table."))
}
