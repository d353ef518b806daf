//! Read queries for invoices.

use rusqlite::{Connection, OptionalExtension, params_from_iter, types::Value};

use crate::{
    Error,
    format::format_currency,
    invoice::{EditableInvoice, InvoiceFilter, InvoiceStatus, InvoiceTableRow, LatestInvoice},
    pagination::ITEMS_PER_PAGE,
    store::Store,
};

/// How many invoices are shown in the dashboard's latest invoices list.
pub const LATEST_INVOICE_COUNT: u64 = 5;

/// Get one page of the invoices matching `filter`, newest first.
///
/// Invoices on the same date are ordered by ID so that paging is stable.
/// `current_page` starts at 1; page 0 is treated as page 1.
pub(super) fn select_filtered_invoices(
    filter: &InvoiceFilter,
    current_page: u64,
    connection: &Connection,
) -> Result<Vec<InvoiceTableRow>, Error> {
    let (where_clause, mut params) = filter.to_sql();
    let offset = current_page.saturating_sub(1).saturating_mul(ITEMS_PER_PAGE);
    params.push(Value::Integer(ITEMS_PER_PAGE as i64));
    params.push(Value::Integer(i64::try_from(offset).unwrap_or(i64::MAX)));

    let query = format!(
        "SELECT invoice.id, invoice.customer_id, customer.name, customer.email,
            customer.image_url, invoice.date, invoice.amount, invoice.status
        FROM invoice
        INNER JOIN customer ON invoice.customer_id = customer.id
        WHERE {where_clause}
        ORDER BY invoice.date DESC, invoice.id ASC
        LIMIT ? OFFSET ?;"
    );

    connection
        .prepare(&query)?
        .query_map(params_from_iter(params), |row| {
            Ok(InvoiceTableRow {
                id: row.get(0)?,
                customer_id: row.get(1)?,
                name: row.get(2)?,
                email: row.get(3)?,
                image_url: row.get(4)?,
                date: row.get(5)?,
                amount: row.get(6)?,
                status: row.get(7)?,
            })
        })?
        .map(|maybe_row| maybe_row.map_err(Error::from))
        .collect()
}

/// Count the invoices matching `filter`.
pub(super) fn count_filtered_invoices(
    filter: &InvoiceFilter,
    connection: &Connection,
) -> Result<u64, Error> {
    let (where_clause, params) = filter.to_sql();
    let query = format!(
        "SELECT COUNT(invoice.id)
        FROM invoice
        INNER JOIN customer ON invoice.customer_id = customer.id
        WHERE {where_clause};"
    );

    let count: i64 = connection.query_row(&query, params_from_iter(params), |row| row.get(0))?;

    Ok(count as u64)
}

fn select_invoice_by_id(
    id: &str,
    customer_id: Option<&str>,
    status: Option<InvoiceStatus>,
    connection: &Connection,
) -> Result<Option<EditableInvoice>, Error> {
    connection
        .query_row(
            "SELECT id, customer_id, amount, status FROM invoice
            WHERE id = ?1
                AND (?2 IS NULL OR customer_id = ?2)
                AND (?3 IS NULL OR status = ?3);",
            (id, customer_id, status),
            |row| {
                let amount_in_cents: i64 = row.get(2)?;

                Ok(EditableInvoice {
                    id: row.get(0)?,
                    customer_id: row.get(1)?,
                    amount: amount_in_cents as f64 / 100.0,
                    status: row.get(3)?,
                })
            },
        )
        .optional()
        .map_err(Error::from)
}

fn select_latest_invoices(connection: &Connection) -> Result<Vec<LatestInvoice>, Error> {
    connection
        .prepare(
            "SELECT invoice.id, customer.name, customer.email, customer.image_url, invoice.amount
            FROM invoice
            INNER JOIN customer ON invoice.customer_id = customer.id
            ORDER BY invoice.date DESC, invoice.id ASC
            LIMIT ?1;",
        )?
        .query_map([LATEST_INVOICE_COUNT as i64], |row| {
            let amount: i64 = row.get(4)?;

            Ok(LatestInvoice {
                id: row.get(0)?,
                name: row.get(1)?,
                email: row.get(2)?,
                image_url: row.get(3)?,
                amount: format_currency(amount),
            })
        })?
        .map(|maybe_row| maybe_row.map_err(Error::from))
        .collect()
}

/// Fetch one page of the invoices matching the search `query`, newest first,
/// joined with each invoice's customer.
///
/// See [InvoiceFilter::from_query] for how the query is matched.
///
/// # Errors
/// Returns [Error::FetchFailed] if the store could not be read. The cause is logged.
pub async fn fetch_filtered_invoices(
    store: &Store,
    query: &str,
    current_page: u64,
) -> Result<Vec<InvoiceTableRow>, Error> {
    let filter = InvoiceFilter::from_query(query);

    store
        .run(move |connection| select_filtered_invoices(&filter, current_page, connection))
        .await
        .inspect_err(|error| tracing::error!("Database Error: {error}"))
        .map_err(|_| Error::FetchFailed("Failed to fetch invoices."))
}

/// Fetch the number of pages needed to show every invoice matching `query`.
///
/// # Errors
/// Returns [Error::FetchFailed] if the store could not be read. The cause is logged.
pub async fn fetch_invoices_pages(store: &Store, query: &str) -> Result<u64, Error> {
    let filter = InvoiceFilter::from_query(query);

    store
        .run(move |connection| count_filtered_invoices(&filter, connection))
        .await
        .map(|count| count.div_ceil(ITEMS_PER_PAGE))
        .inspect_err(|error| tracing::error!("Database Error: {error}"))
        .map_err(|_| Error::FetchFailed("Failed to fetch total number of invoices."))
}

/// Fetch the invoice `id` for editing, optionally requiring that it belongs
/// to `customer_id` and has `status`.
///
/// Returns `Ok(None)` if no invoice matches. The amount is converted from
/// cents to dollars.
///
/// # Errors
/// Returns [Error::FetchFailed] if the store could not be read. The cause is logged.
pub async fn fetch_invoice_by_id(
    store: &Store,
    id: &str,
    customer_id: Option<&str>,
    status: Option<InvoiceStatus>,
) -> Result<Option<EditableInvoice>, Error> {
    let id = id.to_owned();
    let customer_id = customer_id.map(ToOwned::to_owned);

    store
        .run(move |connection| {
            select_invoice_by_id(&id, customer_id.as_deref(), status, connection)
        })
        .await
        .inspect_err(|error| tracing::error!("Database Error: {error}"))
        .map_err(|_| Error::FetchFailed("Failed to fetch invoice."))
}

/// Fetch the five most recent invoices with their amounts formatted as currency.
///
/// # Errors
/// Returns [Error::FetchFailed] if the store could not be read. The cause is logged.
pub async fn fetch_latest_invoices(store: &Store) -> Result<Vec<LatestInvoice>, Error> {
    store
        .run(select_latest_invoices)
        .await
        .inspect_err(|error| tracing::error!("Database Error: {error}"))
        .map_err(|_| Error::FetchFailed("Failed to fetch the latest invoices."))
}
