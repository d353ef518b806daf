//! The summary cards at the top of the dashboard.

use maud::{Markup, html};
use rusqlite::Connection;

use crate::{Error, format::format_currency, invoice::InvoiceStatus, store::Store};

/// The totals shown in the dashboard's summary cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardData {
    pub number_of_customers: u64,
    pub number_of_invoices: u64,
    /// The sum of all paid invoices, formatted as currency.
    pub total_paid_invoices: String,
    /// The sum of all pending invoices, formatted as currency.
    pub total_pending_invoices: String,
}

fn count_rows(table: &'static str, connection: &Connection) -> Result<u64, Error> {
    let count: i64 =
        connection.query_row(&format!("SELECT COUNT(*) FROM {table};"), [], |row| row.get(0))?;

    Ok(count as u64)
}

fn sum_invoices(status: InvoiceStatus, connection: &Connection) -> Result<i64, Error> {
    connection
        .query_row(
            "SELECT COALESCE(SUM(amount), 0) FROM invoice WHERE status = ?1;",
            [status],
            |row| row.get(0),
        )
        .map_err(Error::from)
}

/// Count the invoices and customers and total the paid and pending invoices.
///
/// The four queries are issued together and the call fails if any of them
/// fails.
///
/// # Errors
/// Returns [Error::FetchFailed] if the store could not be read. The cause is logged.
pub async fn fetch_card_data(store: &Store) -> Result<CardData, Error> {
    let (number_of_invoices, number_of_customers, total_paid, total_pending) = tokio::try_join!(
        store.run(|connection| count_rows("invoice", connection)),
        store.run(|connection| count_rows("customer", connection)),
        store.run(|connection| sum_invoices(InvoiceStatus::Paid, connection)),
        store.run(|connection| sum_invoices(InvoiceStatus::Pending, connection)),
    )
    .inspect_err(|error| tracing::error!("Database Error: {error}"))
    .map_err(|_| Error::FetchFailed("Failed to fetch card data."))?;

    Ok(CardData {
        number_of_customers,
        number_of_invoices,
        total_paid_invoices: format_currency(total_paid),
        total_pending_invoices: format_currency(total_pending),
    })
}

fn card(title: &str, value: &str) -> Markup {
    html! {
        div class="rounded-xl bg-white dark:bg-gray-800 p-2 shadow-sm"
        {
            h3 class="ml-2 p-2 text-sm font-medium text-gray-600 dark:text-gray-300" { (title) }

            p class="truncate rounded-xl bg-gray-50 dark:bg-gray-700 px-4 py-8 text-center text-2xl"
            {
                (value)
            }
        }
    }
}

pub(super) fn cards_view(data: &CardData) -> Markup {
    html! {
        section class="grid gap-6 sm:grid-cols-2 lg:grid-cols-4"
        {
            (card("Collected", &data.total_paid_invoices))
            (card("Pending", &data.total_pending_invoices))
            (card("Total Invoices", &data.number_of_invoices.to_string()))
            (card("Total Customers", &data.number_of_customers.to_string()))
        }
    }
}
