//! Database operations that write invoices.

use rusqlite::Connection;
use uuid::Uuid;

use crate::{
    Error,
    customer::CustomerId,
    invoice::{Invoice, InvoiceStatus, NewInvoice},
};

/// Initialize the invoice table.
pub fn create_invoice_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS invoice (
            id TEXT PRIMARY KEY,
            customer_id TEXT NOT NULL,
            amount INTEGER NOT NULL CHECK (amount >= 0),
            status TEXT NOT NULL CHECK (status IN ('pending', 'paid')),
            date TEXT NOT NULL,
            FOREIGN KEY(customer_id) REFERENCES customer(id) ON UPDATE CASCADE ON DELETE RESTRICT
        );

        CREATE INDEX IF NOT EXISTS idx_invoice_date ON invoice(date);",
    )?;

    Ok(())
}

/// Insert a new invoice with a freshly generated ID.
///
/// # Errors
/// Returns [Error::SqlError] if the row could not be inserted, e.g. because
/// the customer does not exist.
pub fn insert_invoice(invoice: NewInvoice, connection: &Connection) -> Result<Invoice, Error> {
    let id = Uuid::new_v4().to_string();

    connection.execute(
        "INSERT INTO invoice (id, customer_id, amount, status, date) VALUES (?1, ?2, ?3, ?4, ?5);",
        (
            &id,
            &invoice.customer_id,
            invoice.amount_in_cents,
            invoice.status,
            invoice.date,
        ),
    )?;

    Ok(Invoice {
        id,
        customer_id: invoice.customer_id,
        amount: invoice.amount_in_cents,
        status: invoice.status,
        date: invoice.date,
    })
}

/// Overwrite the customer, amount and status of the invoice `id`. The date is
/// left as is.
///
/// # Errors
/// Returns [Error::NotFound] if no invoice has the ID `id`.
pub(super) fn update_invoice_row(
    id: &str,
    customer_id: &CustomerId,
    amount_in_cents: i64,
    status: InvoiceStatus,
    connection: &Connection,
) -> Result<(), Error> {
    let rows_affected = connection.execute(
        "UPDATE invoice SET customer_id = ?1, amount = ?2, status = ?3 WHERE id = ?4;",
        (customer_id, amount_in_cents, status, id),
    )?;

    if rows_affected == 0 {
        return Err(Error::NotFound);
    }

    Ok(())
}

/// Delete the invoice `id`.
///
/// # Errors
/// Returns [Error::NotFound] if no invoice has the ID `id`.
pub(super) fn delete_invoice_row(id: &str, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute("DELETE FROM invoice WHERE id = ?1;", [id])?;

    if rows_affected == 0 {
        return Err(Error::NotFound);
    }

    Ok(())
}

#[cfg(test)]
pub(crate) fn get_invoice(id: &str, connection: &Connection) -> Result<Invoice, Error> {
    connection
        .query_row(
            "SELECT id, customer_id, amount, status, date FROM invoice WHERE id = ?1;",
            [id],
            |row| {
                Ok(Invoice {
                    id: row.get(0)?,
                    customer_id: row.get(1)?,
                    amount: row.get(2)?,
                    status: row.get(3)?,
                    date: row.get(4)?,
                })
            },
        )
        .map_err(Error::from)
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        Error,
        customer::{Customer, upsert_customer},
        invoice::{InvoiceStatus, NewInvoice, insert_invoice},
        store::initialize,
    };

    use super::{delete_invoice_row, get_invoice, update_invoice_row};

    fn get_test_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();
        upsert_customer(
            &Customer {
                id: "c1".to_owned(),
                name: "Lee Robinson".to_owned(),
                email: "lee@robinson.com".to_owned(),
                image_url: "/customers/lee-robinson.png".to_owned(),
            },
            &connection,
        )
        .unwrap();
        connection
    }

    fn new_invoice(customer_id: &str) -> NewInvoice {
        NewInvoice {
            customer_id: customer_id.to_owned(),
            amount_in_cents: 54246,
            status: InvoiceStatus::Pending,
            date: date!(2023 - 07 - 16),
        }
    }

    #[test]
    fn can_insert_invoice() {
        let connection = get_test_connection();

        let invoice = insert_invoice(new_invoice("c1"), &connection).unwrap();

        assert_eq!(get_invoice(&invoice.id, &connection), Ok(invoice));
    }

    #[test]
    fn inserted_invoices_get_unique_ids() {
        let connection = get_test_connection();

        let first = insert_invoice(new_invoice("c1"), &connection).unwrap();
        let second = insert_invoice(new_invoice("c1"), &connection).unwrap();

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn insert_fails_for_missing_customer() {
        let connection = get_test_connection();

        let result = insert_invoice(new_invoice("missing"), &connection);

        assert!(matches!(result, Err(Error::SqlError(_))), "got {result:?}");
    }

    #[test]
    fn insert_fails_for_negative_amount() {
        let connection = get_test_connection();
        let invoice = NewInvoice {
            amount_in_cents: -1,
            ..new_invoice("c1")
        };

        assert!(insert_invoice(invoice, &connection).is_err());
    }

    #[test]
    fn update_keeps_date() {
        let connection = get_test_connection();
        let invoice = insert_invoice(new_invoice("c1"), &connection).unwrap();

        update_invoice_row(
            &invoice.id,
            &"c1".to_owned(),
            100,
            InvoiceStatus::Paid,
            &connection,
        )
        .unwrap();

        let got = get_invoice(&invoice.id, &connection).unwrap();
        assert_eq!(got.amount, 100);
        assert_eq!(got.status, InvoiceStatus::Paid);
        assert_eq!(got.date, invoice.date);
    }

    #[test]
    fn update_missing_invoice_fails() {
        let connection = get_test_connection();

        let result = update_invoice_row(
            "missing",
            &"c1".to_owned(),
            100,
            InvoiceStatus::Paid,
            &connection,
        );

        assert_eq!(result, Err(Error::NotFound));
    }

    #[test]
    fn can_delete_invoice() {
        let connection = get_test_connection();
        let invoice = insert_invoice(new_invoice("c1"), &connection).unwrap();

        delete_invoice_row(&invoice.id, &connection).unwrap();

        assert_eq!(get_invoice(&invoice.id, &connection), Err(Error::NotFound));
        assert_eq!(
            delete_invoice_row(&invoice.id, &connection),
            Err(Error::NotFound)
        );
    }
}
