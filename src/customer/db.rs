//! Database operations for customers.

use rusqlite::{Connection, Row, named_params};

use crate::{
    Error,
    customer::{Customer, CustomerField, CustomerTableRow},
    format::format_currency,
};

/// Initialize the customer table.
pub fn create_customer_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS customer (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            image_url TEXT NOT NULL
        );",
    )?;

    Ok(())
}

/// Insert `customer` unless a customer with the same ID already exists.
///
/// Existing rows are left untouched.
pub fn upsert_customer(customer: &Customer, connection: &Connection) -> Result<(), Error> {
    connection.execute(
        "INSERT INTO customer (id, name, email, image_url) VALUES (?1, ?2, ?3, ?4)
        ON CONFLICT(id) DO NOTHING;",
        (
            &customer.id,
            &customer.name,
            &customer.email,
            &customer.image_url,
        ),
    )?;

    Ok(())
}

/// Retrieve the ID and name of every customer ordered alphabetically by name.
pub(super) fn select_customer_fields(connection: &Connection) -> Result<Vec<CustomerField>, Error> {
    connection
        .prepare("SELECT id, name FROM customer ORDER BY name ASC;")?
        .query_map([], |row| {
            Ok(CustomerField {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?
        .map(|maybe_field| maybe_field.map_err(Error::from))
        .collect()
}

/// Retrieve the customers whose name or email contains `query`, with totals
/// over their invoices.
///
/// Matching is a case-sensitive substring search. An empty query matches
/// every customer.
pub(super) fn select_filtered_customers(
    query: &str,
    connection: &Connection,
) -> Result<Vec<CustomerTableRow>, Error> {
    connection
        .prepare(
            "SELECT customer.id, customer.name, customer.email, customer.image_url,
                COUNT(invoice.id),
                COALESCE(SUM(CASE WHEN invoice.status = 'pending' THEN invoice.amount ELSE 0 END), 0),
                COALESCE(SUM(CASE WHEN invoice.status = 'paid' THEN invoice.amount ELSE 0 END), 0)
            FROM customer
            LEFT JOIN invoice ON invoice.customer_id = customer.id
            WHERE instr(customer.name, :query) > 0 OR instr(customer.email, :query) > 0
            GROUP BY customer.id, customer.name, customer.email, customer.image_url
            ORDER BY customer.name ASC;",
        )?
        .query_map(named_params! { ":query": query }, map_table_row)?
        .map(|maybe_row| maybe_row.map_err(Error::from))
        .collect()
}

fn map_table_row(row: &Row) -> Result<CustomerTableRow, rusqlite::Error> {
    let total_invoices: i64 = row.get(4)?;
    let total_invoices = u64::try_from(total_invoices)
        .map_err(|_| rusqlite::Error::IntegralValueOutOfRange(4, total_invoices))?;
    let total_pending: i64 = row.get(5)?;
    let total_paid: i64 = row.get(6)?;

    Ok(CustomerTableRow {
        customer: Customer {
            id: row.get(0)?,
            name: row.get(1)?,
            email: row.get(2)?,
            image_url: row.get(3)?,
        },
        total_invoices,
        total_pending: format_currency(total_pending),
        total_paid: format_currency(total_paid),
    })
}

#[cfg(test)]
pub(crate) fn test_customer(id: &str, name: &str, email: &str) -> Customer {
    Customer {
        id: id.to_owned(),
        name: name.to_owned(),
        email: email.to_owned(),
        image_url: format!("/customers/{id}.png"),
    }
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        customer::{Customer, CustomerField, upsert_customer},
        invoice::{InvoiceStatus, NewInvoice, insert_invoice},
        store::initialize,
    };

    use super::{select_customer_fields, select_filtered_customers, test_customer};

    fn get_test_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();
        connection
    }

    fn insert_test_invoice(
        customer: &Customer,
        amount_in_cents: i64,
        status: InvoiceStatus,
        connection: &Connection,
    ) {
        insert_invoice(
            NewInvoice {
                customer_id: customer.id.clone(),
                amount_in_cents,
                status,
                date: date!(2023 - 06 - 01),
            },
            connection,
        )
        .expect("Could not create test invoice");
    }

    #[test]
    fn upsert_does_not_overwrite_existing_customer() {
        let connection = get_test_connection();
        let original = test_customer("c1", "Amy Burns", "amy@burns.com");
        let changed = test_customer("c1", "Someone Else", "else@example.com");

        upsert_customer(&original, &connection).unwrap();
        upsert_customer(&changed, &connection).unwrap();

        let fields = select_customer_fields(&connection).unwrap();
        assert_eq!(
            fields,
            [CustomerField {
                id: "c1".to_owned(),
                name: "Amy Burns".to_owned()
            }]
        );
    }

    #[test]
    fn customer_fields_are_sorted_by_name() {
        let connection = get_test_connection();
        for customer in [
            test_customer("c1", "Lee Robinson", "lee@robinson.com"),
            test_customer("c2", "Amy Burns", "amy@burns.com"),
            test_customer("c3", "Evil Rabbit", "evil@rabbit.com"),
        ] {
            upsert_customer(&customer, &connection).unwrap();
        }

        let names: Vec<_> = select_customer_fields(&connection)
            .unwrap()
            .into_iter()
            .map(|field| field.name)
            .collect();

        assert_eq!(names, ["Amy Burns", "Evil Rabbit", "Lee Robinson"]);
    }

    #[test]
    fn filtered_customers_include_invoice_totals() {
        let connection = get_test_connection();
        let amy = test_customer("c1", "Amy Burns", "amy@burns.com");
        let lee = test_customer("c2", "Lee Robinson", "lee@robinson.com");
        upsert_customer(&amy, &connection).unwrap();
        upsert_customer(&lee, &connection).unwrap();
        insert_test_invoice(&amy, 1250, InvoiceStatus::Paid, &connection);
        insert_test_invoice(&amy, 3040, InvoiceStatus::Paid, &connection);
        insert_test_invoice(&amy, 666, InvoiceStatus::Pending, &connection);

        let rows = select_filtered_customers("", &connection).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].customer, amy);
        assert_eq!(rows[0].total_invoices, 3);
        assert_eq!(rows[0].total_paid, "$42.90");
        assert_eq!(rows[0].total_pending, "$6.66");
        assert_eq!(rows[1].customer, lee);
        assert_eq!(rows[1].total_invoices, 0);
        assert_eq!(rows[1].total_paid, "$0.00");
        assert_eq!(rows[1].total_pending, "$0.00");
    }

    #[test]
    fn filters_by_name_or_email_case_sensitively() {
        let connection = get_test_connection();
        upsert_customer(&test_customer("c1", "Amy Burns", "amy@burns.com"), &connection).unwrap();
        upsert_customer(
            &test_customer("c2", "Lee Robinson", "lee@robinson.com"),
            &connection,
        )
        .unwrap();

        let by_name = select_filtered_customers("Burns", &connection).unwrap();
        let by_email = select_filtered_customers("robinson.com", &connection).unwrap();
        let wrong_case = select_filtered_customers("burns", &connection).unwrap();

        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].customer.id, "c1");
        assert_eq!(by_email.len(), 1);
        assert_eq!(by_email[0].customer.id, "c2");
        // "burns" still matches Amy through her email address.
        assert_eq!(wrong_case.len(), 1);
        assert!(select_filtered_customers("BURNS", &connection)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn invoice_counts_are_per_customer() {
        let connection = get_test_connection();
        let amy = test_customer("c1", "Amy Burns", "amy@burns.com");
        let lee = test_customer("c2", "Lee Robinson", "lee@robinson.com");
        upsert_customer(&amy, &connection).unwrap();
        upsert_customer(&lee, &connection).unwrap();
        for _ in 0..4 {
            insert_test_invoice(&lee, 100, InvoiceStatus::Pending, &connection);
        }
        insert_test_invoice(&amy, 100, InvoiceStatus::Paid, &connection);

        let counts: Vec<(String, u64)> = select_filtered_customers("", &connection)
            .unwrap()
            .into_iter()
            .map(|row| (row.customer.id, row.total_invoices))
            .collect();

        assert_eq!(counts, [("c1".to_owned(), 1), ("c2".to_owned(), 4)]);
    }
}
