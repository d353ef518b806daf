//! Customers that invoices are billed to.

mod db;
mod domain;
mod list;
mod query;

pub use db::{create_customer_table, upsert_customer};
#[cfg(test)]
pub(crate) use db::test_customer;
pub use domain::{Customer, CustomerField, CustomerId, CustomerTableRow};
pub use list::get_customers_page;
pub use query::{fetch_customers, fetch_filtered_customers};
