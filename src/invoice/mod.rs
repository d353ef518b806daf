//! Invoices: the queries and form actions behind the invoices pages.

mod create;
mod db;
mod delete;
mod domain;
mod edit;
mod filter;
mod form;
mod list;
mod mutation;
mod query;

pub use create::{create_invoice_endpoint, get_create_invoice_page};
pub use db::{create_invoice_table, insert_invoice};
pub use delete::delete_invoice_endpoint;
pub use domain::{
    EditableInvoice, Invoice, InvoiceId, InvoiceStatus, InvoiceTableRow, LatestInvoice,
    NewInvoice,
};
pub use edit::{get_edit_invoice_page, update_invoice_endpoint};
pub use filter::InvoiceFilter;
pub use form::{FormErrors, InvoiceFormData};
pub use list::get_invoices_page;
pub use mutation::{MutationOutcome, create_invoice, delete_invoice, update_invoice};
pub use query::{
    fetch_filtered_invoices, fetch_invoice_by_id, fetch_invoices_pages, fetch_latest_invoices,
};
