//! Core invoice domain types.

use std::fmt::Display;

use rusqlite::{
    ToSql,
    types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef},
};
use time::Date;

use crate::customer::CustomerId;

/// Database identifier for an invoice.
pub type InvoiceId = String;

/// Whether an invoice has been paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    /// Every status, in the order they are offered in forms.
    pub const ALL: [InvoiceStatus; 2] = [InvoiceStatus::Pending, InvoiceStatus::Paid];

    /// The status as it is stored and submitted in forms.
    pub fn as_str(self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
        }
    }

    /// Parse a stored or submitted status, returning `None` for anything other
    /// than "pending" or "paid".
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(InvoiceStatus::Pending),
            "paid" => Some(InvoiceStatus::Paid),
            _ => None,
        }
    }

    /// The human readable label, e.g. "Pending".
    pub fn label(self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "Pending",
            InvoiceStatus::Paid => "Paid",
        }
    }
}

impl Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ToSql for InvoiceStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for InvoiceStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;

        InvoiceStatus::parse(text).ok_or_else(|| {
            FromSqlError::Other(format!("unknown invoice status \"{text}\"").into())
        })
    }
}

/// An invoice as stored in the database, with the amount in cents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    pub id: InvoiceId,
    pub customer_id: CustomerId,
    pub amount: i64,
    pub status: InvoiceStatus,
    pub date: Date,
}

/// The data for a new invoice row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInvoice {
    pub customer_id: CustomerId,
    pub amount_in_cents: i64,
    pub status: InvoiceStatus,
    pub date: Date,
}

/// An invoice joined with its customer's details, for the invoices table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceTableRow {
    pub id: InvoiceId,
    pub customer_id: CustomerId,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub date: Date,
    /// The amount in cents.
    pub amount: i64,
    pub status: InvoiceStatus,
}

/// One of the most recent invoices shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestInvoice {
    pub id: InvoiceId,
    pub name: String,
    pub email: String,
    pub image_url: String,
    /// The amount formatted as currency, e.g. "$157.95".
    pub amount: String,
}

/// An invoice loaded for editing.
///
/// Unlike every other read, the amount is in dollars, matching the form input.
#[derive(Debug, Clone, PartialEq)]
pub struct EditableInvoice {
    pub id: InvoiceId,
    pub customer_id: CustomerId,
    pub amount: f64,
    pub status: InvoiceStatus,
}
