//! Core customer domain types.

/// Database identifier for a customer.
pub type CustomerId = String;

/// A customer as stored in the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    /// Path or URL of the customer's profile picture.
    pub image_url: String,
}

/// The minimal customer details needed to populate a select input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerField {
    pub id: CustomerId,
    pub name: String,
}

/// A customer with totals over their invoices, for the customers table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerTableRow {
    pub customer: Customer,
    pub total_invoices: u64,
    /// The sum of the customer's pending invoices, formatted as currency.
    pub total_pending: String,
    /// The sum of the customer's paid invoices, formatted as currency.
    pub total_paid: String,
}
