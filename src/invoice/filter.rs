//! Builds the search filter for the invoices table from a free-text query.

use rusqlite::types::Value;
use time::{Date, macros::format_description};

/// The predicates derived from a search query.
///
/// Each field is one optional clause. An invoice matches the filter when it
/// satisfies any present clause, and every invoice matches a filter with no
/// clauses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvoiceFilter {
    /// Case-sensitive substring of the customer's name or email, or of the
    /// invoice status.
    pub text: Option<String>,
    /// Exact amount in cents.
    pub amount: Option<i64>,
    /// Exact invoice date.
    pub date: Option<Date>,
}

impl InvoiceFilter {
    /// Build the filter for `query`.
    ///
    /// A query that is empty or only whitespace adds no text clause. The
    /// amount and date clauses are only added when the trimmed query parses as
    /// an integer or as an ISO 8601 date.
    pub fn from_query(query: &str) -> Self {
        let trimmed = query.trim();

        Self {
            text: (!trimmed.is_empty()).then(|| query.to_owned()),
            amount: trimmed.parse().ok(),
            date: Date::parse(trimmed, format_description!("[year]-[month]-[day]")).ok(),
        }
    }

    /// Whether the filter has no clauses and so matches every invoice.
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.amount.is_none() && self.date.is_none()
    }

    /// Render the filter as a SQL boolean expression over the `invoice` and
    /// `customer` tables along with the values for its positional parameters.
    pub(super) fn to_sql(&self) -> (String, Vec<Value>) {
        if self.is_empty() {
            return ("1".to_owned(), Vec::new());
        }

        let mut clauses = Vec::new();
        let mut params = Vec::new();

        if let Some(text) = &self.text {
            for column in ["customer.name", "customer.email", "invoice.status"] {
                clauses.push(format!("instr({column}, ?) > 0"));
                params.push(Value::Text(text.clone()));
            }
        }

        if let Some(amount) = self.amount {
            clauses.push("invoice.amount = ?".to_owned());
            params.push(Value::Integer(amount));
        }

        if let Some(date) = self.date {
            clauses.push("invoice.date = ?".to_owned());
            params.push(Value::Text(date.to_string()));
        }

        (format!("({})", clauses.join(" OR ")), params)
    }
}
