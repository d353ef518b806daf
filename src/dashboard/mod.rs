//! Dashboard module
//!
//! Provides an overview page with summary cards, the monthly revenue chart
//! and the most recent invoices.

mod cards;
mod handlers;
mod latest_invoices;
mod revenue;

pub use handlers::get_dashboard_page;
pub use revenue::{Revenue, create_revenue_table, upsert_revenue};
