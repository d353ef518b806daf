//! The dashboard overview page.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    dashboard::{
        cards::{CardData, cards_view, fetch_card_data},
        latest_invoices::latest_invoices_view,
        revenue::{Revenue, fetch_revenue, revenue_chart_view},
    },
    endpoints,
    html::dashboard_page,
    invoice::{LatestInvoice, fetch_latest_invoices},
    navigation::NavBar,
    store::Store,
};

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub store: Store,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// Display the summary cards, the revenue chart and the latest invoices.
///
/// The three sections are loaded concurrently. If any of them fails the
/// whole page is replaced by an error page naming the failed read.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Result<Response, Error> {
    let (card_data, revenue, latest_invoices) = tokio::try_join!(
        fetch_card_data(&state.store),
        fetch_revenue(&state.store),
        fetch_latest_invoices(&state.store),
    )?;

    Ok(dashboard_view(&card_data, &revenue, &latest_invoices).into_response())
}

fn dashboard_view(
    card_data: &CardData,
    revenue: &[Revenue],
    latest_invoices: &[LatestInvoice],
) -> Markup {
    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW).into_html();

    let content = html!(
        (cards_view(card_data))

        div class="mt-6 grid grid-cols-1 gap-6 md:grid-cols-4 lg:grid-cols-8"
        {
            (revenue_chart_view(revenue))
            (latest_invoices_view(latest_invoices))
        }
    );

    dashboard_page("Dashboard", &[], nav_bar, &content)
}
