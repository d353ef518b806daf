//! Customers listing page.

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState, Error,
    customer::{CustomerTableRow, fetch_filtered_customers},
    endpoints,
    html::{
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, avatar, dashboard_page,
        search_input,
    },
    navigation::NavBar,
    store::Store,
};

/// The state needed for the customers page.
#[derive(Debug, Clone)]
pub struct CustomersPageState {
    pub store: Store,
}

impl FromRef<AppState> for CustomersPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// The query parameters accepted by the customers page.
#[derive(Debug, Default, Deserialize)]
pub struct CustomersQuery {
    #[serde(default)]
    pub query: String,
}

/// Render the customers whose name or email matches the search query.
pub async fn get_customers_page(
    State(state): State<CustomersPageState>,
    Query(params): Query<CustomersQuery>,
) -> Result<Response, Error> {
    let customers = fetch_filtered_customers(&state.store, &params.query).await?;

    Ok(customers_view(&params.query, &customers).into_response())
}

fn customers_view(query: &str, customers: &[CustomerTableRow]) -> Markup {
    let nav_bar = NavBar::new(endpoints::CUSTOMERS_VIEW).into_html();

    let table_row = |row: &CustomerTableRow| {
        html!(
            tr class=(TABLE_ROW_STYLE)
            {
                td class=(TABLE_CELL_STYLE)
                {
                    (avatar(&row.customer.image_url, &row.customer.name))
                    (row.customer.name)
                }
                td class=(TABLE_CELL_STYLE) { (row.customer.email) }
                td class=(TABLE_CELL_STYLE) { (row.total_invoices) }
                td class=(TABLE_CELL_STYLE) { (row.total_pending) }
                td class=(TABLE_CELL_STYLE) { (row.total_paid) }
            }
        )
    };

    let content = html!(
        (search_input(endpoints::CUSTOMERS_VIEW, query, "Search customers..."))

        div class="overflow-x-auto rounded-lg"
        {
            table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Name" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Email" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Total Invoices" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Total Pending" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Total Paid" }
                    }
                }

                tbody
                {
                    @for row in customers {
                        (table_row(row))
                    }

                    @if customers.is_empty() {
                        tr class=(TABLE_ROW_STYLE)
                        {
                            td colspan="5" class=(TABLE_CELL_STYLE) { "No customers found." }
                        }
                    }
                }
            }
        }
    );

    dashboard_page("Customers", &[], nav_bar, &content)
}
