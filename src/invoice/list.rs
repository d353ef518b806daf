//! The searchable, paginated invoices page.

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState, Error, endpoints,
    format::{Locale, format_currency, format_date},
    html::{
        BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, LINK_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, avatar, dashboard_page, search_input,
    },
    invoice::{InvoiceStatus, InvoiceTableRow, fetch_filtered_invoices, fetch_invoices_pages},
    navigation::NavBar,
    pagination::pagination_view,
    store::Store,
};

/// The state needed for the invoices page.
#[derive(Debug, Clone)]
pub struct InvoicesPageState {
    pub store: Store,
    pub locale: Locale,
}

impl FromRef<AppState> for InvoicesPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            locale: state.locale,
        }
    }
}

/// The query parameters accepted by the invoices page.
#[derive(Debug, Default, Deserialize)]
pub struct InvoicesQuery {
    #[serde(default)]
    pub query: String,
    /// The 1-based page number. Anything that is not a positive integer is
    /// treated as the first page.
    pub page: Option<String>,
}

impl InvoicesQuery {
    fn current_page(&self) -> u64 {
        self.page
            .as_deref()
            .and_then(|page| page.trim().parse::<u64>().ok())
            .filter(|&page| page >= 1)
            .unwrap_or(1)
    }
}

/// Build the URL of `page` of the invoices matching `query`.
fn invoices_page_url(query: &str, page: u64) -> String {
    let page = page.to_string();
    let params = if query.is_empty() {
        serde_urlencoded::to_string([("page", page.as_str())])
    } else {
        serde_urlencoded::to_string([("query", query), ("page", page.as_str())])
    };

    match params {
        Ok(params) => format!("{}?{params}", endpoints::INVOICES_VIEW),
        Err(error) => {
            tracing::error!("could not encode invoices page URL: {error}");
            endpoints::INVOICES_VIEW.to_owned()
        }
    }
}

/// Render the invoices matching the search query, one page at a time.
pub async fn get_invoices_page(
    State(state): State<InvoicesPageState>,
    Query(params): Query<InvoicesQuery>,
) -> Result<Response, Error> {
    let current_page = params.current_page();

    let (invoices, page_count) = tokio::try_join!(
        fetch_filtered_invoices(&state.store, &params.query, current_page),
        fetch_invoices_pages(&state.store, &params.query),
    )?;

    Ok(invoices_view(
        &params.query,
        current_page,
        page_count,
        &invoices,
        state.locale,
    )
    .into_response())
}

fn status_badge(status: InvoiceStatus) -> Markup {
    let style = match status {
        InvoiceStatus::Pending => "bg-gray-100 text-gray-500 dark:bg-gray-700 dark:text-gray-300",
        InvoiceStatus::Paid => "bg-green-500 text-white",
    };

    html! {
        span class={ "inline-flex items-center rounded-full px-2 py-1 text-xs " (style) }
        {
            (status.label())
        }
    }
}

fn invoices_view(
    query: &str,
    current_page: u64,
    page_count: u64,
    invoices: &[InvoiceTableRow],
    locale: Locale,
) -> Markup {
    let nav_bar = NavBar::new(endpoints::INVOICES_VIEW).into_html();

    let table_row = |invoice: &InvoiceTableRow| {
        let edit_url = endpoints::format_endpoint(endpoints::EDIT_INVOICE_VIEW, &invoice.id);
        let delete_url = endpoints::format_endpoint(endpoints::INVOICE_API, &invoice.id);

        html!(
            tr class=(TABLE_ROW_STYLE)
            {
                td class=(TABLE_CELL_STYLE)
                {
                    (avatar(&invoice.image_url, &invoice.name))
                    (invoice.name)
                }
                td class=(TABLE_CELL_STYLE) { (invoice.email) }
                td class=(TABLE_CELL_STYLE) { (format_currency(invoice.amount)) }
                td class=(TABLE_CELL_STYLE) { (format_date(invoice.date, locale)) }
                td class=(TABLE_CELL_STYLE) { (status_badge(invoice.status)) }
                td class=(TABLE_CELL_STYLE)
                {
                    div class="flex gap-4"
                    {
                        a href=(edit_url) class=(LINK_STYLE) { "Edit" }

                        button
                            hx-delete=(delete_url)
                            hx-confirm={
                                "Are you sure you want to delete the invoice for "
                                (invoice.name) "?"
                            }
                            hx-target="closest tr"
                            hx-target-error="#alert-container"
                            hx-swap="delete"
                            class=(BUTTON_DELETE_STYLE)
                        {
                            "Delete"
                        }
                    }
                }
            }
        )
    };

    let content = html!(
        div class="flex gap-4 items-start justify-between"
        {
            div class="grow" { (search_input(endpoints::INVOICES_VIEW, query, "Search invoices...")) }

            a href=(endpoints::CREATE_INVOICE_VIEW) class=(BUTTON_PRIMARY_STYLE)
            {
                "Create Invoice"
            }
        }

        // Reloads itself when a mutation announces that this view is stale.
        div
            id="invoices-table"
            hx-get=(invoices_page_url(query, current_page))
            hx-trigger="revalidate from:body"
            hx-select="#invoices-table"
            hx-swap="outerHTML"
        {
            div class="overflow-x-auto rounded-lg"
            {
                table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Customer" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Email" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Status" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                        }
                    }

                    tbody
                    {
                        @for invoice in invoices {
                            (table_row(invoice))
                        }

                        @if invoices.is_empty() {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                td colspan="6" class=(TABLE_CELL_STYLE) { "No invoices found." }
                            }
                        }
                    }
                }
            }

            (pagination_view(current_page, page_count, |page| invoices_page_url(query, page)))
        }
    );

    dashboard_page("Invoices", &[], nav_bar, &content)
}
