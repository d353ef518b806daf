//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{get, post, put},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    customer::get_customers_page,
    dashboard::get_dashboard_page,
    endpoints,
    invoice::{
        create_invoice_endpoint, delete_invoice_endpoint, get_create_invoice_page,
        get_edit_invoice_page, get_invoices_page, update_invoice_endpoint,
    },
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let view_routes = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(endpoints::INVOICES_VIEW, get(get_invoices_page))
        .route(endpoints::CREATE_INVOICE_VIEW, get(get_create_invoice_page))
        .route(endpoints::EDIT_INVOICE_VIEW, get(get_edit_invoice_page))
        .route(endpoints::CUSTOMERS_VIEW, get(get_customers_page));

    let api_routes = Router::new()
        .route(endpoints::INVOICES_API, post(create_invoice_endpoint))
        .route(
            endpoints::INVOICE_API,
            put(update_invoice_endpoint).delete(delete_invoice_endpoint),
        );

    view_routes
        .merge(api_routes)
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the dashboard page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}
