//! The app's route URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/invoices/{invoice_id}', use [format_endpoint].

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The overview page with the summary cards, revenue chart and latest invoices.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The searchable, paginated invoices table.
pub const INVOICES_VIEW: &str = "/dashboard/invoices";
/// The page for creating a new invoice.
pub const CREATE_INVOICE_VIEW: &str = "/dashboard/invoices/create";
/// The page for editing an existing invoice.
pub const EDIT_INVOICE_VIEW: &str = "/dashboard/invoices/{invoice_id}/edit";
/// The searchable customers table.
pub const CUSTOMERS_VIEW: &str = "/dashboard/customers";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route to create an invoice.
pub const INVOICES_API: &str = "/api/invoices";
/// The route to update or delete a single invoice.
pub const INVOICE_API: &str = "/api/invoices/{invoice_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/api/invoices/{invoice_id}', '{invoice_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: &str) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|offset| param_start + offset + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}

// These tests are here so that we know when we call `Uri::from_shared` it will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    use super::format_endpoint;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::ROOT);
        assert_endpoint_is_valid_uri(endpoints::DASHBOARD_VIEW);
        assert_endpoint_is_valid_uri(endpoints::INVOICES_VIEW);
        assert_endpoint_is_valid_uri(endpoints::CREATE_INVOICE_VIEW);
        assert_endpoint_is_valid_uri(endpoints::EDIT_INVOICE_VIEW);
        assert_endpoint_is_valid_uri(endpoints::CUSTOMERS_VIEW);
        assert_endpoint_is_valid_uri(endpoints::STATIC);

        assert_endpoint_is_valid_uri(endpoints::INVOICES_API);
        assert_endpoint_is_valid_uri(endpoints::INVOICE_API);
    }

    #[test]
    fn produces_valid_uri() {
        let formatted_path = format_endpoint(endpoints::EDIT_INVOICE_VIEW, "abc-123");

        assert_eq!(formatted_path, "/dashboard/invoices/abc-123/edit");
        assert!(formatted_path.parse::<Uri>().is_ok());

        let formatted_path = format_endpoint("/hello/{world}", "1");

        assert_eq!(formatted_path, "/hello/1");
    }

    #[test]
    fn returns_original_path_with_no_parameter() {
        let formatted_path = format_endpoint("/hello/world", "1");

        assert_eq!(formatted_path, "/hello/world");
    }
}
