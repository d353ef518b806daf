//! Side-channel signals from form actions to the presenting layer.
//!
//! A successful mutation marks cached views as stale and may ask the client to
//! navigate elsewhere. Neither is part of the action's result, so they are
//! collected here and turned into response headers by the endpoint.

use axum::{
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use axum_htmx::{HX_TRIGGER, HxRedirect};
use serde_json::json;

/// The view invalidation and navigation signals raised while handling a request.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ViewSignals {
    revalidated: Vec<String>,
    redirect: Option<String>,
}

impl ViewSignals {
    /// Mark the view at `path` as stale so that it is recomputed on next access.
    pub fn revalidate_path(&mut self, path: &str) {
        if !self.revalidated.iter().any(|existing| existing == path) {
            self.revalidated.push(path.to_owned());
        }
    }

    /// Ask the client to navigate to `path`.
    pub fn redirect(&mut self, path: &str) {
        self.redirect = Some(path.to_owned());
    }

    /// The paths marked as stale, in the order they were first marked.
    #[cfg(test)]
    pub fn revalidated_paths(&self) -> &[String] {
        &self.revalidated
    }

    /// The path the client was asked to navigate to, if any.
    #[cfg(test)]
    pub fn redirect_target(&self) -> Option<&str> {
        self.redirect.as_deref()
    }

    /// Build the response for a successful action.
    ///
    /// Stale views are announced with an `HX-Trigger` event named
    /// `revalidate` whose detail lists the paths. Views listen for it on the
    /// body and reload their own content. A redirect is sent as
    /// `HX-Redirect` with status 303, otherwise `body` is returned with 200 OK.
    pub fn into_response_with(self, body: impl IntoResponse) -> Response {
        let mut response = match self.redirect {
            Some(path) => (HxRedirect(path), StatusCode::SEE_OTHER).into_response(),
            None => body.into_response(),
        };

        if !self.revalidated.is_empty() {
            let trigger = json!({ "revalidate": self.revalidated }).to_string();

            match HeaderValue::from_str(&trigger) {
                Ok(value) => {
                    response.headers_mut().insert(HX_TRIGGER, value);
                }
                Err(error) => tracing::error!("could not encode {trigger:?} as a header: {error}"),
            }
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::test_utils::{assert_hx_redirect, get_header};

    use super::ViewSignals;

    #[test]
    fn records_each_path_once() {
        let mut signals = ViewSignals::default();

        signals.revalidate_path("/dashboard/invoices");
        signals.revalidate_path("/dashboard");
        signals.revalidate_path("/dashboard/invoices");

        assert_eq!(
            signals.revalidated_paths(),
            ["/dashboard/invoices", "/dashboard"]
        );
        assert_eq!(signals.redirect_target(), None);
    }

    #[test]
    fn redirect_response_has_headers() {
        let mut signals = ViewSignals::default();
        signals.revalidate_path("/dashboard/invoices");
        signals.redirect("/dashboard/invoices");

        let response = signals.into_response_with("ignored");

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_hx_redirect(&response, "/dashboard/invoices");
        assert_eq!(
            get_header(&response, "hx-trigger"),
            r#"{"revalidate":["/dashboard/invoices"]}"#
        );
    }

    #[test]
    fn response_without_redirect_keeps_body_status() {
        let mut signals = ViewSignals::default();
        signals.revalidate_path("/dashboard/invoices");

        let response = signals.into_response_with("done");

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get("hx-redirect").is_none());
        assert!(response.headers().get("hx-trigger").is_some());
    }
}
