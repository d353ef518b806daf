//! Alert messages shown to the user after an action succeeds or fails.
//!
//! Alerts are swapped out-of-band into the alert container that every page
//! layout provides, so they can be returned from any HTMX endpoint.

use axum::response::{Html, IntoResponse, Response};
use maud::{Markup, html};

/// A dismissable alert message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    /// A success message on its own.
    SuccessSimple { message: String },
    /// An error message with a description of what went wrong.
    Error { message: String, details: String },
}

impl Alert {
    pub fn into_html(self) -> Markup {
        let (container_style, message, details) = match self {
            Alert::SuccessSimple { message } => (
                "text-green-800 bg-green-50 border-green-300 \
                dark:bg-gray-800 dark:text-green-400 dark:border-green-800",
                message,
                None,
            ),
            Alert::Error { message, details } => (
                "text-red-800 bg-red-50 border-red-300 \
                dark:bg-gray-800 dark:text-red-400 dark:border-red-800",
                message,
                Some(details),
            ),
        };

        // Template adapted from https://flowbite.com/docs/components/alerts/
        html! {
            div id="alert-container" hx-swap-oob="true"
                class="w-full max-w-md px-4"
                style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
            {
                div
                    role="alert"
                    class={ "p-4 mb-4 text-sm border rounded-lg " (container_style) }
                {
                    div class="flex items-center justify-between"
                    {
                        span class="font-medium" { (message) }

                        button
                            type="button"
                            aria-label="Close"
                            onclick="this.closest('[role=alert]').remove()"
                        {
                            "×"
                        }
                    }

                    @if let Some(details) = details.filter(|details| !details.is_empty()) {
                        p class="mt-1" { (details) }
                    }
                }
            }
        }
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        Html(self.into_html().into_string()).into_response()
    }
}
