//! Invoice deletion endpoint.

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    AppState,
    alert::Alert,
    invoice::{InvoiceId, MutationOutcome, delete_invoice},
    signals::ViewSignals,
    store::Store,
};

/// The state needed for deleting an invoice.
#[derive(Debug, Clone)]
pub struct DeleteInvoiceState {
    pub store: Store,
}

impl FromRef<AppState> for DeleteInvoiceState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// Handle invoice deletion.
///
/// On success the table row is removed by the client and a success alert is
/// swapped in out-of-band. Otherwise responds with an error alert.
pub async fn delete_invoice_endpoint(
    Path(invoice_id): Path<InvoiceId>,
    State(state): State<DeleteInvoiceState>,
) -> Response {
    let mut signals = ViewSignals::default();

    match delete_invoice(&state.store, &invoice_id, &mut signals).await {
        Ok(MutationOutcome::Completed) => signals.into_response_with(Alert::SuccessSimple {
            message: "Deleted Invoice.".to_owned(),
        }),
        Ok(MutationOutcome::Failed { message }) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Alert::Error {
                message,
                details: "Try refreshing the page to see if the invoice has already been deleted."
                    .to_owned(),
            },
        )
            .into_response(),
        Err(error) => error.into_alert_response(),
    }
}

#[cfg(test)]
mod delete_invoice_endpoint_tests {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };
    use time::macros::date;

    use crate::{
        customer::{Customer, upsert_customer},
        invoice::{InvoiceStatus, NewInvoice, insert_invoice},
        store::get_test_store,
        test_utils::{assert_valid_html, get_header, parse_html_fragment},
    };

    use super::{DeleteInvoiceState, delete_invoice_endpoint};

    async fn get_state_with_invoice() -> (DeleteInvoiceState, String) {
        let store = get_test_store();
        let id = store
            .run(|connection| {
                upsert_customer(
                    &Customer {
                        id: "c1".to_owned(),
                        name: "Evil Rabbit".to_owned(),
                        email: "evil@rabbit.com".to_owned(),
                        image_url: "/customers/evil-rabbit.png".to_owned(),
                    },
                    connection,
                )?;

                insert_invoice(
                    NewInvoice {
                        customer_id: "c1".to_owned(),
                        amount_in_cents: 666,
                        status: InvoiceStatus::Pending,
                        date: date!(2023 - 06 - 27),
                    },
                    connection,
                )
                .map(|invoice| invoice.id)
            })
            .await
            .unwrap();

        (DeleteInvoiceState { store }, id)
    }

    #[tokio::test]
    async fn delete_invoice_endpoint_succeeds() {
        let (state, id) = get_state_with_invoice().await;

        let response = delete_invoice_endpoint(Path(id), State(state)).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get("hx-redirect").is_none());
        assert_eq!(
            get_header(&response, "hx-trigger"),
            r#"{"revalidate":["/dashboard/invoices"]}"#
        );
        let html = parse_html_fragment(response).await;
        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("Deleted Invoice."));
    }

    #[tokio::test]
    async fn delete_invoice_endpoint_with_invalid_id_returns_error_html() {
        let (state, _) = get_state_with_invoice().await;

        let response = delete_invoice_endpoint(Path("missing".to_owned()), State(state)).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            get_header(&response, "content-type"),
            "text/html; charset=utf-8"
        );
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("Database Error: Failed to Delete Invoice."));
    }
}
