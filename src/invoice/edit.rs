//! Invoice editing page and endpoint.

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use maud::{Markup, html};

use crate::{
    AppState, Error,
    alert::Alert,
    customer::{CustomerField, fetch_customers},
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, dashboard_page, dollar_input_styles,
        loading_spinner,
    },
    invoice::{
        FormErrors, InvoiceFormData, InvoiceId, MutationOutcome, fetch_invoice_by_id,
        form::{InvoiceFormDefaults, invoice_form_fields},
        update_invoice,
    },
    navigation::NavBar,
    signals::ViewSignals,
    store::Store,
};

/// The state needed for the invoice edit page and endpoint.
#[derive(Debug, Clone)]
pub struct EditInvoiceState {
    pub store: Store,
}

impl FromRef<AppState> for EditInvoiceState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// Render the edit page for an invoice, or the 404 page if it does not exist.
pub async fn get_edit_invoice_page(
    Path(invoice_id): Path<InvoiceId>,
    State(state): State<EditInvoiceState>,
) -> Result<Response, Error> {
    let (invoice, customers) = tokio::try_join!(
        fetch_invoice_by_id(&state.store, &invoice_id, None, None),
        fetch_customers(&state.store),
    )?;
    let invoice = invoice.ok_or(Error::NotFound)?;

    let amount = format!("{:.2}", invoice.amount);
    let defaults = InvoiceFormDefaults {
        customer_id: Some(invoice.customer_id.as_str()),
        amount: Some(amount.as_str()),
        status: Some(invoice.status),
    };

    let form = edit_invoice_form_view(&invoice.id, &customers, &defaults, &FormErrors::default());
    let nav_bar = NavBar::new(endpoints::EDIT_INVOICE_VIEW).into_html();

    Ok(dashboard_page("Edit Invoice", &[dollar_input_styles()], nav_bar, &form).into_response())
}

/// Handle invoice edit form submission.
pub async fn update_invoice_endpoint(
    Path(invoice_id): Path<InvoiceId>,
    State(state): State<EditInvoiceState>,
    Form(form): Form<InvoiceFormData>,
) -> Response {
    let mut signals = ViewSignals::default();

    match update_invoice(&state.store, &invoice_id, &form, &mut signals).await {
        Ok(MutationOutcome::Completed) => signals.into_response_with(StatusCode::OK),
        Ok(MutationOutcome::Failed { message }) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Alert::Error {
                message,
                details: "The changes were not saved. \
                    Try refreshing the page to see if the invoice has been deleted."
                    .to_owned(),
            },
        )
            .into_response(),
        Err(Error::InvalidForm(errors)) => match fetch_customers(&state.store).await {
            Ok(customers) => edit_invoice_form_view(
                &invoice_id,
                &customers,
                &InvoiceFormDefaults::from(&form),
                &errors,
            )
            .into_response(),
            Err(error) => error.into_alert_response(),
        },
        Err(error) => error.into_alert_response(),
    }
}

fn edit_invoice_form_view(
    invoice_id: &str,
    customers: &[CustomerField],
    defaults: &InvoiceFormDefaults<'_>,
    errors: &FormErrors,
) -> Markup {
    let update_url = endpoints::format_endpoint(endpoints::INVOICE_API, invoice_id);

    html! {
        form
            hx-put=(update_url)
            hx-target="this"
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            hx-disabled-elt="find button[type=submit]"
            hx-indicator="#indicator"
            class="w-full max-w-xl space-y-4 md:space-y-6"
        {
            (invoice_form_fields(defaults, customers, errors))

            div class="flex justify-end gap-4"
            {
                a href=(endpoints::INVOICES_VIEW) class=(BUTTON_SECONDARY_STYLE) { "Cancel" }

                button type="submit" id="indicator" class=(BUTTON_PRIMARY_STYLE)
                {
                    span class="htmx-indicator" { (loading_spinner()) }
                    "Edit Invoice"
                }
            }
        }
    }
}
