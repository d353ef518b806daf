//! Invoice creation page and endpoint.

use axum::{
    extract::{FromRef, State},
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
        FormErrors, InvoiceFormData, MutationOutcome, create_invoice,
        form::{InvoiceFormDefaults, invoice_form_fields},
    },
    navigation::NavBar,
    signals::ViewSignals,
    store::Store,
};

/// The state needed for the invoice creation page and endpoint.
#[derive(Debug, Clone)]
pub struct CreateInvoiceState {
    pub store: Store,
}

impl FromRef<AppState> for CreateInvoiceState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// Render the invoice creation page.
pub async fn get_create_invoice_page(
    State(state): State<CreateInvoiceState>,
) -> Result<Response, Error> {
    let customers = fetch_customers(&state.store).await?;

    let form = create_invoice_form_view(
        &customers,
        &InvoiceFormDefaults::default(),
        &FormErrors::default(),
    );
    let nav_bar = NavBar::new(endpoints::CREATE_INVOICE_VIEW).into_html();

    Ok(dashboard_page("Create Invoice", &[dollar_input_styles()], nav_bar, &form).into_response())
}

/// Handle invoice creation form submission.
///
/// An invalid form is sent back with a message next to each invalid field.
pub async fn create_invoice_endpoint(
    State(state): State<CreateInvoiceState>,
    Form(form): Form<InvoiceFormData>,
) -> Response {
    let mut signals = ViewSignals::default();

    match create_invoice(&state.store, &form, &mut signals).await {
        Ok(MutationOutcome::Completed) => signals.into_response_with(StatusCode::OK),
        Ok(MutationOutcome::Failed { message }) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Alert::Error {
                message,
                details: "The invoice was not saved. Try again later.".to_owned(),
            },
        )
            .into_response(),
        Err(Error::InvalidForm(errors)) => match fetch_customers(&state.store).await {
            Ok(customers) => {
                create_invoice_form_view(&customers, &InvoiceFormDefaults::from(&form), &errors)
                    .into_response()
            }
            Err(error) => error.into_alert_response(),
        },
        Err(error) => error.into_alert_response(),
    }
}

fn create_invoice_form_view(
    customers: &[CustomerField],
    defaults: &InvoiceFormDefaults<'_>,
    errors: &FormErrors,
) -> Markup {
    html! {
        form
            hx-post=(endpoints::INVOICES_API)
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
                    "Create Invoice"
                }
            }
        }
    }
}
