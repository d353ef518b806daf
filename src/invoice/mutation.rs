//! Form actions that create, update and delete invoices.
//!
//! Each action validates its input before touching the store. Store failures
//! are not returned as errors: they are logged and reported through
//! [MutationOutcome::Failed] so that the caller can show the message.

use time::OffsetDateTime;

use crate::{
    Error, endpoints,
    invoice::{InvoiceFormData, NewInvoice, insert_invoice},
    signals::ViewSignals,
    store::Store,
};

use super::db::{delete_invoice_row, update_invoice_row};

/// The result of a form action that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The change was written to the store.
    Completed,
    /// The store rejected the change.
    Failed { message: String },
}

impl MutationOutcome {
    fn failed(message: &str) -> Self {
        MutationOutcome::Failed {
            message: message.to_owned(),
        }
    }
}

/// Create an invoice dated today (UTC) from a submitted form.
///
/// On success the invoices view is marked stale and the client is sent to it.
///
/// # Errors
/// Returns [Error::InvalidForm] if the form is invalid. Nothing is written in that case.
pub async fn create_invoice(
    store: &Store,
    form: &InvoiceFormData,
    signals: &mut ViewSignals,
) -> Result<MutationOutcome, Error> {
    let form = form.validate()?;
    let new_invoice = NewInvoice {
        customer_id: form.customer_id,
        amount_in_cents: form.amount_in_cents,
        status: form.status,
        date: OffsetDateTime::now_utc().date(),
    };

    let result = store
        .run(move |connection| insert_invoice(new_invoice, connection))
        .await;

    match result {
        Ok(invoice) => {
            tracing::info!("created invoice {}", invoice.id);
            signals.revalidate_path(endpoints::INVOICES_VIEW);
            signals.redirect(endpoints::INVOICES_VIEW);

            Ok(MutationOutcome::Completed)
        }
        Err(error) => {
            tracing::error!("Database Error: could not create invoice: {error}");

            Ok(MutationOutcome::failed(
                "Database Error: Failed to Create Invoice.",
            ))
        }
    }
}

/// Overwrite the customer, amount and status of the invoice `id` from a
/// submitted form. The invoice date is not changed.
///
/// On success the invoices view is marked stale and the client is sent to it.
/// A missing invoice is reported as a failed outcome.
///
/// # Errors
/// Returns [Error::InvalidForm] if the form is invalid. Nothing is written in that case.
pub async fn update_invoice(
    store: &Store,
    id: &str,
    form: &InvoiceFormData,
    signals: &mut ViewSignals,
) -> Result<MutationOutcome, Error> {
    let form = form.validate()?;
    let id_owned = id.to_owned();

    let result = store
        .run(move |connection| {
            update_invoice_row(
                &id_owned,
                &form.customer_id,
                form.amount_in_cents,
                form.status,
                connection,
            )
        })
        .await;

    match result {
        Ok(()) => {
            tracing::info!("updated invoice {id}");
            signals.revalidate_path(endpoints::INVOICES_VIEW);
            signals.redirect(endpoints::INVOICES_VIEW);

            Ok(MutationOutcome::Completed)
        }
        Err(error) => {
            tracing::error!("Database Error: could not update invoice {id}: {error}");

            Ok(MutationOutcome::failed(
                "Database Error: Failed to Update Invoice.",
            ))
        }
    }
}

/// Delete the invoice `id`.
///
/// On success the invoices view is marked stale. The client is not
/// redirected since deletion is triggered from that view.
/// A missing invoice is reported as a failed outcome.
///
/// # Errors
/// This action has no input to validate and does not return an error. The
/// signature matches the other actions.
pub async fn delete_invoice(
    store: &Store,
    id: &str,
    signals: &mut ViewSignals,
) -> Result<MutationOutcome, Error> {
    let id_owned = id.to_owned();

    let result = store
        .run(move |connection| delete_invoice_row(&id_owned, connection))
        .await;

    match result {
        Ok(()) => {
            tracing::info!("deleted invoice {id}");
            signals.revalidate_path(endpoints::INVOICES_VIEW);

            Ok(MutationOutcome::Completed)
        }
        Err(error) => {
            tracing::error!("Database Error: could not delete invoice {id}: {error}");

            Ok(MutationOutcome::failed(
                "Database Error: Failed to Delete Invoice.",
            ))
        }
    }
}
