//! The invoice form shared by the create and edit pages, and the validation of
//! its submissions.

use std::fmt::Display;

use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    Error,
    customer::{CustomerField, CustomerId},
    html::{
        FORM_ERROR_STYLE, FORM_LABEL_STYLE, FORM_RADIO_GROUP_STYLE, FORM_RADIO_INPUT_STYLE,
        FORM_RADIO_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
    },
    invoice::InvoiceStatus,
};

const CUSTOMER_ERROR: &str = "Please select a customer.";
const AMOUNT_ERROR: &str = "Please enter a valid amount.";
const NEGATIVE_AMOUNT_ERROR: &str = "Please enter an amount of $0 or more.";
const STATUS_ERROR: &str = "Please select an invoice status.";

/// The raw fields of a submitted invoice form.
///
/// Missing fields deserialize as empty strings so that they are reported by
/// [InvoiceFormData::validate] instead of being rejected by the extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InvoiceFormData {
    #[serde(default)]
    pub customer_id: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub status: String,
}

/// The validation messages for each invalid field of an invoice form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub customer_id: Option<&'static str>,
    pub amount: Option<&'static str>,
    pub status: Option<&'static str>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.customer_id.is_none() && self.amount.is_none() && self.status.is_none()
    }
}

impl Display for FormErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<_> = [self.customer_id, self.amount, self.status]
            .into_iter()
            .flatten()
            .collect();

        f.write_str(&messages.join(" "))
    }
}

/// A submitted invoice form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidInvoiceForm {
    pub customer_id: CustomerId,
    pub amount_in_cents: i64,
    pub status: InvoiceStatus,
}

impl InvoiceFormData {
    /// Check the form against the invoice schema and convert the amount from
    /// dollars to cents.
    ///
    /// The customer ID must be non-empty, the status must be "pending" or
    /// "paid" and the amount must be a finite, non-negative number. An empty
    /// amount counts as zero.
    ///
    /// # Errors
    /// Returns [Error::InvalidForm] with a message for every invalid field.
    pub fn validate(&self) -> Result<ValidInvoiceForm, Error> {
        let mut errors = FormErrors::default();

        if self.customer_id.is_empty() {
            errors.customer_id = Some(CUSTOMER_ERROR);
        }

        let amount_in_cents = match parse_amount(&self.amount) {
            Ok(cents) => cents,
            Err(message) => {
                errors.amount = Some(message);
                0
            }
        };

        let status = InvoiceStatus::parse(&self.status);
        if status.is_none() {
            errors.status = Some(STATUS_ERROR);
        }

        match status {
            Some(status) if errors.is_empty() => Ok(ValidInvoiceForm {
                customer_id: self.customer_id.clone(),
                amount_in_cents,
                status,
            }),
            _ => Err(Error::InvalidForm(errors)),
        }
    }
}

/// Parse a dollar amount and convert it to cents, rounding to the nearest cent.
fn parse_amount(amount: &str) -> Result<i64, &'static str> {
    let amount = amount.trim();

    let dollars: f64 = if amount.is_empty() {
        0.0
    } else {
        amount.parse().map_err(|_| AMOUNT_ERROR)?
    };

    if !dollars.is_finite() {
        return Err(AMOUNT_ERROR);
    }

    if dollars < 0.0 {
        return Err(NEGATIVE_AMOUNT_ERROR);
    }

    let cents = (dollars * 100.0).round();

    if cents >= i64::MAX as f64 {
        return Err(AMOUNT_ERROR);
    }

    Ok(cents as i64)
}

/// The values to fill the invoice form with.
#[derive(Debug, Default)]
pub struct InvoiceFormDefaults<'a> {
    pub customer_id: Option<&'a str>,
    pub amount: Option<&'a str>,
    pub status: Option<InvoiceStatus>,
}

impl<'a> From<&'a InvoiceFormData> for InvoiceFormDefaults<'a> {
    fn from(form: &'a InvoiceFormData) -> Self {
        Self {
            customer_id: Some(form.customer_id.as_str()),
            amount: Some(form.amount.as_str()),
            status: InvoiceStatus::parse(&form.status),
        }
    }
}

fn error_message(message: Option<&str>) -> Markup {
    html! {
        @if let Some(message) = message {
            p role="alert" class=(FORM_ERROR_STYLE) { (message) }
        }
    }
}

pub fn invoice_form_fields(
    defaults: &InvoiceFormDefaults<'_>,
    customers: &[CustomerField],
    errors: &FormErrors,
) -> Markup {
    html! {
        div
        {
            label for="customer_id" class=(FORM_LABEL_STYLE) { "Choose customer" }

            select
                name="customer_id"
                id="customer_id"
                class=(FORM_TEXT_INPUT_STYLE)
            {
                option value="" disabled selected[defaults.customer_id.is_none_or(str::is_empty)]
                {
                    "Select a customer"
                }

                @for customer in customers {
                    option
                        value=(customer.id)
                        selected[defaults.customer_id == Some(customer.id.as_str())]
                    {
                        (customer.name)
                    }
                }
            }

            (error_message(errors.customer_id))
        }

        div
        {
            label for="amount" class=(FORM_LABEL_STYLE) { "Choose an amount" }

            div class="input-wrapper w-full"
            {
                input
                    name="amount"
                    id="amount"
                    type="number"
                    step="0.01"
                    min="0"
                    placeholder="Enter USD amount"
                    value=[defaults.amount]
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            (error_message(errors.amount))
        }

        fieldset class="space-y-2"
        {
            legend class=(FORM_LABEL_STYLE) { "Set the invoice status" }

            div class=(FORM_RADIO_GROUP_STYLE)
            {
                @for status in InvoiceStatus::ALL {
                    div class="flex items-center gap-3"
                    {
                        input
                            name="status"
                            id={ "status-" (status) }
                            type="radio"
                            value=(status)
                            checked[defaults.status == Some(status)]
                            class=(FORM_RADIO_INPUT_STYLE);

                        label for={ "status-" (status) } class=(FORM_RADIO_LABEL_STYLE)
                        {
                            (status.label())
                        }
                    }
                }
            }

            (error_message(errors.status))
        }
    }
}
