use maud::{Markup, html};

use crate::{html::avatar, invoice::LatestInvoice};

/// Render the most recent invoices as a list, newest first.
pub(super) fn latest_invoices_view(invoices: &[LatestInvoice]) -> Markup {
    html! {
        section class="flex w-full flex-col md:col-span-4"
        {
            h2 class="mb-4 text-xl md:text-2xl" { "Latest Invoices" }

            div class="flex grow flex-col justify-between rounded-xl bg-gray-50 dark:bg-gray-800 p-4"
            {
                @if invoices.is_empty() {
                    p class="text-gray-400" { "No invoices yet." }
                } @else {
                    ul id="latest-invoices" class="bg-white dark:bg-gray-900 px-6"
                    {
                        @for (i, invoice) in invoices.iter().enumerate() {
                            li
                                class={
                                    "flex flex-row items-center justify-between py-4"
                                    @if i != 0 { " border-t" }
                                }
                            {
                                div class="flex items-center min-w-0"
                                {
                                    (avatar(&invoice.image_url, &invoice.name))

                                    div class="min-w-0"
                                    {
                                        p class="truncate text-sm font-semibold md:text-base" { (invoice.name) }
                                        p class="hidden text-sm text-gray-500 sm:block" { (invoice.email) }
                                    }
                                }

                                p class="truncate text-sm font-medium md:text-base" { (invoice.amount) }
                            }
                        }
                    }
                }

                p class="flex items-center pb-2 pt-6 text-sm text-gray-500" { "Updated just now" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use crate::invoice::LatestInvoice;

    use super::latest_invoices_view;

    fn latest_invoice(id: &str, name: &str, amount: &str) -> LatestInvoice {
        LatestInvoice {
            id: id.to_owned(),
            name: name.to_owned(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            image_url: "/customers/placeholder.png".to_owned(),
            amount: amount.to_owned(),
        }
    }

    #[test]
    fn lists_invoices_in_given_order() {
        let invoices = [
            latest_invoice("i1", "Delba de Oliveira", "$89.45"),
            latest_invoice("i2", "Lee Robinson", "$500.00"),
        ];

        let html = Html::parse_fragment(&latest_invoices_view(&invoices).into_string());

        let items: Vec<String> = html
            .select(&Selector::parse("#latest-invoices li").unwrap())
            .map(|item| item.text().collect())
            .collect();
        assert_eq!(items.len(), 2);
        assert!(items[0].contains("Delba de Oliveira"));
        assert!(items[0].contains("$89.45"));
        assert!(items[1].contains("Lee Robinson"));
        assert!(items[1].contains("$500.00"));
    }

    #[test]
    fn shows_placeholder_without_invoices() {
        let html = Html::parse_fragment(&latest_invoices_view(&[]).into_string());

        assert!(
            html.select(&Selector::parse("#latest-invoices").unwrap())
                .next()
                .is_none()
        );
        assert!(html.root_element().text().collect::<String>().contains("No invoices yet."));
    }
}
