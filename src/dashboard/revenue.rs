//! Monthly revenue and the dashboard's revenue chart.

use maud::{Markup, html};
use rusqlite::Connection;

use crate::{Error, store::Store};

/// The distance between two labels on the revenue chart's Y axis.
const Y_AXIS_STEP: u64 = 1000;

/// The revenue for one month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revenue {
    /// The month label, e.g. "Jan". Unique across rows.
    pub month: String,
    /// The revenue in whole dollars.
    pub revenue: i64,
}

/// Initialize the revenue table.
pub fn create_revenue_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS revenue (
            month TEXT NOT NULL UNIQUE,
            revenue INTEGER NOT NULL
        );",
    )?;

    Ok(())
}

/// Insert `revenue` unless the month already has a row.
pub fn upsert_revenue(revenue: &Revenue, connection: &Connection) -> Result<(), Error> {
    connection.execute(
        "INSERT INTO revenue (month, revenue) VALUES (?1, ?2) ON CONFLICT(month) DO NOTHING;",
        (&revenue.month, revenue.revenue),
    )?;

    Ok(())
}

fn select_revenue(connection: &Connection) -> Result<Vec<Revenue>, Error> {
    connection
        .prepare("SELECT month, revenue FROM revenue ORDER BY rowid;")?
        .query_map([], |row| {
            Ok(Revenue {
                month: row.get(0)?,
                revenue: row.get(1)?,
            })
        })?
        .map(|maybe_revenue| maybe_revenue.map_err(Error::from))
        .collect()
}

/// Fetch the revenue for every month in insertion order.
///
/// # Errors
/// Returns [Error::FetchFailed] if the store could not be read. The cause is logged.
pub async fn fetch_revenue(store: &Store) -> Result<Vec<Revenue>, Error> {
    store
        .run(select_revenue)
        .await
        .inspect_err(|error| tracing::error!("Database Error: {error}"))
        .map_err(|_| Error::FetchFailed("Failed to fetch revenue data."))
}

/// The labels along the Y axis of the revenue chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YAxis {
    /// Labels from `top_label` down to zero in steps of 1000, e.g. "$15K".
    pub labels: Vec<String>,
    /// The highest revenue rounded up to the next multiple of 1000.
    pub top_label: u64,
}

/// Compute the Y axis for a revenue chart.
///
/// Negative revenue is treated as zero and an empty series behaves like a
/// series of zeros.
pub fn generate_y_axis(revenue: &[Revenue]) -> YAxis {
    let highest = revenue
        .iter()
        .map(|month| month.revenue.max(0) as u64)
        .max()
        .unwrap_or(0);
    let top_label = highest.div_ceil(Y_AXIS_STEP) * Y_AXIS_STEP;

    let labels = (0..=top_label / Y_AXIS_STEP)
        .rev()
        .map(|thousands| format!("${thousands}K"))
        .collect();

    YAxis { labels, top_label }
}

/// Render one bar per month next to the Y axis labels.
pub(super) fn revenue_chart_view(revenue: &[Revenue]) -> Markup {
    let y_axis = generate_y_axis(revenue);
    let chart_height_px = 350;

    let bar_height_px = |month: &Revenue| -> u64 {
        if y_axis.top_label == 0 {
            return 0;
        }

        let revenue = month.revenue.max(0) as u64;
        revenue.saturating_mul(chart_height_px) / y_axis.top_label
    };

    html! {
        section class="w-full md:col-span-4"
        {
            h2 class="mb-4 text-xl md:text-2xl" { "Recent Revenue" }

            @if revenue.is_empty() {
                p class="mt-4 text-gray-400" { "No data available." }
            } @else {
                div class="rounded-xl bg-gray-50 dark:bg-gray-800 p-4"
                {
                    div
                        class="grid grid-cols-12 sm:grid-cols-13 mt-0 items-end gap-2
                            rounded-md bg-white dark:bg-gray-900 p-4 md:gap-4"
                    {
                        div
                            class="mb-6 hidden flex-col justify-between text-sm text-gray-400 sm:flex"
                            style={ "height: " (chart_height_px) "px" }
                        {
                            @for label in &y_axis.labels {
                                p { (label) }
                            }
                        }

                        @for month in revenue {
                            div class="flex flex-col items-center gap-2"
                            {
                                div
                                    class="w-full rounded-md bg-blue-300"
                                    style={ "height: " (bar_height_px(month)) "px" }
                                    title={ (month.month) ": $" (month.revenue) }
                                {}

                                p class="-rotate-90 text-sm text-gray-400 sm:rotate-0" { (month.month) }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod generate_y_axis_tests {
    use super::{Revenue, YAxis, generate_y_axis};

    fn series(values: &[i64]) -> Vec<Revenue> {
        values
            .iter()
            .enumerate()
            .map(|(i, &revenue)| Revenue {
                month: format!("{:02}", i + 1),
                revenue,
            })
            .collect()
    }

    #[test]
    fn rounds_up_to_thousands() {
        let got = generate_y_axis(&series(&[5000, 10000, 15000]));

        let want_labels: Vec<_> = (0..=15).rev().map(|n| format!("${n}K")).collect();
        assert_eq!(
            got,
            YAxis {
                labels: want_labels,
                top_label: 15000,
            }
        );
        assert_eq!(got.labels.len(), 16);
    }

    #[test]
    fn partial_thousand_rounds_up() {
        let got = generate_y_axis(&series(&[2000, 4800, 3700]));

        assert_eq!(got.top_label, 5000);
        assert_eq!(got.labels, ["$5K", "$4K", "$3K", "$2K", "$1K", "$0K"]);
    }

    #[test]
    fn all_zero_has_single_label() {
        let got = generate_y_axis(&series(&[0]));

        assert_eq!(
            got,
            YAxis {
                labels: vec!["$0K".to_owned()],
                top_label: 0,
            }
        );
    }

    #[test]
    fn empty_series_is_all_zero() {
        assert_eq!(generate_y_axis(&[]), generate_y_axis(&series(&[0])));
    }

    #[test]
    fn negative_revenue_counts_as_zero() {
        assert_eq!(generate_y_axis(&series(&[-500, 0])).top_label, 0);
    }
}

#[cfg(test)]
mod revenue_store_tests {
    use crate::{Error, store::get_test_store};

    use super::{Revenue, fetch_revenue, upsert_revenue};

    #[tokio::test]
    async fn upsert_keeps_first_value_per_month() {
        let store = get_test_store();
        store
            .run(|connection| {
                upsert_revenue(
                    &Revenue {
                        month: "Jan".to_owned(),
                        revenue: 2000,
                    },
                    connection,
                )?;
                upsert_revenue(
                    &Revenue {
                        month: "Feb".to_owned(),
                        revenue: 1800,
                    },
                    connection,
                )?;
                upsert_revenue(
                    &Revenue {
                        month: "Jan".to_owned(),
                        revenue: 9999,
                    },
                    connection,
                )
            })
            .await
            .unwrap();

        let got = fetch_revenue(&store).await.unwrap();

        assert_eq!(
            got,
            [
                Revenue {
                    month: "Jan".to_owned(),
                    revenue: 2000
                },
                Revenue {
                    month: "Feb".to_owned(),
                    revenue: 1800
                },
            ]
        );
    }

    #[tokio::test]
    async fn store_failure_has_fixed_message() {
        let store = get_test_store();
        store
            .run(|connection| {
                connection
                    .execute_batch("DROP TABLE revenue;")
                    .map_err(Error::from)
            })
            .await
            .unwrap();

        assert_eq!(
            fetch_revenue(&store).await,
            Err(Error::FetchFailed("Failed to fetch revenue data."))
        );
    }
}
