use futures::future::try_join_all;

use crate::{
    Error,
    customer::{Customer, upsert_customer},
    dashboard::{Revenue, upsert_revenue},
    invoice::{NewInvoice, insert_invoice},
    password::PasswordHash,
    store::Store,
    user::{User, upsert_user},
};

use super::fixtures::{
    CUSTOMERS, CustomerFixture, INVOICES, InvoiceFixture, REVENUE, RevenueFixture, USERS,
    UserFixture,
};

/// Load the demo users, customers, invoices and revenue into `store`.
///
/// The groups are loaded one after the other so that invoices only reference
/// customers that have already been written. Records within a group are
/// written concurrently and the first failure fails the whole load.
///
/// Users, customers and revenue are upserted by their fixed keys and are not
/// duplicated when the loader runs again. Invoices are plain inserts and are
/// added again on every run.
///
/// # Errors
/// Returns the first error raised by any write or password hash.
pub async fn seed_database(store: &Store) -> Result<(), Error> {
    seed_with_cost(store, PasswordHash::SEED_COST).await
}

async fn seed_with_cost(store: &Store, hash_cost: u32) -> Result<(), Error> {
    try_join_all(USERS.iter().map(|user| seed_user(store, user, hash_cost))).await?;
    tracing::info!("Seeded {} users", USERS.len());

    try_join_all(CUSTOMERS.iter().map(|customer| seed_customer(store, customer))).await?;
    tracing::info!("Seeded {} customers", CUSTOMERS.len());

    try_join_all(INVOICES.iter().map(|invoice| seed_invoice(store, invoice))).await?;
    tracing::info!("Seeded {} invoices", INVOICES.len());

    try_join_all(REVENUE.iter().map(|revenue| seed_revenue(store, revenue))).await?;
    tracing::info!("Seeded {} months of revenue", REVENUE.len());

    Ok(())
}

async fn seed_user(store: &Store, fixture: &UserFixture, hash_cost: u32) -> Result<(), Error> {
    let raw_password = fixture.password;
    let password_hash = tokio::task::spawn_blocking(move || {
        PasswordHash::from_raw_password(raw_password, hash_cost)
    })
    .await
    .map_err(|error| Error::TaskFailed(error.to_string()))??;

    let user = User {
        id: fixture.id.to_owned(),
        name: fixture.name.to_owned(),
        email: fixture.email.to_owned(),
        password_hash,
    };

    store
        .run(move |connection| upsert_user(&user, connection))
        .await
}

async fn seed_customer(store: &Store, fixture: &CustomerFixture) -> Result<(), Error> {
    let customer = Customer {
        id: fixture.id.to_owned(),
        name: fixture.name.to_owned(),
        email: fixture.email.to_owned(),
        image_url: fixture.image_url.to_owned(),
    };

    store
        .run(move |connection| upsert_customer(&customer, connection))
        .await
}

async fn seed_invoice(store: &Store, fixture: &InvoiceFixture) -> Result<(), Error> {
    let invoice = NewInvoice {
        customer_id: fixture.customer_id.to_owned(),
        amount_in_cents: fixture.amount_in_cents,
        status: fixture.status,
        date: fixture.date,
    };

    store
        .run(move |connection| insert_invoice(invoice, connection).map(|_| ()))
        .await
}

async fn seed_revenue(store: &Store, fixture: &RevenueFixture) -> Result<(), Error> {
    let revenue = Revenue {
        month: fixture.month.to_owned(),
        revenue: fixture.revenue,
    };

    store
        .run(move |connection| upsert_revenue(&revenue, connection))
        .await
}
