//! An invoicing dashboard for a small business.
//!
//! This library serves HTML pages for browsing customers and invoices,
//! creating, editing and deleting invoices, and an overview of revenue.
//! It also provides the loader that fills a fresh database with demo data.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod customer;
mod dashboard;
mod endpoints;
mod error;
pub mod format;
mod html;
mod internal_server_error;
mod invoice;
mod logging;
mod navigation;
mod not_found;
pub mod pagination;
mod password;
mod routing;
mod seed;
mod signals;
mod store;
#[cfg(test)]
mod test_utils;
mod user;

pub use app_state::AppState;
pub use error::Error;
pub use format::Locale;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware, setup_logging};
pub use routing::build_router;
pub use seed::seed_database;
pub use store::Store;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
