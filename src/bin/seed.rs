use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use invoice_dashboard::{Error, Store, seed_database, setup_logging};

/// Fill the invoice dashboard's database with demo data.
///
/// Users, customers and revenue are only added once. Invoices are added
/// again on every run.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the application SQLite database. Created if missing.
    #[arg(long)]
    db_path: String,
}

#[tokio::main]
async fn main() {
    if let Err(error) = setup_logging() {
        eprintln!("Could not set up logging: {error}");
        exit(1);
    }

    let args = Args::parse();

    if let Err(error) = run(&args.db_path).await {
        tracing::error!("Seeding failed: {error}");
        exit(1);
    }

    tracing::info!("Seeded database at {}", args.db_path);
}

async fn run(db_path: &str) -> Result<(), Error> {
    let connection = Connection::open(db_path)?;
    let store = Store::new(connection)?;

    seed_database(&store).await
}
