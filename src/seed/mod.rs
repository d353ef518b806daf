//! One-shot loader for the fixed demo data set.

mod fixtures;
mod loader;

pub use loader::seed_database;
