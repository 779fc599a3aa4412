//! # Storage Layer
//!
//! Persistence for the shop ledger. The domain layer only sees the
//! [`traits::LedgerStore`] and [`traits::Table`] abstractions; [`schema`]
//! pins down the table names and headers, [`repositories`] map rows to
//! domain models, and [`csv`] is the production backend keeping each table
//! as a CSV file.

pub mod csv;
pub mod repositories;
pub mod schema;
pub mod traits;

pub use csv::CsvLedgerStore;
pub use traits::{LedgerStore, Table};
