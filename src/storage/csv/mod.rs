//! # CSV Storage Backend
//!
//! Directory-of-CSV-files implementation of the ledger workbook. Each table
//! named by [`crate::storage::schema`] becomes `<name>.csv` under the store's
//! base directory, with the header in row 1 and data rows below, mirroring
//! the spreadsheet layout the shop's records have always used.

pub mod connection;
pub mod table;

#[cfg(test)]
pub mod test_utils;

pub use connection::CsvLedgerStore;
pub use table::CsvTable;
