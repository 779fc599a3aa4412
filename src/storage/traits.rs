//! # Storage Traits
//!
//! This module defines the tabular-store abstraction the domain layer is
//! written against. The shop's data lives in a spreadsheet-style workbook:
//! one table per entity, row 1 reserved for the header, data rows below it.
//! Any backend that can model that (a directory of CSV files, a remote
//! spreadsheet service, an in-memory fixture) can implement these traits
//! without the domain layer changing.
//!
//! All operations are synchronous: every business action is a single user
//! interaction that runs to completion before the next one is accepted.

use anyhow::Result;

/// Handle to one table of the ledger workbook.
///
/// Row and column indices follow spreadsheet conventions: both are 1-based,
/// and row 1 is the header row. The first data row is therefore row 2, and a
/// data row at position `i` of [`Table::read_all`] lives at sheet row `i + 2`.
pub trait Table: Send + Sync + Clone {
    /// Read every data row in sheet order. The header row is not included.
    ///
    /// Rows may be ragged (shorter or longer than the header); callers treat
    /// missing cells as empty strings.
    fn read_all(&self) -> Result<Vec<Vec<String>>>;

    /// Append one data row after the last existing row.
    fn append_row(&self, row: &[String]) -> Result<()>;

    /// Overwrite a single cell. `row` is the absolute 1-based sheet row
    /// (so `1` addresses the header) and `col` the 1-based column.
    fn update_cell(&self, row: u32, col: u32, value: &str) -> Result<()>;
}

/// A connection to the ledger workbook as a whole.
///
/// Implementations hand out [`Table`] handles and guarantee the table exists
/// with the expected header before any handle is used. The handle is `Clone`
/// so every repository can hold its own copy, the same way the domain
/// services each hold a clone of the store connection.
pub trait LedgerStore: Send + Sync + Clone {
    /// The table handle type this store produces.
    type Table: Table;

    /// Open the named table, creating it with `headers` if it does not exist.
    ///
    /// Idempotent: when the table already exists its first row is checked
    /// against `headers` and repaired (replaced) on mismatch. A header with
    /// extra trailing columns is accepted as-is.
    fn ensure_table(&self, name: &str, headers: &[&str]) -> Result<Self::Table>;
}
