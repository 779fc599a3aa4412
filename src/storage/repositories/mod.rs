//! # Repositories
//!
//! Row-level access to each ledger table: one repository per table, mapping
//! between domain models and rows of string cells by column position.
//!
//! Parsing is deliberately lenient. The tables are also edited by hand in a
//! spreadsheet program, so a half-filled or hand-typed row must load with
//! defaults instead of poisoning every read of the table.

pub mod cash_flow_repository;
pub mod customer_repository;
pub mod expense_repository;
pub mod inventory_repository;
pub mod order_repository;

pub use cash_flow_repository::CashFlowRepository;
pub use customer_repository::CustomerRepository;
pub use expense_repository::ExpenseRepository;
pub use inventory_repository::InventoryRepository;
pub use order_repository::OrderRepository;

use chrono::{DateTime, NaiveDateTime, Utc};
use log::warn;

use crate::storage::schema::TIMESTAMP_FORMAT;

/// Cell at `index`, or the empty string when the row is too short.
pub(crate) fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}

/// Parse an id or quantity cell, defaulting to zero on anything unreadable.
pub(crate) fn parse_u32(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

/// Parse a money cell. Sheets written by the older tooling store some
/// amounts as floats ("23000.0"), so integer parsing falls back to float.
pub(crate) fn parse_amount(raw: &str) -> i64 {
    let trimmed = raw.trim();
    trimmed
        .parse::<i64>()
        .ok()
        .or_else(|| trimmed.parse::<f64>().ok().map(|value| value as i64))
        .unwrap_or(0)
}

/// Parse a timestamp cell, falling back to the epoch on malformed input.
pub(crate) fn parse_timestamp(raw: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT).unwrap_or_else(|_| {
        warn!("unreadable timestamp cell '{}', defaulting to epoch", raw);
        DateTime::<Utc>::UNIX_EPOCH.naive_utc()
    })
}

/// Format a timestamp the way every date cell stores it.
pub(crate) fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}
