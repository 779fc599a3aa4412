//! # Expense Repository
//!
//! Rows of the append-only `Gastos` journal.

use anyhow::Result;
use log::debug;

use crate::domain::models::expense::ExpenseEntry;
use crate::storage::repositories::{cell, format_timestamp, parse_amount, parse_timestamp};
use crate::storage::schema::{EXPENSES_TABLE, EXPENSE_HEADERS};
use crate::storage::traits::{LedgerStore, Table};

/// Row-level access to the expense journal.
#[derive(Clone)]
pub struct ExpenseRepository<S: LedgerStore> {
    table: S::Table,
}

impl<S: LedgerStore> ExpenseRepository<S> {
    /// Open the table, creating it on a fresh ledger.
    pub fn new(store: &S) -> Result<Self> {
        let table = store.ensure_table(EXPENSES_TABLE, &EXPENSE_HEADERS)?;
        Ok(ExpenseRepository { table })
    }

    fn from_row(row: &[String]) -> ExpenseEntry {
        ExpenseEntry {
            recorded_at: parse_timestamp(cell(row, 0)),
            concept: cell(row, 1).to_string(),
            amount: parse_amount(cell(row, 2)),
        }
    }

    /// All expenses in recording order.
    pub fn list(&self) -> Result<Vec<ExpenseEntry>> {
        let rows = self.table.read_all()?;
        Ok(rows.iter().map(|row| Self::from_row(row)).collect())
    }

    /// Append one expense row.
    pub fn append(&self, entry: &ExpenseEntry) -> Result<()> {
        debug!("appending expense '{}'", entry.concept);
        self.table.append_row(&[
            format_timestamp(&entry.recorded_at),
            entry.concept.clone(),
            entry.amount.to_string(),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::csv::test_utils::TestEnvironment;
    use chrono::NaiveDate;

    #[test]
    fn test_round_trip() {
        let env = TestEnvironment::new();
        let repo: ExpenseRepository<crate::storage::csv::CsvLedgerStore> =
            ExpenseRepository::new(&env.store).unwrap();

        let entry = ExpenseEntry {
            recorded_at: NaiveDate::from_ymd_opt(2026, 4, 2)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap(),
            concept: "Cajas de carton".to_string(),
            amount: 12000,
        };
        repo.append(&entry).unwrap();

        assert_eq!(repo.list().unwrap(), vec![entry]);
    }
}
