//! # Cash-Flow Repository
//!
//! Rows of the append-only `FlujoCaja` income journal.

use anyhow::Result;
use log::debug;

use crate::domain::models::cash_flow::CashFlowEntry;
use crate::domain::models::order::PaymentMethod;
use crate::storage::repositories::{cell, format_timestamp, parse_amount, parse_timestamp, parse_u32};
use crate::storage::schema::{CASH_FLOW_HEADERS, CASH_FLOW_TABLE};
use crate::storage::traits::{LedgerStore, Table};

/// Row-level access to the income journal.
#[derive(Clone)]
pub struct CashFlowRepository<S: LedgerStore> {
    table: S::Table,
}

impl<S: LedgerStore> CashFlowRepository<S> {
    /// Open the table, creating it on a fresh ledger.
    pub fn new(store: &S) -> Result<Self> {
        let table = store.ensure_table(CASH_FLOW_TABLE, &CASH_FLOW_HEADERS)?;
        Ok(CashFlowRepository { table })
    }

    fn from_row(row: &[String]) -> CashFlowEntry {
        CashFlowEntry {
            recorded_at: parse_timestamp(cell(row, 0)),
            order_id: parse_u32(cell(row, 1)),
            customer_name: cell(row, 2).to_string(),
            payment_method: PaymentMethod::from_sheet_str(cell(row, 3)),
            product_income: parse_amount(cell(row, 4)),
            delivery_income: parse_amount(cell(row, 5)),
            outstanding_after: parse_amount(cell(row, 6)),
        }
    }

    /// All journal entries in recording order.
    pub fn list(&self) -> Result<Vec<CashFlowEntry>> {
        let rows = self.table.read_all()?;
        Ok(rows.iter().map(|row| Self::from_row(row)).collect())
    }

    /// Append one journal entry.
    pub fn append(&self, entry: &CashFlowEntry) -> Result<()> {
        debug!("appending cash-flow entry for order {}", entry.order_id);
        self.table.append_row(&[
            format_timestamp(&entry.recorded_at),
            entry.order_id.to_string(),
            entry.customer_name.clone(),
            entry.payment_method.as_sheet_str().to_string(),
            entry.product_income.to_string(),
            entry.delivery_income.to_string(),
            entry.outstanding_after.to_string(),
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
        let repo: CashFlowRepository<crate::storage::csv::CsvLedgerStore> =
            CashFlowRepository::new(&env.store).unwrap();

        let entry = CashFlowEntry {
            recorded_at: NaiveDate::from_ymd_opt(2026, 4, 1)
                .unwrap()
                .and_hms_opt(16, 20, 0)
                .unwrap(),
            order_id: 11,
            customer_name: "Maria Lopez".to_string(),
            payment_method: PaymentMethod::Cash,
            product_income: 20000,
            delivery_income: 3000,
            outstanding_after: 0,
        };
        repo.append(&entry).unwrap();

        let listed = repo.list().unwrap();
        assert_eq!(listed, vec![entry]);
    }
}
