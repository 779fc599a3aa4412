//! # Inventory Repository
//!
//! Rows of the `Inventario` table: one row per tracked product, stock
//! updated in place.

use std::collections::BTreeMap;

use anyhow::Result;
use log::debug;

use crate::domain::models::inventory::InventoryRecord;
use crate::storage::repositories::{cell, parse_u32};
use crate::storage::schema::{INVENTORY_HEADERS, INVENTORY_TABLE};
use crate::storage::traits::{LedgerStore, Table};

const COL_STOCK: u32 = 2;

/// Row-level access to the stock table.
#[derive(Clone)]
pub struct InventoryRepository<S: LedgerStore> {
    table: S::Table,
}

impl<S: LedgerStore> InventoryRepository<S> {
    /// Open the table, creating it on a fresh ledger.
    pub fn new(store: &S) -> Result<Self> {
        let table = store.ensure_table(INVENTORY_TABLE, &INVENTORY_HEADERS)?;
        Ok(InventoryRepository { table })
    }

    fn from_row(row: &[String]) -> InventoryRecord {
        InventoryRecord {
            product: cell(row, 0).to_string(),
            stock: parse_u32(cell(row, 1)),
        }
    }

    /// All stock rows in sheet order.
    pub fn records(&self) -> Result<Vec<InventoryRecord>> {
        let rows = self.table.read_all()?;
        Ok(rows.iter().map(|row| Self::from_row(row)).collect())
    }

    /// Product name to stock count.
    pub fn stock_map(&self) -> Result<BTreeMap<String, u32>> {
        Ok(self
            .records()?
            .into_iter()
            .map(|record| (record.product, record.stock))
            .collect())
    }

    /// Whether the table has no data rows yet.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.table.read_all()?.is_empty())
    }

    /// Find a product's data-row index and current stock.
    pub fn find_product(&self, product: &str) -> Result<Option<(usize, u32)>> {
        let rows = self.table.read_all()?;
        for (index, row) in rows.iter().enumerate() {
            if cell(row, 0) == product {
                return Ok(Some((index, parse_u32(cell(row, 1)))));
            }
        }
        Ok(None)
    }

    /// Append one stock row.
    pub fn append(&self, record: &InventoryRecord) -> Result<()> {
        debug!("appending inventory row for '{}'", record.product);
        self.table
            .append_row(&[record.product.clone(), record.stock.to_string()])
    }

    /// Overwrite the stock count of the row at `data_index`.
    pub fn set_stock(&self, data_index: usize, stock: u32) -> Result<()> {
        // Data row i sits at sheet row i + 2 (row 1 is the header).
        self.table
            .update_cell(data_index as u32 + 2, COL_STOCK, &stock.to_string())
    }
}
