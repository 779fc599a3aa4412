//! # Order Repository
//!
//! Rows of the `Pedidos` table. Orders are appended whole at placement and
//! then touched exactly once more: settlement overwrites the four
//! settlement columns in place, leaving the rest of the row as history.

use anyhow::Result;
use log::{debug, warn};

use crate::domain::models::order::{Order, OrderStatus, PaymentMethod};
use crate::storage::repositories::{cell, format_timestamp, parse_amount, parse_timestamp, parse_u32};
use crate::storage::schema::{ORDERS_TABLE, ORDER_HEADERS};
use crate::storage::traits::{LedgerStore, Table};

// 1-based sheet columns overwritten at settlement.
const COL_STATUS: u32 = 9;
const COL_PAYMENT_METHOD: u32 = 10;
const COL_AMOUNT_PAID: u32 = 11;
const COL_OUTSTANDING: u32 = 12;

/// Row-level access to the orders table.
#[derive(Clone)]
pub struct OrderRepository<S: LedgerStore> {
    table: S::Table,
}

impl<S: LedgerStore> OrderRepository<S> {
    /// Open the table, creating it on a fresh ledger.
    pub fn new(store: &S) -> Result<Self> {
        let table = store.ensure_table(ORDERS_TABLE, &ORDER_HEADERS)?;
        Ok(OrderRepository { table })
    }

    fn from_row(row: &[String]) -> Order {
        let status_cell = cell(row, 8);
        let status = OrderStatus::from_sheet_str(status_cell).unwrap_or_else(|| {
            warn!("unknown order status '{}', treating the order as pending", status_cell);
            OrderStatus::Pending
        });

        let payment_cell = cell(row, 9);
        let payment_method = if payment_cell.is_empty() {
            None
        } else {
            Some(PaymentMethod::from_sheet_str(payment_cell))
        };

        Order {
            id: parse_u32(cell(row, 0)),
            created_at: parse_timestamp(cell(row, 1)),
            customer_id: parse_u32(cell(row, 2)),
            customer_name: cell(row, 3).to_string(),
            detail: cell(row, 4).to_string(),
            subtotal: parse_amount(cell(row, 5)),
            delivery_fee: parse_amount(cell(row, 6)),
            total: parse_amount(cell(row, 7)),
            status,
            payment_method,
            amount_paid: parse_amount(cell(row, 10)),
            outstanding: parse_amount(cell(row, 11)),
        }
    }

    /// All orders in placement order.
    pub fn list(&self) -> Result<Vec<Order>> {
        let rows = self.table.read_all()?;
        Ok(rows.iter().map(|row| Self::from_row(row)).collect())
    }

    /// Find an order by id, along with the data-row index it occupies.
    pub fn find_by_id(&self, id: u32) -> Result<Option<(usize, Order)>> {
        let rows = self.table.read_all()?;
        for (index, row) in rows.iter().enumerate() {
            if parse_u32(cell(row, 0)) == id {
                return Ok(Some((index, Self::from_row(row))));
            }
        }
        Ok(None)
    }

    /// Next free id: one past the highest id on the sheet, starting at 1.
    pub fn next_id(&self) -> Result<u32> {
        let rows = self.table.read_all()?;
        let highest = rows
            .iter()
            .map(|row| parse_u32(cell(row, 0)))
            .max()
            .unwrap_or(0);
        Ok(highest + 1)
    }

    /// Append one full order row.
    pub fn append(&self, order: &Order) -> Result<()> {
        debug!("appending order {} to {}", order.id, ORDERS_TABLE);
        let payment = order
            .payment_method
            .as_ref()
            .map(|method| method.as_sheet_str().to_string())
            .unwrap_or_default();

        self.table.append_row(&[
            order.id.to_string(),
            format_timestamp(&order.created_at),
            order.customer_id.to_string(),
            order.customer_name.clone(),
            order.detail.clone(),
            order.subtotal.to_string(),
            order.delivery_fee.to_string(),
            order.total.to_string(),
            order.status.as_sheet_str().to_string(),
            payment,
            order.amount_paid.to_string(),
            order.outstanding.to_string(),
        ])
    }

    /// Overwrite the settlement columns of the order at `data_index`,
    /// marking it delivered.
    pub fn record_settlement(
        &self,
        data_index: usize,
        method: &PaymentMethod,
        amount_paid: i64,
        outstanding: i64,
    ) -> Result<()> {
        // Data row i sits at sheet row i + 2 (row 1 is the header).
        let row = data_index as u32 + 2;
        self.table
            .update_cell(row, COL_STATUS, OrderStatus::Delivered.as_sheet_str())?;
        self.table
            .update_cell(row, COL_PAYMENT_METHOD, method.as_sheet_str())?;
        self.table
            .update_cell(row, COL_AMOUNT_PAID, &amount_paid.to_string())?;
        self.table
            .update_cell(row, COL_OUTSTANDING, &outstanding.to_string())?;
        Ok(())
    }
}
