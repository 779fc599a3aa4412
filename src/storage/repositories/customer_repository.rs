//! # Customer Repository
//!
//! Rows of the `Clientes` table.

use anyhow::Result;
use log::debug;

use crate::domain::models::customer::Customer;
use crate::storage::repositories::{cell, parse_u32};
use crate::storage::schema::{CUSTOMERS_TABLE, CUSTOMER_HEADERS};
use crate::storage::traits::{LedgerStore, Table};

/// Row-level access to the customer registry.
#[derive(Clone)]
pub struct CustomerRepository<S: LedgerStore> {
    table: S::Table,
}

impl<S: LedgerStore> CustomerRepository<S> {
    /// Open the table, creating it on a fresh ledger.
    pub fn new(store: &S) -> Result<Self> {
        let table = store.ensure_table(CUSTOMERS_TABLE, &CUSTOMER_HEADERS)?;
        Ok(CustomerRepository { table })
    }

    fn from_row(row: &[String]) -> Customer {
        Customer {
            id: parse_u32(cell(row, 0)),
            name: cell(row, 1).to_string(),
            phone: cell(row, 2).to_string(),
            address: cell(row, 3).to_string(),
        }
    }

    /// All customers in registration order.
    pub fn list(&self) -> Result<Vec<Customer>> {
        let rows = self.table.read_all()?;
        Ok(rows.iter().map(|row| Self::from_row(row)).collect())
    }

    /// Find a customer by id.
    pub fn find_by_id(&self, id: u32) -> Result<Option<Customer>> {
        Ok(self.list()?.into_iter().find(|customer| customer.id == id))
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

    /// Append one customer row.
    pub fn append(&self, customer: &Customer) -> Result<()> {
        debug!("appending customer {} to {}", customer.id, CUSTOMERS_TABLE);
        self.table.append_row(&[
            customer.id.to_string(),
            customer.name.clone(),
            customer.phone.clone(),
            customer.address.clone(),
        ])
    }
}
