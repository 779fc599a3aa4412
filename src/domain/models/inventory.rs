//! Inventory model.

use serde::{Deserialize, Serialize};

/// Stock on hand for one product, as stored in the `Inventario` table.
///
/// Stock never goes below zero: order placement floors the deduction and
/// untracked products enter the table with a zero count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub product: String,
    pub stock: u32,
}
