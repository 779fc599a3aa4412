//! Expense journal model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One outgoing payment recorded in the `Gastos` journal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    pub recorded_at: NaiveDateTime,
    /// Free-text description of what the money went to.
    pub concept: String,
    /// Amount spent, in whole pesos.
    pub amount: i64,
}
