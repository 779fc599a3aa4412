//! Domain models persisted to the ledger tables.
//!
//! Each model maps one-to-one onto a row of its table; the repositories in
//! [`crate::storage::repositories`] do the cell-level encoding. Money is
//! always `i64` whole pesos.

pub mod cash_flow;
pub mod customer;
pub mod expense;
pub mod inventory;
pub mod order;

pub use cash_flow::CashFlowEntry;
pub use customer::Customer;
pub use expense::ExpenseEntry;
pub use inventory::InventoryRecord;
pub use order::{Order, OrderStatus, PaymentMethod};
