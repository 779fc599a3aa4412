//! # Domain Layer
//!
//! Business logic for the shop: the customer registry, the order lifecycle,
//! stock tracking, the expense journal and the cash-flow position derived
//! from all of it.
//!
//! ## Architecture
//!
//! Services are plain synchronous structs, generic over the [`LedgerStore`]
//! they persist to. Each service owns the repositories for the tables it
//! touches; cross-service needs (order placement looking up customers and
//! stock) go through a cloned sibling service rather than reaching into
//! another table directly. Input arrives as command structs from
//! [`commands`], results are domain models from [`models`] or dedicated
//! result types, and every fallible operation returns a [`DomainResult`].
//!
//! ## Money
//!
//! Every amount is an `i64` of whole Colombian pesos. The shop prices
//! nothing in fractional pesos, so there is no decimal handling anywhere:
//! what you see in a cell is the integer that was summed.
//!
//! [`LedgerStore`]: crate::storage::traits::LedgerStore

pub mod catalog;
pub mod commands;
pub mod errors;
pub mod models;

pub mod cash_flow_service;
pub mod customer_service;
pub mod expense_service;
pub mod inventory_service;
pub mod order_service;

use chrono::{Local, NaiveDateTime, Timelike};

/// Wall-clock now at the whole-second precision the ledger cells store, so
/// a freshly written entry compares equal to its re-read row.
pub(crate) fn ledger_now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

pub use cash_flow_service::CashFlowService;
pub use catalog::{Catalog, CatalogProduct, PriceLookup};
pub use customer_service::CustomerService;
pub use errors::{DomainError, DomainResult};
pub use expense_service::ExpenseService;
pub use inventory_service::InventoryService;
pub use order_service::OrderService;
