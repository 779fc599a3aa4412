//! # AndicBlue Backend
//!
//! Order, inventory and cash-flow tracking for AndicBlue, a small shop
//! selling blueberries and preserves. The shop's records live in a
//! spreadsheet-style workbook: one table per concern (customers, orders,
//! stock, income, expenses), row 1 the header, edited both by this backend
//! and occasionally by hand.
//!
//! [`storage`] defines the tabular contract and the CSV directory backend;
//! [`domain`] holds the business services on top of it. [`Backend`] wires
//! everything together against one store.
//!
//! ## Usage
//!
//! ```no_run
//! use andicblue_backend::Backend;
//!
//! # fn main() -> andicblue_backend::domain::DomainResult<()> {
//! let backend = Backend::open("./data")?;
//!
//! for customer in backend.customer_service.list_customers()? {
//!     println!("{}: {}", customer.id, customer.name);
//! }
//! let summary = backend.cash_flow_service.summary()?;
//! println!("available: {} COP", summary.net_available_balance);
//! # Ok(())
//! # }
//! ```

pub mod domain;
pub mod storage;

pub use domain::errors::{DomainError, DomainResult};
pub use storage::csv::CsvLedgerStore;

use std::path::Path;

use domain::catalog::Catalog;
use domain::{
    CashFlowService, CustomerService, ExpenseService, InventoryService, OrderService,
};
use storage::traits::LedgerStore;

/// All domain services wired against one ledger store.
#[derive(Clone)]
pub struct Backend<S: LedgerStore> {
    pub customer_service: CustomerService<S>,
    pub order_service: OrderService<S>,
    pub inventory_service: InventoryService<S>,
    pub expense_service: ExpenseService<S>,
    pub cash_flow_service: CashFlowService<S>,
    /// The catalog the services were wired with, for building order forms.
    pub catalog: Catalog,
}

impl<S: LedgerStore> Backend<S> {
    /// Wire every service against the given store.
    ///
    /// Ensures all five ledger tables exist and, on a brand-new ledger,
    /// seeds the inventory with one zero-stock row per catalog product.
    pub fn with_store(store: S, catalog: Catalog) -> DomainResult<Self> {
        let customer_service = CustomerService::new(&store)?;
        let inventory_service = InventoryService::new(&store, catalog.clone())?;
        inventory_service.seed_catalog_if_empty()?;

        let order_service = OrderService::new(
            &store,
            customer_service.clone(),
            inventory_service.clone(),
            catalog.clone(),
        )?;
        let expense_service = ExpenseService::new(&store)?;
        let cash_flow_service = CashFlowService::new(&store)?;

        Ok(Backend {
            customer_service,
            order_service,
            inventory_service,
            expense_service,
            cash_flow_service,
            catalog,
        })
    }
}

impl Backend<CsvLedgerStore> {
    /// Open a CSV-backed ledger in the given directory with the standard
    /// AndicBlue catalog.
    pub fn open<P: AsRef<Path>>(data_dir: P) -> DomainResult<Self> {
        let store = CsvLedgerStore::new(data_dir)?;
        Self::with_store(store, Catalog::default())
    }

    /// Open the ledger at its default location under Documents.
    pub fn open_default() -> DomainResult<Self> {
        let store = CsvLedgerStore::new_default()?;
        Self::with_store(store, Catalog::default())
    }
}
