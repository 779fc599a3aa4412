//! # Test Utilities
//!
//! Shared helpers for exercising the backend against a throwaway CSV store.
//! The temp directory lives as long as the environment value, so every test
//! gets an isolated ledger that is cleaned up when the test ends.

use std::collections::BTreeMap;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::domain::catalog::Catalog;
use crate::domain::commands::customers::RegisterCustomerCommand;
use crate::domain::commands::inventory::ReplenishCommand;
use crate::domain::commands::orders::PlaceOrderCommand;
use crate::domain::models::customer::Customer;
use crate::domain::models::order::Order;
use crate::storage::csv::CsvLedgerStore;
use crate::Backend;

/// Isolated CSV store rooted in a temp directory.
pub struct TestEnvironment {
    pub store: CsvLedgerStore,
    pub base_path: PathBuf,
    _temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let base_path = temp_dir.path().to_path_buf();
        let store = CsvLedgerStore::new(&base_path).unwrap();
        TestEnvironment {
            store,
            base_path,
            _temp_dir: temp_dir,
        }
    }
}

/// A fully wired backend on a throwaway store, with shortcuts for the setup
/// steps most tests share.
pub struct TestHelper {
    pub env: TestEnvironment,
    pub backend: Backend<CsvLedgerStore>,
}

impl TestHelper {
    /// Backend wired with the standard catalog on a fresh store.
    pub fn new() -> Self {
        let env = TestEnvironment::new();
        let backend = Backend::with_store(env.store.clone(), Catalog::default()).unwrap();
        TestHelper { env, backend }
    }

    /// Register a customer with placeholder contact details.
    pub fn register_test_customer(&self, name: &str) -> Customer {
        self.backend
            .customer_service
            .register_customer(RegisterCustomerCommand {
                name: name.to_string(),
                phone: "3001234567".to_string(),
                address: "Calle 10 #4-21".to_string(),
            })
            .unwrap()
    }

    /// Stock up a product.
    pub fn replenish(&self, product: &str, quantity: u32) -> u32 {
        self.backend
            .inventory_service
            .replenish(ReplenishCommand {
                product: product.to_string(),
                quantity,
            })
            .unwrap()
    }

    /// Current stock of a product, zero if untracked.
    pub fn stock_of(&self, product: &str) -> u32 {
        self.backend
            .inventory_service
            .stock_map()
            .unwrap()
            .get(product)
            .copied()
            .unwrap_or(0)
    }

    /// Place a single-product order.
    pub fn place_simple_order(
        &self,
        customer_id: u32,
        product: &str,
        quantity: u32,
        delivery: bool,
    ) -> Order {
        let mut items = BTreeMap::new();
        items.insert(product.to_string(), quantity);
        self.backend
            .order_service
            .place_order(PlaceOrderCommand {
                customer_id,
                items,
                delivery,
            })
            .unwrap()
    }
}
