//! # Inventory Service
//!
//! Stock tracking: seeding the table from the catalog on first run,
//! replenishing after purchases, and the deductions order placement makes.

use std::collections::BTreeMap;

use log::info;

use crate::domain::catalog::Catalog;
use crate::domain::commands::inventory::ReplenishCommand;
use crate::domain::errors::DomainResult;
use crate::domain::models::inventory::InventoryRecord;
use crate::storage::repositories::InventoryRepository;
use crate::storage::traits::LedgerStore;

/// Stock levels for everything the shop sells.
#[derive(Clone)]
pub struct InventoryService<S: LedgerStore> {
    inventory: InventoryRepository<S>,
    catalog: Catalog,
}

impl<S: LedgerStore> InventoryService<S> {
    /// Open the stock table against the given store.
    pub fn new(store: &S, catalog: Catalog) -> DomainResult<Self> {
        Ok(InventoryService {
            inventory: InventoryRepository::new(store)?,
            catalog,
        })
    }

    /// Write one zero-stock row per catalog product, but only when the table
    /// has no rows at all. Returns how many rows were written.
    ///
    /// An existing table is never touched, even if the catalog has grown
    /// since it was seeded; new products enter through [`Self::replenish`].
    pub fn seed_catalog_if_empty(&self) -> DomainResult<usize> {
        if !self.inventory.is_empty()? {
            return Ok(0);
        }

        for product in &self.catalog.products {
            self.inventory.append(&InventoryRecord {
                product: product.name.clone(),
                stock: 0,
            })?;
        }
        info!("seeded inventory with {} catalog products", self.catalog.products.len());
        Ok(self.catalog.products.len())
    }

    /// Current stock rows in sheet order.
    pub fn stock_levels(&self) -> DomainResult<Vec<InventoryRecord>> {
        Ok(self.inventory.records()?)
    }

    /// Product name to stock count.
    pub fn stock_map(&self) -> DomainResult<BTreeMap<String, u32>> {
        Ok(self.inventory.stock_map()?)
    }

    /// Add received units to a product's stock and return the new level.
    ///
    /// A product the table does not track yet gets a new row, whether or not
    /// the catalog lists it; the shop sometimes stocks one-off items.
    pub fn replenish(&self, command: ReplenishCommand) -> DomainResult<u32> {
        match self.inventory.find_product(&command.product)? {
            Some((index, current)) => {
                let updated = current.saturating_add(command.quantity);
                self.inventory.set_stock(index, updated)?;
                info!("replenished '{}': {} -> {}", command.product, current, updated);
                Ok(updated)
            }
            None => {
                self.inventory.append(&InventoryRecord {
                    product: command.product.clone(),
                    stock: command.quantity,
                })?;
                info!("new inventory row '{}' with stock {}", command.product, command.quantity);
                Ok(command.quantity)
            }
        }
    }

    /// Deduct the quantities of a placed order, flooring each count at zero.
    ///
    /// Products without a row get one with zero stock so they appear in
    /// stock listings from now on. Callers are expected to have validated
    /// availability first; the floor only matters for rows edited by hand
    /// between validation and deduction.
    pub fn deduct_for_order(&self, items: &BTreeMap<String, u32>) -> DomainResult<()> {
        for (product, &quantity) in items {
            match self.inventory.find_product(product)? {
                Some((index, current)) => {
                    self.inventory.set_stock(index, current.saturating_sub(quantity))?;
                }
                None => {
                    self.inventory.append(&InventoryRecord {
                        product: product.clone(),
                        stock: 0,
                    })?;
                }
            }
        }
        Ok(())
    }
}
