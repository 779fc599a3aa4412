//! # Product Catalog
//!
//! The fixed list of products the shop sells and the flat delivery fee.
//! Prices change rarely (a handful of times a year), so the catalog is
//! configuration rather than ledger data: the built-in AndicBlue catalog is
//! the default, and a deployment can override it with a YAML file:
//!
//! ```yaml
//! delivery_fee: 3000
//! products:
//!   - name: Arandanos_250g
//!     unit_price: 10000
//!   - name: Mermelada_azucar
//!     unit_price: 16000
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One sellable product and its unit price in whole pesos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub name: String,
    pub unit_price: i64,
}

/// Product list and delivery fee the order flow prices against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub products: Vec<CatalogProduct>,
    /// Flat fee charged when an order is delivered, in whole pesos.
    pub delivery_fee: i64,
}

/// Result of a catalog price lookup.
///
/// Products can reach the ledger without a catalog entry (inventory rows
/// created ad hoc), so a missing price is an expected case with its own
/// policy rather than an error: such items are tracked by count and priced
/// at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceLookup {
    Known(i64),
    Unknown,
}

impl Catalog {
    /// The catalog AndicBlue currently sells.
    pub fn andicblue() -> Self {
        let products = [
            ("Docena de Arándanos 125g", 52500),
            ("Arandanos_125g", 5000),
            ("Arandanos_250g", 10000),
            ("Arandanos_500g", 20000),
            ("Kilo_industrial", 30000),
            ("Mermelada_azucar", 16000),
            ("Mermelada_sin_azucar", 20000),
        ]
        .into_iter()
        .map(|(name, unit_price)| CatalogProduct {
            name: name.to_string(),
            unit_price,
        })
        .collect();

        Catalog {
            products,
            delivery_fee: 3000,
        }
    }

    /// Load a catalog override from a YAML file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog file {:?}", path))?;
        let catalog: Catalog = serde_yaml::from_str(&raw)
            .with_context(|| format!("failed to parse catalog file {:?}", path))?;
        Ok(catalog)
    }

    /// Price of a product, tagged by whether the catalog knows it.
    pub fn price_lookup(&self, product: &str) -> PriceLookup {
        match self.products.iter().find(|p| p.name == product) {
            Some(p) => PriceLookup::Known(p.unit_price),
            None => PriceLookup::Unknown,
        }
    }

    /// Whether the catalog lists this product.
    pub fn contains(&self, product: &str) -> bool {
        matches!(self.price_lookup(product), PriceLookup::Known(_))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::andicblue()
    }
}
