//! Customer registry model.

use serde::{Deserialize, Serialize};

/// A customer in the shop's registry, as stored in the `Clientes` table.
///
/// Ids are assigned by the registry and never reused. Two customers may
/// share a name or a phone; the id is the only key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: u32,
    pub name: String,
    pub phone: String,
    pub address: String,
}
