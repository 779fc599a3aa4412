//! Order model and the enums it encodes into sheet cells.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Delivery state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Delivered,
}

impl OrderStatus {
    /// Cell value this status is stored as.
    pub fn as_sheet_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pendiente",
            OrderStatus::Delivered => "Entregado",
        }
    }

    /// Parse a status cell, `None` for anything unrecognised.
    pub fn from_sheet_str(value: &str) -> Option<OrderStatus> {
        match value {
            "Pendiente" => Some(OrderStatus::Pending),
            "Entregado" => Some(OrderStatus::Delivered),
            _ => None,
        }
    }
}

/// How a settlement was paid.
///
/// The sheet stores free text in `Medio_pago`, so methods other than the two
/// standard ones round-trip through [`PaymentMethod::Other`] with their label
/// intact ("Crédito (queda debiendo)", "Pago parcial", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    Transfer,
    Other(String),
}

impl PaymentMethod {
    /// Cell value this method is stored as.
    pub fn as_sheet_str(&self) -> &str {
        match self {
            PaymentMethod::Cash => "Efectivo",
            PaymentMethod::Transfer => "Transferencia",
            PaymentMethod::Other(label) => label,
        }
    }

    /// Parse a payment method cell.
    pub fn from_sheet_str(value: &str) -> PaymentMethod {
        match value {
            "Efectivo" => PaymentMethod::Cash,
            "Transferencia" => PaymentMethod::Transfer,
            other => PaymentMethod::Other(other.to_string()),
        }
    }
}

/// One order as stored in the `Pedidos` table.
///
/// `customer_name` is a snapshot taken at placement and is not rewritten if
/// the customer record changes later. All money fields are whole pesos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u32,
    pub created_at: NaiveDateTime,
    pub customer_id: u32,
    pub customer_name: String,
    /// Line summary such as `Arandanos_250g x2 (@10000)`, lines joined
    /// with ` | `.
    pub detail: String,
    /// Product value of the order.
    pub subtotal: i64,
    /// Delivery fee charged, zero when the order is picked up.
    pub delivery_fee: i64,
    pub total: i64,
    pub status: OrderStatus,
    /// `None` until the order is settled.
    pub payment_method: Option<PaymentMethod>,
    pub amount_paid: i64,
    pub outstanding: i64,
}
