//! Cash-flow journal model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::models::order::PaymentMethod;

/// One settlement recorded in the `FlujoCaja` journal.
///
/// The journal is append-only. `product_income` and `delivery_income` are
/// the amounts actually received, already split by priority, so summing the
/// journal never counts money the shop was not handed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowEntry {
    pub recorded_at: NaiveDateTime,
    pub order_id: u32,
    pub customer_name: String,
    pub payment_method: PaymentMethod,
    /// Portion of the payment applied to products, in whole pesos.
    pub product_income: i64,
    /// Portion of the payment applied to the delivery fee.
    pub delivery_income: i64,
    /// What the customer still owes on this order after the settlement.
    pub outstanding_after: i64,
}
