//! # Domain Commands
//!
//! Input and result types for the service operations, grouped by area the
//! same way the services are. Commands carry exactly what the caller typed;
//! validation happens inside the service that consumes them.

pub mod customers {
    /// Register a new customer in the registry.
    #[derive(Debug, Clone)]
    pub struct RegisterCustomerCommand {
        pub name: String,
        pub phone: String,
        pub address: String,
    }
}

pub mod orders {
    use std::collections::BTreeMap;

    use crate::domain::models::order::PaymentMethod;

    /// Place an order: requested quantity per product name, plus whether it
    /// is delivered (which adds the catalog's flat fee).
    #[derive(Debug, Clone)]
    pub struct PlaceOrderCommand {
        pub customer_id: u32,
        pub items: BTreeMap<String, u32>,
        pub delivery: bool,
    }

    /// Mark an order delivered and record what was handed over at the door.
    #[derive(Debug, Clone)]
    pub struct SettleOrderCommand {
        pub order_id: u32,
        pub payment_method: PaymentMethod,
        /// Amount actually received, in whole pesos. Zero is a valid value
        /// and means the customer took the order on credit.
        pub amount_paid: i64,
    }

    /// How a settlement payment was split across the order.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SettlementResult {
        /// Portion applied to the product subtotal.
        pub product_amount_applied: i64,
        /// Portion applied to the delivery fee.
        pub delivery_amount_applied: i64,
        /// What the customer still owes after this payment.
        pub remaining_balance: i64,
    }
}

pub mod inventory {
    /// Add received units to a product's stock.
    #[derive(Debug, Clone)]
    pub struct ReplenishCommand {
        pub product: String,
        pub quantity: u32,
    }
}

pub mod expenses {
    /// Record one outgoing payment in the expense journal.
    #[derive(Debug, Clone)]
    pub struct RecordExpenseCommand {
        pub concept: String,
        /// Amount spent, in whole pesos. Stored as given; the form that
        /// collects it enforces its own constraints.
        pub amount: i64,
    }
}

pub mod reports {
    use crate::domain::models::order::PaymentMethod;

    /// Aggregated money position derived from the income and expense
    /// journals.
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct CashFlowSummary {
        pub product_revenue_cash: i64,
        pub product_revenue_transfer: i64,
        pub product_revenue_other: i64,
        /// Sum of the three buckets above.
        pub total_product_revenue: i64,
        /// Delivery income, kept apart because it is owed to the courier.
        pub total_delivery_revenue: i64,
        pub total_expenses: i64,
        /// Product revenue minus expenses. Delivery money never enters it.
        pub net_available_balance: i64,
    }

    impl CashFlowSummary {
        /// Product revenue bucket for the given payment method.
        pub fn product_revenue_by_method(&self, method: &PaymentMethod) -> i64 {
            match method {
                PaymentMethod::Cash => self.product_revenue_cash,
                PaymentMethod::Transfer => self.product_revenue_transfer,
                PaymentMethod::Other(_) => self.product_revenue_other,
            }
        }
    }
}
