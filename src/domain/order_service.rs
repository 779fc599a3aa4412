//! # Order Service
//!
//! The order lifecycle: placement against the catalog and inventory, and
//! settlement at the door when the order is handed over.
//!
//! ## Placement
//!
//! Everything is validated before anything is written: the customer must
//! exist, every requested product needs an inventory row, and stock must
//! cover the quantity. Only then is the order row appended and the stock
//! deducted, so a rejected order leaves no trace in the ledger.
//!
//! ## Settlement
//!
//! Payments are applied to the product subtotal first and the delivery fee
//! second. The delivery fee is owed to the courier, so it is the last thing
//! covered and the income journal keeps its portion in a separate column.

use log::info;

use crate::domain::catalog::{Catalog, PriceLookup};
use crate::domain::ledger_now;
use crate::domain::commands::orders::{PlaceOrderCommand, SettleOrderCommand, SettlementResult};
use crate::domain::customer_service::CustomerService;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::inventory_service::InventoryService;
use crate::domain::models::cash_flow::CashFlowEntry;
use crate::domain::models::order::{Order, OrderStatus};
use crate::storage::repositories::{CashFlowRepository, OrderRepository};
use crate::storage::traits::LedgerStore;

/// Order placement and settlement.
#[derive(Clone)]
pub struct OrderService<S: LedgerStore> {
    orders: OrderRepository<S>,
    cash_flow: CashFlowRepository<S>,
    customer_service: CustomerService<S>,
    inventory_service: InventoryService<S>,
    catalog: Catalog,
}

impl<S: LedgerStore> OrderService<S> {
    /// Wire the service against the given store and its sibling services.
    pub fn new(
        store: &S,
        customer_service: CustomerService<S>,
        inventory_service: InventoryService<S>,
        catalog: Catalog,
    ) -> DomainResult<Self> {
        Ok(OrderService {
            orders: OrderRepository::new(store)?,
            cash_flow: CashFlowRepository::new(store)?,
            customer_service,
            inventory_service,
            catalog,
        })
    }

    /// Place an order for a registered customer.
    ///
    /// Zero quantities are ignored for validation and pricing; an order with
    /// every quantity at zero is legal and only carries the delivery fee, if
    /// any. Products the catalog does not list are priced at zero but still
    /// counted against stock.
    pub fn place_order(&self, command: PlaceOrderCommand) -> DomainResult<Order> {
        let customer = self
            .customer_service
            .find_customer(command.customer_id)?
            .ok_or_else(|| DomainError::not_found("customer", command.customer_id))?;

        let stock = self.inventory_service.stock_map()?;
        for (product, &quantity) in &command.items {
            if quantity == 0 {
                continue;
            }
            match stock.get(product) {
                None => {
                    return Err(DomainError::validation(format!(
                        "product is not tracked in inventory: {}",
                        product
                    )));
                }
                Some(&available) if available < quantity => {
                    return Err(DomainError::InsufficientStock {
                        product: product.clone(),
                        available,
                        requested: quantity,
                    });
                }
                Some(_) => {}
            }
        }

        // Detail lines follow catalog order; products off the catalog come
        // after, in name order.
        let mut lines: Vec<(&str, u32)> = Vec::new();
        for product in &self.catalog.products {
            if let Some(&quantity) = command.items.get(&product.name) {
                if quantity > 0 {
                    lines.push((product.name.as_str(), quantity));
                }
            }
        }
        for (product, &quantity) in &command.items {
            if quantity > 0 && !self.catalog.contains(product) {
                lines.push((product.as_str(), quantity));
            }
        }

        let mut subtotal: i64 = 0;
        let mut detail_parts = Vec::with_capacity(lines.len());
        for (product, quantity) in &lines {
            let unit_price = match self.catalog.price_lookup(product) {
                PriceLookup::Known(price) => price,
                // Tracked by count only.
                PriceLookup::Unknown => 0,
            };
            subtotal += unit_price * i64::from(*quantity);
            detail_parts.push(format!("{} x{} (@{})", product, quantity, unit_price));
        }

        let delivery_fee = if command.delivery {
            self.catalog.delivery_fee
        } else {
            0
        };

        let order = Order {
            id: self.orders.next_id()?,
            created_at: ledger_now(),
            customer_id: customer.id,
            customer_name: customer.name.clone(),
            detail: detail_parts.join(" | "),
            subtotal,
            delivery_fee,
            total: subtotal + delivery_fee,
            status: OrderStatus::Pending,
            payment_method: None,
            amount_paid: 0,
            outstanding: subtotal,
        };

        self.orders.append(&order)?;
        self.inventory_service.deduct_for_order(&command.items)?;

        info!(
            "placed order {} for customer {} (total {}, delivery: {})",
            order.id, customer.id, order.total, command.delivery
        );
        Ok(order)
    }

    /// Settle a pending order at delivery.
    ///
    /// The payment is split with product money first: whatever remains after
    /// covering the subtotal goes to the delivery fee. Paying more than the
    /// order total is absorbed, the journal never records more than the
    /// order was worth. Zero is a valid payment and means full credit.
    pub fn settle_order(&self, command: SettleOrderCommand) -> DomainResult<SettlementResult> {
        if command.amount_paid < 0 {
            return Err(DomainError::validation("amount paid cannot be negative"));
        }

        let (data_index, order) = self
            .orders
            .find_by_id(command.order_id)?
            .ok_or_else(|| DomainError::not_found("order", command.order_id))?;

        if order.status == OrderStatus::Delivered {
            return Err(DomainError::validation(format!(
                "order {} has already been delivered",
                order.id
            )));
        }

        let product_applied = command.amount_paid.min(order.subtotal);
        let rest = (command.amount_paid - product_applied).max(0);
        let delivery_applied = rest.min(order.delivery_fee);
        let remaining =
            (order.subtotal - product_applied) + (order.delivery_fee - delivery_applied);

        self.orders.record_settlement(
            data_index,
            &command.payment_method,
            command.amount_paid,
            remaining,
        )?;
        self.cash_flow.append(&CashFlowEntry {
            recorded_at: ledger_now(),
            order_id: order.id,
            customer_name: order.customer_name.clone(),
            payment_method: command.payment_method.clone(),
            product_income: product_applied,
            delivery_income: delivery_applied,
            outstanding_after: remaining,
        })?;

        info!(
            "settled order {}: {} to products, {} to delivery, {} outstanding",
            order.id, product_applied, delivery_applied, remaining
        );
        Ok(SettlementResult {
            product_amount_applied: product_applied,
            delivery_amount_applied: delivery_applied,
            remaining_balance: remaining,
        })
    }

    /// All orders in placement order.
    pub fn list_orders(&self) -> DomainResult<Vec<Order>> {
        Ok(self.orders.list()?)
    }

    /// Orders still awaiting delivery, oldest first.
    pub fn pending_orders(&self) -> DomainResult<Vec<Order>> {
        Ok(self
            .orders
            .list()?
            .into_iter()
            .filter(|order| order.status == OrderStatus::Pending)
            .collect())
    }

    /// Look an order up by id.
    pub fn find_order(&self, id: u32) -> DomainResult<Option<Order>> {
        Ok(self.orders.find_by_id(id)?.map(|(_, order)| order))
    }
}
