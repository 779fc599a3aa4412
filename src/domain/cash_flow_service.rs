//! # Cash-Flow Service
//!
//! Read-side aggregation over the income and expense journals. Nothing here
//! writes; settlements and expenses land in the journals through their own
//! services and this one folds them into the shop's money position.

use crate::domain::commands::reports::CashFlowSummary;
use crate::domain::errors::DomainResult;
use crate::domain::models::cash_flow::CashFlowEntry;
use crate::domain::models::order::PaymentMethod;
use crate::storage::repositories::{CashFlowRepository, ExpenseRepository};
use crate::storage::traits::LedgerStore;

/// Aggregates the journals into report figures.
#[derive(Clone)]
pub struct CashFlowService<S: LedgerStore> {
    cash_flow: CashFlowRepository<S>,
    expenses: ExpenseRepository<S>,
}

impl<S: LedgerStore> CashFlowService<S> {
    /// Open both journals against the given store.
    pub fn new(store: &S) -> DomainResult<Self> {
        Ok(CashFlowService {
            cash_flow: CashFlowRepository::new(store)?,
            expenses: ExpenseRepository::new(store)?,
        })
    }

    /// Fold both journals into the current money position.
    ///
    /// Product income is bucketed by payment method: cash, transfer, and
    /// everything else (credit, partial-payment labels, ...) pooled as
    /// "other". Delivery income stays out of every product bucket and out
    /// of the net balance, it is owed to the courier.
    pub fn summary(&self) -> DomainResult<CashFlowSummary> {
        let mut summary = CashFlowSummary::default();

        for entry in &self.cash_flow.list()? {
            match entry.payment_method {
                PaymentMethod::Cash => summary.product_revenue_cash += entry.product_income,
                PaymentMethod::Transfer => {
                    summary.product_revenue_transfer += entry.product_income
                }
                PaymentMethod::Other(_) => summary.product_revenue_other += entry.product_income,
            }
            summary.total_delivery_revenue += entry.delivery_income;
        }
        summary.total_product_revenue = summary.product_revenue_cash
            + summary.product_revenue_transfer
            + summary.product_revenue_other;

        summary.total_expenses = self
            .expenses
            .list()?
            .iter()
            .map(|expense| expense.amount)
            .sum();
        summary.net_available_balance = summary.total_product_revenue - summary.total_expenses;

        Ok(summary)
    }

    /// The most recent journal entries in recording order, capped at `limit`.
    pub fn recent_entries(&self, limit: usize) -> DomainResult<Vec<CashFlowEntry>> {
        let mut entries = self.cash_flow.list()?;
        if entries.len() > limit {
            entries.drain(..entries.len() - limit);
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commands::expenses::RecordExpenseCommand;
    use crate::domain::commands::orders::SettleOrderCommand;
    use crate::storage::csv::test_utils::TestHelper;

    fn settle(helper: &TestHelper, order_id: u32, method: PaymentMethod, amount: i64) {
        helper
            .backend
            .order_service
            .settle_order(SettleOrderCommand {
                order_id,
                payment_method: method,
                amount_paid: amount,
            })
            .unwrap();
    }

    #[test]
    fn test_summary_of_an_empty_ledger_is_all_zeroes() {
        let helper = TestHelper::new();
        assert_eq!(helper.backend.cash_flow_service.summary().unwrap(), CashFlowSummary::default());
    }

    #[test]
    fn test_summary_buckets_product_income_by_method() {
        let helper = TestHelper::new();
        let customer = helper.register_test_customer("Maria Lopez");
        helper.replenish("Arandanos_500g", 10);

        // Three delivered orders of 20000 + 3000 each, paid differently.
        let cash = helper.place_simple_order(customer.id, "Arandanos_500g", 1, true);
        let transfer = helper.place_simple_order(customer.id, "Arandanos_500g", 1, true);
        let credit = helper.place_simple_order(customer.id, "Arandanos_500g", 1, true);

        settle(&helper, cash.id, PaymentMethod::Cash, 23000);
        settle(&helper, transfer.id, PaymentMethod::Transfer, 23000);
        settle(
            &helper,
            credit.id,
            PaymentMethod::Other("Pago parcial".to_string()),
            5000,
        );

        let summary = helper.backend.cash_flow_service.summary().unwrap();
        assert_eq!(summary.product_revenue_cash, 20000);
        assert_eq!(summary.product_revenue_transfer, 20000);
        assert_eq!(summary.product_revenue_other, 5000);
        assert_eq!(summary.total_product_revenue, 45000);
        assert_eq!(summary.total_delivery_revenue, 6000);

        assert_eq!(
            summary.product_revenue_by_method(&PaymentMethod::Cash),
            summary.product_revenue_cash
        );
    }

    #[test]
    fn test_net_balance_excludes_delivery_income() {
        let helper = TestHelper::new();
        let customer = helper.register_test_customer("Maria Lopez");
        helper.replenish("Arandanos_500g", 5);

        let order = helper.place_simple_order(customer.id, "Arandanos_500g", 1, true);
        settle(&helper, order.id, PaymentMethod::Cash, 23000);

        helper
            .backend
            .expense_service
            .record_expense(RecordExpenseCommand {
                concept: "Bolsas".to_string(),
                amount: 4000,
            })
            .unwrap();

        let summary = helper.backend.cash_flow_service.summary().unwrap();
        assert_eq!(summary.total_product_revenue, 20000);
        assert_eq!(summary.total_delivery_revenue, 3000);
        assert_eq!(summary.total_expenses, 4000);
        // 20000 - 4000: the 3000 of delivery money never enters the balance.
        assert_eq!(summary.net_available_balance, 16000);
    }

    #[test]
    fn test_delivery_heavy_income_still_stays_out_of_the_balance() {
        let helper = TestHelper::new();
        let customer = helper.register_test_customer("Maria Lopez");
        helper.replenish("Arandanos_125g", 1);

        // One small product sale, then a string of delivery-only orders:
        // delivery income ends up dwarfing product income.
        let sale = helper.place_simple_order(customer.id, "Arandanos_125g", 1, false);
        settle(&helper, sale.id, PaymentMethod::Cash, 5000);

        for _ in 0..4 {
            let delivery_only = helper.place_simple_order(customer.id, "Arandanos_125g", 0, true);
            settle(&helper, delivery_only.id, PaymentMethod::Cash, 3000);
        }

        let summary = helper.backend.cash_flow_service.summary().unwrap();
        assert_eq!(summary.total_product_revenue, 5000);
        assert_eq!(summary.total_delivery_revenue, 12000);
        assert_eq!(summary.net_available_balance, 5000);
    }

    #[test]
    fn test_recent_entries_keeps_the_tail() {
        let helper = TestHelper::new();
        let customer = helper.register_test_customer("Maria Lopez");
        helper.replenish("Arandanos_125g", 10);

        for _ in 0..4 {
            let order = helper.place_simple_order(customer.id, "Arandanos_125g", 1, false);
            settle(&helper, order.id, PaymentMethod::Cash, 5000);
        }

        let recent = helper.backend.cash_flow_service.recent_entries(2).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].order_id, 3);
        assert_eq!(recent[1].order_id, 4);

        // A limit above the journal length returns everything.
        assert_eq!(helper.backend.cash_flow_service.recent_entries(50).unwrap().len(), 4);
    }
}
