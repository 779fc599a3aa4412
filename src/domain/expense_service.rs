//! # Expense Service
//!
//! The outgoing side of the ledger: fruit purchases, packaging, transport
//! and whatever else the shop pays for, recorded as free-text entries.

use log::info;

use crate::domain::commands::expenses::RecordExpenseCommand;
use crate::domain::ledger_now;
use crate::domain::errors::DomainResult;
use crate::domain::models::expense::ExpenseEntry;
use crate::storage::repositories::ExpenseRepository;
use crate::storage::traits::LedgerStore;

/// Expense journal operations.
#[derive(Clone)]
pub struct ExpenseService<S: LedgerStore> {
    expenses: ExpenseRepository<S>,
}

impl<S: LedgerStore> ExpenseService<S> {
    /// Open the journal against the given store.
    pub fn new(store: &S) -> DomainResult<Self> {
        Ok(ExpenseService {
            expenses: ExpenseRepository::new(store)?,
        })
    }

    /// Journal one outgoing payment and return the stored entry.
    ///
    /// Concept and amount are stored as given; input constraints live in the
    /// form that collects them.
    pub fn record_expense(&self, command: RecordExpenseCommand) -> DomainResult<ExpenseEntry> {
        let entry = ExpenseEntry {
            recorded_at: ledger_now(),
            concept: command.concept,
            amount: command.amount,
        };
        self.expenses.append(&entry)?;

        info!("recorded expense '{}' for {}", entry.concept, entry.amount);
        Ok(entry)
    }

    /// Every expense in recording order.
    pub fn list_expenses(&self) -> DomainResult<Vec<ExpenseEntry>> {
        Ok(self.expenses.list()?)
    }

    /// The most recent expenses in recording order, capped at `limit`.
    pub fn recent_expenses(&self, limit: usize) -> DomainResult<Vec<ExpenseEntry>> {
        let mut entries = self.expenses.list()?;
        if entries.len() > limit {
            entries.drain(..entries.len() - limit);
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::csv::test_utils::TestHelper;

    #[test]
    fn test_record_expense_round_trips() {
        let helper = TestHelper::new();

        let recorded = helper
            .backend
            .expense_service
            .record_expense(RecordExpenseCommand {
                concept: "Compra arandanos finca".to_string(),
                amount: 150000,
            })
            .unwrap();
        assert_eq!(recorded.amount, 150000);

        let listed = helper.backend.expense_service.list_expenses().unwrap();
        assert_eq!(listed, vec![recorded]);
    }

    #[test]
    fn test_record_expense_stores_values_as_given() {
        let helper = TestHelper::new();

        helper
            .backend
            .expense_service
            .record_expense(RecordExpenseCommand {
                concept: "Ajuste caja".to_string(),
                amount: 0,
            })
            .unwrap();
        helper
            .backend
            .expense_service
            .record_expense(RecordExpenseCommand {
                concept: "Devolución empaques".to_string(),
                amount: -2000,
            })
            .unwrap();

        let listed = helper.backend.expense_service.list_expenses().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].amount, 0);
        assert_eq!(listed[1].concept, "Devolución empaques");
        assert_eq!(listed[1].amount, -2000);
    }

    #[test]
    fn test_recent_expenses_keeps_the_tail() {
        let helper = TestHelper::new();

        for concept in ["Bolsas", "Hielo", "Transporte", "Etiquetas"] {
            helper
                .backend
                .expense_service
                .record_expense(RecordExpenseCommand {
                    concept: concept.to_string(),
                    amount: 1000,
                })
                .unwrap();
        }

        let recent = helper.backend.expense_service.recent_expenses(2).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].concept, "Transporte");
        assert_eq!(recent[1].concept, "Etiquetas");

        assert_eq!(helper.backend.expense_service.recent_expenses(50).unwrap().len(), 4);
    }
}
