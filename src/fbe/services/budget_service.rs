use super::TransactionManager;

use crate::input::ValidatedEntry;
use crate::models::{BudgetReport, EntryKind, HistoryEntry, Transaction};
use crate::money::{format_money_for_display, MoneyFormatOptions};
use crate::Result;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BudgetServiceError {
    #[error("Overflow error while deriving the overall balance")]
    BalanceOverflow,
}

/// The whole household budget: one income manager, one expense manager, and
/// the balance derived across both.
pub struct BudgetService {
    initial_balance: i64,
    incomes: TransactionManager,
    expenses: TransactionManager,
}

impl BudgetService {
    pub fn new(incomes: TransactionManager, expenses: TransactionManager) -> Self {
        Self {
            initial_balance: 0,
            incomes,
            expenses,
        }
    }

    pub fn with_initial_balance(mut self, initial_balance: i64) -> Self {
        self.initial_balance = initial_balance;
        self
    }

    /// Records a validated entry against the matching manager.
    pub fn record(&mut self, entry: ValidatedEntry) -> Result<&Transaction> {
        log::debug!("Recording validated entry: {entry:?}");

        let manager = match entry.kind {
            EntryKind::Income => &mut self.incomes,
            EntryKind::Expense => &mut self.expenses,
        };

        let transaction = manager.add(entry.amount, entry.date)?;

        Ok(transaction)
    }

    pub fn total_income(&self) -> i64 {
        self.incomes.total()
    }

    pub fn total_expense(&self) -> i64 {
        self.expenses.total()
    }

    /// `initial_balance + Σincome - Σexpense`, recomputed on read.
    pub fn balance(&self) -> Result<i64> {
        self.initial_balance
            .checked_add(self.total_income())
            .and_then(|balance| balance.checked_sub(self.total_expense()))
            .ok_or_else(|| BudgetServiceError::BalanceOverflow.into())
    }

    pub fn incomes(&self) -> &TransactionManager {
        &self.incomes
    }

    pub fn expenses(&self) -> &TransactionManager {
        &self.expenses
    }

    /// Both histories merged, most recent first.
    ///
    /// Ordering follows the creation-time ids; when an income and an expense
    /// share a millisecond, the income sorts first.
    pub fn history(&self) -> Vec<HistoryEntry<'_>> {
        let mut merged = Vec::with_capacity(self.incomes.len() + self.expenses.len());

        let mut incomes = self.incomes.transactions().iter().peekable();
        let mut expenses = self.expenses.transactions().iter().peekable();

        loop {
            let entry = match (incomes.peek(), expenses.peek()) {
                (Some(income), Some(expense)) => {
                    if income.id >= expense.id {
                        HistoryEntry {
                            kind: EntryKind::Income,
                            transaction: incomes.next().expect("peeked"),
                        }
                    } else {
                        HistoryEntry {
                            kind: EntryKind::Expense,
                            transaction: expenses.next().expect("peeked"),
                        }
                    }
                }
                (Some(_), None) => HistoryEntry {
                    kind: EntryKind::Income,
                    transaction: incomes.next().expect("peeked"),
                },
                (None, Some(_)) => HistoryEntry {
                    kind: EntryKind::Expense,
                    transaction: expenses.next().expect("peeked"),
                },
                (None, None) => break,
            };

            merged.push(entry);
        }

        merged
    }

    /// Builds the stdout report: totals and balance as display strings.
    pub fn build_report(&self) -> Result<BudgetReport> {
        let options = MoneyFormatOptions::default();

        Ok(BudgetReport {
            income_total: format_money_for_display(Some(self.total_income() as f64), &options)?,
            expense_total: format_money_for_display(Some(self.total_expense() as f64), &options)?,
            balance: format_money_for_display(Some(self.balance()? as f64), &options)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDate;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    fn entry(kind: EntryKind, amount: i64) -> ValidatedEntry {
        ValidatedEntry {
            kind,
            amount,
            date: sample_date(),
        }
    }

    fn build_service() -> BudgetService {
        BudgetService::new(
            TransactionManager::new(EntryKind::Income),
            TransactionManager::new(EntryKind::Expense),
        )
    }

    #[test]
    fn balance_is_income_minus_expense() {
        let mut budget = build_service();

        budget.record(entry(EntryKind::Income, 50000)).unwrap();
        budget.record(entry(EntryKind::Expense, 1500)).unwrap();
        budget.record(entry(EntryKind::Expense, 500)).unwrap();

        assert_eq!(budget.total_income(), 50000);
        assert_eq!(budget.total_expense(), 2000);
        assert_eq!(budget.balance().unwrap(), 48000);
    }

    #[test]
    fn balance_starts_from_the_initial_balance() {
        let mut budget = build_service().with_initial_balance(10000);

        budget.record(entry(EntryKind::Expense, 1500)).unwrap();

        assert_eq!(budget.balance().unwrap(), 8500);
    }

    #[test]
    fn balance_can_go_negative() {
        let mut budget = build_service();

        budget.record(entry(EntryKind::Income, 1000)).unwrap();
        budget.record(entry(EntryKind::Expense, 2500)).unwrap();

        assert_eq!(budget.balance().unwrap(), -1500);
    }

    #[test]
    fn invariant_holds_after_any_sequence() {
        let mut budget = build_service().with_initial_balance(777);

        for (kind, amount) in [
            (EntryKind::Income, 100),
            (EntryKind::Expense, 30),
            (EntryKind::Income, 5000),
            (EntryKind::Expense, 1234),
            (EntryKind::Expense, 1),
        ] {
            budget.record(entry(kind, amount)).unwrap();

            assert_eq!(
                budget.balance().unwrap(),
                777 + budget.total_income() - budget.total_expense()
            );
        }
    }

    #[test]
    fn history_merges_both_kinds_newest_first() {
        let mut budget = build_service();

        budget.record(entry(EntryKind::Income, 100)).unwrap();
        budget.record(entry(EntryKind::Expense, 200)).unwrap();
        budget.record(entry(EntryKind::Income, 300)).unwrap();

        let history = budget.history();

        assert_eq!(history.len(), 3);

        // Ids descend through the merged view
        for pair in history.windows(2) {
            assert!(pair[0].transaction.id >= pair[1].transaction.id);
        }

        let incomes = history.iter().filter(|e| e.kind == EntryKind::Income).count();
        let expenses = history.iter().filter(|e| e.kind == EntryKind::Expense).count();
        assert_eq!((incomes, expenses), (2, 1));
    }

    #[test]
    fn report_renders_display_strings() {
        let mut budget = build_service();

        budget.record(entry(EntryKind::Income, 65000)).unwrap();
        budget.record(entry(EntryKind::Expense, 15500)).unwrap();

        let report = budget.build_report().unwrap();

        assert_eq!(report.income_total, "¥65,000");
        assert_eq!(report.expense_total, "¥15,500");
        assert_eq!(report.balance, "¥49,500");
    }

    #[test]
    fn empty_budget_reports_zeroes() {
        let report = build_service().build_report().unwrap();

        assert_eq!(report.income_total, "¥0");
        assert_eq!(report.expense_total, "¥0");
        assert_eq!(report.balance, "¥0");
    }
}
