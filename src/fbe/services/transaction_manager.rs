use crate::calendar;
use crate::ids::TransactionId;
use crate::models::{EntryKind, Transaction};

use std::collections::VecDeque;

use chrono::{NaiveDate, Utc};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManagerError {
    #[error("Overflow error while adjusting {0:?} balance by {1}")]
    BalanceOverflow(EntryKind, i64),
}

/// Owns the transaction list and running balance for one entry kind.
///
/// Amounts arriving here are pre-validated positive integers; the manager's
/// own job is ordering (most recent first), id assignment, and keeping the
/// balance adjustment overflow-safe.
pub struct TransactionManager {
    kind: EntryKind,
    initial_balance: i64,
    balance: i64,
    transactions: VecDeque<Transaction>,
    last_id: i64,
}

impl TransactionManager {
    pub fn new(kind: EntryKind) -> Self {
        Self::with_initial_balance(kind, 0)
    }

    pub fn with_initial_balance(kind: EntryKind, initial_balance: i64) -> Self {
        Self {
            kind,
            initial_balance,
            balance: initial_balance,
            transactions: VecDeque::new(),
            last_id: 0,
        }
    }

    /// Records a new transaction at the front of the list and adjusts the
    /// balance by `+amount` (income) or `-amount` (expense).
    pub fn add(&mut self, amount: i64, date: NaiveDate) -> Result<&Transaction, ManagerError> {
        let delta = match self.kind {
            EntryKind::Income => amount,
            EntryKind::Expense => -amount,
        };

        let balance = self
            .balance
            .checked_add(delta)
            .ok_or(ManagerError::BalanceOverflow(self.kind, amount))?;

        self.balance = balance;

        let transaction = Transaction {
            id: self.next_id(),
            amount,
            timestamp: calendar::entry_date_label(date),
        };

        log::debug!("Recording {:?} transaction: {transaction:?}", self.kind);

        self.transactions.push_front(transaction);

        Ok(&self.transactions[0])
    }

    /// Sum of every recorded amount, recomputed on read.
    pub fn total(&self) -> i64 {
        self.transactions.iter().map(|tx| tx.amount).sum()
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    pub fn initial_balance(&self) -> i64 {
        self.initial_balance
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Transactions, most recent first.
    pub fn transactions(&self) -> &VecDeque<Transaction> {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    fn next_id(&mut self) -> TransactionId {
        let now = Utc::now().timestamp_millis();

        // Strictly increasing even when two adds land in the same millisecond
        let id = now.max(self.last_id + 1);
        self.last_id = id;

        TransactionId(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOME_DATE: &str = "2024-01-15";

    fn sample_date() -> NaiveDate {
        SOME_DATE.parse().unwrap()
    }

    #[test]
    fn expense_add_prepends_and_subtracts() {
        let mut manager = TransactionManager::with_initial_balance(EntryKind::Expense, 10000);

        manager.add(1500, sample_date()).unwrap();
        manager.add(500, sample_date()).unwrap();

        assert_eq!(manager.len(), 2);
        assert_eq!(manager.balance(), 8000);

        // Most recent first
        assert_eq!(manager.transactions()[0].amount, 500);
        assert_eq!(manager.transactions()[1].amount, 1500);
    }

    #[test]
    fn income_add_prepends_and_adds() {
        let mut manager = TransactionManager::new(EntryKind::Income);

        manager.add(50000, sample_date()).unwrap();

        assert_eq!(manager.len(), 1);
        assert_eq!(manager.balance(), 50000);
    }

    #[test]
    fn total_is_the_sum_of_recorded_amounts() {
        let mut manager = TransactionManager::new(EntryKind::Expense);
        assert_eq!(manager.total(), 0);

        manager.add(1500, sample_date()).unwrap();
        manager.add(2500, sample_date()).unwrap();

        assert_eq!(manager.total(), 4000);
        assert_eq!(manager.balance(), -4000);
    }

    #[test]
    fn balance_invariant_holds_per_manager() {
        let mut manager = TransactionManager::with_initial_balance(EntryKind::Expense, 10000);

        for amount in [100, 2000, 350] {
            manager.add(amount, sample_date()).unwrap();
        }

        assert_eq!(manager.balance(), manager.initial_balance() - manager.total());
    }

    #[test]
    fn ids_are_strictly_increasing() {
        let mut manager = TransactionManager::new(EntryKind::Income);

        for _ in 0..5 {
            manager.add(1, sample_date()).unwrap();
        }

        let ids: Vec<_> = manager.transactions().iter().map(|tx| tx.id).collect();

        // Newest first, so ids descend front to back
        for pair in ids.windows(2) {
            assert!(pair[0] > pair[1], "{pair:?}");
        }
    }

    #[test]
    fn transactions_carry_the_entry_date_label() {
        let mut manager = TransactionManager::new(EntryKind::Expense);

        let tx = manager.add(1500, sample_date()).unwrap();
        assert_eq!(tx.timestamp, "2024/01/15(月)");
    }

    #[test]
    fn balance_overflow_is_an_error() {
        let mut manager = TransactionManager::with_initial_balance(EntryKind::Income, i64::MAX - 10);

        assert!(manager.add(100, sample_date()).is_err());
    }
}
