//! Date-window and category selection over in-memory transactions.

use std::cmp::Reverse;

use chrono::NaiveDate;
use compound_domain::{Transaction, TransactionCategory};

/// Optional constraints combined with AND. Both date bounds are inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub category: Option<TransactionCategory>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn window(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self {
            from,
            to,
            category: None,
        }
    }

    pub fn from(mut self, date: NaiveDate) -> Self {
        self.from = Some(date);
        self
    }

    pub fn to(mut self, date: NaiveDate) -> Self {
        self.to = Some(date);
        self
    }

    pub fn category(mut self, category: TransactionCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn matches(&self, transaction: &Transaction) -> bool {
        if let Some(from) = self.from {
            if transaction.date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if transaction.date > to {
                return false;
            }
        }
        match self.category {
            Some(category) => transaction.category == category,
            None => true,
        }
    }

    /// Returns the matching transactions in their original order.
    pub fn apply(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        transactions
            .iter()
            .filter(|txn| self.matches(txn))
            .cloned()
            .collect()
    }
}

/// Newest first. Stable, so same-day entries keep insertion order.
pub fn sort_recent_first(transactions: &mut [Transaction]) {
    transactions.sort_by_key(|txn| Reverse(txn.date));
}
