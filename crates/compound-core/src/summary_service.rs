use chrono::NaiveDate;
use compound_domain::{Summary, Transaction};

use crate::{filter::TransactionFilter, storage::DocumentStorage, CoreError};

pub struct SummaryService;

impl SummaryService {
    /// Aggregates income, spend, net, per-category spend and per-month net.
    ///
    /// Any amount that is not strictly positive takes the spend branch, so a
    /// zero-amount transaction still creates its category entry (at 0.0).
    /// Only the three scalar totals are rounded to cents.
    pub fn compute_summary(transactions: &[Transaction]) -> Summary {
        let mut summary = Summary::default();
        let mut income = 0.0;
        let mut expense = 0.0;

        for txn in transactions {
            if txn.is_income() {
                income += txn.amount;
            } else {
                let magnitude = txn.amount.abs();
                expense += magnitude;
                *summary
                    .spend_by_category
                    .entry(txn.category.as_str().to_string())
                    .or_insert(0.0) += magnitude;
            }
            *summary
                .monthly_net
                .entry(month_key(txn.date))
                .or_insert(0.0) += txn.amount;
        }

        summary.total_income = round_cents(income);
        summary.total_expense = round_cents(expense);
        summary.net = round_cents(income - expense);
        summary
    }

    /// Loads the stored transactions, keeps those inside the inclusive window,
    /// and summarizes them.
    pub fn summarize_window(
        storage: &dyn DocumentStorage,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Summary, CoreError> {
        let document = storage.load()?;
        let selected = TransactionFilter::window(from, to).apply(&document.transactions);
        Ok(Self::compute_summary(&selected))
    }
}

fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
