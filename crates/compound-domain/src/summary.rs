//! Aggregate view over a window of transactions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Income, spend, and net totals plus per-category and per-month breakdowns.
///
/// Keys are plain strings (`"groceries"`, `"2025-01"`) so the value can be
/// handed to any presentation layer as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub total_income: f64,
    pub total_expense: f64,
    pub net: f64,
    pub spend_by_category: BTreeMap<String, f64>,
    pub monthly_net: BTreeMap<String, f64>,
}
