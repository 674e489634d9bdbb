//! Dated monetary movements.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::category::TransactionCategory;

/// A recorded transaction. Positive amounts are income, everything else is spend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub date: NaiveDate,
    pub amount: f64,
    pub merchant: String,
    pub category: TransactionCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        amount: f64,
        merchant: impl Into<String>,
        category: TransactionCategory,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            amount,
            merchant: merchant.into(),
            category,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn is_income(&self) -> bool {
        self.amount > 0.0
    }
}

/// Creation input for a transaction, before an identifier is assigned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub amount: f64,
    pub merchant: String,
    #[serde(default)]
    pub category: Option<TransactionCategory>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewTransaction {
    pub fn new(date: NaiveDate, amount: f64, merchant: impl Into<String>) -> Self {
        Self {
            date,
            amount,
            merchant: merchant.into(),
            category: None,
            notes: None,
        }
    }

    pub fn with_category(mut self, category: TransactionCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}
