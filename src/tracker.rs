use std::path::PathBuf;

use chrono::NaiveDate;
use compound_config::Config;
use compound_core::{
    CoreError, DocumentStorage, GoalService, SummaryService, TransactionFilter,
    TransactionService,
};
use compound_domain::{GoalWithProjection, NewGoal, NewTransaction, Summary, Transaction};
use compound_storage_json::JsonDocumentStorage;
use tracing::info;

/// Entry point for callers: records transactions and goals and serves the
/// listing, projection, and summary views over a [`DocumentStorage`].
pub struct FinanceTracker {
    storage: Box<dyn DocumentStorage>,
}

impl FinanceTracker {
    pub fn new(storage: Box<dyn DocumentStorage>) -> Self {
        Self { storage }
    }

    /// Tracker over the JSON document at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(Box::new(JsonDocumentStorage::new(path)))
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(Box::new(JsonDocumentStorage::from_config(config)))
    }

    pub fn storage(&self) -> &dyn DocumentStorage {
        self.storage.as_ref()
    }

    /// Transactions matching `filter`, newest first.
    pub fn list_transactions(
        &self,
        filter: &TransactionFilter,
    ) -> Result<Vec<Transaction>, CoreError> {
        TransactionService::list(self.storage(), filter)
    }

    pub fn create_transaction(&self, input: NewTransaction) -> Result<Transaction, CoreError> {
        let transaction = TransactionService::record(self.storage(), input)?;
        info!(
            id = %transaction.id,
            category = %transaction.category,
            "recorded transaction"
        );
        Ok(transaction)
    }

    pub fn list_goals(&self) -> Result<Vec<GoalWithProjection>, CoreError> {
        GoalService::list(self.storage())
    }

    pub fn create_goal(&self, input: NewGoal) -> Result<GoalWithProjection, CoreError> {
        let entry = GoalService::record(self.storage(), input)?;
        info!(
            id = %entry.goal.id,
            months_to_target = entry.projection.months_to_target,
            "recorded goal"
        );
        Ok(entry)
    }

    /// Summary over the inclusive `[from, to]` window; either bound may be open.
    pub fn summary(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Summary, CoreError> {
        SummaryService::summarize_window(self.storage(), from, to)
    }
}
