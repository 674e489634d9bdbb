use compound_domain::{NewTransaction, Transaction};

use crate::{
    filter::{sort_recent_first, TransactionFilter},
    storage::DocumentStorage,
    CoreError,
};

pub struct TransactionService;

impl TransactionService {
    /// Validates a creation request and assigns a fresh identifier.
    ///
    /// A missing category becomes `other`; blank notes are dropped.
    pub fn create(input: NewTransaction) -> Result<Transaction, CoreError> {
        let merchant = input.merchant.trim();
        if merchant.is_empty() {
            return Err(CoreError::Validation("merchant is required".into()));
        }
        if !input.amount.is_finite() {
            return Err(CoreError::Validation(format!(
                "amount must be a finite number, got {}",
                input.amount
            )));
        }
        let mut transaction = Transaction::new(
            input.date,
            input.amount,
            merchant,
            input.category.unwrap_or_default(),
        );
        transaction.notes = input
            .notes
            .map(|notes| notes.trim().to_string())
            .filter(|notes| !notes.is_empty());
        Ok(transaction)
    }

    /// Validates and persists a new transaction. Nothing is written when
    /// validation fails.
    pub fn record(
        storage: &dyn DocumentStorage,
        input: NewTransaction,
    ) -> Result<Transaction, CoreError> {
        let transaction = Self::create(input)?;
        storage.append_transaction(&transaction)?;
        Ok(transaction)
    }

    /// Stored transactions matching `filter`, newest first.
    pub fn list(
        storage: &dyn DocumentStorage,
        filter: &TransactionFilter,
    ) -> Result<Vec<Transaction>, CoreError> {
        let document = storage.load()?;
        let mut selected = filter.apply(&document.transactions);
        sort_recent_first(&mut selected);
        Ok(selected)
    }
}
