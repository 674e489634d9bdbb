use std::path::Path;

use compound_domain::{Document, Goal, Transaction};

use crate::CoreError;

/// Abstraction over backends that persist the whole [`Document`] at once.
pub trait DocumentStorage: Send + Sync {
    /// Reads the document, initializing an empty one when nothing is stored yet.
    fn load(&self) -> Result<Document, CoreError>;

    /// Replaces the stored document. Readers observe either the old or the new
    /// content, never a mixture.
    fn save(&self, document: &Document) -> Result<(), CoreError>;

    /// Location of the backing file, when there is one.
    fn location(&self) -> Option<&Path> {
        None
    }

    /// Appends a transaction via load + push + save.
    ///
    /// Cost is linear in the document size. Two writers racing here can lose
    /// an update: whichever saves last wins.
    fn append_transaction(&self, transaction: &Transaction) -> Result<(), CoreError> {
        let mut document = self.load()?;
        document.transactions.push(transaction.clone());
        self.save(&document)
    }

    /// Appends a goal via load + push + save. Same cost and race caveats as
    /// [`DocumentStorage::append_transaction`].
    fn append_goal(&self, goal: &Goal) -> Result<(), CoreError> {
        let mut document = self.load()?;
        document.goals.push(goal.clone());
        self.save(&document)
    }
}
