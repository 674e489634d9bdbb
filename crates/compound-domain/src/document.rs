//! Root of the persisted state.

use serde::{Deserialize, Serialize};

use crate::{goal::Goal, transaction::Transaction};

/// Everything the tracker stores: two ordered collections, insertion order preserved.
///
/// Both keys are required when reading and nothing else is accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Document {
    pub transactions: Vec<Transaction>,
    pub goals: Vec<Goal>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }
}
