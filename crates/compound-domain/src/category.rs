//! Closed set of spending categories.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Category assigned to every transaction. Serialized as its lowercase name.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(rename_all = "lowercase")]
pub enum TransactionCategory {
    Groceries,
    Rent,
    Salary,
    Bills,
    Fun,
    #[default]
    Other,
}

impl TransactionCategory {
    pub const ALL: [TransactionCategory; 6] = [
        TransactionCategory::Groceries,
        TransactionCategory::Rent,
        TransactionCategory::Salary,
        TransactionCategory::Bills,
        TransactionCategory::Fun,
        TransactionCategory::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TransactionCategory::Groceries => "groceries",
            TransactionCategory::Rent => "rent",
            TransactionCategory::Salary => "salary",
            TransactionCategory::Bills => "bills",
            TransactionCategory::Fun => "fun",
            TransactionCategory::Other => "other",
        }
    }
}

impl fmt::Display for TransactionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionCategory {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        TransactionCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| UnknownCategory(value.to_string()))
    }
}

/// Raised when a label does not name one of the known categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown category `{}` (expected one of groceries, rent, salary, bills, fun, other)",
            self.0
        )
    }
}

impl std::error::Error for UnknownCategory {}
