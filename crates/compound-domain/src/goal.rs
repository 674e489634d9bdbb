//! Savings goals and their derived completion projection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A savings target funded by a fixed monthly contribution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    pub id: Uuid,
    pub name: String,
    pub target_amount: f64,
    pub monthly_contribution: f64,
    pub start_date: NaiveDate,
}

impl Goal {
    pub fn new(
        name: impl Into<String>,
        target_amount: f64,
        monthly_contribution: f64,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            target_amount,
            monthly_contribution,
            start_date,
        }
    }
}

/// Creation input for a goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewGoal {
    pub name: String,
    pub target_amount: f64,
    pub monthly_contribution: f64,
    pub start_date: NaiveDate,
}

impl NewGoal {
    pub fn new(
        name: impl Into<String>,
        target_amount: f64,
        monthly_contribution: f64,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            target_amount,
            monthly_contribution,
            start_date,
        }
    }
}

/// When a goal is expected to be reached. Derived on every read, never stored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoalProjection {
    pub months_to_target: u32,
    pub target_date: NaiveDate,
}

/// A goal paired with its projection, as handed to presentation layers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoalWithProjection {
    #[serde(flatten)]
    pub goal: Goal,
    pub projection: GoalProjection,
}
