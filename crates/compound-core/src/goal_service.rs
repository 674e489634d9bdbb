use chrono::{Months, NaiveDate};
use compound_domain::{Goal, GoalProjection, GoalWithProjection, NewGoal};

use crate::{storage::DocumentStorage, CoreError};

pub struct GoalService;

impl GoalService {
    /// Validates a creation request and assigns a fresh identifier.
    pub fn create(input: NewGoal) -> Result<Goal, CoreError> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(CoreError::Validation("goal name is required".into()));
        }
        if !input.target_amount.is_finite() || input.target_amount <= 0.0 {
            return Err(CoreError::Validation(format!(
                "target amount must be a positive number, got {}",
                input.target_amount
            )));
        }
        if !input.monthly_contribution.is_finite() {
            return Err(CoreError::Validation(
                "monthly contribution must be a finite number".into(),
            ));
        }
        Ok(Goal::new(
            name,
            input.target_amount,
            input.monthly_contribution,
            input.start_date,
        ))
    }

    /// Months until the target is reached and the calendar date that lands on.
    ///
    /// A contribution that is zero or negative cannot reach the target, so the
    /// projection collapses to zero months at the start date. Partial months
    /// round up. Month arithmetic keeps the day of month, clamped to month end.
    pub fn compute_projection(goal: &Goal) -> GoalProjection {
        let unreachable = GoalProjection {
            months_to_target: 0,
            target_date: goal.start_date,
        };
        if goal.monthly_contribution.is_nan() || goal.monthly_contribution <= 0.0 {
            return unreachable;
        }

        // float -> int casts saturate, which also maps NaN to zero
        let months_to_target = (goal.target_amount / goal.monthly_contribution).ceil() as u32;
        GoalProjection {
            months_to_target,
            target_date: add_months(goal.start_date, months_to_target),
        }
    }

    pub fn with_projection(goal: Goal) -> GoalWithProjection {
        let projection = Self::compute_projection(&goal);
        GoalWithProjection { goal, projection }
    }

    /// Validates, persists, and returns the stored goal with its projection.
    pub fn record(
        storage: &dyn DocumentStorage,
        input: NewGoal,
    ) -> Result<GoalWithProjection, CoreError> {
        let goal = Self::create(input)?;
        storage.append_goal(&goal)?;
        Ok(Self::with_projection(goal))
    }

    /// Every stored goal in insertion order, each with a fresh projection.
    pub fn list(storage: &dyn DocumentStorage) -> Result<Vec<GoalWithProjection>, CoreError> {
        let document = storage.load()?;
        Ok(document
            .goals
            .into_iter()
            .map(Self::with_projection)
            .collect())
    }
}

fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months)).unwrap_or(NaiveDate::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn goal(target: f64, monthly: f64, start: NaiveDate) -> Goal {
        Goal::new("Goal", target, monthly, start)
    }

    #[test]
    fn exact_division_adds_no_extra_month() {
        let projection = GoalService::compute_projection(&goal(10_000.0, 500.0, date(2025, 1, 1)));
        assert_eq!(projection.months_to_target, 20);
        assert_eq!(projection.target_date, date(2026, 9, 1));
    }

    #[test]
    fn partial_month_rounds_up() {
        let projection = GoalService::compute_projection(&goal(1_000.0, 300.0, date(2025, 6, 1)));
        assert_eq!(projection.months_to_target, 4);
        assert_eq!(projection.target_date, date(2025, 10, 1));
    }

    #[test]
    fn fraction_of_a_month_counts_as_one() {
        let projection = GoalService::compute_projection(&goal(50.0, 100.0, date(2025, 3, 15)));
        assert_eq!(projection.months_to_target, 1);
        assert_eq!(projection.target_date, date(2025, 4, 15));
    }

    #[test]
    fn longer_horizon_crosses_years() {
        let projection = GoalService::compute_projection(&goal(5_000.0, 200.0, date(2025, 6, 1)));
        assert_eq!(projection.months_to_target, 25);
        assert_eq!(projection.target_date, date(2027, 7, 1));
    }

    #[test]
    fn zero_contribution_stays_at_start() {
        let start = date(2025, 1, 1);
        let projection = GoalService::compute_projection(&goal(10_000.0, 0.0, start));
        assert_eq!(projection.months_to_target, 0);
        assert_eq!(projection.target_date, start);
    }

    #[test]
    fn negative_contribution_stays_at_start() {
        let start = date(2025, 3, 9);
        let projection = GoalService::compute_projection(&goal(10_000.0, -25.0, start));
        assert_eq!(projection.months_to_target, 0);
        assert_eq!(projection.target_date, start);
    }

    #[test]
    fn day_of_month_clamps_to_month_end() {
        let projection = GoalService::compute_projection(&goal(100.0, 100.0, date(2025, 1, 31)));
        assert_eq!(projection.months_to_target, 1);
        assert_eq!(projection.target_date, date(2025, 2, 28));

        let leap = GoalService::compute_projection(&goal(100.0, 100.0, date(2024, 1, 31)));
        assert_eq!(leap.target_date, date(2024, 2, 29));
    }

    #[test]
    fn create_trims_name_and_assigns_identifier() {
        let input = NewGoal::new("  Car  ", 20_000.0, 1_000.0, date(2025, 1, 1));
        let first = GoalService::create(input.clone()).expect("valid goal");
        let second = GoalService::create(input).expect("valid goal");
        assert_eq!(first.name, "Car");
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn create_rejects_blank_name() {
        let err = GoalService::create(NewGoal::new(" ", 5_000.0, 200.0, date(2025, 1, 1)))
            .expect_err("blank name");
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn create_rejects_non_positive_target() {
        for target in [0.0, -10.0, f64::NAN] {
            let err = GoalService::create(NewGoal::new("Trip", target, 200.0, date(2025, 1, 1)))
                .expect_err("invalid target");
            assert!(matches!(err, CoreError::Validation(_)));
        }
    }

    #[test]
    fn create_accepts_zero_and_negative_contribution() {
        for monthly in [0.0, -50.0] {
            let input = NewGoal::new("Someday", 10_000.0, monthly, date(2025, 1, 1));
            let goal = GoalService::create(input).expect("contribution may be non-positive");
            assert_eq!(goal.monthly_contribution, monthly);
        }
    }
}
