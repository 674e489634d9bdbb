mod common;

use chrono::NaiveDate;
use compound::{CoreError, NewGoal};
use common::setup_tracker;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn empty_store_has_no_goals() {
    let (tracker, _guard) = setup_tracker();

    assert!(tracker.list_goals().expect("list goals").is_empty());
}

#[test]
fn listed_goals_carry_projection() {
    let (tracker, _guard) = setup_tracker();
    tracker
        .create_goal(NewGoal::new("Emergency Fund", 10_000.0, 500.0, date(2025, 1, 1)))
        .expect("create goal");

    let goals = tracker.list_goals().expect("list goals");

    assert_eq!(goals.len(), 1);
    assert_eq!(goals[0].goal.name, "Emergency Fund");
    assert_eq!(goals[0].projection.months_to_target, 20);
    assert_eq!(goals[0].projection.target_date, date(2026, 9, 1));
}

#[test]
fn created_goal_is_returned_with_projection() {
    let (tracker, _guard) = setup_tracker();

    let created = tracker
        .create_goal(NewGoal::new("Vacation", 5_000.0, 200.0, date(2025, 6, 1)))
        .expect("create goal");

    let value = serde_json::to_value(&created).expect("serialize");
    let id = value["id"].as_str().expect("id string");
    assert!(uuid::Uuid::parse_str(id).is_ok());
    assert_eq!(value["name"], "Vacation");
    assert_eq!(value["projection"]["months_to_target"], 25);
    assert_eq!(value["projection"]["target_date"], "2027-07-01");
}

#[test]
fn created_goal_is_persisted_without_projection() {
    let (tracker, _guard) = setup_tracker();
    tracker
        .create_goal(NewGoal::new("Car", 20_000.0, 1_000.0, date(2025, 1, 1)))
        .expect("create goal");

    let path = tracker.storage().location().expect("file-backed").to_path_buf();
    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(path).expect("read")).expect("json");
    let goals = raw["goals"].as_array().expect("goals array");
    assert_eq!(goals.len(), 1);
    assert_eq!(goals[0]["name"], "Car");
    assert!(goals[0].get("projection").is_none());
}

#[test]
fn zero_contribution_is_accepted_and_projects_nothing() {
    let (tracker, _guard) = setup_tracker();

    let created = tracker
        .create_goal(NewGoal::new("Someday", 10_000.0, 0.0, date(2025, 1, 1)))
        .expect("create goal");

    assert_eq!(created.projection.months_to_target, 0);
    assert_eq!(created.projection.target_date, date(2025, 1, 1));
}

#[test]
fn missing_name_is_rejected() {
    let (tracker, _guard) = setup_tracker();

    let err = tracker
        .create_goal(NewGoal::new("", 5_000.0, 200.0, date(2025, 1, 1)))
        .expect_err("missing name");

    assert!(matches!(err, CoreError::Validation(_)));
    assert!(tracker.list_goals().expect("list goals").is_empty());
}
