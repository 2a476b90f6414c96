//! End-to-end registry scenarios driven through the public surface only.

use dayplan_core::{Activity, MemorySink, PlanError, PlanRegistry, Priority};
use chrono::NaiveTime;

fn t(text: &str) -> NaiveTime {
    dayplan_core::parse_time(text).unwrap()
}

fn plan(name: &str, start: &str, end: &str) -> Activity {
    Activity::new(name, t(start), t(end), Priority::Medium)
}

/// The canonical day: touching endpoints accepted, overlap rejected against
/// the earliest-inserted conflict, failed edit fully rolled back, complete
/// idempotent.
#[test]
fn full_day_walkthrough() {
    let sink = MemorySink::new();
    let mut registry = PlanRegistry::new();
    registry.add_sink(Box::new(sink.clone()));

    registry.add(plan("A", "09:00", "10:00")).unwrap();
    registry.add(plan("B", "10:00", "11:00")).unwrap();

    let err = registry.add(plan("C", "09:30", "10:30")).unwrap_err();
    assert_eq!(
        err,
        PlanError::Overlap {
            conflicting: "A".to_string()
        }
    );

    let names: Vec<&str> = registry.list_all().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B"]);

    let before = registry.get("A").unwrap().clone();
    let err = registry
        .edit("A", "A", "10:30", "11:30", "medium")
        .unwrap_err();
    assert_eq!(
        err,
        PlanError::Overlap {
            conflicting: "B".to_string()
        }
    );
    assert_eq!(registry.get("A").unwrap(), &before);

    registry.complete("A").unwrap();
    registry.complete("A").unwrap();
    assert!(registry.get("A").unwrap().completed);

    assert_eq!(
        sink.messages(),
        vec![
            "Added: A",
            "Added: B",
            "Clash with: A",
            "Edit clashes with: B",
            "Marked completed.",
            "Marked completed.",
        ]
    );
}

#[test]
fn case_insensitive_identity_across_operations() {
    let mut registry = PlanRegistry::new();
    registry.add(plan("gym", "07:00", "08:00")).unwrap();

    registry.complete("GYM").unwrap();
    assert!(registry.get("Gym").unwrap().completed);

    registry
        .edit("gYm", "Gym Session", "07:00", "08:00", "high")
        .unwrap();
    assert!(registry.get("gym session").is_some());

    registry.remove("GYM SESSION").unwrap();
    assert!(registry.is_empty());
}

#[test]
fn edit_into_vacated_slot_succeeds() {
    let mut registry = PlanRegistry::new();
    registry.add(plan("A", "09:00", "10:00")).unwrap();
    registry.add(plan("B", "10:00", "11:00")).unwrap();
    registry.remove("B").unwrap();

    registry.edit("A", "A", "10:00", "11:00", "low").unwrap();
    assert_eq!(registry.get("A").unwrap().start, t("10:00"));
}

#[test]
fn completion_survives_an_edit() {
    let mut registry = PlanRegistry::new();
    registry.add(plan("A", "09:00", "10:00")).unwrap();
    registry.complete("A").unwrap();
    registry.edit("A", "A2", "09:00", "10:30", "high").unwrap();
    assert!(registry.get("A2").unwrap().completed);
}

#[test]
fn two_registries_are_isolated() {
    let mut one = PlanRegistry::new();
    let mut two = PlanRegistry::new();
    one.add(plan("A", "09:00", "10:00")).unwrap();
    two.add(plan("A", "09:00", "10:00")).unwrap();
    one.remove("A").unwrap();
    assert!(one.is_empty());
    assert_eq!(two.len(), 1);
}
