//! Integration tests for the database layer: ordinal invariants, the
//! structural mutation guard, completion, and cascade deletion.

use liftplan_core::models::requests::{UpdatePlanRequest, UpdateSetRequest, UpdateWeekRequest};
use liftplan_core::params::{CompleteSet, CreateDay, CreateExercise, CreatePlan, CreateSet, CreateWeek};
use liftplan_core::{Database, PlannerError};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn seed_plan(db: &mut Database) -> u64 {
    db.create_plan(&CreatePlan {
        name: "Test Block".to_string(),
        description: Some("A test block".to_string()),
        total_weeks: 8,
        coach_id: 1,
        lifter_id: None,
        is_template: false,
    })
    .expect("Failed to create plan")
    .id
}

fn seed_exercise(db: &mut Database) -> (u64, u64, u64, u64) {
    let plan_id = seed_plan(db);
    let week_id = db
        .create_week(&CreateWeek {
            plan_id,
            week_number: 1,
            notes: None,
        })
        .expect("Failed to create week")
        .id;
    let day_id = db
        .create_day(&CreateDay {
            week_id,
            day_number: 1,
            name: "Lower".to_string(),
            notes: None,
        })
        .expect("Failed to create day")
        .id;
    let exercise_id = db
        .create_exercise(&CreateExercise {
            day_id,
            exercise_order: 1,
            name: "Squat".to_string(),
            notes: None,
        })
        .expect("Failed to create exercise")
        .id;
    (plan_id, week_id, day_id, exercise_id)
}

fn add_set(db: &mut Database, exercise_id: u64, number: u32) -> u64 {
    db.create_set(&CreateSet {
        exercise_id,
        set_number: number,
        target_reps: 5,
        target_weight: Some(140.0),
        target_rpe: Some(8.0),
    })
    .expect("Failed to create set")
    .id
}

fn deactivate(db: &mut Database, plan_id: u64) {
    db.update_plan(
        plan_id,
        UpdatePlanRequest {
            is_active: Some(false),
            ..Default::default()
        },
    )
    .expect("Failed to deactivate plan");
}

#[test]
fn test_database_initialization() {
    let (temp_file, _db) = create_test_db();
    assert!(temp_file.path().exists());
}

#[test]
fn test_create_and_get_plan_tree() {
    let (_temp_file, mut db) = create_test_db();
    let (plan_id, week_id, day_id, exercise_id) = seed_exercise(&mut db);
    add_set(&mut db, exercise_id, 1);

    let plan = db
        .get_plan(plan_id)
        .expect("Failed to get plan")
        .expect("Plan should exist");

    assert_eq!(plan.name, "Test Block");
    assert!(plan.is_active);
    assert_eq!(plan.weeks.len(), 1);
    assert_eq!(plan.weeks[0].id, week_id);
    assert_eq!(plan.weeks[0].days.len(), 1);
    assert_eq!(plan.weeks[0].days[0].id, day_id);
    assert_eq!(plan.weeks[0].days[0].exercises[0].sets.len(), 1);
}

#[test]
fn test_duplicate_ordinals_rejected_per_level() {
    let (_temp_file, mut db) = create_test_db();
    let (plan_id, week_id, day_id, exercise_id) = seed_exercise(&mut db);
    add_set(&mut db, exercise_id, 1);

    let err = db
        .create_week(&CreateWeek {
            plan_id,
            week_number: 1,
            notes: None,
        })
        .unwrap_err();
    assert!(matches!(
        err,
        PlannerError::DuplicateStructure { kind: "Week", .. }
    ));

    let err = db
        .create_day(&CreateDay {
            week_id,
            day_number: 1,
            name: "Again".to_string(),
            notes: None,
        })
        .unwrap_err();
    assert!(matches!(
        err,
        PlannerError::DuplicateStructure { kind: "Day", .. }
    ));

    let err = db
        .create_exercise(&CreateExercise {
            day_id,
            exercise_order: 1,
            name: "Again".to_string(),
            notes: None,
        })
        .unwrap_err();
    assert!(matches!(
        err,
        PlannerError::DuplicateStructure {
            kind: "Exercise",
            ..
        }
    ));

    let err = db
        .create_set(&CreateSet {
            exercise_id,
            set_number: 1,
            target_reps: 5,
            target_weight: None,
            target_rpe: None,
        })
        .unwrap_err();
    assert!(matches!(
        err,
        PlannerError::DuplicateStructure { kind: "Set", .. }
    ));
}

#[test]
fn test_bare_update_overwrites_without_shifting() {
    let (_temp_file, mut db) = create_test_db();
    let (_plan_id, _week_id, _day_id, exercise_id) = seed_exercise(&mut db);

    let s1 = add_set(&mut db, exercise_id, 1);
    add_set(&mut db, exercise_id, 2);
    add_set(&mut db, exercise_id, 3);

    // Moving set 1 to the taken number 2 is a clash.
    let err = db
        .update_set(
            s1,
            UpdateSetRequest {
                set_number: Some(2),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, PlannerError::DuplicateStructure { .. }));

    // Moving it to a free number rewrites in place and leaves a gap at 1.
    db.update_set(
        s1,
        UpdateSetRequest {
            set_number: Some(5),
            ..Default::default()
        },
    )
    .expect("Failed to update set");

    let numbers: Vec<u32> = db
        .sets_for_exercise(exercise_id)
        .expect("Failed to list sets")
        .iter()
        .map(|s| s.set_number)
        .collect();
    assert_eq!(numbers, vec![2, 3, 5], "siblings are not shifted");
}

#[test]
fn test_delete_gap_then_reorder_uses_fresh_count() {
    let (_temp_file, mut db) = create_test_db();
    let (_plan_id, _week_id, _day_id, exercise_id) = seed_exercise(&mut db);

    let s1 = add_set(&mut db, exercise_id, 1);
    let s2 = add_set(&mut db, exercise_id, 2);
    let s3 = add_set(&mut db, exercise_id, 3);

    db.delete_set(s2).expect("Failed to delete set");

    // Two siblings remain; position 3 is out of range even though ordinal 3
    // is currently occupied.
    let err = db.reorder_set(s3, 3).unwrap_err();
    assert!(matches!(err, PlannerError::InvalidStructure { .. }));

    // Reordering within range packs the touched ordinals densely again.
    db.reorder_set(s3, 1).expect("Failed to reorder set");
    let order: Vec<(u64, u32)> = db
        .sets_for_exercise(exercise_id)
        .expect("Failed to list sets")
        .iter()
        .map(|s| (s.id, s.set_number))
        .collect();
    assert_eq!(order, vec![(s3, 1), (s1, 2)]);
}

#[test]
fn test_guard_blocks_all_mutations_under_inactive_plan() {
    let (_temp_file, mut db) = create_test_db();
    let (plan_id, week_id, _day_id, exercise_id) = seed_exercise(&mut db);
    let set_id = add_set(&mut db, exercise_id, 1);

    deactivate(&mut db, plan_id);

    let err = db
        .create_set(&CreateSet {
            exercise_id,
            set_number: 2,
            target_reps: 5,
            target_weight: None,
            target_rpe: None,
        })
        .unwrap_err();
    assert!(matches!(err, PlannerError::PlanInactive { id } if id == plan_id));

    let err = db
        .update_week(
            week_id,
            UpdateWeekRequest {
                notes: Some("changed".to_string()),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, PlannerError::PlanInactive { .. }));

    let err = db.reorder_set(set_id, 1).unwrap_err();
    assert!(matches!(err, PlannerError::PlanInactive { .. }));

    let err = db
        .complete_set(&CompleteSet {
            id: set_id,
            actual_reps: 5,
            actual_weight: 140.0,
            actual_rpe: 8.0,
            lifter_notes: None,
        })
        .unwrap_err();
    assert!(matches!(err, PlannerError::PlanInactive { .. }));

    let err = db.delete_set(set_id).unwrap_err();
    assert!(matches!(err, PlannerError::PlanInactive { .. }));

    // Reads still work.
    let sets = db.sets_for_exercise(exercise_id).expect("Reads are not guarded");
    assert_eq!(sets.len(), 1);
    assert!(!sets[0].is_completed);
}

#[test]
fn test_cascade_delete_week() {
    let (_temp_file, mut db) = create_test_db();
    let (plan_id, week_id, day_id, exercise_id) = seed_exercise(&mut db);
    add_set(&mut db, exercise_id, 1);

    db.delete_week(week_id).expect("Failed to delete week");

    assert!(db.get_week(week_id).unwrap().is_none());
    assert!(db.get_day(day_id).unwrap().is_none());
    assert!(db.get_exercise(exercise_id).unwrap().is_none());

    let stats = db.plan_stats(plan_id).expect("Failed to get stats");
    assert_eq!(stats.total_days, 0);
    assert_eq!(stats.total_sets, 0);
}

#[test]
fn test_not_found_errors_carry_entity_kind() {
    let (_temp_file, mut db) = create_test_db();

    assert!(matches!(
        db.plan_stats(999).unwrap_err(),
        PlannerError::PlanNotFound { id: 999 }
    ));
    assert!(matches!(
        db.delete_week(999).unwrap_err(),
        PlannerError::WeekNotFound { id: 999 }
    ));
    assert!(matches!(
        db.delete_day(999).unwrap_err(),
        PlannerError::DayNotFound { id: 999 }
    ));
    assert!(matches!(
        db.reorder_exercise(999, 1).unwrap_err(),
        PlannerError::ExerciseNotFound { id: 999 }
    ));
    assert!(matches!(
        db.uncomplete_set(999).unwrap_err(),
        PlannerError::SetNotFound { id: 999 }
    ));
}

#[test]
fn test_completed_set_count() {
    let (_temp_file, mut db) = create_test_db();
    let (_plan_id, _week_id, _day_id, exercise_id) = seed_exercise(&mut db);

    let s1 = add_set(&mut db, exercise_id, 1);
    add_set(&mut db, exercise_id, 2);

    assert_eq!(db.completed_set_count(exercise_id).unwrap(), 0);

    db.complete_set(&CompleteSet {
        id: s1,
        actual_reps: 5,
        actual_weight: 140.0,
        actual_rpe: 8.5,
        lifter_notes: Some("solid".to_string()),
    })
    .expect("Failed to complete set");

    assert_eq!(db.completed_set_count(exercise_id).unwrap(), 1);

    db.uncomplete_set(s1).expect("Failed to uncomplete set");
    assert_eq!(db.completed_set_count(exercise_id).unwrap(), 0);
}

#[test]
fn test_list_plans_summaries_include_progress() {
    let (_temp_file, mut db) = create_test_db();
    let (_plan_id, _week_id, _day_id, exercise_id) = seed_exercise(&mut db);
    let s1 = add_set(&mut db, exercise_id, 1);
    add_set(&mut db, exercise_id, 2);

    db.complete_set(&CompleteSet {
        id: s1,
        actual_reps: 5,
        actual_weight: 140.0,
        actual_rpe: 8.0,
        lifter_notes: None,
    })
    .expect("Failed to complete set");

    let summaries = db.list_plans_by_coach(1).expect("Failed to list plans");
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].total_sets, 2);
    assert_eq!(summaries[0].completed_sets, 1);
}
