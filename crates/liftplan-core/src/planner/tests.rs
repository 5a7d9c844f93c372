//! Tests for the planner module.

use tempfile::TempDir;

use super::*;
use crate::error::PlannerError;
use crate::params::{
    AssignLifter, ByNumber, CompleteSet, CreateDay, CreateExercise, CreatePlan, CreateSet,
    CreateWeek, DeletePlan, Id, Reorder, UpdatePlan,
};

/// Helper function to create a test planner
async fn create_test_planner() -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

fn plan_params(name: &str) -> CreatePlan {
    CreatePlan {
        name: name.to_string(),
        description: None,
        total_weeks: 8,
        coach_id: 1,
        lifter_id: None,
        is_template: false,
    }
}

/// Creates a plan with one week and one day, returning their ids.
async fn seed_day(planner: &Planner) -> (u64, u64, u64) {
    let plan = planner
        .create_plan(&plan_params("Seeded Plan"))
        .await
        .expect("Failed to create plan");

    let week = planner
        .create_week(&CreateWeek {
            plan_id: plan.id,
            week_number: 1,
            notes: None,
        })
        .await
        .expect("Failed to create week");

    let day = planner
        .create_day(&CreateDay {
            week_id: week.id,
            day_number: 1,
            name: "Squat Day".to_string(),
            notes: None,
        })
        .await
        .expect("Failed to create day");

    (plan.id, week.id, day.id)
}

async fn add_exercise(planner: &Planner, day_id: u64, order: u32, name: &str) -> u64 {
    planner
        .create_exercise(&CreateExercise {
            day_id,
            exercise_order: order,
            name: name.to_string(),
            notes: None,
        })
        .await
        .expect("Failed to create exercise")
        .id
}

async fn add_set(planner: &Planner, exercise_id: u64, number: u32) -> u64 {
    planner
        .create_set(&CreateSet {
            exercise_id,
            set_number: number,
            target_reps: 5,
            target_weight: Some(100.0),
            target_rpe: Some(8.0),
        })
        .await
        .expect("Failed to create set")
        .id
}

fn completion(set_id: u64) -> CompleteSet {
    CompleteSet {
        id: set_id,
        actual_reps: 5,
        actual_weight: 100.0,
        actual_rpe: 8.0,
        lifter_notes: None,
    }
}

#[tokio::test]
async fn test_create_plan_rejects_bad_week_count() {
    let (_temp_dir, planner) = create_test_planner().await;

    let mut params = plan_params("Too Short");
    params.total_weeks = 1;
    let err = planner.create_plan(&params).await.unwrap_err();
    assert!(matches!(err, PlannerError::InvalidInput { .. }));

    let mut params = plan_params("Too Long");
    params.total_weeks = 17;
    let err = planner.create_plan(&params).await.unwrap_err();
    assert!(matches!(err, PlannerError::InvalidInput { .. }));
}

#[tokio::test]
async fn test_create_week_beyond_plan_length() {
    let (_temp_dir, planner) = create_test_planner().await;

    let plan = planner
        .create_plan(&plan_params("Eight Weeks"))
        .await
        .expect("Failed to create plan");

    let err = planner
        .create_week(&CreateWeek {
            plan_id: plan.id,
            week_number: 9,
            notes: None,
        })
        .await
        .unwrap_err();

    match err {
        PlannerError::InvalidStructure { operation, reason } => {
            assert_eq!(operation, "create week");
            assert!(reason.contains('9'));
            assert!(reason.contains('8'));
        }
        other => panic!("Expected InvalidStructure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_create_week_duplicate_number() {
    let (_temp_dir, planner) = create_test_planner().await;

    let plan = planner
        .create_plan(&plan_params("Duplicates"))
        .await
        .expect("Failed to create plan");

    let params = CreateWeek {
        plan_id: plan.id,
        week_number: 2,
        notes: None,
    };
    planner
        .create_week(&params)
        .await
        .expect("First week should be created");

    let err = planner.create_week(&params).await.unwrap_err();
    match err {
        PlannerError::DuplicateStructure {
            kind,
            ordinal,
            parent_id,
        } => {
            assert_eq!(kind, "Week");
            assert_eq!(ordinal, 2);
            assert_eq!(parent_id, plan.id);
        }
        other => panic!("Expected DuplicateStructure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_inactive_plan_blocks_structural_mutation() {
    let (_temp_dir, planner) = create_test_planner().await;
    let (plan_id, week_id, _day_id) = seed_day(&planner).await;

    planner
        .update_plan(&UpdatePlan {
            id: plan_id,
            is_active: Some(false),
            ..Default::default()
        })
        .await
        .expect("Failed to deactivate plan");

    let err = planner
        .create_day(&CreateDay {
            week_id,
            day_number: 2,
            name: "Bench Day".to_string(),
            notes: None,
        })
        .await
        .unwrap_err();

    match err {
        PlannerError::PlanInactive { id } => assert_eq!(id, plan_id),
        other => panic!("Expected PlanInactive, got {other:?}"),
    }

    // Nothing was persisted; the seeded day is still the only one.
    let days = planner
        .list_days(&Id { id: week_id })
        .await
        .expect("Reads bypass the guard");
    assert_eq!(days.len(), 1);
}

#[tokio::test]
async fn test_reactivating_plan_unblocks_mutation() {
    let (_temp_dir, planner) = create_test_planner().await;
    let (plan_id, week_id, _day_id) = seed_day(&planner).await;

    planner
        .update_plan(&UpdatePlan {
            id: plan_id,
            is_active: Some(false),
            ..Default::default()
        })
        .await
        .expect("Failed to deactivate plan");

    planner
        .update_plan(&UpdatePlan {
            id: plan_id,
            is_active: Some(true),
            ..Default::default()
        })
        .await
        .expect("Plan update is not gated on the active flag");

    planner
        .create_day(&CreateDay {
            week_id,
            day_number: 2,
            name: "Bench Day".to_string(),
            notes: None,
        })
        .await
        .expect("Mutation should succeed after reactivation");
}

#[tokio::test]
async fn test_reorder_exercise_first_to_last() {
    let (_temp_dir, planner) = create_test_planner().await;
    let (_plan_id, _week_id, day_id) = seed_day(&planner).await;

    let first = add_exercise(&planner, day_id, 1, "Squat").await;
    let second = add_exercise(&planner, day_id, 2, "Bench").await;
    let third = add_exercise(&planner, day_id, 3, "Deadlift").await;

    let moved = planner
        .reorder_exercise(&Reorder {
            id: first,
            new_ordinal: 3,
        })
        .await
        .expect("Failed to reorder exercise");
    assert_eq!(moved.exercise_order, 3);

    let exercises = planner
        .list_exercises(&Id { id: day_id })
        .await
        .expect("Failed to list exercises");

    let order: Vec<(u64, u32)> = exercises.iter().map(|e| (e.id, e.exercise_order)).collect();
    assert_eq!(order, vec![(second, 1), (third, 2), (first, 3)]);
}

#[tokio::test]
async fn test_reorder_set_last_to_first() {
    let (_temp_dir, planner) = create_test_planner().await;
    let (_plan_id, _week_id, day_id) = seed_day(&planner).await;
    let exercise_id = add_exercise(&planner, day_id, 1, "Squat").await;

    let s1 = add_set(&planner, exercise_id, 1).await;
    let s2 = add_set(&planner, exercise_id, 2).await;
    let s3 = add_set(&planner, exercise_id, 3).await;
    let s4 = add_set(&planner, exercise_id, 4).await;

    planner
        .reorder_set(&Reorder {
            id: s4,
            new_ordinal: 1,
        })
        .await
        .expect("Failed to reorder set");

    let sets = planner
        .list_sets(&Id { id: exercise_id })
        .await
        .expect("Failed to list sets");

    let order: Vec<(u64, u32)> = sets.iter().map(|s| (s.id, s.set_number)).collect();
    assert_eq!(order, vec![(s4, 1), (s1, 2), (s2, 3), (s3, 4)]);
}

#[tokio::test]
async fn test_reorder_noop_changes_nothing() {
    let (_temp_dir, planner) = create_test_planner().await;
    let (_plan_id, _week_id, day_id) = seed_day(&planner).await;
    let exercise_id = add_exercise(&planner, day_id, 1, "Squat").await;

    add_set(&planner, exercise_id, 1).await;
    let s2 = add_set(&planner, exercise_id, 2).await;
    add_set(&planner, exercise_id, 3).await;

    planner
        .reorder_set(&Reorder {
            id: s2,
            new_ordinal: 2,
        })
        .await
        .expect("No-op reorder should succeed");

    let sets = planner
        .list_sets(&Id { id: exercise_id })
        .await
        .expect("Failed to list sets");
    let numbers: Vec<u32> = sets.iter().map(|s| s.set_number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_reorder_rejects_out_of_range_target() {
    let (_temp_dir, planner) = create_test_planner().await;
    let (_plan_id, _week_id, day_id) = seed_day(&planner).await;
    let exercise_id = add_exercise(&planner, day_id, 1, "Squat").await;
    let set_id = add_set(&planner, exercise_id, 1).await;
    add_set(&planner, exercise_id, 2).await;

    for bad_target in [0u32, 3] {
        let err = planner
            .reorder_set(&Reorder {
                id: set_id,
                new_ordinal: bad_target,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, PlannerError::InvalidStructure { .. }));
    }
}

#[tokio::test]
async fn test_exercise_completion_rollup() {
    let (_temp_dir, planner) = create_test_planner().await;
    let (_plan_id, _week_id, day_id) = seed_day(&planner).await;
    let exercise_id = add_exercise(&planner, day_id, 1, "Squat").await;

    let s1 = add_set(&planner, exercise_id, 1).await;
    let s2 = add_set(&planner, exercise_id, 2).await;

    planner
        .complete_set(&completion(s1))
        .await
        .expect("Failed to complete set");

    assert!(
        !planner
            .exercise_completed(&Id { id: exercise_id })
            .await
            .unwrap(),
        "one of two sets completed is not a complete exercise"
    );

    planner
        .complete_set(&completion(s2))
        .await
        .expect("Failed to complete set");

    assert!(planner
        .exercise_completed(&Id { id: exercise_id })
        .await
        .unwrap());
}

#[tokio::test]
async fn test_empty_containers_are_incomplete() {
    let (_temp_dir, planner) = create_test_planner().await;
    let (_plan_id, _week_id, day_id) = seed_day(&planner).await;

    // Day with no exercises
    assert!(!planner.day_completed(&Id { id: day_id }).await.unwrap());

    // Exercise with no sets
    let exercise_id = add_exercise(&planner, day_id, 1, "Squat").await;
    assert!(!planner
        .exercise_completed(&Id { id: exercise_id })
        .await
        .unwrap());
}

#[tokio::test]
async fn test_complete_and_uncomplete_move_all_fields_together() {
    let (_temp_dir, planner) = create_test_planner().await;
    let (_plan_id, _week_id, day_id) = seed_day(&planner).await;
    let exercise_id = add_exercise(&planner, day_id, 1, "Squat").await;
    let set_id = add_set(&planner, exercise_id, 1).await;

    let completed = planner
        .complete_set(&CompleteSet {
            id: set_id,
            actual_reps: 4,
            actual_weight: 97.5,
            actual_rpe: 9.0,
            lifter_notes: Some("ground to a halt on the last rep".to_string()),
        })
        .await
        .expect("Failed to complete set");

    assert!(completed.is_completed);
    assert!(completed.actual_data_complete());
    assert_eq!(completed.actual_reps, Some(4));
    assert_eq!(completed.actual_weight, Some(97.5));
    assert_eq!(completed.actual_rpe, Some(9.0));

    let cleared = planner
        .uncomplete_set(&Id { id: set_id })
        .await
        .expect("Failed to uncomplete set");

    assert!(!cleared.is_completed);
    assert!(!cleared.actual_data_complete());
    assert_eq!(cleared.actual_reps, None);
    assert_eq!(cleared.actual_weight, None);
    assert_eq!(cleared.actual_rpe, None);
    assert_eq!(cleared.lifter_notes, None);
}

#[tokio::test]
async fn test_complete_set_rejects_out_of_range_rpe() {
    let (_temp_dir, planner) = create_test_planner().await;
    let (_plan_id, _week_id, day_id) = seed_day(&planner).await;
    let exercise_id = add_exercise(&planner, day_id, 1, "Squat").await;
    let set_id = add_set(&planner, exercise_id, 1).await;

    let err = planner
        .complete_set(&CompleteSet {
            id: set_id,
            actual_reps: 5,
            actual_weight: 100.0,
            actual_rpe: 11.0,
            lifter_notes: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, PlannerError::InvalidInput { .. }));
}

#[tokio::test]
async fn test_plan_stats_percentage() {
    let (_temp_dir, planner) = create_test_planner().await;
    let (plan_id, _week_id, day_id) = seed_day(&planner).await;
    let exercise_id = add_exercise(&planner, day_id, 1, "Squat").await;

    // Empty plan reports 0.0 rather than dividing by zero.
    let empty_stats = planner.plan_stats(&Id { id: plan_id }).await.unwrap();
    assert_eq!(empty_stats.total_sets, 0);
    assert_eq!(empty_stats.completion_percentage, 0.0);

    let mut set_ids = Vec::new();
    for number in 1..=4 {
        set_ids.push(add_set(&planner, exercise_id, number).await);
    }

    planner.complete_set(&completion(set_ids[0])).await.unwrap();

    let stats = planner.plan_stats(&Id { id: plan_id }).await.unwrap();
    assert_eq!(stats.total_weeks, 8);
    assert_eq!(stats.total_days, 1);
    assert_eq!(stats.total_exercises, 1);
    assert_eq!(stats.total_sets, 4);
    assert_eq!(stats.completed_sets, 1);
    assert_eq!(stats.completion_percentage, 25.0);
}

#[tokio::test]
async fn test_one_active_plan_per_lifter() {
    let (_temp_dir, planner) = create_test_planner().await;

    let mut params = plan_params("First Block");
    params.lifter_id = Some(42);
    let first = planner
        .create_plan(&params)
        .await
        .expect("Failed to create plan");

    // The same lifter cannot receive a second active plan.
    let mut params = plan_params("Second Block");
    params.lifter_id = Some(42);
    let err = planner.create_plan(&params).await.unwrap_err();
    match err {
        PlannerError::LifterAlreadyAssigned { lifter_id } => assert_eq!(lifter_id, 42),
        other => panic!("Expected LifterAlreadyAssigned, got {other:?}"),
    }

    // A plan that already has a lifter rejects another assignment.
    let err = planner
        .assign_lifter(&AssignLifter {
            plan_id: first.id,
            lifter_id: 43,
        })
        .await
        .unwrap_err();
    match err {
        PlannerError::PlanAlreadyAssigned { plan_id, lifter_id } => {
            assert_eq!(plan_id, first.id);
            assert_eq!(lifter_id, 42);
        }
        other => panic!("Expected PlanAlreadyAssigned, got {other:?}"),
    }

    // Unassigning frees the lifter for a new plan.
    planner
        .unassign_lifter(&Id { id: first.id })
        .await
        .expect("Failed to unassign lifter");

    let err = planner
        .unassign_lifter(&Id { id: first.id })
        .await
        .unwrap_err();
    assert!(matches!(err, PlannerError::InvalidStructure { .. }));

    let mut params = plan_params("Third Block");
    params.lifter_id = Some(42);
    planner
        .create_plan(&params)
        .await
        .expect("Lifter is free again after unassignment");
}

#[tokio::test]
async fn test_delete_plan_requires_confirmation() {
    let (_temp_dir, planner) = create_test_planner().await;
    let (plan_id, _week_id, _day_id) = seed_day(&planner).await;

    let err = planner
        .delete_plan(&DeletePlan {
            id: plan_id,
            confirmed: false,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, PlannerError::InvalidInput { .. }));

    planner
        .delete_plan(&DeletePlan {
            id: plan_id,
            confirmed: true,
        })
        .await
        .expect("Failed to delete plan");

    let result = planner.get_plan(&Id { id: plan_id }).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_next_ordinals() {
    let (_temp_dir, planner) = create_test_planner().await;
    let (plan_id, week_id, day_id) = seed_day(&planner).await;

    // seed_day created week 1 and day 1.
    assert_eq!(
        planner.next_week_number(&Id { id: plan_id }).await.unwrap(),
        2
    );
    assert_eq!(
        planner.next_day_number(&Id { id: week_id }).await.unwrap(),
        2
    );
    assert_eq!(
        planner
            .next_exercise_order(&Id { id: day_id })
            .await
            .unwrap(),
        1
    );

    let exercise_id = add_exercise(&planner, day_id, 1, "Squat").await;
    add_set(&planner, exercise_id, 1).await;
    let s2 = add_set(&planner, exercise_id, 2).await;
    add_set(&planner, exercise_id, 3).await;

    // Deleting a mid-sequence set leaves a gap; the suggestion stays max+1.
    planner
        .delete_set(&Id { id: s2 })
        .await
        .expect("Failed to delete set");
    assert_eq!(
        planner
            .next_set_number(&Id { id: exercise_id })
            .await
            .unwrap(),
        4
    );

    let numbers: Vec<u32> = planner
        .list_sets(&Id { id: exercise_id })
        .await
        .unwrap()
        .iter()
        .map(|s| s.set_number)
        .collect();
    assert_eq!(numbers, vec![1, 3], "deletion does not re-densify");
}

#[tokio::test]
async fn test_get_week_by_number() {
    let (_temp_dir, planner) = create_test_planner().await;
    let (plan_id, week_id, _day_id) = seed_day(&planner).await;

    let week = planner
        .get_week_by_number(&ByNumber {
            parent_id: plan_id,
            number: 1,
        })
        .await
        .unwrap()
        .expect("Week 1 exists");
    assert_eq!(week.id, week_id);

    let missing = planner
        .get_week_by_number(&ByNumber {
            parent_id: plan_id,
            number: 5,
        })
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_list_plans_by_coach_and_lifter() {
    let (_temp_dir, planner) = create_test_planner().await;

    let mut params = plan_params("Coached Block");
    params.lifter_id = Some(7);
    planner.create_plan(&params).await.unwrap();

    let mut params = plan_params("Other Coach");
    params.coach_id = 2;
    planner.create_plan(&params).await.unwrap();

    let by_coach = planner.list_plans_by_coach(1).await.unwrap();
    assert_eq!(by_coach.len(), 1);
    assert_eq!(by_coach[0].name, "Coached Block");

    let by_lifter = planner.list_plans_by_lifter(7).await.unwrap();
    assert_eq!(by_lifter.len(), 1);

    let none = planner.list_plans_by_lifter(8).await.unwrap();
    assert!(none.is_empty());
}
