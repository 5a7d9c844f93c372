//! End-to-end tests driving the `lp` binary against a temporary database.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Builds an `lp` invocation against the test database.
fn lp(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("lp").expect("binary exists");
    cmd.arg("--database-file")
        .arg(temp_dir.path().join("test.db"))
        .arg("--no-color");
    cmd
}

/// Creates a plan and returns nothing; row ids in a fresh database are
/// sequential starting at 1.
fn create_plan(temp_dir: &TempDir) {
    lp(temp_dir)
        .args(["plan", "create", "Strength Block", "--weeks", "8", "--coach", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created plan with ID: 1"));
}

/// Seeds plan 1 → week 1 → day 1 → exercise 1.
fn seed_hierarchy(temp_dir: &TempDir) {
    create_plan(temp_dir);
    lp(temp_dir)
        .args(["week", "add", "1", "1"])
        .assert()
        .success();
    lp(temp_dir)
        .args(["day", "add", "1", "1", "Lower Body"])
        .assert()
        .success();
    lp(temp_dir)
        .args(["exercise", "add", "1", "1", "Back Squat"])
        .assert()
        .success();
}

#[test]
fn test_create_and_show_plan() {
    let temp_dir = TempDir::new().unwrap();
    create_plan(&temp_dir);

    lp(&temp_dir)
        .args(["plan", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Strength Block"))
        .stdout(predicate::str::contains("Length: 8 weeks"))
        .stdout(predicate::str::contains("No weeks in this plan."));
}

#[test]
fn test_list_plans_by_coach() {
    let temp_dir = TempDir::new().unwrap();
    create_plan(&temp_dir);

    lp(&temp_dir)
        .args(["plan", "list", "--coach", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Strength Block"));

    lp(&temp_dir)
        .args(["plan", "list", "--coach", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No plans found."));
}

#[test]
fn test_list_plans_requires_coach_or_lifter() {
    let temp_dir = TempDir::new().unwrap();
    create_plan(&temp_dir);

    lp(&temp_dir)
        .args(["plan", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--coach"));
}

#[test]
fn test_week_beyond_plan_length_fails() {
    let temp_dir = TempDir::new().unwrap();
    create_plan(&temp_dir);

    lp(&temp_dir)
        .args(["week", "add", "1", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds plan total weeks 8"));
}

#[test]
fn test_duplicate_week_number_fails() {
    let temp_dir = TempDir::new().unwrap();
    create_plan(&temp_dir);

    lp(&temp_dir)
        .args(["week", "add", "1", "1"])
        .assert()
        .success();

    lp(&temp_dir)
        .args(["week", "add", "1", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_complete_set_and_stats() {
    let temp_dir = TempDir::new().unwrap();
    seed_hierarchy(&temp_dir);

    for number in ["1", "2"] {
        lp(&temp_dir)
            .args(["set", "add", "1", number, "5", "--weight", "140", "--rpe", "8"])
            .assert()
            .success();
    }

    lp(&temp_dir)
        .args(["set", "complete", "1", "5", "140", "8.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Set 1"));

    lp(&temp_dir)
        .args(["plan", "stats", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sets: 1/2 completed"))
        .stdout(predicate::str::contains("Completion: 50.0%"));

    lp(&temp_dir)
        .args(["set", "uncomplete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("○ Set 1"));

    lp(&temp_dir)
        .args(["plan", "stats", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completion: 0.0%"));
}

#[test]
fn test_reorder_exercise_from_cli() {
    let temp_dir = TempDir::new().unwrap();
    seed_hierarchy(&temp_dir);

    lp(&temp_dir)
        .args(["exercise", "add", "1", "2", "Romanian Deadlift"])
        .assert()
        .success();
    lp(&temp_dir)
        .args(["exercise", "add", "1", "3", "Leg Press"])
        .assert()
        .success();

    // Move the first exercise to the end; the others shift up.
    lp(&temp_dir)
        .args(["exercise", "reorder", "1", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moved to position 3"));

    lp(&temp_dir)
        .args(["exercise", "list", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#### 1. Romanian Deadlift"))
        .stdout(predicate::str::contains("#### 2. Leg Press"))
        .stdout(predicate::str::contains("#### 3. Back Squat"));
}

#[test]
fn test_inactive_plan_blocks_mutation_from_cli() {
    let temp_dir = TempDir::new().unwrap();
    seed_hierarchy(&temp_dir);

    lp(&temp_dir)
        .args(["plan", "update", "1", "--active", "false"])
        .assert()
        .success();

    lp(&temp_dir)
        .args(["day", "add", "1", "2", "Upper Body"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not active"));

    // Reads still work while inactive.
    lp(&temp_dir)
        .args(["day", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lower Body"));
}

#[test]
fn test_plan_delete_requires_confirm() {
    let temp_dir = TempDir::new().unwrap();
    create_plan(&temp_dir);

    lp(&temp_dir)
        .args(["plan", "delete", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("confirmation"));

    lp(&temp_dir)
        .args(["plan", "delete", "1", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted plan 'Strength Block'"));

    lp(&temp_dir)
        .args(["plan", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plan 1 not found"));
}

#[test]
fn test_next_ordinal_commands() {
    let temp_dir = TempDir::new().unwrap();
    seed_hierarchy(&temp_dir);

    lp(&temp_dir)
        .args(["week", "next", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Next week number for plan 1: 2"));

    lp(&temp_dir)
        .args(["set", "next", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Next set number for exercise 1: 1"));
}

#[test]
fn test_assign_and_unassign_lifter() {
    let temp_dir = TempDir::new().unwrap();
    create_plan(&temp_dir);

    lp(&temp_dir)
        .args(["plan", "assign", "1", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Assigned lifter 42 to plan 1"));

    lp(&temp_dir)
        .args(["plan", "assign", "1", "43"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already assigned"));

    lp(&temp_dir)
        .args(["plan", "unassign", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unassigned lifter from plan 1"));
}
