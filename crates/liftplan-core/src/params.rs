//! Parameter structures for planner operations.
//!
//! These are interface-agnostic parameter structs shared by the CLI and any
//! future host surface. They carry serde derives but no framework-specific
//! attributes; interface layers define their own wrappers (e.g. clap arg
//! structs) and convert into these types.
//!
//! Create-parameters expose a `validate()` method covering the field ranges
//! the data model demands (week counts, day numbers, RPE bounds). Structural
//! validation that needs database state (duplicate ordinals, plan-active
//! checks, sibling counts) happens in the persistence layer inside the
//! mutation transaction.

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::models::requests::{validate_day_number, validate_rpe, validate_weight};

/// Bounds on a plan's length, in weeks.
pub const MIN_PLAN_WEEKS: u32 = 2;
pub const MAX_PLAN_WEEKS: u32 = 16;

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for creating a new workout plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlan {
    /// Name of the plan
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Planned length in weeks (2–16)
    pub total_weeks: u32,
    /// Owning coach
    pub coach_id: u64,
    /// Optional lifter to assign immediately, subject to the
    /// one-active-plan-per-lifter rule
    pub lifter_id: Option<u64>,
    /// Whether the plan is a reusable template
    pub is_template: bool,
}

impl CreatePlan {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(PlannerError::invalid_input(
                "name",
                "Plan name is required",
            ));
        }
        if !(MIN_PLAN_WEEKS..=MAX_PLAN_WEEKS).contains(&self.total_weeks) {
            return Err(PlannerError::invalid_input(
                "total_weeks",
                format!(
                    "Plan length {} must be between {MIN_PLAN_WEEKS} and {MAX_PLAN_WEEKS} weeks",
                    self.total_weeks
                ),
            ));
        }
        Ok(())
    }
}

/// Parameters for a partial plan update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePlan {
    pub id: u64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    pub is_template: Option<bool>,
    /// Assign this lifter (one-active-plan rule applies, the plan itself
    /// excluded). Unassignment goes through the dedicated operation.
    pub lifter_id: Option<u64>,
}

/// Parameters for assigning a lifter to an existing plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AssignLifter {
    pub plan_id: u64,
    pub lifter_id: u64,
}

/// Parameters for permanently deleting a plan and everything under it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DeletePlan {
    pub id: u64,
    /// Explicit confirmation required by destructive interfaces
    pub confirmed: bool,
}

/// Parameters for creating a week inside a plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWeek {
    pub plan_id: u64,
    /// Position within the plan; must not clash with an existing week and
    /// must not exceed the plan's total week count
    pub week_number: u32,
    pub notes: Option<String>,
}

impl CreateWeek {
    pub fn validate(&self) -> Result<()> {
        if self.week_number == 0 {
            return Err(PlannerError::invalid_input(
                "week_number",
                "Week number must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Parameters for a partial week update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateWeek {
    pub id: u64,
    pub week_number: Option<u32>,
    pub notes: Option<String>,
}

/// Parameters for creating a day inside a week.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDay {
    pub week_id: u64,
    /// Position within the week (1–7)
    pub day_number: u32,
    pub name: String,
    pub notes: Option<String>,
}

impl CreateDay {
    pub fn validate(&self) -> Result<()> {
        validate_day_number(self.day_number)?;
        if self.name.trim().is_empty() {
            return Err(PlannerError::invalid_input("name", "Day name is required"));
        }
        Ok(())
    }
}

/// Parameters for a partial day update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDay {
    pub id: u64,
    pub day_number: Option<u32>,
    pub name: Option<String>,
    pub notes: Option<String>,
}

/// Parameters for creating an exercise inside a day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateExercise {
    pub day_id: u64,
    /// Position within the day (1-based)
    pub exercise_order: u32,
    pub name: String,
    pub notes: Option<String>,
}

impl CreateExercise {
    pub fn validate(&self) -> Result<()> {
        if self.exercise_order == 0 {
            return Err(PlannerError::invalid_input(
                "exercise_order",
                "Exercise order must be at least 1",
            ));
        }
        if self.name.trim().is_empty() {
            return Err(PlannerError::invalid_input(
                "name",
                "Exercise name is required",
            ));
        }
        Ok(())
    }
}

/// Parameters for a partial exercise update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateExercise {
    pub id: u64,
    pub exercise_order: Option<u32>,
    pub name: Option<String>,
    pub notes: Option<String>,
}

/// Parameters for creating a set inside an exercise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSet {
    pub exercise_id: u64,
    /// Position within the exercise (1-based)
    pub set_number: u32,
    pub target_reps: u32,
    pub target_weight: Option<f64>,
    pub target_rpe: Option<f64>,
}

impl CreateSet {
    pub fn validate(&self) -> Result<()> {
        if self.set_number == 0 {
            return Err(PlannerError::invalid_input(
                "set_number",
                "Set number must be at least 1",
            ));
        }
        if self.target_reps == 0 {
            return Err(PlannerError::invalid_input(
                "target_reps",
                "Target reps must be at least 1",
            ));
        }
        if let Some(weight) = self.target_weight {
            validate_weight("target_weight", weight)?;
        }
        if let Some(rpe) = self.target_rpe {
            validate_rpe("target_rpe", rpe)?;
        }
        Ok(())
    }
}

/// Parameters for a partial update of a set's coach-authored fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSet {
    pub id: u64,
    pub set_number: Option<u32>,
    pub target_reps: Option<u32>,
    pub target_weight: Option<f64>,
    pub target_rpe: Option<f64>,
}

/// Parameters for recording a set as completed.
///
/// All three actual values are required together; recording a subset is not
/// representable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompleteSet {
    pub id: u64,
    pub actual_reps: u32,
    pub actual_weight: f64,
    pub actual_rpe: f64,
    pub lifter_notes: Option<String>,
}

impl CompleteSet {
    pub fn validate(&self) -> Result<()> {
        validate_weight("actual_weight", self.actual_weight)?;
        validate_rpe("actual_rpe", self.actual_rpe)?;
        Ok(())
    }
}

/// Parameters for moving an item to a new position among its siblings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Reorder {
    pub id: u64,
    /// Target position, 1-based; must not exceed the sibling count
    pub new_ordinal: u32,
}

/// Parameters for looking an item up by its parent and ordinal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ByNumber {
    pub parent_id: u64,
    pub number: u32,
}
