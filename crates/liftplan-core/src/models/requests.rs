//! Validated request types for partial updates.
//!
//! Parameter structs in [`crate::params`] are interface-facing and carry raw
//! values; these request types are what the database layer accepts. The
//! `TryFrom` conversions perform the range validation the persistence code
//! may then rely on.

use crate::error::{PlannerError, Result};
use crate::params;

/// Partial update of plan metadata. `lifter_id` uses a double Option:
/// `None` leaves the assignment untouched, `Some(None)` clears it.
#[derive(Debug, Default)]
pub struct UpdatePlanRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    pub is_template: Option<bool>,
    pub lifter_id: Option<Option<u64>>,
}

impl UpdatePlanRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.is_active.is_none()
            && self.is_template.is_none()
            && self.lifter_id.is_none()
    }
}

impl From<params::UpdatePlan> for UpdatePlanRequest {
    fn from(p: params::UpdatePlan) -> Self {
        Self {
            name: p.name,
            description: p.description,
            is_active: p.is_active,
            is_template: p.is_template,
            lifter_id: p.lifter_id.map(Some),
        }
    }
}

/// Partial update of a week. A new week number goes through the duplicate
/// and range checks but does not shift siblings.
#[derive(Debug, Default)]
pub struct UpdateWeekRequest {
    pub week_number: Option<u32>,
    pub notes: Option<String>,
}

impl From<params::UpdateWeek> for UpdateWeekRequest {
    fn from(p: params::UpdateWeek) -> Self {
        Self {
            week_number: p.week_number,
            notes: p.notes,
        }
    }
}

/// Partial update of a day.
#[derive(Debug, Default)]
pub struct UpdateDayRequest {
    pub day_number: Option<u32>,
    pub name: Option<String>,
    pub notes: Option<String>,
}

impl TryFrom<params::UpdateDay> for UpdateDayRequest {
    type Error = PlannerError;

    fn try_from(p: params::UpdateDay) -> Result<Self> {
        if let Some(number) = p.day_number {
            validate_day_number(number)?;
        }
        Ok(Self {
            day_number: p.day_number,
            name: p.name,
            notes: p.notes,
        })
    }
}

/// Partial update of an exercise.
#[derive(Debug, Default)]
pub struct UpdateExerciseRequest {
    pub exercise_order: Option<u32>,
    pub name: Option<String>,
    pub notes: Option<String>,
}

impl TryFrom<params::UpdateExercise> for UpdateExerciseRequest {
    type Error = PlannerError;

    fn try_from(p: params::UpdateExercise) -> Result<Self> {
        if p.exercise_order == Some(0) {
            return Err(PlannerError::invalid_input(
                "exercise_order",
                "Exercise order must be at least 1",
            ));
        }
        Ok(Self {
            exercise_order: p.exercise_order,
            name: p.name,
            notes: p.notes,
        })
    }
}

/// Partial update of a set's coach-authored fields. Actual values are out of
/// reach here; they change only through complete/uncomplete.
#[derive(Debug, Default)]
pub struct UpdateSetRequest {
    pub set_number: Option<u32>,
    pub target_reps: Option<u32>,
    pub target_weight: Option<f64>,
    pub target_rpe: Option<f64>,
}

impl TryFrom<params::UpdateSet> for UpdateSetRequest {
    type Error = PlannerError;

    fn try_from(p: params::UpdateSet) -> Result<Self> {
        if p.set_number == Some(0) {
            return Err(PlannerError::invalid_input(
                "set_number",
                "Set number must be at least 1",
            ));
        }
        if p.target_reps == Some(0) {
            return Err(PlannerError::invalid_input(
                "target_reps",
                "Target reps must be at least 1",
            ));
        }
        if let Some(weight) = p.target_weight {
            validate_weight("target_weight", weight)?;
        }
        if let Some(rpe) = p.target_rpe {
            validate_rpe("target_rpe", rpe)?;
        }
        Ok(Self {
            set_number: p.set_number,
            target_reps: p.target_reps,
            target_weight: p.target_weight,
            target_rpe: p.target_rpe,
        })
    }
}

/// Day numbers follow the calendar week: 1 through 7.
pub(crate) fn validate_day_number(number: u32) -> Result<()> {
    if (1..=7).contains(&number) {
        Ok(())
    } else {
        Err(PlannerError::invalid_input(
            "day_number",
            format!("Day number {number} must be between 1 and 7"),
        ))
    }
}

pub(crate) fn validate_weight(field: &str, weight: f64) -> Result<()> {
    if weight >= 0.0 {
        Ok(())
    } else {
        Err(PlannerError::invalid_input(
            field,
            "Weight cannot be negative",
        ))
    }
}

/// RPE is the 6.0–10.0 scale used on the coaching side.
pub(crate) fn validate_rpe(field: &str, rpe: f64) -> Result<()> {
    if (6.0..=10.0).contains(&rpe) {
        Ok(())
    } else {
        Err(PlannerError::invalid_input(
            field,
            format!("RPE {rpe} must be between 6.0 and 10.0"),
        ))
    }
}
