//! Plan summary and aggregate statistics types.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Summary information about a plan with set-level progress counts.
///
/// Used by list operations; the counts come from the `plan_progress` view
/// rather than from loading the full tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Plan ID
    pub id: u64,
    /// Name of the plan
    pub name: String,
    /// Detailed multi-line description of the plan
    pub description: Option<String>,
    /// Planned length in weeks
    pub total_weeks: u32,
    /// Owning coach
    pub coach_id: u64,
    /// Assigned lifter, if any
    pub lifter_id: Option<u64>,
    /// Whether the plan accepts structural mutations
    pub is_active: bool,
    /// Whether the plan is a reusable template
    pub is_template: bool,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Total number of sets across the whole tree
    pub total_sets: u32,
    /// Number of completed sets across the whole tree
    pub completed_sets: u32,
}

/// Flat completion statistics for one plan, computed fresh on every read.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WorkoutStats {
    /// Planned length in weeks (from the plan itself, not a count of
    /// created weeks)
    pub total_weeks: u32,
    /// Number of days across all weeks
    pub total_days: u32,
    /// Number of exercises across all days
    pub total_exercises: u32,
    /// Number of sets across all exercises
    pub total_sets: u32,
    /// Number of completed sets
    pub completed_sets: u32,
    /// `completed_sets / total_sets * 100`, `0.0` when there are no sets
    pub completion_percentage: f64,
}

impl WorkoutStats {
    /// Builds stats from raw counts, guarding the zero-set division.
    pub fn from_counts(
        total_weeks: u32,
        total_days: u32,
        total_exercises: u32,
        total_sets: u32,
        completed_sets: u32,
    ) -> Self {
        let completion_percentage = if total_sets > 0 {
            f64::from(completed_sets) / f64::from(total_sets) * 100.0
        } else {
            0.0
        };

        Self {
            total_weeks,
            total_days,
            total_exercises,
            total_sets,
            completed_sets,
            completion_percentage,
        }
    }
}
