//! Set model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// One set within an exercise: coach-authored targets plus lifter-recorded
/// actual performance.
///
/// `is_completed` is the stored leaf flag of the completion rollup. It is
/// written only by the complete/uncomplete operations, which also write or
/// clear all three actual values (and the lifter notes) in the same
/// transaction, so the flag and the actual fields never disagree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Set {
    /// Unique identifier for the set
    pub id: u64,

    /// ID of the parent exercise
    pub exercise_id: u64,

    /// Position within the exercise (1-based, unique among siblings)
    pub set_number: u32,

    /// Target repetitions, set by the coach
    pub target_reps: u32,

    /// Target weight, set by the coach
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<f64>,

    /// Target RPE (6.0–10.0), set by the coach
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_rpe: Option<f64>,

    /// Actual repetitions, recorded by the lifter on completion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_reps: Option<u32>,

    /// Actual weight, recorded by the lifter on completion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_weight: Option<f64>,

    /// Actual RPE, recorded by the lifter on completion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_rpe: Option<f64>,

    /// Free-form lifter notes recorded on completion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifter_notes: Option<String>,

    /// Whether the lifter has recorded this set
    pub is_completed: bool,

    /// Timestamp when the set was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the set was last updated (UTC)
    pub updated_at: Timestamp,
}

impl Set {
    /// True when all three actual values are present. Kept consistent with
    /// `is_completed` by the complete/uncomplete operations.
    pub fn actual_data_complete(&self) -> bool {
        self.actual_reps.is_some() && self.actual_weight.is_some() && self.actual_rpe.is_some()
    }
}
