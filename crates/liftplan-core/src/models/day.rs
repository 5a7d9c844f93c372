//! Day model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Exercise;

/// One training day within a week.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Day {
    /// Unique identifier for the day
    pub id: u64,

    /// ID of the parent week
    pub week_id: u64,

    /// Position within the week (1–7, unique among siblings)
    pub day_number: u32,

    /// Name of the day, e.g. "Upper Body" or "Squat Day"
    pub name: String,

    /// Optional coach notes for the day
    pub notes: Option<String>,

    /// Timestamp when the day was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the day was last updated (UTC)
    pub updated_at: Timestamp,

    /// Associated exercises, ordered by exercise order
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

impl Day {
    /// True when the day has at least one exercise and every exercise is
    /// complete. An empty day is never complete.
    pub fn is_complete(&self) -> bool {
        !self.exercises.is_empty() && self.exercises.iter().all(Exercise::is_complete)
    }

    pub fn exercise_count(&self) -> usize {
        self.exercises.len()
    }
}
