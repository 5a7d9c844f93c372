//! Exercise model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Set;

/// One exercise within a day, owning an ordered list of sets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    /// Unique identifier for the exercise
    pub id: u64,

    /// ID of the parent day
    pub day_id: u64,

    /// Position within the day (1-based, unique among siblings)
    pub exercise_order: u32,

    /// Name of the exercise
    pub name: String,

    /// Optional coach notes (cues, tempo, etc.)
    pub notes: Option<String>,

    /// Timestamp when the exercise was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the exercise was last updated (UTC)
    pub updated_at: Timestamp,

    /// Associated sets, ordered by set number
    #[serde(default)]
    pub sets: Vec<Set>,
}

impl Exercise {
    /// True when the exercise has at least one set and every set is
    /// completed. An exercise with no sets is never complete.
    pub fn is_complete(&self) -> bool {
        !self.sets.is_empty() && self.sets.iter().all(|set| set.is_completed)
    }

    pub fn set_count(&self) -> usize {
        self.sets.len()
    }
}
