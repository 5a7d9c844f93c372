//! Week model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Day;

/// One training week within a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Week {
    /// Unique identifier for the week
    pub id: u64,

    /// ID of the parent plan
    pub plan_id: u64,

    /// Position within the plan (1-based, unique among siblings, bounded by
    /// the plan's total week count)
    pub week_number: u32,

    /// Optional coach notes for the week
    pub notes: Option<String>,

    /// Timestamp when the week was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the week was last updated (UTC)
    pub updated_at: Timestamp,

    /// Associated days, ordered by day number
    #[serde(default)]
    pub days: Vec<Day>,
}

impl Week {
    /// True when the week has at least one day and every day is complete.
    /// An empty week is never complete.
    pub fn is_complete(&self) -> bool {
        !self.days.is_empty() && self.days.iter().all(Day::is_complete)
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }
}
