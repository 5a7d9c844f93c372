//! Plan model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Week;

/// A coach-authored workout plan, the root of the hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Unique identifier for the plan
    pub id: u64,

    /// Name of the plan
    pub name: String,

    /// Detailed multi-line description of the plan
    pub description: Option<String>,

    /// Planned length in weeks (2–16)
    pub total_weeks: u32,

    /// Opaque identifier of the owning coach
    pub coach_id: u64,

    /// Opaque identifier of the assigned lifter, if any. A lifter holds at
    /// most one active plan at a time.
    pub lifter_id: Option<u64>,

    /// Whether the plan accepts structural mutations
    pub is_active: bool,

    /// Templates can be reused across lifters
    pub is_template: bool,

    /// Timestamp when the plan was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the plan was last modified (UTC)
    pub updated_at: Timestamp,

    /// Associated weeks, ordered by week number
    #[serde(default)]
    pub weeks: Vec<Week>,
}

impl Plan {
    /// True when the plan has at least one week and every week is complete.
    ///
    /// Requires `weeks` (and their descendants) to be loaded.
    pub fn is_complete(&self) -> bool {
        !self.weeks.is_empty() && self.weeks.iter().all(Week::is_complete)
    }
}
