//! Result wrapper types for displaying operation outcomes.
//!
//! The wrappers add a one-line confirmation above the resource's own Display
//! output, keeping create/update/delete feedback uniform across all five
//! entity types.

use std::fmt;

use crate::models::{Day, Exercise, Plan, Set, Week};

/// A displayable domain entity with a kind name and identity.
pub trait Resource: fmt::Display {
    /// Human-readable entity kind, e.g. "plan" or "exercise".
    fn kind() -> &'static str;

    /// The entity's unique id.
    fn id(&self) -> u64;

    /// Short label used in deletion messages.
    fn label(&self) -> String;
}

impl Resource for Plan {
    fn kind() -> &'static str {
        "plan"
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

impl Resource for Week {
    fn kind() -> &'static str {
        "week"
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn label(&self) -> String {
        format!("Week {}", self.week_number)
    }
}

impl Resource for Day {
    fn kind() -> &'static str {
        "day"
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

impl Resource for Exercise {
    fn kind() -> &'static str {
        "exercise"
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

impl Resource for Set {
    fn kind() -> &'static str {
        "set"
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn label(&self) -> String {
        format!("Set {}", self.set_number)
    }
}

/// Wrapper type for displaying the result of create operations.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl<T: Resource> fmt::Display for CreateResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created {} with ID: {}", T::kind(), self.resource.id())?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations, optionally
/// listing the changes that were made.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl<T: Resource> fmt::Display for UpdateResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated {} with ID: {}", T::kind(), self.resource.id())?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl<T: Resource> fmt::Display for DeleteResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted {} '{}' (ID: {})",
            T::kind(),
            self.resource.label(),
            self.resource.id()
        )
    }
}
