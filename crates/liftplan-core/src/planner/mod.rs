//! High-level planner API for managing the workout hierarchy.
//!
//! This module provides the main [`Planner`] interface. The planner is the
//! single entry point for host surfaces (the CLI, or any future transport):
//! it validates parameters, delegates to the database layer on a blocking
//! worker thread, and returns domain models or display wrappers.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Host (CLI)    │───▶│    Planner      │───▶│    Database     │
//! │                 │    │ (per-entity ops)│    │    (via db/)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances
//! - [`plan_ops`]: Plan operations (create, assign, stats, delete, ...)
//! - [`week_ops`], [`day_ops`], [`exercise_ops`], [`set_ops`]: the uniform
//!   create/get/list/update/delete/next-ordinal surface per hierarchy
//!   level, plus reorder on exercises and sets and complete/uncomplete on
//!   sets
//!
//! Every structural mutation is rejected with
//! [`PlannerError::PlanInactive`](crate::PlannerError::PlanInactive) when the
//! owning plan is inactive; the check happens inside the same transaction as
//! the write.

use std::path::PathBuf;

use tokio::task;

use crate::{
    db::Database,
    error::{PlannerError, Result},
};

// Module declarations
pub mod builder;
pub mod day_ops;
pub mod exercise_ops;
pub mod plan_ops;
pub mod set_ops;
pub mod week_ops;

#[cfg(test)]
mod tests;

// Re-export the main types
pub use builder::PlannerBuilder;

/// Main planner interface for managing workout plans and their hierarchy.
pub struct Planner {
    pub(crate) db_path: PathBuf,
}

impl Planner {
    /// Creates a new planner with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Runs a database operation on a blocking worker thread with a
    /// short-lived connection.
    pub(crate) async fn with_db<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
