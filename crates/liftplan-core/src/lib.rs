//! Core library for the LiftPlan training-plan manager.
//!
//! This crate provides the business logic for coach-authored workout plans:
//! a Plan → Week → Day → Exercise → Set hierarchy where each level carries a
//! dense 1-based ordinal unique among its siblings, shift-based reordering
//! of exercises and sets, and bottom-up completion aggregation from
//! lifter-recorded sets.
//!
//! # Architecture
//!
//! - [`models`]: domain models with derived completion methods
//! - [`ordering`]: the pure sibling-ordinal engine (next-ordinal, reorder)
//! - [`db`]: SQLite persistence, one transaction per mutation
//! - [`planner`]: the async [`Planner`] facade host surfaces talk to
//! - [`display`]: markdown formatting for models and operation results
//!
//! # Quick Start
//!
//! ```rust
//! use liftplan_core::{PlannerBuilder, params::{CreatePlan, CreateWeek}};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("liftplan.db"))
//!     .build()
//!     .await?;
//!
//! let plan = planner
//!     .create_plan(&CreatePlan {
//!         name: "Intermediate Block".to_string(),
//!         description: None,
//!         total_weeks: 8,
//!         coach_id: 1,
//!         lifter_id: None,
//!         is_template: false,
//!     })
//!     .await?;
//!
//! let week = planner
//!     .create_week(&CreateWeek {
//!         plan_id: plan.id,
//!         week_number: 1,
//!         notes: None,
//!     })
//!     .await?;
//! println!("Created week {} of plan {}", week.week_number, plan.name);
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod ordering;
pub mod params;
pub mod planner;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    CreateResult, Days, DeleteResult, Exercises, OperationStatus, PlanSummaries, Sets,
    UpdateResult, Weeks,
};
pub use error::{PlannerError, Result};
pub use models::{Day, Exercise, Plan, PlanSummary, Set, Week, WorkoutStats};
pub use planner::{Planner, PlannerBuilder};
