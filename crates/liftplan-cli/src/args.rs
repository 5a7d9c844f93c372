//! Command-line argument definitions using clap.
//!
//! Each command wraps its arguments in a clap `Args` struct that converts
//! into the matching interface-agnostic parameter type from
//! `liftplan_core::params`. Clap concerns (flags, help text, delimiters)
//! stay here; the core types remain framework-free.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use liftplan_core::params::*;

/// Manage coach-authored training plans from the command line.
///
/// LiftPlan organizes training into a Plan → Week → Day → Exercise → Set
/// hierarchy. Coaches author the structure and targets; lifters record
/// their results per set, and completion rolls up from sets to the plan.
#[derive(Parser)]
#[command(version, about, name = "lp")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/liftplan/liftplan.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands, one group per hierarchy level.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage workout plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Manage weeks within a plan
    #[command(alias = "w")]
    Week {
        #[command(subcommand)]
        command: WeekCommands,
    },
    /// Manage days within a week
    #[command(alias = "d")]
    Day {
        #[command(subcommand)]
        command: DayCommands,
    },
    /// Manage exercises within a day
    #[command(alias = "ex")]
    Exercise {
        #[command(subcommand)]
        command: ExerciseCommands,
    },
    /// Manage sets within an exercise
    #[command(alias = "s")]
    Set {
        #[command(subcommand)]
        command: SetCommands,
    },
}

// ============================================================================
// Plan commands
// ============================================================================

/// Create a new workout plan
#[derive(ClapArgs)]
pub struct CreatePlanArgs {
    /// Name of the plan
    pub name: String,
    /// Planned length in weeks (2-16)
    #[arg(short, long)]
    pub weeks: u32,
    /// ID of the owning coach
    #[arg(short, long)]
    pub coach: u64,
    /// Optional description providing more context about the plan
    #[arg(short, long)]
    pub description: Option<String>,
    /// Lifter to assign immediately (must not hold another active plan)
    #[arg(short, long)]
    pub lifter: Option<u64>,
    /// Mark the plan as a reusable template
    #[arg(short, long)]
    pub template: bool,
}

impl From<CreatePlanArgs> for CreatePlan {
    fn from(val: CreatePlanArgs) -> Self {
        CreatePlan {
            name: val.name,
            description: val.description,
            total_weeks: val.weeks,
            coach_id: val.coach,
            lifter_id: val.lifter,
            is_template: val.template,
        }
    }
}

/// Show a plan with its full week/day/exercise/set tree
#[derive(ClapArgs)]
pub struct ShowPlanArgs {
    /// ID of the plan to display
    pub id: u64,
}

/// List plans by coach or by lifter
#[derive(ClapArgs)]
pub struct ListPlansArgs {
    /// List the plans owned by this coach
    #[arg(long, conflicts_with = "lifter")]
    pub coach: Option<u64>,
    /// List the plans assigned to this lifter
    #[arg(long)]
    pub lifter: Option<u64>,
}

/// Update plan metadata
#[derive(ClapArgs)]
pub struct UpdatePlanArgs {
    /// ID of the plan to update
    pub id: u64,
    /// New name for the plan
    #[arg(long)]
    pub name: Option<String>,
    /// New description for the plan
    #[arg(long)]
    pub description: Option<String>,
    /// Activate or deactivate the plan (structural mutations are only
    /// allowed while active)
    #[arg(long)]
    pub active: Option<bool>,
    /// Mark or unmark the plan as a template
    #[arg(long)]
    pub template: Option<bool>,
    /// Assign this lifter (must not hold another active plan)
    #[arg(long)]
    pub lifter: Option<u64>,
}

impl From<UpdatePlanArgs> for UpdatePlan {
    fn from(val: UpdatePlanArgs) -> Self {
        UpdatePlan {
            id: val.id,
            name: val.name,
            description: val.description,
            is_active: val.active,
            is_template: val.template,
            lifter_id: val.lifter,
        }
    }
}

/// Assign a lifter to a plan
#[derive(ClapArgs)]
pub struct AssignLifterArgs {
    /// ID of the plan
    pub plan_id: u64,
    /// ID of the lifter to assign
    pub lifter_id: u64,
}

impl From<AssignLifterArgs> for AssignLifter {
    fn from(val: AssignLifterArgs) -> Self {
        AssignLifter {
            plan_id: val.plan_id,
            lifter_id: val.lifter_id,
        }
    }
}

/// Delete a plan permanently, including all weeks, days, exercises and sets
#[derive(ClapArgs)]
pub struct DeletePlanArgs {
    /// ID of the plan to delete
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeletePlanArgs> for DeletePlan {
    fn from(val: DeletePlanArgs) -> Self {
        DeletePlan {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Create a new plan
    #[command(alias = "c")]
    Create(CreatePlanArgs),
    /// Show a plan with its full tree
    #[command(alias = "s")]
    Show(ShowPlanArgs),
    /// List plans by coach or lifter
    #[command(aliases = ["l", "ls"])]
    List(ListPlansArgs),
    /// Update plan metadata
    #[command(alias = "u")]
    Update(UpdatePlanArgs),
    /// Assign a lifter to a plan
    Assign(AssignLifterArgs),
    /// Remove the lifter assignment from a plan
    Unassign(IdArgs),
    /// Delete a plan permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeletePlanArgs),
    /// Show completion statistics for a plan
    Stats(IdArgs),
}

// ============================================================================
// Week commands
// ============================================================================

/// Add a week to a plan
#[derive(ClapArgs)]
pub struct AddWeekArgs {
    /// ID of the plan to add the week to
    pub plan_id: u64,
    /// Week number (1-based; must be free and within the plan length)
    pub number: u32,
    /// Optional notes for the week
    #[arg(short, long)]
    pub notes: Option<String>,
}

impl From<AddWeekArgs> for CreateWeek {
    fn from(val: AddWeekArgs) -> Self {
        CreateWeek {
            plan_id: val.plan_id,
            week_number: val.number,
            notes: val.notes,
        }
    }
}

/// Update a week's number or notes
#[derive(ClapArgs)]
pub struct UpdateWeekArgs {
    /// ID of the week to update
    pub id: u64,
    /// New week number (checked for clashes, does not shift siblings)
    #[arg(long)]
    pub number: Option<u32>,
    /// New notes for the week
    #[arg(long)]
    pub notes: Option<String>,
}

impl From<UpdateWeekArgs> for UpdateWeek {
    fn from(val: UpdateWeekArgs) -> Self {
        UpdateWeek {
            id: val.id,
            week_number: val.number,
            notes: val.notes,
        }
    }
}

#[derive(Subcommand)]
pub enum WeekCommands {
    /// Add a week to a plan
    #[command(alias = "a")]
    Add(AddWeekArgs),
    /// Show a week with its days
    #[command(alias = "s")]
    Show(IdArgs),
    /// Look a week up by plan and week number
    Get(ByNumberArgs),
    /// List the weeks of a plan
    #[command(aliases = ["l", "ls"])]
    List(IdArgs),
    /// Update a week's number or notes
    #[command(alias = "u")]
    Update(UpdateWeekArgs),
    /// Delete a week and everything under it
    #[command(aliases = ["d", "rm"])]
    Delete(IdArgs),
    /// Show the next free week number for a plan
    Next(IdArgs),
}

// ============================================================================
// Day commands
// ============================================================================

/// Add a day to a week
#[derive(ClapArgs)]
pub struct AddDayArgs {
    /// ID of the week to add the day to
    pub week_id: u64,
    /// Day number (1-7; must be free within the week)
    pub number: u32,
    /// Name of the day, e.g. "Upper Body"
    pub name: String,
    /// Optional notes for the day
    #[arg(short, long)]
    pub notes: Option<String>,
}

impl From<AddDayArgs> for CreateDay {
    fn from(val: AddDayArgs) -> Self {
        CreateDay {
            week_id: val.week_id,
            day_number: val.number,
            name: val.name,
            notes: val.notes,
        }
    }
}

/// Update a day's number, name or notes
#[derive(ClapArgs)]
pub struct UpdateDayArgs {
    /// ID of the day to update
    pub id: u64,
    /// New day number (1-7; checked for clashes, does not shift siblings)
    #[arg(long)]
    pub number: Option<u32>,
    /// New name for the day
    #[arg(long)]
    pub name: Option<String>,
    /// New notes for the day
    #[arg(long)]
    pub notes: Option<String>,
}

impl From<UpdateDayArgs> for UpdateDay {
    fn from(val: UpdateDayArgs) -> Self {
        UpdateDay {
            id: val.id,
            day_number: val.number,
            name: val.name,
            notes: val.notes,
        }
    }
}

#[derive(Subcommand)]
pub enum DayCommands {
    /// Add a day to a week
    #[command(alias = "a")]
    Add(AddDayArgs),
    /// Show a day with its exercises and sets
    #[command(alias = "s")]
    Show(IdArgs),
    /// Look a day up by week and day number
    Get(ByNumberArgs),
    /// List the days of a week
    #[command(aliases = ["l", "ls"])]
    List(IdArgs),
    /// Update a day's number, name or notes
    #[command(alias = "u")]
    Update(UpdateDayArgs),
    /// Delete a day and everything under it
    #[command(aliases = ["d", "rm"])]
    Delete(IdArgs),
    /// Show the next free day number for a week
    Next(IdArgs),
}

// ============================================================================
// Exercise commands
// ============================================================================

/// Add an exercise to a day
#[derive(ClapArgs)]
pub struct AddExerciseArgs {
    /// ID of the day to add the exercise to
    pub day_id: u64,
    /// Position within the day (1-based; must be free)
    pub order: u32,
    /// Name of the exercise
    pub name: String,
    /// Optional coach notes (cues, tempo, etc.)
    #[arg(short, long)]
    pub notes: Option<String>,
}

impl From<AddExerciseArgs> for CreateExercise {
    fn from(val: AddExerciseArgs) -> Self {
        CreateExercise {
            day_id: val.day_id,
            exercise_order: val.order,
            name: val.name,
            notes: val.notes,
        }
    }
}

/// Update an exercise's order, name or notes
#[derive(ClapArgs)]
pub struct UpdateExerciseArgs {
    /// ID of the exercise to update
    pub id: u64,
    /// New position (checked for clashes, does not shift siblings; use
    /// reorder for that)
    #[arg(long)]
    pub order: Option<u32>,
    /// New name for the exercise
    #[arg(long)]
    pub name: Option<String>,
    /// New notes for the exercise
    #[arg(long)]
    pub notes: Option<String>,
}

impl From<UpdateExerciseArgs> for UpdateExercise {
    fn from(val: UpdateExerciseArgs) -> Self {
        UpdateExercise {
            id: val.id,
            exercise_order: val.order,
            name: val.name,
            notes: val.notes,
        }
    }
}

#[derive(Subcommand)]
pub enum ExerciseCommands {
    /// Add an exercise to a day
    #[command(alias = "a")]
    Add(AddExerciseArgs),
    /// Show an exercise with its sets
    #[command(alias = "s")]
    Show(IdArgs),
    /// List the exercises of a day
    #[command(aliases = ["l", "ls"])]
    List(IdArgs),
    /// Update an exercise's order, name or notes
    #[command(alias = "u")]
    Update(UpdateExerciseArgs),
    /// Delete an exercise and its sets
    #[command(aliases = ["d", "rm"])]
    Delete(IdArgs),
    /// Move an exercise to a new position, shifting siblings
    #[command(alias = "r")]
    Reorder(ReorderArgs),
    /// Show the next free position for a day
    Next(IdArgs),
}

// ============================================================================
// Set commands
// ============================================================================

/// Add a set to an exercise
#[derive(ClapArgs)]
pub struct AddSetArgs {
    /// ID of the exercise to add the set to
    pub exercise_id: u64,
    /// Set number (1-based; must be free)
    pub number: u32,
    /// Target repetitions
    pub reps: u32,
    /// Target weight
    #[arg(short, long)]
    pub weight: Option<f64>,
    /// Target RPE (6.0-10.0)
    #[arg(short, long)]
    pub rpe: Option<f64>,
}

impl From<AddSetArgs> for CreateSet {
    fn from(val: AddSetArgs) -> Self {
        CreateSet {
            exercise_id: val.exercise_id,
            set_number: val.number,
            target_reps: val.reps,
            target_weight: val.weight,
            target_rpe: val.rpe,
        }
    }
}

/// Update a set's targets
#[derive(ClapArgs)]
pub struct UpdateSetArgs {
    /// ID of the set to update
    pub id: u64,
    /// New set number (checked for clashes, does not shift siblings; use
    /// reorder for that)
    #[arg(long)]
    pub number: Option<u32>,
    /// New target repetitions
    #[arg(long)]
    pub reps: Option<u32>,
    /// New target weight
    #[arg(long)]
    pub weight: Option<f64>,
    /// New target RPE (6.0-10.0)
    #[arg(long)]
    pub rpe: Option<f64>,
}

impl From<UpdateSetArgs> for UpdateSet {
    fn from(val: UpdateSetArgs) -> Self {
        UpdateSet {
            id: val.id,
            set_number: val.number,
            target_reps: val.reps,
            target_weight: val.weight,
            target_rpe: val.rpe,
        }
    }
}

/// Record a set as completed with the lifter's actual numbers
#[derive(ClapArgs)]
pub struct CompleteSetArgs {
    /// ID of the set to complete
    pub id: u64,
    /// Actual repetitions performed
    pub reps: u32,
    /// Actual weight used
    pub weight: f64,
    /// Actual RPE (6.0-10.0)
    pub rpe: f64,
    /// Optional lifter notes
    #[arg(short, long)]
    pub notes: Option<String>,
}

impl From<CompleteSetArgs> for CompleteSet {
    fn from(val: CompleteSetArgs) -> Self {
        CompleteSet {
            id: val.id,
            actual_reps: val.reps,
            actual_weight: val.weight,
            actual_rpe: val.rpe,
            lifter_notes: val.notes,
        }
    }
}

#[derive(Subcommand)]
pub enum SetCommands {
    /// Add a set to an exercise
    #[command(alias = "a")]
    Add(AddSetArgs),
    /// Show a set
    #[command(alias = "s")]
    Show(IdArgs),
    /// List the sets of an exercise
    #[command(aliases = ["l", "ls"])]
    List(IdArgs),
    /// Update a set's targets
    #[command(alias = "u")]
    Update(UpdateSetArgs),
    /// Delete a set
    #[command(aliases = ["d", "rm"])]
    Delete(IdArgs),
    /// Move a set to a new position, shifting siblings
    #[command(alias = "r")]
    Reorder(ReorderArgs),
    /// Show the next free set number for an exercise
    Next(IdArgs),
    /// Record a set as completed
    #[command(alias = "c")]
    Complete(CompleteSetArgs),
    /// Clear a set's completion and actual values
    Uncomplete(IdArgs),
}

// ============================================================================
// Shared argument wrappers
// ============================================================================

/// A single resource ID
#[derive(ClapArgs)]
pub struct IdArgs {
    /// Unique identifier of the resource to operate on
    pub id: u64,
}

impl From<IdArgs> for Id {
    fn from(val: IdArgs) -> Self {
        Id { id: val.id }
    }
}

/// A parent ID plus an ordinal for by-number lookups
#[derive(ClapArgs)]
pub struct ByNumberArgs {
    /// ID of the parent resource
    pub parent_id: u64,
    /// Ordinal of the child within the parent
    pub number: u32,
}

impl From<ByNumberArgs> for ByNumber {
    fn from(val: ByNumberArgs) -> Self {
        ByNumber {
            parent_id: val.parent_id,
            number: val.number,
        }
    }
}

/// A resource ID plus its target position
#[derive(ClapArgs)]
pub struct ReorderArgs {
    /// Unique identifier of the item to move
    pub id: u64,
    /// Target position, 1-based; siblings in between are shifted
    pub position: u32,
}

impl From<ReorderArgs> for Reorder {
    fn from(val: ReorderArgs) -> Self {
        Reorder {
            id: val.id,
            new_ordinal: val.position,
        }
    }
}
