//! Command handlers wiring clap arguments to the planner facade.
//!
//! Each handler converts its argument struct into core parameters, calls the
//! planner, and renders the result (or a not-found message) as markdown.

use anyhow::{bail, Result};
use liftplan_core::{
    display::{CreateResult, DeleteResult, OperationStatus, UpdateResult},
    params::Id,
    Planner,
};

use crate::args::{DayCommands, ExerciseCommands, PlanCommands, SetCommands, WeekCommands};
use crate::renderer::TerminalRenderer;

/// CLI command dispatcher holding the planner and the output renderer.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    fn not_found(&self, what: &str, id: u64) -> Result<()> {
        self.renderer
            .render(&OperationStatus::failure(format!("{what} {id} not found")).to_string())
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Create(args) => {
                let plan = self.planner.create_plan(&args.into()).await?;
                self.renderer.render(&CreateResult::new(plan).to_string())
            }
            PlanCommands::Show(args) => match self.planner.get_plan(&Id { id: args.id }).await? {
                Some(plan) => self.renderer.render(&plan.to_string()),
                None => self.not_found("Plan", args.id),
            },
            PlanCommands::List(args) => {
                let summaries = match (args.coach, args.lifter) {
                    (Some(coach_id), None) => self.planner.list_plans_by_coach(coach_id).await?,
                    (None, Some(lifter_id)) => self.planner.list_plans_by_lifter(lifter_id).await?,
                    _ => bail!("Provide either --coach <id> or --lifter <id>"),
                };
                self.renderer.render(&summaries.to_string())
            }
            PlanCommands::Update(args) => {
                let plan = self.planner.update_plan(&args.into()).await?;
                self.renderer.render(&UpdateResult::new(plan).to_string())
            }
            PlanCommands::Assign(args) => {
                let params = args.into();
                self.planner.assign_lifter(&params).await?;
                self.renderer.render(
                    &OperationStatus::success(format!(
                        "Assigned lifter {} to plan {}",
                        params.lifter_id, params.plan_id
                    ))
                    .to_string(),
                )
            }
            PlanCommands::Unassign(args) => {
                self.planner.unassign_lifter(&Id { id: args.id }).await?;
                self.renderer.render(
                    &OperationStatus::success(format!("Unassigned lifter from plan {}", args.id))
                        .to_string(),
                )
            }
            PlanCommands::Delete(args) => {
                let id = args.id;
                match self.planner.get_plan(&Id { id }).await? {
                    Some(plan) => {
                        self.planner.delete_plan(&args.into()).await?;
                        self.renderer.render(&DeleteResult::new(plan).to_string())
                    }
                    None => self.not_found("Plan", id),
                }
            }
            PlanCommands::Stats(args) => {
                let stats = self.planner.plan_stats(&Id { id: args.id }).await?;
                let output = format!("# Plan {} progress\n\n{stats}", args.id);
                self.renderer.render(&output)
            }
        }
    }

    pub async fn handle_week_command(&self, command: WeekCommands) -> Result<()> {
        match command {
            WeekCommands::Add(args) => {
                let week = self.planner.create_week(&args.into()).await?;
                self.renderer.render(&CreateResult::new(week).to_string())
            }
            WeekCommands::Show(args) => match self.planner.get_week(&Id { id: args.id }).await? {
                Some(week) => self.renderer.render(&week.to_string()),
                None => self.not_found("Week", args.id),
            },
            WeekCommands::Get(args) => {
                let params = args.into();
                match self.planner.get_week_by_number(&params).await? {
                    Some(week) => self.renderer.render(&week.to_string()),
                    None => self.not_found("Week", u64::from(params.number)),
                }
            }
            WeekCommands::List(args) => {
                let weeks = self.planner.list_weeks(&Id { id: args.id }).await?;
                self.renderer.render(&weeks.to_string())
            }
            WeekCommands::Update(args) => {
                let week = self.planner.update_week(&args.into()).await?;
                self.renderer.render(&UpdateResult::new(week).to_string())
            }
            WeekCommands::Delete(args) => {
                let id = args.id;
                match self.planner.get_week(&Id { id }).await? {
                    Some(week) => {
                        self.planner.delete_week(&Id { id }).await?;
                        self.renderer.render(&DeleteResult::new(week).to_string())
                    }
                    None => self.not_found("Week", id),
                }
            }
            WeekCommands::Next(args) => {
                let next = self.planner.next_week_number(&Id { id: args.id }).await?;
                self.renderer
                    .render(&format!("Next week number for plan {}: {next}\n", args.id))
            }
        }
    }

    pub async fn handle_day_command(&self, command: DayCommands) -> Result<()> {
        match command {
            DayCommands::Add(args) => {
                let day = self.planner.create_day(&args.into()).await?;
                self.renderer.render(&CreateResult::new(day).to_string())
            }
            DayCommands::Show(args) => match self.planner.get_day(&Id { id: args.id }).await? {
                Some(day) => self.renderer.render(&day.to_string()),
                None => self.not_found("Day", args.id),
            },
            DayCommands::Get(args) => {
                let params = args.into();
                match self.planner.get_day_by_number(&params).await? {
                    Some(day) => self.renderer.render(&day.to_string()),
                    None => self.not_found("Day", u64::from(params.number)),
                }
            }
            DayCommands::List(args) => {
                let days = self.planner.list_days(&Id { id: args.id }).await?;
                self.renderer.render(&days.to_string())
            }
            DayCommands::Update(args) => {
                let day = self.planner.update_day(&args.into()).await?;
                self.renderer.render(&UpdateResult::new(day).to_string())
            }
            DayCommands::Delete(args) => {
                let id = args.id;
                match self.planner.get_day(&Id { id }).await? {
                    Some(day) => {
                        self.planner.delete_day(&Id { id }).await?;
                        self.renderer.render(&DeleteResult::new(day).to_string())
                    }
                    None => self.not_found("Day", id),
                }
            }
            DayCommands::Next(args) => {
                let next = self.planner.next_day_number(&Id { id: args.id }).await?;
                self.renderer
                    .render(&format!("Next day number for week {}: {next}\n", args.id))
            }
        }
    }

    pub async fn handle_exercise_command(&self, command: ExerciseCommands) -> Result<()> {
        match command {
            ExerciseCommands::Add(args) => {
                let exercise = self.planner.create_exercise(&args.into()).await?;
                self.renderer
                    .render(&CreateResult::new(exercise).to_string())
            }
            ExerciseCommands::Show(args) => {
                match self.planner.get_exercise(&Id { id: args.id }).await? {
                    Some(exercise) => self.renderer.render(&exercise.to_string()),
                    None => self.not_found("Exercise", args.id),
                }
            }
            ExerciseCommands::List(args) => {
                let exercises = self.planner.list_exercises(&Id { id: args.id }).await?;
                self.renderer.render(&exercises.to_string())
            }
            ExerciseCommands::Update(args) => {
                let exercise = self.planner.update_exercise(&args.into()).await?;
                self.renderer
                    .render(&UpdateResult::new(exercise).to_string())
            }
            ExerciseCommands::Delete(args) => {
                let id = args.id;
                match self.planner.get_exercise(&Id { id }).await? {
                    Some(exercise) => {
                        self.planner.delete_exercise(&Id { id }).await?;
                        self.renderer
                            .render(&DeleteResult::new(exercise).to_string())
                    }
                    None => self.not_found("Exercise", id),
                }
            }
            ExerciseCommands::Reorder(args) => {
                let exercise = self.planner.reorder_exercise(&args.into()).await?;
                let changes = vec![format!("Moved to position {}", exercise.exercise_order)];
                self.renderer
                    .render(&UpdateResult::with_changes(exercise, changes).to_string())
            }
            ExerciseCommands::Next(args) => {
                let next = self
                    .planner
                    .next_exercise_order(&Id { id: args.id })
                    .await?;
                self.renderer
                    .render(&format!("Next exercise order for day {}: {next}\n", args.id))
            }
        }
    }

    pub async fn handle_set_command(&self, command: SetCommands) -> Result<()> {
        match command {
            SetCommands::Add(args) => {
                let set = self.planner.create_set(&args.into()).await?;
                self.renderer.render(&CreateResult::new(set).to_string())
            }
            SetCommands::Show(args) => match self.planner.get_set(&Id { id: args.id }).await? {
                Some(set) => self.renderer.render(&set.to_string()),
                None => self.not_found("Set", args.id),
            },
            SetCommands::List(args) => {
                let sets = self.planner.list_sets(&Id { id: args.id }).await?;
                self.renderer.render(&sets.to_string())
            }
            SetCommands::Update(args) => {
                let set = self.planner.update_set(&args.into()).await?;
                self.renderer.render(&UpdateResult::new(set).to_string())
            }
            SetCommands::Delete(args) => {
                let id = args.id;
                match self.planner.get_set(&Id { id }).await? {
                    Some(set) => {
                        self.planner.delete_set(&Id { id }).await?;
                        self.renderer.render(&DeleteResult::new(set).to_string())
                    }
                    None => self.not_found("Set", id),
                }
            }
            SetCommands::Reorder(args) => {
                let set = self.planner.reorder_set(&args.into()).await?;
                let changes = vec![format!("Moved to position {}", set.set_number)];
                self.renderer
                    .render(&UpdateResult::with_changes(set, changes).to_string())
            }
            SetCommands::Next(args) => {
                let next = self.planner.next_set_number(&Id { id: args.id }).await?;
                self.renderer.render(&format!(
                    "Next set number for exercise {}: {next}\n",
                    args.id
                ))
            }
            SetCommands::Complete(args) => {
                let set = self.planner.complete_set(&args.into()).await?;
                let changes = vec!["Recorded actual reps, weight and RPE".to_string()];
                self.renderer
                    .render(&UpdateResult::with_changes(set, changes).to_string())
            }
            SetCommands::Uncomplete(args) => {
                let set = self.planner.uncomplete_set(&Id { id: args.id }).await?;
                let changes = vec!["Cleared completion and actual values".to_string()];
                self.renderer
                    .render(&UpdateResult::with_changes(set, changes).to_string())
            }
        }
    }
}
