//! LiftPlan CLI application.
//!
//! Command-line interface for managing coach-authored training plans and
//! recording lifter results.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use liftplan_core::PlannerBuilder;
use log::info;
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(planner, renderer);

    info!("LiftPlan started");

    match command {
        Commands::Plan { command } => cli.handle_plan_command(command).await,
        Commands::Week { command } => cli.handle_week_command(command).await,
        Commands::Day { command } => cli.handle_day_command(command).await,
        Commands::Exercise { command } => cli.handle_exercise_command(command).await,
        Commands::Set { command } => cli.handle_set_command(command).await,
    }
}
