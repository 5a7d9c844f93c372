//! Display implementations for domain models.
//!
//! All output is markdown. Nesting follows the hierarchy: a plan renders its
//! weeks, a week its days, and so on down to one-line sets. Aggregate
//! completion markers come from the `is_complete` methods, so what is shown
//! is always derived fresh from the loaded tree.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{Day, Exercise, Plan, PlanSummary, Set, Week, WorkoutStats};

fn completion_icon(complete: bool) -> &'static str {
    if complete {
        "✓ Complete"
    } else {
        "○ Incomplete"
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Length: {} weeks", self.total_weeks)?;
        writeln!(f, "- Coach: {}", self.coach_id)?;
        if let Some(lifter) = self.lifter_id {
            writeln!(f, "- Lifter: {lifter}")?;
        }
        writeln!(
            f,
            "- Status: {}",
            if self.is_active { "active" } else { "inactive" }
        )?;
        if self.is_template {
            writeln!(f, "- Template: yes")?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        if self.weeks.is_empty() {
            writeln!(f, "\nNo weeks in this plan.")?;
        } else {
            for week in &self.weeks {
                writeln!(f)?;
                write!(f, "{week}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## Week {} ({})",
            self.week_number,
            completion_icon(self.is_complete())
        )?;

        if let Some(notes) = &self.notes {
            writeln!(f)?;
            writeln!(f, "{notes}")?;
        }

        if self.days.is_empty() {
            writeln!(f)?;
            writeln!(f, "No days in this week.")?;
        } else {
            for day in &self.days {
                writeln!(f)?;
                write!(f, "{day}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### Day {}: {} ({})",
            self.day_number,
            self.name,
            completion_icon(self.is_complete())
        )?;

        if let Some(notes) = &self.notes {
            writeln!(f)?;
            writeln!(f, "{notes}")?;
        }

        for exercise in &self.exercises {
            writeln!(f)?;
            write!(f, "{exercise}")?;
        }

        Ok(())
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "#### {}. {} ({})",
            self.exercise_order,
            self.name,
            completion_icon(self.is_complete())
        )?;

        if let Some(notes) = &self.notes {
            writeln!(f)?;
            writeln!(f, "{notes}")?;
        }

        if !self.sets.is_empty() {
            writeln!(f)?;
            for set in &self.sets {
                write!(f, "{set}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Set {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let icon = if self.is_completed { "✓" } else { "○" };
        write!(f, "- {icon} Set {}: {} reps", self.set_number, self.target_reps)?;
        if let Some(weight) = self.target_weight {
            write!(f, " @ {weight}")?;
        }
        if let Some(rpe) = self.target_rpe {
            write!(f, " RPE {rpe}")?;
        }

        if self.is_completed {
            write!(f, " → did")?;
            if let Some(reps) = self.actual_reps {
                write!(f, " {reps} reps")?;
            }
            if let Some(weight) = self.actual_weight {
                write!(f, " @ {weight}")?;
            }
            if let Some(rpe) = self.actual_rpe {
                write!(f, " RPE {rpe}")?;
            }
        }

        if let Some(notes) = &self.lifter_notes {
            write!(f, " ({notes})")?;
        }

        writeln!(f)
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = if self.total_sets > 0 {
            format!(" ({}/{})", self.completed_sets, self.total_sets)
        } else {
            String::new()
        };

        writeln!(f, "## {} (ID: {}){progress}", self.name, self.id)?;
        writeln!(f)?;

        if let Some(desc) = &self.description {
            writeln!(f, "- **Description**: {desc}")?;
        }

        writeln!(f, "- **Length**: {} weeks", self.total_weeks)?;
        writeln!(
            f,
            "- **Status**: {}{}",
            if self.is_active { "active" } else { "inactive" },
            if self.is_template { " (template)" } else { "" }
        )?;
        if let Some(lifter) = self.lifter_id {
            writeln!(f, "- **Lifter**: {lifter}")?;
        }
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for WorkoutStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Weeks planned: {}", self.total_weeks)?;
        writeln!(f, "- Days: {}", self.total_days)?;
        writeln!(f, "- Exercises: {}", self.total_exercises)?;
        writeln!(
            f,
            "- Sets: {}/{} completed",
            self.completed_sets, self.total_sets
        )?;
        writeln!(f, "- Completion: {:.1}%", self.completion_percentage)
    }
}
