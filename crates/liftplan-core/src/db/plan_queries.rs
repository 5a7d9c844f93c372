//! Plan CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use super::{guard, id_column, ordinal_column, timestamp_column};
use crate::{
    error::{DatabaseResultExt, PlannerError, Result},
    models::{requests::UpdatePlanRequest, Plan, PlanSummary, WorkoutStats},
    params::CreatePlan,
};

const INSERT_PLAN_SQL: &str = "INSERT INTO plans (name, description, total_weeks, coach_id, lifter_id, is_active, is_template, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";
const SELECT_PLAN_SQL: &str = "SELECT id, name, description, total_weeks, coach_id, lifter_id, is_active, is_template, created_at, updated_at FROM plans WHERE id = ?1";
const CHECK_PLAN_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM plans WHERE id = ?1)";
const CHECK_LIFTER_ACTIVE_PLAN_SQL: &str =
    "SELECT EXISTS(SELECT 1 FROM plans WHERE lifter_id = ?1 AND is_active = 1)";
const CHECK_LIFTER_OTHER_ACTIVE_PLAN_SQL: &str =
    "SELECT EXISTS(SELECT 1 FROM plans WHERE lifter_id = ?1 AND is_active = 1 AND id <> ?2)";
const UPDATE_PLAN_SQL: &str = "UPDATE plans SET name = ?1, description = ?2, is_active = ?3, is_template = ?4, lifter_id = ?5, updated_at = ?6 WHERE id = ?7";
const UPDATE_PLAN_LIFTER_SQL: &str =
    "UPDATE plans SET lifter_id = ?1, updated_at = ?2 WHERE id = ?3";
const SELECT_PLAN_SUMMARIES_SQL: &str = "SELECT p.id, p.name, p.description, p.total_weeks, p.coach_id, p.lifter_id, p.is_active, p.is_template, p.created_at, pp.total_sets, pp.completed_sets \
     FROM plans p JOIN plan_progress pp ON pp.plan_id = p.id";
const SELECT_PLAN_PROGRESS_SQL: &str =
    "SELECT day_count, exercise_count, total_sets, completed_sets FROM plan_progress WHERE plan_id = ?1";

const DELETE_PLAN_SETS_SQL: &str = "DELETE FROM sets WHERE exercise_id IN (\
     SELECT e.id FROM exercises e \
     JOIN days d ON e.day_id = d.id \
     JOIN weeks w ON d.week_id = w.id WHERE w.plan_id = ?1)";
const DELETE_PLAN_EXERCISES_SQL: &str = "DELETE FROM exercises WHERE day_id IN (\
     SELECT d.id FROM days d \
     JOIN weeks w ON d.week_id = w.id WHERE w.plan_id = ?1)";
const DELETE_PLAN_DAYS_SQL: &str =
    "DELETE FROM days WHERE week_id IN (SELECT id FROM weeks WHERE plan_id = ?1)";
const DELETE_PLAN_WEEKS_SQL: &str = "DELETE FROM weeks WHERE plan_id = ?1";
const DELETE_PLAN_SQL: &str = "DELETE FROM plans WHERE id = ?1";

impl super::Database {
    /// Helper function to construct a Plan from a database row (weeks not
    /// loaded).
    fn build_plan_from_row(row: &rusqlite::Row) -> rusqlite::Result<Plan> {
        Ok(Plan {
            id: id_column(row, 0)?,
            name: row.get(1)?,
            description: row.get(2)?,
            total_weeks: ordinal_column(row, 3)?,
            coach_id: id_column(row, 4)?,
            lifter_id: row.get::<_, Option<i64>>(5)?.map(|id| id as u64),
            is_active: row.get(6)?,
            is_template: row.get(7)?,
            created_at: timestamp_column(row, 8)?,
            updated_at: timestamp_column(row, 9)?,
            weeks: Vec::new(),
        })
    }

    fn build_summary_from_row(row: &rusqlite::Row) -> rusqlite::Result<PlanSummary> {
        Ok(PlanSummary {
            id: id_column(row, 0)?,
            name: row.get(1)?,
            description: row.get(2)?,
            total_weeks: ordinal_column(row, 3)?,
            coach_id: id_column(row, 4)?,
            lifter_id: row.get::<_, Option<i64>>(5)?.map(|id| id as u64),
            is_active: row.get(6)?,
            is_template: row.get(7)?,
            created_at: timestamp_column(row, 8)?,
            total_sets: ordinal_column(row, 9)?,
            completed_sets: ordinal_column(row, 10)?,
        })
    }

    /// Creates a new workout plan. A pre-assigned lifter is checked against
    /// the one-active-plan-per-lifter rule inside the same transaction.
    pub fn create_plan(&mut self, params: &CreatePlan) -> Result<Plan> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        if let Some(lifter_id) = params.lifter_id {
            let has_active: bool = tx
                .query_row(
                    CHECK_LIFTER_ACTIVE_PLAN_SQL,
                    params![lifter_id as i64],
                    |row| row.get(0),
                )
                .db_context("Failed to check lifter assignment")?;

            if has_active {
                return Err(PlannerError::LifterAlreadyAssigned { lifter_id });
            }
        }

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_PLAN_SQL,
            params![
                &params.name,
                params.description.as_deref(),
                params.total_weeks as i64,
                params.coach_id as i64,
                params.lifter_id.map(|id| id as i64),
                true,
                params.is_template,
                &now_str,
                &now_str
            ],
        )
        .map_err(|e| PlannerError::database_error("Failed to insert plan", e))?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Plan {
            id,
            name: params.name.clone(),
            description: params.description.clone(),
            total_weeks: params.total_weeks,
            coach_id: params.coach_id,
            lifter_id: params.lifter_id,
            is_active: true,
            is_template: params.is_template,
            created_at: now,
            updated_at: now,
            weeks: Vec::new(),
        })
    }

    /// Retrieves a plan by its ID with its full week/day/exercise/set tree.
    pub fn get_plan(&self, id: u64) -> Result<Option<Plan>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PLAN_SQL)
            .map_err(|e| PlannerError::database_error("Failed to prepare query", e))?;

        let mut plan = stmt
            .query_row(params![id as i64], Self::build_plan_from_row)
            .optional()
            .map_err(|e| PlannerError::database_error("Failed to query plan", e))?;

        if let Some(ref mut plan) = plan {
            plan.weeks = self.weeks_for_plan(plan.id)?;
        }

        Ok(plan)
    }

    /// Lists plan summaries owned by a coach, newest first.
    pub fn list_plans_by_coach(&self, coach_id: u64) -> Result<Vec<PlanSummary>> {
        let query = format!("{SELECT_PLAN_SUMMARIES_SQL} WHERE p.coach_id = ?1 ORDER BY p.created_at DESC");
        let mut stmt = self
            .connection
            .prepare(&query)
            .map_err(|e| PlannerError::database_error("Failed to prepare query", e))?;

        let summaries = stmt
            .query_map(params![coach_id as i64], Self::build_summary_from_row)
            .map_err(|e| PlannerError::database_error("Failed to query plans", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| PlannerError::database_error("Failed to fetch plans", e))?;

        Ok(summaries)
    }

    /// Lists plan summaries assigned to a lifter, newest first.
    pub fn list_plans_by_lifter(&self, lifter_id: u64) -> Result<Vec<PlanSummary>> {
        let query = format!("{SELECT_PLAN_SUMMARIES_SQL} WHERE p.lifter_id = ?1 ORDER BY p.created_at DESC");
        let mut stmt = self
            .connection
            .prepare(&query)
            .map_err(|e| PlannerError::database_error("Failed to prepare query", e))?;

        let summaries = stmt
            .query_map(params![lifter_id as i64], Self::build_summary_from_row)
            .map_err(|e| PlannerError::database_error("Failed to query plans", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| PlannerError::database_error("Failed to fetch plans", e))?;

        Ok(summaries)
    }

    /// Updates plan metadata. Unlike the child entities, this path is not
    /// gated on `is_active`; it is how an inactive plan gets reactivated.
    /// Re-assigning a lifter re-checks the one-active-plan rule, excluding
    /// this plan itself.
    pub fn update_plan(&mut self, id: u64, request: UpdatePlanRequest) -> Result<Plan> {
        if request.is_empty() {
            return self.get_plan(id)?.ok_or(PlannerError::PlanNotFound { id });
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let current = tx
            .query_row(SELECT_PLAN_SQL, params![id as i64], Self::build_plan_from_row)
            .optional()
            .db_context("Failed to query plan")?
            .ok_or(PlannerError::PlanNotFound { id })?;

        let new_lifter = match request.lifter_id {
            Some(Some(lifter_id)) => {
                let has_other: bool = tx
                    .query_row(
                        CHECK_LIFTER_OTHER_ACTIVE_PLAN_SQL,
                        params![lifter_id as i64, id as i64],
                        |row| row.get(0),
                    )
                    .db_context("Failed to check lifter assignment")?;

                if has_other {
                    return Err(PlannerError::LifterAlreadyAssigned { lifter_id });
                }
                Some(lifter_id)
            }
            Some(None) => None,
            None => current.lifter_id,
        };

        let new_name = request.name.unwrap_or(current.name);
        let new_description = request.description.or(current.description);
        let new_is_active = request.is_active.unwrap_or(current.is_active);
        let new_is_template = request.is_template.unwrap_or(current.is_template);

        let now_str = Timestamp::now().to_string();
        tx.execute(
            UPDATE_PLAN_SQL,
            params![
                &new_name,
                new_description.as_deref(),
                new_is_active,
                new_is_template,
                new_lifter.map(|l| l as i64),
                &now_str,
                id as i64
            ],
        )
        .map_err(|e| PlannerError::database_error("Failed to update plan", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        self.get_plan(id)?.ok_or(PlannerError::PlanNotFound { id })
    }

    /// Assigns a lifter to a plan. Fails if the plan already has a lifter or
    /// the lifter already holds another active plan.
    pub fn assign_lifter(&mut self, plan_id: u64, lifter_id: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let current = tx
            .query_row(
                SELECT_PLAN_SQL,
                params![plan_id as i64],
                Self::build_plan_from_row,
            )
            .optional()
            .db_context("Failed to query plan")?
            .ok_or(PlannerError::PlanNotFound { id: plan_id })?;

        if let Some(existing) = current.lifter_id {
            return Err(PlannerError::PlanAlreadyAssigned {
                plan_id,
                lifter_id: existing,
            });
        }

        let has_active: bool = tx
            .query_row(
                CHECK_LIFTER_ACTIVE_PLAN_SQL,
                params![lifter_id as i64],
                |row| row.get(0),
            )
            .db_context("Failed to check lifter assignment")?;

        if has_active {
            return Err(PlannerError::LifterAlreadyAssigned { lifter_id });
        }

        let now_str = Timestamp::now().to_string();
        tx.execute(
            UPDATE_PLAN_LIFTER_SQL,
            params![lifter_id as i64, &now_str, plan_id as i64],
        )
        .map_err(|e| PlannerError::database_error("Failed to assign lifter", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }

    /// Removes the lifter assignment from a plan.
    pub fn unassign_lifter(&mut self, plan_id: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let current = tx
            .query_row(
                SELECT_PLAN_SQL,
                params![plan_id as i64],
                Self::build_plan_from_row,
            )
            .optional()
            .db_context("Failed to query plan")?
            .ok_or(PlannerError::PlanNotFound { id: plan_id })?;

        if current.lifter_id.is_none() {
            return Err(PlannerError::invalid_structure(
                "unassign lifter",
                "No lifter is currently assigned to this plan",
            ));
        }

        let now_str = Timestamp::now().to_string();
        tx.execute(
            UPDATE_PLAN_LIFTER_SQL,
            params![None::<i64>, &now_str, plan_id as i64],
        )
        .map_err(|e| PlannerError::database_error("Failed to unassign lifter", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }

    /// Permanently deletes a plan and everything under it. The cascade is
    /// issued explicitly per level, leaf tables first.
    pub fn delete_plan(&mut self, id: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_PLAN_EXISTS_SQL, params![id as i64], |row| row.get(0))
            .db_context("Failed to check plan existence")?;

        if !exists {
            return Err(PlannerError::PlanNotFound { id });
        }

        tx.execute(DELETE_PLAN_SETS_SQL, params![id as i64])
            .map_err(|e| PlannerError::database_error("Failed to delete plan sets", e))?;
        tx.execute(DELETE_PLAN_EXERCISES_SQL, params![id as i64])
            .map_err(|e| PlannerError::database_error("Failed to delete plan exercises", e))?;
        tx.execute(DELETE_PLAN_DAYS_SQL, params![id as i64])
            .map_err(|e| PlannerError::database_error("Failed to delete plan days", e))?;
        tx.execute(DELETE_PLAN_WEEKS_SQL, params![id as i64])
            .map_err(|e| PlannerError::database_error("Failed to delete plan weeks", e))?;
        tx.execute(DELETE_PLAN_SQL, params![id as i64])
            .map_err(|e| PlannerError::database_error("Failed to delete plan", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }

    /// Computes flat completion statistics for a plan from the
    /// `plan_progress` counting view. Never cached.
    pub fn plan_stats(&self, plan_id: u64) -> Result<WorkoutStats> {
        let plan = guard::plan_ref(&self.connection, plan_id)?;

        let (total_days, total_exercises, total_sets, completed_sets) = self
            .connection
            .query_row(SELECT_PLAN_PROGRESS_SQL, params![plan_id as i64], |row| {
                Ok((
                    row.get::<_, i64>(0)? as u32,
                    row.get::<_, i64>(1)? as u32,
                    row.get::<_, i64>(2)? as u32,
                    row.get::<_, i64>(3)? as u32,
                ))
            })
            .db_context("Failed to query plan progress")?;

        Ok(WorkoutStats::from_counts(
            plan.total_weeks,
            total_days,
            total_exercises,
            total_sets,
            completed_sets,
        ))
    }
}
