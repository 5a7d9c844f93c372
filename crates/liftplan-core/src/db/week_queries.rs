//! Week CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, Connection, OptionalExtension};

use super::{guard, id_column, ordinal_column, timestamp_column};
use crate::{
    error::{DatabaseResultExt, PlannerError, Result},
    models::{requests::UpdateWeekRequest, Week},
    ordering,
    params::CreateWeek,
};

const INSERT_WEEK_SQL: &str = "INSERT INTO weeks (plan_id, week_number, notes, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_WEEK_COLUMNS: &str = "id, plan_id, week_number, notes, created_at, updated_at";
const CHECK_WEEK_NUMBER_SQL: &str =
    "SELECT EXISTS(SELECT 1 FROM weeks WHERE plan_id = ?1 AND week_number = ?2)";
const MAX_WEEK_NUMBER_SQL: &str = "SELECT MAX(week_number) FROM weeks WHERE plan_id = ?1";
const UPDATE_WEEK_SQL: &str =
    "UPDATE weeks SET week_number = ?1, notes = ?2, updated_at = ?3 WHERE id = ?4";
const DELETE_WEEK_SETS_SQL: &str = "DELETE FROM sets WHERE exercise_id IN (\
     SELECT e.id FROM exercises e \
     JOIN days d ON e.day_id = d.id WHERE d.week_id = ?1)";
const DELETE_WEEK_EXERCISES_SQL: &str =
    "DELETE FROM exercises WHERE day_id IN (SELECT id FROM days WHERE week_id = ?1)";
const DELETE_WEEK_DAYS_SQL: &str = "DELETE FROM days WHERE week_id = ?1";
const DELETE_WEEK_SQL: &str = "DELETE FROM weeks WHERE id = ?1";

fn select_week_sql() -> String {
    format!("SELECT {SELECT_WEEK_COLUMNS} FROM weeks WHERE id = ?1")
}

impl super::Database {
    /// Helper function to construct a Week from a database row (days not
    /// loaded).
    fn build_week_from_row(row: &rusqlite::Row) -> rusqlite::Result<Week> {
        Ok(Week {
            id: id_column(row, 0)?,
            plan_id: id_column(row, 1)?,
            week_number: ordinal_column(row, 2)?,
            notes: row.get(3)?,
            created_at: timestamp_column(row, 4)?,
            updated_at: timestamp_column(row, 5)?,
            days: Vec::new(),
        })
    }

    fn week_row(conn: &Connection, id: u64) -> Result<Option<Week>> {
        conn.query_row(&select_week_sql(), params![id as i64], Self::build_week_from_row)
            .optional()
            .db_context("Failed to query week")
    }

    /// Creates a new week inside a plan. The week number must be free among
    /// siblings and must not exceed the plan's total week count; gaps in the
    /// existing numbering are permitted.
    pub fn create_week(&mut self, params: &CreateWeek) -> Result<Week> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let plan = guard::plan_ref(&tx, params.plan_id)?;
        guard::assert_mutable(&plan)?;

        let number_taken: bool = tx
            .query_row(
                CHECK_WEEK_NUMBER_SQL,
                params![params.plan_id as i64, params.week_number as i64],
                |row| row.get(0),
            )
            .db_context("Failed to check week number")?;

        if number_taken {
            return Err(PlannerError::DuplicateStructure {
                kind: "Week",
                ordinal: params.week_number,
                parent_id: params.plan_id,
            });
        }

        if params.week_number > plan.total_weeks {
            return Err(PlannerError::invalid_structure(
                "create week",
                format!(
                    "Week number {} exceeds plan total weeks {}",
                    params.week_number, plan.total_weeks
                ),
            ));
        }

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_WEEK_SQL,
            params![
                params.plan_id as i64,
                params.week_number as i64,
                params.notes.as_deref(),
                &now_str,
                &now_str
            ],
        )
        .map_err(|e| PlannerError::database_error("Failed to insert week", e))?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Week {
            id,
            plan_id: params.plan_id,
            week_number: params.week_number,
            notes: params.notes.clone(),
            created_at: now,
            updated_at: now,
            days: Vec::new(),
        })
    }

    /// Retrieves a week by its ID with its days (and their subtrees) loaded.
    pub fn get_week(&self, id: u64) -> Result<Option<Week>> {
        let mut week = Self::week_row(&self.connection, id)?;

        if let Some(ref mut week) = week {
            week.days = self.days_for_week(week.id)?;
        }

        Ok(week)
    }

    /// Retrieves a week by its plan and week number.
    pub fn get_week_by_number(&self, plan_id: u64, week_number: u32) -> Result<Option<Week>> {
        guard::plan_ref(&self.connection, plan_id)?;

        let query = format!(
            "SELECT {SELECT_WEEK_COLUMNS} FROM weeks WHERE plan_id = ?1 AND week_number = ?2"
        );
        let mut week = self
            .connection
            .query_row(
                &query,
                params![plan_id as i64, week_number as i64],
                Self::build_week_from_row,
            )
            .optional()
            .db_context("Failed to query week")?;

        if let Some(ref mut week) = week {
            week.days = self.days_for_week(week.id)?;
        }

        Ok(week)
    }

    /// Retrieves all weeks of a plan ordered by week number, each with its
    /// full subtree loaded.
    pub fn weeks_for_plan(&self, plan_id: u64) -> Result<Vec<Week>> {
        guard::plan_ref(&self.connection, plan_id)?;

        let query =
            format!("SELECT {SELECT_WEEK_COLUMNS} FROM weeks WHERE plan_id = ?1 ORDER BY week_number");
        let mut stmt = self
            .connection
            .prepare(&query)
            .map_err(|e| PlannerError::database_error("Failed to prepare query", e))?;

        let mut weeks = stmt
            .query_map(params![plan_id as i64], Self::build_week_from_row)
            .map_err(|e| PlannerError::database_error("Failed to query weeks", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| PlannerError::database_error("Failed to fetch weeks", e))?;

        for week in &mut weeks {
            week.days = self.days_for_week(week.id)?;
        }

        Ok(weeks)
    }

    /// Updates a week's number and/or notes. A changed week number is
    /// checked for sibling clashes and the plan's week bound, then written
    /// in place; siblings are never shifted on this path.
    pub fn update_week(&mut self, id: u64, request: UpdateWeekRequest) -> Result<Week> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let current =
            Self::week_row(&tx, id)?.ok_or(PlannerError::WeekNotFound { id })?;

        let plan = guard::plan_ref(&tx, current.plan_id)?;
        guard::assert_mutable(&plan)?;

        let new_number = match request.week_number {
            Some(number) if number != current.week_number => {
                let number_taken: bool = tx
                    .query_row(
                        CHECK_WEEK_NUMBER_SQL,
                        params![current.plan_id as i64, number as i64],
                        |row| row.get(0),
                    )
                    .db_context("Failed to check week number")?;

                if number_taken {
                    return Err(PlannerError::DuplicateStructure {
                        kind: "Week",
                        ordinal: number,
                        parent_id: current.plan_id,
                    });
                }

                if number == 0 {
                    return Err(PlannerError::invalid_structure(
                        "update week",
                        "Week number must be positive",
                    ));
                }

                if number > plan.total_weeks {
                    return Err(PlannerError::invalid_structure(
                        "update week",
                        format!(
                            "Week number {number} exceeds plan total weeks {}",
                            plan.total_weeks
                        ),
                    ));
                }

                number
            }
            _ => current.week_number,
        };

        let new_notes = request.notes.or(current.notes);

        let now_str = Timestamp::now().to_string();
        tx.execute(
            UPDATE_WEEK_SQL,
            params![new_number as i64, new_notes.as_deref(), &now_str, id as i64],
        )
        .map_err(|e| PlannerError::database_error("Failed to update week", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        self.get_week(id)?.ok_or(PlannerError::WeekNotFound { id })
    }

    /// Deletes a week and its whole subtree. Remaining sibling weeks keep
    /// their numbers; the gap is not closed.
    pub fn delete_week(&mut self, id: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let plan = guard::plan_ref_for_week(&tx, id)?;
        guard::assert_mutable(&plan)?;

        tx.execute(DELETE_WEEK_SETS_SQL, params![id as i64])
            .map_err(|e| PlannerError::database_error("Failed to delete week sets", e))?;
        tx.execute(DELETE_WEEK_EXERCISES_SQL, params![id as i64])
            .map_err(|e| PlannerError::database_error("Failed to delete week exercises", e))?;
        tx.execute(DELETE_WEEK_DAYS_SQL, params![id as i64])
            .map_err(|e| PlannerError::database_error("Failed to delete week days", e))?;
        tx.execute(DELETE_WEEK_SQL, params![id as i64])
            .map_err(|e| PlannerError::database_error("Failed to delete week", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }

    /// Suggests the next week number for a plan: max existing + 1, or 1.
    pub fn next_week_number(&self, plan_id: u64) -> Result<u32> {
        guard::plan_ref(&self.connection, plan_id)?;

        let max_number: Option<i64> = self
            .connection
            .query_row(MAX_WEEK_NUMBER_SQL, params![plan_id as i64], |row| {
                row.get(0)
            })
            .db_context("Failed to query max week number")?;

        Ok(ordering::next_ordinal(max_number.map(|n| n as u32)))
    }
}
