//! Day CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, Connection, OptionalExtension};

use super::{guard, id_column, ordinal_column, timestamp_column};
use crate::{
    error::{DatabaseResultExt, PlannerError, Result},
    models::{requests::UpdateDayRequest, Day},
    ordering,
    params::CreateDay,
};

const INSERT_DAY_SQL: &str = "INSERT INTO days (week_id, day_number, name, notes, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_DAY_COLUMNS: &str = "id, week_id, day_number, name, notes, created_at, updated_at";
const CHECK_DAY_NUMBER_SQL: &str =
    "SELECT EXISTS(SELECT 1 FROM days WHERE week_id = ?1 AND day_number = ?2)";
const MAX_DAY_NUMBER_SQL: &str = "SELECT MAX(day_number) FROM days WHERE week_id = ?1";
const UPDATE_DAY_SQL: &str =
    "UPDATE days SET day_number = ?1, name = ?2, notes = ?3, updated_at = ?4 WHERE id = ?5";
const DELETE_DAY_SETS_SQL: &str = "DELETE FROM sets WHERE exercise_id IN (\
     SELECT id FROM exercises WHERE day_id = ?1)";
const DELETE_DAY_EXERCISES_SQL: &str = "DELETE FROM exercises WHERE day_id = ?1";
const DELETE_DAY_SQL: &str = "DELETE FROM days WHERE id = ?1";

fn select_day_sql() -> String {
    format!("SELECT {SELECT_DAY_COLUMNS} FROM days WHERE id = ?1")
}

impl super::Database {
    /// Helper function to construct a Day from a database row (exercises not
    /// loaded).
    fn build_day_from_row(row: &rusqlite::Row) -> rusqlite::Result<Day> {
        Ok(Day {
            id: id_column(row, 0)?,
            week_id: id_column(row, 1)?,
            day_number: ordinal_column(row, 2)?,
            name: row.get(3)?,
            notes: row.get(4)?,
            created_at: timestamp_column(row, 5)?,
            updated_at: timestamp_column(row, 6)?,
            exercises: Vec::new(),
        })
    }

    fn day_row(conn: &Connection, id: u64) -> Result<Option<Day>> {
        conn.query_row(&select_day_sql(), params![id as i64], Self::build_day_from_row)
            .optional()
            .db_context("Failed to query day")
    }

    /// Creates a new day inside a week. The day number must be free among
    /// siblings; the 1–7 range is validated before this layer is reached.
    pub fn create_day(&mut self, params: &CreateDay) -> Result<Day> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let plan = guard::plan_ref_for_week(&tx, params.week_id)?;
        guard::assert_mutable(&plan)?;

        let number_taken: bool = tx
            .query_row(
                CHECK_DAY_NUMBER_SQL,
                params![params.week_id as i64, params.day_number as i64],
                |row| row.get(0),
            )
            .db_context("Failed to check day number")?;

        if number_taken {
            return Err(PlannerError::DuplicateStructure {
                kind: "Day",
                ordinal: params.day_number,
                parent_id: params.week_id,
            });
        }

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_DAY_SQL,
            params![
                params.week_id as i64,
                params.day_number as i64,
                &params.name,
                params.notes.as_deref(),
                &now_str,
                &now_str
            ],
        )
        .map_err(|e| PlannerError::database_error("Failed to insert day", e))?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Day {
            id,
            week_id: params.week_id,
            day_number: params.day_number,
            name: params.name.clone(),
            notes: params.notes.clone(),
            created_at: now,
            updated_at: now,
            exercises: Vec::new(),
        })
    }

    /// Retrieves a day by its ID with its exercises and sets loaded.
    pub fn get_day(&self, id: u64) -> Result<Option<Day>> {
        let mut day = Self::day_row(&self.connection, id)?;

        if let Some(ref mut day) = day {
            day.exercises = self.exercises_for_day(day.id)?;
        }

        Ok(day)
    }

    /// Retrieves a day by its week and day number.
    pub fn get_day_by_number(&self, week_id: u64, day_number: u32) -> Result<Option<Day>> {
        guard::plan_ref_for_week(&self.connection, week_id)?;

        let query =
            format!("SELECT {SELECT_DAY_COLUMNS} FROM days WHERE week_id = ?1 AND day_number = ?2");
        let mut day = self
            .connection
            .query_row(
                &query,
                params![week_id as i64, day_number as i64],
                Self::build_day_from_row,
            )
            .optional()
            .db_context("Failed to query day")?;

        if let Some(ref mut day) = day {
            day.exercises = self.exercises_for_day(day.id)?;
        }

        Ok(day)
    }

    /// Retrieves all days of a week ordered by day number, each with its
    /// exercises and sets loaded.
    pub fn days_for_week(&self, week_id: u64) -> Result<Vec<Day>> {
        guard::plan_ref_for_week(&self.connection, week_id)?;

        let query =
            format!("SELECT {SELECT_DAY_COLUMNS} FROM days WHERE week_id = ?1 ORDER BY day_number");
        let mut stmt = self
            .connection
            .prepare(&query)
            .map_err(|e| PlannerError::database_error("Failed to prepare query", e))?;

        let mut days = stmt
            .query_map(params![week_id as i64], Self::build_day_from_row)
            .map_err(|e| PlannerError::database_error("Failed to query days", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| PlannerError::database_error("Failed to fetch days", e))?;

        for day in &mut days {
            day.exercises = self.exercises_for_day(day.id)?;
        }

        Ok(days)
    }

    /// Updates a day's number, name and/or notes. A changed day number only
    /// checks for a sibling clash and overwrites in place.
    pub fn update_day(&mut self, id: u64, request: UpdateDayRequest) -> Result<Day> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let current = Self::day_row(&tx, id)?.ok_or(PlannerError::DayNotFound { id })?;

        let plan = guard::plan_ref_for_week(&tx, current.week_id)?;
        guard::assert_mutable(&plan)?;

        let new_number = match request.day_number {
            Some(number) if number != current.day_number => {
                let number_taken: bool = tx
                    .query_row(
                        CHECK_DAY_NUMBER_SQL,
                        params![current.week_id as i64, number as i64],
                        |row| row.get(0),
                    )
                    .db_context("Failed to check day number")?;

                if number_taken {
                    return Err(PlannerError::DuplicateStructure {
                        kind: "Day",
                        ordinal: number,
                        parent_id: current.week_id,
                    });
                }

                number
            }
            _ => current.day_number,
        };

        let new_name = request.name.unwrap_or(current.name);
        let new_notes = request.notes.or(current.notes);

        let now_str = Timestamp::now().to_string();
        tx.execute(
            UPDATE_DAY_SQL,
            params![
                new_number as i64,
                &new_name,
                new_notes.as_deref(),
                &now_str,
                id as i64
            ],
        )
        .map_err(|e| PlannerError::database_error("Failed to update day", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        self.get_day(id)?.ok_or(PlannerError::DayNotFound { id })
    }

    /// Deletes a day and its subtree. Sibling days keep their numbers.
    pub fn delete_day(&mut self, id: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let plan = guard::plan_ref_for_day(&tx, id)?;
        guard::assert_mutable(&plan)?;

        tx.execute(DELETE_DAY_SETS_SQL, params![id as i64])
            .map_err(|e| PlannerError::database_error("Failed to delete day sets", e))?;
        tx.execute(DELETE_DAY_EXERCISES_SQL, params![id as i64])
            .map_err(|e| PlannerError::database_error("Failed to delete day exercises", e))?;
        tx.execute(DELETE_DAY_SQL, params![id as i64])
            .map_err(|e| PlannerError::database_error("Failed to delete day", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }

    /// Suggests the next day number for a week: max existing + 1, or 1.
    pub fn next_day_number(&self, week_id: u64) -> Result<u32> {
        guard::plan_ref_for_week(&self.connection, week_id)?;

        let max_number: Option<i64> = self
            .connection
            .query_row(MAX_DAY_NUMBER_SQL, params![week_id as i64], |row| {
                row.get(0)
            })
            .db_context("Failed to query max day number")?;

        Ok(ordering::next_ordinal(max_number.map(|n| n as u32)))
    }
}
