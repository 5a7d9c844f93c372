//! Exercise CRUD operations, queries, and reordering.

use jiff::Timestamp;
use rusqlite::{params, Connection, OptionalExtension};

use super::{guard, id_column, ordinal_column, timestamp_column};
use crate::{
    error::{DatabaseResultExt, PlannerError, Result},
    models::{requests::UpdateExerciseRequest, Exercise},
    ordering::{self, Sibling},
    params::CreateExercise,
};

const INSERT_EXERCISE_SQL: &str = "INSERT INTO exercises (day_id, exercise_order, name, notes, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_EXERCISE_COLUMNS: &str =
    "id, day_id, exercise_order, name, notes, created_at, updated_at";
const CHECK_EXERCISE_ORDER_SQL: &str =
    "SELECT EXISTS(SELECT 1 FROM exercises WHERE day_id = ?1 AND exercise_order = ?2)";
const MAX_EXERCISE_ORDER_SQL: &str = "SELECT MAX(exercise_order) FROM exercises WHERE day_id = ?1";
const SELECT_EXERCISE_SIBLINGS_SQL: &str =
    "SELECT id, exercise_order FROM exercises WHERE day_id = ?1 ORDER BY exercise_order";
const UPDATE_EXERCISE_SQL: &str = "UPDATE exercises SET exercise_order = ?1, name = ?2, notes = ?3, updated_at = ?4 WHERE id = ?5";
const UPDATE_EXERCISE_ORDER_SQL: &str =
    "UPDATE exercises SET exercise_order = ?1, updated_at = ?2 WHERE id = ?3";
const DELETE_EXERCISE_SETS_SQL: &str = "DELETE FROM sets WHERE exercise_id = ?1";
const DELETE_EXERCISE_SQL: &str = "DELETE FROM exercises WHERE id = ?1";

fn select_exercise_sql() -> String {
    format!("SELECT {SELECT_EXERCISE_COLUMNS} FROM exercises WHERE id = ?1")
}

impl super::Database {
    /// Helper function to construct an Exercise from a database row (sets
    /// not loaded).
    fn build_exercise_from_row(row: &rusqlite::Row) -> rusqlite::Result<Exercise> {
        Ok(Exercise {
            id: id_column(row, 0)?,
            day_id: id_column(row, 1)?,
            exercise_order: ordinal_column(row, 2)?,
            name: row.get(3)?,
            notes: row.get(4)?,
            created_at: timestamp_column(row, 5)?,
            updated_at: timestamp_column(row, 6)?,
            sets: Vec::new(),
        })
    }

    fn exercise_row(conn: &Connection, id: u64) -> Result<Option<Exercise>> {
        conn.query_row(
            &select_exercise_sql(),
            params![id as i64],
            Self::build_exercise_from_row,
        )
        .optional()
        .db_context("Failed to query exercise")
    }

    fn exercise_siblings(conn: &Connection, day_id: u64) -> Result<Vec<Sibling>> {
        let mut stmt = conn
            .prepare(SELECT_EXERCISE_SIBLINGS_SQL)
            .map_err(|e| PlannerError::database_error("Failed to prepare query", e))?;

        let siblings = stmt
            .query_map(params![day_id as i64], |row| {
                Ok(Sibling {
                    id: id_column(row, 0)?,
                    ordinal: ordinal_column(row, 1)?,
                })
            })
            .map_err(|e| PlannerError::database_error("Failed to query exercise order", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| PlannerError::database_error("Failed to fetch exercise order", e))?;

        Ok(siblings)
    }

    /// Creates a new exercise inside a day at the requested order, which
    /// must be free among siblings.
    pub fn create_exercise(&mut self, params: &CreateExercise) -> Result<Exercise> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let plan = guard::plan_ref_for_day(&tx, params.day_id)?;
        guard::assert_mutable(&plan)?;

        let order_taken: bool = tx
            .query_row(
                CHECK_EXERCISE_ORDER_SQL,
                params![params.day_id as i64, params.exercise_order as i64],
                |row| row.get(0),
            )
            .db_context("Failed to check exercise order")?;

        if order_taken {
            return Err(PlannerError::DuplicateStructure {
                kind: "Exercise",
                ordinal: params.exercise_order,
                parent_id: params.day_id,
            });
        }

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_EXERCISE_SQL,
            params![
                params.day_id as i64,
                params.exercise_order as i64,
                &params.name,
                params.notes.as_deref(),
                &now_str,
                &now_str
            ],
        )
        .map_err(|e| PlannerError::database_error("Failed to insert exercise", e))?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Exercise {
            id,
            day_id: params.day_id,
            exercise_order: params.exercise_order,
            name: params.name.clone(),
            notes: params.notes.clone(),
            created_at: now,
            updated_at: now,
            sets: Vec::new(),
        })
    }

    /// Retrieves an exercise by its ID with its sets loaded.
    pub fn get_exercise(&self, id: u64) -> Result<Option<Exercise>> {
        let mut exercise = Self::exercise_row(&self.connection, id)?;

        if let Some(ref mut exercise) = exercise {
            exercise.sets = self.sets_for_exercise(exercise.id)?;
        }

        Ok(exercise)
    }

    /// Retrieves all exercises of a day ordered by exercise order, each with
    /// its sets loaded.
    pub fn exercises_for_day(&self, day_id: u64) -> Result<Vec<Exercise>> {
        guard::plan_ref_for_day(&self.connection, day_id)?;

        let query = format!(
            "SELECT {SELECT_EXERCISE_COLUMNS} FROM exercises WHERE day_id = ?1 ORDER BY exercise_order"
        );
        let mut stmt = self
            .connection
            .prepare(&query)
            .map_err(|e| PlannerError::database_error("Failed to prepare query", e))?;

        let mut exercises = stmt
            .query_map(params![day_id as i64], Self::build_exercise_from_row)
            .map_err(|e| PlannerError::database_error("Failed to query exercises", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| PlannerError::database_error("Failed to fetch exercises", e))?;

        for exercise in &mut exercises {
            exercise.sets = self.sets_for_exercise(exercise.id)?;
        }

        Ok(exercises)
    }

    /// Updates an exercise's order, name and/or notes. A changed order only
    /// checks for a sibling clash and overwrites in place; use
    /// [`Self::reorder_exercise`] to shift siblings.
    pub fn update_exercise(&mut self, id: u64, request: UpdateExerciseRequest) -> Result<Exercise> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let current =
            Self::exercise_row(&tx, id)?.ok_or(PlannerError::ExerciseNotFound { id })?;

        let plan = guard::plan_ref_for_day(&tx, current.day_id)?;
        guard::assert_mutable(&plan)?;

        let new_order = match request.exercise_order {
            Some(order) if order != current.exercise_order => {
                let order_taken: bool = tx
                    .query_row(
                        CHECK_EXERCISE_ORDER_SQL,
                        params![current.day_id as i64, order as i64],
                        |row| row.get(0),
                    )
                    .db_context("Failed to check exercise order")?;

                if order_taken {
                    return Err(PlannerError::DuplicateStructure {
                        kind: "Exercise",
                        ordinal: order,
                        parent_id: current.day_id,
                    });
                }

                order
            }
            _ => current.exercise_order,
        };

        let new_name = request.name.unwrap_or(current.name);
        let new_notes = request.notes.or(current.notes);

        let now_str = Timestamp::now().to_string();
        tx.execute(
            UPDATE_EXERCISE_SQL,
            params![
                new_order as i64,
                &new_name,
                new_notes.as_deref(),
                &now_str,
                id as i64
            ],
        )
        .map_err(|e| PlannerError::database_error("Failed to update exercise", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        self.get_exercise(id)?
            .ok_or(PlannerError::ExerciseNotFound { id })
    }

    /// Deletes an exercise and its sets. Sibling exercises keep their order
    /// values; the gap is not closed.
    pub fn delete_exercise(&mut self, id: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let plan = guard::plan_ref_for_exercise(&tx, id)?;
        guard::assert_mutable(&plan)?;

        tx.execute(DELETE_EXERCISE_SETS_SQL, params![id as i64])
            .map_err(|e| PlannerError::database_error("Failed to delete exercise sets", e))?;
        tx.execute(DELETE_EXERCISE_SQL, params![id as i64])
            .map_err(|e| PlannerError::database_error("Failed to delete exercise", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }

    /// Moves an exercise to a new position within its day, shifting the
    /// siblings between the old and new position. The sibling snapshot, the
    /// shift computation and every row write share one transaction.
    pub fn reorder_exercise(&mut self, id: u64, new_order: u32) -> Result<Exercise> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let current =
            Self::exercise_row(&tx, id)?.ok_or(PlannerError::ExerciseNotFound { id })?;

        let plan = guard::plan_ref_for_day(&tx, current.day_id)?;
        guard::assert_mutable(&plan)?;

        let siblings = Self::exercise_siblings(&tx, current.day_id)?;
        let changes = ordering::reorder("reorder exercise", &siblings, id, new_order)?;

        let now_str = Timestamp::now().to_string();
        for change in &changes {
            tx.execute(
                UPDATE_EXERCISE_ORDER_SQL,
                params![change.ordinal as i64, &now_str, change.id as i64],
            )
            .map_err(|e| PlannerError::database_error("Failed to update exercise order", e))?;
        }

        tx.commit().db_context("Failed to commit transaction")?;

        self.get_exercise(id)?
            .ok_or(PlannerError::ExerciseNotFound { id })
    }

    /// Suggests the next exercise order for a day: max existing + 1, or 1.
    pub fn next_exercise_order(&self, day_id: u64) -> Result<u32> {
        guard::plan_ref_for_day(&self.connection, day_id)?;

        let max_order: Option<i64> = self
            .connection
            .query_row(MAX_EXERCISE_ORDER_SQL, params![day_id as i64], |row| {
                row.get(0)
            })
            .db_context("Failed to query max exercise order")?;

        Ok(ordering::next_ordinal(max_order.map(|n| n as u32)))
    }
}
