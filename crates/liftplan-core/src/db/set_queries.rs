//! Set CRUD operations, queries, reordering, and completion.

use jiff::Timestamp;
use rusqlite::{params, Connection, OptionalExtension};

use super::{guard, id_column, ordinal_column, timestamp_column};
use crate::{
    error::{DatabaseResultExt, PlannerError, Result},
    models::{requests::UpdateSetRequest, Set},
    ordering::{self, Sibling},
    params::{CompleteSet, CreateSet},
};

const INSERT_SET_SQL: &str = "INSERT INTO sets (exercise_id, set_number, target_reps, target_weight, target_rpe, is_completed, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
const SELECT_SET_COLUMNS: &str = "id, exercise_id, set_number, target_reps, target_weight, target_rpe, actual_reps, actual_weight, actual_rpe, lifter_notes, is_completed, created_at, updated_at";
const CHECK_SET_NUMBER_SQL: &str =
    "SELECT EXISTS(SELECT 1 FROM sets WHERE exercise_id = ?1 AND set_number = ?2)";
const MAX_SET_NUMBER_SQL: &str = "SELECT MAX(set_number) FROM sets WHERE exercise_id = ?1";
const SELECT_SET_SIBLINGS_SQL: &str =
    "SELECT id, set_number FROM sets WHERE exercise_id = ?1 ORDER BY set_number";
const UPDATE_SET_TARGETS_SQL: &str = "UPDATE sets SET set_number = ?1, target_reps = ?2, target_weight = ?3, target_rpe = ?4, updated_at = ?5 WHERE id = ?6";
const UPDATE_SET_NUMBER_SQL: &str =
    "UPDATE sets SET set_number = ?1, updated_at = ?2 WHERE id = ?3";
const COMPLETE_SET_SQL: &str = "UPDATE sets SET actual_reps = ?1, actual_weight = ?2, actual_rpe = ?3, lifter_notes = ?4, is_completed = 1, updated_at = ?5 WHERE id = ?6";
const UNCOMPLETE_SET_SQL: &str = "UPDATE sets SET actual_reps = NULL, actual_weight = NULL, actual_rpe = NULL, lifter_notes = NULL, is_completed = 0, updated_at = ?1 WHERE id = ?2";
const DELETE_SET_SQL: &str = "DELETE FROM sets WHERE id = ?1";
const COUNT_COMPLETED_SETS_SQL: &str =
    "SELECT COUNT(*) FROM sets WHERE exercise_id = ?1 AND is_completed = 1";

fn select_set_sql() -> String {
    format!("SELECT {SELECT_SET_COLUMNS} FROM sets WHERE id = ?1")
}

impl super::Database {
    /// Helper function to construct a Set from a database row.
    fn build_set_from_row(row: &rusqlite::Row) -> rusqlite::Result<Set> {
        Ok(Set {
            id: id_column(row, 0)?,
            exercise_id: id_column(row, 1)?,
            set_number: ordinal_column(row, 2)?,
            target_reps: ordinal_column(row, 3)?,
            target_weight: row.get(4)?,
            target_rpe: row.get(5)?,
            actual_reps: row.get::<_, Option<i64>>(6)?.map(|n| n as u32),
            actual_weight: row.get(7)?,
            actual_rpe: row.get(8)?,
            lifter_notes: row.get(9)?,
            is_completed: row.get(10)?,
            created_at: timestamp_column(row, 11)?,
            updated_at: timestamp_column(row, 12)?,
        })
    }

    fn set_row(conn: &Connection, id: u64) -> Result<Option<Set>> {
        conn.query_row(&select_set_sql(), params![id as i64], Self::build_set_from_row)
            .optional()
            .db_context("Failed to query set")
    }

    fn set_siblings(conn: &Connection, exercise_id: u64) -> Result<Vec<Sibling>> {
        let mut stmt = conn
            .prepare(SELECT_SET_SIBLINGS_SQL)
            .map_err(|e| PlannerError::database_error("Failed to prepare query", e))?;

        let siblings = stmt
            .query_map(params![exercise_id as i64], |row| {
                Ok(Sibling {
                    id: id_column(row, 0)?,
                    ordinal: ordinal_column(row, 1)?,
                })
            })
            .map_err(|e| PlannerError::database_error("Failed to query set order", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| PlannerError::database_error("Failed to fetch set order", e))?;

        Ok(siblings)
    }

    /// Creates a new set inside an exercise at the requested number, which
    /// must be free among siblings. New sets start uncompleted with no
    /// actual values.
    pub fn create_set(&mut self, params: &CreateSet) -> Result<Set> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let plan = guard::plan_ref_for_exercise(&tx, params.exercise_id)?;
        guard::assert_mutable(&plan)?;

        let number_taken: bool = tx
            .query_row(
                CHECK_SET_NUMBER_SQL,
                params![params.exercise_id as i64, params.set_number as i64],
                |row| row.get(0),
            )
            .db_context("Failed to check set number")?;

        if number_taken {
            return Err(PlannerError::DuplicateStructure {
                kind: "Set",
                ordinal: params.set_number,
                parent_id: params.exercise_id,
            });
        }

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_SET_SQL,
            params![
                params.exercise_id as i64,
                params.set_number as i64,
                params.target_reps as i64,
                params.target_weight,
                params.target_rpe,
                false,
                &now_str,
                &now_str
            ],
        )
        .map_err(|e| PlannerError::database_error("Failed to insert set", e))?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Set {
            id,
            exercise_id: params.exercise_id,
            set_number: params.set_number,
            target_reps: params.target_reps,
            target_weight: params.target_weight,
            target_rpe: params.target_rpe,
            actual_reps: None,
            actual_weight: None,
            actual_rpe: None,
            lifter_notes: None,
            is_completed: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a set by its ID.
    pub fn get_set(&self, id: u64) -> Result<Option<Set>> {
        Self::set_row(&self.connection, id)
    }

    /// Retrieves all sets of an exercise ordered by set number.
    pub fn sets_for_exercise(&self, exercise_id: u64) -> Result<Vec<Set>> {
        guard::plan_ref_for_exercise(&self.connection, exercise_id)?;

        let query = format!(
            "SELECT {SELECT_SET_COLUMNS} FROM sets WHERE exercise_id = ?1 ORDER BY set_number"
        );
        let mut stmt = self
            .connection
            .prepare(&query)
            .map_err(|e| PlannerError::database_error("Failed to prepare query", e))?;

        let sets = stmt
            .query_map(params![exercise_id as i64], Self::build_set_from_row)
            .map_err(|e| PlannerError::database_error("Failed to query sets", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| PlannerError::database_error("Failed to fetch sets", e))?;

        Ok(sets)
    }

    /// Updates a set's coach-authored targets. A changed set number only
    /// checks for a sibling clash and overwrites in place; use
    /// [`Self::reorder_set`] to shift siblings. Actual values are untouched.
    pub fn update_set(&mut self, id: u64, request: UpdateSetRequest) -> Result<Set> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let current = Self::set_row(&tx, id)?.ok_or(PlannerError::SetNotFound { id })?;

        let plan = guard::plan_ref_for_exercise(&tx, current.exercise_id)?;
        guard::assert_mutable(&plan)?;

        let new_number = match request.set_number {
            Some(number) if number != current.set_number => {
                let number_taken: bool = tx
                    .query_row(
                        CHECK_SET_NUMBER_SQL,
                        params![current.exercise_id as i64, number as i64],
                        |row| row.get(0),
                    )
                    .db_context("Failed to check set number")?;

                if number_taken {
                    return Err(PlannerError::DuplicateStructure {
                        kind: "Set",
                        ordinal: number,
                        parent_id: current.exercise_id,
                    });
                }

                number
            }
            _ => current.set_number,
        };

        let new_reps = request.target_reps.unwrap_or(current.target_reps);
        let new_weight = request.target_weight.or(current.target_weight);
        let new_rpe = request.target_rpe.or(current.target_rpe);

        let now_str = Timestamp::now().to_string();
        tx.execute(
            UPDATE_SET_TARGETS_SQL,
            params![
                new_number as i64,
                new_reps as i64,
                new_weight,
                new_rpe,
                &now_str,
                id as i64
            ],
        )
        .map_err(|e| PlannerError::database_error("Failed to update set", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        self.get_set(id)?.ok_or(PlannerError::SetNotFound { id })
    }

    /// Records a set as completed: all three actual values, the lifter
    /// notes and the completion flag are written together so the stored
    /// flag can never disagree with the actual fields.
    pub fn complete_set(&mut self, params: &CompleteSet) -> Result<Set> {
        let id = params.id;
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let plan = guard::plan_ref_for_set(&tx, id)?;
        guard::assert_mutable(&plan)?;

        let now_str = Timestamp::now().to_string();
        tx.execute(
            COMPLETE_SET_SQL,
            params![
                params.actual_reps as i64,
                params.actual_weight,
                params.actual_rpe,
                params.lifter_notes.as_deref(),
                &now_str,
                id as i64
            ],
        )
        .map_err(|e| PlannerError::database_error("Failed to complete set", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        self.get_set(id)?.ok_or(PlannerError::SetNotFound { id })
    }

    /// Clears a set's completion: all three actual values, the lifter notes
    /// and the flag are reset together.
    pub fn uncomplete_set(&mut self, id: u64) -> Result<Set> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let plan = guard::plan_ref_for_set(&tx, id)?;
        guard::assert_mutable(&plan)?;

        let now_str = Timestamp::now().to_string();
        tx.execute(UNCOMPLETE_SET_SQL, params![&now_str, id as i64])
            .map_err(|e| PlannerError::database_error("Failed to uncomplete set", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        self.get_set(id)?.ok_or(PlannerError::SetNotFound { id })
    }

    /// Deletes a set. Sibling sets keep their numbers; the gap is not
    /// closed.
    pub fn delete_set(&mut self, id: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let plan = guard::plan_ref_for_set(&tx, id)?;
        guard::assert_mutable(&plan)?;

        tx.execute(DELETE_SET_SQL, params![id as i64])
            .map_err(|e| PlannerError::database_error("Failed to delete set", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }

    /// Moves a set to a new position within its exercise, shifting the
    /// siblings between the old and new position in the same transaction.
    pub fn reorder_set(&mut self, id: u64, new_number: u32) -> Result<Set> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let current = Self::set_row(&tx, id)?.ok_or(PlannerError::SetNotFound { id })?;

        let plan = guard::plan_ref_for_exercise(&tx, current.exercise_id)?;
        guard::assert_mutable(&plan)?;

        let siblings = Self::set_siblings(&tx, current.exercise_id)?;
        let changes = ordering::reorder("reorder set", &siblings, id, new_number)?;

        let now_str = Timestamp::now().to_string();
        for change in &changes {
            tx.execute(
                UPDATE_SET_NUMBER_SQL,
                params![change.ordinal as i64, &now_str, change.id as i64],
            )
            .map_err(|e| PlannerError::database_error("Failed to update set number", e))?;
        }

        tx.commit().db_context("Failed to commit transaction")?;

        self.get_set(id)?.ok_or(PlannerError::SetNotFound { id })
    }

    /// Suggests the next set number for an exercise: max existing + 1, or 1.
    pub fn next_set_number(&self, exercise_id: u64) -> Result<u32> {
        guard::plan_ref_for_exercise(&self.connection, exercise_id)?;

        let max_number: Option<i64> = self
            .connection
            .query_row(MAX_SET_NUMBER_SQL, params![exercise_id as i64], |row| {
                row.get(0)
            })
            .db_context("Failed to query max set number")?;

        Ok(ordering::next_ordinal(max_number.map(|n| n as u32)))
    }

    /// Counts the completed sets of an exercise.
    pub fn completed_set_count(&self, exercise_id: u64) -> Result<u32> {
        guard::plan_ref_for_exercise(&self.connection, exercise_id)?;

        let count: i64 = self
            .connection
            .query_row(
                COUNT_COMPLETED_SETS_SQL,
                params![exercise_id as i64],
                |row| row.get(0),
            )
            .db_context("Failed to count completed sets")?;

        Ok(count as u32)
    }
}
