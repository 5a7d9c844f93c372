//! Plan-active resolution for the structural mutation guard.
//!
//! Every create/update/delete/reorder/complete operation on a node below the
//! plan must first resolve the owning plan and verify it is active. These
//! helpers walk the parent chain with a single join query per entity kind
//! and work on any `Connection`, including an open transaction.

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{DatabaseResultExt, PlannerError, Result};

const PLAN_REF_SQL: &str = "SELECT id, is_active, total_weeks FROM plans WHERE id = ?1";
const PLAN_REF_FOR_WEEK_SQL: &str = "SELECT p.id, p.is_active, p.total_weeks FROM plans p \
     JOIN weeks w ON w.plan_id = p.id WHERE w.id = ?1";
const PLAN_REF_FOR_DAY_SQL: &str = "SELECT p.id, p.is_active, p.total_weeks FROM plans p \
     JOIN weeks w ON w.plan_id = p.id \
     JOIN days d ON d.week_id = w.id WHERE d.id = ?1";
const PLAN_REF_FOR_EXERCISE_SQL: &str = "SELECT p.id, p.is_active, p.total_weeks FROM plans p \
     JOIN weeks w ON w.plan_id = p.id \
     JOIN days d ON d.week_id = w.id \
     JOIN exercises e ON e.day_id = d.id WHERE e.id = ?1";
const PLAN_REF_FOR_SET_SQL: &str = "SELECT p.id, p.is_active, p.total_weeks FROM plans p \
     JOIN weeks w ON w.plan_id = p.id \
     JOIN days d ON d.week_id = w.id \
     JOIN exercises e ON e.day_id = d.id \
     JOIN sets s ON s.exercise_id = e.id WHERE s.id = ?1";

/// The owning plan's fields needed by the guard and the week range check.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PlanRef {
    pub id: u64,
    pub is_active: bool,
    pub total_weeks: u32,
}

fn query_plan_ref(conn: &Connection, sql: &str, id: u64) -> Result<Option<PlanRef>> {
    conn.query_row(sql, params![id as i64], |row| {
        Ok(PlanRef {
            id: row.get::<_, i64>(0)? as u64,
            is_active: row.get(1)?,
            total_weeks: row.get::<_, i64>(2)? as u32,
        })
    })
    .optional()
    .db_context("Failed to resolve owning plan")
}

/// Resolves a plan by its own id.
pub(crate) fn plan_ref(conn: &Connection, plan_id: u64) -> Result<PlanRef> {
    query_plan_ref(conn, PLAN_REF_SQL, plan_id)?
        .ok_or(PlannerError::PlanNotFound { id: plan_id })
}

/// Resolves the plan owning a week.
pub(crate) fn plan_ref_for_week(conn: &Connection, week_id: u64) -> Result<PlanRef> {
    query_plan_ref(conn, PLAN_REF_FOR_WEEK_SQL, week_id)?
        .ok_or(PlannerError::WeekNotFound { id: week_id })
}

/// Resolves the plan owning a day.
pub(crate) fn plan_ref_for_day(conn: &Connection, day_id: u64) -> Result<PlanRef> {
    query_plan_ref(conn, PLAN_REF_FOR_DAY_SQL, day_id)?
        .ok_or(PlannerError::DayNotFound { id: day_id })
}

/// Resolves the plan owning an exercise.
pub(crate) fn plan_ref_for_exercise(conn: &Connection, exercise_id: u64) -> Result<PlanRef> {
    query_plan_ref(conn, PLAN_REF_FOR_EXERCISE_SQL, exercise_id)?
        .ok_or(PlannerError::ExerciseNotFound { id: exercise_id })
}

/// Resolves the plan owning a set.
pub(crate) fn plan_ref_for_set(conn: &Connection, set_id: u64) -> Result<PlanRef> {
    query_plan_ref(conn, PLAN_REF_FOR_SET_SQL, set_id)?
        .ok_or(PlannerError::SetNotFound { id: set_id })
}

/// Rejects structural mutation under an inactive plan.
pub(crate) fn assert_mutable(plan: &PlanRef) -> Result<()> {
    if plan.is_active {
        Ok(())
    } else {
        Err(PlannerError::PlanInactive { id: plan.id })
    }
}
