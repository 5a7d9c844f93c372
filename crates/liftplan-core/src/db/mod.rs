//! Database operations and SQLite management for the plan hierarchy.
//!
//! This module provides the persistence layer for LiftPlan. It handles the
//! SQLite connection, schema management, and the per-entity query interfaces
//! (plans, weeks, days, exercises, sets).
//!
//! Every structural mutation runs inside a single transaction: the
//! plan-active guard, the sibling-ordinal checks and the row writes either
//! all commit or all roll back, so a reader never observes a sibling set
//! with duplicate ordinals or a half-applied reorder.

use std::path::Path;

use jiff::Timestamp;
use rusqlite::{types::Type, Connection};

use crate::error::{DatabaseResultExt, Result};

pub mod day_queries;
pub mod exercise_queries;
pub mod guard;
pub mod migrations;
pub mod plan_queries;
pub mod set_queries;
pub mod week_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

/// Reads a TEXT column holding an RFC 3339 timestamp.
pub(crate) fn timestamp_column(row: &rusqlite::Row, idx: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(idx)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Reads an INTEGER column as an unsigned id.
pub(crate) fn id_column(row: &rusqlite::Row, idx: usize) -> rusqlite::Result<u64> {
    Ok(row.get::<_, i64>(idx)? as u64)
}

/// Reads an INTEGER column as a 1-based ordinal.
pub(crate) fn ordinal_column(row: &rusqlite::Row, idx: usize) -> rusqlite::Result<u32> {
    Ok(row.get::<_, i64>(idx)? as u32)
}
