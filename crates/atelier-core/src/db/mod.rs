//! Database operations and SQLite management for projects and stage uploads.
//!
//! This module provides low-level database operations for the Atelier stage
//! tracking system. It handles SQLite database connections, schema
//! management, and specialized query interfaces for projects, stage uploads,
//! and stage-name overrides.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod migrations;
pub mod project_queries;
pub mod stage_queries;
pub mod upload_queries;

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
