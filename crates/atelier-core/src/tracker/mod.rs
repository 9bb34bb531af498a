//! High-level tracker API for managing projects and stage plans.
//!
//! This module provides the main [`Tracker`] interface for the Atelier stage
//! tracking system. The tracker coordinates between the application layers,
//! the SQLite stores, and the planning engine.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │ (project_,      │───▶│ (project_ops,   │───▶│   (via db/)     │
//! │  plan_handlers) │    │  upload_ops)    │    │                 │
//! └─────────────────┘    └────────┬────────┘    └─────────────────┘
//!                                 │
//!                                 ▼
//!                        ┌─────────────────┐
//!                        │  Engine (pure)  │
//!                        │ allocate/layout │
//!                        │   /classify     │
//!                        └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Tracker`] instances
//! - [`project_handlers`]: High-level project operations (create, list,
//!   show, update, delete)
//! - [`plan_handlers`]: Stage-plan computation and upload recording
//! - [`project_ops`] / [`upload_ops`]: Lower-level database operations
//!
//! All database access runs on blocking tasks; the engine itself is pure and
//! runs inline. The completion set and stage names are snapshotted before
//! the engine is invoked, so a plan never observes mid-computation changes.

use std::path::PathBuf;

// Module declarations
pub mod builder;
pub mod plan_handlers;
pub mod project_handlers;
pub mod project_ops;
pub mod upload_ops;

#[cfg(test)]
mod tests;

// Re-export the main types
pub use builder::TrackerBuilder;

/// Main tracker interface for managing projects and stage plans.
pub struct Tracker {
    pub(crate) db_path: PathBuf,
}

impl Tracker {
    /// Creates a new tracker with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}
