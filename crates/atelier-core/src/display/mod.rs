//! Display formatting functions and result types.
//!
//! This module provides helper functions for formatting collections and
//! wrapper types for operation results, enabling consistent formatting across
//! different output contexts (lists, operations, plans).
//!
//! The Display architecture combines direct Display implementations on domain
//! models with newtype wrappers for collections and operation results. All
//! formatters produce markdown for rich terminal display.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Format Wrappers │    │   Formatted     │
//! │ (Project, Plan) │───▶│ & Result Types  │───▶│    Output       │
//! │                 │    │                 │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (ProjectSummaries, StageUploads)
//! - [`results`]: Operation result types (CreateResult, UpdateResult, DeleteResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::{ProjectSummaries, StageUploads};
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
