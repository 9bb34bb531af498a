//! Stage upload model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A recorded completion artifact for one stage of a project.
///
/// A stage counts as completed when at least one upload row exists for it;
/// the set of distinct stage numbers with uploads forms the completion set
/// consumed by the planning engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StageUpload {
    /// Unique identifier for the upload row
    pub id: u64,

    /// Project number the artifact belongs to
    pub project_no: String,

    /// Stage number (1..=8) the artifact completes
    pub stage_no: u8,

    /// Name of the uploaded file
    pub file_name: String,

    /// Timestamp when the upload was recorded (UTC)
    pub uploaded_at: Timestamp,
}
