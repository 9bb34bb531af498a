//! Collection wrapper types for displaying groups of domain objects.
//!
//! This module provides wrapper types that format collections of domain
//! objects with consistent structure and empty collection handling.

use std::{fmt, ops::Index};

use crate::models::{ProjectSummary, StageUpload};

/// Newtype wrapper for displaying collections of project summaries.
///
/// This provides clean Display formatting for project collections without
/// title handling, allowing consumers to handle titles separately. Handles
/// empty collections gracefully.
pub struct ProjectSummaries(pub Vec<ProjectSummary>);

impl ProjectSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of project summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the project summary at the given index.
    pub fn get(&self, index: usize) -> Option<&ProjectSummary> {
        self.0.get(index)
    }

    /// Get an iterator over the project summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, ProjectSummary> {
        self.0.iter()
    }
}

impl Index<usize> for ProjectSummaries {
    type Output = ProjectSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for ProjectSummaries {
    type Item = ProjectSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ProjectSummaries {
    type Item = &'a ProjectSummary;
    type IntoIter = std::slice::Iter<'a, ProjectSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ProjectSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No projects found.")
        } else {
            for project in &self.0 {
                write!(f, "{project}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying collections of stage uploads.
///
/// Formats each upload as a single list line; empty collections render a
/// friendly message instead of nothing.
pub struct StageUploads(pub Vec<StageUpload>);

impl StageUploads {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of uploads in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the upload at the given index.
    pub fn get(&self, index: usize) -> Option<&StageUpload> {
        self.0.get(index)
    }

    /// Get an iterator over the uploads.
    pub fn iter(&self) -> std::slice::Iter<'_, StageUpload> {
        self.0.iter()
    }
}

impl Index<usize> for StageUploads {
    type Output = StageUpload;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for StageUploads {
    type Item = StageUpload;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a StageUploads {
    type Item = &'a StageUpload;
    type IntoIter = std::slice::Iter<'a, StageUpload>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for StageUploads {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No uploads found.")
        } else {
            for upload in &self.0 {
                write!(f, "{upload}")?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::{civil::date, Timestamp};

    use super::*;
    use crate::models::ProjectPhase;

    fn create_test_summary() -> ProjectSummary {
        ProjectSummary {
            id: 1,
            project_no: "20250001".to_string(),
            title: "Test Project".to_string(),
            phase: ProjectPhase::Design,
            start_date: Some(date(2025, 1, 1)),
            estimated_days: Some(100),
            completed_stages: 2,
            created_at: Timestamp::from_second(1735689600).unwrap(), // 2025-01-01 00:00:00 UTC
        }
    }

    fn create_test_upload() -> StageUpload {
        StageUpload {
            id: 1,
            project_no: "20250001".to_string(),
            stage_no: 3,
            file_name: "layout.pdf".to_string(),
            uploaded_at: Timestamp::from_second(1735689600).unwrap(),
        }
    }

    #[test]
    fn project_summaries_display() {
        let summaries = ProjectSummaries(vec![create_test_summary()]);
        let output = format!("{summaries}");
        assert!(output.contains("Test Project"));
        assert!(output.contains("ID: 1"));
        assert!(output.contains("(2/8)"));
        assert!(output.contains("20250001"));

        let empty = ProjectSummaries(vec![]);
        assert_eq!(format!("{empty}"), "No projects found.\n");

        let mut second = create_test_summary();
        second.id = 2;
        second.title = "Second Project".to_string();
        let summaries = ProjectSummaries(vec![create_test_summary(), second]);
        let output = format!("{summaries}");
        assert!(output.contains("## Test Project"));
        assert!(output.contains("## Second Project"));
        assert!(!output.starts_with("# "));
    }

    #[test]
    fn stage_uploads_display() {
        let uploads = StageUploads(vec![create_test_upload()]);
        let output = format!("{uploads}");
        assert!(output.contains("Stage 3"));
        assert!(output.contains("layout.pdf"));

        let empty = StageUploads(vec![]);
        assert_eq!(format!("{empty}"), "No uploads found.\n");
    }
}
