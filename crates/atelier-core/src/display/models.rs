//! Display implementations for domain models.
//!
//! This module contains all Display trait implementations for the core domain
//! models, separated from the model definitions to maintain clean separation
//! of concerns.
//!
//! The Display implementations provide:
//! - Markdown-formatted output for rich terminal display
//! - Consistent formatting with status icons and structured sections
//! - Context-aware display behavior for different use cases

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{
    FlowStatus, LampStatus, Project, ProjectPhase, ProjectSummary, StagePlan, StageReport,
    StageUpload,
};

impl fmt::Display for ProjectPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for FlowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for LampStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Project No: {}", self.project_no)?;
        writeln!(f, "- Phase: {}", self.phase.as_str())?;
        if let Some(start) = &self.start_date {
            writeln!(f, "- Start date: {start}")?;
        }
        if let Some(days) = self.estimated_days {
            writeln!(f, "- Estimated days: {days}")?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        // Description as a paragraph
        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        Ok(())
    }
}

impl fmt::Display for ProjectSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} (ID: {}) ({}/8)",
            self.title, self.id, self.completed_stages
        )?;
        writeln!(f)?;

        writeln!(f, "- **Project No**: {}", self.project_no)?;
        writeln!(f, "- **Phase**: {}", self.phase.as_str())?;

        if let Some(start) = &self.start_date {
            writeln!(f, "- **Start date**: {start}")?;
        }
        if let Some(days) = self.estimated_days {
            writeln!(f, "- **Estimated days**: {days}")?;
        }

        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?; // Add blank line after each project

        Ok(())
    }
}

impl StageReport {
    /// Format the stage row using the compact display format.
    ///
    /// The lamp line only appears when the lamp is lit, keeping on-schedule
    /// plans quiet.
    fn fmt_stage(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            self.number,
            self.name,
            self.flow.with_icon()
        )?;
        writeln!(f)?;

        writeln!(
            f,
            "- Days: {} ({:.0}%)",
            self.days,
            self.weight * 100.0
        )?;
        writeln!(f, "- Planned: {} to {}", self.planned_start, self.planned_end)?;

        if self.lamp != LampStatus::None {
            if self.overdue_days > 0 {
                writeln!(
                    f,
                    "- Lamp: {} (overdue {} days)",
                    self.lamp.with_icon(),
                    self.overdue_days
                )?;
            } else {
                writeln!(f, "- Lamp: {}", self.lamp.with_icon())?;
            }
        }
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for StageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_stage(f)
    }
}

impl fmt::Display for StagePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Stage Plan: {}", self.project_no)?;
        writeln!(f)?;

        writeln!(f, "- Start date: {}", self.start_date)?;
        writeln!(f, "- Total days: {}", self.total_days)?;
        writeln!(f)?;

        for stage in &self.stages {
            write!(f, "{stage}")?;
        }

        Ok(())
    }
}

impl fmt::Display for StageUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- Stage {}: {} (uploaded {})",
            self.stage_no,
            self.file_name,
            LocalDateTime(&self.uploaded_at)
        )
    }
}
