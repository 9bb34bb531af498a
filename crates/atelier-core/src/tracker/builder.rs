//! Builder for creating and configuring Tracker instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Tracker;
use crate::{
    db::Database,
    error::{PlanError, Result},
};

/// Builder for creating and configuring Tracker instances.
#[derive(Debug, Clone)]
pub struct TrackerBuilder {
    database_path: Option<PathBuf>,
}

impl TrackerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/atelier/atelier.db` or
    /// `~/.local/share/atelier/atelier.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured tracker instance.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::FileSystem` if the database path is invalid
    /// Returns `PlanError::Database` if database initialization fails
    pub async fn build(self) -> Result<Tracker> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| PlanError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), PlanError>(())
        })
        .await
        .map_err(|e| PlanError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(Tracker::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("atelier")
            .place_data_file("atelier.db")
            .map_err(|e| PlanError::XdgDirectory(e.to_string()))
    }
}

impl Default for TrackerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
