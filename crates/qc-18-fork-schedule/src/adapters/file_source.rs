//! File Genesis Source Adapter
//!
//! Implements `GenesisSource` for a JSON genesis file on disk.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::domain::{ScheduleError, ScheduleResult};
use crate::ports::outbound::GenesisSource;

/// Genesis document read from a file on every call.
#[derive(Clone, Debug)]
pub struct FileGenesisSource {
    path: PathBuf,
}

impl FileGenesisSource {
    /// Create a source for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the genesis file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GenesisSource for FileGenesisSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read_document(&self) -> ScheduleResult<Value> {
        let contents = fs::read_to_string(&self.path).map_err(|e| ScheduleError::Io {
            path: self.describe(),
            message: e.to_string(),
        })?;
        debug!(path = %self.path.display(), bytes = contents.len(), "Read genesis file");
        serde_json::from_str(&contents).map_err(|e| ScheduleError::InvalidJson(e.to_string()))
    }
}
