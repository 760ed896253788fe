use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

/// Date key to opaque mood value
pub type MoodDocument = BTreeMap<String, Value>;

/// Errors raised by the backing file
#[derive(Debug, Error)]
pub enum StoreError {
    /// The document could not be serialized
    #[error("{0}")]
    Encode(#[from] serde_json::Error),
    /// The backing file could not be written
    #[error("{source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The backing file could not be removed
    #[error("{source}")]
    Delete {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// File-backed mood document.
///
/// Holds no copy of the document: every call goes to disk, so the file stays
/// the single source of truth. There is no locking between writers.
#[derive(Debug, Clone)]
pub struct MoodStore {
    path: PathBuf,
}

impl MoodStore {
    /// Create a store backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the whole document.
    ///
    /// A missing file yields an empty document. So does a file that cannot be
    /// read or parsed; that failure is logged and otherwise swallowed.
    pub fn load(&self) -> MoodDocument {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No mood file at {}, starting empty", self.path.display());
                return MoodDocument::new();
            }
            Err(e) => {
                warn!("Failed to read mood file {}: {}", self.path.display(), e);
                return MoodDocument::new();
            }
        };

        match serde_json::from_str::<MoodDocument>(&contents) {
            Ok(doc) => {
                debug!("Loaded {} moods from {}", doc.len(), self.path.display());
                doc
            }
            Err(e) => {
                warn!("Ignoring corrupt mood file {}: {}", self.path.display(), e);
                MoodDocument::new()
            }
        }
    }

    /// Overwrite the backing file with `doc`
    pub fn save(&self, doc: &MoodDocument) -> Result<(), StoreError> {
        let encoded = serde_json::to_vec_pretty(doc)?;
        fs::write(&self.path, encoded).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;
        debug!("Saved {} moods to {}", doc.len(), self.path.display());
        Ok(())
    }

    /// Remove the backing file. A file that is already gone is not an error.
    pub fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("Removed mood file {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Delete {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
