//! Whole-collection JSON persistence for a keyed book.

use indexmap::IndexMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors during book persistence.
///
/// Only `save` surfaces these; a failed load is recovered as an empty book.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::PermissionDenied => StoreError::PermissionDenied { path: path.into() },
            _ => StoreError::Io {
                path: path.into(),
                source: error,
            },
        }
    }
}

/// Load/save of one keyed collection backed by a single JSON file.
///
/// Every save rewrites the whole collection in place. There is no temp-file
/// dance and no partial-write protection: a crash mid-write can corrupt the
/// file. At this scale that is an accepted limitation, and a corrupt or
/// missing file is recovered as an empty book on the next load.
#[derive(Debug)]
pub struct FileStore<T> {
    path: PathBuf,
    _record: PhantomData<T>,
}

impl<T> FileStore<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the collection from disk.
    ///
    /// An absent, unreadable, or unparsable file yields an empty map; this
    /// is silent recovery, not an error.
    pub fn load(&self) -> IndexMap<String, T> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) => {
                if err.kind() != io::ErrorKind::NotFound {
                    warn!(path = %self.path.display(), error = %err, "failed to read book, starting empty");
                }
                return IndexMap::new();
            }
        };
        match serde_json::from_str(&contents) {
            Ok(map) => map,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "failed to parse book, starting empty");
                IndexMap::new()
            }
        }
    }

    /// Writes the entire collection to disk, replacing the previous snapshot.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on serialization or I/O failure. Callers must
    /// treat this as fatal: durability can no longer be guaranteed.
    pub fn save(&self, data: &IndexMap<String, T>) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(data).map_err(|source| StoreError::Serialize {
            path: self.path.clone(),
            source,
        })?;
        std::fs::write(&self.path, json).map_err(|err| StoreError::from_io(&self.path, err))?;
        debug!(path = %self.path.display(), entries = data.len(), "book saved");
        Ok(())
    }
}
