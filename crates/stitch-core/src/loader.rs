//! Document loading -- turn a reference string into a parsed JSON value.
//!
//! All references resolve against one fixed base directory, never against
//! the directory of the document that contains them. A fragment referenced
//! from `./a/b/data.json` as `"./c/data.json"` is looked up at
//! `<base>/c/data.json`, not `<base>/a/b/c/data.json`.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::error::{Result, StitchError};

/// Source of JSON documents, addressed by reference string.
///
/// Implementations must not cache: identical references requested twice
/// are read and parsed twice.
#[async_trait]
pub trait Loader: Send + Sync {
    /// Read and parse the document named by `reference`.
    async fn load(&self, reference: &str) -> Result<Value>;
}

/// Loads documents from disk relative to a fixed base directory.
#[derive(Debug, Clone)]
pub struct FsLoader {
    base_dir: PathBuf,
}

impl FsLoader {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Absolute (or base-relative, if the base itself is relative) location
    /// of `reference`. Absolute references replace the base entirely.
    pub fn resolve_path(&self, reference: &str) -> PathBuf {
        self.base_dir.join(reference)
    }
}

#[async_trait]
impl Loader for FsLoader {
    async fn load(&self, reference: &str) -> Result<Value> {
        let path = self.resolve_path(reference);
        debug!(reference, path = %path.display(), "loading document");

        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|source| StitchError::Io {
                path: path.clone(),
                source,
            })?;
        serde_json::from_slice(&bytes).map_err(|source| StitchError::Parse { path, source })
    }
}

/// Serves documents from memory, keyed by the exact reference string.
///
/// Stores raw JSON text and parses it on every load, so malformed entries
/// surface as [`StitchError::Parse`] exactly like malformed files do.
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    documents: BTreeMap<String, String>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, reference: impl Into<String>, json: impl Into<String>) -> Self {
        self.insert(reference, json);
        self
    }

    pub fn insert(&mut self, reference: impl Into<String>, json: impl Into<String>) {
        self.documents.insert(reference.into(), json.into());
    }
}

#[async_trait]
impl Loader for MemoryLoader {
    async fn load(&self, reference: &str) -> Result<Value> {
        debug!(reference, "loading in-memory document");
        let path = PathBuf::from(reference);
        let text = self.documents.get(reference).ok_or_else(|| StitchError::Io {
            path: path.clone(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such in-memory document"),
        })?;
        serde_json::from_str(text).map_err(|source| StitchError::Parse { path, source })
    }
}
