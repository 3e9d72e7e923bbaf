//! # Catalog Sources
//!
//! Where the offers and courses come from. The browser only ever sees a
//! [`CatalogSnapshot`]; a refresh asks the source for a new one.

use std::fmt;
use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use log::{debug, info};

use crate::core::catalog::CatalogSnapshot;

/// Errors that can occur while loading a snapshot.
#[derive(Debug)]
pub enum SourceError {
    /// The snapshot could not be read.
    Io { path: PathBuf, source: io::Error },
    /// The snapshot is not valid catalog JSON.
    Parse { path: PathBuf, source: serde_json::Error },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Io { path, source } => {
                write!(f, "cannot read catalog {}: {source}", path.display())
            }
            SourceError::Parse { path, source } => {
                write!(f, "invalid catalog {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SourceError::Io { source, .. } => Some(source),
            SourceError::Parse { source, .. } => Some(source),
        }
    }
}

#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Short human-readable description, shown in the status bar.
    fn name(&self) -> String;

    /// Fetches a fresh snapshot of both collections.
    async fn load(&self) -> Result<CatalogSnapshot, SourceError>;
}

/// Reads `{ "offers": [...], "courses": [...] }` from a JSON file.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for JsonFileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> Result<CatalogSnapshot, SourceError> {
        debug!("Loading catalog from {}", self.path.display());
        let json = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.clone(),
                source,
            })?;
        let snapshot: CatalogSnapshot =
            serde_json::from_str(&json).map_err(|source| SourceError::Parse {
                path: self.path.clone(),
                source,
            })?;
        info!(
            "Loaded {} offers and {} courses from {}",
            snapshot.offers.len(),
            snapshot.courses.len(),
            self.path.display()
        );
        Ok(snapshot)
    }
}
