//! Document Loading
//!
//! Reads a DSL file to completion. Missing files and other I/O failures are
//! kept apart so the engine can word its single issue accordingly.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure to read a document
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Error reading file: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Full text of a document together with where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub path: PathBuf,
    pub content: String,
}

impl SourceDocument {
    /// Read the whole file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                DocumentError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                DocumentError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        log::debug!("Loaded {} ({} bytes)", path.display(), content.len());

        Ok(Self {
            path: path.to_path_buf(),
            content,
        })
    }
}
