//! Errors raised while loading a content file.

use crate::EntityId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to read content file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid content JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate entity id '{0}' in content tree")]
    DuplicateId(EntityId),
}

pub type ContentResult<T> = Result<T, ContentError>;
