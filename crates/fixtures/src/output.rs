//! Reading and writing fixture documents as pretty-printed JSON files.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Writes a document to `path` as pretty-printed JSON.
pub fn write_document<T: Serialize>(path: impl AsRef<Path>, document: &T) -> Result<(), WriteError> {
    let json = serde_json::to_string_pretty(document)?;
    fs::write(path, json)?;
    Ok(())
}

/// Reads a document back from `path`.
pub fn read_document<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, WriteError> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}
