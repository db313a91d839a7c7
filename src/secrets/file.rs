//! JSON file secret provider.

use super::{AppSecret, SecretProvider};
use crate::error::{Error, Result};
use std::fs;
use std::path::PathBuf;

/// Reads the App secret from a JSON file.
///
/// Expected shape:
/// `{"app_id": "...", "installation_id": "...", "private_key": "..."}`
#[derive(Debug, Clone)]
pub struct FileSecretProvider {
    path: PathBuf,
}

impl FileSecretProvider {
    /// Create a provider backed by the given file
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SecretProvider for FileSecretProvider {
    fn credentials(&self) -> Result<AppSecret> {
        let content = fs::read_to_string(&self.path)
            .map_err(|e| Error::Secret(format!("failed to read {}: {e}", self.path.display())))?;

        serde_json::from_str(&content)
            .map_err(|e| Error::Secret(format!("failed to parse {}: {e}", self.path.display())))
    }
}
