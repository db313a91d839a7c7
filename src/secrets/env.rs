//! Environment-variable secret provider.

use super::{AppSecret, SecretProvider};
use crate::error::{Error, Result};
use std::env;
use std::fs;

/// Environment variable holding the App ID.
pub const APP_ID_VAR: &str = "GITHUB_APP_ID";
/// Environment variable holding the installation ID.
pub const INSTALLATION_ID_VAR: &str = "GITHUB_APP_INSTALLATION_ID";
/// Environment variable holding the PEM private key inline.
pub const PRIVATE_KEY_VAR: &str = "GITHUB_APP_PRIVATE_KEY";
/// Environment variable pointing at a PEM private key file.
pub const PRIVATE_KEY_PATH_VAR: &str = "GITHUB_APP_PRIVATE_KEY_PATH";

/// Reads the App secret from `GITHUB_APP_*` environment variables.
///
/// The private key may be supplied inline via [`PRIVATE_KEY_VAR`] or as a
/// file path via [`PRIVATE_KEY_PATH_VAR`]; the inline form wins when both
/// are set.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSecretProvider;

fn require(var: &str) -> Result<String> {
    env::var(var).map_err(|_| Error::Secret(format!("{var} is not set")))
}

impl SecretProvider for EnvSecretProvider {
    fn credentials(&self) -> Result<AppSecret> {
        let app_id = require(APP_ID_VAR)?;
        let installation_id = require(INSTALLATION_ID_VAR)?;

        let private_key = if let Ok(key) = env::var(PRIVATE_KEY_VAR) {
            key
        } else {
            let path = env::var(PRIVATE_KEY_PATH_VAR).map_err(|_| {
                Error::Secret(format!(
                    "neither {PRIVATE_KEY_VAR} nor {PRIVATE_KEY_PATH_VAR} is set"
                ))
            })?;
            fs::read_to_string(&path)
                .map_err(|e| Error::Secret(format!("failed to read {path}: {e}")))?
        };

        Ok(AppSecret {
            app_id,
            installation_id,
            private_key,
        })
    }
}
