//! Secret providers for GitHub App credentials
//!
//! The authentication flow depends only on the [`SecretProvider`] trait,
//! keeping it agnostic to where secrets actually live (environment, file,
//! secret manager).

mod env;
mod file;

pub use env::EnvSecretProvider;
pub use file::FileSecretProvider;

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Credentials for authenticating as a GitHub App installation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSecret {
    /// GitHub App ID, used as the JWT issuer claim
    pub app_id: String,
    /// Installation ID to mint access tokens for
    pub installation_id: String,
    /// PEM-encoded RSA private key for the App
    pub private_key: String,
}

/// Anything that can supply the [`AppSecret`] for authentication
pub trait SecretProvider {
    /// Retrieve the App secret
    fn credentials(&self) -> Result<AppSecret>;
}
