//! Shared test fixtures
//!
//! These are test utilities - not all may be used in every test file.

#![allow(dead_code)]

use git_credential_github_app::error::{Error, Result};
use git_credential_github_app::secrets::{AppSecret, SecretProvider};

/// PEM-encoded RSA private key used only by tests
pub const TEST_PRIVATE_KEY: &str = include_str!("../fixtures/test-app-key.pem");

/// Matching public key for verifying test JWTs
pub const TEST_PUBLIC_KEY: &str = include_str!("../fixtures/test-app-key.pub.pem");

/// App ID used across test secrets
pub const TEST_APP_ID: &str = "123456";

/// Build an [`AppSecret`] backed by the test keypair
pub fn test_secret(installation_id: &str) -> AppSecret {
    AppSecret {
        app_id: TEST_APP_ID.to_string(),
        installation_id: installation_id.to_string(),
        private_key: TEST_PRIVATE_KEY.to_string(),
    }
}

/// Secret provider returning a fixed secret
pub struct StaticSecretProvider(pub AppSecret);

impl SecretProvider for StaticSecretProvider {
    fn credentials(&self) -> Result<AppSecret> {
        Ok(self.0.clone())
    }
}

/// Secret provider that always fails
pub struct FailingSecretProvider;

impl SecretProvider for FailingSecretProvider {
    fn credentials(&self) -> Result<AppSecret> {
        Err(Error::Secret("no secret available".to_string()))
    }
}
