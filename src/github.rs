//! Installation access token exchange against the GitHub REST API.

use crate::credential::format_credential;
use crate::error::{Error, Result};
use crate::jwt::mint_jwt;
use crate::secrets::SecretProvider;
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Default GitHub REST API endpoint
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Request timeout for the token exchange
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Deserialize)]
struct AccessToken {
    token: String,
}

/// Client for exchanging an App JWT for an installation access token
pub struct GitHubAppClient {
    /// HTTP client for the exchange request
    http_client: Client,
    /// API base URL, overridable for tests
    api_base: String,
}

impl GitHubAppClient {
    /// Create a client against the public GitHub API.
    ///
    /// Honors `GITHUB_API_URL` (set by GitHub Actions, and useful for GitHub
    /// Enterprise Server) when present.
    pub fn new() -> Result<Self> {
        let api_base = std::env::var("GITHUB_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        Self::with_api_base(api_base)
    }

    /// Create a client against a custom API base URL
    pub fn with_api_base(api_base: impl Into<String>) -> Result<Self> {
        let http_client = Client::builder()
            .user_agent("git-credential-github-app")
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Api(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            api_base: api_base.into(),
        })
    }

    /// Exchange a signed App JWT for an installation access token.
    ///
    /// Validates the installation id before building the URL, so a malformed
    /// id fails without any network I/O.
    pub async fn exchange(&self, installation_id: &str, jwt: &str) -> Result<String> {
        // Installation ids are numeric; anything else would corrupt the URL path.
        if installation_id.is_empty() || !installation_id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidUrl(format!(
                "installation id is not numeric: {installation_id:?}"
            )));
        }

        let url = Url::parse(&format!(
            "{}/app/installations/{installation_id}/access_tokens",
            self.api_base
        ))
        .map_err(|e| Error::InvalidUrl(e.to_string()))?;

        debug!(installation_id, "exchanging App JWT for installation token");
        let response = self
            .http_client
            .post(url)
            .header("Authorization", format!("Bearer {jwt}"))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .send()
            .await?;

        let status = response.status();
        // Read the whole body up front so the connection is released even
        // when parsing fails.
        let body = response.text().await?;

        let access_token: AccessToken = serde_json::from_str(&body).map_err(|e| {
            Error::Api(format!(
                "failed to parse access token response (status {status}): {e}"
            ))
        })?;

        debug!("received installation access token");
        Ok(access_token.token)
    }
}

/// The end-to-end authentication flow: secret → JWT → exchange → response
pub struct Authenticator<P: SecretProvider> {
    secret_provider: P,
    client: GitHubAppClient,
}

impl<P: SecretProvider> Authenticator<P> {
    /// Create an authenticator against the public GitHub API
    pub fn new(secret_provider: P) -> Result<Self> {
        Ok(Self {
            secret_provider,
            client: GitHubAppClient::new()?,
        })
    }

    /// Create an authenticator with an explicit exchange client
    pub const fn with_client(secret_provider: P, client: GitHubAppClient) -> Self {
        Self {
            secret_provider,
            client,
        }
    }

    /// Produce the credential response block for a git `get` request
    pub async fn authenticate(&self) -> Result<String> {
        let secret = self.secret_provider.credentials()?;
        let jwt = mint_jwt(&secret, Utc::now())?;
        let token = self.client.exchange(&secret.installation_id, &jwt).await?;
        Ok(format_credential(&token))
    }
}
