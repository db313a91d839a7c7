//! Short-lived App JWT minting.
//!
//! GitHub authenticates an App by an RS256-signed JWT whose issuer is the
//! App ID. The token is built fresh for every credential request and never
//! persisted.

use crate::error::{Error, Result};
use crate::secrets::AppSecret;
use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};

/// JWT lifetime. GitHub caps App JWTs at 10 minutes; 5 stays well clear.
const LIFETIME_SECS: i64 = 5 * 60;

/// Backdate `nbf` to tolerate clock skew between us and GitHub.
const SKEW_SECS: i64 = 30;

/// Registered claims for the App JWT
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Issuer: the GitHub App ID
    pub iss: String,
    /// Issued-at, seconds since the epoch
    pub iat: i64,
    /// Expiry, seconds since the epoch
    pub exp: i64,
    /// Not-before, seconds since the epoch
    pub nbf: i64,
}

impl Claims {
    /// Build claims for `app_id` as of `issued_at`
    #[must_use]
    pub fn new(app_id: &str, issued_at: DateTime<Utc>) -> Self {
        let iat = issued_at.timestamp();
        Self {
            iss: app_id.to_string(),
            iat,
            exp: iat + LIFETIME_SECS,
            nbf: iat - SKEW_SECS,
        }
    }
}

/// Mint an RS256-signed App JWT from the secret's private key.
///
/// `issued_at` is injected rather than read from the clock here so claim
/// arithmetic is testable; callers pass [`Utc::now`].
pub fn mint_jwt(secret: &AppSecret, issued_at: DateTime<Utc>) -> Result<String> {
    let key = EncodingKey::from_rsa_pem(secret.private_key.as_bytes())
        .map_err(|e| Error::Signing(format!("failed to load RSA private key: {e}")))?;

    let claims = Claims::new(&secret.app_id, issued_at);

    encode(&Header::new(Algorithm::RS256), &claims, &key)
        .map_err(|e| Error::Signing(format!("failed to sign JWT: {e}")))
}
