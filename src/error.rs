//! Error types for the credential helper.

use thiserror::Error;

/// Result type alias using our [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while producing a credential
#[derive(Debug, Error)]
pub enum Error {
    /// Secret provider could not supply the App secret
    #[error("Secret retrieval failed: {0}")]
    Secret(String),

    /// Private key could not be loaded or the JWT could not be signed
    #[error("JWT signing failed: {0}")]
    Signing(String),

    /// A credential request line did not match the `key=value` format
    #[error("Invalid credential request line: {0:?}")]
    InvalidRequest(String),

    /// Installation id produced an unusable token exchange URL
    #[error("Invalid token exchange URL: {0}")]
    InvalidUrl(String),

    /// Network failure talking to the GitHub API
    #[error("Token exchange request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// GitHub API response could not be parsed
    #[error("Unexpected GitHub API response: {0}")]
    Api(String),

    /// Failure reading the credential request stream
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error leaves the helper unable to proceed at all.
    ///
    /// Fatal errors (no usable secret, a key that cannot sign, garbage on
    /// stdin) must produce no credential output; the binary logs them and
    /// exits immediately. Recoverable errors (URL construction, network,
    /// response parsing) bubble up so the caller decides the exit code.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Secret(_) | Self::Signing(_) | Self::InvalidRequest(_) | Self::Io(_)
        )
    }
}
