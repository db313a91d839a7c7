//! Git credential protocol parsing and formatting.
//!
//! Git talks to credential helpers in a line-oriented `key=value` format,
//! terminated by a blank line. This module parses the incoming request and
//! formats the outgoing response block.

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::io::BufRead;

/// A parsed git credential request
#[derive(Debug, Clone, Default)]
pub struct CredentialRequest {
    attributes: HashMap<String, String>,
}

impl CredentialRequest {
    /// Parse a credential request from a reader.
    ///
    /// Reads `key = value` lines until a blank line or end of stream,
    /// trimming whitespace around key and value. A later duplicate of a key
    /// overwrites the earlier value. A line without `=` is rejected as
    /// [`Error::InvalidRequest`] rather than silently skipped, so a
    /// malformed request never produces a credential.
    pub fn parse(reader: impl BufRead) -> Result<Self> {
        let mut attributes = HashMap::new();

        for line in reader.lines() {
            let line = line?;
            if line.is_empty() {
                break;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(Error::InvalidRequest(line));
            };

            attributes.insert(key.trim().to_string(), value.trim().to_string());
        }

        Ok(Self { attributes })
    }

    /// Look up a request attribute
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Whether this request targets GitHub over HTTPS.
    ///
    /// The helper can be registered for all of a user's remotes; it only
    /// acts on `protocol=https` + `host=github.com` and stays silent for
    /// everything else so git falls through to the next helper.
    #[must_use]
    pub fn is_github_https(&self) -> bool {
        self.get("protocol") == Some("https") && self.get("host") == Some("github.com")
    }
}

/// Format the credential response block for an installation access token.
///
/// The `capability=authtype` / `authtype=bearer` pair tells git to send the
/// token as a bearer credential instead of basic auth.
#[must_use]
pub fn format_credential(token: &str) -> String {
    format!(
        "protocol=https\nhost=github.com\ncapability=authtype\nauthtype=bearer\ncredential={token}\n"
    )
}
