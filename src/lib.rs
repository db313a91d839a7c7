//! Git credential helper that authenticates as a GitHub App installation.
//!
//! Reads a git credential request from stdin, and if it targets GitHub over
//! HTTPS, mints a short-lived RS256-signed JWT from the App's private key,
//! exchanges it for an installation access token via the GitHub REST API,
//! and prints a credential response block git can consume.

pub mod credential;
pub mod error;
pub mod github;
pub mod jwt;
pub mod secrets;
