//! Entry point for the git credential helper.

use clap::{Parser, ValueEnum};
use git_credential_github_app::credential::CredentialRequest;
use git_credential_github_app::error::Result;
use git_credential_github_app::github::Authenticator;
use git_credential_github_app::secrets::{EnvSecretProvider, FileSecretProvider};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Credential operations git invokes helpers with
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Operation {
    /// Produce a credential for the request on stdin
    Get,
    /// Store a credential (not supported; ignored)
    Store,
    /// Erase a credential (not supported; ignored)
    Erase,
}

#[derive(Debug, Parser)]
#[command(name = "git-credential-github-app", version, about)]
struct Cli {
    /// Credential operation requested by git (defaults to get)
    #[arg(value_enum)]
    operation: Option<Operation>,

    /// Read the App secret from a JSON file instead of the environment
    #[arg(long, value_name = "PATH")]
    secrets_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout is reserved for the credential response.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            // Fatal errors (no secret, unsignable key, malformed request)
            // get a distinct exit code; either way no partial credential
            // output has been emitted.
            if e.is_fatal() {
                ExitCode::from(2)
            } else {
                ExitCode::from(1)
            }
        }
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let operation = cli.operation.unwrap_or(Operation::Get);
    if operation != Operation::Get {
        // Helpers must silently ignore operations they don't support.
        debug!(?operation, "unsupported operation, ignoring");
        return Ok(());
    }

    let request = CredentialRequest::parse(std::io::stdin().lock())?;
    if !request.is_github_https() {
        debug!("request is not for GitHub over HTTPS, staying silent");
        return Ok(());
    }

    let output = match &cli.secrets_file {
        Some(path) => {
            Authenticator::new(FileSecretProvider::new(path))?
                .authenticate()
                .await?
        }
        None => Authenticator::new(EnvSecretProvider)?.authenticate().await?,
    };

    print!("{output}");
    Ok(())
}
