//! secret-prompt - Main entry point.
//!
//! This binary is invoked by a credential-retrieval hook that needs a human
//! to type a secret. It shows exactly one prompt per invocation and writes
//! the entered text to stdout.
//!
//! # Usage
//!
//! ```bash
//! # Ask for the "database" credential of $username (masked input)
//! secret-prompt database
//!
//! # Ask for a one-time passcode (visible input)
//! secret-prompt Code
//!
//! # Headless use
//! secret-prompt --cli database
//! ```
//!
//! The secret-kind label is passed as the first command-line argument and
//! the account name is read from the `username` environment variable. The
//! secret is printed to stdout (as expected by the calling hook); every
//! diagnostic goes to stderr.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{ArgAction, Parser};
use secrecy::ExposeSecret;
use secret_prompt::prompt;
use secret_prompt_core::{
    username_from_env, PromptConfig, PromptError, SecretKind, SecretPrompt, DEFAULT_ICON,
    DEFAULT_TIMEOUT_SECS,
};
use tracing::{debug, error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Prompt for a password or one-time passcode in a native dialog.
#[derive(Parser)]
#[command(name = "secret-prompt")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Name of the secret being requested; the literal "Code" asks for a
    /// one-time passcode with visible input
    #[arg(value_name = "FIELD")]
    field: String,

    /// Seconds before the prompt gives up
    #[arg(short, long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Path to the dialog icon
    #[arg(long, value_name = "PATH", default_value = DEFAULT_ICON)]
    icon: PathBuf,

    /// Force the terminal prompt even when a display is available
    #[arg(long)]
    cli: bool,

    /// Increase log verbosity (-v = debug, -vv = trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only show errors
    #[arg(short, long)]
    quiet: bool,
}

fn setup_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    // RUST_LOG overrides the flag-derived level. Logs go to stderr: stdout
    // is reserved for the secret.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Build the prompt configuration for this invocation.
fn build_config(cli: &Cli, kind: &SecretKind, username: &str) -> PromptConfig {
    PromptConfig::for_kind(kind, username)
        .with_timeout(Duration::from_secs(cli.timeout))
        .with_icon(&cli.icon)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let kind = SecretKind::from_argument(&cli.field);
    let username = username_from_env();
    debug!(kind = %kind, timeout = cli.timeout, "Requesting secret");

    let config = build_config(&cli, &kind, &username);
    let backend = prompt::select_backend(cli.cli);

    match backend.prompt(config).await {
        Ok(secret) => {
            // Print the secret to stdout (this is what the calling hook
            // expects). Note: print! not println! - the caller does not
            // want a trailing newline.
            print!("{}", secret.expose_secret());

            // Flush to ensure the secret is written before we exit
            if std::io::stdout().flush().is_err() {
                return ExitCode::FAILURE;
            }

            // The SecretString will be zeroized when dropped
            ExitCode::SUCCESS
        }
        Err(e) => {
            // Cancel and timeout are logged distinctly but collapse to the
            // same failure status: the caller only learns that no secret
            // was obtained.
            match &e {
                PromptError::Cancelled => info!("Prompt cancelled by user"),
                PromptError::Timeout(seconds) => info!(seconds, "Prompt timed out"),
                _ => error!(error = %e, "Prompt failed"),
            }
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
