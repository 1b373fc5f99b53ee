//! Terminal secret prompt for headless systems.
//!
//! This module provides a terminal-based fallback for sessions without a
//! display server, using `rpassword` for masked input (no echo). The prompt
//! text goes to stderr because stdout is reserved for the secret itself.

use std::future::Future;
use std::io::{self, BufRead, Write};
use std::pin::Pin;

use secrecy::SecretString;
use secret_prompt_core::{PromptConfig, PromptError, SecretPrompt};
use tracing::debug;
use zeroize::Zeroize;

/// Terminal-based secret prompt.
///
/// This implementation reads the answer from the terminal, with the same
/// timeout the dialog backends enforce.
pub struct CliSecretPrompt;

impl CliSecretPrompt {
    /// Create a new terminal prompt.
    pub fn new() -> Self {
        Self
    }
}

impl Default for CliSecretPrompt {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip one trailing line ending, leaving the rest of the answer verbatim.
fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}

fn read_answer(config: &PromptConfig) -> Result<SecretString, PromptError> {
    eprint!("{} ", config.prompt_text);
    io::stderr()
        .flush()
        .map_err(|e| PromptError::UiError(format!("Failed to flush stderr: {}", e)))?;

    if config.echo {
        // One-time passcodes are entered visibly, matching the dialog.
        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| PromptError::UiError(format!("Failed to read input: {}", e)))?;
        if read == 0 {
            return Err(PromptError::Cancelled);
        }

        let answer = strip_line_ending(&line).to_string();
        line.zeroize();

        debug!("Passcode entered via terminal");
        Ok(SecretString::from(answer))
    } else {
        let password = match rpassword::read_password() {
            Ok(password) => password,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                return Err(PromptError::Cancelled);
            }
            Err(e) => {
                return Err(PromptError::UiError(format!(
                    "Failed to read password: {}",
                    e
                )));
            }
        };

        debug!("Password entered via terminal");
        Ok(SecretString::from(password))
    }
}

impl SecretPrompt for CliSecretPrompt {
    fn prompt(
        &self,
        config: PromptConfig,
    ) -> Pin<Box<dyn Future<Output = Result<SecretString, PromptError>> + Send + '_>> {
        Box::pin(async move {
            let timeout = config.timeout;

            // The read blocks on stdin, so it runs on a blocking task with
            // the deadline enforced from the async side. The task itself
            // cannot be aborted mid-read; the process exits right after a
            // timeout, which tears it down.
            let read = tokio::task::spawn_blocking(move || read_answer(&config));

            match tokio::time::timeout(timeout, read).await {
                Ok(Ok(result)) => result,
                Ok(Err(e)) => Err(PromptError::UiError(format!("Task failed: {}", e))),
                Err(_) => Err(PromptError::Timeout(timeout.as_secs())),
            }
        })
    }
}
