//! The prompt trait and its error taxonomy.
//!
//! The prompt is the single pluggable seam in this program: the binary picks
//! a backend (GTK4 dialog, terminal, mock) and everything else is agnostic
//! to how the user is actually asked. By using a trait, the text-building
//! logic can be tested without a display server.

use std::future::Future;
use std::pin::Pin;

use secrecy::SecretString;

use crate::types::PromptConfig;

/// Error type for prompt operations.
///
/// Only the first two variants are user-triggered; callers that just need
/// "was a secret obtained" can treat every variant the same way.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PromptError {
    /// User cancelled the prompt.
    #[error("prompt cancelled by user")]
    Cancelled,

    /// Prompt timed out.
    #[error("prompt timed out after {0} seconds")]
    Timeout(u64),

    /// Failed to initialize the UI toolkit.
    #[error("UI initialization failed: {0}")]
    InitializationFailed(String),

    /// Generic UI error.
    #[error("UI error: {0}")]
    UiError(String),
}

/// Trait for secret prompt implementations.
///
/// This trait abstracts the UI layer, allowing different implementations:
/// - GTK4 dialog for desktop sessions
/// - Terminal (rpassword) for headless systems
/// - Mock for testing
///
/// Exactly one prompt is shown per call; the call blocks until the user
/// responds, cancels, or the configured timeout elapses.
pub trait SecretPrompt: Send + Sync {
    /// Show the prompt and wait for the user's answer.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the prompt (text, echo, timeout, icon)
    ///
    /// # Returns
    ///
    /// The entered text, exactly as typed (the empty string is a valid
    /// answer).
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::Cancelled`] if the user dismisses the prompt
    /// and [`PromptError::Timeout`] if the deadline elapses first.
    fn prompt(
        &self,
        config: PromptConfig,
    ) -> Pin<Box<dyn Future<Output = Result<SecretString, PromptError>> + Send + '_>>;
}
