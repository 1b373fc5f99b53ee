//! Mock secret prompt for testing.
//!
//! This module provides a configurable mock implementation of [`SecretPrompt`]
//! that can be used in tests without requiring a display server.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use secrecy::SecretString;
use secret_prompt_core::{PromptConfig, PromptError, SecretPrompt};

/// A mock secret prompt for testing.
///
/// This implementation allows configuring a predetermined answer,
/// simulating errors, and tracking how many times it was called.
///
/// # Example
///
/// ```
/// use secret_prompt::prompt::MockSecretPrompt;
///
/// // Create a mock that returns a specific answer
/// let mock = MockSecretPrompt::with_secret("hunter2");
///
/// // Or create one that simulates cancellation
/// let mock_cancel = MockSecretPrompt::cancelled();
/// ```
pub struct MockSecretPrompt {
    /// The answer to return (if any).
    secret: Option<String>,
    /// Error to return instead of an answer.
    error: Option<PromptError>,
    /// Number of times prompt was called.
    call_count: Arc<AtomicUsize>,
    /// Delay before responding (for timeout testing).
    delay: Option<std::time::Duration>,
}

impl MockSecretPrompt {
    /// Create a mock that returns the given answer.
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            secret: Some(secret.into()),
            error: None,
            call_count: Arc::new(AtomicUsize::new(0)),
            delay: None,
        }
    }

    /// Create a mock that simulates user cancellation.
    pub fn cancelled() -> Self {
        Self {
            secret: None,
            error: Some(PromptError::Cancelled),
            call_count: Arc::new(AtomicUsize::new(0)),
            delay: None,
        }
    }

    /// Create a mock that simulates a timeout.
    pub fn timeout(seconds: u64) -> Self {
        Self {
            secret: None,
            error: Some(PromptError::Timeout(seconds)),
            call_count: Arc::new(AtomicUsize::new(0)),
            delay: None,
        }
    }

    /// Create a mock that returns an error.
    pub fn with_error(error: PromptError) -> Self {
        Self {
            secret: None,
            error: Some(error),
            call_count: Arc::new(AtomicUsize::new(0)),
            delay: None,
        }
    }

    /// Add a delay before responding (useful for timeout testing).
    pub fn with_delay(mut self, delay: std::time::Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Get the number of times prompt was called.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Get a clone of the call counter for external tracking.
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.call_count)
    }
}

impl Default for MockSecretPrompt {
    fn default() -> Self {
        Self::with_secret("mock-secret")
    }
}

impl SecretPrompt for MockSecretPrompt {
    fn prompt(
        &self,
        _config: PromptConfig,
    ) -> Pin<Box<dyn Future<Output = Result<SecretString, PromptError>> + Send + '_>> {
        // Increment call count
        self.call_count.fetch_add(1, Ordering::SeqCst);

        let secret = self.secret.clone();
        let error = self.error.clone();
        let delay = self.delay;

        Box::pin(async move {
            // Apply delay if configured
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }

            // Return error if configured
            if let Some(err) = error {
                return Err(err);
            }

            // Return answer if configured
            secret.map(SecretString::from).ok_or(PromptError::Cancelled)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[tokio::test]
    async fn mock_returns_secret() {
        let mock = MockSecretPrompt::with_secret("hunter2");
        let config = PromptConfig::default();

        let secret = mock.prompt(config).await.unwrap();
        assert_eq!(secret.expose_secret(), "hunter2");
    }

    #[tokio::test]
    async fn mock_returns_cancelled() {
        let mock = MockSecretPrompt::cancelled();
        let config = PromptConfig::default();

        let result = mock.prompt(config).await;
        assert!(matches!(result, Err(PromptError::Cancelled)));
    }

    #[tokio::test]
    async fn mock_returns_timeout() {
        let mock = MockSecretPrompt::timeout(120);
        let config = PromptConfig::default();

        let result = mock.prompt(config).await;
        assert!(matches!(result, Err(PromptError::Timeout(120))));
    }

    #[tokio::test]
    async fn mock_tracks_call_count() {
        let mock = MockSecretPrompt::default();
        let config = PromptConfig::default();

        assert_eq!(mock.call_count(), 0);

        let _ = mock.prompt(config.clone()).await;
        assert_eq!(mock.call_count(), 1);

        let _ = mock.prompt(config.clone()).await;
        assert_eq!(mock.call_count(), 2);
    }

    #[tokio::test]
    async fn mock_with_delay() {
        use std::time::{Duration, Instant};

        let mock = MockSecretPrompt::with_secret("test").with_delay(Duration::from_millis(50));
        let config = PromptConfig::default();

        let start = Instant::now();
        let _ = mock.prompt(config).await;
        let elapsed = start.elapsed();

        assert!(elapsed >= Duration::from_millis(50));
    }

    #[tokio::test]
    async fn mock_empty_answer_is_returned_verbatim() {
        let mock = MockSecretPrompt::with_secret("");
        let config = PromptConfig::default();

        let secret = mock.prompt(config).await.unwrap();
        assert_eq!(secret.expose_secret(), "");
    }

    #[test]
    fn mock_default_returns_mock_secret() {
        let mock = MockSecretPrompt::default();
        assert!(mock.secret.is_some());
    }
}
