//! Core types for the secret-prompt dialog.
//!
//! This crate provides the UI-agnostic building blocks for secret-prompt:
//! the request model, the prompt configuration, and the prompt trait. It is
//! intentionally free of any UI toolkit so that the prompt-text contract can
//! be unit tested without a display server.
//!
//! # Modules
//!
//! - [`types`]: request model ([`SecretKind`], [`PromptConfig`]) and defaults
//! - [`traits`]: the pluggable [`SecretPrompt`] trait and [`PromptError`]
//!
//! # Example
//!
//! ```
//! use secret_prompt_core::{PromptConfig, SecretKind};
//!
//! // A request for the "database" credential of user "alice"
//! let kind = SecretKind::from_argument("database");
//! let config = PromptConfig::for_kind(&kind, "alice");
//! assert_eq!(config.prompt_text, "Enter database for alice:");
//! assert!(!config.echo);
//!
//! // The literal marker "Code" asks for a one-time passcode instead
//! let kind = SecretKind::from_argument("Code");
//! let config = PromptConfig::for_kind(&kind, "alice");
//! assert_eq!(config.prompt_text, "OTP token");
//! assert!(config.echo);
//! ```

pub mod traits;
pub mod types;

// Re-export commonly used types at the crate root for convenience
pub use traits::{PromptError, SecretPrompt};
pub use types::{
    username_from_env, PromptConfig, SecretKind, DEFAULT_ICON, DEFAULT_TIMEOUT_SECS, OTP_MARKER,
    OTP_PROMPT, USERNAME_ENV,
};
