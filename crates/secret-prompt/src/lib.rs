//! Secret prompt dialog implementation.
//!
//! This crate provides the prompt backends for secret-prompt and the binary
//! that credential-retrieval hooks invoke. The actual contract (prompt text,
//! echo policy, error taxonomy) lives in `secret-prompt-core`; this crate
//! only decides *how* the user is asked:
//!
//! - GTK4 dialog when a display is reachable
//! - Terminal prompt on headless systems
//! - Mock for tests

pub mod prompt;

// Re-export main components
pub use prompt::{select_backend, CliSecretPrompt, Gtk4SecretPrompt, MockSecretPrompt};
