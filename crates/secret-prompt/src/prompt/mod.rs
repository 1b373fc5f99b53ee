//! Secret prompt implementations.
//!
//! This module provides implementations of the [`SecretPrompt`] trait:
//!
//! - [`Gtk4SecretPrompt`]: GTK4 dialog (desktop sessions)
//! - [`CliSecretPrompt`]: terminal prompt (headless systems)
//! - [`MockSecretPrompt`]: configurable mock for testing
//!
//! All implement the [`SecretPrompt`] trait from `secret-prompt-core`.

mod cli;
mod gtk4_prompt;
mod mock;

pub use cli::CliSecretPrompt;
pub use gtk4_prompt::Gtk4SecretPrompt;
pub use mock::MockSecretPrompt;

use secret_prompt_core::SecretPrompt;
use tracing::debug;

/// Pick the prompt backend for this invocation.
///
/// The GTK4 dialog is used when a display is reachable; headless sessions
/// (and `force_terminal`) fall back to the terminal prompt so the caller
/// still gets the same blocking ask-with-timeout behavior.
pub fn select_backend(force_terminal: bool) -> Box<dyn SecretPrompt> {
    if force_terminal || !has_display() {
        debug!("Using terminal prompt");
        Box::new(CliSecretPrompt::new())
    } else {
        debug!("Using GTK4 dialog prompt");
        Box::new(Gtk4SecretPrompt::new())
    }
}

/// Whether a display server is reachable from this process.
fn has_display() -> bool {
    ["DISPLAY", "WAYLAND_DISPLAY"]
        .iter()
        .any(|var| std::env::var_os(var).is_some_and(|value| !value.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // The only test touching DISPLAY/WAYLAND_DISPLAY, so it cannot race
    // with other tests in this binary.
    #[test]
    fn display_detection_follows_environment() {
        let saved_display = std::env::var_os("DISPLAY");
        let saved_wayland = std::env::var_os("WAYLAND_DISPLAY");

        std::env::remove_var("DISPLAY");
        std::env::remove_var("WAYLAND_DISPLAY");
        assert!(!has_display());

        std::env::set_var("DISPLAY", ":0");
        assert!(has_display());

        std::env::remove_var("DISPLAY");
        std::env::set_var("WAYLAND_DISPLAY", "wayland-0");
        assert!(has_display());

        // An empty value does not count as a reachable display.
        std::env::set_var("WAYLAND_DISPLAY", "");
        assert!(!has_display());

        match saved_display {
            Some(value) => std::env::set_var("DISPLAY", value),
            None => std::env::remove_var("DISPLAY"),
        }
        match saved_wayland {
            Some(value) => std::env::set_var("WAYLAND_DISPLAY", value),
            None => std::env::remove_var("WAYLAND_DISPLAY"),
        }
    }
}
