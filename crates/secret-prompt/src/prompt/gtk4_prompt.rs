//! GTK4 dialog implementation.
//!
//! This module provides a GTK4-based modal dialog that implements the
//! [`SecretPrompt`] trait. It creates a dialog with:
//!
//! - An icon next to the prompt text
//! - One answer entry, masked or visible depending on the request
//! - Cancel and OK buttons, OK being the default (Enter) action
//! - Timeout handling with a live countdown

use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::time::Duration;

use gtk4::glib;
use gtk4::prelude::*;
use secrecy::SecretString;
use secret_prompt_core::{PromptConfig, PromptError, SecretPrompt};
use tokio::sync::oneshot;
use tracing::{debug, warn};

/// GTK4-based secret prompt.
///
/// This implementation creates a GTK4 dialog window for secret entry.
/// It handles the complexity of bridging GTK4's main loop with Tokio's
/// async runtime.
pub struct Gtk4SecretPrompt {
    /// Application ID for GTK.
    #[allow(dead_code)] // Will be used for proper GTK application in future
    app_id: String,
}

/// The answer field, masked for passwords and plain for one-time passcodes.
enum AnswerEntry {
    Masked(gtk4::PasswordEntry),
    Visible(gtk4::Entry),
}

impl AnswerEntry {
    fn new(echo: bool) -> Self {
        if echo {
            AnswerEntry::Visible(
                gtk4::Entry::builder()
                    .placeholder_text("Enter code")
                    .build(),
            )
        } else {
            AnswerEntry::Masked(
                gtk4::PasswordEntry::builder()
                    .show_peek_icon(true)
                    .placeholder_text("Enter password")
                    .build(),
            )
        }
    }

    fn widget(&self) -> gtk4::Widget {
        match self {
            AnswerEntry::Masked(entry) => entry.clone().upcast(),
            AnswerEntry::Visible(entry) => entry.clone().upcast(),
        }
    }

    /// The entry's current text, exactly as typed (empty by default).
    fn text(&self) -> String {
        match self {
            AnswerEntry::Masked(entry) => entry.text().to_string(),
            AnswerEntry::Visible(entry) => entry.text().to_string(),
        }
    }

    fn connect_activate<F: Fn() + 'static>(&self, callback: F) {
        match self {
            AnswerEntry::Masked(entry) => {
                entry.connect_activate(move |_| callback());
            }
            AnswerEntry::Visible(entry) => {
                entry.connect_activate(move |_| callback());
            }
        }
    }

    fn grab_focus(&self) {
        match self {
            AnswerEntry::Masked(entry) => {
                entry.grab_focus();
            }
            AnswerEntry::Visible(entry) => {
                entry.grab_focus();
            }
        }
    }
}

impl Gtk4SecretPrompt {
    /// Create a new GTK4 secret prompt.
    pub fn new() -> Self {
        Self {
            app_id: "com.secret-prompt.dialog".to_string(),
        }
    }

    /// Create with a custom application ID.
    pub fn with_app_id(app_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
        }
    }

    /// Show the dialog and wait for user input.
    ///
    /// This function must be called from within a GTK main context.
    fn show_dialog(config: PromptConfig) -> oneshot::Receiver<Result<SecretString, PromptError>> {
        let (tx, rx) = oneshot::channel();
        let tx = Rc::new(RefCell::new(Some(tx)));

        // Create the dialog window
        let window = gtk4::Window::builder()
            .title("Secret Required")
            .default_width(420)
            .modal(true)
            .resizable(false)
            .build();

        // Main vertical box
        let vbox = gtk4::Box::builder()
            .orientation(gtk4::Orientation::Vertical)
            .spacing(12)
            .margin_top(20)
            .margin_bottom(20)
            .margin_start(20)
            .margin_end(20)
            .build();

        // Icon and prompt text side by side. A missing icon file renders
        // as an empty image; the prompt still works.
        let header = gtk4::Box::builder()
            .orientation(gtk4::Orientation::Horizontal)
            .spacing(12)
            .build();

        let icon = gtk4::Image::from_file(&config.icon);
        icon.set_pixel_size(48);
        header.append(&icon);

        let prompt_label = gtk4::Label::builder()
            .label(&config.prompt_text)
            .wrap(true)
            .xalign(0.0)
            .build();
        header.append(&prompt_label);
        vbox.append(&header);

        // Answer entry, empty by default
        let entry = Rc::new(AnswerEntry::new(config.echo));
        vbox.append(&entry.widget());

        // Timeout label
        let timeout_secs = config.timeout.as_secs();
        let timeout_label = gtk4::Label::builder()
            .label(format!("Timeout: {}s", timeout_secs))
            .xalign(0.0)
            .css_classes(["dim-label"])
            .build();
        vbox.append(&timeout_label);

        // Button box
        let button_box = gtk4::Box::builder()
            .orientation(gtk4::Orientation::Horizontal)
            .spacing(12)
            .halign(gtk4::Align::End)
            .margin_top(12)
            .build();

        let cancel_button = gtk4::Button::builder().label("Cancel").build();

        let ok_button = gtk4::Button::builder()
            .label("OK")
            .css_classes(["suggested-action"])
            .build();

        button_box.append(&cancel_button);
        button_box.append(&ok_button);
        vbox.append(&button_box);

        window.set_child(Some(&vbox));

        // Set up timeout countdown
        let timeout_label_clone = timeout_label.clone();
        let window_clone = window.clone();
        let tx_timeout = Rc::clone(&tx);
        let remaining = Rc::new(RefCell::new(timeout_secs));

        glib::timeout_add_local(Duration::from_secs(1), move || {
            let mut secs = remaining.borrow_mut();
            if *secs > 0 {
                *secs -= 1;
                timeout_label_clone.set_label(&format!("Timeout: {}s", *secs));
                glib::ControlFlow::Continue
            } else {
                // Deadline reached: dismiss without an answer
                if let Some(tx) = tx_timeout.borrow_mut().take() {
                    let _ = tx.send(Err(PromptError::Timeout(timeout_secs)));
                }
                window_clone.close();
                glib::ControlFlow::Break
            }
        });

        // Handle cancel button
        let window_cancel = window.clone();
        let tx_cancel = Rc::clone(&tx);
        cancel_button.connect_clicked(move |_| {
            if let Some(tx) = tx_cancel.borrow_mut().take() {
                let _ = tx.send(Err(PromptError::Cancelled));
            }
            window_cancel.close();
        });

        // Handle OK button
        let window_ok = window.clone();
        let entry_ok = Rc::clone(&entry);
        let tx_ok = Rc::clone(&tx);
        ok_button.connect_clicked(move |_| {
            let answer = entry_ok.text();

            if let Some(tx) = tx_ok.borrow_mut().take() {
                let _ = tx.send(Ok(SecretString::from(answer)));
            }
            window_ok.close();
        });

        // Enter in the entry activates OK, making it the default button
        let ok_button_enter = ok_button.clone();
        entry.connect_activate(move || {
            ok_button_enter.emit_clicked();
        });

        // Closing the window counts as cancellation
        let tx_close = Rc::clone(&tx);
        window.connect_close_request(move |_| {
            if let Some(tx) = tx_close.borrow_mut().take() {
                let _ = tx.send(Err(PromptError::Cancelled));
            }
            glib::Propagation::Proceed
        });

        // Show the window
        window.present();

        // Focus the answer entry
        entry.grab_focus();

        rx
    }
}

impl Default for Gtk4SecretPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretPrompt for Gtk4SecretPrompt {
    fn prompt(
        &self,
        config: PromptConfig,
    ) -> Pin<Box<dyn Future<Output = Result<SecretString, PromptError>> + Send + '_>> {
        Box::pin(async move {
            // GTK has to run on its own thread; bridge the dialog result
            // back to the async task through a oneshot channel.
            let handle = tokio::task::spawn_blocking(move || {
                // Initialize GTK if not already done
                if gtk4::is_initialized() {
                    debug!("GTK already initialized, reusing");
                } else {
                    debug!("Initializing GTK");
                    gtk4::init().map_err(|e| {
                        PromptError::InitializationFailed(format!("GTK init failed: {}", e))
                    })?;
                }

                // Create a main context for this thread
                let main_context = glib::MainContext::default();
                let _guard = main_context.acquire().map_err(|_| {
                    PromptError::InitializationFailed("Failed to acquire main context".into())
                })?;

                // Show the dialog and get the receiver
                let mut dialog_rx = Self::show_dialog(config);

                // Run the main loop until we get a result
                let result = main_context.block_on(async {
                    // Poll GTK events while waiting for the dialog result
                    loop {
                        // Process pending GTK events
                        while main_context.iteration(false) {}

                        // Check if we have a result
                        match dialog_rx.try_recv() {
                            Ok(result) => break result,
                            Err(oneshot::error::TryRecvError::Empty) => {
                                // No result yet, yield and continue
                                tokio::task::yield_now().await;
                            }
                            Err(oneshot::error::TryRecvError::Closed) => {
                                // Channel closed without result
                                break Err(PromptError::Cancelled);
                            }
                        }
                    }
                });

                Ok::<_, PromptError>(result)
            });

            // Wait for the blocking task to complete
            match handle.await {
                Ok(Ok(result)) => result,
                Ok(Err(e)) => Err(e),
                Err(e) => {
                    warn!(error = %e, "GTK task panicked");
                    Err(PromptError::UiError(format!("GTK task failed: {}", e)))
                }
            }
        })
    }
}

// Note: GTK4 tests require a display server or Xvfb.
// These tests are marked as ignored by default and should be run with:
// xvfb-run cargo test -p secret-prompt
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_create_prompt() {
        let _prompt = Gtk4SecretPrompt::new();
    }

    #[test]
    fn can_create_with_app_id() {
        let prompt = Gtk4SecretPrompt::with_app_id("test.app.id");
        assert_eq!(prompt.app_id, "test.app.id");
    }

    #[tokio::test]
    #[ignore = "requires display server"]
    async fn prompt_shows_masked_dialog() {
        let prompt = Gtk4SecretPrompt::new();
        let config = PromptConfig {
            prompt_text: "Enter database for alice:".to_string(),
            timeout: Duration::from_secs(5),
            ..Default::default()
        };

        // This will show a dialog - manually close it or wait for timeout
        let _ = prompt.prompt(config).await;
    }

    #[tokio::test]
    #[ignore = "requires display server"]
    async fn prompt_shows_visible_dialog() {
        let prompt = Gtk4SecretPrompt::new();
        let config = PromptConfig {
            prompt_text: "OTP token".to_string(),
            echo: true,
            timeout: Duration::from_secs(5),
            ..Default::default()
        };

        let _ = prompt.prompt(config).await;
    }
}
