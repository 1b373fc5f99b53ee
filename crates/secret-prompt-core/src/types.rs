//! Core types for the secret prompt.
//!
//! This module contains the request model shared by every prompt backend:
//! what kind of secret is being asked for, how the prompt text is built,
//! and the configuration handed to the UI layer.

use std::path::PathBuf;
use std::time::Duration;

/// The literal argument value that requests a one-time passcode.
pub const OTP_MARKER: &str = "Code";

/// The fixed prompt label shown when asking for a one-time passcode.
pub const OTP_PROMPT: &str = "OTP token";

/// Seconds the prompt stays up before giving up.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Icon shown next to the prompt text, resolved relative to the working
/// directory at run time. A missing file degrades the display only.
pub const DEFAULT_ICON: &str = "./icon.png";

/// Environment variable naming the account the secret belongs to.
pub const USERNAME_ENV: &str = "username";

/// The kind of secret a single invocation asks for.
///
/// The distinction drives both the prompt text and whether the input field
/// echoes what is typed: one-time passcodes are short-lived and entered
/// visibly, everything else is masked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretKind {
    /// A one-time passcode (visible input).
    Otp,
    /// A named credential field, e.g. a vault master password (masked input).
    Field(String),
}

impl SecretKind {
    /// Classify the invocation argument.
    ///
    /// Only the exact marker value selects OTP mode; any other string,
    /// including the empty string, names a masked credential field.
    ///
    /// # Examples
    ///
    /// ```
    /// use secret_prompt_core::types::SecretKind;
    ///
    /// assert_eq!(SecretKind::from_argument("Code"), SecretKind::Otp);
    /// assert_eq!(
    ///     SecretKind::from_argument("database"),
    ///     SecretKind::Field("database".to_string())
    /// );
    /// ```
    pub fn from_argument(argument: &str) -> Self {
        if argument == OTP_MARKER {
            SecretKind::Otp
        } else {
            SecretKind::Field(argument.to_string())
        }
    }

    /// Build the prompt text shown to the user.
    ///
    /// The OTP label is fixed and ignores the username. Field prompts
    /// interpolate both the field name and the username verbatim, with no
    /// validation; an unset username renders as an empty substitution.
    pub fn prompt_text(&self, username: &str) -> String {
        match self {
            SecretKind::Otp => OTP_PROMPT.to_string(),
            SecretKind::Field(name) => format!("Enter {} for {}:", name, username),
        }
    }

    /// Whether the input field should echo what is typed.
    pub fn echo(&self) -> bool {
        matches!(self, SecretKind::Otp)
    }
}

impl std::fmt::Display for SecretKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SecretKind::Otp => write!(f, "one-time passcode"),
            SecretKind::Field(name) => write!(f, "{}", name),
        }
    }
}

/// Read the account name from the process environment.
///
/// Returns the empty string when the variable is unset or not valid
/// Unicode; the prompt renders with an empty substitution in that case.
pub fn username_from_env() -> String {
    std::env::var(USERNAME_ENV).unwrap_or_default()
}

/// Configuration for a single prompt.
///
/// This is passed to the [`SecretPrompt`](crate::traits::SecretPrompt)
/// implementation to configure how the dialog should be displayed.
#[derive(Debug, Clone)]
pub struct PromptConfig {
    /// The text to display to the user.
    pub prompt_text: String,

    /// Whether to echo input (true for one-time passcodes, false for
    /// passwords).
    pub echo: bool,

    /// Deadline after which the prompt auto-cancels.
    pub timeout: Duration,

    /// Path to the icon shown in the dialog.
    pub icon: PathBuf,
}

impl PromptConfig {
    /// Build the configuration for one request.
    pub fn for_kind(kind: &SecretKind, username: &str) -> Self {
        Self {
            prompt_text: kind.prompt_text(username),
            echo: kind.echo(),
            ..Self::default()
        }
    }

    /// Override the timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the icon path.
    pub fn with_icon(mut self, icon: impl Into<PathBuf>) -> Self {
        self.icon = icon.into();
        self
    }
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            prompt_text: String::new(),
            echo: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            icon: PathBuf::from(DEFAULT_ICON),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_argument_selects_otp() {
        assert_eq!(SecretKind::from_argument("Code"), SecretKind::Otp);
    }

    #[test]
    fn non_marker_arguments_are_fields() {
        assert_eq!(
            SecretKind::from_argument("database"),
            SecretKind::Field("database".to_string())
        );
        assert_eq!(
            SecretKind::from_argument(""),
            SecretKind::Field(String::new())
        );
        // Case matters: only the exact marker is an OTP request.
        assert_eq!(
            SecretKind::from_argument("code"),
            SecretKind::Field("code".to_string())
        );
    }

    #[test]
    fn otp_prompt_is_fixed_and_ignores_username() {
        assert_eq!(SecretKind::Otp.prompt_text("alice"), "OTP token");
        assert_eq!(SecretKind::Otp.prompt_text(""), "OTP token");
    }

    #[test]
    fn field_prompt_interpolates_verbatim() {
        let kind = SecretKind::from_argument("database");
        assert_eq!(kind.prompt_text("alice"), "Enter database for alice:");

        let kind = SecretKind::from_argument("a b c");
        assert_eq!(kind.prompt_text("bob"), "Enter a b c for bob:");

        let kind = SecretKind::from_argument("");
        assert_eq!(kind.prompt_text("carol"), "Enter  for carol:");
    }

    #[test]
    fn empty_username_renders_empty_substitution() {
        let kind = SecretKind::from_argument("passphrase");
        assert_eq!(kind.prompt_text(""), "Enter passphrase for :");
    }

    #[test]
    fn echo_policy_is_keyed_on_kind() {
        assert!(SecretKind::Otp.echo());
        assert!(!SecretKind::Field("database".to_string()).echo());
        assert!(!SecretKind::Field(String::new()).echo());
    }

    #[test]
    fn prompt_config_default() {
        let config = PromptConfig::default();
        assert!(config.prompt_text.is_empty());
        assert!(!config.echo);
        assert_eq!(config.timeout, Duration::from_secs(120));
        assert_eq!(config.icon, PathBuf::from("./icon.png"));
    }

    #[test]
    fn for_kind_builds_masked_field_config() {
        let kind = SecretKind::from_argument("database");
        let config = PromptConfig::for_kind(&kind, "alice");
        assert_eq!(config.prompt_text, "Enter database for alice:");
        assert!(!config.echo);
        assert_eq!(config.timeout, Duration::from_secs(120));
    }

    #[test]
    fn for_kind_builds_visible_otp_config() {
        let kind = SecretKind::from_argument("Code");
        let config = PromptConfig::for_kind(&kind, "alice");
        assert_eq!(config.prompt_text, "OTP token");
        assert!(config.echo);
    }

    #[test]
    fn config_overrides() {
        let config = PromptConfig::default()
            .with_timeout(Duration::from_secs(5))
            .with_icon("/tmp/other.png");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.icon, PathBuf::from("/tmp/other.png"));
    }

    // The only test touching the `username` variable, so it cannot race
    // with other tests in this binary.
    #[test]
    fn username_from_env_defaults_to_empty() {
        std::env::remove_var(USERNAME_ENV);
        assert_eq!(username_from_env(), "");

        std::env::set_var(USERNAME_ENV, "alice");
        assert_eq!(username_from_env(), "alice");

        std::env::remove_var(USERNAME_ENV);
    }

    #[test]
    fn secret_kind_display() {
        assert_eq!(SecretKind::Otp.to_string(), "one-time passcode");
        assert_eq!(
            SecretKind::Field("database".to_string()).to_string(),
            "database"
        );
    }
}
