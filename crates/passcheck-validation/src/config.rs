// File: src/config.rs
// Purpose: Feedback configuration (policy, colors, messages, element ids)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::feedback::{Messages, Palette};
use crate::policy::CompositionPolicy;

/// Everything a host can tune about the checks and how they are shown.
///
/// Every field falls back to the stock password-change form, so an empty
/// document yields [`FeedbackConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackConfig {
    #[serde(default)]
    pub policy: CompositionPolicy,

    #[serde(default)]
    pub palette: Palette,

    #[serde(default)]
    pub messages: Messages,

    #[serde(default)]
    pub elements: ElementIds,
}

/// Identifiers of the form elements the browser entry points look up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementIds {
    #[serde(default = "default_new_password")]
    pub new_password: String,

    #[serde(default = "default_confirm_password")]
    pub confirm_password: String,

    #[serde(default = "default_message")]
    pub message: String,
}

fn default_new_password() -> String {
    "newpassword".to_string()
}

fn default_confirm_password() -> String {
    "confirmpassword".to_string()
}

fn default_message() -> String {
    "confirmMessage".to_string()
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            new_password: default_new_password(),
            confirm_password: default_confirm_password(),
            message: default_message(),
        }
    }
}

impl FeedbackConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        toml::from_str(content).context("Failed to parse TOML feedback config")
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(content).context("Failed to parse JSON feedback config")
    }

    /// Load from a TOML file; a missing or empty file gives the defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!(?path, "feedback config not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to load config file: {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FeedbackConfig::default();
        assert_eq!(config.policy.min_length, 8);
        assert_eq!(config.policy.special_chars, "!@#$%^&*");
        assert_eq!(config.palette.good, "#66cc66");
        assert_eq!(config.palette.bad, "#ff6666");
        assert_eq!(config.elements.new_password, "newpassword");
        assert_eq!(config.elements.confirm_password, "confirmpassword");
        assert_eq!(config.elements.message, "confirmMessage");
    }

    #[test]
    fn test_empty_config() {
        assert_eq!(FeedbackConfig::from_toml_str("").unwrap(), FeedbackConfig::default());
        assert_eq!(FeedbackConfig::from_json_str("  ").unwrap(), FeedbackConfig::default());
        assert_eq!(FeedbackConfig::from_json_str("{}").unwrap(), FeedbackConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let toml = r##"
            [policy]
            minLength = 12

            [palette]
            bad = "#cc0000"

            [elements]
            message = "pwStatus"
        "##;
        let config = FeedbackConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.policy.min_length, 12);
        assert_eq!(config.policy.special_chars, "!@#$%^&*");
        assert_eq!(config.palette.good, "#66cc66");
        assert_eq!(config.palette.bad, "#cc0000");
        assert_eq!(config.elements.message, "pwStatus");
        assert_eq!(config.elements.new_password, "newpassword");
    }

    #[test]
    fn test_json_camel_case() {
        let json = r#"{"messages": {"matched": "OK"}, "elements": {"confirmPassword": "pw2"}}"#;
        let config = FeedbackConfig::from_json_str(json).unwrap();
        assert_eq!(config.messages.matched, "OK");
        assert_eq!(config.messages.mismatched, "Passwords Do Not Match!");
        assert_eq!(config.elements.confirm_password, "pw2");
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let err = FeedbackConfig::from_toml_str("[policy]\nminLength = \"eight\"").unwrap_err();
        assert!(err.to_string().contains("Failed to parse TOML"));
    }

    #[test]
    fn test_load_missing_file() {
        let config = FeedbackConfig::load("definitely/not/here/passcheck.toml").unwrap();
        assert_eq!(config, FeedbackConfig::default());
    }

    #[test]
    fn test_load_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("passcheck.toml");
        std::fs::write(
            &path,
            r##"
            [policy]
            minLength = 10
            specialChars = "?!"

            [palette]
            good = "#00aa00"
            "##,
        )
        .unwrap();

        let config = FeedbackConfig::load(&path).unwrap();
        assert_eq!(config.policy.min_length, 10);
        assert_eq!(config.policy.special_chars, "?!");
        assert_eq!(config.palette.good, "#00aa00");
        assert_eq!(config.palette.bad, "#ff6666");
    }

    #[test]
    fn test_load_empty_and_invalid_files() {
        let dir = tempfile::tempdir().unwrap();

        let empty = dir.path().join("empty.toml");
        std::fs::write(&empty, "  \n").unwrap();
        assert_eq!(FeedbackConfig::load(&empty).unwrap(), FeedbackConfig::default());

        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "[policy\nminLength = 10").unwrap();
        let err = FeedbackConfig::load(&broken).unwrap_err();
        assert!(err.to_string().contains("Failed to load config file"));
    }
}
