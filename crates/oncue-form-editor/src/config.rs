//! Editor configuration

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Editor configuration
///
/// Every key is optional in TOML; missing keys take the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Emit "field added" notifications
    pub notify_on_add: bool,
    /// Emit "field deleted" notifications
    pub notify_on_delete: bool,
    /// Emit "field duplicated" notifications
    pub notify_on_duplicate: bool,
    /// New forms start from the client onboarding template
    pub start_from_template: bool,
    /// Title of a new empty form
    pub default_title: String,
    /// Description of a new empty form
    pub default_description: String,
}

impl EditorConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle all mutation notifications at once
    #[inline]
    #[must_use]
    pub fn with_notifications(mut self, enabled: bool) -> Self {
        self.notify_on_add = enabled;
        self.notify_on_delete = enabled;
        self.notify_on_duplicate = enabled;
        self
    }

    /// Start new forms from the onboarding template
    #[inline]
    #[must_use]
    pub fn with_template(mut self, enabled: bool) -> Self {
        self.start_from_template = enabled;
        self
    }

    /// With default form title
    #[inline]
    #[must_use]
    pub fn with_default_title(mut self, title: impl Into<String>) -> Self {
        self.default_title = title.into();
        self
    }

    /// Parse from TOML text
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] on malformed TOML or mistyped keys
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML file
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if it is not valid configuration
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            notify_on_add: true,
            notify_on_delete: true,
            notify_on_duplicate: true,
            start_from_template: false,
            default_title: "Untitled Form".to_string(),
            default_description: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = EditorConfig::from_toml_str(
            r#"
            start_from_template = true
            notify_on_delete = false
            "#,
        )
        .unwrap();

        assert!(config.start_from_template);
        assert!(!config.notify_on_delete);
        assert!(config.notify_on_add);
        assert_eq!(config.default_title, "Untitled Form");
    }

    #[test]
    fn mistyped_key_rejected() {
        let result = EditorConfig::from_toml_str("notify_on_add = \"yes\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn builder() {
        let config = EditorConfig::new()
            .with_notifications(false)
            .with_default_title("Intake");
        assert!(!config.notify_on_duplicate);
        assert_eq!(config.default_title, "Intake");
    }
}
