//! Render settings loaded from TOML
//!
//! ```toml
//! [render]
//! escape = true
//! max_depth = 512
//! ```
//!
//! Every key is optional; missing keys keep the [`RenderConfig`] defaults.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::renderer::config::DEFAULT_MAX_DEPTH;
use crate::RenderConfig;

/// Errors that can occur when loading or parsing settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse settings TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Settings for the render pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Escape untrusted text and attribute values
    pub escape: bool,
    /// Depth guard; `0` in the file disables it
    pub max_depth: Option<usize>,
}

/// TOML structure for deserializing settings
#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct TomlSettings {
    render: Option<TomlRender>,
}

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct TomlRender {
    escape: Option<bool>,
    max_depth: Option<usize>,
}

impl Settings {
    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load settings from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, SettingsError> {
        let parsed: TomlSettings = toml::from_str(content)?;
        let render = parsed.render.unwrap_or_default();

        Ok(Settings {
            escape: render.escape.unwrap_or(true),
            max_depth: match render.max_depth {
                Some(depth) => RenderConfig::new().with_max_depth(depth).max_depth,
                None => Some(DEFAULT_MAX_DEPTH),
            },
        })
    }

    /// The renderer configuration these settings describe
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            escape: self.escape,
            max_depth: self.max_depth,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        let config = RenderConfig::default();
        Self {
            escape: config.escape,
            max_depth: config.max_depth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.escape);
        assert_eq!(settings.render_config(), RenderConfig::default());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let settings = Settings::from_str("").expect("Should parse");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_parse_render_table() {
        let toml_str = r#"
[render]
escape = false
max_depth = 32
"#;
        let settings = Settings::from_str(toml_str).expect("Should parse");
        assert!(!settings.escape);
        assert_eq!(settings.max_depth, Some(32));
    }

    #[test]
    fn test_zero_depth_disables_guard() {
        let settings = Settings::from_str("[render]\nmax_depth = 0\n").expect("Should parse");
        assert_eq!(settings.render_config().max_depth, None);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result = Settings::from_str("[render]\nescpae = false\n");
        assert!(matches!(result, Err(SettingsError::ParseError(_))));
    }

    #[test]
    fn test_invalid_toml_error() {
        let invalid = "this is not valid toml {{{{";
        assert!(Settings::from_str(invalid).is_err());
    }

    #[test]
    fn test_missing_file() {
        let result = Settings::from_file(Path::new("/nonexistent/hiccdown.toml"));
        assert!(matches!(result, Err(SettingsError::IoError(_))));
    }
}
