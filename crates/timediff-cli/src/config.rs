//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use timediff_core::BLOCK_TAG;

/// Invalid configuration values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("block tag cannot be empty")]
    EmptyTag,

    #[error("block tag must be a single word, got {tag:?}")]
    TagWithWhitespace { tag: String },
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Info-string tag identifying timediff blocks in Markdown.
    pub block_tag: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            block_tag: BLOCK_TAG.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (TIMEDIFF_*)
        figment = figment.merge(Env::prefixed("TIMEDIFF_"));

        figment.extract()
    }

    /// Resolves the block tag, preferring a command-line override.
    pub fn block_tag<'a>(&'a self, tag_override: Option<&'a str>) -> Result<&'a str, ConfigError> {
        let tag = tag_override.unwrap_or(&self.block_tag);
        if tag.is_empty() {
            return Err(ConfigError::EmptyTag);
        }
        if tag.chars().any(char::is_whitespace) {
            return Err(ConfigError::TagWithWhitespace {
                tag: tag.to_string(),
            });
        }
        Ok(tag)
    }
}

/// Returns the platform-specific config directory for timediff.
///
/// On Linux: `~/.config/timediff`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("timediff"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tag_is_timediff() {
        assert_eq!(Config::default().block_tag, "timediff");
    }

    #[test]
    fn test_dirs_config_path_ends_with_timediff() {
        let path = dirs_config_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "timediff");
    }

    #[test]
    fn test_load_from_explicit_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "block_tag = \"hours\"\n").unwrap();

        let config = Config::load_from(Some(path.as_path())).unwrap();
        assert_eq!(config.block_tag, "hours");
    }

    #[test]
    fn test_override_wins() {
        let config = Config::default();
        assert_eq!(config.block_tag(Some("work")), Ok("work"));
        assert_eq!(config.block_tag(None), Ok("timediff"));
    }

    #[test]
    fn test_invalid_tags_rejected() {
        let config = Config::default();
        assert_eq!(config.block_tag(Some("")), Err(ConfigError::EmptyTag));
        assert_eq!(
            config.block_tag(Some("two words")).unwrap_err().to_string(),
            "block tag must be a single word, got \"two words\""
        );
    }
}
