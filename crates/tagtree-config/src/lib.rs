//! Configuration management for tagtree.
//!
//! Parses `tagtree.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [vocabulary]
//! tags = ["div", "span", "p"]
//!
//! [attributes]
//! strip_quotes = true
//!
//! [text]
//! skip_whitespace = false
//!
//! [limits]
//! max_depth = 1000
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tagtree::{ParserOptions, TagVocabulary};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "tagtree.toml";

/// Default nesting limit. Serializing the parsed tree recurses once per
/// level, so the limit keeps output within the main thread's stack.
const DEFAULT_MAX_DEPTH: usize = 1000;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Tag names added to the configured vocabulary.
    pub extra_tags: Vec<String>,
    /// Override quote stripping for attribute values.
    pub strip_quotes: Option<bool>,
    /// Override dropping of whitespace-only text.
    pub skip_whitespace: Option<bool>,
    /// Override the nesting limit.
    pub max_depth: Option<usize>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tag vocabulary.
    pub vocabulary: VocabularyConfig,
    /// Attribute parsing.
    pub attributes: AttributesConfig,
    /// Text handling.
    pub text: TextConfig,
    /// Parse limits.
    pub limits: LimitsConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Tag vocabulary configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    /// Recognized tag names.
    pub tags: Vec<String>,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            tags: TagVocabulary::default().iter().map(str::to_owned).collect(),
        }
    }
}

/// Attribute parsing configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AttributesConfig {
    /// Remove a matching pair of quotes around attribute values.
    pub strip_quotes: bool,
}

impl Default for AttributesConfig {
    fn default() -> Self {
        Self { strip_quotes: true }
    }
}

/// Text handling configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Drop whitespace-only text between tags.
    pub skip_whitespace: bool,
}

/// Parse limits configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum number of elements open at once.
    pub max_depth: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `tagtree.toml` in current directory and parents,
    /// falling back to defaults.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_config(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Parser options described by this configuration.
    #[must_use]
    pub fn parser_options(&self) -> ParserOptions {
        ParserOptions::new(TagVocabulary::new(self.vocabulary.tags.iter().cloned()))
            .with_strip_quotes(self.attributes.strip_quotes)
            .with_skip_whitespace_text(self.text.skip_whitespace)
            .with_max_depth(Some(self.limits.max_depth))
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the tag vocabulary is empty, has
    /// duplicates, or contains a name that cannot appear in a tag, or if
    /// `limits.max_depth` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.max_depth == 0 {
            return Err(ConfigError::Validation(
                "limits.max_depth must be at least 1".to_owned(),
            ));
        }


        let tags = &self.vocabulary.tags;
        if tags.is_empty() {
            return Err(ConfigError::Validation(
                "vocabulary.tags must contain at least one tag".to_owned(),
            ));
        }

        let mut seen = HashSet::new();
        for tag in tags {
            if !is_valid_tag_name(tag) {
                return Err(ConfigError::Validation(format!(
                    "vocabulary.tags contains invalid tag name {tag:?}"
                )));
            }
            if !seen.insert(tag.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "vocabulary.tags contains duplicate tag name {tag:?}"
                )));
            }
        }

        Ok(())
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        for tag in &settings.extra_tags {
            if !self.vocabulary.tags.contains(tag) {
                self.vocabulary.tags.push(tag.clone());
            }
        }
        if let Some(strip_quotes) = settings.strip_quotes {
            self.attributes.strip_quotes = strip_quotes;
        }
        if let Some(skip_whitespace) = settings.skip_whitespace {
            self.text.skip_whitespace = skip_whitespace;
        }
        if let Some(max_depth) = settings.max_depth {
            self.limits.max_depth = max_depth;
        }
    }

    /// Search for config file in `start` and its parents.
    fn discover_config(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILENAME))
            .find(|candidate| candidate.exists())
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!(path = %path.display(), "Loading configuration");

        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }
}

/// Check if a name can be used as a tag.
///
/// Valid names contain only ASCII alphanumerics, hyphens, underscores and colons.
fn is_valid_tag_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == ':')
}
