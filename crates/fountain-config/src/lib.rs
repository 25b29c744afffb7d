//! Configuration management for the fountain renderer.
//!
//! Parses `fountain.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! ```toml
//! [output]
//! css_file = "ScriptCSS.css"
//! mode = "extended"
//!
//! [components]
//! parent_dir = "components"
//! ```
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String values support `${VAR}` and `${VAR:-default}`:
//!
//! - `output.css_file`
//! - `components.parent_dir`

mod expand;

use std::path::{Path, PathBuf};

use fountain_renderer::{Mode, RendererConfig};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override stylesheet path.
    pub css_file: Option<String>,
    /// Override component directory.
    pub component_parent: Option<String>,
    /// Override rendering mode.
    pub mode: Option<Mode>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "fountain.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output document settings.
    pub output: OutputConfig,
    /// Component directive settings.
    pub components: ComponentsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Output document configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Stylesheet linked from the generated page.
    pub css_file: Option<String>,
    /// Rendering mode (`base` or `extended`).
    pub mode: Mode,
}

/// Component directive configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ComponentsConfig {
    /// Directory holding component definitions, used in import links.
    pub parent_dir: String,
}

impl Default for ComponentsConfig {
    fn default() -> Self {
        Self {
            parent_dir: "components".to_owned(),
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
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`output.css_file`").
        field: String,
        /// Error message (e.g., "${`STYLE_DIR`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `fountain.toml` in the current directory and its parents, falling
    /// back to defaults when none is found.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or validation fails.
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
            .and_then(|cwd| Self::discover_from(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(css_file) = &settings.css_file {
            self.output.css_file = Some(css_file.clone());
        }
        if let Some(parent) = &settings.component_parent {
            self.components.parent_dir.clone_from(parent);
        }
        if let Some(mode) = settings.mode {
            self.output.mode = mode;
        }
    }

    /// Renderer configuration derived from this config.
    #[must_use]
    pub fn renderer_config(&self) -> RendererConfig {
        RendererConfig {
            css_file: self.output.css_file.clone(),
            component_parent: self.components.parent_dir.clone(),
            mode: self.output.mode,
        }
    }

    /// Search for a config file in `start` and its parents.
    fn discover_from(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILENAME))
            .find(|candidate| candidate.exists())
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.components.parent_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "components.parent_dir cannot be empty".to_owned(),
            ));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref css_file) = self.output.css_file {
            self.output.css_file = Some(expand::expand_env(css_file, "output.css_file")?);
        }
        self.components.parent_dir =
            expand::expand_env(&self.components.parent_dir, "components.parent_dir")?;
        Ok(())
    }
}
