//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/treeflat/treeflat.toml`
//! 3. Local config: `./.treeflat.toml`, or an explicit `--config` file
//! 4. Environment variables: `TREEFLAT_*` prefix, `__` for nested keys

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::ValueEnum;
use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::Comparison;

/// Name of the local config file, looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = ".treeflat.toml";

/// How a tree is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TreeFormat {
    /// Nested `{"label", "children"}` objects
    #[default]
    Json,
    /// ASCII tree
    Tree,
}

impl FromStr for TreeFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(TreeFormat::Json),
            "tree" => Ok(TreeFormat::Tree),
            other => Err(format!("unknown format: {}", other)),
        }
    }
}

impl fmt::Display for TreeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeFormat::Json => write!(f, "json"),
            TreeFormat::Tree => write!(f, "tree"),
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// How trees are printed
    pub format: TreeFormat,
    /// Indent JSON output
    pub pretty: bool,
    /// Indent width for pretty JSON
    pub indent: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: TreeFormat::Json,
            pretty: true,
            indent: 2,
        }
    }
}

/// Raw output config for intermediate parsing (Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawOutputConfig {
    pub format: Option<TreeFormat>,
    pub pretty: Option<bool>,
    pub indent: Option<usize>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub comparison: Option<Comparison>,
    pub strict: Option<bool>,
    pub output: RawOutputConfig,
}

/// Unified configuration for treeflat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Settings {
    /// Set or multiset comparison of flat lists
    pub comparison: Comparison,
    /// Reject malformed input instead of degrading silently
    pub strict: bool,
    pub output: OutputConfig,
}

/// Get the XDG config directory for treeflat.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "treeflat").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("treeflat.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Overlay wins wherever it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            comparison: overlay.comparison.unwrap_or(self.comparison),
            strict: overlay.strict.unwrap_or(self.strict),
            output: OutputConfig {
                format: overlay.output.format.unwrap_or(self.output.format),
                pretty: overlay.output.pretty.unwrap_or(self.output.pretty),
                indent: overlay.output.indent.unwrap_or(self.output.indent),
            },
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local` - Explicit config file; when None, `./.treeflat.toml` is used if present
    ///
    /// An explicit file that does not exist is an error, a missing default file is not.
    pub fn load(local: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("global config: {}", global_path.display());
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Local config
        match local {
            Some(path) => {
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
            None => {
                let path = Path::new(LOCAL_CONFIG_FILE);
                if path.exists() {
                    debug!("local config: {}", path.display());
                    let raw = load_raw_settings(path)?;
                    current = current.merge_with(&raw);
                }
            }
        }

        // 4. Environment variables
        Self::apply_env_overrides(current)
    }

    /// Apply TREEFLAT_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("TREEFLAT")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("comparison") {
            settings.comparison = match val.to_ascii_lowercase().as_str() {
                "set" => Comparison::Set,
                "multiset" => Comparison::Multiset,
                other => {
                    return Err(ApplicationError::Config {
                        message: format!("TREEFLAT_COMPARISON: unknown mode {}", other),
                    })
                }
            };
        }
        if let Ok(val) = config.get_bool("strict") {
            settings.strict = val;
        }
        if let Ok(val) = config.get_string("output.format") {
            settings.output.format = val
                .parse()
                .map_err(|message| ApplicationError::Config { message })?;
        }
        if let Ok(val) = config.get_bool("output.pretty") {
            settings.output.pretty = val;
        }
        if let Ok(val) = config.get_int("output.indent") {
            settings.output.indent = usize::try_from(val).map_err(|_| ApplicationError::Config {
                message: format!("TREEFLAT_OUTPUT__INDENT: invalid width {}", val),
            })?;
        }

        Ok(settings)
    }

    /// Render settings as TOML, as accepted by [`Settings::load`].
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}
