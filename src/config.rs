//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/morsetree/morsetree.toml`
//! 3. Explicit config file: `--config <file>` / `MORSETREE_CONFIG`
//! 4. Environment variables: `MORSETREE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::{ApplicationError, Decoder, PLACEHOLDER, TERMINATOR};
use crate::domain::{DASH, DOT};

/// Unified configuration for morsetree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Character printed for unknown letter codes (default: '?')
    pub placeholder: char,
    /// Colorize terminal output (default: true)
    pub color: bool,
    /// Decode multi-line input in parallel (default: true)
    pub parallel: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            placeholder: PLACEHOLDER,
            color: true,
            parallel: true,
        }
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, inherit from base).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub placeholder: Option<char>,
    pub color: Option<bool>,
    pub parallel: Option<bool>,
}

/// Get the XDG config directory for morsetree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "morsetree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("morsetree.toml"))
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

impl Settings {
    /// Merge overlay config onto self (base): overlay wins if Some.
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            placeholder: overlay.placeholder.unwrap_or(self.placeholder),
            color: overlay.color.unwrap_or(self.color),
            parallel: overlay.parallel.unwrap_or(self.parallel),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("load: global config {}", global_path.display());
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Explicit config file
        if let Some(path) = config_file {
            if !path.exists() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            debug!("load: config file {}", path.display());
            let raw = load_raw_settings(path)?;
            current = current.merge_with(&raw);
        }

        // 4. Environment variables
        current = Self::apply_env_overrides(current)?;

        current.validate()?;
        Ok(current)
    }

    /// Apply MORSETREE_* environment variables as explicit overrides.
    fn apply_env_overrides(settings: Self) -> Result<Self, ApplicationError> {
        Self::apply_env_source(settings, env_source())
    }

    /// Apply overrides from an environment source.
    ///
    /// Unset keys keep the current value. Values that do not parse are a
    /// config error, same as in a config file.
    pub fn apply_env_source(
        mut settings: Self,
        source: Environment,
    ) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(source)
            .build()
            .map_err(config_err)?;

        if let Some(val) = optional(config.get_string("placeholder"))? {
            settings.placeholder = parse_placeholder(&val)?;
        }
        if let Some(val) = optional(config.get_bool("color"))? {
            settings.color = val;
        }
        if let Some(val) = optional(config.get_bool("parallel"))? {
            settings.parallel = val;
        }

        Ok(settings)
    }

    /// Reject placeholders that would be mistaken for message syntax.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        let c = self.placeholder;
        if c.is_whitespace() || c == DOT || c == DASH || c == TERMINATOR {
            return Err(ApplicationError::Config {
                message: format!("invalid placeholder {c:?}: must not be whitespace, '.', '-' or '#'"),
            });
        }
        Ok(())
    }

    /// Build a decoder for the built-in alphabet honoring these settings.
    pub fn decoder(&self) -> Decoder {
        Decoder::new().with_placeholder(self.placeholder)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# morsetree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/morsetree/morsetree.toml
#   File:   --config <file> or MORSETREE_CONFIG
#   Env:    MORSETREE_PLACEHOLDER, MORSETREE_COLOR, MORSETREE_PARALLEL

# Character printed for unknown letter codes
# placeholder = "?"

# Colorize output
# color = true

# Decode multi-line input in parallel
# parallel = true
"#
        .to_string()
    }
}

fn parse_placeholder(val: &str) -> Result<char, ApplicationError> {
    let mut chars = val.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ApplicationError::Config {
            message: format!("placeholder must be a single character, got {val:?}"),
        }),
    }
}

/// `MORSETREE_PLACEHOLDER` maps to key `placeholder`; `__` separates nested keys.
pub fn env_source() -> Environment {
    Environment::with_prefix("MORSETREE")
        .prefix_separator("_")
        .separator("__")
}

fn optional<T>(result: Result<T, ConfigError>) -> Result<Option<T>, ApplicationError> {
    match result {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(config_err(e)),
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
