//! Configuration management
//!
//! Provides user defaults for generation and formatting.
//! Config is stored at `~/.config/luhnkit/config.toml`:
//!
//! ```toml
//! [generate]
//! default_month = "01"
//! default_year = "2028"
//! max_combinations = 10000000
//!
//! [format]
//! mask_char = "x"
//! mask_digits = 0
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::core::models::{DEFAULT_MONTH, DEFAULT_YEAR, TemplateDefaults};
use crate::core::services::{
    DEFAULT_MAX_COMBINATIONS, FormatOptions, GenerateOptions, MASK_CHAR, MaskDigits,
};
use crate::paths;

/// luhnkit configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Generation defaults
    #[serde(default)]
    pub generate: GenerateConfig,
    /// Formatting defaults
    #[serde(default)]
    pub format: FormatConfig,
}

/// Generation defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Month used when a template line omits it
    #[serde(default = "default_month")]
    pub default_month: String,
    /// Year used when a template line omits it
    #[serde(default = "default_year")]
    pub default_year: String,
    /// Per-template combination cap
    #[serde(default = "default_max_combinations")]
    pub max_combinations: u64,
}

fn default_month() -> String {
    DEFAULT_MONTH.to_string()
}

fn default_year() -> String {
    DEFAULT_YEAR.to_string()
}

const fn default_max_combinations() -> u64 {
    DEFAULT_MAX_COMBINATIONS
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            default_month: default_month(),
            default_year: default_year(),
            max_combinations: default_max_combinations(),
        }
    }
}

/// Formatting defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Character written over masked digits
    #[serde(default = "default_mask_char")]
    pub mask_char: char,
    /// Trailing digits to mask: 0, 4, 5 or 6
    #[serde(default)]
    pub mask_digits: MaskDigits,
}

const fn default_mask_char() -> char {
    MASK_CHAR
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            mask_char: default_mask_char(),
            mask_digits: MaskDigits::default(),
        }
    }
}

impl Config {
    /// Get the default config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from the default location
    ///
    /// A missing file gives defaults. An unreadable or malformed file is
    /// logged and also gives defaults.
    #[must_use]
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }
        Self::load_from(&path).unwrap_or_else(|e| {
            warn!("ignoring config at {}: {e:#}", path.display());
            Self::default()
        })
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Render as TOML
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Generation options derived from this config
    #[must_use]
    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            defaults: TemplateDefaults {
                month: self.generate.default_month.clone(),
                year: self.generate.default_year.clone(),
            },
            max_combinations: self.generate.max_combinations,
        }
    }

    /// Formatting options derived from this config
    #[must_use]
    pub const fn format_options(&self) -> FormatOptions {
        FormatOptions {
            mask: self.format.mask_digits,
            mask_char: self.format.mask_char,
        }
    }
}
