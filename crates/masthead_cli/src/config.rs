//! Masthead configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "masthead.toml";

/// Top-level Masthead configuration (masthead.toml)
#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MastheadConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub resolver: ResolverConfig,
}

/// Theme selection
#[derive(Debug, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    /// Brand used when a command does not name one (camelCase or kebab-case)
    #[serde(default = "default_brand")]
    pub default_brand: String,
    /// Token directory replacing the embedded documents
    #[serde(default)]
    pub tokens_dir: Option<PathBuf>,
}

fn default_brand() -> String {
    "carAndDriver".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default_brand: default_brand(),
            tokens_dir: None,
        }
    }
}

/// Reference resolution
#[derive(Debug, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ResolverConfig {
    /// Maximum reference hops before giving up
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

fn default_max_depth() -> usize {
    masthead_tokens::DEFAULT_MAX_DEPTH
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

impl MastheadConfig {
    /// Load an explicitly named config file; it must exist
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let mut config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        // Relative token directories are relative to the config file.
        if let (Some(dir), Some(parent)) = (config.theme.tokens_dir.as_mut(), path.parent()) {
            if dir.is_relative() {
                *dir = parent.join(&*dir);
            }
        }
        Ok(config)
    }

    /// Load `masthead.toml` from a directory, or the defaults if there is none
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE);
        if !config_path.exists() {
            tracing::debug!(dir = %dir.display(), "no masthead.toml, using defaults");
            return Ok(Self::default());
        }
        Self::load(&config_path)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid masthead configuration")
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
