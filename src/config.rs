//! Configuration for the `robots` driver.
//!
//! Precedence, highest first:
//! - command-line flags (applied by the caller)
//! - `ROBOTS_FORMAT` environment variable
//! - JSON file from `--config`, or `<config_dir>/robot-builder/config.json`
//! - built-in defaults

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};

use crate::builder::RobotKind;
use crate::error::Error;
use crate::render::OutputFormat;

const APP_NAME: &str = "robot-builder";
const CONFIG_FILE: &str = "config.json";
pub const FORMAT_ENV: &str = "ROBOTS_FORMAT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output format when no `--format` flag is given.
    pub format: OutputFormat,
    /// Robots built when the driver runs without a subcommand.
    pub default_kinds: Vec<RobotKind>,
    /// How many times the director runs on each builder.
    pub runs: usize,
    /// Reset the builder between runs instead of stacking parts.
    pub fresh: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            default_kinds: RobotKind::ALL.to_vec(),
            runs: 1,
            fresh: false,
        }
    }
}

impl Config {
    /// Load configuration from a file.
    ///
    /// An explicit path must exist and parse. The default location is
    /// optional: a missing or broken file there falls back to defaults.
    /// Environment and flag overrides are resolved later, per command.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => Ok(Self::load_from_default(default_config_path().as_deref())),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::Config(e.to_string()).into())
    }

    /// Load from the default location, never failing.
    pub fn load_from_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("Could not determine config directory, using defaults");
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match Self::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {:#}", e);
                Self::default()
            }
        }
    }

    /// Raw `ROBOTS_FORMAT` value, left unparsed until a format is needed.
    pub fn env_format() -> Option<String> {
        std::env::var(FORMAT_ENV).ok()
    }

    /// Pick the output format: flag, then environment, then file.
    ///
    /// Only the winning source is parsed, so a bad environment value is
    /// harmless once a flag is given.
    pub fn resolve_format(&self, flag: Option<&str>, env: Option<&str>) -> Result<OutputFormat> {
        if let Some(raw) = flag {
            return Ok(OutputFormat::parse(raw)?);
        }
        match env.filter(|s| !s.trim().is_empty()) {
            Some(raw) => OutputFormat::parse(raw)
                .with_context(|| format!("Invalid {} value", FORMAT_ENV)),
            None => Ok(self.format),
        }
    }

    /// `--fresh` and `--stack` each override the file; neither keeps it.
    pub fn resolve_fresh(&self, fresh: bool, stack: bool) -> bool {
        match (fresh, stack) {
            (true, _) => true,
            (false, true) => false,
            (false, false) => self.fresh,
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    let mut path = config_dir()?;
    path.push(APP_NAME);
    path.push(CONFIG_FILE);
    Some(path)
}
