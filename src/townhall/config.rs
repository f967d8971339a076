//! # Configuration
//!
//! Settings live in `config.json` inside the data directory. A missing file
//! means defaults; missing keys inside the file mean per-key defaults. A value
//! that is out of range falls back to its default with a warning, so only
//! malformed JSON keeps townhall from starting.
//!
//! | Key             | Default | Description                                  |
//! |-----------------|---------|----------------------------------------------|
//! | `page-size`     | `6`     | Items per page on the events board            |
//! | `excerpt-width` | `120`   | Columns before list descriptions are cut      |
//! | `log-level`     | `warn`  | Diagnostics on stderr (off, error ... trace)  |
//!
//! `townhall config` shows all keys, `townhall config <key>` one key and
//! `townhall config <key> <value>` sets it.

use crate::engine::DEFAULT_PAGE_SIZE;
use crate::error::{Result, TownhallError};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_EXCERPT_WIDTH: usize = 120;
const MIN_EXCERPT_WIDTH: usize = 10;

pub const KEYS: &[&str] = &["page-size", "excerpt-width", "log-level"];

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct TownhallConfig {
    pub page_size: NonZeroUsize,
    pub excerpt_width: usize,
    pub log_level: String,
}

/// `config.json` as found on disk, before any range checks.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct StoredConfig {
    page_size: Option<usize>,
    excerpt_width: Option<usize>,
    log_level: Option<String>,
}

impl StoredConfig {
    /// Applies each stored value through [`TownhallConfig::set`]. A value that
    /// `set` refuses keeps its default and is reported.
    fn into_config(self) -> (TownhallConfig, Vec<String>) {
        let mut config = TownhallConfig::default();
        let stored = [
            ("page-size", self.page_size.map(|n| n.to_string())),
            ("excerpt-width", self.excerpt_width.map(|n| n.to_string())),
            ("log-level", self.log_level),
        ];

        let mut resets = Vec::new();
        for (key, value) in stored {
            let Some(value) = value else { continue };
            if let Err(e) = config.set(key, &value) {
                let default = config.get(key).unwrap_or_default();
                resets.push(format!("{}: {}; using {}", CONFIG_FILENAME, e, default));
            }
        }
        (config, resets)
    }
}

fn default_page_size() -> NonZeroUsize {
    DEFAULT_PAGE_SIZE
}

fn default_excerpt_width() -> usize {
    DEFAULT_EXCERPT_WIDTH
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for TownhallConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            excerpt_width: default_excerpt_width(),
            log_level: default_log_level(),
        }
    }
}

impl TownhallConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        Self::load_checked(config_dir).map(|(config, _)| config)
    }

    /// Like [`load`](Self::load), also returning one line per out-of-range
    /// value that was reset to its default. Only unreadable or malformed JSON
    /// is an error, so `townhall config` can always repair the file.
    pub fn load_checked<P: AsRef<Path>>(config_dir: P) -> Result<(Self, Vec<String>)> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok((Self::default(), Vec::new()));
        }

        let content = fs::read_to_string(&config_path).map_err(TownhallError::Io)?;
        let stored: StoredConfig = serde_json::from_str(&content)?;
        Ok(stored.into_config())
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TownhallError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content).map_err(TownhallError::Io)?;
        Ok(())
    }

    pub fn log_level(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Warn)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "page-size" => Some(self.page_size.to_string()),
            "excerpt-width" => Some(self.excerpt_width.to_string()),
            "log-level" => Some(self.log_level.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        let value = value.trim();
        match key {
            "page-size" => {
                let n = value
                    .parse::<NonZeroUsize>()
                    .map_err(|_| format!("page-size must be a positive integer, got '{}'", value))?;
                self.page_size = n;
            }
            "excerpt-width" => {
                let n = value
                    .parse::<usize>()
                    .map_err(|_| format!("excerpt-width must be an integer, got '{}'", value))?;
                if n < MIN_EXCERPT_WIDTH {
                    return Err(format!("excerpt-width must be at least {}", MIN_EXCERPT_WIDTH));
                }
                self.excerpt_width = n;
            }
            "log-level" => {
                let level = LevelFilter::from_str(value).map_err(|_| {
                    format!(
                        "log-level must be one of off, error, warn, info, debug, trace; got '{}'",
                        value
                    )
                })?;
                self.log_level = level.to_string().to_lowercase();
            }
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(String, String)> {
        KEYS.iter()
            .filter_map(|k| self.get(k).map(|v| (k.to_string(), v)))
            .collect()
    }
}
