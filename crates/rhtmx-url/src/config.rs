// File: src/config.rs
// Purpose: URL parser settings from the [url] table of rhtmx.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default nesting limit for path levels and sibling groups
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Hard nesting limit; larger `max_depth` values are clamped to it
pub const DEPTH_CEILING: usize = 512;

/// Top-level configuration file
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub url: UrlConfig,
}

/// URL parser configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlConfig {
    /// Longest accepted input in bytes (0 = unlimited)
    #[serde(default = "default_max_length")]
    pub max_length: usize,

    /// Deepest accepted nesting of path levels and groups
    /// (0 = the hard ceiling, never unbounded)
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Reject input the grammar leaves unconsumed (default: false)
    #[serde(default = "default_false")]
    pub strict: bool,
}

// Default values
fn default_max_length() -> usize {
    8192
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_false() -> bool {
    false
}

impl Default for UrlConfig {
    fn default() -> Self {
        Self {
            max_length: default_max_length(),
            max_depth: default_max_depth(),
            strict: false,
        }
    }
}

impl UrlConfig {
    /// Nesting limit the parser enforces
    pub fn effective_max_depth(&self) -> usize {
        match self.max_depth {
            0 => DEPTH_CEILING,
            depth => depth.min(DEPTH_CEILING),
        }
    }
}

impl Config {
    /// Reads the `[url]` table from a TOML file
    ///
    /// A missing or blank file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = if path.exists() {
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?
        } else {
            String::new()
        };

        let config = if content.trim().is_empty() {
            Self::default()
        } else {
            toml::from_str::<Config>(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?
        };

        tracing::debug!("URL config from {:?}: {:?}", path, config.url);
        Ok(config)
    }

    /// Load configuration from default path (./rhtmx.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("rhtmx.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.url.max_length, 8192);
        assert_eq!(config.url.max_depth, 256);
        assert!(!config.url.strict);
    }

    #[test]
    fn test_effective_max_depth() {
        let mut url = UrlConfig::default();
        assert_eq!(url.effective_max_depth(), DEFAULT_MAX_DEPTH);

        url.max_depth = 0;
        assert_eq!(url.effective_max_depth(), DEPTH_CEILING);

        url.max_depth = 1_000_000;
        assert_eq!(url.effective_max_depth(), DEPTH_CEILING);

        url.max_depth = 3;
        assert_eq!(url.effective_max_depth(), 3);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = Config::load("definitely/not/here/rhtmx.toml").unwrap();
        assert_eq!(config.url, UrlConfig::default());
    }

    #[test]
    fn test_partial_table() {
        let config: Config = toml::from_str("[url]\nstrict = true\n").unwrap();
        assert!(config.url.strict);
        assert_eq!(config.url.max_length, 8192);
        assert_eq!(config.url.max_depth, 256);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[url]\nmax_length = 0\nmax_depth = 32\nstrict = true").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.url.max_length, 0);
        assert_eq!(config.url.max_depth, 32);
        assert!(config.url.strict);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[url]\nmax_length = \"lots\"").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
