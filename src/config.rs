//! Configuration file handling for asciify.
//!
//! Loads defaults from `~/.config/asciify/config.toml` or a custom path.
//! Command-line flags override anything set here.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ascii::check_aspect;
use crate::geometry::Margin;
use crate::render::PaperSize;

/// Configuration file structure for asciify.
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub sampling: SamplingConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct SamplingConfig {
    /// Horizontal stretch applied before sampling.
    pub aspect: Option<f32>,
    /// Number of character columns.
    pub resolution: Option<u32>,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct RenderConfig {
    pub paper: Option<PaperSize>,
    /// Font file for ramp generation and the document font name.
    pub font: Option<PathBuf>,
    /// Deflate PDF content streams.
    pub compress: Option<bool>,
    pub margin: Option<Margin>,
}

impl Config {
    /// Load configuration from `path`, or the default location.
    /// Returns default config if the default file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from_explicit(path),
            None => {
                let path = default_path();
                if path.exists() {
                    Self::load_from_explicit(&path)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }

    /// Load configuration from a path the user asked for; the file must exist.
    pub fn load_from_explicit(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = Self::parse(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;
        config
            .validate()
            .map_err(|message| ConfigError::InvalidValue {
                path: path.to_path_buf(),
                message,
            })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Apply the same range checks the command line applies to its flags.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(aspect) = self.sampling.aspect {
            check_aspect(aspect).map_err(|e| format!("sampling.aspect: {}", e))?;
        }
        if self.sampling.resolution == Some(0) {
            return Err("sampling.resolution must be at least 1".to_string());
        }
        if let Some(margin) = self.render.margin {
            margin
                .check()
                .map_err(|e| format!("render.margin: {}", e))?;
        }
        Ok(())
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {source}", .path.display())]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value in config file '{}': {message}", .path.display())]
    InvalidValue { path: PathBuf, message: String },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("asciify").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/asciify/config.toml")
        })
}
