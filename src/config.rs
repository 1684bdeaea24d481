//! Configuration loading for the mdpress CLI.
//!
//! Defines the TOML configuration structures, default-file generation,
//! and discovery logic: `.mdpress.toml` or `mdpress.toml`, found by
//! walking from the working directory toward the filesystem root.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

use crate::RenderOptions;

/// Candidate configuration file names, in discovery order.
const CONFIG_FILE_NAMES: &[&str] = &[".mdpress.toml", "mdpress.toml"];

/// Represents the complete configuration loaded from a config file.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Input-selection options
    pub global: GlobalConfig,

    /// HTML output options
    pub html: HtmlConfig,
}

impl Config {
    /// Render options derived from this configuration.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            escape: self.html.escape,
        }
    }

    /// Load configuration from an explicit path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.display().to_string(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Discover and load the configuration governing `start_dir`.
    ///
    /// Walks from `start_dir` to the filesystem root and loads the
    /// first `.mdpress.toml` or `mdpress.toml` found; returns the
    /// built-in defaults when there is none.
    pub fn discover(start_dir: &Path) -> Result<Self, ConfigError> {
        for dir in start_dir.ancestors() {
            for name in CONFIG_FILE_NAMES {
                let candidate = dir.join(name);
                if candidate.is_file() {
                    log::debug!("Loading configuration from {}", candidate.display());
                    return Self::load(&candidate);
                }
            }
        }
        Ok(Self::default())
    }
}

/// Input-selection options used when scanning directories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct GlobalConfig {
    /// Glob patterns selecting files to render; empty means every
    /// Markdown file
    pub include: Vec<String>,

    /// Glob patterns for files to skip
    pub exclude: Vec<String>,

    /// Respect .gitignore files when scanning directories
    pub respect_gitignore: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            include: Vec::new(),
            exclude: Vec::new(),
            respect_gitignore: true,
        }
    }
}

/// HTML output options.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct HtmlConfig {
    /// HTML-escape text content before emphasis substitution
    pub escape: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write config file at {path}: {source}")]
    WriteError {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Configuration file already exists at {path}")]
    FileExists { path: String },
}

/// Default configuration file content written by `mdpress init`.
const DEFAULT_CONFIG: &str = r#"# mdpress configuration file

[global]
# Glob patterns selecting the files to render (empty = every Markdown file)
include = []
# Glob patterns for files to skip
exclude = []
# Respect .gitignore files when scanning directories
respect-gitignore = true

[html]
# HTML-escape text content (&, <, >) before emphasis substitution.
# Off by default: input is treated as trusted, author-authored text.
escape = false
"#;

/// Create a default configuration file at the specified path.
pub fn create_default_config(path: &str) -> Result<(), ConfigError> {
    if Path::new(path).exists() {
        return Err(ConfigError::FileExists { path: path.to_string() });
    }

    fs::write(path, DEFAULT_CONFIG).map_err(|source| ConfigError::WriteError {
        path: path.to_string(),
        source,
    })
}
