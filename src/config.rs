use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Spaces per indentation level
pub const INDENT_WIDTH: usize = 4;

/// Column at which summary values start (indent + label + padding)
pub const LABEL_COLUMN_WIDTH: usize = 19;

/// Dictionary key whose byte string value is binary hash data
pub const PIECES_KEY: &[u8] = b"pieces";

/// Binary unit prefixes, each step is a factor of 1024
pub const UNIT_SUFFIXES: [char; 8] = ['K', 'M', 'G', 'T', 'P', 'E', 'Z', 'Y'];

/// Environment variable overriding the configuration file location
pub const CONFIG_ENV: &str = "TORRINFO_CONFIG";

/// How the torrent summary is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Compact,
    Detailed,
    #[serde(rename = "files")]
    FilesOnly,
}

/// User settings read from `config.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Emit ANSI colours
    pub colors: bool,
    /// Display mode used when no mode flag is given
    pub mode: DisplayMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            colors: true,
            mode: DisplayMode::Compact,
        }
    }
}

impl Config {
    /// Load the configuration, falling back to defaults when no file exists
    pub fn load() -> Result<Self> {
        match Self::path() {
            Some(path) if path.exists() => Self::load_from(&path),
            Some(path) => {
                log::debug!("no config file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        log::debug!("loading config from {}", path.display());
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    fn path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from("", "", "torrinfo").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
