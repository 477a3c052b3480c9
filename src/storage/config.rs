//! Configuration handling for Lucky Draw
//!
//! Configuration is read from the first of: an explicit `--config` path,
//! the nearest `.lucky.toml` in the current directory or a parent, and
//! `~/.config/lucky-draw/config.toml` (global). Missing files mean defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File name of a local configuration
pub const LOCAL_CONFIG_FILE: &str = ".lucky.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Settings for the lucky draw
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DrawConfig {
    /// Allow the same name to win more than once
    pub allow_repeat: bool,

    /// Number of cosmetic picks shown before the winner
    pub spin_ticks: u32,

    /// Delay between cosmetic picks in milliseconds
    pub spin_interval_ms: u64,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            allow_repeat: false,
            spin_ticks: 20,
            spin_interval_ms: 100,
        }
    }
}

/// Settings for random grouping
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GroupConfig {
    /// Default number of names per group
    pub size: usize,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self { size: 3 }
    }
}

/// Output format for commands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// All settings
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Default output format (text or json)
    pub default_format: OutputFormat,

    pub draw: DrawConfig,

    pub group: GroupConfig,
}

impl Settings {
    /// Rejects values the engines cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.group.size == 0 {
            return Err(ConfigError::Invalid(
                "group.size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Loaded configuration and where it came from
#[derive(Debug, Clone)]
pub struct Config {
    pub settings: Settings,
    pub path: Option<PathBuf>,
}

impl Config {
    /// Loads configuration, preferring `explicit` when given
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            let settings = Self::load_file(path)?;
            return Ok(Self {
                settings,
                path: Some(path.to_path_buf()),
            });
        }

        let candidate = Self::find_local_config().or_else(|| {
            Self::global_config_dir()
                .map(|dir| dir.join("config.toml"))
                .filter(|path| path.is_file())
        });

        match candidate {
            Some(path) => Ok(Self {
                settings: Self::load_file(&path)?,
                path: Some(path),
            }),
            None => Ok(Self::default()),
        }
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "lucky", "lucky-draw").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Loads and validates a single TOML file
    fn load_file(path: &Path) -> Result<Settings> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let settings: Settings = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        settings
            .validate()
            .with_context(|| format!("Invalid config: {}", path.display()))?;

        Ok(settings)
    }

    /// Finds the nearest `.lucky.toml` walking up from the current directory
    pub fn find_local_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;

        loop {
            let candidate = current.join(LOCAL_CONFIG_FILE);
            if candidate.is_file() {
                return Some(candidate);
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// Writes a commented default `.lucky.toml` into `dir`
    ///
    /// Returns the path and whether a new file was written. An existing file
    /// is left alone.
    pub fn init_local(dir: &Path) -> Result<(PathBuf, bool)> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

        let path = dir.join(LOCAL_CONFIG_FILE);
        if path.exists() {
            return Ok((path, false));
        }

        fs::write(&path, DEFAULT_CONFIG)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok((path, true))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            path: None,
        }
    }
}

const DEFAULT_CONFIG: &str = r#"# Lucky Draw configuration

# Output format for all commands: "text" or "json"
default_format = "text"

[draw]
# Let a name win more than once
allow_repeat = false
# Cosmetic picks shown before the winner, and the delay between them
spin_ticks = 20
spin_interval_ms = 100

[group]
# Names per group
size = 3
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_settings() {
        let settings = Settings::default();
        assert!(!settings.draw.allow_repeat);
        assert_eq!(settings.draw.spin_ticks, 20);
        assert_eq!(settings.draw.spin_interval_ms, 100);
        assert_eq!(settings.group.size, 3);
        assert_eq!(settings.default_format, OutputFormat::Text);
    }

    #[test]
    fn parse_partial_config() {
        let toml = r#"
default_format = "json"

[group]
size = 5
"#;

        let settings: Settings = toml::from_str(toml).unwrap();
        assert_eq!(settings.default_format, OutputFormat::Json);
        assert_eq!(settings.group.size, 5);
        assert_eq!(settings.draw, DrawConfig::default());
    }

    #[test]
    fn default_file_parses_to_defaults() {
        let settings: Settings = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn zero_group_size_is_invalid() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[group]\nsize = 0\n").unwrap();

        assert!(Config::load(Some(path.as_path())).is_err());
    }

    #[test]
    fn explicit_path_is_used() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[draw]\nallow_repeat = true\n").unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert!(config.settings.draw.allow_repeat);
        assert_eq!(config.path, Some(path));
    }

    #[test]
    fn init_local_is_idempotent() {
        let dir = TempDir::new().unwrap();

        let (path, created) = Config::init_local(dir.path()).unwrap();
        assert!(created);
        assert!(path.is_file());

        fs::write(&path, "[group]\nsize = 7\n").unwrap();
        let (_, created) = Config::init_local(dir.path()).unwrap();
        assert!(!created);
        assert_eq!(fs::read_to_string(&path).unwrap(), "[group]\nsize = 7\n");
    }

    #[test]
    fn unparsable_config_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "draw = [").unwrap();

        let err = Config::load(Some(path.as_path())).unwrap_err();
        assert!(format!("{:#}", err).contains("broken.toml"));
    }
}
