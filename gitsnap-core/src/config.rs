//! Configuration management for gitsnap
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (GITSNAP_*)
//! 3. Config file (~/.config/gitsnap/config.toml)
//! 4. Default values

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::snapshot::SNAPSHOT_FILE;
use crate::{Error, Result};

/// Git-related configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GitConfig {
    /// Path to the git executable
    pub path: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            path: "git".to_string(),
        }
    }
}

/// Snapshot-related configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SnapshotConfig {
    /// Snapshot file name, resolved against the working directory
    pub file: String,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            file: SNAPSHOT_FILE.to_string(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Git configuration
    pub git: GitConfig,

    /// Snapshot configuration
    pub snapshot: SnapshotConfig,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();

        if let Some(path) = config_path {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/gitsnap/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("gitsnap").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - GITSNAP_GIT_PATH: Path to the git executable
    /// - GITSNAP_SNAPSHOT_FILE: Snapshot file name
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(git_path) = std::env::var("GITSNAP_GIT_PATH") {
            self.git.path = git_path;
        }

        if let Ok(file) = std::env::var("GITSNAP_SNAPSHOT_FILE") {
            self.snapshot.file = file;
        }

        self
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(
        mut self,
        git_path: Option<String>,
        snapshot_file: Option<String>,
    ) -> Self {
        if let Some(path) = git_path {
            self.git.path = path;
        }

        if let Some(file) = snapshot_file {
            self.snapshot.file = file;
        }

        self
    }

    /// Load configuration with all overrides applied
    ///
    /// Priority: CLI > env > config file > defaults
    pub fn load_with_overrides(
        git_path: Option<String>,
        snapshot_file: Option<String>,
    ) -> Result<Self> {
        Ok(Self::load()?
            .with_env_overrides()
            .with_cli_overrides(git_path, snapshot_file))
    }
}
