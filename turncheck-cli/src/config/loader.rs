//! Config file discovery and loading.

use super::types::TurncheckConfig;
use std::path::{Path, PathBuf};

/// A config file location and whether it exists.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct ConfigSource {
    /// Path to the config file
    pub path: PathBuf,

    /// Whether this file actually exists
    pub exists: bool,
}

impl ConfigSource {
    /// Create a new config source from a path.
    pub fn new(path: PathBuf) -> Self {
        let exists = path.is_file();
        Self { path, exists }
    }
}

/// Handles config file discovery and loading.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// User-global config (~/.turncheck/config.toml)
    global_source: ConfigSource,

    /// Project-local config (./turncheck.toml)
    local_source: ConfigSource,

    /// Config passed with --config
    explicit_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a loader for the standard locations plus an optional explicit file.
    ///
    /// Discovers config files in standard locations:
    /// - `~/.turncheck/config.toml` (user-global)
    /// - `./turncheck.toml` (project-local)
    pub fn new(explicit_path: Option<PathBuf>) -> Self {
        Self::with_paths(
            Self::global_config_path(),
            Self::local_config_path(),
            explicit_path,
        )
    }

    /// Create a loader with custom discovery paths.
    pub fn with_paths(global: PathBuf, local: PathBuf, explicit_path: Option<PathBuf>) -> Self {
        Self {
            global_source: ConfigSource::new(global),
            local_source: ConfigSource::new(local),
            explicit_path,
        }
    }

    /// Get the path to the user-global config file.
    pub fn global_config_path() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".turncheck").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".turncheck/config.toml"))
    }

    /// Get the path to the project-local config file.
    pub fn local_config_path() -> PathBuf {
        PathBuf::from("turncheck.toml")
    }

    /// Load config from all sources, merging them together.
    ///
    /// Discovered files that fail to load are logged and skipped. An explicit
    /// file must exist and parse.
    ///
    /// Returns the merged config and a list of files that were loaded.
    pub fn load(&self) -> Result<(TurncheckConfig, Vec<PathBuf>), ConfigError> {
        let mut config = TurncheckConfig::default();
        let mut loaded_files = Vec::new();

        for source in [&self.global_source, &self.local_source] {
            if !source.exists {
                continue;
            }
            match Self::load_file(&source.path) {
                Ok(file_config) => {
                    config.merge(file_config);
                    loaded_files.push(source.path.clone());
                }
                Err(e) => {
                    log::warn!("Skipping config {}: {}", source.path.display(), e);
                }
            }
        }

        if let Some(path) = &self.explicit_path {
            config.merge(Self::load_file(path)?);
            loaded_files.push(path.clone());
        }

        if config.is_empty() {
            log::debug!("No config files found, using defaults");
        }
        for path in &loaded_files {
            log::info!("Loaded config from {}", path.display());
        }

        Ok((config, loaded_files))
    }

    /// Load a single config file.
    fn load_file(path: &Path) -> Result<TurncheckConfig, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }
}

/// Errors that can occur when loading config.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// IO error reading config file
    Io { path: PathBuf, error: String },
    /// Parse error in config file
    Parse { path: PathBuf, error: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io { path, error } => {
                write!(f, "Failed to read {}: {}", path.display(), error)
            }
            ConfigError::Parse { path, error } => {
                write!(f, "Failed to parse {}: {}", path.display(), error)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
