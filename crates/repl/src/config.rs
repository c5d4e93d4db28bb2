//! Shell configuration
//!
//! Settings come from a TOML file. Lookup order:
//!
//! 1. `--config PATH` on the command line
//! 2. `$RPNC_CONFIG`
//! 3. `~/.rpnc.toml`, if it exists
//! 4. Built-in defaults
//!
//! A file named explicitly (1 or 2) must exist. Command-line flags are
//! applied on top of whatever was loaded.
//!
//! ```toml
//! prompt = "rpn> "
//! debug = false
//! history_limit = 100
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "RPNC_CONFIG";

/// File looked up in the home directory
pub const DEFAULT_CONFIG_FILE: &str = ".rpnc.toml";

#[derive(Debug)]
pub enum ConfigError {
    /// The config file could not be read
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The config file is not valid TOML or has unknown keys
    Parse {
        path: Option<PathBuf>,
        source: toml::de::Error,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "cannot read config {}: {}", path.display(), source)
            }
            ConfigError::Parse {
                path: Some(path),
                source,
            } => write!(f, "invalid config {}: {}", path.display(), source),
            ConfigError::Parse { path: None, source } => write!(f, "invalid config: {}", source),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    /// Prompt printed before each input line
    pub prompt: String,

    /// Start with debug tracing enabled
    pub debug: bool,

    /// Keep at most this many history entries, dropping the oldest
    pub history_limit: Option<usize>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            prompt: "> ".to_string(),
            debug: false,
            history_limit: None,
        }
    }
}

impl ShellConfig {
    pub fn new() -> Self {
        ShellConfig::default()
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|source| ConfigError::Parse { path: None, source })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: Some(path.to_path_buf()),
            source,
        })
    }

    /// Find and load the config file, falling back to defaults
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "loading config from command line");
            return Self::load(path);
        }

        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            let path = PathBuf::from(path);
            tracing::debug!(path = %path.display(), "loading config from {}", CONFIG_ENV);
            return Self::load(&path);
        }

        let home_config = home::home_dir()
            .map(|home| home.join(DEFAULT_CONFIG_FILE))
            .filter(|path| path.is_file());
        if let Some(path) = home_config {
            tracing::debug!(path = %path.display(), "loading config from home directory");
            return Self::load(&path);
        }

        Ok(Self::default())
    }
}
