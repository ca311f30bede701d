//! # Runtime Configuration
//!
//! Sources, later ones win:
//!
//! 1. Built-in defaults (`auth`, then `catalog`)
//! 2. JSON file named by `SB_CONFIG`
//! 3. Environment overrides: `SB_MODULES` (comma separated), `SB_SESSION`
//!
//! Loading only parses; [`RuntimeConfig::validate`] runs when the runtime
//! starts.

use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::registry::ModuleId;

/// Complete runtime configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeConfig {
    /// Modules to initialize, in initialization order.
    pub modules: Vec<ModuleId>,
    /// Session script replayed after bootstrap.
    pub session: Option<PathBuf>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            modules: ModuleId::all(),
            session: None,
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown module `{0}`")]
    UnknownModule(String),

    #[error("module `{0}` is listed more than once")]
    DuplicateModule(ModuleId),

    #[error("no modules configured")]
    NoModules,

    #[error("cannot read config file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl RuntimeConfig {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Same as [`Self::load`] with an injectable variable source.
    pub fn load_from(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = match lookup("SB_CONFIG") {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };

        if let Some(list) = lookup("SB_MODULES") {
            config.modules = parse_module_list(&list)?;
        }
        if let Some(path) = lookup("SB_SESSION") {
            config.session = Some(PathBuf::from(path));
        }

        Ok(config)
    }

    /// Read a JSON config file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Check the module list.
    ///
    /// Returns warnings for dependencies that are missing or ordered after
    /// their dependent; those are logged but do not fail validation.
    pub fn validate(&self) -> Result<Vec<String>, ConfigError> {
        if self.modules.is_empty() {
            return Err(ConfigError::NoModules);
        }

        let mut seen = HashSet::new();
        for id in &self.modules {
            if !seen.insert(*id) {
                return Err(ConfigError::DuplicateModule(*id));
            }
        }

        let mut warnings = Vec::new();
        for (position, id) in self.modules.iter().enumerate() {
            for dep in id.dependencies() {
                match self.modules.iter().position(|m| *m == dep) {
                    None => warnings.push(format!("`{id}` expects `{dep}`, which is not enabled")),
                    Some(dep_position) if dep_position > position => warnings.push(format!(
                        "`{id}` is initialized before its dependency `{dep}`"
                    )),
                    Some(_) => {}
                }
            }
        }

        for warning in &warnings {
            warn!("{}", warning);
        }

        Ok(warnings)
    }
}

/// Parse `auth,catalog` style lists. Blank entries are ignored.
pub fn parse_module_list(list: &str) -> Result<Vec<ModuleId>, ConfigError> {
    list.split(',')
        .filter(|entry| !entry.trim().is_empty())
        .map(|entry| entry.parse::<ModuleId>())
        .collect()
}
