//! # Module Registry
//!
//! Identifiers for every module the runtime knows how to build. Which ones
//! actually run, and in which order, comes from [`crate::RuntimeConfig`].
//!
//! ```text
//!   SB_MODULES=auth,catalog
//!          │
//!          ▼
//!   ┌──────────┐   ┌──────────┐
//!   │  sb-01   │──▶│  sb-02   │   init order = list order
//!   │   auth   │   │ catalog  │
//!   └────┬─────┘   └────┬─────┘
//!        └───────┬──────┘
//!                ▼
//!        ┌───────────────┐
//!        │  shared-bus   │
//!        └───────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::container::ConfigError;

/// Module identifier following the SB naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleId {
    /// SB-01: Auth
    Auth,
    /// SB-02: Catalog
    Catalog,
}

impl ModuleId {
    /// Short name used in configuration and logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::Catalog => "catalog",
        }
    }

    /// Crate name of the module implementation.
    #[must_use]
    pub fn crate_name(&self) -> &'static str {
        match self {
            Self::Auth => "sb-01-auth",
            Self::Catalog => "sb-02-catalog",
        }
    }

    /// Modules that should be initialized before this one.
    ///
    /// Not enforced: a missing dependency only degrades behavior (an
    /// unanswered query), so configuration validation warns about it.
    #[must_use]
    pub fn dependencies(&self) -> Vec<ModuleId> {
        match self {
            Self::Auth => vec![],
            // Asks IS_LOGGED_IN during init
            Self::Catalog => vec![Self::Auth],
        }
    }

    /// Every known module, in a valid initialization order.
    #[must_use]
    pub fn all() -> Vec<ModuleId> {
        vec![Self::Auth, Self::Catalog]
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModuleId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::all()
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(wanted) || id.crate_name() == wanted)
            .ok_or_else(|| ConfigError::UnknownModule(wanted.to_string()))
    }
}
