//! # Module Container
//!
//! Instantiates the configured modules and keeps their read-only handles.
//! The metrics tap always sits at position 0 so it observes every message,
//! including the ones modules publish during their own init.

pub mod config;

pub use config::{parse_module_list, ConfigError, RuntimeConfig};

use sb_01_auth::{AuthHandle, AuthModule};
use sb_02_catalog::{CatalogHandle, CatalogModule};
use shared_bus::{bootstrap, BootstrapError, Bus, Module};

use crate::registry::ModuleId;
use crate::tap::MetricsTap;

/// Modules in initialization order, plus handles to observe them.
pub struct ModuleContainer {
    ids: Vec<ModuleId>,
    modules: Vec<Box<dyn Module>>,
    auth: Option<AuthHandle>,
    catalog: Option<CatalogHandle>,
}

impl ModuleContainer {
    /// Build one instance per id, preserving order.
    pub fn new(ids: &[ModuleId]) -> Self {
        let mut modules: Vec<Box<dyn Module>> = vec![Box::new(MetricsTap)];
        let mut auth = None;
        let mut catalog = None;

        for id in ids {
            match id {
                ModuleId::Auth => {
                    let module = AuthModule::new();
                    auth = Some(module.handle());
                    modules.push(Box::new(module));
                }
                ModuleId::Catalog => {
                    let module = CatalogModule::new();
                    catalog = Some(module.handle());
                    modules.push(Box::new(module));
                }
            }
        }

        Self {
            ids: ids.to_vec(),
            modules,
            auth,
            catalog,
        }
    }

    /// Configured modules, without the tap.
    pub fn ids(&self) -> &[ModuleId] {
        &self.ids
    }

    /// Names in bootstrap order, tap included.
    pub fn names(&self) -> Vec<&'static str> {
        self.modules.iter().map(|m| m.name()).collect()
    }

    pub fn auth(&self) -> Option<&AuthHandle> {
        self.auth.as_ref()
    }

    pub fn catalog(&self) -> Option<&CatalogHandle> {
        self.catalog.as_ref()
    }

    /// Create a fresh bus and initialize every module on it.
    pub fn bootstrap(&self) -> Result<Bus, BootstrapError> {
        let modules: Vec<&dyn Module> = self.modules.iter().map(|m| m.as_ref()).collect();
        bootstrap(&modules)
    }
}
