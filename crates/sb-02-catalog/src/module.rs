//! Bus adapter for the Catalog module.
//!
//! On init the catalog asks `IS_LOGGED_IN` once. Whoever answers during
//! that publish sets the initial flag; with no answer it stays logged out.
//! Every `ADD_PRODUCT` re-asks before touching the product list.

use crate::domain::Catalog;
use parking_lot::RwLock;
use shared_bus::{
    on, EventPublisher, EventSubscriber, ListenerError, Module, ModuleError, Publisher,
    Subscriber,
};
use shared_messages::{reply, Product, Reply, ADD_PRODUCT, IS_LOGGED_IN};
use std::sync::Arc;
use tracing::{debug, info, warn};

const MODULE_NAME: &str = "catalog";

/// The Catalog module.
#[derive(Debug, Default)]
pub struct CatalogModule {
    state: Arc<RwLock<Catalog>>,
}

impl CatalogModule {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the catalog, for the host and tests.
    #[must_use]
    pub fn handle(&self) -> CatalogHandle {
        CatalogHandle {
            state: self.state.clone(),
        }
    }
}

/// Read-only view of the Catalog state.
#[derive(Debug, Clone)]
pub struct CatalogHandle {
    state: Arc<RwLock<Catalog>>,
}

impl CatalogHandle {
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.state.read().is_logged_in()
    }

    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        self.state.read().products().to_vec()
    }
}

fn set_logged_in(state: &Arc<RwLock<Catalog>>) -> Reply<bool> {
    let state = state.clone();
    reply(move |value: bool| {
        debug!(module = MODULE_NAME, logged_in = value, "Login state received");
        state.write().set_logged_in(value);
    })
}

impl Module for CatalogModule {
    fn name(&self) -> &'static str {
        MODULE_NAME
    }

    fn init(&self, publisher: Publisher, subscriber: Subscriber) -> Result<(), ModuleError> {
        publisher.publish(&IS_LOGGED_IN.create(set_logged_in(&self.state)))?;

        let state = self.state.clone();
        let _ = subscriber.subscribe(on(ADD_PRODUCT, move |product: &Product| {
            publisher.publish(&IS_LOGGED_IN.create(set_logged_in(&state)))?;

            state.write().add(product.clone()).map_err(|e| {
                warn!(module = MODULE_NAME, product = %product.name, error = %e, "Product rejected");
                ListenerError::rejected(e.to_string())
            })?;
            info!(module = MODULE_NAME, product = %product.name, price = product.price, "Product added");
            Ok(())
        }));

        debug!(
            module = MODULE_NAME,
            logged_in = self.state.read().is_logged_in(),
            "Listeners registered"
        );
        Ok(())
    }
}
