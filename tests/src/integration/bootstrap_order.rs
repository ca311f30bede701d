//! # Bootstrap Order
//!
//! Initialization order is part of the contract: a module's init-time
//! publish reaches only listeners registered by modules before it.

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    use sb_01_auth::AuthModule;
    use sb_02_catalog::CatalogModule;
    use shared_bus::{
        bootstrap, module_fn, on, BootstrapError, EventPublisher, EventSubscriber, ListenerError,
        ModuleError, Publisher, Subscriber,
    };
    use shared_messages::{Credentials, Product, Reply, ADD_PRODUCT, IS_LOGGED_IN, LOGIN};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn auto_login(publisher: Publisher, _subscriber: Subscriber) -> Result<(), ModuleError> {
        publisher.publish(&LOGIN.create(Credentials::new("boot", "pw")))?;
        Ok(())
    }

    // =============================================================================
    // ORDER
    // =============================================================================

    #[test]
    fn test_auth_then_catalog_starts_logged_out() {
        let auth = AuthModule::new();
        let catalog = CatalogModule::new();

        let bus = bootstrap(&[&auth, &catalog]).unwrap();

        assert!(!catalog.handle().is_logged_in());
        assert!(!auth.handle().is_logged_in());
        assert_eq!(bus.listener_count(), 4);
        assert_eq!(bus.messages_published(), 1);
    }

    #[test]
    fn test_login_between_auth_and_catalog_is_seen() {
        let auth = AuthModule::new();
        let login = module_fn("auto-login", auto_login);
        let catalog = CatalogModule::new();

        bootstrap(&[&auth, &login, &catalog]).unwrap();

        assert_eq!(auth.handle().current_user().as_deref(), Some("boot"));
        assert!(catalog.handle().is_logged_in());
    }

    #[test]
    fn test_login_before_auth_is_lost() {
        let login = module_fn("auto-login", auto_login);
        let auth = AuthModule::new();
        let catalog = CatalogModule::new();

        bootstrap(&[&login, &auth, &catalog]).unwrap();

        assert!(!auth.handle().is_logged_in());
        assert!(!catalog.handle().is_logged_in());
    }

    #[test]
    fn test_catalog_before_auth_recovers_on_next_query() {
        let catalog = CatalogModule::new();
        let auth = AuthModule::new();

        let bus = bootstrap(&[&catalog, &auth]).unwrap();
        assert!(!catalog.handle().is_logged_in());

        bus.publish(&LOGIN.create(Credentials::new("ada", "pw"))).unwrap();
        // The catalog only learns the new state when it asks again
        assert!(!catalog.handle().is_logged_in());

        bus.publish(&ADD_PRODUCT.create(Product::new("mug", 4.0))).unwrap();
        assert!(catalog.handle().is_logged_in());
        assert_eq!(catalog.handle().products().len(), 1);
    }

    // =============================================================================
    // FAILURE
    // =============================================================================

    #[test]
    fn test_failing_module_stops_bootstrap() {
        let later_ran = Arc::new(AtomicBool::new(false));
        let flag = later_ran.clone();

        let auth = AuthModule::new();
        let broken = module_fn("broken", |_: Publisher, _: Subscriber| {
            Err(ModuleError::Init {
                module: "broken",
                reason: "missing resource".into(),
            })
        });
        let probe = module_fn("probe", move |_: Publisher, _: Subscriber| {
            flag.store(true, Ordering::SeqCst);
            Ok(())
        });

        let err = bootstrap(&[&auth, &broken, &probe]).unwrap_err();

        let BootstrapError::ModuleFailed {
            module, position, ..
        } = err;
        assert_eq!(module, "broken");
        assert_eq!(position, 1);
        assert!(!later_ran.load(Ordering::SeqCst));
    }

    #[test]
    fn test_catalog_init_fails_when_query_is_rejected() {
        let gatekeeper = module_fn("gatekeeper", |_: Publisher, subscriber: Subscriber| {
            let _ = subscriber.subscribe(on(IS_LOGGED_IN, |_: &Reply<bool>| {
                Err(ListenerError::rejected("queries disabled"))
            }));
            Ok(())
        });
        let catalog = CatalogModule::new();

        let err = bootstrap(&[&gatekeeper, &catalog]).unwrap_err();

        let BootstrapError::ModuleFailed {
            module,
            position,
            source,
        } = err;
        assert_eq!(module, "catalog");
        assert_eq!(position, 1);
        assert!(matches!(source, ModuleError::Publish(_)));
    }
}
