//! # Shop Flows
//!
//! Auth and Catalog cooperating purely through shared messages:
//!
//! 1. **Catalog → Auth**: `IS_LOGGED_IN` queries answered through the reply
//! 2. **Host → Auth**: `LOGIN` / `LOGOUT` change what later queries see
//! 3. **Host → Catalog**: `ADD_PRODUCT` gated on the login state

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;
    use sb_01_auth::AuthModule;
    use sb_02_catalog::CatalogModule;
    use shared_bus::{bootstrap, BusError, EventPublisher, ListenerError};
    use shared_messages::{
        reply, Credentials, Product, ADD_PRODUCT, IS_LOGGED_IN, LOGIN, LOGOUT,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    struct Shop {
        auth: AuthModule,
        catalog: CatalogModule,
        bus: shared_bus::Bus,
    }

    fn open_shop() -> Shop {
        let auth = AuthModule::new();
        let catalog = CatalogModule::new();
        let bus = bootstrap(&[&auth, &catalog]).expect("bootstrap");
        Shop { auth, catalog, bus }
    }

    fn ask_logged_in(bus: &shared_bus::Bus) -> Vec<bool> {
        let answers = Arc::new(Mutex::new(Vec::new()));
        let sink = answers.clone();
        bus.publish(&IS_LOGGED_IN.create(reply(move |v: bool| sink.lock().push(v))))
            .expect("query");
        let collected = answers.lock().clone();
        collected
    }

    // =============================================================================
    // INTEGRATION TESTS
    // =============================================================================

    #[test]
    fn test_query_gets_exactly_one_answer() {
        let shop = open_shop();
        assert_eq!(ask_logged_in(&shop.bus), vec![false]);

        shop.bus
            .publish(&LOGIN.create(Credentials::new("ada", "pw")))
            .unwrap();
        assert_eq!(ask_logged_in(&shop.bus), vec![true]);
    }

    #[test]
    fn test_add_product_requires_login() {
        let shop = open_shop();

        let err = shop
            .bus
            .publish(&ADD_PRODUCT.create(Product::new("mug", 9.5)))
            .unwrap_err();
        let BusError::ListenerFailed {
            message_type,
            source,
            ..
        } = err
        else {
            panic!("expected listener failure");
        };
        assert_eq!(message_type.as_str(), "add_product");
        assert!(matches!(source, ListenerError::Rejected(_)));
        assert!(shop.catalog.handle().products().is_empty());
    }

    #[test]
    fn test_login_add_logout_cycle() {
        let shop = open_shop();
        let catalog = shop.catalog.handle();

        shop.bus
            .publish(&LOGIN.create(Credentials::new("ada", "pw")))
            .unwrap();
        shop.bus
            .publish(&ADD_PRODUCT.create(Product::new("mug", 9.5)))
            .unwrap();
        shop.bus
            .publish(&ADD_PRODUCT.create(Product::new("pen", 1.25)))
            .unwrap();

        assert!(catalog.is_logged_in());
        assert_eq!(
            catalog.products(),
            vec![Product::new("mug", 9.5), Product::new("pen", 1.25)]
        );

        shop.bus.publish(&LOGOUT.create(())).unwrap();
        assert!(!shop.auth.handle().is_logged_in());

        assert!(shop
            .bus
            .publish(&ADD_PRODUCT.create(Product::new("lamp", 20.0)))
            .is_err());
        assert!(!catalog.is_logged_in());
        assert_eq!(catalog.products().len(), 2);
    }

    #[test]
    fn test_invalid_price_rejected_while_logged_in() {
        let shop = open_shop();
        shop.bus
            .publish(&LOGIN.create(Credentials::new("ada", "pw")))
            .unwrap();

        assert!(shop
            .bus
            .publish(&ADD_PRODUCT.create(Product::new("free lunch", -1.0)))
            .is_err());
        assert!(shop
            .bus
            .publish(&ADD_PRODUCT.create(Product::new("infinity", f64::NAN)))
            .is_err());
        assert!(shop.catalog.handle().products().is_empty());
    }

    #[test]
    fn test_relogin_switches_user() {
        let shop = open_shop();
        let session = shop.auth.handle();

        shop.bus
            .publish(&LOGIN.create(Credentials::new("ada", "pw")))
            .unwrap();
        shop.bus
            .publish(&LOGIN.create(Credentials::new("grace", "pw")))
            .unwrap();

        assert_eq!(session.current_user().as_deref(), Some("grace"));
    }

    #[test]
    fn test_failed_login_keeps_previous_session() {
        let shop = open_shop();
        let session = shop.auth.handle();

        shop.bus
            .publish(&LOGIN.create(Credentials::new("ada", "pw")))
            .unwrap();
        assert!(shop
            .bus
            .publish(&LOGIN.create(Credentials::new("  ", "pw")))
            .is_err());

        assert_eq!(session.current_user().as_deref(), Some("ada"));
    }
}
