//! # Runtime Flows
//!
//! The runtime end to end: configuration from files and variables, module
//! selection, and scripted sessions.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use sb_runtime::{
        load_session, ConfigError, ModuleId, RuntimeConfig, RuntimeError, SessionStep,
        SwitchboardRuntime,
    };
    use shared_bus::BusError;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn env(vars: &[(&str, String)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_file_and_session_script() {
        let steps = vec![
            SessionStep::Login {
                username: "ada".into(),
                password: "pw".into(),
            },
            SessionStep::AddProduct {
                name: "mug".into(),
                price: 9.5,
            },
            SessionStep::AddProduct {
                name: "broken".into(),
                price: -2.0,
            },
        ];
        let session = write_temp(&serde_json::to_string(&steps).unwrap());
        let config_file = write_temp(&format!(
            r#"{{ "modules": ["auth", "catalog"], "session": {} }}"#,
            serde_json::to_string(&session.path()).unwrap()
        ));

        let config = RuntimeConfig::load_from(env(&[(
            "SB_CONFIG",
            config_file.path().to_string_lossy().to_string(),
        )]))
        .unwrap();
        let runtime = SwitchboardRuntime::start(&config).unwrap();

        let script = load_session(config.session.as_deref().unwrap()).unwrap();
        assert_eq!(script, steps);

        let report = runtime.replay(&script);
        assert_eq!(report.applied, 2);
        assert_eq!(report.rejected.len(), 1);

        let (index, error) = &report.rejected[0];
        assert_eq!(*index, 2);
        let BusError::ListenerFailed { message_type, .. } = error else {
            panic!("expected listener failure");
        };
        assert_eq!(message_type.as_str(), "add_product");

        let catalog = runtime.catalog().unwrap();
        assert!(catalog.is_logged_in());
        assert_eq!(catalog.products().len(), 1);
    }

    #[test]
    fn test_auth_only_runtime_ignores_products() {
        let config =
            RuntimeConfig::load_from(env(&[("SB_MODULES", "auth".to_string())])).unwrap();
        assert_eq!(config.modules, vec![ModuleId::Auth]);

        let runtime = SwitchboardRuntime::start(&config).unwrap();
        let report = runtime.replay(&[
            SessionStep::AddProduct {
                name: "mug".into(),
                price: 1.0,
            },
            SessionStep::Login {
                username: "ada".into(),
                password: "pw".into(),
            },
        ]);

        // Nobody handles add_product, so it is simply delivered to no one
        assert_eq!(report.applied, 2);
        assert!(runtime.catalog().is_none());
        assert!(runtime.auth().unwrap().is_logged_in());
    }

    #[test]
    fn test_session_login_with_empty_password() {
        let script = write_temp(
            r#"[
                { "action": "login", "username": "ada", "password": "" },
                { "action": "add_product", "name": "mug", "price": 4.0 }
            ]"#,
        );
        let steps = load_session(script.path()).unwrap();

        let runtime = SwitchboardRuntime::start(&RuntimeConfig::default()).unwrap();
        let report = runtime.replay(&steps);

        assert_eq!(report.applied, 2);
        assert!(report.rejected.is_empty());
        assert_eq!(
            runtime.auth().unwrap().current_user().as_deref(),
            Some("ada")
        );
        assert_eq!(runtime.catalog().unwrap().products().len(), 1);
    }

    #[test]
    fn test_unknown_module_is_a_config_error() {
        let err = RuntimeConfig::load_from(env(&[("SB_MODULES", "auth,ledger".to_string())]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownModule(_)));
    }

    #[test]
    fn test_duplicate_modules_refused_by_runtime() {
        let config = RuntimeConfig {
            modules: vec![ModuleId::Catalog, ModuleId::Catalog],
            session: None,
        };
        assert!(matches!(
            SwitchboardRuntime::start(&config),
            Err(RuntimeError::Config(ConfigError::DuplicateModule(ModuleId::Catalog)))
        ));
    }

    #[test]
    fn test_reversed_order_still_boots() {
        let config = RuntimeConfig {
            modules: vec![ModuleId::Catalog, ModuleId::Auth],
            session: None,
        };
        assert_eq!(config.validate().unwrap().len(), 1);

        let runtime = SwitchboardRuntime::start(&config).unwrap();
        assert!(!runtime.catalog().unwrap().is_logged_in());
    }
}
