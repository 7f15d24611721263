//! Integration tests for i18n-tree
//!
//! These tests drive the public API end to end: building from documents,
//! resolving keys, switching locales from several threads, and loading
//! locale directories through the environment-based config.

use i18n_tree::config::{load_locale_dir, Config};
use i18n_tree::i18n::{BuildError, I18n, LocaleError, RegistryOptions, TranslateOptions, Translator};
use proptest::prelude::*;
use serial_test::serial;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

// ==================== Test Helpers ====================

const EN: &str = r#"{
    "pages": {
        "home": { "title": "Hi", "welcome": "Welcome, {{name}}!" }
    }
}"#;

const TR: &str = r#"{
    "pages": {
        "home": { "title": "Merhaba" }
    }
}"#;

fn scenario() -> I18n {
    I18n::new(RegistryOptions::new("en").locale("en", EN).locale("tr", TR))
        .expect("Scenario locales should build")
}

// ==================== Scenario Tests ====================

#[test]
fn test_scenario_from_start_to_fallthrough() {
    let i18n = scenario();

    assert_eq!(i18n.current_locale(), "en");
    assert_eq!(i18n.t("pages.home.title"), "Hi");

    i18n.change_locale("tr").unwrap();
    assert_eq!(i18n.t("pages.home.title"), "Merhaba");

    let options = TranslateOptions::new().var("name", "Ada");
    assert_eq!(
        i18n.translate("pages.home.welcome", &options),
        "missing translation for path 'tr.pages.home.welcome'"
    );

    let options = options.locale("en");
    assert_eq!(i18n.translate("pages.home.welcome", &options), "Welcome, Ada!");
}

#[test]
fn test_explicit_locale_matches_leaf_from_any_current_locale() {
    let i18n = scenario();

    for current in ["en", "tr"] {
        i18n.change_locale(current).unwrap();
        assert_eq!(
            i18n.translate("pages.home.title", &TranslateOptions::new().locale("en")),
            "Hi"
        );
        assert_eq!(
            i18n.translate("pages.home.title", &TranslateOptions::new().locale("tr")),
            "Merhaba"
        );
    }
}

#[test]
fn test_unavailable_locale_keeps_cursor() {
    let i18n = scenario();
    i18n.change_locale("tr").unwrap();

    let err = i18n.change_locale("de").unwrap_err();
    assert_eq!(err, LocaleError::Unavailable("de".to_string()));
    assert!(err.to_string().contains("'de'"));
    assert_eq!(i18n.current_locale(), "tr");
}

#[test]
fn test_same_locale_switch_does_not_notify() {
    let i18n = scenario();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    i18n.on_locale_change(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    i18n.change_locale("en").unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    i18n.change_locale("tr").unwrap();
    i18n.change_locale("tr").unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_build_errors_surface_through_i18n() {
    let duplicate = I18n::new(RegistryOptions::new("en").locale("en", EN).locale("en", TR));
    assert!(matches!(duplicate, Err(BuildError::DuplicateLocale(ref l)) if l == "en"));

    let malformed = I18n::new(RegistryOptions::new("en").locale("en", "{\"pages\":"));
    let err = malformed.unwrap_err();
    assert!(err.to_string().starts_with("error unmarshalling JSON for locale 'en'"));
}

#[test]
fn test_debug_mode_does_not_change_results() {
    let quiet = scenario();
    let loud = I18n::new(
        RegistryOptions::new("en")
            .locale("en", EN)
            .locale("tr", TR)
            .debug(true),
    )
    .unwrap();

    for path in ["pages.home.title", "pages.home.nope", "", "pages"] {
        assert_eq!(quiet.t(path), loud.t(path));
    }
    assert_eq!(quiet.change_locale("xx"), loud.change_locale("xx"));
}

#[test]
fn test_options_bag_from_json() {
    let i18n = scenario();
    let serde_json::Value::Object(bag) = serde_json::json!({
        "scope": "pages.home",
        "locale": "en",
        "name": "Ada"
    }) else {
        unreachable!()
    };

    let options = TranslateOptions::from_map(bag);
    assert_eq!(i18n.translate("welcome", &options), "Welcome, Ada!");
}

// ==================== Concurrency Tests ====================

#[test]
fn test_readers_see_whole_locale_during_switches() {
    let i18n = scenario();
    let switches = Mutex::new(Vec::new());

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..500 {
                    let title = i18n.t("pages.home.title");
                    assert!(title == "Hi" || title == "Merhaba", "torn read: {}", title);
                    let current = i18n.current_locale();
                    assert!(current == "en" || current == "tr");
                }
            });
        }

        scope.spawn(|| {
            for i in 0..200 {
                let target = if i % 2 == 0 { "tr" } else { "en" };
                i18n.change_locale(target).unwrap();
                switches.lock().unwrap().push(target);
            }
        });
    });

    assert_eq!(switches.lock().unwrap().len(), 200);
    assert_eq!(i18n.current_locale(), "en");
}

#[test]
fn test_shared_translator_across_threads() {
    let translator: Arc<dyn Translator> = Arc::new(scenario());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let translator = Arc::clone(&translator);
            std::thread::spawn(move || translator.t("pages.home.title", &TranslateOptions::new()))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "Hi");
    }
}

// ==================== Config Tests ====================

fn write_locales(dir: &TempDir) {
    std::fs::write(dir.path().join("en.json"), EN).expect("Failed to write en.json");
    std::fs::write(dir.path().join("tr.json"), TR).expect("Failed to write tr.json");
}

#[test]
#[serial]
fn test_config_from_env_builds_i18n() {
    let dir = TempDir::new().unwrap();
    write_locales(&dir);

    std::env::set_var("I18N_LOCALES_DIR", dir.path());
    std::env::set_var("I18N_DEFAULT_LOCALE", "tr");
    std::env::set_var("I18N_SEPARATOR", "");
    std::env::set_var("I18N_DEBUG", "true");

    let config = Config::from_env().unwrap();
    assert_eq!(config.separator, None);
    assert!(config.debug);

    let i18n = I18n::new(config.registry_options().unwrap()).unwrap();
    assert_eq!(i18n.current_locale(), "tr");
    assert_eq!(i18n.available_locales(), vec!["en", "tr"]);
    assert_eq!(i18n.t("pages.home.title"), "Merhaba");

    std::env::remove_var("I18N_LOCALES_DIR");
    std::env::remove_var("I18N_DEFAULT_LOCALE");
    std::env::remove_var("I18N_SEPARATOR");
    std::env::remove_var("I18N_DEBUG");
}

#[test]
#[serial]
fn test_config_defaults() {
    std::env::remove_var("I18N_LOCALES_DIR");
    std::env::remove_var("I18N_DEFAULT_LOCALE");
    std::env::remove_var("I18N_SEPARATOR");
    std::env::remove_var("I18N_DEBUG");

    let config = Config::from_env().unwrap();
    assert_eq!(config.locales_dir, std::path::PathBuf::from("demos/locales"));
    assert_eq!(config.default_locale, "en");
    assert_eq!(config.separator, None);
    assert!(!config.debug);
}

#[test]
fn test_demo_locales_build() {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/locales");
    let sources = load_locale_dir(&dir).unwrap();

    let i18n = I18n::new(RegistryOptions {
        default_locale: "en".to_string(),
        locales: sources,
        separator: None,
        debug: false,
    })
    .unwrap();

    assert_eq!(i18n.t("pages.home.title"), "Home");
    let options = TranslateOptions::new().scope("pages.home").var("name", "John");
    assert_eq!(i18n.translate("welcome", &options), "Welcome, John!");
}

// ==================== Property Tests ====================

fn segment() -> impl Strategy<Value = String> {
    "[a-z]{1,6}"
}

proptest! {
    #[test]
    fn prop_scope_is_a_path_prefix(
        scope in prop::collection::vec(segment(), 1..4),
        rest in prop::collection::vec(segment(), 1..4),
        leaf in "[A-Za-z ]{0,12}",
    ) {
        let mut tree = serde_json::Value::String(leaf.clone());
        for key in scope.iter().chain(rest.iter()).rev() {
            let mut node = serde_json::Map::new();
            node.insert(key.clone(), tree);
            tree = serde_json::Value::Object(node);
        }
        let i18n = I18n::new(RegistryOptions::new("en").locale("en", tree.to_string())).unwrap();

        let scope = scope.join(".");
        let path = rest.join(".");
        let scoped = i18n.translate(&path, &TranslateOptions::new().scope(scope.clone()));

        prop_assert_eq!(&scoped, &i18n.t(&format!("{}.{}", scope, path)));
        prop_assert_eq!(scoped, leaf);
    }

    #[test]
    fn prop_missing_message_names_locale_and_path(path in prop::collection::vec(segment(), 1..5)) {
        let i18n = I18n::new(RegistryOptions::new("en").locale("en", "{}")).unwrap();
        let path = path.join(".");
        prop_assert_eq!(
            i18n.t(&path),
            format!("missing translation for path 'en.{}'", path)
        );
    }

    #[test]
    fn prop_substitution_order_independent(a in "[A-Za-z0-9]{0,8}", b in "[A-Za-z0-9{}]{0,8}") {
        let i18n = I18n::new(
            RegistryOptions::new("en").locale("en", r#"{"t": "{{a}}-{{b}}"}"#),
        )
        .unwrap();

        let forward = TranslateOptions::new().var("a", a.clone()).var("b", b.clone());
        let backward = TranslateOptions::new().var("b", b.clone()).var("a", a.clone());

        prop_assert_eq!(i18n.translate("t", &forward), format!("{}-{}", a, b));
        prop_assert_eq!(i18n.translate("t", &forward), i18n.translate("t", &backward));
    }
}
