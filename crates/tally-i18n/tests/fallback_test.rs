//! Tests for the fallback cascade and missing-phrase handling

use std::sync::{Arc, Mutex};
use tally_common::logging::AlertHandler;
use tally_common::Environment;
use tally_i18n::{Locale, Localizer, ResourceTable, TranslationError, MISSING_TRANSLATION};

/// Alert sink that records every message it receives
#[derive(Debug, Default)]
struct RecordingAlertHandler {
    messages: Mutex<Vec<String>>,
}

impl RecordingAlertHandler {
    fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl AlertHandler for RecordingAlertHandler {
    fn alert(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

fn cascade_resources() -> ResourceTable {
    let mut resources = ResourceTable::new();
    resources.set_literal(Locale::English, "only.default", "default phrase");
    resources.set_literal(Locale::Spanish, "only.language", "frase del idioma");
    resources.set_literal(Locale::SpanishSpain, "only.regional", "frase regional");
    resources
}

#[test]
fn test_full_locale_wins_over_fallbacks() {
    let mut resources = cascade_resources();
    resources.set_literal(Locale::Spanish, "only.regional", "frase generica");
    let localizer = Localizer::new(resources, Environment::Development);

    let phrase = localizer
        .translate(Locale::SpanishSpain, "only.regional", None)
        .unwrap();
    assert_eq!(phrase, "frase regional");
}

#[test]
fn test_fallback_to_language_abbreviation() {
    let localizer = Localizer::new(cascade_resources(), Environment::Development);

    let phrase = localizer
        .translate(Locale::SpanishSpain, "only.language", None)
        .unwrap();
    assert_eq!(phrase, "frase del idioma");
}

#[test]
fn test_fallback_to_default_locale() {
    let localizer = Localizer::new(cascade_resources(), Environment::Development);

    // Absent from es-ES and es, so resolution matches the default locale.
    let from_spanish = localizer
        .translate(Locale::SpanishSpain, "only.default", None)
        .unwrap();
    let from_default = localizer
        .translate(Locale::English, "only.default", None)
        .unwrap();
    assert_eq!(from_spanish, from_default);
}

#[test]
fn test_language_miss_raises_one_alert() {
    let alerts = Arc::new(RecordingAlertHandler::default());
    let localizer = Localizer::new(cascade_resources(), Environment::Development)
        .with_alert_handler(alerts.clone());

    localizer
        .translate(Locale::SpanishSpain, "only.default", None)
        .unwrap();

    let messages = alerts.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("only.default"));
    assert!(messages[0].contains("es locale"));
}

#[test]
fn test_default_locale_lookup_raises_no_alert() {
    let alerts = Arc::new(RecordingAlertHandler::default());
    let localizer = Localizer::new(cascade_resources(), Environment::Development)
        .with_alert_handler(alerts.clone());

    localizer
        .translate(Locale::English, "only.default", None)
        .unwrap();
    assert!(alerts.messages().is_empty());
}

#[test]
fn test_legacy_alias_resolves_as_regional_locale() {
    let localizer = Localizer::new(cascade_resources(), Environment::Development);

    let phrase = localizer
        .translate(Locale::SpanishSpainLegacy, "only.regional", None)
        .unwrap();
    assert_eq!(phrase, "frase regional");
}

#[test]
fn test_missing_phrase_fails_in_development() {
    let localizer = Localizer::new(cascade_resources(), Environment::Development);

    let result = localizer.translate(Locale::SpanishSpain, "nowhere.to.be.found", None);
    match result {
        Err(TranslationError::NotFound { path }) => assert_eq!(path, "nowhere.to.be.found"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_missing_phrase_returns_path_in_production() {
    let alerts = Arc::new(RecordingAlertHandler::default());
    let localizer = Localizer::new(cascade_resources(), Environment::Production)
        .with_alert_handler(alerts.clone());
    localizer.set_user_email("someone@example.com");

    let phrase = localizer
        .translate(Locale::English, "nowhere.to.be.found", None)
        .unwrap();
    assert_eq!(phrase, "nowhere.to.be.found");

    // One alert for the default-locale miss; the cascade had nothing else to report.
    let messages = alerts.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("en locale"));
}

#[test]
fn test_missing_phrase_shows_sentinel_to_internal_accounts() {
    let localizer = Localizer::new(cascade_resources(), Environment::Staging);
    localizer.set_user_email("maria@usetally.app");

    let phrase = localizer
        .translate(Locale::English, "nowhere.to.be.found", None)
        .unwrap();
    assert_eq!(phrase, MISSING_TRANSLATION);
}

#[test]
fn test_missing_phrase_without_session_shows_path() {
    let localizer = Localizer::new(cascade_resources(), Environment::Production);

    let phrase = localizer
        .translate(Locale::English, "nowhere.to.be.found", None)
        .unwrap();
    assert_eq!(phrase, "nowhere.to.be.found");
}
