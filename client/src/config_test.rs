use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&'static str, &'static str)]) -> impl Fn(&str) -> Option<&'static str> {
    let map: HashMap<&'static str, &'static str> = pairs.iter().copied().collect();
    move |key: &str| map.get(key).copied()
}

#[test]
fn from_lookup_defaults_when_nothing_set() {
    let cfg = ClientConfig::from_lookup(|_| None).unwrap();
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.client_id, DEFAULT_CLIENT_ID);
    assert_eq!(cfg.availability_failure, AvailabilityFailurePolicy::AssumeAvailable);
    assert_eq!(cfg.reference_data, ReferenceDataMode::Mock);
    assert_eq!(cfg.locale, DisplayLocale::Spanish);
    assert_eq!(cfg.api_base_url, "");
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[
        ("CLINIC_API_BASE_URL", "https://api.clinic.example/"),
        ("CLINIC_CLIENT_ID", "17"),
        ("CLINIC_AVAILABILITY_FAILURE", "block"),
        ("CLINIC_REFERENCE_DATA", "remote"),
        ("CLINIC_LOCALE", "en_US"),
    ]))
    .unwrap();
    assert_eq!(cfg.api_base_url, "https://api.clinic.example");
    assert_eq!(cfg.client_id, 17);
    assert_eq!(cfg.availability_failure, AvailabilityFailurePolicy::Block);
    assert_eq!(cfg.reference_data, ReferenceDataMode::Remote);
    assert_eq!(cfg.locale, DisplayLocale::English);
}

#[test]
fn from_lookup_accepts_assume_unavailable() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[("CLINIC_AVAILABILITY_FAILURE", "assume-unavailable")])).unwrap();
    assert_eq!(cfg.availability_failure, AvailabilityFailurePolicy::AssumeUnavailable);
}

#[test]
fn from_lookup_blank_values_take_defaults() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[("CLINIC_CLIENT_ID", "  "), ("CLINIC_LOCALE", "")])).unwrap();
    assert_eq!(cfg.client_id, DEFAULT_CLIENT_ID);
    assert_eq!(cfg.locale, DisplayLocale::Spanish);
}

#[test]
fn from_lookup_rejects_unknown_policy() {
    let err = ClientConfig::from_lookup(lookup_from(&[("CLINIC_AVAILABILITY_FAILURE", "fail-open")])).unwrap_err();
    assert_eq!(
        err,
        ConfigError::Invalid { key: "CLINIC_AVAILABILITY_FAILURE", value: "fail-open".to_owned() }
    );
}

#[test]
fn from_lookup_rejects_non_positive_client_id() {
    assert!(ClientConfig::from_lookup(lookup_from(&[("CLINIC_CLIENT_ID", "0")])).is_err());
    assert!(ClientConfig::from_lookup(lookup_from(&[("CLINIC_CLIENT_ID", "abc")])).is_err());
}

#[test]
fn display_locale_maps_to_chrono_locale() {
    assert_eq!(DisplayLocale::Spanish.chrono_locale(), chrono::Locale::es_ES);
    assert_eq!(DisplayLocale::English.chrono_locale(), chrono::Locale::en_US);
}
