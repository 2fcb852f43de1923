//! Client configuration baked in at build time.
//!
//! Values come from `CLINIC_*` environment variables captured with
//! `option_env!` when the WASM bundle is compiled. Parsing goes through
//! [`ClientConfig::from_lookup`] so tests can feed arbitrary values.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_CLIENT_ID: i64 = 1;

/// What the booking form does when the availability check itself fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AvailabilityFailurePolicy {
    /// Treat the slot as free and show nothing.
    #[default]
    AssumeAvailable,
    /// Treat the slot as taken; submission is rejected until a re-check succeeds.
    AssumeUnavailable,
    /// Surface the failure and refuse submission until a check succeeds.
    Block,
}

impl AvailabilityFailurePolicy {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "assume-available" => Some(Self::AssumeAvailable),
            "assume-unavailable" => Some(Self::AssumeUnavailable),
            "block" => Some(Self::Block),
            _ => None,
        }
    }
}

/// Where pets, services, and veterinarians come from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReferenceDataMode {
    /// Built-in placeholder dataset.
    #[default]
    Mock,
    /// Backend endpoints.
    Remote,
}

impl ReferenceDataMode {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "mock" => Some(Self::Mock),
            "remote" => Some(Self::Remote),
            _ => None,
        }
    }
}

/// Locale used to render dates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayLocale {
    #[default]
    Spanish,
    English,
}

impl DisplayLocale {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "es" | "es_ES" | "es-ES" => Some(Self::Spanish),
            "en" | "en_US" | "en-US" => Some(Self::English),
            _ => None,
        }
    }

    #[must_use]
    pub fn chrono_locale(self) -> chrono::Locale {
        match self {
            Self::Spanish => chrono::Locale::es_ES,
            Self::English => chrono::Locale::en_US,
        }
    }
}

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for backend requests; empty means same origin.
    pub api_base_url: String,
    /// Identity of the signed-in client until real sessions exist.
    pub client_id: i64,
    pub availability_failure: AvailabilityFailurePolicy,
    pub reference_data: ReferenceDataMode,
    pub locale: DisplayLocale,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            client_id: DEFAULT_CLIENT_ID,
            availability_failure: AvailabilityFailurePolicy::default(),
            reference_data: ReferenceDataMode::default(),
            locale: DisplayLocale::default(),
        }
    }
}

impl ClientConfig {
    /// Build config from variables captured at compile time.
    ///
    /// - `CLINIC_API_BASE_URL`: default empty (same origin)
    /// - `CLINIC_CLIENT_ID`: default `1`
    /// - `CLINIC_AVAILABILITY_FAILURE`: `assume-available` (default), `assume-unavailable`, `block`
    /// - `CLINIC_REFERENCE_DATA`: `mock` (default) or `remote`
    /// - `CLINIC_LOCALE`: `es_ES` (default) or `en_US`
    ///
    /// # Errors
    ///
    /// Returns an error if any variable is set to an unrecognized value.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| match key {
            "CLINIC_API_BASE_URL" => option_env!("CLINIC_API_BASE_URL"),
            "CLINIC_CLIENT_ID" => option_env!("CLINIC_CLIENT_ID"),
            "CLINIC_AVAILABILITY_FAILURE" => option_env!("CLINIC_AVAILABILITY_FAILURE"),
            "CLINIC_REFERENCE_DATA" => option_env!("CLINIC_REFERENCE_DATA"),
            "CLINIC_LOCALE" => option_env!("CLINIC_LOCALE"),
            _ => None,
        })
    }

    /// Build config from an arbitrary key lookup. Unset or blank keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if any present value cannot be parsed.
    pub fn from_lookup<'a, F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let get = |key: &str| lookup(key).map(str::trim).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let api_base_url = get("CLINIC_API_BASE_URL")
            .map_or(defaults.api_base_url, |v| v.trim_end_matches('/').to_owned());
        let client_id = parse_with(get("CLINIC_CLIENT_ID"), "CLINIC_CLIENT_ID", defaults.client_id, |v| {
            v.parse::<i64>().ok().filter(|id| *id > 0)
        })?;
        let availability_failure = parse_with(
            get("CLINIC_AVAILABILITY_FAILURE"),
            "CLINIC_AVAILABILITY_FAILURE",
            defaults.availability_failure,
            AvailabilityFailurePolicy::parse,
        )?;
        let reference_data = parse_with(
            get("CLINIC_REFERENCE_DATA"),
            "CLINIC_REFERENCE_DATA",
            defaults.reference_data,
            ReferenceDataMode::parse,
        )?;
        let locale = parse_with(get("CLINIC_LOCALE"), "CLINIC_LOCALE", defaults.locale, DisplayLocale::parse)?;

        Ok(Self { api_base_url, client_id, availability_failure, reference_data, locale })
    }
}

fn parse_with<T>(
    raw: Option<&str>,
    key: &'static str,
    default: T,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => parse(value).ok_or_else(|| ConfigError::Invalid { key, value: value.to_owned() }),
    }
}
