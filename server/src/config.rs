//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ServerConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid CLINIC_PROXY_TIMEOUT_SECS: {0}")]
    InvalidTimeout(String),
    #[error("CLINIC_BACKEND_URL must start with http:// or https://: {0}")]
    InvalidBackendUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Clinic backend that `/api/*` is forwarded to. `None` disables the proxy.
    pub backend_url: Option<String>,
    pub proxy_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, backend_url: None, proxy_timeout_secs: DEFAULT_PROXY_TIMEOUT_SECS }
    }
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `CLINIC_BACKEND_URL`: proxy target; the proxy answers 503 when absent
    /// - `CLINIC_PROXY_TIMEOUT_SECS`: default 15
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is present but malformed.
    pub fn from_env() -> Result<Self, ServerConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is present but malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match non_empty(lookup("PORT")) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ServerConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let proxy_timeout_secs = match non_empty(lookup("CLINIC_PROXY_TIMEOUT_SECS")) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => return Err(ServerConfigError::InvalidTimeout(raw)),
            },
            None => DEFAULT_PROXY_TIMEOUT_SECS,
        };
        let backend_url = non_empty(lookup("CLINIC_BACKEND_URL"))
            .map(|raw| {
                let trimmed = raw.trim();
                if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
                    Ok(trimmed.trim_end_matches('/').to_owned())
                } else {
                    Err(ServerConfigError::InvalidBackendUrl(raw.clone()))
                }
            })
            .transpose()?;

        Ok(Self { port, backend_url, proxy_timeout_secs })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
