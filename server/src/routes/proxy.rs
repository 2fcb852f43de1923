//! Forwarding of `/api/*` requests to the clinic backend.
//!
//! DESIGN
//! ======
//! The browser only ever talks to this server. Requests are replayed against
//! `CLINIC_BACKEND_URL` with the same method, path, query, and body.
//! Hop-by-hop headers are stripped in both directions. Failures are answered
//! with a JSON `{ "message": ... }` body, which the client surfaces verbatim.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use std::time::Duration;

use axum::Json;
use axum::body::{Body, to_bytes};
use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderName, StatusCode};
use axum::response::{IntoResponse, Response};

/// Largest request body forwarded upstream.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;
const CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("clinic backend is not configured")]
    Disabled,
    #[error("request body could not be read: {0}")]
    Body(String),
    #[error("clinic backend unreachable: {0}")]
    Upstream(String),
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(String),
}

impl ProxyError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Disabled => StatusCode::SERVICE_UNAVAILABLE,
            Self::Body(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::ClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (self.status(), Json(serde_json::json!({ "message": self.to_string() }))).into_response()
    }
}

/// Shared HTTP client plus the upstream base URL.
#[derive(Clone)]
pub struct ProxyState {
    http: reqwest::Client,
    backend_url: Option<String>,
}

impl ProxyState {
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(backend_url: Option<String>, timeout_secs: u64) -> Result<Self, ProxyError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| ProxyError::ClientBuild(e.to_string()))?;
        Ok(Self { http, backend_url })
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.backend_url.is_some()
    }
}

/// Join the backend base URL and an incoming path (with query).
#[must_use]
pub fn upstream_url(base: &str, path_and_query: &str) -> String {
    let base = base.trim_end_matches('/');
    if path_and_query.starts_with('/') {
        format!("{base}{path_and_query}")
    } else {
        format!("{base}/{path_and_query}")
    }
}

fn is_hop_by_hop(name: &HeaderName) -> bool {
    matches!(
        name.as_str(),
        "connection"
            | "keep-alive"
            | "proxy-authenticate"
            | "proxy-authorization"
            | "te"
            | "trailer"
            | "transfer-encoding"
            | "upgrade"
            | "host"
            | "content-length"
    )
}

/// Copy of `headers` without connection-scoped entries.
#[must_use]
pub fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    headers
        .iter()
        .filter(|(name, _)| !is_hop_by_hop(name))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

/// Axum handler for `/api/{*path}`.
///
/// # Errors
///
/// Returns a [`ProxyError`] response when the proxy is disabled, the body
/// cannot be read, or the backend cannot be reached.
pub async fn forward(State(proxy): State<ProxyState>, req: Request) -> Result<Response, ProxyError> {
    let Some(base) = proxy.backend_url.as_deref() else {
        return Err(ProxyError::Disabled);
    };
    let (parts, body) = req.into_parts();
    let path = parts.uri.path_and_query().map_or_else(|| parts.uri.path(), |pq| pq.as_str());
    let url = upstream_url(base, path);
    let bytes = to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| ProxyError::Body(e.to_string()))?;

    let upstream = proxy
        .http
        .request(parts.method.clone(), &url)
        .headers(forwardable_headers(&parts.headers))
        .body(bytes)
        .send()
        .await
        .map_err(|e| {
            tracing::warn!(method = %parts.method, %path, error = %e, "clinic backend request failed");
            ProxyError::Upstream(e.to_string())
        })?;

    let status = upstream.status();
    let headers = forwardable_headers(upstream.headers());
    let body = upstream.bytes().await.map_err(|e| ProxyError::Upstream(e.to_string()))?;
    tracing::debug!(method = %parts.method, %path, %status, "proxied request");

    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}
