#![recursion_limit = "256"]

mod config;
mod routes;

use config::ServerConfig;
use routes::proxy::ProxyState;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env().expect("invalid server configuration");
    let proxy = ProxyState::new(config.backend_url.clone(), config.proxy_timeout_secs)
        .expect("proxy client init failed");
    if proxy.is_enabled() {
        tracing::info!(
            backend = config.backend_url.as_deref().unwrap_or_default(),
            timeout_secs = config.proxy_timeout_secs,
            "api proxy enabled"
        );
    } else {
        tracing::warn!("CLINIC_BACKEND_URL not set; /api requests will return 503");
    }

    let app = routes::leptos_app(proxy).expect("leptos app init failed");
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "clinic web listening");
    axum::serve(listener, app).await.expect("server failed");
}
