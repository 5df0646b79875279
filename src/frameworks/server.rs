// Framework bootstrap for the analysis server runtime.

use crate::frameworks::config;
use crate::interface_adapters::clients::ChatCompletionsClient;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;

use std::io::Result;
use std::net::SocketAddr;
use std::sync::Arc;

fn init_runtime() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run(listener: tokio::net::TcpListener) -> Result<()> {
    let address = listener.local_addr()?;
    let state = build_state()?;

    // Start the web server with the HTTP routes wired up.
    let app = routes::app(state);

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking.
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let address = SocketAddr::from(([0, 0, 0, 0], config::http_port()));

    // Bind TCP listener with error handling.
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener).await
}

fn build_state() -> Result<Arc<AppState>> {
    let base_url = config::inference_base_url();
    let api_key = config::inference_api_key();
    let model = config::inference_model();
    let timeout = config::inference_timeout();

    if api_key.is_none() {
        tracing::warn!("INFERENCE_API_KEY is not set; hosted backends will reject requests");
    }

    let provider =
        ChatCompletionsClient::new(base_url.clone(), api_key.clone(), model.clone(), timeout)
            .map_err(|e| {
                std::io::Error::other(format!("failed to initialize inference client: {e}"))
            })?;
    tracing::debug!(
        base_url = %base_url,
        model = %model,
        timeout_ms = timeout.as_millis(),
        api_key_set = api_key.is_some(),
        "inference client configured."
    );

    Ok(Arc::new(AppState {
        provider: Arc::new(provider),
        model,
    }))
}
