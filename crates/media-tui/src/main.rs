mod action;
mod app;
mod app_state;
mod component;
mod components;
mod theme;
mod widgets;

use std::sync::Arc;

use media_api::client::ApiClient;
use media_api::config::Config;
use media_api::embedded;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── Load config ──────────────────────────────────────────────────────────
    let config = Config::load().unwrap_or_default();

    let log_dir = config.paths.log_dir.clone();
    std::fs::create_dir_all(&log_dir)?;
    let log_path = log_dir.join("mview.log");

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    // Allow RUST_LOG override; default to debug for app code but suppress
    // noisy connection-level DEBUG from HTTP client internals.
    let log_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "debug,hyper_util=warn,reqwest=warn,hyper=warn".to_string());
    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_env_filter(log_filter.as_str())
        .with_ansi(false)
        .init();

    // Print log path to stderr so the operator can tail it immediately.
    eprintln!("mview log: {}", log_path.display());

    tracing::info!("mview starting…");

    // ── Page context bootstrap ───────────────────────────────────────────────
    // One scan of the start page: anti-forgery token, embedded resources,
    // embedded profile. Degrades to an empty context offline.
    let context = embedded::fetch_page_context(&config.api).await;

    // ── API client ───────────────────────────────────────────────────────────
    let client = Arc::new(ApiClient::new(&config.api, context)?);

    // ── Run TUI ──────────────────────────────────────────────────────────────
    let app = app::App::new(
        client,
        config.api.base_url.trim_end_matches('/').to_string(),
        config.ui.latest_count,
    );
    app.run().await?;

    Ok(())
}
