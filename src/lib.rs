pub mod api;
pub mod config;
pub mod error;
pub mod prompt;
pub mod provider;

use std::sync::Arc;

use axum::Router;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use config::AppConfig;
use provider::OpenAiClient;

pub struct AppState {
    pub provider: OpenAiClient,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Arc<Self> {
        Arc::new(Self {
            provider: OpenAiClient::new(&config.openai_base_url, &config.openai_api_key),
        })
    }
}

/// Router plus the outermost error boundary: panics in a handler become 500s.
pub fn build_app(state: Arc<AppState>) -> Router {
    api::router(state)
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
}

pub async fn run_server(app: Router, port: u16) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await
}
