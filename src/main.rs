use anyhow::Context;
use shelf_life_api::{api::PROCESS_IMAGE_PATH, build_app, config::AppConfig, run_server, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shelf_life_api=info,tower_http=info".into()),
        )
        .init();

    let config = AppConfig::from_env().context("invalid configuration")?;
    let state = AppState::from_config(&config);
    tracing::info!(
        provider = state.provider.base_url(),
        model = shelf_life_api::provider::VISION_MODEL,
        "model provider configured"
    );
    tracing::info!("  POST {PROCESS_IMAGE_PATH}");

    run_server(build_app(state), config.port)
        .await
        .context("server failed")
}
