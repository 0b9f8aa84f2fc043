use anyhow::Context;
use scriptsight_web::{config::ServerConfig, router::build_router, state::AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .init();

    let config = ServerConfig::load()?;

    tracing::info!(artifact_dir = %config.artifact_dir, "loading model checkpoint");
    let state = AppState::from_artifacts(&config.artifact_dir).with_context(|| {
        format!(
            "no usable checkpoint in `{}`; run scriptsight-train first",
            config.artifact_dir
        )
    })?;

    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(&config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;

    tracing::info!("scriptsight listening on {}", config.addr);
    axum::serve(listener, app).await?;

    Ok(())
}
