use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use shoresquad::announce::LogAnnouncer;
use shoresquad::config::ShoreSquadConfig;
use shoresquad::state::AppState;
use shoresquad::web;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("shoresquad=info")),
        )
        .init();

    let config = ShoreSquadConfig::load()?;
    let port = config.server.port;
    let refresh_interval = config.weather.refresh_interval_secs;

    info!("Starting ShoreSquad v{}", shoresquad::VERSION);

    let state = AppState::initialize(config, Arc::new(LogAnnouncer)).await?;

    if let Some(secs) = refresh_interval {
        let refresh_state = Arc::clone(&state);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(Duration::from_secs(secs));
            // First tick completes immediately and startup already fetched.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                refresh_state.refresh_forecast().await;
            }
        });
    }

    web::run(state, port).await
}
