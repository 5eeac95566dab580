//! Shared application state.
//!
//! One struct owns everything the handlers and the refresh task need; it is
//! built by the top-level controller and passed around explicitly, never
//! reached through globals.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::announce::Announcer;
use crate::config::ShoreSquadConfig;
use crate::weather::{ForecastBundle, ForecastClient, ForecastSource};

/// Application state shared with the HTTP handlers.
pub struct AppState {
    config: ShoreSquadConfig,
    client: ForecastClient,
    announcer: Arc<dyn Announcer>,
    /// Latest bundle; refreshes swap the `Arc`, in-flight readers keep the
    /// snapshot they already cloned.
    forecast: RwLock<Arc<ForecastBundle>>,
}

impl AppState {
    /// Build the state and run the initial fetch cycle, so the service always
    /// comes up with a usable forecast.
    pub async fn initialize(
        config: ShoreSquadConfig,
        announcer: Arc<dyn Announcer>,
    ) -> Result<Arc<Self>> {
        let client = ForecastClient::new(&config.weather)?;
        let bundle = fetch_cycle(&client, &config, announcer.as_ref()).await;

        Ok(Arc::new(Self {
            config,
            client,
            announcer,
            forecast: RwLock::new(Arc::new(bundle)),
        }))
    }

    #[must_use]
    pub fn config(&self) -> &ShoreSquadConfig {
        &self.config
    }

    /// Snapshot of the current forecast bundle.
    pub async fn forecast(&self) -> Arc<ForecastBundle> {
        Arc::clone(&*self.forecast.read().await)
    }

    /// Run one fetch cycle and replace the bundle wholesale.
    pub async fn refresh_forecast(&self) {
        let bundle = fetch_cycle(&self.client, &self.config, self.announcer.as_ref()).await;
        *self.forecast.write().await = Arc::new(bundle);
    }
}

async fn fetch_cycle(
    client: &ForecastClient,
    config: &ShoreSquadConfig,
    announcer: &dyn Announcer,
) -> ForecastBundle {
    let today = Utc::now().date_naive();
    let timeout = Duration::from_millis(config.weather.timeout_ms);
    let bundle = client.fetch_forecast(today, timeout).await;

    match bundle.source {
        ForecastSource::Primary => announcer.announce("Weather forecast loaded"),
        ForecastSource::Fallback => announcer.announce("Weather data failed to load"),
    }

    bundle
}
