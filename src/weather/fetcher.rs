//! Forecast retrieval with a bounded wait and a guaranteed fallback.

use std::time::Duration;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use reqwest::Client;
use tracing::{debug, info, warn};

use super::{
    DailyForecast, FORECAST_DAYS, ForecastBundle, ForecastSource, open_meteo,
    synthetic::synthetic_forecast,
};
use crate::config::WeatherConfig;
use crate::error::ShoreSquadError;

/// The site forecasts a single fixed point: central Singapore.
pub const LATITUDE: f64 = 1.3521;
pub const LONGITUDE: f64 = 103.8198;
const TIMEZONE: &str = "Asia/Singapore";

/// HTTP client for the Open-Meteo forecast endpoint.
pub struct ForecastClient {
    client: Client,
    base_url: String,
}

impl ForecastClient {
    /// Create a new forecast client.
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("ShoreSquad/", env!("CARGO_PKG_VERSION")))
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn forecast_url(&self) -> String {
        format!(
            "{}/v1/forecast?latitude={LATITUDE}&longitude={LONGITUDE}&daily=weather_code&timezone={TIMEZONE}&forecast_days={FORECAST_DAYS}",
            self.base_url
        )
    }

    /// Run one fetch cycle: race the provider request against `timeout` and
    /// return whichever bundle that yields.
    ///
    /// Total by contract: every failure (connect error, non-2xx status,
    /// malformed payload, timeout) collapses into a demo-data bundle starting
    /// at `today`. The request task is not cancelled on timeout; it finishes
    /// in the background and its late result is dropped.
    pub async fn fetch_forecast(&self, today: NaiveDate, timeout: Duration) -> ForecastBundle {
        let in_flight = tokio::spawn(fetch_primary(self.client.clone(), self.forecast_url()));

        let outcome = tokio::select! {
            joined = in_flight => match joined {
                Ok(result) => result,
                Err(join_error) => {
                    Err(anyhow::Error::new(join_error).context("Forecast request task failed"))
                }
            },
            () = tokio::time::sleep(timeout) => Err(ShoreSquadError::api(format!(
                "Forecast request exceeded {}ms",
                timeout.as_millis()
            ))
            .into()),
        };

        match outcome {
            Ok(days) => {
                info!("Fetched {}-day forecast from Open-Meteo", days.len());
                ForecastBundle::new(ForecastSource::Primary, days)
            }
            Err(error) => {
                warn!("Falling back to demo forecast: {error:#}");
                ForecastBundle::new(ForecastSource::Fallback, synthetic_forecast(today))
            }
        }
    }
}

async fn fetch_primary(client: Client, url: String) -> Result<Vec<DailyForecast>> {
    debug!("Requesting forecast: {url}");

    let response = client
        .get(&url)
        .send()
        .await
        .with_context(|| "Forecast request failed")?;

    let status = response.status();
    if !status.is_success() {
        return Err(ShoreSquadError::api(format!("Forecast provider returned HTTP {status}")).into());
    }

    let payload: open_meteo::ForecastResponse = response
        .json()
        .await
        .with_context(|| "Failed to parse Open-Meteo forecast response")?;

    open_meteo::normalize(&payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_url_shape() {
        let config = WeatherConfig {
            base_url: "https://api.open-meteo.com/".to_string(),
            ..WeatherConfig::default()
        };
        let client = ForecastClient::new(&config).unwrap();
        let url = client.forecast_url();
        assert!(url.starts_with("https://api.open-meteo.com/v1/forecast?"));
        assert!(url.contains("latitude=1.3521"));
        assert!(url.contains("longitude=103.8198"));
        assert!(url.contains("daily=weather_code"));
        assert!(url.contains("timezone=Asia/Singapore"));
        assert!(url.contains("forecast_days=4"));
    }
}
