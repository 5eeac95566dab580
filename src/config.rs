//! Configuration for the ShoreSquad service.
//!
//! Everything has a sensible default; individual settings can be overridden
//! through `SHORESQUAD_*` environment variables. There is no config file;
//! the service is meant to run with zero setup.

use std::env;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::ShoreSquadError;

/// Root configuration for the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoreSquadConfig {
    /// HTTP server settings
    pub server: ServerConfig,
    /// Weather fetch settings
    pub weather: WeatherConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port the site is served on
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Weather fetch settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Base URL of the forecast provider
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
    /// How long to wait for the provider before serving demo data
    #[serde(default = "default_weather_timeout_ms")]
    pub timeout_ms: u64,
    /// Optional background refresh interval; `None` fetches once at startup
    #[serde(default)]
    pub refresh_interval_secs: Option<u64>,
}

fn default_port() -> u16 {
    3000
}

fn default_weather_base_url() -> String {
    "https://api.open-meteo.com".to_string()
}

fn default_weather_timeout_ms() -> u64 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            timeout_ms: default_weather_timeout_ms(),
            refresh_interval_secs: None,
        }
    }
}

impl Default for ShoreSquadConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            weather: WeatherConfig::default(),
        }
    }
}

impl ShoreSquadConfig {
    /// Build configuration from defaults plus environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(port) = env::var("SHORESQUAD_PORT") {
            config.server.port = port.parse().map_err(|_| {
                ShoreSquadError::config(format!("SHORESQUAD_PORT is not a valid port: {port}"))
            })?;
        }
        if let Ok(base_url) = env::var("SHORESQUAD_WEATHER_BASE_URL") {
            config.weather.base_url = base_url;
        }
        if let Ok(timeout) = env::var("SHORESQUAD_WEATHER_TIMEOUT_MS") {
            config.weather.timeout_ms = timeout.parse().map_err(|_| {
                ShoreSquadError::config(format!(
                    "SHORESQUAD_WEATHER_TIMEOUT_MS is not a number: {timeout}"
                ))
            })?;
        }
        if let Ok(interval) = env::var("SHORESQUAD_REFRESH_SECS") {
            config.weather.refresh_interval_secs = Some(interval.parse().map_err(|_| {
                ShoreSquadError::config(format!("SHORESQUAD_REFRESH_SECS is not a number: {interval}"))
            })?);
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration settings.
    pub fn validate(&self) -> Result<()> {
        if self.weather.base_url.is_empty() {
            return Err(ShoreSquadError::validation("Weather base URL cannot be empty").into());
        }
        if !self.weather.base_url.starts_with("http://")
            && !self.weather.base_url.starts_with("https://")
        {
            return Err(ShoreSquadError::config(
                "Weather base URL must be a valid HTTP or HTTPS URL",
            )
            .into());
        }
        if self.weather.timeout_ms == 0 {
            return Err(ShoreSquadError::config("Weather timeout cannot be zero").into());
        }
        if self.weather.timeout_ms > 300_000 {
            return Err(
                ShoreSquadError::config("Weather timeout cannot exceed 300000 ms (5 minutes)")
                    .into(),
            );
        }
        if let Some(interval) = self.weather.refresh_interval_secs
            && interval < 60
        {
            return Err(ShoreSquadError::config(
                "Refresh interval below 60 seconds would hammer the forecast provider",
            )
            .into());
        }
        Ok(())
    }
}
