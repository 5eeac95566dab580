//! Forecast domain model shared by the fetcher, the fallback generator and
//! the rendering API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod aggregate;
pub mod fetcher;
pub mod open_meteo;
pub mod synthetic;

pub use aggregate::{DayAggregate, aggregate};
pub use fetcher::ForecastClient;

/// Number of days the site shows, and the horizon requested upstream.
pub const FORECAST_DAYS: usize = 4;

/// Where a forecast bundle came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForecastSource {
    /// Live data from the forecast provider.
    Primary,
    /// Locally generated stand-in data.
    Fallback,
}

impl ForecastSource {
    /// User-facing provenance label shown next to the forecast.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ForecastSource::Primary => "Live Forecast",
            ForecastSource::Fallback => "Demo Data",
        }
    }
}

/// One day of forecast in the shape the site renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: NaiveDate,
    /// Human-readable condition label, e.g. "Partly Cloudy".
    pub condition: String,
    /// Relative humidity in percent, always within 0..=100.
    pub humidity_percent: u8,
}

/// A complete fetch-cycle result: the days plus their provenance.
///
/// Built fresh on every cycle and never mutated afterwards; a refresh
/// replaces the whole bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastBundle {
    pub source: ForecastSource,
    pub days: Vec<DailyForecast>,
}

impl ForecastBundle {
    #[must_use]
    pub fn new(source: ForecastSource, mut days: Vec<DailyForecast>) -> Self {
        days.truncate(FORECAST_DAYS);
        Self { source, days }
    }
}
