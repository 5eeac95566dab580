//! Locally generated stand-in forecast used whenever the live provider is
//! unreachable. No network involved, so it works under total outage.

use chrono::{Days, NaiveDate};
use rand::RngExt;

use super::{DailyForecast, FORECAST_DAYS};

/// Demo conditions paired with their base humidity.
const CONDITIONS: [(&str, u8); 5] = [
    ("Sunny", 65),
    ("Partly Cloudy", 72),
    ("Cloudy", 78),
    ("Rainy", 85),
    ("Thunderstorm", 88),
];

/// Humidity jitter added on top of a condition's base.
const HUMIDITY_JITTER: u8 = 10;

/// Generate a 4-day stand-in forecast starting at `start`.
///
/// Each day draws its condition independently; humidity is the condition's
/// base plus jitter, so values stay within base..=base+10.
#[must_use]
pub fn synthetic_forecast(start: NaiveDate) -> Vec<DailyForecast> {
    let mut rng = rand::rng();
    (0..FORECAST_DAYS)
        .map(|offset| {
            let (condition, base) = CONDITIONS[rng.random_range(0..CONDITIONS.len())];
            DailyForecast {
                date: start + Days::new(offset as u64),
                condition: condition.to_string(),
                humidity_percent: base + rng.random_range(0..=HUMIDITY_JITTER),
            }
        })
        .collect()
}
