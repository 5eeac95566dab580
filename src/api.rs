//! JSON API consumed by the frontend.
//!
//! The `Api*` structs are the wire shapes; domain types stay internal so the
//! frontend contract can evolve independently.

use std::sync::Arc;

use axum::{Router, extract::State, response::Json, routing::get};
use chrono::NaiveDate;
use serde::Serialize;

use crate::beaches::{Beach, MAP_CENTER, MAP_ZOOM, cleanup_beaches};
use crate::crew::{CrewMember, squad};
use crate::events::{CleanupEvent, upcoming_events};
use crate::state::AppState;
use crate::weather::{ForecastBundle, ForecastSource, aggregate};

/// Pick the frontend icon for a condition label by keyword.
#[must_use]
pub fn icon_for(condition: &str) -> &'static str {
    let condition = condition.to_lowercase();

    if condition.contains("rain") || condition.contains("thunderstorm") {
        "rain"
    } else if condition.contains("cloud") {
        "cloud"
    } else if condition.contains("clear") || condition.contains("sunny") {
        "sun"
    } else if condition.contains("wind") {
        "wind"
    } else if condition.contains("mist") || condition.contains("fog") {
        "fog"
    } else {
        "partly"
    }
}

/// One weather card.
#[derive(Debug, Serialize)]
pub struct ApiForecastDay {
    pub date: NaiveDate,
    pub condition: String,
    pub humidity_percent: u8,
    /// True when the date saw more than one distinct condition.
    pub mixed: bool,
    pub icon: &'static str,
}

/// The weather strip: provenance plus up to four day cards.
#[derive(Debug, Serialize)]
pub struct ApiWeather {
    pub source: ForecastSource,
    pub source_label: &'static str,
    pub days: Vec<ApiForecastDay>,
}

impl From<&ForecastBundle> for ApiWeather {
    fn from(bundle: &ForecastBundle) -> Self {
        let days = aggregate(bundle)
            .into_iter()
            .map(|day| {
                let condition = day.primary_condition().to_string();
                ApiForecastDay {
                    date: day.date,
                    icon: icon_for(&condition),
                    mixed: day.mixed(),
                    humidity_percent: day.max_humidity,
                    condition,
                }
            })
            .collect();

        Self {
            source: bundle.source,
            source_label: bundle.source.label(),
            days,
        }
    }
}

/// Map viewport and cleanup markers.
#[derive(Debug, Serialize)]
pub struct ApiMap {
    /// `[latitude, longitude]` of the initial viewport.
    pub center: (f64, f64),
    pub zoom: u8,
    pub beaches: Vec<Beach>,
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/weather", get(get_weather))
        .route("/beaches", get(get_beaches))
        .route("/events", get(get_events))
        .route("/crew", get(get_crew))
}

async fn get_weather(State(state): State<Arc<AppState>>) -> Json<ApiWeather> {
    let bundle = state.forecast().await;
    Json(ApiWeather::from(bundle.as_ref()))
}

async fn get_beaches() -> Json<ApiMap> {
    Json(ApiMap {
        center: MAP_CENTER,
        zoom: MAP_ZOOM,
        beaches: cleanup_beaches(),
    })
}

async fn get_events() -> Json<Vec<CleanupEvent>> {
    Json(upcoming_events())
}

async fn get_crew() -> Json<Vec<CrewMember>> {
    Json(squad())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::DailyForecast;
    use rstest::rstest;

    #[rstest]
    #[case("Rainy", "rain")]
    #[case("Heavy Rain Showers", "rain")]
    #[case("Thunderstorm", "rain")]
    #[case("Partly Cloudy", "cloud")]
    #[case("Clear", "sun")]
    #[case("Sunny", "sun")]
    #[case("Windy", "wind")]
    #[case("Foggy", "fog")]
    #[case("Misty", "fog")]
    #[case("Snow Grains", "partly")]
    fn test_icon_keyword_matching(#[case] condition: &str, #[case] icon: &str) {
        assert_eq!(icon_for(condition), icon);
    }

    #[test]
    fn test_api_weather_from_bundle() {
        let bundle = ForecastBundle {
            source: ForecastSource::Fallback,
            days: vec![
                DailyForecast {
                    date: "2025-01-02".parse().unwrap(),
                    condition: "Clear".to_string(),
                    humidity_percent: 61,
                },
                DailyForecast {
                    date: "2025-01-02".parse().unwrap(),
                    condition: "Cloudy".to_string(),
                    humidity_percent: 73,
                },
                DailyForecast {
                    date: "2025-01-03".parse().unwrap(),
                    condition: "Rainy".to_string(),
                    humidity_percent: 85,
                },
            ],
        };

        let api = ApiWeather::from(&bundle);
        assert_eq!(api.source_label, "Demo Data");
        assert_eq!(api.days.len(), 2);

        let first = &api.days[0];
        assert_eq!(first.condition, "Clear");
        assert_eq!(first.humidity_percent, 73);
        assert!(first.mixed);
        assert_eq!(first.icon, "sun");

        let second = &api.days[1];
        assert!(!second.mixed);
        assert_eq!(second.icon, "rain");
    }
}
