//! Per-day grouping of forecast rows for the weather cards.
//!
//! The current provider emits one row per calendar day, but richer sources
//! report several entries for the same date; grouping keeps the rendering
//! contract stable either way.

use chrono::NaiveDate;
use serde::Serialize;

use super::{FORECAST_DAYS, ForecastBundle};

/// One weather card's worth of data for a single date.
#[derive(Debug, Clone, Serialize)]
pub struct DayAggregate {
    pub date: NaiveDate,
    /// Distinct condition labels in the order they appeared.
    pub conditions: Vec<String>,
    /// Highest humidity reported for the date.
    pub max_humidity: u8,
}

impl DayAggregate {
    /// The label shown on the card: the first condition seen for the date,
    /// not the most frequent one.
    #[must_use]
    pub fn primary_condition(&self) -> &str {
        self.conditions.first().map_or("Clear", String::as_str)
    }

    /// Whether the date saw more than one distinct condition.
    #[must_use]
    pub fn mixed(&self) -> bool {
        self.conditions.len() > 1
    }
}

/// Fold a bundle into at most four aggregates, one per distinct date,
/// ordered by each date's first appearance.
#[must_use]
pub fn aggregate(bundle: &ForecastBundle) -> Vec<DayAggregate> {
    let mut groups: Vec<DayAggregate> = Vec::new();

    for day in &bundle.days {
        match groups.iter_mut().find(|group| group.date == day.date) {
            Some(group) => {
                if !group.conditions.contains(&day.condition) {
                    group.conditions.push(day.condition.clone());
                }
                group.max_humidity = group.max_humidity.max(day.humidity_percent);
            }
            None => groups.push(DayAggregate {
                date: day.date,
                conditions: vec![day.condition.clone()],
                max_humidity: day.humidity_percent,
            }),
        }
    }

    groups.truncate(FORECAST_DAYS);
    groups
}
