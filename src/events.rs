//! Upcoming cleanup events listed on the site.

use chrono::NaiveDate;
use serde::Serialize;

/// A scheduled cleanup event.
#[derive(Debug, Clone, Serialize)]
pub struct CleanupEvent {
    pub id: u32,
    pub name: &'static str,
    pub date: NaiveDate,
    /// Display time, e.g. "09:00 AM".
    pub time: &'static str,
    pub location: &'static str,
    pub volunteers: u32,
    pub description: &'static str,
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// Events in chronological order.
#[must_use]
pub fn upcoming_events() -> Vec<CleanupEvent> {
    vec![
        CleanupEvent {
            id: 1,
            name: "East Coast Cleanup Drive",
            date: date(2025, 12, 15),
            time: "09:00 AM",
            location: "East Coast Park",
            volunteers: 12,
            description: "Join us for a morning beach cleanup session!",
        },
        CleanupEvent {
            id: 2,
            name: "Sentosa Island Eco-Action",
            date: date(2025, 12, 22),
            time: "02:00 PM",
            location: "Sentosa Beach",
            volunteers: 8,
            description: "Afternoon beach cleanup and restoration effort.",
        },
        CleanupEvent {
            id: 3,
            name: "Changi Beach Squad Up",
            date: date(2025, 12, 29),
            time: "08:00 AM",
            location: "Changi Beach",
            volunteers: 15,
            description: "Early morning cleanup before year-end celebration!",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_are_chronological_with_unique_ids() {
        let events = upcoming_events();
        assert_eq!(events.len(), 3);
        assert!(events.windows(2).all(|w| w[0].date < w[1].date));
        assert!(events.windows(2).all(|w| w[0].id != w[1].id));
    }

    #[test]
    fn test_events_reference_known_beaches() {
        let beaches: Vec<&str> = crate::beaches::cleanup_beaches()
            .iter()
            .map(|b| b.name)
            .collect();
        for event in upcoming_events() {
            assert!(beaches.contains(&event.location), "{}", event.location);
        }
    }
}
