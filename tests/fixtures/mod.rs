// Test fixtures - reusable test data
// Provides consistent dates and events across the test files
#![allow(dead_code)]

use chrono::NaiveDate;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Sunday, Mar 10 2024
    pub fn march_10_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    /// Dec 31, 2025 (New Year's Eve)
    pub fn new_years_eve_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
    }

    /// Feb 1, 2015: a month that fills exactly four Sunday-first weeks
    pub fn february_2015() -> NaiveDate {
        NaiveDate::from_ymd_opt(2015, 2, 1).unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use calendar_widget::models::event::{Event, EventType};

    pub fn standup() -> Event {
        Event::builder()
            .name("Standup")
            .start("09:00")
            .end("09:30")
            .description("")
            .event_type(EventType::Work)
            .build()
    }

    pub fn dentist() -> Event {
        Event::builder()
            .name("Dentist")
            .start("14:00")
            .end("15:00")
            .description("Bring insurance card")
            .event_type(EventType::Personal)
            .build()
    }

    pub fn party() -> Event {
        Event::builder()
            .name("Party")
            .start("20:00")
            .end("23:59")
            .event_type(EventType::Others)
            .build()
    }
}

/// Raw persisted payloads, as an earlier session would have written them.
pub mod payloads {
    use serde_json::{json, Value};

    /// Records without ids, one malformed entry and one bad key
    pub fn legacy_with_noise() -> Value {
        json!({
            "2024-03-10": [
                {"name": "Standup", "start": "09:00", "end": "09:30", "description": "", "type": "work"},
                {"name": "Missing type", "start": "10:00", "end": "11:00", "description": ""},
                {"name": "Lunch", "start": "12:00", "end": "13:00", "description": "Noodles", "type": "personal"}
            ],
            "someday": [
                {"name": "Lost", "start": "", "end": "", "description": "", "type": "others"}
            ]
        })
    }
}
