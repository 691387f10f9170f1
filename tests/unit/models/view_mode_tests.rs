// Unit tests for view and event-type parsing plus per-view range sizes

use calendar_widget::models::event::EventType;
use calendar_widget::models::ui::ViewMode;
use calendar_widget::services::range::compute_range_at;
use chrono::NaiveDate;
use test_case::test_case;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test_case("month", ViewMode::Month ; "month")]
#[test_case("week", ViewMode::Week ; "week")]
#[test_case("day", ViewMode::Day ; "day")]
#[test_case(" Week ", ViewMode::Week ; "trimmed mixed case")]
fn test_view_mode_parses(input: &str, expected: ViewMode) {
    assert_eq!(input.parse::<ViewMode>(), Ok(expected));
}

#[test_case("year" ; "unsupported view")]
#[test_case("" ; "empty")]
fn test_view_mode_rejects(input: &str) {
    assert!(input.parse::<ViewMode>().is_err());
}

#[test_case("work", EventType::Work ; "work")]
#[test_case("personal", EventType::Personal ; "personal")]
#[test_case("others", EventType::Others ; "others")]
#[test_case("other", EventType::Others ; "singular other")]
fn test_event_type_parses(input: &str, expected: EventType) {
    assert_eq!(input.parse::<EventType>().unwrap(), expected);
}

#[test]
fn test_view_mode_display_round_trips() {
    for view in ViewMode::ALL {
        assert_eq!(view.to_string().parse::<ViewMode>(), Ok(view));
    }
}

#[test]
fn test_view_mode_defaults_to_month() {
    assert_eq!(ViewMode::default(), ViewMode::Month);
}

// Sunday-first month grids
#[test_case(date(2024, 3, 10), 42 ; "march 2024 spills into six weeks")]
#[test_case(date(2015, 2, 1), 28 ; "february 2015 fits four weeks")]
#[test_case(date(2024, 12, 25), 35 ; "december 2024")]
#[test_case(date(2024, 2, 29), 35 ; "leap february")]
fn test_month_grid_length(reference: NaiveDate, expected: usize) {
    let days = compute_range_at(reference, ViewMode::Month, 0, reference);
    assert_eq!(days.len(), expected);
}

#[test_case(ViewMode::Week, 7 ; "week")]
#[test_case(ViewMode::Day, 1 ; "day")]
fn test_fixed_view_length(view: ViewMode, expected: usize) {
    let reference = date(2024, 3, 10);
    assert_eq!(compute_range_at(reference, view, 0, reference).len(), expected);
}
