// Property-based tests for day keys and visible ranges
// Random reference dates across two centuries and every week-start setting

use calendar_widget::models::ui::ViewMode;
use calendar_widget::services::range::{compute_range_at, CalendarDay};
use calendar_widget::utils::date::{month_end, month_start, to_key};
use chrono::{Datelike, Duration, NaiveDate};
use proptest::prelude::*;

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap()
}

/// Any date from 1900 to roughly 2100
fn any_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..73_000).prop_map(|offset| epoch() + Duration::days(offset))
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn is_contiguous(days: &[CalendarDay]) -> bool {
    days.windows(2)
        .all(|pair| pair[1].date == pair[0].date + Duration::days(1))
}

proptest! {
    /// Property: keys are equal exactly when days are, and order like the dates
    #[test]
    fn prop_key_order_matches_date_order(a in any_date(), b in any_date()) {
        let (ka, kb) = (to_key(a), to_key(b));
        prop_assert_eq!(ka == kb, a == b);
        prop_assert_eq!(ka < kb, a < b);
        prop_assert_eq!(ka.to_date(), Some(a));
    }

    /// Property: month grids are whole weeks covering the entire month
    #[test]
    fn prop_month_is_whole_weeks(reference in any_date(), first_day in 0u8..7) {
        let days = compute_range_at(reference, ViewMode::Month, first_day, today());

        prop_assert_eq!(days.len() % 7, 0);
        prop_assert!((28..=42).contains(&days.len()));
        prop_assert!(is_contiguous(&days));
        prop_assert!(days.iter().any(|d| d.date == month_start(reference)));
        prop_assert!(days.iter().any(|d| d.date == month_end(reference)));
        prop_assert_eq!(days[0].date.weekday().num_days_from_sunday(), first_day as u32);
    }

    /// Property: borrowed days are exactly the ones outside the month
    #[test]
    fn prop_month_flags_borrowed_days(reference in any_date()) {
        let days = compute_range_at(reference, ViewMode::Month, 0, today());
        for day in &days {
            let same_month = day.date.month() == reference.month() && day.date.year() == reference.year();
            prop_assert_eq!(day.in_reference_month, same_month);
        }
    }

    /// Property: a week is seven contiguous days around the reference
    #[test]
    fn prop_week_contains_reference(reference in any_date(), first_day in 0u8..7) {
        let days = compute_range_at(reference, ViewMode::Week, first_day, today());

        prop_assert_eq!(days.len(), 7);
        prop_assert!(is_contiguous(&days));
        prop_assert!(days.iter().any(|d| d.date == reference));
        prop_assert_eq!(days[0].date.weekday().num_days_from_sunday(), first_day as u32);
    }

    /// Property: the day view is the reference day alone
    #[test]
    fn prop_day_is_reference(reference in any_date()) {
        let days = compute_range_at(reference, ViewMode::Day, 0, today());

        prop_assert_eq!(days.len(), 1);
        prop_assert_eq!(days[0].date, reference);
        prop_assert_eq!(&days[0].date_key, &to_key(reference));
    }

    /// Property: at most one cell is today, and only if today is visible
    #[test]
    fn prop_single_today_cell(reference in any_date(), now in any_date()) {
        let days = compute_range_at(reference, ViewMode::Month, 0, now);
        let flagged = days.iter().filter(|d| d.is_today).count();
        let visible = days.iter().any(|d| d.date == now);
        prop_assert_eq!(flagged, usize::from(visible));
    }
}

#[cfg(test)]
mod additional_tests {
    use super::*;

    #[test]
    fn test_march_2024_grid_bounds() {
        let reference = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let days = compute_range_at(reference, ViewMode::Month, 0, today());

        assert_eq!(days.len(), 42);
        assert_eq!(days.first().unwrap().date_key.as_str(), "2024-02-25");
        assert_eq!(days.last().unwrap().date_key.as_str(), "2024-04-06");
    }
}
