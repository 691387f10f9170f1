//! Visible date ranges for the month, week and day views.
//!
//! Given a reference date and a view mode this produces the exact, ordered
//! list of days the renderer draws. Month grids are padded out to whole
//! weeks so they always form a rectangle of 4 to 6 rows.

use chrono::{Local, NaiveDate};

use crate::models::ui::ViewMode;
use crate::utils::date::{month_end, month_start, week_end, week_start, DateKey};

/// One cell of the visible range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub date_key: DateKey,
    pub is_today: bool,
    /// False for the leading/trailing days a month grid borrows from the
    /// neighbouring months. Always true in week and day views.
    pub in_reference_month: bool,
}

/// Compute the visible days using the real local date for `is_today`.
///
/// "Today" is read on every call rather than cached, so a calendar left
/// open past midnight highlights the right cell on its next render.
pub fn compute_range(
    reference: NaiveDate,
    view: ViewMode,
    first_day_of_week: u8,
) -> Vec<CalendarDay> {
    compute_range_at(reference, view, first_day_of_week, Local::now().date_naive())
}

/// Compute the visible days against an explicit `today`.
///
/// # Arguments
/// * `reference` - Anchor date; only its calendar day matters
/// * `view` - Month grid, single week, or single day
/// * `first_day_of_week` - 0 = Sunday, 1 = Monday, etc.
/// * `today` - Date whose cell gets `is_today = true`
pub fn compute_range_at(
    reference: NaiveDate,
    view: ViewMode,
    first_day_of_week: u8,
    today: NaiveDate,
) -> Vec<CalendarDay> {
    let (start, end) = bounds(reference, view, first_day_of_week);
    let today_key = DateKey::from_date(today);
    let visible_month = month_start(reference);

    start
        .iter_days()
        .take_while(|date| *date <= end)
        .map(|date| {
            let date_key = DateKey::from_date(date);
            CalendarDay {
                is_today: date_key == today_key,
                in_reference_month: view != ViewMode::Month || month_start(date) == visible_month,
                date,
                date_key,
            }
        })
        .collect()
}

/// First and last day (inclusive) shown for a view.
pub fn bounds(reference: NaiveDate, view: ViewMode, first_day_of_week: u8) -> (NaiveDate, NaiveDate) {
    match view {
        ViewMode::Month => (
            week_start(month_start(reference), first_day_of_week),
            week_end(month_end(reference), first_day_of_week),
        ),
        ViewMode::Week => (
            week_start(reference, first_day_of_week),
            week_end(reference, first_day_of_week),
        ),
        ViewMode::Day => (reference, reference),
    }
}
