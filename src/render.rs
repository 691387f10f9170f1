//! Plain-text rendering of the controller's output.

use calendar_widget::models::event::Event;
use calendar_widget::models::ui::ViewMode;
use calendar_widget::services::event::EventStore;
use calendar_widget::services::persistence::EventPersistence;
use calendar_widget::services::range::CalendarDay;
use calendar_widget::utils::date::DateKey;
use calendar_widget::CalendarController;
use chrono::Datelike;

const CELL_WIDTH: usize = 9;

pub fn render_calendar<P: EventPersistence>(controller: &CalendarController<P>) -> String {
    let state = controller.state();
    let days = controller.visible_days();
    let store = controller.store();

    let title = match state.view_mode {
        ViewMode::Month => state.reference_date.format("%B %Y").to_string(),
        ViewMode::Week => match days.first() {
            Some(first) => format!("Week of {}", first.date.format("%B %-d, %Y")),
            None => String::new(),
        },
        ViewMode::Day => state.reference_date.format("%B %-d, %Y").to_string(),
    };

    let mut out = format!("{}\n", title);
    match state.view_mode {
        ViewMode::Day => {
            for day in &days {
                let marker = if day.is_today { " (today)" } else { "" };
                out.push_str(&format!("{}{}\n", day.date.format("%A"), marker));
                out.push_str(&render_event_list(&day.date_key, store.events_for(&day.date_key)));
            }
        }
        ViewMode::Month | ViewMode::Week => {
            let header: Vec<String> = days
                .iter()
                .take(7)
                .map(|day| format!("{:<width$}", day.date.format("%a").to_string(), width = CELL_WIDTH))
                .collect();
            out.push_str(header.concat().trim_end());
            out.push('\n');

            for week in days.chunks(7) {
                let row: Vec<String> = week.iter().map(|day| render_cell(day, store)).collect();
                out.push_str(row.concat().trim_end());
                out.push('\n');
            }
        }
    }
    out
}

/// `10*[2]` for today with two events, `(29)` for a day borrowed from
/// another month.
fn render_cell(day: &CalendarDay, store: &EventStore) -> String {
    let number = if day.in_reference_month {
        format!("{:>2}", day.date.day())
    } else {
        format!("({})", day.date.day())
    };
    let today = if day.is_today { "*" } else { "" };
    let count = match store.event_count(&day.date_key) {
        0 => String::new(),
        n => format!("[{}]", n),
    };
    format!("{:<width$}", format!("{}{}{}", number, today, count), width = CELL_WIDTH)
}

pub fn render_event_list(date_key: &DateKey, events: &[Event]) -> String {
    if events.is_empty() {
        return format!("No events for {}.\n", date_key);
    }

    let mut out = String::new();
    for (index, event) in events.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}. {} [{}] {}\n",
            index,
            event.name,
            event.event_type,
            event.time_range_label()
        ));
        if !event.description.is_empty() {
            out.push_str(&format!("     {}\n", event.description));
        }
    }
    out
}
