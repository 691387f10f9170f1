// Property-based tests for the event store
// Random add/remove sequences over a handful of days

use calendar_widget::models::event::{Event, EventType};
use calendar_widget::services::event::EventStore;
use calendar_widget::utils::date::DateKey;
use calendar_widget::CalendarError;
use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Add { day: u8, name: String, kind: u8 },
    Remove { day: u8, index: usize },
}

fn day_key(day: u8) -> DateKey {
    let base = NaiveDate::from_ymd_opt(2024, 12, 29).unwrap();
    DateKey::from_date(base + Duration::days(day as i64))
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0u8..6, "[a-zA-Z ]{0,12}", 0u8..3).prop_map(|(day, name, kind)| Op::Add { day, name, kind }),
        1 => (0u8..6, 0usize..5).prop_map(|(day, index)| Op::Remove { day, index }),
    ]
}

fn apply(ops: &[Op]) -> EventStore {
    let mut store = EventStore::new();
    for op in ops {
        match op {
            Op::Add { day, name, kind } => {
                let event = Event::builder()
                    .name(name.clone())
                    .start("08:00")
                    .end("09:00")
                    .event_type(EventType::ALL[*kind as usize])
                    .build();
                store.add_event(day_key(*day), event);
            }
            Op::Remove { day, index } => {
                let _ = store.remove_event(&day_key(*day), *index);
            }
        }
    }
    store
}

proptest! {
    /// Property: load(serialize(store)) reproduces the store exactly
    #[test]
    fn prop_round_trip(ops in prop::collection::vec(op(), 0..40)) {
        let store = apply(&ops);
        let reloaded = EventStore::load(Some(&store.serialize()));
        prop_assert_eq!(reloaded, store);
    }

    /// Property: no day is ever kept with an empty list
    #[test]
    fn prop_present_days_are_non_empty(ops in prop::collection::vec(op(), 0..40)) {
        let store = apply(&ops);
        for (_, events) in store.iter() {
            prop_assert!(!events.is_empty());
        }
    }

    /// Property: removing index i shifts only the events after i
    #[test]
    fn prop_remove_shifts_tail(count in 1usize..8, pick in 0usize..8) {
        let index = pick % count;
        let day = day_key(0);
        let mut store = EventStore::new();
        for n in 0..count {
            store.add_event(day.clone(), Event::builder().name(format!("e{}", n)).build());
        }
        let before = store.events_for(&day).to_vec();

        let removed = store.remove_event(&day, index).unwrap();

        let after = store.events_for(&day);
        prop_assert_eq!(after.len(), count - 1);
        prop_assert_eq!(&removed, &before[index]);
        prop_assert_eq!(&after[..index], &before[..index]);
        prop_assert_eq!(&after[index..], &before[index + 1..]);
    }

    /// Property: any index at or past the end is rejected without changes
    #[test]
    fn prop_remove_past_end_fails(count in 0usize..5, extra in 0usize..5) {
        let day = day_key(1);
        let mut store = EventStore::new();
        for _ in 0..count {
            store.add_event(day.clone(), Event::builder().build());
        }
        let snapshot = store.clone();

        let result = store.remove_event(&day, count + extra);

        let is_out_of_range = matches!(result, Err(CalendarError::OutOfRange { .. }));
        prop_assert!(is_out_of_range);
        prop_assert_eq!(store, snapshot);
    }
}
