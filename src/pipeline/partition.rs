use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::domain::{Event, EventCollection};

/// Splits normalized events into past and upcoming sets relative to the
/// current instant and picks the top event for prominent display.
pub fn split_events(events: Vec<Event>) -> EventCollection {
    split_events_at(events, Utc::now())
}

/// Same as `split_events` but with an explicit reference instant.
///
/// Expects its input in descending start-date order (the normalizer's output
/// order): upcoming events come out ascending (soonest first) and past events
/// stay descending (most recent first).
pub fn split_events_at(events: Vec<Event>, now: DateTime<Utc>) -> EventCollection {
    let mut upcoming_events = Vec::new();
    let mut past_events = Vec::new();

    for event in events {
        if will_happen(&event, now) {
            upcoming_events.push(event);
        } else {
            past_events.push(event);
        }
    }
    // Input is descending, so flipping yields soonest-first
    upcoming_events.reverse();

    let top_event = select_top(&upcoming_events).or_else(|| select_top(&past_events));

    EventCollection {
        past_events,
        upcoming_events,
        top_event,
    }
}

fn will_happen(event: &Event, now: DateTime<Utc>) -> bool {
    let after_now = |date: &str| parse_event_date(date).is_some_and(|instant| instant > now);
    after_now(&event.start_date)
        || event
            .end_date
            .as_deref()
            .is_some_and(|end| !end.is_empty() && after_now(end))
}

/// Picks the event to highlight: description required, celo-hosted preferred.
/// Works on a copy so the list order handed to the UI is untouched.
fn select_top(events: &[Event]) -> Option<Event> {
    let mut candidates: Vec<Event> = events
        .iter()
        .filter(|e| e.description.as_deref().is_some_and(|d| !d.is_empty()))
        .cloned()
        .collect();
    candidates.sort_by(celo_first);
    candidates.into_iter().next()
}

/// Preference ranking for top-event selection, not a chronological order:
/// Celo-hosted events first, and among those the greater start-date string.
pub fn celo_first(a: &Event, b: &Event) -> Ordering {
    match (a.celo_hosted, b.celo_hosted) {
        (true, true) => b.start_date.cmp(&a.start_date),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => Ordering::Equal,
    }
}

/// Parses a stored date string into an instant for classification only.
/// The sheet mostly holds `MM-DD-YY`, with stragglers in other layouts; a
/// date that parses with none of them compares as "not after now", which
/// files the event under past.
fn parse_event_date(date: &str) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(date) {
        return Some(instant.with_timezone(&Utc));
    }
    for format in ["%m-%d-%y %H:%M", "%m-%d-%Y %H:%M", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(date, format) {
            return Some(naive.and_utc());
        }
    }
    for format in ["%m-%d-%y", "%m-%d-%Y", "%Y-%m-%d"] {
        if let Ok(day) = NaiveDate::parse_from_str(date, format) {
            return Some(day.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }
    None
}
