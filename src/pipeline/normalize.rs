use std::cmp::Ordering;

use serde_json::Value;
use tracing::debug;

use crate::constants::{
    FIELD_CELO_HOSTED, FIELD_CELO_SPEAKING, FIELD_DESCRIPTION, FIELD_END_DATE, FIELD_LINK,
    FIELD_LOCATION, FIELD_NAME, FIELD_START_DATE, KEY_CONVERSION,
};
use crate::domain::{Event, RawRecord};

/// A raw record with its keys renamed to internal field names, values still
/// in their loose source form. Only lives inside `normalize_events`.
#[derive(Debug)]
struct IntermediateEvent {
    name: Option<String>,
    description: Option<String>,
    link: Option<String>,
    location: Option<String>,
    celo_hosted: Value,
    celo_speaking: Value,
    start_date: Option<String>,
    end_date: Option<String>,
}

/// Converts a page of raw Airtable records into canonical events:
/// key mapping, required-field gate, boolean coercion, then a stable
/// descending sort by the start-date string.
pub fn normalize_events(records: &[RawRecord]) -> Vec<Event> {
    let total = records.len();
    let mut events: Vec<Event> = records
        .iter()
        .map(convert_keys)
        .filter(has_required_fields)
        .map(convert_values)
        .collect();
    if events.len() < total {
        debug!(
            "Dropped {} of {} raw records missing a required field",
            total - events.len(),
            total
        );
    }
    events.sort_by(order_by_date);
    events
}

fn convert_keys(raw: &RawRecord) -> IntermediateEvent {
    IntermediateEvent {
        name: string_field(raw, FIELD_NAME),
        description: string_field(raw, FIELD_DESCRIPTION),
        link: string_field(raw, FIELD_LINK),
        location: string_field(raw, FIELD_LOCATION),
        celo_hosted: loose_field(raw, FIELD_CELO_HOSTED),
        celo_speaking: loose_field(raw, FIELD_CELO_SPEAKING),
        start_date: string_field(raw, FIELD_START_DATE),
        end_date: string_field(raw, FIELD_END_DATE),
    }
}

fn string_field(raw: &RawRecord, field: &str) -> Option<String> {
    raw.get(KEY_CONVERSION[field])
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
}

fn loose_field(raw: &RawRecord, field: &str) -> Value {
    raw.get(KEY_CONVERSION[field]).cloned().unwrap_or(Value::Null)
}

/// The content-quality gate: rows without a name, location and start date
/// never reach the UI.
fn has_required_fields(event: &IntermediateEvent) -> bool {
    let present = |field: &Option<String>| field.as_deref().is_some_and(|s| !s.is_empty());
    present(&event.name) && present(&event.location) && present(&event.start_date)
}

fn convert_values(event: IntermediateEvent) -> Event {
    Event {
        // Gate guarantees the required three are present
        name: event.name.unwrap_or_default(),
        description: event.description,
        link: event.link,
        location: event.location.unwrap_or_default(),
        celo_hosted: truthy(&event.celo_hosted),
        celo_speaking: truthy(&event.celo_speaking),
        start_date: event.start_date.unwrap_or_default(),
        end_date: event.end_date,
    }
}

/// JS-style truthiness over a raw JSON value. The sheet sometimes holds a
/// checkbox boolean and sometimes free text like "yes".
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Descending by start-date string. The sheet keeps dates in one zero-padded
/// format, so the lexicographic order doubles as reverse-chronological order.
fn order_by_date(a: &Event, b: &Event) -> Ordering {
    b.start_date.cmp(&a.start_date)
}
