use serde::{Deserialize, Serialize};

/// Raw event data as returned by the Airtable API, keyed by sheet column labels
pub type RawRecord = serde_json::Value;

/// A community event in its canonical shape.
///
/// `name`, `location` and `start_date` are guaranteed non-empty by the
/// normalizer's required-field gate. Dates stay strings (`MM-DD-YY`, possibly
/// carrying a time); they are only parsed transiently when classifying events
/// as past or upcoming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    pub description: Option<String>,
    pub link: Option<String>,
    /// Free text, "City, Country"
    pub location: String,
    pub celo_hosted: bool,
    pub celo_speaking: bool,
    pub start_date: String,
    pub end_date: Option<String>,
}

/// The partitioned event lists served to the presentation layer.
///
/// `upcoming_events` is ordered soonest first, `past_events` most recent
/// first. `top_event`, when present, equals one element of the two lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventCollection {
    pub past_events: Vec<Event>,
    pub upcoming_events: Vec<Event>,
    pub top_event: Option<Event>,
}
