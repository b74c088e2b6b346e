use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::time::Duration;

/// Airtable table holding every community event.
pub const EVENTS_TABLE: &str = "All Events";

/// How long a fetched page of raw records stays fresh.
pub const EVENTS_CACHE_TTL: Duration = Duration::from_secs(3 * 60);

/// Locale used for cache keys until the site grows a second language.
pub const DEFAULT_LOCALE: &str = "en";

// Internal field names
pub const FIELD_NAME: &str = "name";
pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_LINK: &str = "link";
pub const FIELD_LOCATION: &str = "location";
pub const FIELD_CELO_HOSTED: &str = "celoHosted";
pub const FIELD_CELO_SPEAKING: &str = "celoSpeaking";
pub const FIELD_START_DATE: &str = "startDate";
pub const FIELD_END_DATE: &str = "endDate";

/// Mapping from internal field names to the Airtable sheet column labels.
pub static KEY_CONVERSION: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (FIELD_NAME, "Event Title"),
        (FIELD_DESCRIPTION, "Description of Event"),
        (FIELD_LINK, "Event Link"),
        (FIELD_LOCATION, "Location (Format: City, Country)"),
        (FIELD_CELO_HOSTED, "Celo Hosted?"),
        (FIELD_CELO_SPEAKING, "Celo Team Member Speaking?"),
        (FIELD_START_DATE, "Start Date"),
        (FIELD_END_DATE, "End Date"),
    ])
});

/// Allow-list over the sheet's Process column; anything else is still being
/// organized and must not show up on the site.
pub const PROCESS_FILTER: &str = r#"OR(Process="Complete", Process="Scheduled", Process="Conference, Speaking", Process="This Week")"#;
