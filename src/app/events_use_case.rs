use std::sync::Arc;

use crate::app::ports::{EventCachePort, RecordProducer, RecordSourcePort};
use crate::constants::EVENTS_CACHE_TTL;
use crate::domain::EventCollection;
use crate::pipeline::normalize::normalize_events;
use crate::pipeline::partition::split_events;

/// Use case behind the events pages: cached fetch of the raw Airtable page,
/// then normalization and past/upcoming partitioning.
pub struct EventsUseCase {
    source: Arc<dyn RecordSourcePort>,
    cache: Arc<dyn EventCachePort>,
    locale: String,
}

impl EventsUseCase {
    pub fn new(
        source: Arc<dyn RecordSourcePort>,
        cache: Arc<dyn EventCachePort>,
        locale: String,
    ) -> Self {
        Self {
            source,
            cache,
            locale,
        }
    }

    /// Returns the partitioned event lists for the future or past window.
    ///
    /// Only the raw record page is cached; normalization and partitioning
    /// re-run per call so the past/upcoming boundary tracks the clock. Never
    /// fails: a failed fetch comes back as an empty collection.
    pub async fn get_formatted_events(&self, is_future: bool) -> EventCollection {
        let key = format!("events-list-{}", if is_future { "future" } else { "past" });
        let source = Arc::clone(&self.source);
        let producer: RecordProducer =
            Box::pin(async move { source.fetch_raw_events(is_future).await });

        let records = self
            .cache
            .fetch_cached(&key, &self.locale, EVENTS_CACHE_TTL, producer)
            .await;
        split_events(normalize_events(&records))
    }
}
