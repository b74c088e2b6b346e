use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::RawRecord;

/// Future producing a fresh page of raw records; a cache only polls it on a
/// miss.
pub type RecordProducer = Pin<Box<dyn Future<Output = Vec<RawRecord>> + Send>>;

#[async_trait]
pub trait RecordSourcePort: Send + Sync {
    /// Fetch one page of raw event records, already filtered and sorted by
    /// the external service. Must never fail: transport errors are absorbed
    /// at this boundary and map to an empty page.
    async fn fetch_raw_events(&self, is_future: bool) -> Vec<RawRecord>;
}

#[async_trait]
pub trait EventCachePort: Send + Sync {
    /// Returns the records stored under `(key, locale)` while they are
    /// younger than `ttl`, otherwise awaits `producer` and stores its output.
    async fn fetch_cached(
        &self,
        key: &str,
        locale: &str,
        ttl: Duration,
        producer: RecordProducer,
    ) -> Vec<RawRecord>;
}
