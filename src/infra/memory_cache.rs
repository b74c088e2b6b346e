use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::app::ports::{EventCachePort, RecordProducer};
use crate::domain::RawRecord;

struct CacheEntry {
    stored_at: Instant,
    records: Vec<RawRecord>,
}

impl CacheEntry {
    fn is_fresh(&self, ttl: Duration) -> bool {
        self.stored_at.elapsed() < ttl
    }
}

/// In-memory TTL cache for raw record pages.
///
/// The map lock is held across the producer await, so concurrent requests
/// for the same key trigger at most one fetch per TTL window.
pub struct MemoryCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryCache {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl EventCachePort for MemoryCache {
    async fn fetch_cached(
        &self,
        key: &str,
        locale: &str,
        ttl: Duration,
        producer: RecordProducer,
    ) -> Vec<RawRecord> {
        let full_key = format!("{key}:{locale}");
        let mut entries = self.entries.lock().await;

        if let Some(entry) = entries.get(&full_key) {
            if entry.is_fresh(ttl) {
                debug!("Cache hit for {}", full_key);
                return entry.records.clone();
            }
        }

        debug!("Cache miss for {}, invoking producer", full_key);
        let records = producer.await;
        entries.insert(
            full_key,
            CacheEntry {
                stored_at: Instant::now(),
                records: records.clone(),
            },
        );
        records
    }
}
