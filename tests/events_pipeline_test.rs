use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::json;

use celo_events::app::events_use_case::EventsUseCase;
use celo_events::app::ports::RecordSourcePort;
use celo_events::domain::RawRecord;
use celo_events::infra::memory_cache::MemoryCache;

/// Record source serving a fixed Airtable-shaped page, counting fetches.
struct FixturePage {
    records: Vec<RawRecord>,
    fetches: AtomicUsize,
}

#[async_trait]
impl RecordSourcePort for FixturePage {
    async fn fetch_raw_events(&self, _is_future: bool) -> Vec<RawRecord> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.records.clone()
    }
}

fn fixture_records() -> Vec<RawRecord> {
    // Shaped like the Airtable response: column labels as keys, sorted
    // descending by start date, with the usual gaps and loose types
    vec![
        json!({
            "Event Title": "Celo Connect Salon",
            "Location (Format: City, Country)": "Paris, France",
            "Start Date": "11-12-30",
            "Celo Hosted?": true,
            "Description of Event": "An evening on mobile-first DeFi",
            "Event Link": "https://example.com/salon",
        }),
        json!({
            "Event Title": "ReFi Summit",
            "Location (Format: City, Country)": "Bogota, Colombia",
            "Start Date": "09-20-30",
            "End Date": "09-22-30",
            "Celo Team Member Speaking?": "yes",
            "Description of Event": "Regenerative finance across the Americas",
        }),
        json!({
            "Event Title": "Untracked meetup",
            "Start Date": "08-01-30",
        }),
        json!({
            "Event Title": "Celo Connect",
            "Location (Format: City, Country)": "Barcelona, Spain",
            "Start Date": "04-02-22",
            "Celo Hosted?": true,
            "Description of Event": "The first flagship gathering",
        }),
        json!({
            "Event Title": "Community Call Watch Party",
            "Location (Format: City, Country)": "Lagos, Nigeria",
            "Start Date": "03-15-22",
        }),
    ]
}

#[tokio::test]
async fn test_pipeline_end_to_end() -> Result<()> {
    let source = Arc::new(FixturePage {
        records: fixture_records(),
        fetches: AtomicUsize::new(0),
    });
    let use_case = EventsUseCase::new(
        source.clone(),
        Arc::new(MemoryCache::new()),
        "en".to_string(),
    );

    let collection = use_case.get_formatted_events(true).await;

    // The row without a location was gated out, the rest partitioned
    let upcoming: Vec<&str> = collection
        .upcoming_events
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    let past: Vec<&str> = collection
        .past_events
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(upcoming, ["ReFi Summit", "Celo Connect Salon"]);
    assert_eq!(past, ["Celo Connect", "Community Call Watch Party"]);

    // Hosted beats spoken-at among described upcoming events
    let top = collection.top_event.as_ref().expect("a top event");
    assert_eq!(top.name, "Celo Connect Salon");
    assert!(top.celo_hosted);
    assert!(collection.upcoming_events.contains(top));

    // Free-text "yes" coerced to a real boolean
    let summit = collection
        .upcoming_events
        .iter()
        .find(|e| e.name == "ReFi Summit")
        .expect("summit present");
    assert!(summit.celo_speaking);
    assert!(!summit.celo_hosted);

    Ok(())
}

#[tokio::test]
async fn test_second_call_within_ttl_hits_cache() -> Result<()> {
    let source = Arc::new(FixturePage {
        records: fixture_records(),
        fetches: AtomicUsize::new(0),
    });
    let use_case = EventsUseCase::new(
        source.clone(),
        Arc::new(MemoryCache::new()),
        "en".to_string(),
    );

    let first = use_case.get_formatted_events(true).await;
    let second = use_case.get_formatted_events(true).await;

    assert_eq!(source.fetches.load(Ordering::SeqCst), 1);
    assert_eq!(first, second);

    // The other window has its own cache key
    use_case.get_formatted_events(false).await;
    assert_eq!(source.fetches.load(Ordering::SeqCst), 2);

    Ok(())
}

#[tokio::test]
async fn test_empty_source_yields_empty_collection() -> Result<()> {
    let source = Arc::new(FixturePage {
        records: Vec::new(),
        fetches: AtomicUsize::new(0),
    });
    let use_case =
        EventsUseCase::new(source, Arc::new(MemoryCache::new()), "en".to_string());

    let collection = use_case.get_formatted_events(false).await;
    assert!(collection.past_events.is_empty());
    assert!(collection.upcoming_events.is_empty());
    assert_eq!(collection.top_event, None);

    Ok(())
}
