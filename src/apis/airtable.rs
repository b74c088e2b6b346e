use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{error, info, instrument};

use crate::app::ports::RecordSourcePort;
use crate::config::AirtableConfig;
use crate::constants::{EVENTS_TABLE, PROCESS_FILTER};
use crate::domain::RawRecord;
use crate::error::Result;

/// Record source backed by the Airtable REST API. Filtering and sorting are
/// pushed down to the service through a filter formula.
pub struct AirtableEvents {
    client: reqwest::Client,
    base_id: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct RecordPage {
    records: Vec<PageRecord>,
}

#[derive(Debug, Deserialize)]
struct PageRecord {
    fields: RawRecord,
}

impl AirtableEvents {
    /// Reads the API key from `AIRTABLE_API_KEY`.
    pub fn new(config: &AirtableConfig) -> Result<Self> {
        let api_key = std::env::var("AIRTABLE_API_KEY")?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self {
            client,
            base_id: config.base_id.clone(),
            api_key,
        })
    }

    fn endpoint(&self) -> String {
        format!("https://api.airtable.com/v0/{}/{}", self.base_id, EVENTS_TABLE)
    }

    async fn fetch_page(&self, is_future: bool) -> Result<Vec<RawRecord>> {
        let page: RecordPage = self
            .client
            .get(self.endpoint())
            .bearer_auth(&self.api_key)
            .query(&[
                ("filterByFormula", filter_formula(is_future).as_str()),
                ("sort[0][field]", "Start Date"),
                ("sort[0][direction]", "desc"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(page.records.into_iter().map(|record| record.fields).collect())
    }
}

/// Builds the Airtable filter formula for one window. The future window
/// reaches 2 days back so an event stays "upcoming" while it runs; the past
/// window reaches 1 day forward for the mirror reason.
pub fn filter_formula(is_future: bool) -> String {
    let date_filter = if is_future { "IS_AFTER" } else { "IS_BEFORE" };
    let days = if is_future { "-2" } else { "1" };
    let start_date_filter =
        format!(r#"{date_filter}({{Start Date}}, DATEADD(TODAY(), {days}, "days"))"#);
    let end_date_filter = format!(
        r#"OR(BLANK({{Start Date}}),{date_filter}({{End Date}}, DATEADD(TODAY(), {days}, "days")))"#
    );
    let date_filter = format!("OR({start_date_filter}, {end_date_filter})");
    format!("AND({date_filter},{PROCESS_FILTER})")
}

#[async_trait]
impl RecordSourcePort for AirtableEvents {
    #[instrument(skip(self))]
    async fn fetch_raw_events(&self, is_future: bool) -> Vec<RawRecord> {
        match self.fetch_page(is_future).await {
            Ok(records) => {
                info!("Fetched {} raw event records from Airtable", records.len());
                records
            }
            Err(e) => {
                // The caller renders "no events", never an error state
                error!("Failed to fetch events from Airtable: {e}");
                Vec::new()
            }
        }
    }
}
