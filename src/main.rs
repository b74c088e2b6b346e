use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use celo_events::apis::airtable::AirtableEvents;
use celo_events::app::events_use_case::EventsUseCase;
use celo_events::config::Config;
use celo_events::constants::DEFAULT_LOCALE;
use celo_events::infra::memory_cache::MemoryCache;
use celo_events::logging::init_logging;

/// Fetches the Celo community event lists and prints them as JSON.
#[derive(Parser)]
#[command(name = "celo_events")]
struct Cli {
    /// Fetch the past window instead of the upcoming one
    #[arg(long)]
    past: bool,

    /// Locale used in the cache key
    #[arg(long, default_value = DEFAULT_LOCALE)]
    locale: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    init_logging();

    let cli = Cli::parse();
    let config = Config::load()?;

    let source = Arc::new(AirtableEvents::new(&config.airtable)?);
    let cache = Arc::new(MemoryCache::new());
    let use_case = EventsUseCase::new(source, cache, cli.locale);

    let collection = use_case.get_formatted_events(!cli.past).await;
    println!("{}", serde_json::to_string_pretty(&collection)?);
    Ok(())
}
