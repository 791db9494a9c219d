mod config;
mod job;

use crate::config::Config;
use anyhow::{Context, Result};
use dotenv::dotenv;
use sportarr_core::EventRef;
use std::io::{self, BufWriter, Read, Write};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env()?;
    info!("Starting release scorer: {:?}", config);

    if let Some(threads) = config.scorer_threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to build scorer thread pool")?;
    }

    // Events
    let raw_events = std::fs::read_to_string(&config.events_file)
        .with_context(|| format!("Failed to read {}", config.events_file.display()))?;
    let records: Vec<serde_json::Value> =
        serde_json::from_str(&raw_events).context("Failed to decode events JSON")?;
    let events: Vec<EventRef> = records
        .into_iter()
        .enumerate()
        .filter_map(|(i, record)| match serde_json::from_value(record) {
            Ok(event) => Some(event),
            Err(e) => {
                warn!("Skipping malformed event #{}: {}", i, e);
                None
            }
        })
        .collect();

    // Releases
    let raw_releases = match &config.releases_file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read releases from stdin")?;
            buf
        }
    };
    let titles = job::release_titles(&raw_releases);

    info!("Scoring {} releases against {} events", titles.len(), events.len());

    let lines = job::run(&events, &titles, &config);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for line in &lines {
        serde_json::to_writer(&mut out, line).context("Failed to encode result")?;
        writeln!(out).context("Failed to write result")?;
    }
    out.flush().context("Failed to flush output")?;

    let auto_grab = lines.iter().filter(|l| l.auto_grab).count();
    info!("Done: {} candidates, {} auto-grab", lines.len(), auto_grab);

    Ok(())
}
