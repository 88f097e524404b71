//! Sequences the whole extraction: spreadsheets in, sorted events out.

use crate::common::error::Result;
use crate::config::Config;
use crate::domain::Event;
use crate::pipeline::expand::EventExpander;
use crate::pipeline::filter::{filter_and_dedup, PermitFilter};
use crate::pipeline::parse::PermitParser;
use crate::supplemental::load_supplemental;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

/// Runs every stage over the configured data directory and returns the
/// combined event list, sorted by (date, uid). Any stage failure aborts
/// the run; callers must not render partial output.
pub fn collect_events(config: &Config) -> Result<Vec<Event>> {
    let parser = PermitParser::new();
    let filter = PermitFilter::new(&config.filters.excluded_permits);
    let expander = EventExpander::new(&config.calendar.domain);

    let mut paths: Vec<PathBuf> = fs::read_dir(&config.input.data_dir)?
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .map(|entry| entry.path())
        .collect();
    paths.sort();

    let mut permits = Vec::new();
    for path in paths {
        if path.extension().and_then(|e| e.to_str()) != Some("xlsx") {
            debug!(path = %path.display(), "skipping non-spreadsheet file");
            continue;
        }
        let file_permits = parser.parse_workbook(&path)?;
        info!(
            file = %path.display(),
            permits = file_permits.len(),
            "parsed workbook"
        );
        permits.extend(file_permits);
    }

    // Dedup runs over the combined stream: overlapping exports repeat the
    // same filing across files.
    let permits = filter_and_dedup(permits, &filter);
    info!(permits = permits.len(), "permits after filter and dedup");

    let mut events = Vec::new();
    for permit in &permits {
        events.extend(expander.expand(permit)?);
    }

    let supplemental_path = config.input.data_dir.join(&config.input.supplemental_file);
    let supplemental = load_supplemental(&supplemental_path, &config.calendar.domain)?;
    info!(supplemental = supplemental.len(), "loaded supplemental events");
    events.extend(supplemental);

    events.sort();
    info!(events = events.len(), "collected events");
    for event in &events {
        info!(uid = %event.uid, date = %event.date, name = %event.name, "event");
    }
    Ok(events)
}
