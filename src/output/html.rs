//! Renders the static web page from the event list.

use crate::common::error::Result;
use crate::domain::Event;
use askama::Template;
use chrono::{Duration, NaiveDate};
use std::fs;
use std::path::Path;

/// How far ahead the page looks when deciding what counts as upcoming.
const UPCOMING_WINDOW_DAYS: i64 = 31;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub events: &'a [Event],
    pub today: NaiveDate,
    pub cutoff: NaiveDate,
}

pub fn write_html(events: &[Event], today: NaiveDate, path: &Path) -> Result<()> {
    fs::write(path, render_page(events, today)?)?;
    Ok(())
}

/// The template receives the full sorted list plus the window bounds; it
/// decides presentation, including which entries count as upcoming.
pub fn render_page(events: &[Event], today: NaiveDate) -> Result<String> {
    let template = IndexTemplate {
        events,
        today,
        cutoff: today + Duration::days(UPCOMING_WINDOW_DAYS),
    };
    Ok(template.render()?)
}
