//! Serializes the event list to an iCalendar feed.

use crate::common::error::Result;
use crate::config::CalendarConfig;
use crate::domain::Event;
use chrono::NaiveTime;
use icalendar::{Calendar, Component, Event as IcsEvent, EventLike, Property};
use std::fs;
use std::path::Path;

pub fn write_ics(events: &[Event], config: &CalendarConfig, path: &Path) -> Result<()> {
    fs::write(path, render_calendar(events, config))?;
    Ok(())
}

/// Builds the full VCALENDAR document. Events become all-day VEVENTs.
/// The feed must be byte-identical across runs over identical input, so
/// DTSTAMP is pinned to the event date rather than left for the library
/// to fill with the wall clock at serialization time.
pub fn render_calendar(events: &[Event], config: &CalendarConfig) -> String {
    let mut calendar = Calendar::new();
    calendar.append_property(Property::new("PRODID", &config.prod_id));
    calendar.append_property(Property::new("VERSION", "2.0"));
    calendar.name(&config.name);

    for event in events {
        let mut component = IcsEvent::new();
        component
            .uid(&event.uid)
            .summary(&format!("Fireworks: {}", event.name))
            .starts(event.date)
            .ends(event.date)
            .timestamp(event.date.and_time(NaiveTime::MIN).and_utc())
            .description(&event.comment);
        if let Some(address) = &event.address {
            component.location(address);
        }
        calendar.push(component.done());
    }

    calendar.to_string()
}
