//! Expands permits into one event per extracted date.

use crate::common::error::Result;
use crate::domain::{Event, Permit};
use crate::pipeline::dates::DateExtractor;

pub struct EventExpander<'a> {
    extractor: DateExtractor,
    domain: &'a str,
}

impl<'a> EventExpander<'a> {
    pub fn new(domain: &'a str) -> Self {
        Self {
            extractor: DateExtractor::new(),
            domain,
        }
    }

    /// One event per date named in the permit comment, in extraction
    /// order. The expansion index keeps uids distinct when a single permit
    /// covers several dates. A comment naming no dates expands to nothing.
    pub fn expand(&self, permit: &Permit) -> Result<Vec<Event>> {
        let dates = self.extractor.extract(&permit.comment)?;
        let events = dates
            .into_iter()
            .enumerate()
            .map(|(i, date)| Event {
                uid: format!("fireworks-{}-{}@{}", permit.number, i, self.domain),
                name: permit.name.clone(),
                date,
                address: permit.address.clone(),
                comment: permit.comment.clone(),
            })
            .collect();
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn permit(number: &str, comment: &str) -> Permit {
        Permit {
            number: number.to_string(),
            name: "Park Celebration".to_string(),
            description: None,
            address: Some("3400 15Th Ave S, Minneapolis, MN".to_string()),
            comment: comment.to_string(),
        }
    }

    #[test]
    fn one_event_per_extracted_date() {
        let expander = EventExpander::new("example.com");
        let events = expander
            .expand(&permit("2020-01234", "Shows July 3, 4, 2020."))
            .unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].uid, "fireworks-2020-01234-0@example.com");
        assert_eq!(events[1].uid, "fireworks-2020-01234-1@example.com");
        assert_eq!(events[0].date, "2020-07-03".parse().unwrap());
        assert_eq!(events[1].date, "2020-07-04".parse().unwrap());
        assert_eq!(events[0].name, "Park Celebration");
        assert_eq!(
            events[0].address.as_deref(),
            Some("3400 15Th Ave S, Minneapolis, MN")
        );
    }

    #[test]
    fn dateless_comment_expands_to_nothing() {
        let expander = EventExpander::new("example.com");
        let events = expander
            .expand(&permit("2020-01234", "Annual permit."))
            .unwrap();
        assert!(events.is_empty());
    }
}
