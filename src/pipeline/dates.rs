//! Pulls calendar dates out of free-text permit comments.
//!
//! Comments name their dates in prose, e.g. "display on July 3, 4, 2019"
//! or "July 3rd, 4th, 2019". One clause can carry several days sharing a
//! month and year, and one comment can carry several clauses.

use crate::common::error::{PipelineError, Result};
use chrono::NaiveDate;
use regex::Regex;

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

pub struct DateExtractor {
    clause: Regex,
    day: Regex,
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DateExtractor {
    pub fn new() -> Self {
        // <month> <day>[suffix] (, <day>[suffix])* , <year>
        let clause = Regex::new(
            r"(?i)\b(january|february|march|april|may|june|july|august|september|october|november|december)\s+(\d{1,2})(?:st|nd|rd|th)?((?:\s*,\s*\d{1,2}(?:st|nd|rd|th)?)*)\s*,\s*(\d{4})\b",
        )
        .unwrap();
        let day = Regex::new(r"\d{1,2}").unwrap();
        Self { clause, day }
    }

    /// Extracts every date mentioned in `text`, in order of appearance.
    /// Text with no date clause yields an empty list. A clause whose
    /// day/year combination is not a real calendar date aborts the run;
    /// guessing a correction would be worse than stopping.
    pub fn extract(&self, text: &str) -> Result<Vec<NaiveDate>> {
        let mut dates = Vec::new();
        for caps in self.clause.captures_iter(text) {
            let month = month_number(&caps[1]);
            let year: i32 = caps[4].parse().map_err(|_| PipelineError::InvalidDate {
                year: 0,
                month,
                day: 0,
            })?;

            let mut days: Vec<u32> = Vec::new();
            if let Ok(first) = caps[2].parse() {
                days.push(first);
            }
            for day_match in self.day.find_iter(&caps[3]) {
                if let Ok(day) = day_match.as_str().parse() {
                    days.push(day);
                }
            }

            for day in days {
                let date = NaiveDate::from_ymd_opt(year, month, day)
                    .ok_or(PipelineError::InvalidDate { year, month, day })?;
                dates.push(date);
            }
        }
        Ok(dates)
    }
}

fn month_number(name: &str) -> u32 {
    let lower = name.to_lowercase();
    MONTHS
        .iter()
        .position(|m| *m == lower)
        .map(|i| i as u32 + 1)
        .unwrap_or(0)
}
