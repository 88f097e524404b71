use chrono::NaiveDate;
use serde::Deserialize;

/// One raw fireworks display permit filing, as parsed from a spreadsheet row.
///
/// Permit numbers repeat across overlapping re-exports of the same filing,
/// so deduplication compares all five fields, not just the number. The
/// derived `Ord` is lexicographic over the fields in declaration order,
/// which gives the stable sort used for reproducible output.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Permit {
    pub number: String,
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub comment: String,
}

/// One concrete calendar occurrence derived from a permit (or from a
/// supplemental entry). A permit whose comment names several dates expands
/// into several events, one per date.
///
/// Identity is `(date, uid)`, both for equality and ordering; the uid is
/// unique within a run, so that pair fully identifies an event. Keeping
/// `PartialEq` on the same key as `Ord` keeps the two consistent.
#[derive(Debug, Clone)]
pub struct Event {
    pub uid: String,
    pub name: String,
    pub date: NaiveDate,
    pub address: Option<String>,
    pub comment: String,
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for Event {}

impl Ord for Event {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.date
            .cmp(&other.date)
            .then_with(|| self.uid.cmp(&other.uid))
    }
}

impl PartialOrd for Event {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// A manually curated event from the supplemental YAML file, keyed there by
/// an external id. Not backed by any permit filing.
#[derive(Debug, Clone, Deserialize)]
pub struct SupplementalEntry {
    pub name: String,
    pub date: NaiveDate,
    pub address: String,
    pub comment: String,
}
