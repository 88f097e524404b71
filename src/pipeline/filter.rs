//! Drops unwanted permits and collapses duplicates across source files.

use crate::domain::Permit;
use std::collections::BTreeSet;
use tracing::debug;

/// Outdoor display permit category. Indoor displays are sometimes filed
/// under it anyway; those are recognizable by their comment text.
const ONE_TIME_DISPLAY: &str = "FIREWORKS DISPLAY - ONE TIME";

pub struct PermitFilter<'a> {
    excluded_numbers: &'a [String],
}

impl<'a> PermitFilter<'a> {
    pub fn new(excluded_numbers: &'a [String]) -> Self {
        Self { excluded_numbers }
    }

    /// True when the permit should flow through to event expansion.
    pub fn keep(&self, permit: &Permit) -> bool {
        if permit.description.as_deref() == Some(ONE_TIME_DISPLAY)
            && permit.comment.contains("INDOOR")
        {
            debug!(number = %permit.number, "dropping indoor display");
            return false;
        }
        if self.excluded_numbers.contains(&permit.number) {
            debug!(number = %permit.number, "dropping excluded permit number");
            return false;
        }
        true
    }
}

/// Filters the combined permit stream and collapses structurally equal
/// records. Overlapping exports of the same filing produce exact repeats,
/// so uniqueness is over the full field tuple. The returned permits come
/// out in their total order, which keeps downstream output deterministic.
pub fn filter_and_dedup(permits: Vec<Permit>, filter: &PermitFilter) -> Vec<Permit> {
    let unique: BTreeSet<Permit> = permits
        .into_iter()
        .filter(|permit| filter.keep(permit))
        .collect();
    unique.into_iter().collect()
}
