//! Loads the manually curated events that have no backing permit filing.

use crate::common::error::Result;
use crate::domain::{Event, SupplementalEntry};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Reads the supplemental YAML file, a mapping of external id to entry.
/// The BTreeMap keeps id order stable so uids and output stay
/// deterministic run to run.
pub fn load_supplemental(path: &Path, domain: &str) -> Result<Vec<Event>> {
    let file = fs::File::open(path)?;
    let entries: BTreeMap<String, SupplementalEntry> = serde_yaml::from_reader(file)?;
    let events = entries
        .into_iter()
        .map(|(id, entry)| Event {
            uid: format!("fireworks-{}@{}", id, domain),
            name: entry.name,
            date: entry.date,
            address: Some(entry.address),
            comment: entry.comment,
        })
        .collect();
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::PipelineError;
    use std::io::Write;

    #[test]
    fn loads_entries_keyed_by_id() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
aquatennial-2020:
  name: Aquatennial Finale
  date: 2020-07-25
  address: West River Parkway, Minneapolis, MN
  comment: Fireworks over the Mississippi.
new-years-2020:
  name: New Year Fireworks
  date: 2020-12-31
  address: Boom Island Park, Minneapolis, MN
  comment: Midnight show.
"#
        )
        .unwrap();

        let events = load_supplemental(file.path(), "example.com").unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].uid, "fireworks-aquatennial-2020@example.com");
        assert_eq!(events[0].date, "2020-07-25".parse().unwrap());
        assert_eq!(events[1].uid, "fireworks-new-years-2020@example.com");
        assert_eq!(
            events[1].address.as_deref(),
            Some("Boom Island Park, Minneapolis, MN")
        );
    }

    #[test]
    fn malformed_date_is_fatal() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
bad-entry:
  name: Bad
  date: July 4th
  address: Somewhere
  comment: Nope.
"#
        )
        .unwrap();

        let err = load_supplemental(file.path(), "example.com").unwrap_err();
        assert!(matches!(err, PipelineError::Yaml(_)));
    }

    #[test]
    fn missing_file_is_fatal() {
        let err = load_supplemental(Path::new("/nonexistent/other.yaml"), "example.com")
            .unwrap_err();
        assert!(matches!(err, PipelineError::Io(_)));
    }
}
