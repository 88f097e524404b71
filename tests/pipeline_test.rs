use std::fs;
use std::path::PathBuf;

use mpls_fireworks::config::{CalendarConfig, Config, FilterConfig, InputConfig, OutputConfig};
use mpls_fireworks::domain::Permit;
use mpls_fireworks::output::{html, ics};
use mpls_fireworks::pipeline::expand::EventExpander;
use mpls_fireworks::pipeline::filter::{filter_and_dedup, PermitFilter};
use mpls_fireworks::pipeline::runner;
use tempfile::tempdir;

const OTHER_YAML: &str = r#"
aquatennial-2020:
  name: Aquatennial Target Fireworks
  date: 2020-07-22
  address: West River Parkway, Minneapolis, MN
  comment: Fireworks over the Mississippi.
new-years-2020:
  name: New Year Fireworks
  date: 2020-12-31
  address: Boom Island Park, Minneapolis, MN
  comment: Midnight show.
"#;

fn test_config(data_dir: PathBuf, out_dir: PathBuf) -> Config {
    Config {
        input: InputConfig {
            data_dir,
            supplemental_file: "other.yaml".to_string(),
        },
        output: OutputConfig {
            ics_path: out_dir.join("fireworks.ics"),
            html_path: out_dir.join("index.html"),
        },
        calendar: CalendarConfig {
            domain: "example.com".to_string(),
            prod_id: "-//Fireworks//example.com//".to_string(),
            name: "Fireworks in Minneapolis".to_string(),
        },
        filters: FilterConfig::default(),
    }
}

fn permit(number: &str, name: &str, comment: &str) -> Permit {
    Permit {
        number: number.to_string(),
        name: name.to_string(),
        description: Some("FIREWORKS DISPLAY - ONE TIME".to_string()),
        address: Some("3400 15Th Ave S, Minneapolis, MN".to_string()),
        comment: comment.to_string(),
    }
}

#[test]
fn run_over_supplemental_only_directory() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("other.yaml"), OTHER_YAML).unwrap();
    // A stray non-spreadsheet file must be skipped, not treated as input.
    fs::write(dir.path().join("notes.txt"), "not a workbook").unwrap();

    let config = test_config(dir.path().to_path_buf(), dir.path().to_path_buf());
    let events = runner::collect_events(&config).unwrap();

    let uids: Vec<&str> = events.iter().map(|e| e.uid.as_str()).collect();
    assert_eq!(
        uids,
        [
            "fireworks-aquatennial-2020@example.com",
            "fireworks-new-years-2020@example.com"
        ]
    );
}

#[test]
fn missing_data_directory_aborts() {
    let dir = tempdir().unwrap();
    let config = test_config(
        dir.path().join("does-not-exist"),
        dir.path().to_path_buf(),
    );
    assert!(runner::collect_events(&config).is_err());
}

#[test]
fn permits_from_overlapping_exports_collapse_and_expand() {
    // The same filing showing up in two different source files must yield
    // one permit, and then one event per date in its comment.
    let first_file = vec![
        permit("2020-01234", "Park Show", "Shows July 3, 4, 2020."),
        permit("2020-05678", "River Show", "Show on August 1, 2020."),
    ];
    let second_file = vec![permit("2020-01234", "Park Show", "Shows July 3, 4, 2020.")];

    let combined: Vec<Permit> = first_file.into_iter().chain(second_file).collect();
    let filter = PermitFilter::new(&[]);
    let permits = filter_and_dedup(combined, &filter);
    assert_eq!(permits.len(), 2);

    let expander = EventExpander::new("example.com");
    let mut events = Vec::new();
    for p in &permits {
        events.extend(expander.expand(p).unwrap());
    }
    events.sort();

    let uids: Vec<&str> = events.iter().map(|e| e.uid.as_str()).collect();
    assert_eq!(
        uids,
        [
            "fireworks-2020-01234-0@example.com",
            "fireworks-2020-01234-1@example.com",
            "fireworks-2020-05678-0@example.com"
        ]
    );
}

#[test]
fn indoor_permit_produces_no_events_at_all() {
    let indoor = permit(
        "2020-00001",
        "Arena Show",
        "INDOOR pyrotechnics on July 4, 2020.",
    );
    let filter = PermitFilter::new(&[]);
    let permits = filter_and_dedup(vec![indoor], &filter);
    assert!(permits.is_empty());
}

#[test]
fn dateless_permit_is_absent_from_final_output() {
    let dateless = permit("2020-00002", "Annual Permit", "Dates to be determined.");
    let filter = PermitFilter::new(&[]);
    let permits = filter_and_dedup(vec![dateless], &filter);
    assert_eq!(permits.len(), 1);

    let expander = EventExpander::new("example.com");
    let events = expander.expand(&permits[0]).unwrap();
    assert!(events.is_empty());
}

#[test]
fn calendar_output_is_byte_identical_across_runs() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("other.yaml"), OTHER_YAML).unwrap();
    let config = test_config(dir.path().to_path_buf(), dir.path().to_path_buf());

    let first = ics::render_calendar(&runner::collect_events(&config).unwrap(), &config.calendar);
    let second = ics::render_calendar(&runner::collect_events(&config).unwrap(), &config.calendar);
    assert_eq!(first, second);
    assert!(first.contains("UID:fireworks-aquatennial-2020@example.com"));

    // Every timestamp must come from event content, never the wall clock;
    // two renders in the same second would not catch that on their own.
    assert!(first.contains("DTSTAMP:20200722T000000Z"));
    assert!(first.contains("DTSTAMP:20201231T000000Z"));
}

#[test]
fn run_writes_both_artifacts() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("other.yaml"), OTHER_YAML).unwrap();
    let config = test_config(dir.path().to_path_buf(), dir.path().to_path_buf());

    let events = runner::collect_events(&config).unwrap();
    ics::write_ics(&events, &config.calendar, &config.output.ics_path).unwrap();
    let today = "2020-07-01".parse().unwrap();
    html::write_html(&events, today, &config.output.html_path).unwrap();

    let ics_text = fs::read_to_string(&config.output.ics_path).unwrap();
    assert!(ics_text.contains("BEGIN:VCALENDAR"));
    assert!(ics_text.contains("SUMMARY:Fireworks: Aquatennial Target Fireworks"));

    let html_text = fs::read_to_string(&config.output.html_path).unwrap();
    assert!(html_text.contains("Aquatennial Target Fireworks"));
    // Outside the 31-day window as of the chosen "today".
    assert!(!html_text.contains("New Year Fireworks"));
}
