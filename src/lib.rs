//! Extracts fireworks display permits from City of Minneapolis spreadsheet
//! exports and publishes them as an iCalendar feed and a static web page.

pub mod common;
pub mod config;
pub mod domain;
pub mod observability;
pub mod output;
pub mod pipeline;
pub mod supplemental;

pub use common::error::{PipelineError, Result};
pub use domain::{Event, Permit};
