use crate::common::error::{PipelineError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub filters: FilterConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Directory holding the spreadsheet exports and the supplemental file.
    pub data_dir: PathBuf,
    /// Supplemental events file name, relative to `data_dir`.
    pub supplemental_file: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub ics_path: PathBuf,
    pub html_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    /// Domain suffix used in every event uid.
    pub domain: String,
    pub prod_id: String,
    pub name: String,
}

/// Data-quality patches. Permit numbers listed here are non-event
/// administrative filings that slipped into an export; dropping one is a
/// config edit, not a code change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterConfig {
    #[serde(default)]
    pub excluded_permits: Vec<String>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            PipelineError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
