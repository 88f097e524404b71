//! Turns spreadsheet rows into [`Permit`] records.
//!
//! Workbooks carry a title in the first row, the header in the second and
//! data from the third row on. Only the first worksheet is read.

use crate::common::error::{PipelineError, Result};
use crate::domain::Permit;
use crate::pipeline::normalize::{canonicalize_address, collapse_whitespace, title_case};
use crate::pipeline::schema::{self, ColumnMap};
use calamine::{open_workbook, Data, DataType, Reader, Xlsx};
use regex::Regex;
use std::path::Path;
use tracing::debug;

const HEADER_ROW: usize = 1;

pub struct PermitParser {
    address_fallback: Regex,
}

impl Default for PermitParser {
    fn default() -> Self {
        Self::new()
    }
}

impl PermitParser {
    pub fn new() -> Self {
        // The special-events export embeds the address in the details text
        // between literal markers. Case-sensitive on purpose: the markers
        // are boilerplate inserted verbatim by the permitting system.
        let address_fallback = Regex::new(r"THE EVENT ADDRESS: (.*?)\. THE EVENT").unwrap();
        Self { address_fallback }
    }

    /// Parses one workbook into permits, skipping blank rows.
    pub fn parse_workbook(&self, path: &Path) -> Result<Vec<Permit>> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let variant = schema::variant_for_file(&file_name)?;

        let mut workbook: Xlsx<_> = open_workbook(path)?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| PipelineError::NoWorksheet {
                file: file_name.clone(),
            })??;

        let header_row = range
            .rows()
            .nth(HEADER_ROW)
            .ok_or_else(|| PipelineError::MissingColumn {
                file: file_name.clone(),
                column: variant.number_header.to_string(),
            })?;
        let headers: Vec<String> = header_row.iter().map(cell_text).collect();
        let columns = schema::resolve_columns(variant, &headers, &file_name)?;
        debug!(file = %file_name, schema = variant.name, "resolved columns");

        let permits = range
            .rows()
            .skip(HEADER_ROW + 1)
            .filter_map(|row| self.parse_row(row, &columns))
            .collect();
        Ok(permits)
    }

    /// Builds a permit from one data row, or `None` for a blank row.
    pub fn parse_row(&self, row: &[Data], columns: &ColumnMap) -> Option<Permit> {
        if row.iter().all(DataType::is_empty) {
            return None;
        }

        let cell = |idx: usize| {
            row.get(idx)
                .map(cell_text)
                .map(|t| collapse_whitespace(&t))
                .unwrap_or_default()
        };
        let optional_cell = |idx: Option<usize>| {
            let text = cell(idx?);
            (!text.is_empty()).then_some(text)
        };

        let comment = cell(columns.comment);
        // The fallback applies only to layouts with no address column at
        // all; a blank cell in a real address column stays absent.
        let address = match columns.address {
            Some(_) => optional_cell(columns.address),
            None => self.address_from_comment(&comment),
        };

        Some(Permit {
            number: cell(columns.number),
            name: title_case(&cell(columns.name)),
            description: optional_cell(columns.description),
            address: canonicalize_address(address.as_deref()),
            comment,
        })
    }

    fn address_from_comment(&self, comment: &str) -> Option<String> {
        self.address_fallback
            .captures(comment)
            .map(|caps| caps[1].to_string())
    }
}

fn cell_text(cell: &Data) -> String {
    if cell.is_empty() {
        String::new()
    } else {
        cell.to_string()
    }
}
