//! Maps the header row of a source spreadsheet to semantic column indices.
//!
//! The city publishes permit data under a couple of different export
//! layouts. Each layout is one entry in [`SCHEMA_VARIANTS`]; row parsing
//! never branches on the variant, so supporting a new export is a single
//! addition to the table.

use crate::common::error::{PipelineError, Result};
use crate::pipeline::normalize::collapse_whitespace;

/// One known column layout, matched against the source file name.
#[derive(Debug)]
pub struct SchemaVariant {
    pub name: &'static str,
    /// Substring of the file name that identifies this layout.
    pub file_signature: &'static str,
    pub number_header: &'static str,
    pub name_header: &'static str,
    pub description_header: Option<&'static str>,
    pub address_header: Option<&'static str>,
    pub comment_header: &'static str,
}

pub const SCHEMA_VARIANTS: &[SchemaVariant] = &[
    // The fireworks permits report: full layout with address and category.
    SchemaVariant {
        name: "fireworks-permits",
        file_signature: "Fireworks",
        number_header: "Permit Number",
        name_header: "Permit Name",
        description_header: Some("Description"),
        address_header: Some("Permit Street Address"),
        comment_header: "Comment Text",
    },
    // The special events report: no address or category columns; the
    // address, when present at all, is embedded in the details text.
    SchemaVariant {
        name: "special-events",
        file_signature: "Special_Event",
        number_header: "Permit#",
        name_header: "Event",
        description_header: None,
        address_header: None,
        comment_header: "Event Details",
    },
];

/// Resolved column indices for one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    pub number: usize,
    pub name: usize,
    pub description: Option<usize>,
    pub address: Option<usize>,
    pub comment: usize,
}

/// Picks the schema variant for a file by its name. Unrecognized names are
/// a hard error: guessing a column mapping would silently misattribute
/// fields.
pub fn variant_for_file(file_name: &str) -> Result<&'static SchemaVariant> {
    SCHEMA_VARIANTS
        .iter()
        .find(|v| file_name.contains(v.file_signature))
        .ok_or_else(|| PipelineError::UnknownSchema {
            file: file_name.to_string(),
        })
}

/// Resolves the variant's headers against the actual header row. Header
/// text is whitespace-normalized before comparison; matching is exact.
pub fn resolve_columns(
    variant: &SchemaVariant,
    header_row: &[String],
    file_name: &str,
) -> Result<ColumnMap> {
    let headers: Vec<String> = header_row.iter().map(|h| collapse_whitespace(h)).collect();

    let find = |header: &str| headers.iter().position(|h| h.as_str() == header);
    let require = |header: &'static str| {
        find(header).ok_or_else(|| PipelineError::MissingColumn {
            file: file_name.to_string(),
            column: header.to_string(),
        })
    };

    Ok(ColumnMap {
        number: require(variant.number_header)?,
        name: require(variant.name_header)?,
        description: variant.description_header.map(|h| require(h)).transpose()?,
        address: variant.address_header.map(|h| require(h)).transpose()?,
        comment: require(variant.comment_header)?,
    })
}
