//! Dataset sources for the catalog
//!
//! A source yields raw rows carrying the dataset's own column names
//! (`show_id`, `listed_in`, ...). Renaming and empty-string coercion happen
//! when rows are turned into [`Record`]s.

use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;

use crate::error::{CatalogError, Result};
use crate::types::{Record, Year};

/// Columns every dataset must provide
pub const REQUIRED_COLUMNS: &[&str] = &[
    "show_id",
    "title",
    "release_year",
    "listed_in",
    "rating",
    "description",
];

/// A row as read from the dataset, before normalization
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceRow {
    pub show_id: Option<String>,
    pub title: Option<String>,
    pub release_year: Option<String>,
    pub listed_in: Option<String>,
    pub rating: Option<String>,
    pub description: Option<String>,
}

impl From<SourceRow> for Record {
    /// Rename dataset columns to record fields; absent values become `""`
    fn from(row: SourceRow) -> Self {
        Self {
            id: row.show_id.unwrap_or_default(),
            title: row.title.unwrap_or_default(),
            year: Year::parse(row.release_year.as_deref().unwrap_or_default()),
            category: row.listed_in.unwrap_or_default(),
            rating: row.rating.unwrap_or_default(),
            description: row.description.unwrap_or_default(),
        }
    }
}

/// Tabular reader the catalog is built from
pub trait DatasetSource {
    /// Human-readable origin used in logs and load errors
    fn origin(&self) -> String;

    fn load(&self) -> Result<Vec<SourceRow>>;
}

/// CSV file with a header row
#[derive(Debug, Clone)]
pub struct CsvDatasetSource {
    path: PathBuf,
}

impl CsvDatasetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetSource for CsvDatasetSource {
    fn origin(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<SourceRow>> {
        let file = File::open(&self.path).map_err(|e| CatalogError::load(self.origin(), e))?;
        read_csv_rows(file, &self.origin())
    }
}

/// Parse CSV rows from any reader, checking the header for required columns
pub fn read_csv_rows<R: Read>(input: R, origin: &str) -> Result<Vec<SourceRow>> {
    // Header names are trimmed for both the column check and deserialization
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(input);

    let headers = reader
        .headers()
        .map_err(|e| CatalogError::load(origin, format!("failed to read CSV header: {}", e)))?
        .clone();

    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|column| !headers.iter().any(|h| h == **column))
    {
        return Err(CatalogError::load(
            origin,
            format!("missing required column '{}'", missing),
        ));
    }

    let mut rows = Vec::new();
    for (line, result) in reader.deserialize::<SourceRow>().enumerate() {
        let row = result.map_err(|e| {
            // +2: one for the header, one for 1-based numbering
            CatalogError::load(origin, format!("bad record at line {}: {}", line + 2, e))
        })?;
        rows.push(row);
    }

    Ok(rows)
}
