//! Catalog Store - immutable in-memory record collection
//!
//! The catalog is built once at startup from a [`DatasetSource`] and never
//! mutated afterwards. Handlers share it through an `Arc` without locking.

mod source;

use std::collections::HashMap;

use crate::error::{CatalogError, Result};
use crate::types::Record;

pub use source::{read_csv_rows, CsvDatasetSource, DatasetSource, SourceRow, REQUIRED_COLUMNS};

/// Immutable ordered collection of records
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<Record>,

    /// id → position of the first record with that id
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from records, keeping their order
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut by_id = HashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            // Duplicate ids are tolerated; the first one wins lookups
            by_id.entry(record.id.clone()).or_insert(pos);
        }

        Self { records, by_id }
    }

    /// Load the catalog from a dataset source
    pub fn load<S: DatasetSource + ?Sized>(source: &S) -> Result<Self> {
        let rows = source.load()?;
        let records: Vec<Record> = rows.into_iter().map(Record::from).collect();

        let catalog = Self::from_records(records);
        if catalog.by_id.len() < catalog.len() {
            tracing::warn!(
                origin = %source.origin(),
                duplicates = catalog.len() - catalog.by_id.len(),
                "Catalog contains duplicate ids; lookups return the first occurrence"
            );
        }
        tracing::info!(origin = %source.origin(), records = catalog.len(), "Catalog loaded");

        Ok(catalog)
    }

    /// All records in stored order
    pub fn get_all(&self) -> &[Record] {
        &self.records
    }

    /// Record with exactly this id
    pub fn get_by_id(&self, id: &str) -> Result<&Record> {
        self.by_id
            .get(id)
            .map(|&pos| &self.records[pos])
            .ok_or_else(|| CatalogError::not_found(id))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
