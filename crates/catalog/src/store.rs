//! The in-memory catalog store.
//!
//! `CatalogStore` owns every posting in authored order and hands out
//! borrowed views. It is refreshed wholesale: a reload builds a complete new
//! snapshot and swaps it in, so a query never sees a half-populated catalog.

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::{InternshipId, InternshipRecord};
use rayon::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Counters shown on the company dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogCounts {
    pub total: usize,
    pub active: usize,
    pub applications: u64,
}

#[derive(Debug, Default)]
pub struct CatalogStore {
    records: Vec<InternshipRecord>,
    /// Position of each record in `records`
    by_id: HashMap<InternshipId, usize>,
}

impl CatalogStore {
    /// Creates a new, empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from already-fetched records, validating them first
    pub fn from_records(records: Vec<InternshipRecord>) -> Result<Self> {
        let by_id = validate(&records)?;
        Ok(Self { records, by_id })
    }

    /// Load a catalog from a single JSON file, or from every `*.json` file
    /// in a directory.
    pub fn load(path: &Path) -> Result<Self> {
        if path.is_dir() {
            Self::load_from_dir(path)
        } else {
            Self::load_from_file(path)
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        tracing::info!("Loading catalog from {}", path.display());
        let records = parser::parse_catalog_file(path)?;
        let store = Self::from_records(records)?;
        tracing::info!("Loaded {} postings", store.len());
        Ok(store)
    }

    /// Load every `*.json` file of a directory.
    ///
    /// ## Algorithm
    /// 1. Collect the directory's `*.json` files and sort them by path
    /// 2. Parse the files in parallel with rayon
    /// 3. Concatenate the postings in file-name order
    /// 4. Validate the combined snapshot
    ///
    /// # Arguments
    /// * `dir` - Directory holding one or more catalog documents
    ///
    /// # Returns
    /// * `Ok(CatalogStore)` - The validated catalog
    /// * `Err` - If `dir` is not a directory, a file fails to parse, or
    ///   validation rejects the combined postings
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(CatalogError::FileNotFound {
                path: dir.display().to_string(),
            });
        }
        tracing::info!("Loading catalog directory {}", dir.display());

        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();

        let parsed: Vec<Vec<InternshipRecord>> = paths
            .par_iter()
            .map(|path| parser::parse_catalog_file(path))
            .collect::<Result<_>>()?;

        let records: Vec<InternshipRecord> = parsed.into_iter().flatten().collect();
        let store = Self::from_records(records)?;
        tracing::info!(
            "Loaded {} postings from {} files",
            store.len(),
            paths.len()
        );
        Ok(store)
    }

    /// Replace the whole catalog with a freshly fetched snapshot.
    ///
    /// On a validation failure the current snapshot is left untouched.
    pub fn replace(&mut self, records: Vec<InternshipRecord>) -> Result<()> {
        let by_id = validate(&records)?;
        tracing::debug!(
            "Replacing catalog snapshot ({} -> {} postings)",
            self.records.len(),
            records.len()
        );
        self.records = records;
        self.by_id = by_id;
        Ok(())
    }

    /// All postings in catalog order
    pub fn records(&self) -> &[InternshipRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&InternshipRecord> {
        self.by_id.get(id).map(|&idx| &self.records[idx])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Counts over the whole catalog
    pub fn counts(&self) -> CatalogCounts {
        count(self.records.iter())
    }

    /// Counts over one employer's postings
    pub fn company_counts(&self, company_id: &str) -> CatalogCounts {
        count(self.listings_for_company(company_id))
    }

    /// Postings owned by one employer, in catalog order
    pub fn listings_for_company<'a>(
        &'a self,
        company_id: &'a str,
    ) -> impl Iterator<Item = &'a InternshipRecord> + 'a {
        self.records
            .iter()
            .filter(move |record| record.company.id == company_id)
    }

    /// Distinct domains in first-seen order
    pub fn domains(&self) -> Vec<&str> {
        distinct(self.records.iter().map(|r| r.domain.as_str()))
    }

    /// Distinct duration buckets in first-seen order
    pub fn durations(&self) -> Vec<&str> {
        distinct(self.records.iter().map(|r| r.duration.as_str()))
    }
}

fn count<'a>(records: impl Iterator<Item = &'a InternshipRecord>) -> CatalogCounts {
    records.fold(CatalogCounts::default(), |mut acc, record| {
        acc.total += 1;
        if record.is_active {
            acc.active += 1;
        }
        acc.applications += u64::from(record.applications_count);
        acc
    })
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}

/// Validate postings at ingestion and build the id index.
///
/// Checks that:
/// - every id is unique
/// - every stipend amount is finite and non-negative
///
/// The relative order of `startDate` and `applicationDeadline` is not
/// checked; the listings API does not enforce it either.
pub fn validate(records: &[InternshipRecord]) -> Result<HashMap<InternshipId, usize>> {
    let mut by_id = HashMap::with_capacity(records.len());
    for (idx, record) in records.iter().enumerate() {
        if by_id.insert(record.id.clone(), idx).is_some() {
            return Err(CatalogError::DuplicateId(record.id.clone()));
        }
        if let Some(stipend) = &record.stipend {
            if !stipend.amount.is_finite() || stipend.amount < 0.0 {
                return Err(CatalogError::InvalidValue {
                    id: record.id.clone(),
                    field: "stipend.amount".to_string(),
                    value: stipend.amount.to_string(),
                });
            }
        }
    }
    Ok(by_id)
}
