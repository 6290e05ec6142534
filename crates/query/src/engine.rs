//! The query engine: filter a catalog snapshot, then order the survivors.
//!
//! ## Algorithm
//! 1. Compile the specification into a `CompiledQuery`
//! 2. Keep the postings it matches, in catalog order
//! 3. Stable-sort them by the specification's `SortOrder`
//!
//! The engine only borrows postings; nothing in the catalog is cloned or
//! modified. Each call recomputes from scratch, so the same snapshot and
//! specification always produce the same sequence.

use crate::compiler::compile;
use crate::error::ValidationError;
use crate::filter_spec::{FilterSpecification, FilterState};
use catalog::{CatalogStore, InternshipRecord};

/// Ordered postings matching one specification.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSequence<'a> {
    records: Vec<&'a InternshipRecord>,
}

impl<'a> ResultSequence<'a> {
    pub fn records(&self) -> &[&'a InternshipRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a InternshipRecord> + '_ {
        self.records.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn ids(&self) -> Vec<&'a str> {
        self.iter().map(|r| r.id.as_str()).collect()
    }

    pub fn titles(&self) -> Vec<&'a str> {
        self.iter().map(|r| r.title.as_str()).collect()
    }
}

impl<'a> IntoIterator for ResultSequence<'a> {
    type Item = &'a InternshipRecord;
    type IntoIter = std::vec::IntoIter<&'a InternshipRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

/// Outcome of a lenient query: a best-effort result plus every facet that
/// had to be reset to its default.
#[derive(Debug, Clone)]
pub struct Execution<'a> {
    pub results: ResultSequence<'a>,
    /// The specification actually executed
    pub spec: FilterSpecification,
    pub errors: Vec<ValidationError>,
}

impl Execution<'_> {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Run a validated specification against a catalog snapshot.
///
/// ## Algorithm
/// 1. Compile `spec` into a conjunction of its active facets
/// 2. Keep every matching posting, in catalog order
/// 3. Stable-sort the survivors by `spec.sort_by()`
///
/// # Arguments
/// * `catalog` - The current snapshot, borrowed for the lifetime of the result
/// * `spec` - A specification that already passed validation
///
/// # Returns
/// The matching postings in display order. Empty when nothing matches.
pub fn execute<'a>(
    catalog: &'a [InternshipRecord],
    spec: &FilterSpecification,
) -> ResultSequence<'a> {
    let query = compile(spec);
    let mut records = query.filter(catalog);
    spec.sort_by().sort(&mut records);

    tracing::debug!(
        "Query returned {} of {} postings (sort: {})",
        records.len(),
        catalog.len(),
        spec.sort_by()
    );
    ResultSequence { records }
}

/// Run a presentation-layer filter state.
///
/// Unrecognized `sortBy` / `locationType` values do not abort the query:
/// the facet falls back to its default (`recent`, `any`) and the error is
/// returned alongside the results.
pub fn execute_state<'a>(catalog: &'a [InternshipRecord], state: &FilterState) -> Execution<'a> {
    let (spec, errors) = FilterSpecification::from_state_lenient(state);
    for error in &errors {
        tracing::warn!("Resetting filter facet {}: {}", error.facet(), error);
    }
    Execution {
        results: execute(catalog, &spec),
        spec,
        errors,
    }
}

/// Convenience wrapper that queries a `CatalogStore`.
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    store: &'a CatalogStore,
}

impl<'a> QueryEngine<'a> {
    pub fn new(store: &'a CatalogStore) -> Self {
        Self { store }
    }

    pub fn execute(&self, spec: &FilterSpecification) -> ResultSequence<'a> {
        execute(self.store.records(), spec)
    }

    pub fn execute_state(&self, state: &FilterState) -> Execution<'a> {
        execute_state(self.store.records(), state)
    }
}
