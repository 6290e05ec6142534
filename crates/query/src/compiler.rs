//! Predicate compiler: turns a `FilterSpecification` into a `CompiledQuery`.
//!
//! A compiled query is the conjunction of one predicate per *active* facet.
//! Facets left at their "no filter" value contribute nothing, so the
//! default specification compiles to an empty query that matches every
//! posting.

use crate::filter_spec::{Facet, FilterSpecification, LocationType};
use crate::predicate::Predicate;
use crate::predicates::{
    DomainPredicate, DurationPredicate, LocationQueryPredicate, LocationTypePredicate,
    SearchQueryPredicate,
};
use catalog::InternshipRecord;

/// Chains predicates together with logical AND.
///
/// ## Usage
/// ```ignore
/// let query = CompiledQuery::new()
///     .add_predicate(DomainPredicate::new("Design"))
///     .add_predicate(LocationQueryPredicate::new("austin"));
///
/// let hits = query.filter(store.records());
/// ```
pub struct CompiledQuery {
    predicates: Vec<Box<dyn Predicate>>,
}

impl CompiledQuery {
    /// Create a query with no predicates (matches everything).
    pub fn new() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }

    /// Add a predicate to the conjunction (builder pattern).
    pub fn add_predicate(mut self, predicate: impl Predicate + 'static) -> Self {
        self.predicates.push(Box::new(predicate));
        self
    }

    /// Whether every predicate holds for `record`.
    ///
    /// Stops at the first failing predicate.
    pub fn matches(&self, record: &InternshipRecord) -> bool {
        self.predicates.iter().all(|p| p.matches(record))
    }

    /// Retain matching records, preserving their relative order.
    pub fn filter<'a>(&self, records: &'a [InternshipRecord]) -> Vec<&'a InternshipRecord> {
        let matched: Vec<&InternshipRecord> =
            records.iter().filter(|record| self.matches(record)).collect();
        tracing::debug!(
            "Compiled query kept {} of {} postings",
            matched.len(),
            records.len()
        );
        matched
    }

    /// Names of the active predicates, in evaluation order
    pub fn predicate_names(&self) -> Vec<&str> {
        self.predicates.iter().map(|p| p.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

impl Default for CompiledQuery {
    fn default() -> Self {
        Self::new()
    }
}

/// Compile a specification into its conjunction of active facet predicates.
///
/// ## Algorithm
/// 1. Skip every facet at its default (`Any`, or an empty query string)
/// 2. Add exact-match facets first: domain, location type, duration
/// 3. Add the case-folded text facets: location query, then search query
///
/// Queries are not trimmed, so a whitespace-only query is still active.
///
/// # Arguments
/// * `spec` - The specification to compile
///
/// # Returns
/// A `CompiledQuery` that matches every posting when no facet is active
pub fn compile(spec: &FilterSpecification) -> CompiledQuery {
    let mut query = CompiledQuery::new();

    if let Facet::Only(domain) = spec.domain() {
        query = query.add_predicate(DomainPredicate::new(domain.as_str()));
    }
    if spec.location_type() != LocationType::Any {
        query = query.add_predicate(LocationTypePredicate::new(spec.location_type()));
    }
    if let Facet::Only(duration) = spec.duration() {
        query = query.add_predicate(DurationPredicate::new(duration.as_str()));
    }
    if !spec.location_query().is_empty() {
        query = query.add_predicate(LocationQueryPredicate::new(spec.location_query()));
    }
    if !spec.search_query().is_empty() {
        query = query.add_predicate(SearchQueryPredicate::new(spec.search_query()));
    }

    tracing::debug!("Compiled filter: {:?}", query.predicate_names());
    query
}
