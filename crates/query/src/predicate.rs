//! Core trait for per-record filter predicates.
//!
//! Each active facet of a `FilterSpecification` compiles to one
//! `Predicate`; a `CompiledQuery` holds their conjunction.

use catalog::InternshipRecord;

/// A boolean test over a single posting.
///
/// `Send + Sync` so a compiled query can be shared with whatever thread
/// renders results. Implementations must be pure: no interior mutation,
/// no I/O.
pub trait Predicate: Send + Sync {
    /// Returns the name of this predicate (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `record` passes this predicate
    fn matches(&self, record: &InternshipRecord) -> bool;
}
