//! Predicate implementations, one per filter facet.

pub mod facet;
pub mod location;
pub mod text;

// Re-export for convenience
pub use facet::{DomainPredicate, DurationPredicate};
pub use location::{LocationQueryPredicate, LocationTypePredicate};
pub use text::SearchQueryPredicate;
