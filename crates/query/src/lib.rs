//! Search engine for the internship catalog.
//!
//! This crate provides:
//! - FilterSpecification, the immutable description of one search
//! - Predicate trait and one implementation per filter facet
//! - The predicate compiler that ANDs the active facets together
//! - The query engine that filters and orders a catalog snapshot
//! - Saved/applied marker decoration for results
//!
//! ## Architecture
//! A query runs in stages:
//! 1. `compile` turns the specification into a conjunction of predicates
//! 2. The conjunction filters the catalog, keeping catalog order
//! 3. The specification's `SortOrder` stable-sorts the survivors
//! 4. Presentation optionally decorates the results with marker state
//!
//! ## Example Usage
//! ```ignore
//! use query::{execute, Facet, FilterSpecification, SortOrder};
//!
//! let spec = FilterSpecification::default()
//!     .with_domain(Facet::Only("Data Science".to_string()))
//!     .with_search_query("python")
//!     .with_sort_by(SortOrder::Deadline);
//!
//! for posting in execute(store.records(), &spec) {
//!     println!("{} - {}", posting.title, posting.company.name);
//! }
//! ```

pub mod error;
pub mod filter_spec;
pub mod predicate;
pub mod predicates;
pub mod compiler;
pub mod ordering;
pub mod engine;
pub mod markers;

// Re-export main types
pub use compiler::{CompiledQuery, compile};
pub use engine::{Execution, QueryEngine, ResultSequence, execute, execute_state};
pub use error::ValidationError;
pub use filter_spec::{
    ALL_DOMAINS, ALL_DURATIONS, Facet, FilterSpecification, FilterState, LocationType, SortOrder,
};
pub use markers::{
    DecoratedRecord, InMemoryMarkerStore, MarkerKind, MarkerStore, decorate, decorate_for_user,
};
pub use predicate::Predicate;
