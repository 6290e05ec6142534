//! Error types for the query crate.

use thiserror::Error;

/// A filter facet carried a value outside its closed set.
///
/// Recoverable: the lenient entry points reset the offending facet to its
/// default and still return a result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Unknown sort order: {0:?} (expected recent, stipend or deadline)")]
    UnknownSortOrder(String),

    #[error("Unknown location type: {0:?} (expected any, remote, hybrid or onsite)")]
    UnknownLocationType(String),
}

impl ValidationError {
    /// Name of the facet the caller should reset
    pub fn facet(&self) -> &'static str {
        match self {
            ValidationError::UnknownSortOrder(_) => "sortBy",
            ValidationError::UnknownLocationType(_) => "locationType",
        }
    }
}

pub type Result<T> = std::result::Result<T, ValidationError>;
