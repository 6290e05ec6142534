//! Exact-match predicates for the open-enum facets.
//!
//! Domain and duration values come from fixed pickers, so they compare
//! exactly (case-sensitive) against the record field.

use crate::predicate::Predicate;
use catalog::InternshipRecord;

/// Keeps postings whose domain equals the selected one.
pub struct DomainPredicate {
    domain: String,
}

impl DomainPredicate {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
        }
    }
}

impl Predicate for DomainPredicate {
    fn name(&self) -> &str {
        "DomainPredicate"
    }

    fn matches(&self, record: &InternshipRecord) -> bool {
        record.domain == self.domain
    }
}

/// Keeps postings whose duration bucket equals the selected one.
pub struct DurationPredicate {
    duration: String,
}

impl DurationPredicate {
    pub fn new(duration: impl Into<String>) -> Self {
        Self {
            duration: duration.into(),
        }
    }
}

impl Predicate for DurationPredicate {
    fn name(&self) -> &str {
        "DurationPredicate"
    }

    fn matches(&self, record: &InternshipRecord) -> bool {
        record.duration == self.duration
    }
}
