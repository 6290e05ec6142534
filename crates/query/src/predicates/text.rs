//! Free-text search over title, employer name and skill tags.

use crate::predicate::Predicate;
use catalog::InternshipRecord;

/// Case-fold a string for matching.
///
/// Uses the Unicode default lowercase mapping, which does not depend on the
/// process locale, so results are the same on every machine.
pub fn fold(s: &str) -> String {
    s.to_lowercase()
}

/// Whether `haystack` contains `needle`, where `needle` is already folded.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    fold(haystack).contains(needle)
}

/// Keeps postings where the query occurs, ignoring case, in the title, the
/// employer name, or any skill tag.
pub struct SearchQueryPredicate {
    /// Folded once at compile time
    needle: String,
}

impl SearchQueryPredicate {
    pub fn new(query: &str) -> Self {
        Self { needle: fold(query) }
    }
}

impl Predicate for SearchQueryPredicate {
    fn name(&self) -> &str {
        "SearchQueryPredicate"
    }

    fn matches(&self, record: &InternshipRecord) -> bool {
        contains_folded(&record.title, &self.needle)
            || contains_folded(&record.company.name, &self.needle)
            || record
                .skills
                .iter()
                .any(|skill| contains_folded(skill, &self.needle))
    }
}
