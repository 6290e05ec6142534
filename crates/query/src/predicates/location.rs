//! Location predicates: the work-mode facet and the city/country text box.

use crate::filter_spec::LocationType;
use crate::predicate::Predicate;
use crate::predicates::text::{contains_folded, fold};
use catalog::{InternshipRecord, Location};

/// Keeps postings whose work mode equals the selected one.
///
/// Never built for `LocationType::Any`; the compiler skips inactive facets.
pub struct LocationTypePredicate {
    location_type: LocationType,
}

impl LocationTypePredicate {
    pub fn new(location_type: LocationType) -> Self {
        Self { location_type }
    }
}

impl Predicate for LocationTypePredicate {
    fn name(&self) -> &str {
        "LocationTypePredicate"
    }

    fn matches(&self, record: &InternshipRecord) -> bool {
        match (self.location_type, &record.location) {
            (LocationType::Any, _) => true,
            (LocationType::Remote, Location::Remote) => true,
            (LocationType::Hybrid, Location::Hybrid { .. }) => true,
            (LocationType::Onsite, Location::Onsite { .. }) => true,
            _ => false,
        }
    }
}

/// Keeps postings whose city or country contains the query, ignoring case.
///
/// Remote postings have neither field and never match; neither does a
/// hybrid/onsite posting missing both.
pub struct LocationQueryPredicate {
    needle: String,
}

impl LocationQueryPredicate {
    pub fn new(query: &str) -> Self {
        Self { needle: fold(query) }
    }
}

impl Predicate for LocationQueryPredicate {
    fn name(&self) -> &str {
        "LocationQueryPredicate"
    }

    fn matches(&self, record: &InternshipRecord) -> bool {
        let location = &record.location;
        location
            .city()
            .is_some_and(|city| contains_folded(city, &self.needle))
            || location
                .country()
                .is_some_and(|country| contains_folded(country, &self.needle))
    }
}
