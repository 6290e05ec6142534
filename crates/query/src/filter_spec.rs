//! The filter specification: an immutable description of one search.
//!
//! Every edit produces a new `FilterSpecification`; nothing mutates a
//! specification in place. `FilterState` is the loosely-typed form held by
//! the presentation layer (plain strings, straight from form controls) and
//! is validated into a specification at this boundary.

use crate::error::{Result, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Domain picker value meaning "no domain filter"
pub const ALL_DOMAINS: &str = "All Domains";

/// Duration picker value meaning "no duration filter"
pub const ALL_DURATIONS: &str = "All Durations";

/// An open-enum facet: either unrestricted, or restricted to one value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Facet {
    #[default]
    Any,
    Only(String),
}

impl Facet {
    /// Interpret a picker value, where `sentinel` means "no filter"
    pub fn from_value(value: &str, sentinel: &str) -> Self {
        if value == sentinel {
            Facet::Any
        } else {
            Facet::Only(value.to_string())
        }
    }

    /// Back to the picker value
    pub fn to_value(&self, sentinel: &str) -> String {
        match self {
            Facet::Any => sentinel.to_string(),
            Facet::Only(value) => value.clone(),
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Facet::Any)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LocationType {
    #[default]
    Any,
    Remote,
    Hybrid,
    Onsite,
}

impl LocationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationType::Any => "any",
            LocationType::Remote => "remote",
            LocationType::Hybrid => "hybrid",
            LocationType::Onsite => "onsite",
        }
    }
}

impl FromStr for LocationType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "any" => Ok(LocationType::Any),
            "remote" => Ok(LocationType::Remote),
            "hybrid" => Ok(LocationType::Hybrid),
            "onsite" => Ok(LocationType::Onsite),
            _ => Err(ValidationError::UnknownLocationType(s.to_string())),
        }
    }
}

impl fmt::Display for LocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Newest postings first
    #[default]
    Recent,
    /// Highest stipend first, unpaid last
    Stipend,
    /// Soonest application deadline first
    Deadline,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Recent => "recent",
            SortOrder::Stipend => "stipend",
            SortOrder::Deadline => "deadline",
        }
    }
}

impl FromStr for SortOrder {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "recent" => Ok(SortOrder::Recent),
            "stipend" => Ok(SortOrder::Stipend),
            "deadline" => Ok(SortOrder::Deadline),
            _ => Err(ValidationError::UnknownSortOrder(s.to_string())),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter state as the presentation layer holds it.
///
/// Field names and sentinel values match the search page's JSON, so a saved
/// or URL-encoded state can be deserialized directly. Missing fields take
/// their "no filter" defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    pub search_query: String,
    pub domain: String,
    pub location_type: String,
    pub location_query: String,
    pub duration: String,
    pub sort_by: String,
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState::from(&FilterSpecification::default())
    }
}

/// One validated search: five filter facets plus an ordering.
///
/// Two specifications are equal iff all six fields are equal; text fields
/// compare exactly, before any case folding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterSpecification {
    search_query: String,
    domain: Facet,
    location_type: LocationType,
    location_query: String,
    duration: Facet,
    sort_by: SortOrder,
}

impl FilterSpecification {
    pub fn new(
        search_query: impl Into<String>,
        domain: Facet,
        location_type: LocationType,
        location_query: impl Into<String>,
        duration: Facet,
        sort_by: SortOrder,
    ) -> Self {
        Self {
            search_query: search_query.into(),
            domain,
            location_type,
            location_query: location_query.into(),
            duration,
            sort_by,
        }
    }

    /// Validate a presentation-layer state without recovering.
    ///
    /// Returns the first invalid facet found.
    pub fn from_state(state: &FilterState) -> Result<Self> {
        let location_type = state.location_type.parse()?;
        let sort_by = state.sort_by.parse()?;
        Ok(Self::from_parts(state, location_type, sort_by))
    }

    /// Validate a presentation-layer state, resetting every unrecognized
    /// facet to its default.
    ///
    /// The returned errors tell the caller which facets were reset.
    pub fn from_state_lenient(state: &FilterState) -> (Self, Vec<ValidationError>) {
        let mut errors = Vec::new();

        let location_type = state.location_type.parse().unwrap_or_else(|e| {
            errors.push(e);
            LocationType::default()
        });
        let sort_by = state.sort_by.parse().unwrap_or_else(|e| {
            errors.push(e);
            SortOrder::default()
        });

        (Self::from_parts(state, location_type, sort_by), errors)
    }

    fn from_parts(state: &FilterState, location_type: LocationType, sort_by: SortOrder) -> Self {
        Self {
            search_query: state.search_query.clone(),
            domain: Facet::from_value(&state.domain, ALL_DOMAINS),
            location_type,
            location_query: state.location_query.clone(),
            duration: Facet::from_value(&state.duration, ALL_DURATIONS),
            sort_by,
        }
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn domain(&self) -> &Facet {
        &self.domain
    }

    pub fn location_type(&self) -> LocationType {
        self.location_type
    }

    pub fn location_query(&self) -> &str {
        &self.location_query
    }

    pub fn duration(&self) -> &Facet {
        &self.duration
    }

    pub fn sort_by(&self) -> SortOrder {
        self.sort_by
    }

    pub fn with_search_query(self, search_query: impl Into<String>) -> Self {
        Self {
            search_query: search_query.into(),
            ..self
        }
    }

    pub fn with_domain(self, domain: Facet) -> Self {
        Self { domain, ..self }
    }

    pub fn with_location_type(self, location_type: LocationType) -> Self {
        Self {
            location_type,
            ..self
        }
    }

    pub fn with_location_query(self, location_query: impl Into<String>) -> Self {
        Self {
            location_query: location_query.into(),
            ..self
        }
    }

    pub fn with_duration(self, duration: Facet) -> Self {
        Self { duration, ..self }
    }

    pub fn with_sort_by(self, sort_by: SortOrder) -> Self {
        Self { sort_by, ..self }
    }

    /// Clear the domain, location and duration facets, keeping the
    /// free-text query and the ordering.
    pub fn reset_facets(self) -> Self {
        Self {
            search_query: self.search_query,
            sort_by: self.sort_by,
            ..Self::default()
        }
    }

    /// Number of non-default facets among domain, location type, location
    /// text and duration. The free-text query is not counted.
    pub fn active_facet_count(&self) -> usize {
        [
            !self.domain.is_any(),
            self.location_type != LocationType::Any,
            !self.location_query.is_empty(),
            !self.duration.is_any(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }
}

impl TryFrom<FilterState> for FilterSpecification {
    type Error = ValidationError;

    fn try_from(state: FilterState) -> Result<Self> {
        Self::from_state(&state)
    }
}

impl From<&FilterSpecification> for FilterState {
    fn from(spec: &FilterSpecification) -> Self {
        Self {
            search_query: spec.search_query.clone(),
            domain: spec.domain.to_value(ALL_DOMAINS),
            location_type: spec.location_type.as_str().to_string(),
            location_query: spec.location_query.clone(),
            duration: spec.duration.to_value(ALL_DURATIONS),
            sort_by: spec.sort_by.as_str().to_string(),
        }
    }
}
