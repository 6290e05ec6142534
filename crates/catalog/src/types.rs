//! Core domain types for the internship catalog.
//!
//! These mirror the JSON documents served by the listings API, so every
//! struct derives serde with camelCase field names. Optional fields are
//! `Option<T>` rather than defaults: an absent stipend is "no stipend", not
//! a zero-amount stipend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a posting (e.g. "internship-12")
pub type InternshipId = String;

/// Identifier handed out by the identity provider
pub type UserId = String;

/// Identifier of the employer that owns a posting
pub type CompanyId = String;

// =============================================================================
// Posting Types
// =============================================================================

/// Employer reference embedded in every posting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default)]
    pub industry: String,
}

/// Where the internship takes place.
///
/// `hybrid` and `onsite` postings should carry both a city and a country,
/// but the API does not guarantee it, so both stay optional. A posting with
/// neither simply never matches a location search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Location {
    Remote,
    Hybrid {
        #[serde(default)]
        city: Option<String>,
        #[serde(default)]
        country: Option<String>,
    },
    Onsite {
        #[serde(default)]
        city: Option<String>,
        #[serde(default)]
        country: Option<String>,
    },
}

impl Location {
    /// The lowercase tag used on the wire and by the location-type facet
    pub fn kind(&self) -> &'static str {
        match self {
            Location::Remote => "remote",
            Location::Hybrid { .. } => "hybrid",
            Location::Onsite { .. } => "onsite",
        }
    }

    pub fn city(&self) -> Option<&str> {
        match self {
            Location::Remote => None,
            Location::Hybrid { city, .. } | Location::Onsite { city, .. } => city.as_deref(),
        }
    }

    pub fn country(&self) -> Option<&str> {
        match self {
            Location::Remote => None,
            Location::Hybrid { country, .. } | Location::Onsite { country, .. } => {
                country.as_deref()
            }
        }
    }
}

/// How often a stipend is paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StipendPeriod {
    Monthly,
    Total,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stipend {
    /// Non-negative; enforced when the catalog is loaded
    pub amount: f64,
    /// Display symbol or code, compared nowhere
    pub currency: String,
    pub period: StipendPeriod,
}

/// A single internship posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternshipRecord {
    pub id: InternshipId,
    pub title: String,
    pub company: Company,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    /// Skill tags in authored order
    #[serde(default)]
    pub skills: Vec<String>,
    /// Open set of category names ("Data Science", "Design", ...)
    pub domain: String,
    pub location: Location,
    /// Open set of buckets ("1-2 months", ..., "Full-time")
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stipend: Option<Stipend>,
    pub application_deadline: DateTime<Utc>,
    pub start_date: DateTime<Utc>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub applications_count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

impl InternshipRecord {
    /// Stipend amount used for ordering; absent counts as zero
    pub fn stipend_amount(&self) -> f64 {
        self.stipend.as_ref().map(|s| s.amount).unwrap_or(0.0)
    }
}
