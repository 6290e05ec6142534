//! # Catalog Crate
//!
//! This crate holds the internship data model and the in-memory catalog that
//! the query engine searches.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (InternshipRecord, Company, Location, Stipend)
//! - **parser**: Parse JSON catalog documents into Rust structs
//! - **store**: CatalogStore, the validated snapshot of all postings
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::CatalogStore;
//! use std::path::Path;
//!
//! let store = CatalogStore::load(Path::new("data/internships.json"))?;
//! let posting = store.get("internship-1").unwrap();
//!
//! println!("{} at {}", posting.title, posting.company.name);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod store;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use store::{CatalogCounts, CatalogStore};
pub use types::{
    // Type aliases
    CompanyId,
    InternshipId,
    UserId,
    // Core types
    Company,
    InternshipRecord,
    Location,
    Stipend,
    StipendPeriod,
};
