//! Parser for catalog documents.
//!
//! A catalog document is a JSON array of postings, in the same shape the
//! listings API returns from `GET /api/internships`.

use crate::error::{CatalogError, Result};
use crate::types::InternshipRecord;
use std::fs;
use std::path::Path;

/// Parse a catalog from an in-memory JSON string.
///
/// `source` names the document in error messages.
pub fn parse_catalog_str(source: &str, json: &str) -> Result<Vec<InternshipRecord>> {
    serde_json::from_str(json).map_err(|e| CatalogError::Parse {
        file: source.to_string(),
        line: e.line(),
        column: e.column(),
        reason: e.to_string(),
    })
}

/// Parse a catalog file
pub fn parse_catalog_file(path: &Path) -> Result<Vec<InternshipRecord>> {
    if !path.exists() {
        return Err(CatalogError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let content = fs::read_to_string(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    parse_catalog_str(&name, &content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Location, StipendPeriod};

    const ONE_POSTING: &str = r#"[
      {
        "id": "1",
        "title": "Frontend Developer Intern",
        "company": {
          "id": "c1",
          "name": "TechCorp Inc.",
          "logo": "/logo.png",
          "industry": "Software"
        },
        "description": "Work with our team on a real product.",
        "requirements": ["Eagerness to learn"],
        "skills": ["React", "TypeScript"],
        "domain": "Software Development",
        "location": { "type": "remote" },
        "duration": "3-4 months",
        "stipend": { "amount": 2500, "currency": "$", "period": "monthly" },
        "applicationDeadline": "2025-12-31T23:59:59Z",
        "startDate": "2026-01-15T00:00:00Z",
        "isActive": true,
        "applicationsCount": 42,
        "createdAt": "2025-06-10T12:00:00Z",
        "updatedAt": "2025-06-10T12:00:00Z"
      }
    ]"#;

    #[test]
    fn test_parse_catalog_str() {
        let records = parse_catalog_str("inline", ONE_POSTING).unwrap();
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.id, "1");
        assert_eq!(record.company.name, "TechCorp Inc.");
        assert_eq!(record.location, Location::Remote);
        assert_eq!(record.skills, vec!["React", "TypeScript"]);

        let stipend = record.stipend.as_ref().unwrap();
        assert_eq!(stipend.amount, 2500.0);
        assert_eq!(stipend.period, StipendPeriod::Monthly);
        assert_eq!(record.applications_count, 42);
    }

    #[test]
    fn test_parse_optional_fields_absent() {
        let json = r#"[{
            "id": "2",
            "title": "Design Intern",
            "company": { "id": "c2", "name": "DesignStudio Pro" },
            "domain": "Design",
            "location": { "type": "onsite", "city": "Austin", "country": "USA" },
            "duration": "Full-time",
            "applicationDeadline": "2025-11-01T00:00:00Z",
            "startDate": "2025-12-01T00:00:00Z",
            "createdAt": "2025-06-01T00:00:00Z",
            "updatedAt": "2025-06-01T00:00:00Z"
        }]"#;

        let records = parse_catalog_str("inline", json).unwrap();
        let record = &records[0];
        assert!(record.stipend.is_none());
        assert!(record.company.logo.is_none());
        assert!(record.skills.is_empty());
        assert!(record.is_active);
        assert_eq!(record.applications_count, 0);
    }

    #[test]
    fn test_parse_error_reports_position() {
        let err = parse_catalog_str("broken.json", "[\n  { \"id\": 1 ").unwrap_err();
        match err {
            CatalogError::Parse { file, line, .. } => {
                assert_eq!(file, "broken.json");
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = parse_catalog_file(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, CatalogError::FileNotFound { .. }));
    }
}
