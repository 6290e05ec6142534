//! Result ordering for each `SortOrder`.
//!
//! All orderings use a stable sort: postings with equal keys keep their
//! catalog order, which makes repeated queries over the same snapshot
//! return identical sequences.

use crate::filter_spec::SortOrder;
use catalog::InternshipRecord;
use std::cmp::Ordering;

impl SortOrder {
    /// Compare two postings under this ordering.
    pub fn compare(&self, a: &InternshipRecord, b: &InternshipRecord) -> Ordering {
        match self {
            SortOrder::Recent => b.created_at.cmp(&a.created_at),
            // Amounts are finite (checked at ingestion); absent counts as 0,
            // and -0.0 ties with 0.0
            SortOrder::Stipend => b
                .stipend_amount()
                .partial_cmp(&a.stipend_amount())
                .unwrap_or(Ordering::Equal),
            SortOrder::Deadline => a.application_deadline.cmp(&b.application_deadline),
        }
    }

    /// Sort borrowed postings in place.
    pub fn sort(&self, records: &mut [&InternshipRecord]) {
        // slice::sort_by is stable
        records.sort_by(|a, b| self.compare(a, b));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicates::fixtures::record;
    use catalog::{Location, Stipend, StipendPeriod};
    use chrono::{Duration, TimeZone, Utc};

    fn ids<'a>(records: &[&'a InternshipRecord]) -> Vec<&'a str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    fn with_stipend(mut r: InternshipRecord, amount: Option<f64>) -> InternshipRecord {
        r.stipend = amount.map(|amount| Stipend {
            amount,
            currency: "$".to_string(),
            period: StipendPeriod::Monthly,
        });
        r
    }

    #[test]
    fn test_recent_newest_first_stable() {
        let base = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let mut a = record("a", "A", "Design", Location::Remote);
        let mut b = record("b", "B", "Design", Location::Remote);
        let mut c = record("c", "C", "Design", Location::Remote);
        a.created_at = base;
        b.created_at = base + Duration::days(2);
        c.created_at = base;

        let mut refs = vec![&a, &b, &c];
        SortOrder::Recent.sort(&mut refs);
        assert_eq!(ids(&refs), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_stipend_absent_is_zero_and_last() {
        let a = with_stipend(record("a", "A", "Design", Location::Remote), None);
        let b = with_stipend(record("b", "B", "Design", Location::Remote), Some(2000.0));
        let c = with_stipend(record("c", "C", "Design", Location::Remote), Some(0.0));
        let d = with_stipend(record("d", "D", "Design", Location::Remote), None);

        let mut refs = vec![&a, &b, &c, &d];
        SortOrder::Stipend.sort(&mut refs);
        // a, c, d all count as 0 and keep input order
        assert_eq!(ids(&refs), vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn test_stipend_negative_zero_ties_with_absent() {
        let a = with_stipend(record("a", "A", "Design", Location::Remote), Some(-0.0));
        let b = with_stipend(record("b", "B", "Design", Location::Remote), None);
        let c = with_stipend(record("c", "C", "Design", Location::Remote), Some(0.0));

        let mut refs = vec![&b, &a, &c];
        SortOrder::Stipend.sort(&mut refs);
        assert_eq!(ids(&refs), vec!["b", "a", "c"]);

        let mut refs = vec![&a, &b, &c];
        SortOrder::Stipend.sort(&mut refs);
        assert_eq!(ids(&refs), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_deadline_soonest_first() {
        let base = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let mut a = record("a", "A", "Design", Location::Remote);
        let mut b = record("b", "B", "Design", Location::Remote);
        let mut c = record("c", "C", "Design", Location::Remote);
        a.application_deadline = base + Duration::days(10);
        b.application_deadline = base + Duration::days(1);
        c.application_deadline = base + Duration::days(10);

        let mut refs = vec![&a, &b, &c];
        SortOrder::Deadline.sort(&mut refs);
        assert_eq!(ids(&refs), vec!["b", "a", "c"]);
    }
}
