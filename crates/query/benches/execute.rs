//! Benchmarks for query execution
//!
//! Run with: cargo bench --package query
//!
//! Builds a synthetic catalog shaped like the search page's mock data and
//! measures full filter + sort passes over it.

use catalog::{Company, InternshipRecord, Location, Stipend, StipendPeriod};
use chrono::{Duration, TimeZone, Utc};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use query::{Facet, FilterSpecification, LocationType, SortOrder, execute};

const DOMAINS: [&str; 6] = [
    "Software Development",
    "Data Science",
    "Design",
    "Marketing",
    "Finance",
    "Research",
];
const DURATIONS: [&str; 4] = ["1-2 months", "3-4 months", "6+ months", "Full-time"];
const SKILLS: [&str; 6] = ["React", "Python", "SQL", "Figma", "Go", "Excel"];

fn synthetic_catalog(size: usize) -> Vec<InternshipRecord> {
    let base = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
    (0..size)
        .map(|i| {
            let domain = DOMAINS[i % DOMAINS.len()];
            let location = match i % 4 {
                0 => Location::Remote,
                1 => Location::Hybrid {
                    city: Some("Mumbai".to_string()),
                    country: Some("India".to_string()),
                },
                2 => Location::Onsite {
                    city: Some("Bangalore".to_string()),
                    country: Some("India".to_string()),
                },
                _ => Location::Onsite {
                    city: Some("Austin".to_string()),
                    country: Some("USA".to_string()),
                },
            };
            InternshipRecord {
                id: format!("internship-{}", i + 1),
                title: format!("{domain} Intern"),
                company: Company {
                    id: format!("company-{}", i % 18 + 1),
                    name: format!("Company {}", i % 18 + 1),
                    logo: None,
                    industry: domain.to_string(),
                },
                description: String::new(),
                requirements: vec![],
                skills: vec![
                    SKILLS[i % SKILLS.len()].to_string(),
                    SKILLS[(i + 1) % SKILLS.len()].to_string(),
                ],
                domain: domain.to_string(),
                location,
                duration: DURATIONS[i % DURATIONS.len()].to_string(),
                stipend: (i % 5 != 0).then(|| Stipend {
                    amount: 500.0 + (i % 300) as f64 * 5.0,
                    currency: "$".to_string(),
                    period: StipendPeriod::Monthly,
                }),
                application_deadline: base + Duration::days((i % 60) as i64),
                start_date: base + Duration::days((i % 60) as i64 + 15),
                is_active: true,
                applications_count: (i % 150) as u32,
                created_at: base - Duration::hours(i as i64),
                updated_at: base,
            }
        })
        .collect()
}

fn bench_default_spec(c: &mut Criterion) {
    let catalog = synthetic_catalog(5_000);
    let spec = FilterSpecification::default();

    c.bench_function("execute_default_5000", |b| {
        b.iter(|| {
            let results = execute(black_box(&catalog), black_box(&spec));
            black_box(results.len())
        })
    });
}

fn bench_text_query(c: &mut Criterion) {
    let catalog = synthetic_catalog(5_000);
    let spec = FilterSpecification::default()
        .with_search_query("pyth")
        .with_sort_by(SortOrder::Stipend);

    c.bench_function("execute_text_query_5000", |b| {
        b.iter(|| {
            let results = execute(black_box(&catalog), black_box(&spec));
            black_box(results.len())
        })
    });
}

fn bench_all_facets(c: &mut Criterion) {
    let catalog = synthetic_catalog(5_000);
    let spec = FilterSpecification::new(
        "react",
        Facet::Only("Software Development".to_string()),
        LocationType::Onsite,
        "india",
        Facet::Any,
        SortOrder::Deadline,
    );

    c.bench_function("execute_all_facets_5000", |b| {
        b.iter(|| {
            let results = execute(black_box(&catalog), black_box(&spec));
            black_box(results.len())
        })
    });
}

criterion_group!(benches, bench_default_spec, bench_text_query, bench_all_facets);
criterion_main!(benches);
