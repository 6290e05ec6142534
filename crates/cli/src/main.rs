use anyhow::{anyhow, Context, Result};
use catalog::{CatalogStore, InternshipRecord, Location, StipendPeriod};
use clap::{Parser, Subcommand};
use colored::Colorize;
use query::{
    decorate_for_user, DecoratedRecord, FilterState, InMemoryMarkerStore, MarkerKind,
    MarkerStore, QueryEngine, ALL_DOMAINS, ALL_DURATIONS,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Intern Search - internship catalog search
#[derive(Parser)]
#[command(name = "intern-search")]
#[command(about = "Search, filter and bookmark internship postings", long_about = None)]
struct Cli {
    /// Catalog JSON file, or a directory of JSON files
    #[arg(short, long, default_value = "data/internships.json")]
    catalog: PathBuf,

    /// Saved/applied marker file
    #[arg(short, long, default_value = "data/markers.json")]
    markers: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search postings
    Search {
        /// Free text matched against title, company and skills
        #[arg(short, long, default_value = "")]
        query: String,

        #[arg(long, default_value = ALL_DOMAINS)]
        domain: String,

        /// any, remote, hybrid or onsite
        #[arg(long, default_value = "any")]
        location_type: String,

        /// City or country text
        #[arg(long, default_value = "")]
        location: String,

        #[arg(long, default_value = ALL_DURATIONS)]
        duration: String,

        /// recent, stipend or deadline
        #[arg(long, default_value = "recent")]
        sort: String,

        /// Show saved/applied markers for this user
        #[arg(long)]
        user: Option<String>,

        /// Maximum number of results to print
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Show one posting in full
    Show {
        #[arg(long)]
        id: String,
    },

    /// Toggle the saved marker on a posting
    Save {
        #[arg(long)]
        user: String,
        #[arg(long)]
        id: String,
    },

    /// Toggle the applied marker on a posting
    Apply {
        #[arg(long)]
        user: String,
        #[arg(long)]
        id: String,
    },

    /// List a user's saved postings
    Saved {
        #[arg(long)]
        user: String,
    },

    /// List a user's applied postings
    Applied {
        #[arg(long)]
        user: String,
    },

    /// List the domains and durations present in the catalog
    Facets,

    /// Listing and application counts
    Stats {
        /// Restrict to one employer
        #[arg(long)]
        company: Option<String>,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let store = CatalogStore::load(&cli.catalog)
        .with_context(|| format!("Failed to load catalog from {}", cli.catalog.display()))?;
    tracing::debug!("Loaded catalog in {:?}", start.elapsed());

    match cli.command {
        Commands::Search {
            query,
            domain,
            location_type,
            location,
            duration,
            sort,
            user,
            limit,
        } => {
            let state = FilterState {
                search_query: query,
                domain,
                location_type,
                location_query: location,
                duration,
                sort_by: sort,
            };
            handle_search(&store, &cli.markers, &state, user.as_deref(), limit)?
        }
        Commands::Show { id } => handle_show(&store, &id)?,
        Commands::Save { user, id } => {
            handle_toggle(&store, &cli.markers, &user, &id, MarkerKind::Saved)?
        }
        Commands::Apply { user, id } => {
            handle_toggle(&store, &cli.markers, &user, &id, MarkerKind::Applied)?
        }
        Commands::Saved { user } => handle_marked(&store, &cli.markers, &user, MarkerKind::Saved)?,
        Commands::Applied { user } => {
            handle_marked(&store, &cli.markers, &user, MarkerKind::Applied)?
        }
        Commands::Facets => handle_facets(&store),
        Commands::Stats { company } => handle_stats(&store, company.as_deref()),
    }

    Ok(())
}

/// Handle the 'search' command
fn handle_search(
    store: &CatalogStore,
    markers_path: &Path,
    state: &FilterState,
    user: Option<&str>,
    limit: usize,
) -> Result<()> {
    let execution = QueryEngine::new(store).execute_state(state);

    // Invalid facets fall back to their defaults; tell the user which
    for error in &execution.errors {
        println!("{} {} (using default)", "warning:".yellow().bold(), error);
    }

    let markers = match user {
        Some(_) => load_markers(markers_path)?,
        None => InMemoryMarkerStore::new(),
    };
    let decorated = decorate_for_user(&execution.results, &markers, user.unwrap_or_default());

    let active = execution.spec.active_facet_count();
    println!(
        "{}",
        format!(
            "{} internships found ({} active filters, sorted by {})",
            execution.results.len(),
            active,
            execution.spec.sort_by()
        )
        .bold()
        .blue()
    );
    for (rank, entry) in decorated.iter().take(limit).enumerate() {
        print_result(rank + 1, entry, user.is_some());
    }
    if decorated.len() > limit {
        println!("... and {} more", decorated.len() - limit);
    }
    Ok(())
}

/// Handle the 'show' command
fn handle_show(store: &CatalogStore, id: &str) -> Result<()> {
    let posting = store
        .get(id)
        .ok_or_else(|| anyhow!("Internship {} not found", id))?;

    println!("{}", posting.title.bold().blue());
    println!("{}Company: {} ({})", "• ".green(), posting.company.name, posting.company.industry);
    println!("{}Domain: {}", "• ".green(), posting.domain);
    println!("{}Location: {}", "• ".green(), describe_location(&posting.location));
    println!("{}Duration: {}", "• ".green(), posting.duration);
    println!("{}Stipend: {}", "• ".green(), describe_stipend(posting));
    println!(
        "{}Apply by: {}",
        "• ".cyan(),
        posting.application_deadline.format("%Y-%m-%d")
    );
    println!("{}Starts: {}", "• ".cyan(), posting.start_date.format("%Y-%m-%d"));
    println!("{}Applications: {}", "• ".cyan(), posting.applications_count);
    if !posting.is_active {
        println!("{}", "This posting is closed.".red());
    }
    if !posting.skills.is_empty() {
        println!("Skills: {}", posting.skills.join(", "));
    }
    if !posting.description.is_empty() {
        println!("\n{}", posting.description);
    }
    if !posting.requirements.is_empty() {
        println!("Requirements:");
        for requirement in &posting.requirements {
            println!("  - {}", requirement);
        }
    }
    Ok(())
}

/// Handle the 'save' and 'apply' commands
fn handle_toggle(
    store: &CatalogStore,
    markers_path: &Path,
    user: &str,
    id: &str,
    kind: MarkerKind,
) -> Result<()> {
    let posting = store
        .get(id)
        .ok_or_else(|| anyhow!("Internship {} not found", id))?;

    let mut markers = load_markers(markers_path)?;
    let marked = markers.toggle(user, kind, id);
    save_markers(markers_path, &markers)?;

    let verb = match (kind, marked) {
        (MarkerKind::Saved, true) => "Saved",
        (MarkerKind::Saved, false) => "Unsaved",
        (MarkerKind::Applied, true) => "Marked as applied",
        (MarkerKind::Applied, false) => "Unmarked as applied",
    };
    println!("{} {}: {}", "✓".green(), verb, posting.title);
    Ok(())
}

/// Handle the 'saved' and 'applied' commands
fn handle_marked(
    store: &CatalogStore,
    markers_path: &Path,
    user: &str,
    kind: MarkerKind,
) -> Result<()> {
    let markers = load_markers(markers_path)?;
    let ids = markers.ids_for_user(user, kind);

    let label = match kind {
        MarkerKind::Saved => "saved",
        MarkerKind::Applied => "applied to",
    };
    println!(
        "{}",
        format!("You have {} {} internships.", label, ids.len()).bold().blue()
    );
    for id in &ids {
        match store.get(id) {
            Some(posting) => println!("  - {} ({})", posting.title, posting.company.name),
            // Marker outlived the posting
            None => println!("  - {} {}", id, "(no longer listed)".dimmed()),
        }
    }
    Ok(())
}

/// Handle the 'facets' command
fn handle_facets(store: &CatalogStore) {
    println!("{}", "Domains:".bold().blue());
    for domain in store.domains() {
        println!("  - {}", domain);
    }
    println!("{}", "Durations:".bold().blue());
    for duration in store.durations() {
        println!("  - {}", duration);
    }
}

/// Handle the 'stats' command
fn handle_stats(store: &CatalogStore, company: Option<&str>) {
    let counts = match company {
        Some(company_id) => store.company_counts(company_id),
        None => store.counts(),
    };
    let scope = company.unwrap_or("all companies");
    println!("{}", format!("Listings for {}:", scope).bold().blue());
    println!("{}Total listings: {}", "• ".green(), counts.total);
    println!("{}Active listings: {}", "• ".green(), counts.active);
    println!("{}Applications received: {}", "• ".cyan(), counts.applications);
}

/// Read the marker file; a missing file is an empty store
fn load_markers(path: &Path) -> Result<InMemoryMarkerStore> {
    if !path.exists() {
        return Ok(InMemoryMarkerStore::new());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read marker file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Malformed marker file {}", path.display()))
}

fn save_markers(path: &Path, markers: &InMemoryMarkerStore) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(markers)?;
    fs::write(path, json).with_context(|| format!("Failed to write marker file {}", path.display()))
}

fn describe_location(location: &Location) -> String {
    let place = [location.city(), location.country()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ");
    if place.is_empty() {
        location.kind().to_string()
    } else {
        format!("{} ({})", place, location.kind())
    }
}

fn describe_stipend(posting: &InternshipRecord) -> String {
    match &posting.stipend {
        Some(stipend) => {
            let period = match stipend.period {
                StipendPeriod::Monthly => "/month",
                StipendPeriod::Total => " total",
            };
            format!("{}{}{}", stipend.currency, stipend.amount, period)
        }
        None => "Unpaid / not specified".to_string(),
    }
}

/// Print one search result line
fn print_result(rank: usize, entry: &DecoratedRecord<'_>, show_markers: bool) {
    let posting = entry.record;
    let mut badges = String::new();
    if show_markers && entry.is_saved {
        badges.push_str(" [saved]");
    }
    if show_markers && entry.is_applied {
        badges.push_str(" [applied]");
    }
    println!(
        "{}. {} - {} [{}] {} | {} | deadline {}{}",
        rank.to_string().green(),
        posting.title.bold(),
        posting.company.name,
        posting.domain,
        describe_location(&posting.location),
        describe_stipend(posting),
        posting.application_deadline.format("%Y-%m-%d"),
        badges.yellow()
    );
    println!("   id: {}", posting.id.dimmed());
}
