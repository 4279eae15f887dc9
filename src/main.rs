use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use place_country::normalize::fold;
use place_country::scanner::read_place_lines;
use place_country::{Catalog, CountryMatcher, MatcherConfig};

const OUTPUT_DIR: &str = "output";

#[derive(Parser)]
#[command(
    name = "place-country",
    about = "Resolve genealogical place names to ISO-3166 countries"
)]
struct Cli {
    /// JSON overlay merged into the embedded catalog
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Runner-up candidates to report for fuzzy matches
    #[arg(long, global = true, default_value_t = 3)]
    alternatives: usize,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve one place string and print the match as JSON
    Resolve {
        /// Place text, e.g. "Paris, France"
        place: Vec<String>,
        /// Event year, enables defunct-state matching
        #[arg(long)]
        year: Option<i32>,
    },
    /// Resolve every line of the place lists under a path → output/*.json
    Batch {
        /// A .tsv/.txt file or a directory of them
        path: PathBuf,
        #[arg(long, default_value = OUTPUT_DIR)]
        output: PathBuf,
    },
    /// List catalog records as JSON
    Catalog {
        /// Only records with a name, alias or region containing this text
        #[arg(long, conflicts_with = "code")]
        query: Option<String>,
        /// Only the current-state record with this ISO2 code
        #[arg(long)]
        code: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let catalog = load_catalog(cli.catalog.as_deref())?;
    let config = MatcherConfig {
        max_alternatives: cli.alternatives,
    };
    let matcher = CountryMatcher::with_config(Arc::new(catalog), config);

    match cli.command {
        Command::Resolve { place, year } => run_resolve(&matcher, &place.join(" "), year),
        Command::Batch { path, output } => run_batch(&matcher, &path, &output),
        Command::Catalog { query, code } => {
            run_catalog(matcher.catalog(), query.as_deref(), code.as_deref())
        }
    }
}

fn load_catalog(overlay: Option<&Path>) -> Result<Catalog> {
    let builtin = Catalog::builtin();
    match overlay {
        Some(path) => builtin
            .with_overlay_file(path)
            .with_context(|| format!("loading catalog overlay {}", path.display())),
        None => Ok(builtin),
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  OUTPUT FILE HELPERS
// ═══════════════════════════════════════════════════════════════════════

fn write_json<T: serde::Serialize>(dir: &Path, name: &str, data: &T) -> Result<()> {
    let path = dir.join(name);
    let json = serde_json::to_string_pretty(data)?;
    std::fs::write(&path, &json).with_context(|| format!("cannot write {}", path.display()))?;
    eprintln!("  {} ({} bytes)", path.display(), json.len());
    Ok(())
}

fn print_json<T: serde::Serialize>(data: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════
//  RESOLVE MODE
// ═══════════════════════════════════════════════════════════════════════

fn run_resolve(matcher: &CountryMatcher, place: &str, year: Option<i32>) -> Result<()> {
    let result = matcher.match_country(place, year);
    print_json(&result)
}

// ═══════════════════════════════════════════════════════════════════════
//  BATCH MODE: resolve place lists, write places + statistics
// ═══════════════════════════════════════════════════════════════════════

fn run_batch(matcher: &CountryMatcher, path: &Path, output: &Path) -> Result<()> {
    let lines = read_place_lines(path);
    info!(places = lines.len(), "resolving place lists");

    let places: Vec<_> = lines
        .iter()
        .map(|l| {
            matcher.process_place(
                &l.place,
                l.year,
                l.individual_id.as_deref(),
                l.event_type.as_deref(),
            )
        })
        .collect();

    std::fs::create_dir_all(output)
        .with_context(|| format!("cannot create {}", output.display()))?;
    let stats = matcher.statistics();
    write_json(output, "places.json", &places)?;
    write_json(output, "statistics.json", &stats)?;

    let pct = |n: usize| {
        if stats.total_locations == 0 {
            0.0
        } else {
            100.0 * n as f64 / stats.total_locations as f64
        }
    };
    eprintln!("\nResolved {} place(s):", stats.total_locations);
    eprintln!("  high   {:>6} ({:.1}%)", stats.matched.high, pct(stats.matched.high));
    eprintln!("  medium {:>6} ({:.1}%)", stats.matched.medium, pct(stats.matched.medium));
    eprintln!("  low    {:>6} ({:.1}%)", stats.matched.low, pct(stats.matched.low));
    eprintln!("  unresolved {:>2} ({:.1}%)", stats.unresolved.len(), pct(stats.unresolved.len()));
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════
//  CATALOG MODE
// ═══════════════════════════════════════════════════════════════════════

fn run_catalog(catalog: &Catalog, query: Option<&str>, code: Option<&str>) -> Result<()> {
    if let Some(code) = code {
        let record = catalog
            .by_iso2(code.trim())
            .with_context(|| format!("no country with ISO2 code {code:?}"))?;
        return print_json(record);
    }

    let needle = query.map(fold);
    let records: Vec<_> = catalog
        .records()
        .iter()
        .filter(|r| match &needle {
            None => true,
            Some(q) => r
                .names()
                .chain(r.regions.iter().map(String::as_str))
                .chain([r.iso2.as_str(), r.iso3.as_str()])
                .any(|s| fold(s).contains(q.as_str())),
        })
        .collect();
    eprintln!("{} record(s)", records.len());
    print_json(&records)
}
