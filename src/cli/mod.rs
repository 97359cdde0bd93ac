//! Command-line interface for syllabus.
//!
//! Provides commands for browsing and searching the catalog, checking its
//! hygiene, and exporting or verifying snapshots.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use crate::catalog::{self, validate, Allowlist, Catalog};
use crate::config::{self, ResolvedConfig};
use crate::domain::{Difficulty, Topic};
use crate::export::{self, ExportFormat};

/// syllabus - curated catalog of architecture and computer science topics
#[derive(Parser, Debug)]
#[command(name = "syllabus")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List categories
    Categories,

    /// List topics
    List {
        /// Only topics in this category (e.g. architecture/audit)
        #[arg(short, long)]
        category: Option<String>,

        /// Only topics of this difficulty
        #[arg(short, long, value_enum)]
        difficulty: Option<DifficultyArg>,

        /// Only topics with this tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Glob over topic IDs (e.g. "os-*")
        #[arg(short, long = "match")]
        pattern: Option<String>,

        /// Maximum number of topics to show
        #[arg(short, long, default_value = "50")]
        limit: usize,
    },

    /// Show one topic
    Show {
        /// Topic ID
        topic_id: String,

        /// Include code examples
        #[arg(short, long)]
        examples: bool,
    },

    /// Search titles, descriptions, key points and tags
    Search {
        /// Search query
        query: String,
    },

    /// Show the topics a topic links to
    Related {
        /// Topic ID
        topic_id: String,
    },

    /// Summary counts
    Stats {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check the catalog for duplicate IDs, malformed records and broken references
    Validate {
        /// Ignore the soft-reference allowlist
        #[arg(long)]
        strict: bool,
    },

    /// Write a snapshot of the catalog
    Export {
        /// Snapshot format (defaults to config, then json)
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,

        /// Output file (defaults to <exports>/catalog.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Read a snapshot back and check it against the built-in catalog
    Verify {
        /// Snapshot file (.json, .yaml or .yml)
        path: PathBuf,
    },

    /// Show resolved configuration (debug)
    Config,
}

/// Difficulty for CLI (maps to Difficulty)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DifficultyArg {
    Beginner,
    Intermediate,
    Advanced,
}

impl From<DifficultyArg> for Difficulty {
    fn from(d: DifficultyArg) -> Self {
        match d {
            DifficultyArg::Beginner => Difficulty::Beginner,
            DifficultyArg::Intermediate => Difficulty::Intermediate,
            DifficultyArg::Advanced => Difficulty::Advanced,
        }
    }
}

/// Export format for CLI (maps to ExportFormat)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Json,
    Yaml,
}

impl From<FormatArg> for ExportFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Json => ExportFormat::Json,
            FormatArg::Yaml => ExportFormat::Yaml,
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let catalog = catalog::catalog();

        match self.command {
            Commands::Categories => list_categories(catalog),
            Commands::List {
                category,
                difficulty,
                tag,
                pattern,
                limit,
            } => list_topics(catalog, category, difficulty, tag, pattern, limit),
            Commands::Show { topic_id, examples } => show_topic(catalog, &topic_id, examples),
            Commands::Search { query } => search_topics(catalog, &query),
            Commands::Related { topic_id } => show_related(catalog, &topic_id),
            Commands::Stats { json } => show_stats(catalog, json),
            Commands::Validate { strict } => validate_catalog(catalog, strict),
            Commands::Export { format, output } => export_catalog(catalog, format, output).await,
            Commands::Verify { path } => verify_snapshot(catalog, &path).await,
            Commands::Config => show_config(),
        }
    }
}

/// Truncate to a column width on a char boundary
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() > width {
        let head: String = s.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", head)
    } else {
        s.to_string()
    }
}

fn print_topic_table(topics: &[&Topic]) {
    println!("{:<28} {:<13} {:<45}", "ID", "DIFFICULTY", "TITLE");
    println!("{}", "-".repeat(86));

    for topic in topics {
        println!(
            "{:<28} {:<13} {:<45}",
            topic.id.as_str(),
            topic.difficulty.as_str(),
            truncate(&topic.title, 45)
        );
    }
}

/// List categories
fn list_categories(catalog: &Catalog) -> Result<()> {
    println!("{:<36} {:<22} {:>6}", "ID", "TITLE", "TOPICS");
    println!("{}", "-".repeat(66));

    for category in &catalog.categories {
        println!(
            "{:<36} {:<22} {:>6}",
            category.id,
            truncate(&category.title, 22),
            category.len()
        );
    }

    println!("\nTotal: {} categories, {} topics", catalog.categories.len(), catalog.len());
    Ok(())
}

/// List topics with optional filters
fn list_topics(
    catalog: &Catalog,
    category: Option<String>,
    difficulty: Option<DifficultyArg>,
    tag: Option<String>,
    pattern: Option<String>,
    limit: usize,
) -> Result<()> {
    let mut topics: Vec<&Topic> = match category {
        Some(ref id) => catalog
            .category(id)
            .with_context(|| format!("Category not found: {}", id))?
            .topics
            .iter()
            .collect(),
        None => catalog.topics().collect(),
    };

    if let Some(d) = difficulty {
        let d = Difficulty::from(d);
        topics.retain(|t| t.difficulty == d);
    }

    if let Some(ref tag) = tag {
        topics.retain(|t| t.has_tag(tag));
    }

    if let Some(ref pattern) = pattern {
        let pattern = glob::Pattern::new(pattern)
            .with_context(|| format!("Invalid pattern: {}", pattern))?;
        topics.retain(|t| pattern.matches(t.id.as_str()));
    }

    if topics.is_empty() {
        println!("No topics match.");
        return Ok(());
    }

    let total = topics.len();
    topics.truncate(limit);
    print_topic_table(&topics);
    println!("\nShowing {} of {} topics", topics.len(), total);

    Ok(())
}

/// Show one topic in full
fn show_topic(catalog: &Catalog, topic_id: &str, with_examples: bool) -> Result<()> {
    let (category, topic) = catalog
        .get(topic_id)
        .ok_or_else(|| anyhow::anyhow!("Topic not found: {}", topic_id))?;

    println!("{}", "=".repeat(66));
    println!("  {}", topic.title);
    println!("  ID: {}  |  {}  |  {}", topic.id, topic.difficulty, category.id);
    println!("{}", "=".repeat(66));
    println!("\n{}\n", topic.description);

    if !topic.key_points.is_empty() {
        println!("Key points:");
        for point in &topic.key_points {
            println!("  - {}", point);
        }
        println!();
    }

    if !topic.tags.is_empty() {
        println!("Tags: {}", topic.tags.join(", "));
    }
    if !topic.related.is_empty() {
        let related: Vec<&str> = topic.related.iter().map(|r| r.as_str()).collect();
        println!("Related: {}", related.join(", "));
    }
    if let Some(ref fact) = topic.fun_fact {
        println!("\nFun fact: {}", fact);
    }

    if with_examples {
        for example in &topic.examples {
            let lang = example.language.as_deref().unwrap_or("text");
            println!("\n--- {} ({}) ---\n", example.title, lang);
            println!("{}", example.code.trim_end());
        }
    } else if !topic.examples.is_empty() {
        println!("\n{} example(s). Use --examples to show them", topic.examples.len());
    }

    Ok(())
}

/// Search the catalog
fn search_topics(catalog: &Catalog, query: &str) -> Result<()> {
    let results = catalog.search(query);

    if results.is_empty() {
        println!("No results found for: {}", query);
        return Ok(());
    }

    println!("Found {} result(s) for \"{}\":\n", results.len(), query);
    print_topic_table(&results);

    Ok(())
}

/// Show resolved related topics
fn show_related(catalog: &Catalog, topic_id: &str) -> Result<()> {
    let (_, topic) = catalog
        .get(topic_id)
        .ok_or_else(|| anyhow::anyhow!("Topic not found: {}", topic_id))?;

    let related = catalog.related(topic_id);
    let missing = topic.related.len() - related.len();

    if related.is_empty() {
        println!("{} has no related topics in the catalog", topic.id);
    } else {
        print_topic_table(&related);
    }

    if missing > 0 {
        println!("\n({} reference(s) not in the catalog)", missing);
    }

    Ok(())
}

/// Print summary counts
fn show_stats(catalog: &Catalog, json: bool) -> Result<()> {
    let stats = catalog.stats();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Categories: {}", stats.categories);
    println!("Topics:     {}", stats.topics);
    println!("Examples:   {}", stats.examples);
    println!("\nBy difficulty:");
    for (difficulty, count) in &stats.by_difficulty {
        println!("  {:<13} {}", difficulty.as_str(), count);
    }
    println!("\nBy category:");
    for entry in &stats.by_category {
        println!("  {:<36} {}", entry.id, entry.topics);
    }

    Ok(())
}

/// Run hygiene checks; fails on any issue
fn validate_catalog(catalog: &Catalog, strict: bool) -> Result<()> {
    let allowlist = allowlist_for(strict, config::config()?);
    let report = validate(catalog, &allowlist);

    if report.is_clean() {
        println!(
            "Catalog OK: {} categories, {} topics ({} allowlisted reference(s))",
            catalog.categories.len(),
            catalog.len(),
            allowlist.len()
        );
        return Ok(());
    }

    for issue in &report.issues {
        println!("  - {}", issue);
    }

    Err(report.into())
}

/// Soft references allowed to dangle; strict mode from the flag or config allows none
fn allowlist_for(strict: bool, cfg: &ResolvedConfig) -> Allowlist {
    if strict || cfg.validation.strict {
        Allowlist::new()
    } else {
        cfg.allowlist()
    }
}

/// Pick the snapshot format: `--format`, else the output extension, else config
fn export_format_for(
    format: Option<FormatArg>,
    output: Option<&Path>,
    default: ExportFormat,
) -> Result<ExportFormat> {
    match (format, output) {
        (Some(f), _) => Ok(ExportFormat::from(f)),
        (None, Some(path)) => ExportFormat::from_path(path).with_context(|| {
            format!(
                "Cannot infer format from {}; pass --format json|yaml",
                path.display()
            )
        }),
        (None, None) => Ok(default),
    }
}

/// Check whether an imported catalog is the built-in one
fn same_catalog(imported: &Catalog, catalog: &Catalog) -> Result<bool> {
    Ok(export::fingerprint(imported)? == export::fingerprint(catalog)?)
}

/// Write a snapshot
async fn export_catalog(
    catalog: &Catalog,
    format: Option<FormatArg>,
    output: Option<PathBuf>,
) -> Result<()> {
    let cfg = config::config()?;

    let format = export_format_for(format, output.as_deref(), cfg.export_format)?;
    let path = output.unwrap_or_else(|| cfg.export_path(format));

    export::write(catalog, &path, format)
        .await
        .with_context(|| format!("Failed to export catalog to {}", path.display()))?;

    eprintln!("Exported {} topics to {}", catalog.len(), path.display());
    eprintln!("   Fingerprint: {}", export::fingerprint(catalog)?);

    Ok(())
}

/// Read a snapshot back and compare fingerprints
async fn verify_snapshot(catalog: &Catalog, path: &Path) -> Result<()> {
    let imported = export::read(path)
        .await
        .with_context(|| format!("Failed to read snapshot: {}", path.display()))?;

    println!("Snapshot:    {} ({} topics)", export::fingerprint(&imported)?, imported.len());
    println!("Built-in:    {} ({} topics)", export::fingerprint(catalog)?, catalog.len());

    if same_catalog(&imported, catalog)? {
        println!("Snapshot matches the built-in catalog");
    } else {
        println!("Snapshot is intact but differs from the built-in catalog");
    }

    Ok(())
}

/// Show the resolved configuration (for debugging)
fn show_config() -> Result<()> {
    let cfg = config::config()?;

    println!("Syllabus Configuration");
    println!();
    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!();
    println!("Paths:");
    println!("  Home:    {}", cfg.home.display());
    println!("  Exports: {}", cfg.exports.display());
    println!();
    println!("Export format: {}", cfg.export_format);
    println!();
    println!("Validation:");
    println!("  Strict: {}", cfg.validation.strict);
    if cfg.validation.allow_dangling.is_empty() {
        println!("  Extra allowlisted references: (none)");
    } else {
        println!(
            "  Extra allowlisted references: {}",
            cfg.validation.allow_dangling.join(", ")
        );
    }

    Ok(())
}
