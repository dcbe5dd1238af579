//! Fundex CLI: registry snapshot loading and CSV exports.
//!
//! Usage:
//!   fundex load [--rdf path] [--db path]
//!   fundex funders --profile <full|regional|partner|bilingual> [--only-jurisdiction] [--out path]
//!   fundex affiliations --data <file> [--overrides <file>] [--out path]
//!   fundex lineage <entity-id>
//!   fundex info

use clap::{ArgAction, Parser, Subcommand};
use fundex::pipeline::{self, ExportSummary};
use fundex::{FundexResult, PipelineConfig, Profile};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "fundex",
    version,
    about = "Funder and affiliation registry exporter"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// YAML config file (defaults to ~/.config/fundex/config.yaml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Path to the SQLite snapshot (overrides the config file)
    #[arg(long, global = true)]
    db: Option<PathBuf>,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse the registry RDF/XML dump into the snapshot
    Load {
        /// RDF/XML registry dump
        #[arg(long)]
        rdf: Option<PathBuf>,
    },
    /// Export funder metadata as CSV
    Funders {
        /// Export profile
        #[arg(long, default_value = "full")]
        profile: Profile,
        /// Only write entities in the configured jurisdiction
        #[arg(long)]
        only_jurisdiction: bool,
        /// Output file (defaults to the profile's file in the output directory)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Export the affiliation partner feed from a ROR dump
    Affiliations {
        /// ROR JSON dump
        #[arg(short, long, required = true)]
        data: PathBuf,
        /// Tab-separated override table
        #[arg(short, long)]
        overrides: Option<PathBuf>,
        /// Output file
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Show the lineage of one entity
    Lineage {
        /// Entity URI or bare Funder Registry id
        entity_id: String,
    },
    /// Show snapshot metadata
    Info,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn load_config(path: Option<PathBuf>, db: Option<PathBuf>) -> FundexResult<PipelineConfig> {
    let mut config = match path.or_else(PipelineConfig::user_config_path) {
        Some(path) => PipelineConfig::load(path)?,
        None => PipelineConfig::default(),
    };
    if let Some(db) = db {
        config.snapshot = db;
    }
    Ok(config)
}

fn print_summary(summary: &ExportSummary) {
    println!("Wrote {} rows to {}", summary.rows, summary.path.display());
}

fn cmd_load(config: &PipelineConfig, rdf: Option<PathBuf>) -> FundexResult<()> {
    let rdf = match rdf {
        Some(path) => config.data_path(path),
        None => config.registry_rdf_path(),
    };
    let db = config.snapshot_path();
    let count = pipeline::load_snapshot(&rdf, &db)?;
    println!("Saved {} triples from {} to {}", count, rdf.display(), db.display());
    Ok(())
}

fn cmd_lineage(config: &PipelineConfig, entity_id: &str) -> FundexResult<()> {
    let report = pipeline::lineage_report(config, entity_id)?;
    println!("{}", report.id);
    println!("  deprecated: {}", report.deprecated);
    println!("  excluded:   {}", report.excluded);
    println!("  predecessors ({}):", report.predecessors.len());
    for id in &report.predecessors {
        println!("    {}", id);
    }
    println!("  successors ({}):", report.successors.len());
    for id in &report.successors {
        println!("    {}", id);
    }
    println!("  previous labels ({}):", report.previous_labels.len());
    for label in &report.previous_labels {
        println!("    {}", label);
    }
    Ok(())
}

fn cmd_info(config: &PipelineConfig) -> FundexResult<()> {
    let db = config.snapshot_path();
    match pipeline::snapshot_info(&db)? {
        Some(info) => {
            println!("Snapshot: {}", db.display());
            println!("Source:   {}", info.source);
            println!("Triples:  {}", info.triple_count);
            println!("Loaded:   {}", info.loaded_at.to_rfc3339());
        }
        None => println!("Snapshot {} is empty; run `fundex load`", db.display()),
    }
    Ok(())
}

fn run(cli: Cli) -> FundexResult<()> {
    let config = load_config(cli.config, cli.db)?;
    match cli.command {
        Commands::Load { rdf } => cmd_load(&config, rdf),
        Commands::Funders {
            profile,
            only_jurisdiction,
            out,
        } => {
            let summary = pipeline::export_funders(&config, profile, only_jurisdiction, out.as_deref())?;
            print_summary(&summary);
            Ok(())
        }
        Commands::Affiliations { data, overrides, out } => {
            let summary = pipeline::export_affiliations(&config, &data, overrides.as_deref(), out.as_deref())?;
            print_summary(&summary);
            Ok(())
        }
        Commands::Lineage { entity_id } => cmd_lineage(&config, &entity_id),
        Commands::Info => cmd_info(&config),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
