//! Faculty Ingest - load faculty listings into the faculty store

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use faculty_common::logging::{init_logging, LogConfig, LogLevel};
use faculty_ingest::config::StoreConfig;
use faculty_ingest::store::{FacultyStore, MemoryStore, RestStore};
use faculty_ingest::{extract_file, load, Summary};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "faculty-ingest")]
#[command(author, version, about = "Faculty listing extraction and upload tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract records and print them
    Parse {
        /// Faculty listing to read
        #[arg(short, long, default_value = "faculty_data.txt")]
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Print headcounts by designation and campus
    Summary {
        /// Faculty listing to read
        #[arg(short, long, default_value = "faculty_data.txt")]
        input: PathBuf,
    },

    /// Replace the store's faculty rows with the extracted records
    Load {
        /// Faculty listing to read
        #[arg(short, long, default_value = "faculty_data.txt")]
        input: PathBuf,

        /// Load into an in-memory store instead of the configured one
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    /// One pretty-printed JSON array
    Json,
    /// One JSON object per line
    Jsonl,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };

    let log_config = LogConfig::builder()
        .level(log_level)
        .log_file_prefix("faculty-ingest")
        .build()
        .merge_env()?;

    let _guard = init_logging(&log_config)?;

    match cli.command {
        Command::Parse { input, format } => {
            let extraction = extract_file(&input)
                .with_context(|| format!("Failed to read {}", input.display()))?;

            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&extraction.records)?);
                },
                OutputFormat::Jsonl => {
                    for record in &extraction.records {
                        println!("{}", serde_json::to_string(record)?);
                    }
                },
            }
        },
        Command::Summary { input } => {
            let extraction = extract_file(&input)
                .with_context(|| format!("Failed to read {}", input.display()))?;

            print!("{}", Summary::from_records(&extraction.records));
        },
        Command::Load { input, dry_run } => {
            let extraction = extract_file(&input)
                .with_context(|| format!("Failed to read {}", input.display()))?;

            let store: Box<dyn FacultyStore> = if dry_run {
                info!("Dry run, loading into memory");
                Box::new(MemoryStore::new())
            } else {
                let config = StoreConfig::from_env().context("Faculty store is not configured")?;
                info!(url = %config.table_url(), "Loading into faculty store");
                Box::new(RestStore::new(&config)?)
            };

            let report = load(store.as_ref(), &extraction.records).await;
            println!("{}", serde_json::to_string_pretty(&report)?);
        },
    }

    info!("Done");
    Ok(())
}
