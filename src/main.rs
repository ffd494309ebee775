use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use musegraph::config::Config;
use musegraph::entity::CulturePolicy;
use musegraph::error::MusegraphErrorTrait;

mod commands;

use commands::RdfFormat;

#[derive(Parser)]
#[command(
    name = "musegraph",
    version,
    about = "Museum collection metadata to CIDOC-CRM RDF, with Wikidata and museum API enrichment",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json); overrides the config file
    #[arg(long, global = true)]
    log_format: Option<String>,

    /// TOML configuration file; MUSEGRAPH_* environment variables otherwise
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the collection graph from a JSON rows file
    Rdf {
        /// JSON array of column-name to value objects
        #[arg(short, long)]
        input: PathBuf,

        /// Collection name
        #[arg(short, long, default_value = "collection")]
        name: String,

        /// Only accept artifacts of this culture (greek, roman)
        #[arg(long)]
        culture: Option<CulturePolicy>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = RdfFormat::Turtle)]
        format: RdfFormat,

        /// Output file path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Enrich tags and artists from Wikidata first
        #[arg(long, default_value = "false")]
        enrich: bool,
    },

    /// Search both museums for artworks similar to one row's artifact
    Similar {
        /// JSON array of column-name to value objects
        #[arg(short, long)]
        input: PathBuf,

        /// Zero-based row index
        #[arg(long, default_value = "0")]
        row: usize,

        /// Results per museum
        #[arg(short, long, default_value = "5")]
        limit: usize,
    },

    /// Find works by the collection's artists in both museums
    Discover {
        /// JSON array of column-name to value objects
        #[arg(short, long)]
        input: PathBuf,

        /// Collection name
        #[arg(short, long, default_value = "collection")]
        name: String,

        /// Results per museum
        #[arg(short, long, default_value = "1")]
        limit: usize,

        /// Filter every hit against the last artist only
        #[arg(long, default_value = "false")]
        legacy_filter: bool,

        /// Add the hits to the collection and write its Turtle graph here
        #[arg(long)]
        absorb_output: Option<PathBuf>,
    },

    /// Show collection statistics
    Stats {
        /// JSON array of column-name to value objects
        #[arg(short, long)]
        input: PathBuf,

        /// Only accept artifacts of this culture (greek, roman)
        #[arg(long)]
        culture: Option<CulturePolicy>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env()?,
    };

    // Initialize tracing/logging
    let log_format = cli
        .log_format
        .as_deref()
        .unwrap_or(config.logging.format.as_str());
    setup_tracing(log_format, &config.logging.level, cli.verbose)?;

    tracing::info!("musegraph starting");

    if let Err(err) = run(cli.command, &config).await {
        report_failure(&err);
        return Err(err);
    }

    tracing::info!("musegraph completed successfully");
    Ok(())
}

async fn run(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Rdf {
            input,
            name,
            culture,
            format,
            output,
            enrich,
        } => {
            tracing::info!(
                input = %input.display(),
                culture = ?culture,
                format = ?format,
                enrich = %enrich,
                "Starting rdf command"
            );
            commands::rdf(config, &input, &name, culture, format, output, enrich).await?;
        }

        Commands::Similar { input, row, limit } => {
            tracing::info!(
                input = %input.display(),
                row = %row,
                limit = %limit,
                "Starting similar command"
            );
            commands::similar(config, &input, row, limit).await?;
        }

        Commands::Discover {
            input,
            name,
            limit,
            legacy_filter,
            absorb_output,
        } => {
            tracing::info!(
                input = %input.display(),
                limit = %limit,
                legacy_filter = %legacy_filter,
                "Starting discover command"
            );
            commands::discover(config, &input, &name, limit, legacy_filter, absorb_output)
                .await?;
        }

        Commands::Stats { input, culture } => {
            tracing::info!(input = %input.display(), culture = ?culture, "Starting stats command");
            commands::stats(&input, culture)?;
        }
    }

    Ok(())
}

/// Log a failed command, classified when it came from the library
fn report_failure(err: &anyhow::Error) {
    match err.downcast_ref::<musegraph::Error>() {
        Some(cause) => tracing::error!(
            category = cause.category().description(),
            recoverable = cause.is_recoverable(),
            error = %format!("{err:#}"),
            "Command failed"
        ),
        None => tracing::error!(error = %format!("{err:#}"), "Command failed"),
    }
}

fn setup_tracing(format: &str, level: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("musegraph=debug,info")
    } else {
        tracing_subscriber::EnvFilter::new(format!("musegraph={level},warn"))
    };

    // Logs go to stderr so graph output on stdout stays clean
    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
                .init();
        }
    }

    Ok(())
}
