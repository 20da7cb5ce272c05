//! SVG-Sweep main entry point
//!
//! This is the command-line interface for the SVG-Sweep harvester.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use svg_sweep::config::{load_config_with_hash, validate, Config, FailurePolicy};
use svg_sweep::crawler::sweep;
use svg_sweep::output::print_statistics;
use tracing_subscriber::EnvFilter;

/// SVG-Sweep: a recursive harvester of inline SVG markup
///
/// SVG-Sweep crawls outward from a starting page, collects every distinct
/// embedded SVG fragment, and writes them all into one HTML file annotated
/// with the page each fragment was first found on.
#[derive(Parser, Debug)]
#[command(name = "svg-sweep")]
#[command(version = "1.0.0")]
#[command(about = "A recursive harvester of inline SVG markup", long_about = None)]
struct Cli {
    /// Path to an optional TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Page to start crawling from
    #[arg(long, value_name = "URL")]
    start_url: Option<String>,

    /// Number of expansion steps shared by the whole crawl
    #[arg(long, value_name = "STEPS")]
    max_depth: Option<u32>,

    /// Where to write the aggregated report
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Log failed fetches and keep crawling instead of aborting
    #[arg(long)]
    skip_failures: bool,

    /// Print run statistics after the report is written
    #[arg(long)]
    stats: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    apply_overrides(&mut config, &cli);
    validate(&config).context("invalid settings")?;

    tracing::info!(
        "Sweeping from {} (budget {}, report {})",
        config.crawler.start_url,
        config.crawler.max_depth,
        config.output.report_path
    );

    let stats = sweep(&config).await.context("crawl failed")?;

    println!("Done!");
    if cli.stats {
        println!();
        print_statistics(&stats);
    }

    Ok(())
}

/// Applies command-line overrides on top of the loaded configuration
fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(start_url) = &cli.start_url {
        config.crawler.start_url = start_url.clone();
    }
    if let Some(max_depth) = cli.max_depth {
        config.crawler.max_depth = max_depth;
    }
    if let Some(output) = &cli.output {
        config.output.report_path = output.display().to_string();
    }
    if cli.skip_failures {
        config.crawler.on_fetch_error = FailurePolicy::Skip;
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("svg_sweep=info,warn"),
            1 => EnvFilter::new("svg_sweep=debug,info"),
            2 => EnvFilter::new("svg_sweep=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
