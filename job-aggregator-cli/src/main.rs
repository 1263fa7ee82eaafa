use anyhow::Context;
use clap::Parser;
use job_aggregator::{JobAggregator, SourceBatches};
use shared_types::CompanyContext;
use std::path::{Path, PathBuf};
use tracing_subscriber::prelude::*;

mod config;
mod input;

/// Aggregate already-collected job descriptors for one company.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON bundle: {"company": {...}, "career": [...], "linkedin": [...], "intel": [...]}
    #[arg(long, conflicts_with_all = ["domain", "career", "linkedin", "intel"])]
    input: Option<PathBuf>,

    /// Company primary domain, e.g. acme.com
    #[arg(long, required_unless_present = "input")]
    domain: Option<String>,

    /// Company name
    #[arg(long, requires = "domain")]
    name: Option<String>,

    /// Headquarters country, used to tag primary-market jobs
    #[arg(long, requires = "domain")]
    country: Option<String>,

    /// Career page / ATS descriptors (JSON array or CSV)
    #[arg(long)]
    career: Option<PathBuf>,

    /// LinkedIn descriptors (JSON array or CSV)
    #[arg(long)]
    linkedin: Option<PathBuf>,

    /// Intel-agent hints (JSON array or CSV)
    #[arg(long)]
    intel: Option<PathBuf>,

    /// Config file, defaults to the per-user job-aggregator/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    log_file_path: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_tracing(args.log_file_path.as_deref());

    let (config, config_path) =
        config::load(args.config.as_deref()).context("Failed to load config")?;
    tracing::info!("Loaded config from {}", config_path.display());

    let aggregator = JobAggregator::new(&config);
    let (company, sources, skipped) = load_input(&args)?;

    let mut response = aggregator.aggregate(&company, sources);
    if skipped > 0 {
        tracing::warn!("Skipped {} unreadable input records", skipped);
        response.report.counts.dropped += skipped;
    }

    let output = if args.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{}", output);

    Ok(())
}

/// Company, source lists and the number of input records that were skipped.
fn load_input(args: &Args) -> anyhow::Result<(CompanyContext, SourceBatches, usize)> {
    if let Some(path) = &args.input {
        let bundle = input::load_bundle(path)
            .with_context(|| format!("Failed to read input bundle {}", path.display()))?;
        return Ok((bundle.company, bundle.sources, bundle.skipped));
    }

    let company = CompanyContext {
        name: args.name.clone(),
        primary_domain: args.domain.clone().unwrap_or_default(),
        preferred_country: args.country.clone(),
    };

    let career = load_list(args.career.as_deref())?;
    let linkedin = load_list(args.linkedin.as_deref())?;
    let intel = load_list(args.intel.as_deref())?;
    let skipped = career.skipped + linkedin.skipped + intel.skipped;

    let sources = SourceBatches {
        career: career.descriptors,
        linkedin: linkedin.descriptors,
        intel: intel.descriptors,
    };

    Ok((company, sources, skipped))
}

fn load_list(path: Option<&Path>) -> anyhow::Result<input::LoadedDescriptors> {
    match path {
        Some(path) => input::load_descriptors(path)
            .with_context(|| format!("Failed to read descriptors from {}", path.display())),
        None => Ok(input::LoadedDescriptors::default()),
    }
}

/// Logs go to stderr so stdout only carries the JSON response.
fn init_tracing(log_file_path: Option<&str>) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if let Some(log_path) = log_file_path {
        let log_path = Path::new(log_path);
        let file_appender = tracing_appender::rolling::never(
            log_path.parent().unwrap_or(Path::new(".")),
            log_path
                .file_name()
                .unwrap_or(std::ffi::OsStr::new("aggregate-jobs.log")),
        );
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        std::mem::forget(guard);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(true)
                    .with_writer(std::io::stderr),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }
}
