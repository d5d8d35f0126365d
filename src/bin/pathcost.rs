use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pathcost", version)]
struct Cli {
    /// Log degradation decisions at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate path lengths for one or more SVG files and print JSON.
    Estimate(EstimateArgs),
    /// Print the command census of a single path data string.
    Census(CensusArgs),
}

#[derive(Parser, Debug)]
struct EstimateArgs {
    /// Input SVG files.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Estimator options JSON (see `EstimatorOpts`). Flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip the background worker and use the flat inline estimate.
    #[arg(long)]
    inline: bool,

    /// Fall back to the inline estimate if the worker is silent for this long.
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Override the number of files estimated concurrently.
    #[arg(long)]
    jobs: Option<usize>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct CensusArgs {
    /// Path data, e.g. "M0 0 L10 10 Z".
    d: String,
}

#[derive(serde::Serialize, Debug)]
struct FileReport {
    file: String,
    resolution: pathcost::Resolution,
    paths: Vec<pathcost::PathEstimate>,
}

#[derive(serde::Serialize, Debug)]
struct CensusReport {
    commands: usize,
    length: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Estimate(args) => cmd_estimate(args),
        Command::Census(args) => cmd_census(args),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_opts(args: &EstimateArgs) -> anyhow::Result<pathcost::EstimatorOpts> {
    let mut opts = match &args.config {
        Some(path) => {
            let s = std::fs::read_to_string(path)
                .with_context(|| format!("read config '{}'", path.display()))?;
            pathcost::EstimatorOpts::from_json(&s)
                .with_context(|| format!("parse config '{}'", path.display()))?
        }
        None => pathcost::EstimatorOpts::default(),
    };
    if args.inline {
        opts.background = false;
    }
    if args.timeout_ms.is_some() {
        opts.timeout_ms = args.timeout_ms;
    }
    opts.validate()?;
    Ok(opts)
}

fn build_thread_pool(jobs: Option<usize>) -> anyhow::Result<rayon::ThreadPool> {
    if jobs == Some(0) {
        anyhow::bail!("'--jobs' must be >= 1 when set");
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = jobs {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .context("failed to build rayon thread pool")
}

fn estimate_file(
    estimator: &pathcost::PathEstimator,
    path: &Path,
) -> anyhow::Result<FileReport> {
    let markup = std::fs::read_to_string(path)
        .with_context(|| format!("read svg '{}'", path.display()))?;
    let (paths, resolution) = estimator.estimate(&markup).wait_with_resolution();
    Ok(FileReport {
        file: path.display().to_string(),
        resolution,
        paths,
    })
}

fn cmd_estimate(args: EstimateArgs) -> anyhow::Result<()> {
    let opts = load_opts(&args)?;
    let estimator = pathcost::PathEstimator::new(opts)?;
    let pool = build_thread_pool(args.jobs)?;

    let reports = pool.install(|| {
        args.files
            .par_iter()
            .map(|f| estimate_file(&estimator, f))
            .collect::<anyhow::Result<Vec<_>>>()
    })?;

    let out = if args.pretty {
        serde_json::to_string_pretty(&reports)?
    } else {
        serde_json::to_string(&reports)?
    };
    println!("{out}");
    Ok(())
}

fn cmd_census(args: CensusArgs) -> anyhow::Result<()> {
    let census = pathcost::CommandCensus::of_path(0, Some(args.d.as_str()))?;
    let report = CensusReport {
        commands: census.total(),
        length: census.estimate(0).length,
    };
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
