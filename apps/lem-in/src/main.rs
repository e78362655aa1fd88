//! lem-in: route a colony of ants from `##start` to `##end`.
//!
//! Reads a farm description, prints one line of `L<n>-<room>` moves per turn
//! to stdout, and optionally mirrors the moves to a CSV file.  Diagnostics go
//! to stderr so the move log stays clean.
//!
//! ```text
//! lem-in example00.txt                 # resolved inside ./file/
//! lem-in demos/diamond.txt --csv moves.csv --until-all-arrived
//! RUST_LOG=debug lem-in example00.txt
//! ```

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use lem_core::{SolveConfig, TerminationRule};
use lem_io::{load_farm_file, CsvMoveWriter, MoveLogWriter, MoveObserver};

// ── Arguments ─────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "lem-in")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Farm description file.
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Directory searched when FILE is not found as given.
    #[arg(long, env = "LEM_DIR", default_value = "file", value_name = "DIR")]
    dir: PathBuf,

    /// Also write every move as `turn,agent,room` to this CSV file.
    #[arg(long, env = "LEM_CSV", value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Prefix of ant names in the move log.
    #[arg(long, env = "LEM_AGENT_PREFIX", default_value = "L")]
    agent_prefix: String,

    /// Keep printing turns until every ant has reached the end room.
    #[arg(long, env = "LEM_UNTIL_ALL_ARRIVED")]
    until_all_arrived: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LEM_LOG_LEVEL", default_value = "warn")]
    log_level: String,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = init_logging(&cli.log_level) {
        eprintln!("ERROR: {e:#}");
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", error_line(&e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = SolveConfig {
        agent_prefix: cli.agent_prefix.clone(),
        termination:  if cli.until_all_arrived {
            TerminationRule::AllArrived
        } else {
            TerminationRule::LastAssigned
        },
    };

    let path = resolve_farm_path(&cli.file, &cli.dir);
    let farm = load_farm_file(&path).with_context(|| format!("{}", path.display()))?;
    info!(path = %path.display(), "farm loaded");

    let solver = farm.into_solver()?.config(config.clone()).build()?;

    let csv = match &cli.csv {
        Some(p) => Some(
            CsvMoveWriter::new(p).with_context(|| format!("cannot create {}", p.display()))?,
        ),
        None => None,
    };
    let stdout = MoveLogWriter::new(io::stdout().lock());
    let mut observer = MoveObserver::new((stdout, csv), &config);

    let report = solver.run(&mut observer)?;
    if let Some(e) = observer.take_error() {
        return Err(e).context("writing move log");
    }
    info!(
        turns  = report.turns,
        lanes  = report.lane_profile.len(),
        routes = report.routes_found,
        "done"
    );
    Ok(())
}

/// The single stderr line for a failed run, causes joined by `: `.
fn error_line(err: &anyhow::Error) -> String {
    format!("ERROR: invalid data format, {err:#}")
}

/// Use `file` as given when it is absolute or exists, else look in `dir`.
fn resolve_farm_path(file: &Path, dir: &Path) -> PathBuf {
    if file.is_absolute() || file.exists() {
        file.to_path_buf()
    } else {
        dir.join(file)
    }
}

/// Route `tracing` output to stderr.  `RUST_LOG` wins over `--log-level`.
fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .context("Failed to create log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();

    Ok(())
}
