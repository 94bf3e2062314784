//! Page-replacement simulator CLI.
//!
//! This binary is the thin front end over `pagesim-core`. It performs:
//! 1. **Run:** Replay a trace under one algorithm and print the fault count.
//! 2. **Compare:** Replay the same trace under all four algorithms, each with
//!    freshly initialized state, and print a per-algorithm fault table.
//!
//! All decision logic lives in the library; this crate only parses
//! arguments, loads the trace, and formats output. Configuration errors are
//! reported on stderr with a non-zero exit before any partial output.

use std::process;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pagesim_core::engine::{AccessOutcome, simulate};
use pagesim_core::trace::{self, ReferenceTrace};
use pagesim_core::{Algorithm, SimConfig, SimError};

#[derive(Parser, Debug)]
#[command(
    name = "pagesim",
    author,
    version,
    about = "Virtual-memory page-replacement simulator",
    long_about = "Replay a page-reference trace against a fixed number of physical frames and count page faults under a selectable replacement policy.\n\nThe trace is a file of whitespace-separated non-negative page numbers; pass `-` to read it from stdin.\n\nExamples:\n  pagesim run -m 3 -a FIFO -f refs.txt\n  pagesim run -m 3 -a OPT -f refs.txt --events --stats\n  pagesim compare -m 3 -f refs.txt --json"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay the trace under one replacement algorithm.
    Run {
        /// Number of physical frames (must be > 0).
        #[arg(short = 'm', long)]
        frames: usize,

        /// Replacement algorithm: FIFO, LRU, OPT, or CLOCK.
        #[arg(short, long)]
        algorithm: String,

        /// Reference trace file (`-` for stdin).
        #[arg(short = 'f', long = "trace")]
        trace: String,

        /// Print the per-reference hit/miss/victim stream.
        #[arg(long)]
        events: bool,

        /// Print the full statistics report after the fault count.
        #[arg(long)]
        stats: bool,

        /// Emit the results as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Replay the trace under all four algorithms and tabulate faults.
    Compare {
        /// Number of physical frames (must be > 0).
        #[arg(short = 'm', long)]
        frames: usize,

        /// Reference trace file (`-` for stdin).
        #[arg(short = 'f', long = "trace")]
        trace: String,

        /// Emit the results as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            frames,
            algorithm,
            trace,
            events,
            stats,
            json,
        } => cmd_run(frames, &algorithm, &trace, events, stats, json),
        Commands::Compare {
            frames,
            trace,
            json,
        } => cmd_compare(frames, &trace, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Loads the trace from a path, or from stdin when the path is `-`.
fn load_trace(path: &str) -> Result<ReferenceTrace, SimError> {
    if path == "-" {
        trace::from_stdin()
    } else {
        ReferenceTrace::from_path(path)
    }
}

/// Runs one algorithm over the trace and prints the fault count.
///
/// The fault count is printed alone by default, matching the simulator's
/// single-integer output contract; `--events`, `--stats`, and `--json`
/// layer the diagnostic surfaces on top.
fn cmd_run(
    frames: usize,
    algorithm: &str,
    trace_path: &str,
    events: bool,
    stats: bool,
    json: bool,
) -> Result<(), SimError> {
    let algorithm = Algorithm::from_str(algorithm)?;
    let mut config = SimConfig::new(frames, algorithm);
    config.record_events = events;

    let trace = load_trace(trace_path)?;
    let engine = simulate(&trace, &config)?;

    if json {
        let recorded = events.then(|| engine.events());
        let report = serde_json::json!({
            "algorithm": algorithm.name(),
            "frames": frames,
            "references": engine.stats().references,
            "hits": engine.stats().hits,
            "faults": engine.stats().faults,
            "evictions": engine.stats().evictions,
            "events": recorded,
        });
        println!("{report}");
        return Ok(());
    }

    if events {
        for event in engine.events() {
            match event.outcome {
                AccessOutcome::Hit => {
                    println!("t={:<6} page={:<8} hit", event.time, event.page);
                }
                AccessOutcome::Miss { victim: Some(v) } => {
                    println!(
                        "t={:<6} page={:<8} miss  evict={}",
                        event.time, event.page, v
                    );
                }
                AccessOutcome::Miss { victim: None } => {
                    println!("t={:<6} page={:<8} miss", event.time, event.page);
                }
            }
        }
    }

    println!("{}", engine.stats().faults);

    if stats {
        engine.stats().print();
    }

    Ok(())
}

/// Runs all four algorithms over the trace with fresh state each and prints
/// a fault table.
fn cmd_compare(frames: usize, trace_path: &str, json: bool) -> Result<(), SimError> {
    let trace = load_trace(trace_path)?;

    let mut results = Vec::with_capacity(Algorithm::ALL.len());
    for algorithm in Algorithm::ALL {
        let config = SimConfig::new(frames, algorithm);
        let engine = simulate(&trace, &config)?;
        results.push((algorithm, engine.stats().faults));
    }

    if json {
        let report: serde_json::Map<String, serde_json::Value> = results
            .iter()
            .map(|&(algorithm, faults)| (algorithm.name().to_string(), faults.into()))
            .collect();
        println!("{}", serde_json::Value::Object(report));
    } else {
        println!(
            "{} references, {} frames",
            trace.len(),
            frames
        );
        for (algorithm, faults) in results {
            println!("{:<6} {}", algorithm.name(), faults);
        }
    }

    Ok(())
}
