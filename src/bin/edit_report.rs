//! Print cost matrices, final costs and every optimal edit script.
//!
//! Runs a built-in example pair first, then each input file given on the
//! command line. Each file holds the source sequence on its first line and
//! the target on its second.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use optimal_edits::input::{read_pair, InputPair};
use optimal_edits::render::{report, ReportOptions};
use optimal_edits::utils::fits_display;
use optimal_edits::{build, EditCosts, EnumeratorBuilder};

const EXAMPLE_SOURCE: &str = "aabab";
const EXAMPLE_TARGET: &str = "babb";

#[derive(Parser, Debug)]
#[command(name = "edit_report")]
#[command(about = "Weighted edit distance with every minimum-cost decision sequence")]
#[command(version)]
struct Cli {
    /// Input files, two lines each: source then target
    files: Vec<PathBuf>,

    /// Cost of inserting a symbol
    #[arg(long, default_value_t = 0.5)]
    insert: f64,

    /// Cost of deleting a symbol
    #[arg(long, default_value_t = 0.4)]
    delete: f64,

    /// Cost of changing one symbol into a different one
    #[arg(long, default_value_t = 1.2)]
    change: f64,

    /// Longest input for which the matrix and sequences are printed
    #[arg(long, default_value_t = 10)]
    display_limit: usize,

    /// Stop after this many decision sequences per input
    #[arg(long)]
    max_sequences: Option<usize>,

    /// Print the gapped alignment under each decision sequence
    #[arg(long)]
    alignments: bool,

    /// Do not run the built-in example pair
    #[arg(long)]
    skip_example: bool,

    /// Log more detail to stderr (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[cfg(feature = "tracing")]
fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[cfg(not(feature = "tracing"))]
fn init_logging(_verbose: u8) {}

fn run_pair(pair: &InputPair, costs: &EditCosts, cli: &Cli) -> String {
    let (x, y) = (pair.source.as_slice(), pair.target.as_slice());
    let matrix = build(x, y, costs);
    let options = ReportOptions {
        display_limit: cli.display_limit,
        alignments: cli.alignments,
    };

    let found = fits_display(x.len(), y.len(), cli.display_limit).then(|| {
        let builder = EnumeratorBuilder::new(x, y, &matrix, costs);
        let builder = match cli.max_sequences {
            Some(limit) => builder.with_limit(limit),
            None => builder,
        };
        builder.build().run()
    });

    report(x, y, &matrix, found.as_ref(), &options)
}

fn run_file(path: &Path, costs: &EditCosts, cli: &Cli) -> Result<String> {
    let pair = read_pair(path).with_context(|| format!("cannot use input {}", path.display()))?;
    Ok(run_pair(&pair, costs, cli))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let costs = match EditCosts::from_f64(cli.insert, cli.delete, cli.change) {
        Ok(costs) => costs,
        Err(err) => {
            eprintln!("edit_report: {err}");
            return ExitCode::from(2);
        }
    };

    if !cli.skip_example {
        println!("Example ({EXAMPLE_SOURCE} -> {EXAMPLE_TARGET}):");
        let pair = InputPair::new(EXAMPLE_SOURCE, EXAMPLE_TARGET);
        print!("{}", run_pair(&pair, &costs, &cli));
    }

    if !cli.files.is_empty() {
        println!("Provided inputs:");
    }

    let mut failures = 0usize;
    for path in &cli.files {
        println!("{}:", path.display());
        match run_file(path, &costs, &cli) {
            Ok(text) => print!("{text}"),
            Err(err) => {
                failures += 1;
                eprintln!("edit_report: {err:#}");
            }
        }
    }

    if failures > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
