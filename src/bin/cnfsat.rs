use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use cnfsat::cnf::dimacs::load_dimacs;
use cnfsat::report::{write_result, write_unknown};
use cnfsat::solver::{Algorithm, SolveOptions, solve_with_options};

#[derive(Debug, Parser)]
#[command(name = "cnfsat")]
#[command(about = "Decide satisfiability of a DIMACS CNF formula")]
struct Cli {
    /// DIMACS CNF file
    path: PathBuf,
    /// Search algorithm: naive or dpll
    algorithm: Algorithm,
    /// Give up and print `unknown` after this many search steps
    #[arg(long)]
    max_steps: Option<u64>,
    /// Print search counters to stderr
    #[arg(long, default_value_t = false)]
    stats: bool,
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cnfsat::logging::init(cli.verbose);

    let cnf = load_dimacs(&cli.path)
        .with_context(|| format!("failed to load {}", cli.path.display()))?;
    info!(
        vars = cnf.num_vars(),
        clauses = cnf.num_clauses(),
        max_width = cnf.max_clause_width(),
        empty_clause = cnf.has_empty_clause(),
        "loaded formula"
    );

    let report = solve_with_options(
        &cnf,
        &SolveOptions {
            algorithm: cli.algorithm,
            max_steps: cli.max_steps,
        },
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match &report.result {
        Some(result) => write_result(&mut out, result)?,
        None => write_unknown(&mut out)?,
    }
    out.flush()?;

    if cli.stats {
        eprintln!(
            "backend={} steps={} decisions={} conflicts={} propagations={} elapsed_ms={}",
            report.backend,
            report.stats.steps,
            report.stats.decisions,
            report.stats.conflicts,
            report.stats.propagations,
            report.elapsed.as_millis()
        );
    }
    info!(backend = report.backend, elapsed_ms = report.elapsed.as_millis() as u64, "done");
    Ok(())
}
