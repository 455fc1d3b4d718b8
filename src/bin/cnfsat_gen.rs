use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use cnfsat::cnf::dimacs::write_dimacs;
use cnfsat::cnf::generate::{planted_kcnf, random_kcnf};

#[derive(Debug, Parser)]
#[command(name = "cnfsat_gen")]
#[command(about = "Write a random k-CNF formula in DIMACS format")]
struct Cli {
    #[arg(long)]
    vars: u32,
    #[arg(long)]
    clauses: usize,
    #[arg(long, default_value_t = 3)]
    k: usize,
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// Guarantee satisfiability by planting a hidden model
    #[arg(long, default_value_t = false)]
    planted: bool,
    #[arg(long)]
    out: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cnf = if cli.planted {
        planted_kcnf(cli.vars, cli.clauses, cli.k, cli.seed)?.0
    } else {
        random_kcnf(cli.vars, cli.clauses, cli.k, cli.seed)?
    };
    write_dimacs(&cli.out, &cnf)
        .with_context(|| format!("failed to write {}", cli.out.display()))?;
    println!(
        "GEN: wrote {} | vars={} clauses={} k={} planted={}",
        cli.out.display(),
        cnf.num_vars(),
        cnf.num_clauses(),
        cli.k,
        cli.planted
    );
    Ok(())
}
