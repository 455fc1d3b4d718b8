use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use cnfsat::bench::{BenchConfig, run_dataset};
use cnfsat::solver::Algorithm;

#[derive(Debug, Parser)]
#[command(name = "cnfsat_bench")]
struct Cli {
    #[arg(long)]
    dir: PathBuf,
    #[arg(long)]
    csv: PathBuf,
    #[arg(long, default_value = "dpll")]
    algorithm: Algorithm,
    #[arg(long = "timeout_ms", default_value_t = 30000)]
    timeout_ms: u64,
    #[arg(long)]
    max_steps: Option<u64>,
    #[arg(long, default_value_t = false)]
    progress: bool,
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cnfsat::logging::init(cli.verbose);
    let cfg = BenchConfig {
        algorithm: cli.algorithm,
        max_steps: cli.max_steps,
    };
    let rows = run_dataset(
        &cli.dir,
        cfg,
        Duration::from_millis(cli.timeout_ms),
        &cli.csv,
        cli.progress,
    )?;
    println!("rows={}", rows.len());
    Ok(())
}
