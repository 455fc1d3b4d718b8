pub mod dpll_backend;
pub mod naive_backend;

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::cnf::cnf::Cnf;
use crate::error::InvalidAlgorithmSelector;
use crate::sat::SatResult;

use self::dpll_backend::DpllSolver;
use self::naive_backend::NaiveSolver;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Naive,
    Dpll,
}

impl Algorithm {
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Naive => "naive",
            Algorithm::Dpll => "dpll",
        }
    }
}

impl FromStr for Algorithm {
    type Err = InvalidAlgorithmSelector;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "naive" => Ok(Algorithm::Naive),
            "dpll" => Ok(Algorithm::Dpll),
            _ => Err(InvalidAlgorithmSelector(s.to_owned())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverStats {
    pub solve_calls: u64,
    pub decisions: u64,
    pub conflicts: u64,
    pub propagations: u64,
    /// Driver transitions for DPLL, candidates tested for the enumerator.
    pub steps: u64,
}

impl SolverStats {
    pub fn absorb(&mut self, other: SolverStats) {
        self.solve_calls += other.solve_calls;
        self.decisions += other.decisions;
        self.conflicts += other.conflicts;
        self.propagations += other.propagations;
        self.steps += other.steps;
    }
}

pub trait Solver {
    /// `None` only when `max_steps` ran out before a verdict.
    fn solve(&mut self, cnf: &Cnf, max_steps: Option<u64>) -> Option<SatResult>;
    fn stats(&self) -> SolverStats;
    fn backend_name(&self) -> &'static str;
}

pub fn new_solver(algorithm: Algorithm) -> Box<dyn Solver> {
    match algorithm {
        Algorithm::Naive => Box::new(NaiveSolver::new()),
        Algorithm::Dpll => Box::new(DpllSolver::new()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveOptions {
    pub algorithm: Algorithm,
    pub max_steps: Option<u64>,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Dpll,
            max_steps: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    pub result: Option<SatResult>,
    pub stats: SolverStats,
    pub backend: &'static str,
    pub elapsed: Duration,
}

pub fn solve_with_options(cnf: &Cnf, opts: &SolveOptions) -> SolveReport {
    let mut solver = new_solver(opts.algorithm);
    let start = Instant::now();
    let result = solver.solve(cnf, opts.max_steps);
    let elapsed = start.elapsed();
    debug!(
        backend = solver.backend_name(),
        vars = cnf.num_vars(),
        clauses = cnf.num_clauses(),
        decided = result.is_some(),
        elapsed_ms = elapsed.as_millis() as u64,
        "solve finished"
    );
    SolveReport {
        result,
        stats: solver.stats(),
        backend: solver.backend_name(),
        elapsed,
    }
}
