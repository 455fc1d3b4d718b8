use crate::cnf::cnf::Cnf;
use crate::sat::SatResult;
use crate::sat::naive::Naive;
use crate::solver::{Solver, SolverStats};

#[derive(Debug, Clone, Default)]
pub struct NaiveSolver {
    stats: SolverStats,
}

impl NaiveSolver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Solver for NaiveSolver {
    fn solve(&mut self, cnf: &Cnf, max_steps: Option<u64>) -> Option<SatResult> {
        self.stats.solve_calls += 1;
        let mut search = Naive::new(cnf);
        let result = match max_steps {
            Some(budget) => search.run_with_budget(budget),
            None => Some(search.run()),
        };
        self.stats.steps += search.tried();
        result
    }

    fn stats(&self) -> SolverStats {
        self.stats
    }

    fn backend_name(&self) -> &'static str {
        "naive"
    }
}
