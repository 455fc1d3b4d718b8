use crate::cnf::cnf::Cnf;
use crate::sat::SatResult;
use crate::sat::dpll::Dpll;
use crate::solver::{Solver, SolverStats};

#[derive(Debug, Clone, Default)]
pub struct DpllSolver {
    stats: SolverStats,
}

impl DpllSolver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Solver for DpllSolver {
    fn solve(&mut self, cnf: &Cnf, max_steps: Option<u64>) -> Option<SatResult> {
        self.stats.solve_calls += 1;
        let mut search = Dpll::new(cnf);
        let result = match max_steps {
            Some(budget) => search.run_with_budget(budget),
            None => Some(search.run()),
        };
        self.stats.absorb(search.stats());
        result
    }

    fn stats(&self) -> SolverStats {
        self.stats
    }

    fn backend_name(&self) -> &'static str {
        "dpll"
    }
}
