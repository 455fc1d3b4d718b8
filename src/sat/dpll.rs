use tracing::debug;

use crate::cnf::cnf::Cnf;
use crate::solver::SolverStats;

use super::backtrack::{Backtrack, backtrack};
use super::decide::decide;
use super::propagate::{Propagation, unit_propagate};
use super::trail::Trail;
use super::SatResult;

pub fn solve(cnf: &Cnf) -> SatResult {
    Dpll::new(cnf).run()
}

pub fn is_sat(cnf: &Cnf) -> bool {
    solve(cnf).is_sat()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Propagating,
    Deciding,
    Backtracking,
    Satisfied,
    Unsatisfiable,
}

impl State {
    pub fn is_terminal(self) -> bool {
        matches!(self, State::Satisfied | State::Unsatisfiable)
    }
}

/// Iterative DPLL search: unit propagation, branching on the highest free
/// variable, and chronological backtracking over an explicit trail.
///
/// The formula is only read, so any number of searches may share it.
#[derive(Debug, Clone)]
pub struct Dpll<'a> {
    cnf: &'a Cnf,
    trail: Trail,
    state: State,
    stats: SolverStats,
}

impl<'a> Dpll<'a> {
    pub fn new(cnf: &'a Cnf) -> Self {
        Self {
            cnf,
            trail: Trail::new(cnf.num_vars()),
            state: State::Propagating,
            stats: SolverStats::default(),
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn stats(&self) -> SolverStats {
        self.stats
    }

    /// Performs one transition. Terminal states are left unchanged.
    pub fn step(&mut self) -> State {
        if self.state.is_terminal() {
            return self.state;
        }
        self.stats.steps += 1;

        self.state = match self.state {
            State::Propagating => {
                let before = self.trail.len();
                let outcome = unit_propagate(self.cnf, &mut self.trail);
                self.stats.propagations += (self.trail.len() - before) as u64;
                match outcome {
                    Propagation::Conflict { .. } => {
                        self.stats.conflicts += 1;
                        State::Backtracking
                    }
                    Propagation::Fixpoint if self.trail.is_complete() => State::Satisfied,
                    Propagation::Fixpoint => State::Deciding,
                }
            }
            State::Deciding => {
                if decide(&mut self.trail).is_some() {
                    self.stats.decisions += 1;
                }
                State::Propagating
            }
            State::Backtracking => match backtrack(&mut self.trail) {
                Backtrack::Flipped(_) => State::Propagating,
                Backtrack::Exhausted => State::Unsatisfiable,
            },
            terminal @ (State::Satisfied | State::Unsatisfiable) => terminal,
        };
        self.state
    }

    /// The verdict, once a terminal state has been reached.
    pub fn result(&self) -> Option<SatResult> {
        match self.state {
            State::Satisfied => self.trail.model().map(SatResult::Sat),
            State::Unsatisfiable => Some(SatResult::Unsat),
            _ => None,
        }
    }

    pub fn run(&mut self) -> SatResult {
        loop {
            if let Some(result) = self.result() {
                self.log_finish();
                return result;
            }
            self.step();
        }
    }

    /// Like `run`, but gives up with `None` after `max_steps` transitions.
    pub fn run_with_budget(&mut self, max_steps: u64) -> Option<SatResult> {
        for _ in 0..max_steps {
            if self.state.is_terminal() {
                break;
            }
            self.step();
        }
        let result = self.result();
        if result.is_some() {
            self.log_finish();
        } else {
            debug!(steps = self.stats.steps, "step budget spent");
        }
        result
    }

    fn log_finish(&self) {
        debug!(
            state = ?self.state,
            steps = self.stats.steps,
            decisions = self.stats.decisions,
            conflicts = self.stats.conflicts,
            propagations = self.stats.propagations,
            "dpll finished"
        );
    }
}
