use crate::cnf::cnf::{Cnf, Lit};

use super::{Model, SatResult};

pub fn solve(cnf: &Cnf) -> SatResult {
    Naive::new(cnf).run()
}

/// Brute-force enumeration of all `2^n` assignments.
///
/// Candidates are visited in lexicographic order with variable 1 most
/// significant and `false` before `true`, so the first model found is the
/// lexicographically smallest one.
#[derive(Debug, Clone)]
pub struct Naive<'a> {
    cnf: &'a Cnf,
    current: Vec<bool>,
    exhausted: bool,
    tried: u64,
}

impl<'a> Naive<'a> {
    pub fn new(cnf: &'a Cnf) -> Self {
        Self {
            cnf,
            current: vec![false; cnf.num_vars() as usize],
            exhausted: false,
            tried: 0,
        }
    }

    /// Tests one candidate. Returns `Some` once the verdict is known.
    pub fn step(&mut self) -> Option<SatResult> {
        if self.exhausted {
            return Some(SatResult::Unsat);
        }
        self.tried += 1;
        if self.cnf.clauses().iter().all(|c| self.clause_true(c)) {
            return Some(SatResult::Sat(Model::new(self.current.clone())));
        }
        if !advance(&mut self.current) {
            self.exhausted = true;
            return Some(SatResult::Unsat);
        }
        None
    }

    pub fn run(&mut self) -> SatResult {
        loop {
            if let Some(result) = self.step() {
                return result;
            }
        }
    }

    pub fn run_with_budget(&mut self, max_steps: u64) -> Option<SatResult> {
        for _ in 0..max_steps {
            if let Some(result) = self.step() {
                return Some(result);
            }
        }
        None
    }

    pub fn tried(&self) -> u64 {
        self.tried
    }

    fn clause_true(&self, clause: &[Lit]) -> bool {
        clause
            .iter()
            .any(|lit| self.current[lit.var as usize - 1] == lit.sign)
    }
}

// binary increment with the last variable as the low bit; false on wrap-around
fn advance(bits: &mut [bool]) -> bool {
    for bit in bits.iter_mut().rev() {
        if *bit {
            *bit = false;
        } else {
            *bit = true;
            return true;
        }
    }
    false
}
