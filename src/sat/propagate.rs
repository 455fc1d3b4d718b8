use tracing::trace;

use crate::cnf::cnf::{Cnf, Lit};

use super::trail::Trail;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    /// A full sweep found no unit clause.
    Fixpoint,
    /// The clause at this index has every literal false.
    Conflict { clause: usize },
}

/// Commits the open literal of every unit clause, sweeping the formula in
/// clause order until a sweep changes nothing or a clause is falsified.
///
/// Clauses with a true literal are skipped; the satisfied set is recomputed
/// from the trail on every sweep rather than stored.
pub fn unit_propagate(cnf: &Cnf, trail: &mut Trail) -> Propagation {
    loop {
        let mut changed = false;

        for (idx, clause) in cnf.clauses().iter().enumerate() {
            match classify(clause, trail) {
                ClauseState::Satisfied | ClauseState::Open => {}
                ClauseState::Falsified => {
                    trace!(clause = idx, "conflict");
                    return Propagation::Conflict { clause: idx };
                }
                ClauseState::Unit(lit) => {
                    trace!(lit = lit.to_dimacs(), clause = idx, "forced");
                    trail.commit(lit, false);
                    changed = true;
                }
            }
        }

        if !changed {
            return Propagation::Fixpoint;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClauseState {
    Satisfied,
    Falsified,
    Unit(Lit),
    Open,
}

fn classify(clause: &[Lit], trail: &Trail) -> ClauseState {
    let mut open_count = 0usize;
    let mut last_open = None;

    for &lit in clause {
        match trail.lit_value(lit) {
            Some(true) => return ClauseState::Satisfied,
            Some(false) => {}
            None => {
                open_count += 1;
                last_open = Some(lit);
            }
        }
    }

    match (open_count, last_open) {
        (0, _) => ClauseState::Falsified,
        (1, Some(lit)) => ClauseState::Unit(lit),
        _ => ClauseState::Open,
    }
}
