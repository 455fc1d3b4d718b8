use tracing::trace;

use crate::cnf::cnf::Lit;

use super::trail::Trail;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backtrack {
    /// The most recent decision was undone and its complement committed as forced.
    Flipped(Lit),
    /// No decision is left to revise.
    Exhausted,
}

/// Chronological backtracking: unwinds the trail through the latest decision
/// and pins its complement as a non-decision literal.
pub fn backtrack(trail: &mut Trail) -> Backtrack {
    let Some(top) = trail.decision_level().checked_sub(1) else {
        return Backtrack::Exhausted;
    };
    let Some(decision) = trail.undo_to(top) else {
        return Backtrack::Exhausted;
    };
    let flipped = decision.neg();
    trail.commit(flipped, false);
    trace!(
        lit = flipped.to_dimacs(),
        level = trail.decision_level(),
        "backtrack"
    );
    Backtrack::Flipped(flipped)
}
