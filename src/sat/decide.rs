use tracing::trace;

use crate::cnf::cnf::Lit;

use super::trail::Trail;

/// Branching policy: the highest-indexed unassigned variable, tried as true.
///
/// The fixed order makes models reproducible run to run; callers must only
/// decide when some variable is still unassigned.
pub fn pick_branch(trail: &Trail) -> Option<Lit> {
    trail.highest_unassigned().map(Lit::pos)
}

/// Commits the next branch as a decision. `None` means nothing was left to decide.
pub fn decide(trail: &mut Trail) -> Option<Lit> {
    let lit = pick_branch(trail)?;
    trail.commit(lit, true);
    trace!(lit = lit.to_dimacs(), level = trail.decision_level(), "decide");
    Some(lit)
}
