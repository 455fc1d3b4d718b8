use crate::cnf::cnf::Lit;

use super::Model;

/// Assignment state of the search: the trail of committed literals, the
/// per-variable values derived from it, and the positions of decisions.
///
/// The unassigned set is the complement of the trail's variables and is
/// read off `values`, so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trail {
    // indexed by variable, slot 0 unused
    values: Vec<Option<bool>>,
    entries: Vec<Lit>,
    // trail positions of decision literals, oldest first
    decisions: Vec<usize>,
}

impl Trail {
    pub fn new(num_vars: u32) -> Self {
        Self {
            values: vec![None; num_vars as usize + 1],
            entries: Vec::with_capacity(num_vars as usize),
            decisions: Vec::new(),
        }
    }

    pub fn num_vars(&self) -> u32 {
        (self.values.len() - 1) as u32
    }

    pub fn value(&self, var: u32) -> Option<bool> {
        self.values.get(var as usize).copied().flatten()
    }

    pub fn lit_value(&self, lit: Lit) -> Option<bool> {
        self.value(lit.var).map(|v| v == lit.sign)
    }

    pub fn is_true(&self, lit: Lit) -> bool {
        self.lit_value(lit) == Some(true)
    }

    pub fn is_assigned(&self, var: u32) -> bool {
        self.value(var).is_some()
    }

    pub fn commit(&mut self, lit: Lit, is_decision: bool) {
        debug_assert!(
            !self.is_assigned(lit.var),
            "variable {} committed twice",
            lit.var
        );
        if is_decision {
            self.decisions.push(self.entries.len());
        }
        self.values[lit.var as usize] = Some(lit.sign);
        self.entries.push(lit);
    }

    /// Drops the `decision_index`-th decision and every entry committed at or
    /// after it, returning that decision's literal.
    pub fn undo_to(&mut self, decision_index: usize) -> Option<Lit> {
        let pos = *self.decisions.get(decision_index)?;
        let decision = self.entries[pos];
        for lit in self.entries.drain(pos..) {
            self.values[lit.var as usize] = None;
        }
        self.decisions.truncate(decision_index);
        Some(decision)
    }

    pub fn entries(&self) -> &[Lit] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn decision_level(&self) -> usize {
        self.decisions.len()
    }

    pub fn decisions(&self) -> impl Iterator<Item = Lit> + '_ {
        self.decisions.iter().map(|&pos| self.entries[pos])
    }

    pub fn last_decision(&self) -> Option<Lit> {
        self.decisions.last().map(|&pos| self.entries[pos])
    }

    pub fn is_decision(&self, pos: usize) -> bool {
        self.decisions.binary_search(&pos).is_ok()
    }

    pub fn unassigned(&self) -> impl Iterator<Item = u32> + '_ {
        (1..=self.num_vars()).filter(|&v| !self.is_assigned(v))
    }

    pub fn highest_unassigned(&self) -> Option<u32> {
        (1..=self.num_vars()).rev().find(|&v| !self.is_assigned(v))
    }

    pub fn is_complete(&self) -> bool {
        self.entries.len() == self.num_vars() as usize
    }

    /// The assignment, once every variable is on the trail.
    pub fn model(&self) -> Option<Model> {
        self.values[1..]
            .iter()
            .copied()
            .collect::<Option<Vec<_>>>()
            .map(Model::new)
    }
}
