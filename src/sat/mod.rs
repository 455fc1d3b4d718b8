pub mod backtrack;
pub mod decide;
pub mod dpll;
pub mod naive;
pub mod propagate;
pub mod trail;

use crate::cnf::cnf::Cnf;

/// A total assignment: one truth value per variable, variable 1 first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    values: Vec<bool>,
}

impl Model {
    pub fn new(values: Vec<bool>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn value(&self, var: u32) -> Option<bool> {
        let idx = (var as usize).checked_sub(1)?;
        self.values.get(idx).copied()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.values
    }

    /// Yields `(var, value)` in increasing variable order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, bool)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &v)| (i as u32 + 1, v))
    }

    /// Same values in the variable-indexed layout `Cnf::eval_*` expects.
    pub fn to_partial(&self) -> Vec<Option<bool>> {
        std::iter::once(None)
            .chain(self.values.iter().map(|&v| Some(v)))
            .collect()
    }

    pub fn satisfies(&self, cnf: &Cnf) -> bool {
        self.len() == cnf.num_vars() as usize
            && cnf.eval_formula_partial(&self.to_partial()) == Some(true)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SatResult {
    Sat(Model),
    Unsat,
}

impl SatResult {
    pub fn is_sat(&self) -> bool {
        matches!(self, SatResult::Sat(_))
    }

    pub fn model(&self) -> Option<&Model> {
        match self {
            SatResult::Sat(m) => Some(m),
            SatResult::Unsat => None,
        }
    }
}
