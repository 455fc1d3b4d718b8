use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Lit {
    pub var: u32,
    pub sign: bool,
}

impl Lit {
    pub fn new(var: u32, sign: bool) -> Self {
        Self { var, sign }
    }

    pub fn pos(var: u32) -> Self {
        Self::new(var, true)
    }

    pub fn neg(self) -> Self {
        Self {
            var: self.var,
            sign: !self.sign,
        }
    }

    /// Maps a signed DIMACS integer to a literal; `0` is the clause sentinel, not a literal.
    pub fn from_dimacs(value: i64) -> Option<Self> {
        if value == 0 {
            return None;
        }
        let var = u32::try_from(value.unsigned_abs()).ok()?;
        Some(Self::new(var, value > 0))
    }

    pub fn to_dimacs(self) -> i64 {
        let v = i64::from(self.var);
        if self.sign { v } else { -v }
    }
}

/// An immutable conjunction of clauses over variables `1..=num_vars`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cnf {
    num_vars: u32,
    clauses: Vec<Vec<Lit>>,
}

impl Cnf {
    pub fn new(num_vars: u32) -> Self {
        Self {
            num_vars,
            clauses: Vec::new(),
        }
    }

    /// Builds a formula from signed DIMACS clauses, validating every literal.
    pub fn from_dimacs_clauses(num_vars: u32, clauses: &[Vec<i64>]) -> Result<Self, ParseError> {
        let mut cnf = Self::new(num_vars);
        for clause in clauses {
            let lits = clause
                .iter()
                .map(|&x| {
                    Lit::from_dimacs(x).ok_or(ParseError::LiteralOutOfRange { lit: x, num_vars })
                })
                .collect::<Result<Vec<_>, _>>()?;
            cnf.add_clause(lits)?;
        }
        Ok(cnf)
    }

    pub fn add_clause(&mut self, clause: Vec<Lit>) -> Result<(), ParseError> {
        if let Some(bad) = clause
            .iter()
            .find(|lit| lit.var == 0 || lit.var > self.num_vars)
        {
            return Err(ParseError::LiteralOutOfRange {
                lit: bad.to_dimacs(),
                num_vars: self.num_vars,
            });
        }
        self.clauses.push(clause);
        Ok(())
    }

    pub fn num_vars(&self) -> u32 {
        self.num_vars
    }

    pub fn clauses(&self) -> &[Vec<Lit>] {
        &self.clauses
    }

    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    pub fn max_clause_width(&self) -> usize {
        self.clauses.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn has_empty_clause(&self) -> bool {
        self.clauses.iter().any(Vec::is_empty)
    }

    /// `assignment` is indexed by variable; slot 0 is unused.
    pub fn eval_lit_partial(lit: Lit, assignment: &[Option<bool>]) -> Option<bool> {
        let var = lit.var as usize;
        if var >= assignment.len() {
            return None;
        }
        assignment[var].map(|v| if lit.sign { v } else { !v })
    }

    pub fn eval_clause_partial(clause: &[Lit], assignment: &[Option<bool>]) -> Option<bool> {
        let mut any_unknown = false;
        for &lit in clause {
            match Self::eval_lit_partial(lit, assignment) {
                Some(true) => return Some(true),
                Some(false) => {}
                None => any_unknown = true,
            }
        }
        if any_unknown { None } else { Some(false) }
    }

    pub fn eval_formula_partial(&self, assignment: &[Option<bool>]) -> Option<bool> {
        let mut all_true = true;
        for clause in &self.clauses {
            match Self::eval_clause_partial(clause, assignment) {
                Some(true) => {}
                Some(false) => return Some(false),
                None => all_true = false,
            }
        }
        if all_true { Some(true) } else { None }
    }
}
