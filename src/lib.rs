//! Propositional satisfiability over CNF formulas: a DIMACS front end, a
//! brute-force oracle and a chronological-backtracking DPLL search.

pub mod bench;
pub mod cnf;
pub mod error;
pub mod logging;
pub mod report;
pub mod sat;
pub mod solver;
