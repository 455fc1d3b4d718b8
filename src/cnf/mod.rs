pub mod cnf;
pub mod dimacs;
pub mod generate;

pub use cnf::{Cnf, Lit};
