use thiserror::Error;

/// Malformed formula input, detected before any search starts.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing header, expected: p cnf <vars> <clauses>")]
    MissingHeader,

    #[error("line {line}: invalid header '{text}', expected: p cnf <vars> <clauses>")]
    InvalidHeader { line: usize, text: String },

    #[error("line {line}: invalid literal '{token}'")]
    InvalidToken { line: usize, token: String },

    #[error("literal {lit} is outside variables 1..={num_vars}")]
    LiteralOutOfRange { lit: i64, num_vars: u32 },

    #[error("line {line}: clause is missing its terminating 0")]
    UnterminatedClause { line: usize },

    #[error("header declares {declared} clauses but {found} were read")]
    ClauseCountMismatch { declared: usize, found: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm '{0}', expected naive|dpll")]
pub struct InvalidAlgorithmSelector(pub String);
