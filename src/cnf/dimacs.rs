use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::ParseError;

use super::cnf::{Cnf, Lit};

pub fn parse_dimacs_str(s: &str) -> Result<Cnf, ParseError> {
    parse_dimacs_reader(std::io::Cursor::new(s.as_bytes()))
}

pub fn load_dimacs<P: AsRef<Path>>(path: P) -> Result<Cnf, ParseError> {
    let file = File::open(path)?;
    parse_dimacs_reader(BufReader::new(file))
}

pub fn parse_dimacs_reader<R: BufRead>(r: R) -> Result<Cnf, ParseError> {
    let mut body: Option<(Cnf, usize)> = None;
    let mut pending = Vec::<Lit>::new();
    let mut last_line = 0usize;

    for (idx, line) in r.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        let clean = line.trim();
        if clean.is_empty() || clean.starts_with('c') {
            continue;
        }

        if body.is_none() {
            body = Some(parse_header(clean, line_no)?);
            continue;
        }
        let Some((cnf, _)) = body.as_mut() else {
            continue;
        };

        // SATLIB files end the clause list with a '%' line
        if clean.starts_with('%') {
            break;
        }

        let num_vars = cnf.num_vars();
        for token in clean.split_whitespace() {
            let value = token
                .parse::<i64>()
                .map_err(|_| ParseError::InvalidToken {
                    line: line_no,
                    token: token.to_owned(),
                })?;
            if value == 0 {
                cnf.add_clause(std::mem::take(&mut pending))?;
                continue;
            }
            let lit = Lit::from_dimacs(value)
                .filter(|l| l.var <= num_vars)
                .ok_or(ParseError::LiteralOutOfRange {
                    lit: value,
                    num_vars,
                })?;
            pending.push(lit);
        }
        last_line = line_no;
    }

    let Some((cnf, declared)) = body else {
        return Err(ParseError::MissingHeader);
    };
    if !pending.is_empty() {
        return Err(ParseError::UnterminatedClause { line: last_line });
    }
    if cnf.num_clauses() != declared {
        return Err(ParseError::ClauseCountMismatch {
            declared,
            found: cnf.num_clauses(),
        });
    }
    Ok(cnf)
}

fn parse_header(line: &str, line_no: usize) -> Result<(Cnf, usize), ParseError> {
    if !line.starts_with('p') {
        return Err(ParseError::MissingHeader);
    }
    let invalid = || ParseError::InvalidHeader {
        line: line_no,
        text: line.to_owned(),
    };
    let parts = line.split_whitespace().collect::<Vec<_>>();
    if parts.len() != 4 || parts[0] != "p" || parts[1] != "cnf" {
        return Err(invalid());
    }
    let num_vars = parts[2].parse::<u32>().map_err(|_| invalid())?;
    let num_clauses = parts[3].parse::<usize>().map_err(|_| invalid())?;
    Ok((Cnf::new(num_vars), num_clauses))
}

pub fn to_dimacs(cnf: &Cnf) -> String {
    let mut out = String::new();
    out.push_str(&format!("p cnf {} {}\n", cnf.num_vars(), cnf.num_clauses()));
    for clause in cnf.clauses() {
        for &lit in clause {
            out.push_str(&format!("{} ", lit.to_dimacs()));
        }
        out.push_str("0\n");
    }
    out
}

pub fn write_dimacs<P: AsRef<Path>>(path: P, cnf: &Cnf) -> std::io::Result<()> {
    std::fs::write(path, to_dimacs(cnf))
}
