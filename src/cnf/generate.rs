use anyhow::{Result, bail};
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::sat::Model;

use super::cnf::{Cnf, Lit};

/// Uniform random k-CNF; each clause draws `k` distinct variables with random signs.
pub fn random_kcnf(num_vars: u32, num_clauses: usize, k: usize, seed: u64) -> Result<Cnf> {
    check_width(num_vars, k)?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut cnf = Cnf::new(num_vars);
    for _ in 0..num_clauses {
        cnf.add_clause(random_clause(&mut rng, num_vars, k))?;
    }
    Ok(cnf)
}

/// Random k-CNF satisfied by a hidden assignment, which is returned alongside it.
pub fn planted_kcnf(
    num_vars: u32,
    num_clauses: usize,
    k: usize,
    seed: u64,
) -> Result<(Cnf, Model)> {
    check_width(num_vars, k)?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let hidden = (0..num_vars)
        .map(|_| rng.random::<bool>())
        .collect::<Vec<_>>();
    let hidden = Model::new(hidden);

    let mut cnf = Cnf::new(num_vars);
    for _ in 0..num_clauses {
        let mut clause = random_clause(&mut rng, num_vars, k);
        let satisfied = clause
            .iter()
            .any(|lit| hidden.value(lit.var) == Some(lit.sign));
        if !satisfied {
            // flip one literal so the hidden assignment satisfies it
            let idx = rng.random_range(0..clause.len());
            clause[idx] = clause[idx].neg();
        }
        cnf.add_clause(clause)?;
    }
    Ok((cnf, hidden))
}

fn check_width(num_vars: u32, k: usize) -> Result<()> {
    if k == 0 {
        bail!("clause width k must be >= 1");
    }
    if k > num_vars as usize {
        bail!("clause width {} exceeds variable count {}", k, num_vars);
    }
    Ok(())
}

fn random_clause(rng: &mut ChaCha8Rng, num_vars: u32, k: usize) -> Vec<Lit> {
    let mut vars = sample(rng, num_vars as usize, k)
        .into_iter()
        .map(|i| i as u32 + 1)
        .collect::<Vec<_>>();
    vars.sort_unstable();
    vars.into_iter()
        .map(|v| Lit::new(v, rng.random::<bool>()))
        .collect()
}
