use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::cnf::dimacs::load_dimacs;
use crate::sat::SatResult;
use crate::solver::{Algorithm, SolveOptions, solve_with_options};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    pub algorithm: Algorithm,
    pub max_steps: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchRow {
    pub path: String,
    pub status: String,
    pub backend: String,
    pub wall_ms: Option<u128>,
    pub decisions: Option<u64>,
    pub conflicts: Option<u64>,
    pub propagations: Option<u64>,
    pub steps: Option<u64>,
    pub vars: Option<u32>,
    pub clauses: Option<usize>,
    pub file_bytes: Option<u64>,
}

impl BenchRow {
    pub fn csv_header() -> &'static str {
        "path,status,backend,wall_ms,decisions,conflicts,propagations,steps,vars,clauses,file_bytes"
    }

    pub fn to_csv_line(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},{},{},{},{}",
            esc_csv(&self.path),
            self.status,
            self.backend,
            opt(self.wall_ms),
            opt(self.decisions),
            opt(self.conflicts),
            opt(self.propagations),
            opt(self.steps),
            opt(self.vars),
            opt(self.clauses),
            opt(self.file_bytes),
        )
    }

    fn empty(path: &Path, status: &str, cfg: BenchConfig, file_bytes: Option<u64>) -> Self {
        Self {
            path: path.to_string_lossy().to_string(),
            status: status.to_string(),
            backend: cfg.algorithm.as_str().to_string(),
            wall_ms: None,
            decisions: None,
            conflicts: None,
            propagations: None,
            steps: None,
            vars: None,
            clauses: None,
            file_bytes,
        }
    }
}

/// Solves one file on a worker thread, giving up after `timeout` of wall time.
///
/// A timed-out worker is detached, not killed; it finishes in the background.
pub fn run_one(path: &Path, cfg: BenchConfig, timeout: Duration) -> BenchRow {
    let file_bytes = fs::metadata(path).ok().map(|m| m.len());
    let start = Instant::now();
    let p = path.to_path_buf();
    let (tx, rx) = mpsc::channel();

    std::thread::spawn(move || {
        let row = run_one_inner(&p, cfg, file_bytes);
        let _ = tx.send(row);
    });

    let mut row = match rx.recv_timeout(timeout) {
        Ok(row) => row,
        Err(mpsc::RecvTimeoutError::Timeout) => {
            warn!(path = %path.display(), "timed out");
            BenchRow::empty(path, "timeout", cfg, file_bytes)
        }
        Err(mpsc::RecvTimeoutError::Disconnected) => {
            BenchRow::empty(path, "internal_error", cfg, file_bytes)
        }
    };
    row.wall_ms = Some(start.elapsed().as_millis());
    row
}

pub fn run_dataset(
    dir: &Path,
    cfg: BenchConfig,
    timeout: Duration,
    csv_path: &Path,
    progress: bool,
) -> std::io::Result<Vec<BenchRow>> {
    let paths = discover_paths(dir)?;
    info!(dir = %dir.display(), files = paths.len(), "starting dataset run");
    let mut csv = File::create(csv_path)?;
    writeln!(csv, "{}", BenchRow::csv_header())?;
    csv.flush()?;

    let mut rows = Vec::new();
    for path in paths {
        let row = run_one(&path, cfg, timeout);
        if progress {
            println!(
                "path={} status={} wall_ms={} decisions={}",
                row.path,
                row.status,
                row.wall_ms.unwrap_or_default(),
                row.decisions.unwrap_or_default()
            );
        }
        writeln!(csv, "{}", row.to_csv_line())?;
        csv.flush()?;
        rows.push(row);
    }

    Ok(rows)
}

fn run_one_inner(path: &Path, cfg: BenchConfig, file_bytes: Option<u64>) -> BenchRow {
    let cnf = match load_dimacs(path) {
        Ok(v) => v,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "parse failed");
            return BenchRow::empty(path, "parse_error", cfg, file_bytes);
        }
    };

    let report = solve_with_options(
        &cnf,
        &SolveOptions {
            algorithm: cfg.algorithm,
            max_steps: cfg.max_steps,
        },
    );

    let status = match &report.result {
        Some(SatResult::Sat(model)) if model.satisfies(&cnf) => "sat",
        Some(SatResult::Sat(_)) => "internal_error",
        Some(SatResult::Unsat) => "unsat",
        None => "unknown",
    };

    let mut row = BenchRow::empty(path, status, cfg, file_bytes);
    row.decisions = Some(report.stats.decisions);
    row.conflicts = Some(report.stats.conflicts);
    row.propagations = Some(report.stats.propagations);
    row.steps = Some(report.stats.steps);
    row.vars = Some(cnf.num_vars());
    row.clauses = Some(cnf.num_clauses());
    row
}

fn discover_paths(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut out = Vec::<PathBuf>::new();
    collect_paths(dir, &mut out)?;
    out.sort();
    Ok(out)
}

fn collect_paths(dir: &Path, out: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let p = entry.path();
        if p.is_dir() {
            collect_paths(&p, out)?;
            continue;
        }
        if is_cnf_file(&p) {
            out.push(p);
        }
    }
    Ok(())
}

fn is_cnf_file(path: &Path) -> bool {
    let ext = path.extension().and_then(|x| x.to_str()).unwrap_or("");
    ext == "cnf" || ext == "dimacs"
}

fn opt<T: ToString>(v: Option<T>) -> String {
    v.map(|x| x.to_string()).unwrap_or_default()
}

fn esc_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::esc_csv;

    #[test]
    fn csv_escaping() {
        assert_eq!(esc_csv("plain.cnf"), "plain.cnf");
        assert_eq!(esc_csv("a,b.cnf"), "\"a,b.cnf\"");
        assert_eq!(esc_csv("q\"x"), "\"q\"\"x\"");
    }
}
