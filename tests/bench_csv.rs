use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use cnfsat::bench::{BenchConfig, BenchRow, run_dataset, run_one};
use cnfsat::solver::Algorithm;

#[test]
fn benchmark_csv_has_expected_shape() {
    let root = temp_dataset_dir("bench_csv_shape");
    fs::create_dir_all(root.join("nested")).expect("mkdir");

    fs::write(root.join("sat.cnf"), "p cnf 2 2\n1 2 0\n-1 -2 0\n").expect("write sat");
    fs::write(root.join("nested/unsat.dimacs"), "p cnf 1 2\n1 0\n-1 0\n").expect("write unsat");
    fs::write(root.join("broken.cnf"), "p cnf 1 1\nx 0\n").expect("write broken");
    fs::write(root.join("notes.txt"), "not a formula").expect("write txt");

    let csv_path = root.join("results.csv");
    let cfg = BenchConfig {
        algorithm: Algorithm::Dpll,
        max_steps: None,
    };
    let rows = run_dataset(
        &root,
        cfg,
        Duration::from_millis(10_000),
        &csv_path,
        false,
    )
    .expect("run dataset");
    assert_eq!(rows.len(), 3);

    let statuses = rows.iter().map(|r| r.status.as_str()).collect::<Vec<_>>();
    assert_eq!(statuses, vec!["parse_error", "unsat", "sat"]);

    let csv_text = fs::read_to_string(&csv_path).expect("read csv");
    let mut lines = csv_text.lines();
    let header = lines.next().unwrap_or("");
    assert_eq!(header, BenchRow::csv_header());
    let data = lines.collect::<Vec<_>>();
    assert_eq!(data.len(), 3);

    for line in &data {
        let cols = line.split(',').collect::<Vec<_>>();
        assert_eq!(cols.len(), 11);
        assert_eq!(cols[2], "dpll");
        cols[3].parse::<u128>().expect("wall_ms");
    }
}

#[test]
fn run_one_is_deterministic_and_honours_budget() {
    let root = temp_dataset_dir("bench_budget");
    fs::create_dir_all(&root).expect("mkdir");
    let path = root.join("chain.cnf");
    fs::write(&path, "p cnf 4 2\n1 2 3 4 0\n-4 -3 0\n").expect("write");

    let cfg = BenchConfig {
        algorithm: Algorithm::Naive,
        max_steps: None,
    };
    let row1 = run_one(&path, cfg, Duration::from_millis(10_000));
    let row2 = run_one(&path, cfg, Duration::from_millis(10_000));
    assert_eq!(row1.status, "sat");
    assert_eq!(row1.steps, row2.steps);
    assert_eq!(row1.vars, Some(4));
    assert_eq!(row1.clauses, Some(2));

    let tight = BenchConfig {
        algorithm: Algorithm::Dpll,
        max_steps: Some(1),
    };
    let row = run_one(&path, tight, Duration::from_millis(10_000));
    assert_eq!(row.status, "unknown");
    assert_eq!(row.steps, Some(1));
}

fn temp_dataset_dir(tag: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    let t = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time")
        .as_nanos();
    p.push(format!("cnfsat_{}_{}", tag, t));
    p
}
