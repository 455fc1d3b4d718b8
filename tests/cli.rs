use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn cnfsat(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cnfsat"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run cnfsat")
}

fn write_temp(tag: &str, contents: &str) -> PathBuf {
    let t = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time")
        .as_nanos();
    let path = std::env::temp_dir().join(format!("cnfsat_cli_{}_{}.cnf", tag, t));
    fs::write(&path, contents).expect("write cnf");
    path
}

#[test]
fn prints_sat_assignment() {
    let path = write_temp("sat", "p cnf 2 2\n1 2 0\n-1 -2 0\n");
    for algorithm in ["naive", "dpll"] {
        let out = cnfsat(&[path.to_str().expect("utf8 path"), algorithm]);
        assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
        assert_eq!(String::from_utf8_lossy(&out.stdout), "sat\n1: false\n2: true\n");
    }
}

#[test]
fn prints_unsat() {
    let path = write_temp("unsat", "p cnf 1 2\n1 0\n-1 0\n");
    let out = cnfsat(&[path.to_str().expect("utf8 path"), "dpll"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "unsat\n");
}

#[test]
fn invalid_selector_is_a_usage_error() {
    let path = write_temp("selector", "p cnf 1 1\n1 0\n");
    let out = cnfsat(&[path.to_str().expect("utf8 path"), "cdcl"]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("naive|dpll"), "{stderr}");
    assert!(!stderr.contains("panicked"));
}

#[test]
fn missing_file_fails_cleanly() {
    let out = cnfsat(&["/nonexistent/cnfsat/input.cnf", "dpll"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("failed to load"), "{stderr}");
    assert!(!stderr.contains("panicked"));
}

#[test]
fn malformed_input_fails_cleanly() {
    let path = write_temp("malformed", "p cnf 2 1\n1 -3 0\n");
    let out = cnfsat(&[path.to_str().expect("utf8 path"), "naive"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("outside variables"));
}

#[test]
fn wrong_argument_count_is_a_usage_error() {
    let out = cnfsat(&["only-one-arg.cnf"]);
    assert_eq!(out.status.code(), Some(2));
}
