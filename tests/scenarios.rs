use cnfsat::cnf::cnf::Cnf;
use cnfsat::cnf::dimacs::parse_dimacs_str;
use cnfsat::report::render_result;
use cnfsat::sat::{SatResult, dpll, naive};
use cnfsat::solver::{Algorithm, SolveOptions, solve_with_options};

fn both(cnf: &Cnf) -> (SatResult, SatResult) {
    (dpll::solve(cnf), naive::solve(cnf))
}

#[test]
fn two_var_exclusive_or_is_sat() {
    let cnf = parse_dimacs_str("p cnf 2 2\n1 2 0\n-1 -2 0\n").expect("parse");
    let (d, n) = both(&cnf);
    // x2 is decided true first, which forces x1 false
    assert_eq!(render_result(&d), "sat\n1: false\n2: true\n");
    assert!(n.model().is_some_and(|m| m.satisfies(&cnf)));
}

#[test]
fn contradicting_units_are_unsat() {
    let cnf = parse_dimacs_str("p cnf 1 2\n1 0\n-1 0\n").expect("parse");
    let (d, n) = both(&cnf);
    assert_eq!(d, SatResult::Unsat);
    assert_eq!(n, SatResult::Unsat);
    assert_eq!(render_result(&d), "unsat\n");
}

#[test]
fn forcing_chain_needs_no_decisions() {
    let cnf = parse_dimacs_str("p cnf 3 3\n1 0\n-1 2 0\n-2 3 0\n").expect("parse");
    let report = solve_with_options(&cnf, &SolveOptions::default());
    let result = report.result.expect("no budget set");
    assert_eq!(render_result(&result), "sat\n1: true\n2: true\n3: true\n");
    assert_eq!(report.stats.decisions, 0);
    assert_eq!(report.stats.conflicts, 0);
    assert_eq!(report.stats.propagations, 3);
}

#[test]
fn free_variable_is_still_reported() {
    let cnf = parse_dimacs_str("p cnf 2 1\n1 0\n").expect("parse");
    let (d, n) = both(&cnf);
    let text = render_result(&d);
    assert!(text.starts_with("sat\n1: true\n2: "));
    assert_eq!(text.lines().count(), 3);
    assert_eq!(n.model().map(|m| m.len()), Some(2));
}

#[test]
fn empty_clause_is_unsat() {
    let cnf = parse_dimacs_str("p cnf 3 2\n1 2 3 0\n0\n").expect("parse");
    let (d, n) = both(&cnf);
    assert_eq!(d, SatResult::Unsat);
    assert_eq!(n, SatResult::Unsat);
}

#[test]
fn empty_formula_is_sat() {
    for vars in [0u32, 1, 5] {
        let cnf = Cnf::new(vars);
        let (d, n) = both(&cnf);
        assert_eq!(d.model().map(|m| m.len()), Some(vars as usize));
        assert_eq!(n.model().map(|m| m.len()), Some(vars as usize));
    }
}

#[test]
fn pigeonhole_three_into_two_is_unsat() {
    // p_ij: pigeon i in hole j, var = 2*(i-1) + j
    let src = "\
p cnf 6 9
1 2 0
3 4 0
5 6 0
-1 -3 0
-1 -5 0
-3 -5 0
-2 -4 0
-2 -6 0
-4 -6 0
";
    let cnf = parse_dimacs_str(src).expect("parse");
    let report = solve_with_options(&cnf, &SolveOptions::default());
    assert_eq!(report.result, Some(SatResult::Unsat));
    assert!(report.stats.conflicts >= 1);

    let naive_report = solve_with_options(
        &cnf,
        &SolveOptions {
            algorithm: Algorithm::Naive,
            max_steps: None,
        },
    );
    assert_eq!(naive_report.result, Some(SatResult::Unsat));
    assert_eq!(naive_report.stats.steps, 64);
}

#[test]
fn step_budget_yields_no_verdict() {
    let cnf = parse_dimacs_str("p cnf 3 1\n1 2 3 0\n").expect("parse");
    for algorithm in [Algorithm::Naive, Algorithm::Dpll] {
        let report = solve_with_options(
            &cnf,
            &SolveOptions {
                algorithm,
                max_steps: Some(1),
            },
        );
        assert_eq!(report.result, None, "{algorithm}");
    }
}
