use crate::_test_util::{assert_complement_laws, assert_list_eq};
use crate::CubeProblem;

#[test]
fn mcc_prime_scenario() {
    let mut problem = CubeProblem::new(3);
    let mut list = problem.list_from_str("-11\n110\n11-\n0--");
    let original = list.clone();
    problem.multi_cube_containment(&mut list);

    // `110` must be gone, and the remaining cubes form an irredundant cover of
    // the same function.
    let strings = crate::_test_util::live_cube_strings(&problem, &list);
    assert!(!strings.contains(&"110".to_string()));
    assert!(problem.is_equal(&list, &original));
    for pos in 0..list.len() {
        assert!(!problem.is_cube_redundant(&list, pos));
    }
}

#[test]
fn complement_scenario_v6() {
    let mut problem = CubeProblem::new(6);
    let list = problem.list_from_str("1-1-11\n110011\n1-0-10\n1001-0");
    let complement = problem.complement(&list);
    assert!(complement.live_len() >= 1);
    assert_complement_laws(&mut problem, &list, &complement);
}

#[test]
fn tautology_scenario_v5() {
    let mut problem = CubeProblem::new(5);
    let list = problem.list_from_str("----1\n---10\n---00");
    assert!(problem.is_tautology(&list));

    // Dropping any one cube opens a hole.
    for skip in 0..3 {
        let mut partial = problem.new_list();
        for (pos, cube) in ["----1", "---10", "---00"].iter().enumerate() {
            if pos != skip {
                problem.add_cubes_from_str(&mut partial, cube);
            }
        }
        assert!(!problem.is_tautology(&partial));
    }
}

#[test]
fn complement_algorithms_agree_v4() {
    let mut problem = CubeProblem::new(4);
    let list = problem.list_from_str("-0-1\n1-0-\n-1--\n0--1");
    let by_subtract = problem.complement(&list);
    let by_cofactor = problem.complement_with_cofactor(&list);

    assert_complement_laws(&mut problem, &list, &by_subtract);
    assert_complement_laws(&mut problem, &list, &by_cofactor);
    assert!(problem.is_equal(&by_subtract, &by_cofactor));
}

#[test]
fn subset_duality() {
    let mut problem = CubeProblem::new(4);
    let a = problem.list_from_str("1---\n-01-");
    let b = problem.list_from_str("10--\n-011");
    // b ⊆ a, via both decision procedures.
    assert!(problem.is_subset(&a, &b));
    assert!(problem.is_subset_with_subtract(&a, &b));
    // a ⊄ b, via both decision procedures.
    assert!(!problem.is_subset(&b, &a));
    assert!(!problem.is_subset_with_subtract(&b, &a));
}

#[test]
fn union_after_subtract_restores_the_cover() {
    let mut problem = CubeProblem::new(4);
    let a = problem.list_from_str("11--\n--00\n0-1-");
    let b = problem.list_from_str("1-0-\n-110");
    let mut difference = a.clone();
    problem.subtract(&mut difference, &b, true);

    let mut union = difference.clone();
    union.add_all(&b);
    assert!(problem.is_subset(&union, &a));
}

#[test]
fn show_row_format() {
    let problem = CubeProblem::new(4);
    let list = problem.list_from_str("10-1\nx0--");
    assert_eq!(problem.show(&list), "0000 00 10-1\n0001 00 x0--\n");
}

#[test]
fn minimize_scenarios() {
    let mut problem = CubeProblem::new(3);

    // A four-minterm cover of `x_1` collapses to the single prime.
    let mut list = problem.list_from_str("110\n111\n011\n010");
    problem.minimize(&mut list);
    assert_list_eq(&problem, &list, &["-1-"]);

    // An already minimal cover is untouched.
    let mut list = problem.list_from_str("1-1\n0-0");
    problem.minimize(&mut list);
    assert_list_eq(&problem, &list, &["1-1", "0-0"]);
}
