//!
//! Seeded random workloads, ported from the engine's original self-test harness.
//! Random tautologies are disjoint partitions of the Boolean space by
//! construction, which gives every check below a known expected outcome without
//! an independent oracle.

use crate::_test_util::assert_complement_laws;
use crate::CubeProblem;
use rand::prelude::StdRng;
use rand::SeedableRng;

#[test]
fn random_tautologies_across_widths() {
    for var_cnt in 17..=25 {
        let mut problem = CubeProblem::new(var_cnt);
        let mut rng = StdRng::seed_from_u64(var_cnt as u64);

        let tautology = problem.random_tautology(&mut rng, var_cnt + 2, 0);
        assert!(problem.is_tautology(&tautology));

        let mutated = problem.random_tautology(&mut rng, var_cnt + 2, var_cnt);
        assert!(!problem.is_tautology(&mutated));
    }
}

#[test]
fn minimizing_a_random_tautology_yields_the_universe() {
    for var_cnt in [17, 21, 25] {
        let mut problem = CubeProblem::new(var_cnt);
        let mut rng = StdRng::seed_from_u64(7 + var_cnt as u64);
        let mut list = problem.random_tautology(&mut rng, var_cnt + 2, 0);
        problem.minimize(&mut list);
        assert_eq!(list.len(), 1);
        assert_eq!(
            problem.cube_to_string(&list, 0),
            "-".repeat(var_cnt)
        );
    }
}

#[test]
fn subtract_and_complement_laws_on_random_lists() {
    for var_cnt in [17, 19, 21] {
        let mut problem = CubeProblem::new(var_cnt);
        let mut rng = StdRng::seed_from_u64(100 + var_cnt as u64);

        let tautology = problem.random_tautology(&mut rng, var_cnt + 2, 0);
        let random = problem.random_tautology(&mut rng, var_cnt + 2, var_cnt);

        // Subtracting a tautology leaves nothing.
        let mut rest = tautology.clone();
        problem.subtract(&mut rest, &tautology, true);
        assert!(rest.is_function_empty());

        // The complement of a non-tautology is non-empty and obeys both laws.
        let complement = problem.complement(&random);
        assert!(!complement.is_function_empty());
        assert_complement_laws(&mut problem, &random, &complement);

        // Subtracting from a tautological cover instead of the universal cube
        // computes the same complement.
        let mut by_cover = tautology.clone();
        problem.subtract(&mut by_cover, &random, true);
        assert!(problem.is_equal(&by_cover, &complement));
    }
}

#[test]
fn cofactor_complement_agrees_on_random_lists() {
    for seed in [3u64, 4] {
        let mut problem = CubeProblem::new(17);
        let mut rng = StdRng::seed_from_u64(seed);
        let random = problem.random_tautology(&mut rng, 19, 17);

        let by_subtract = problem.complement(&random);
        let by_cofactor = problem.complement_with_cofactor(&random);
        assert_complement_laws(&mut problem, &random, &by_cofactor);
        assert!(problem.is_equal(&by_subtract, &by_cofactor));
    }
}

#[test]
fn partition_cardinalities_add_up() {
    let mut problem = CubeProblem::new(18);
    let mut rng = StdRng::seed_from_u64(42);
    let partition = problem.random_tautology(&mut rng, 20, 0);

    // The construction keeps the cubes disjoint, so the per-cube counts of the
    // partition must sum to the whole space.
    let mut total = num_bigint::BigInt::from(0u32);
    for pos in 0..partition.len() {
        let mut single = problem.new_list();
        single.push_copy(partition.cube(pos));
        total += problem.exact_cardinality(&single);
    }
    assert_eq!(total, num_bigint::BigInt::from(1u32) << 18);
}

#[test]
fn subset_procedures_agree_on_random_lists() {
    let mut problem = CubeProblem::new(17);
    let mut rng = StdRng::seed_from_u64(11);
    let a = problem.random_tautology(&mut rng, 19, 17);
    let b = problem.random_tautology(&mut rng, 19, 17);
    let mut meet = problem.new_list();
    problem.intersection_into(&mut meet, &a, &b);

    for (x, y) in [(&a, &meet), (&meet, &a), (&b, &meet), (&meet, &b), (&a, &b)] {
        assert_eq!(
            problem.is_subset(x, y),
            problem.is_subset_with_subtract(x, y)
        );
    }
    // The intersection is always below both operands.
    assert!(problem.is_subset(&a, &meet));
    assert!(problem.is_subset(&b, &meet));
}
