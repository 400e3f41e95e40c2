use crate::{CubeList, CubeProblem};

/// Collect the live cubes of `list` as sorted strings, so lists can be compared
/// without depending on cube order.
pub fn live_cube_strings(problem: &CubeProblem, list: &CubeList) -> Vec<String> {
    let mut strings: Vec<String> = (0..list.len())
        .filter(|&pos| !list.is_deleted(pos))
        .map(|pos| problem.cube_to_string(list, pos))
        .collect();
    strings.sort();
    strings
}

/// Assert that the live cubes of `list` are exactly `expected`, up to order.
pub fn assert_list_eq(problem: &CubeProblem, list: &CubeList, expected: &[&str]) {
    let mut expected: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
    expected.sort();
    assert_eq!(live_cube_strings(problem, list), expected);
}

/// Assert the two complement laws: the union of `list` and `complement` is a
/// tautology, and their intersection is empty.
pub fn assert_complement_laws(
    problem: &mut CubeProblem,
    list: &CubeList,
    complement: &CubeList,
) {
    let mut union = list.clone();
    union.add_all(complement);
    assert!(problem.is_tautology(&union));

    let mut meet = problem.new_list();
    problem.intersection_into(&mut meet, list, complement);
    assert!(meet.is_function_empty());
}
