use crate::{CubeList, CubeProblem};
use log::debug;

/// The heuristic "widen-and-trim" minimiser.
impl CubeProblem {
    /// Minimise `list` in place while preserving the denoted function:
    ///
    /// 1. single-cube containment,
    /// 2. compute the off-set as the complement of the list,
    /// 3. widen every cube into a prime implicant with respect to that off-set,
    /// 4. single-cube containment again (expansion creates subsumptions),
    /// 5. multi-cube containment (drop now-redundant cubes).
    ///
    /// The result is SCC- and MCC-free and every cube is prime relative to the
    /// off-set computed in step 2. The heuristic does not search for alternative
    /// prime covers, so global minimality is not guaranteed.
    pub fn minimize(&mut self, list: &mut CubeList) {
        self.single_cube_containment(list);
        debug!("minimize: after scc {}", list.len());

        let off = self.complement(list);
        debug!("minimize: off-set size {}", off.len());

        self.expand_with_off_set(list, &off);
        self.single_cube_containment(list);
        self.multi_cube_containment(list);
        debug!("minimize: final size {}", list.len());
    }
}

#[cfg(test)]
mod tests {
    use crate::_test_util::assert_list_eq;
    use crate::CubeProblem;

    #[test]
    fn minimize_collapses_split_pairs() {
        let mut problem = CubeProblem::new(3);
        let mut list = problem.list_from_str("110\n111\n10-\n0--");
        let original = list.clone();
        problem.minimize(&mut list);
        assert!(problem.is_equal(&list, &original));
        // 11- ∪ 10- ∪ 0-- is 1-- ∪ 0--, and each cube expands to the universe.
        assert_list_eq(&problem, &list, &["---"]);
    }

    #[test]
    fn minimize_keeps_irredundant_covers() {
        let mut problem = CubeProblem::new(3);
        let mut list = problem.list_from_str("110\n011");
        let original = list.clone();
        problem.minimize(&mut list);
        assert!(problem.is_equal(&list, &original));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn minimize_prime_example() {
        let mut problem = CubeProblem::new(4);
        let mut list = problem.list_from_str("1-0-\n-011\n00--");
        let original = list.clone();
        problem.minimize(&mut list);
        assert!(problem.is_equal(&list, &original));
        // No cube may have become wider than the off-set allows; a second pass
        // must be a fixed point.
        let once = problem.show(&list);
        problem.minimize(&mut list);
        assert_eq!(problem.show(&list), once);
    }
}
