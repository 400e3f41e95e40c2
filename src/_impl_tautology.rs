use crate::_impl_cube;
use crate::{CubeList, CubeProblem, MAX_RECURSION_DEPTH};
use log::trace;

/// The tautology decision procedure.
impl CubeProblem {
    /// Whether the union of the live cubes of `list` covers the whole Boolean space.
    ///
    /// Decided by recursive Shannon expansion: the list is split on the most
    /// frequent binate variable until every branch is unate, where the answer is
    /// determined by the presence of the all-dontcare cube.
    ///
    /// *Panics:* the recursion is bounded by
    /// [`MAX_RECURSION_DEPTH`](crate::MAX_RECURSION_DEPTH); exceeding it indicates a
    /// runaway split and is fatal.
    pub fn is_tautology(&mut self, list: &CubeList) -> bool {
        self.is_tautology_rec(list, 0)
    }

    fn is_tautology_rec(&mut self, list: &CubeList, depth: usize) -> bool {
        assert!(depth < MAX_RECURSION_DEPTH, "Tautology recursion too deep.");
        if list.is_function_empty() {
            return false;
        }

        self.compute_counts(list);
        match self.max_binate_split_var() {
            None => {
                // A unate list is a tautology exactly when it contains the
                // universal cube.
                list.live_positions()
                    .any(|pos| _impl_cube::is_tautology_cube(list.cube(pos)))
            }
            Some(var) => {
                trace!(
                    "tautology: depth {}, split var {}, size {}",
                    depth,
                    var,
                    list.live_len()
                );
                let negative = self.cofactor_by_var(list, var, false);
                if !self.is_tautology_rec(&negative, depth + 1) {
                    return false;
                }
                let positive = self.cofactor_by_var(list, var, true);
                self.is_tautology_rec(&positive, depth + 1)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::CubeProblem;

    #[test]
    fn empty_list_is_not_a_tautology() {
        let mut problem = CubeProblem::new(3);
        let list = problem.new_list();
        assert!(!problem.is_tautology(&list));
    }

    #[test]
    fn universal_cube_is_a_tautology() {
        let mut problem = CubeProblem::new(3);
        let list = problem.universe_list();
        assert!(problem.is_tautology(&list));
    }

    #[test]
    fn complementary_halves_are_a_tautology() {
        let mut problem = CubeProblem::new(2);
        let list = problem.list_from_str("1-\n0-");
        assert!(problem.is_tautology(&list));

        // The same split, seen through the cofactors of variable 0.
        let positive = problem.cofactor_by_var(&list, 0, true);
        let negative = problem.cofactor_by_var(&list, 0, false);
        assert!(problem.is_tautology(&positive));
        assert!(problem.is_tautology(&negative));
    }

    #[test]
    fn classic_suffix_cover() {
        let mut problem = CubeProblem::new(5);
        let list = problem.list_from_str("----1\n---10\n---00");
        assert!(problem.is_tautology(&list));
    }

    #[test]
    fn missing_minterm_is_detected() {
        let mut problem = CubeProblem::new(3);
        let list = problem.list_from_str("1--\n01-\n001");
        // `000` is not covered.
        assert!(!problem.is_tautology(&list));
    }

    #[test]
    fn unate_non_tautology() {
        let mut problem = CubeProblem::new(3);
        let list = problem.list_from_str("1--\n-1-\n--1");
        assert!(!problem.is_tautology(&list));
    }
}
