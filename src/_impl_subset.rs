use crate::{CubeList, CubeProblem};

/// Subset and equality tests between cube lists.
impl CubeProblem {
    /// Whether every minterm of `b` is covered by `a`, i.e. `b ⊆ a` as functions.
    ///
    /// Decided cube by cube through the cofactor-based coverage test, which is
    /// substantially faster than the subtract-based variant on typical workloads.
    pub fn is_subset(&mut self, a: &CubeList, b: &CubeList) -> bool {
        for pos in 0..b.len() {
            if b.is_deleted(pos) {
                continue;
            }
            if !self.is_cube_covered(a, b.cube(pos)) {
                return false;
            }
        }
        true
    }

    /// Subset test through subtraction: `b ⊆ a` exactly when `b \ a` is empty.
    /// Retained as a cross-check for [`CubeProblem::is_subset`].
    pub fn is_subset_with_subtract(&mut self, a: &CubeList, b: &CubeList) -> bool {
        let mut rest = b.clone();
        self.subtract(&mut rest, a, true);
        rest.is_function_empty()
    }

    /// Whether `a` and `b` denote the same Boolean function.
    pub fn is_equal(&mut self, a: &CubeList, b: &CubeList) -> bool {
        self.is_subset(a, b) && self.is_subset(b, a)
    }
}

#[cfg(test)]
mod tests {
    use crate::CubeProblem;

    #[test]
    fn subset_basics() {
        let mut problem = CubeProblem::new(3);
        let big = problem.list_from_str("1--\n01-");
        let small = problem.list_from_str("11-\n010");
        assert!(problem.is_subset(&big, &small));
        assert!(!problem.is_subset(&small, &big));
        assert!(problem.is_subset_with_subtract(&big, &small));
        assert!(!problem.is_subset_with_subtract(&small, &big));
    }

    #[test]
    fn subset_needs_the_union() {
        let mut problem = CubeProblem::new(2);
        // `--` is inside `1- ∪ 0-` but in neither cube alone.
        let halves = problem.list_from_str("1-\n0-");
        let universe = problem.universe_list();
        assert!(problem.is_subset(&halves, &universe));
        assert!(problem.is_equal(&halves, &universe));
    }

    #[test]
    fn empty_list_is_subset_of_everything() {
        let mut problem = CubeProblem::new(2);
        let empty = problem.new_list();
        let something = problem.list_from_str("10");
        assert!(problem.is_subset(&something, &empty));
        assert!(!problem.is_subset(&empty, &something));
    }
}
