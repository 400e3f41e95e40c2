use crate::_impl_cube;
use crate::{CubeList, CubeProblem};

/// Containment sweeps: removal of cubes covered by a single other cube (SCC) or by
/// the union of all other cubes (MCC), plus the underlying coverage tests.
impl CubeProblem {
    /// Single-cube containment: remove every cube that is a subset of some other
    /// live cube, and one of every equal pair (the lower index survives). Ends with
    /// a purge, so the result carries no tombstones.
    pub fn single_cube_containment(&self, list: &mut CubeList) {
        // A cube can only be contained in a cube binding at most as many variables;
        // comparing the counts first skips most of the quadratic subset tests.
        let var_cnt_list: Vec<usize> = (0..list.len())
            .map(|pos| _impl_cube::variable_count(list.cube(pos)))
            .collect();

        for i in 0..list.len() {
            if list.is_deleted(i) {
                continue;
            }
            let vc = var_cnt_list[i];
            for j in 0..list.len() {
                if j == i || list.is_deleted(j) || var_cnt_list[j] < vc {
                    continue;
                }
                if _impl_cube::cube_contains(list.cube(i), list.cube(j)) {
                    list.delete(j);
                }
            }
        }
        list.purge();
    }

    /// Whether the external cube `c` is covered by the union of the live cubes of
    /// `list`. Decided by cofactoring the list by `c` and testing for tautology.
    pub fn is_cube_covered(&mut self, list: &CubeList, c: &[u64]) -> bool {
        let cof = self.cofactor_by_cube(list, c, None);
        self.is_tautology(&cof)
    }

    /// Whether the cube at `pos` is redundant in `list`, i.e. still covered after
    /// its own contribution is removed.
    pub fn is_cube_redundant(&mut self, list: &CubeList, pos: usize) -> bool {
        let cof = self.cofactor_by_cube(list, list.cube(pos), Some(pos));
        self.is_tautology(&cof)
    }

    /// Multi-cube containment (the IRREDUNDANT step): remove cubes whose coverage is
    /// subsumed by the union of the remaining ones. Cubes are tried from the most
    /// constrained (largest variable count) to the widest, so small cubes are
    /// discarded before the primes they fall into. Ends with a purge.
    pub fn multi_cube_containment(&mut self, list: &mut CubeList) {
        let mut order: Vec<(usize, usize)> = list
            .live_positions()
            .map(|pos| (_impl_cube::variable_count(list.cube(pos)), pos))
            .collect();
        // Largest variable count first; list order breaks ties.
        order.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));

        for (_, pos) in order {
            if self.is_cube_redundant(list, pos) {
                list.delete(pos);
            }
        }
        list.purge();
    }
}
