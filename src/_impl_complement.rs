use crate::_impl_cube;
use crate::{CubeList, CubeProblem, MAX_RECURSION_DEPTH};
use log::debug;

/// Complement construction. Two algorithms produce a cube list for the negated
/// function; the subtract-based one is the default, the cofactor split is retained
/// as an alternative (and as a cross-check in the test suite).
impl CubeProblem {
    /// The complement of `list`, computed by subtracting the list from the
    /// universal cube and then minimising the result a little: the subtracted
    /// cover is expanded against `list` (which is an off-set of its own
    /// complement) and swept with multi-cube containment.
    pub fn complement(&mut self, list: &CubeList) -> CubeList {
        self.compute_counts(list);
        let do_mcc = !self.is_unate();

        let mut result = self.universe_list();
        self.subtract(&mut result, list, do_mcc);
        debug!("complement: raw size {}", result.len());

        self.expand_with_off_set(&mut result, list);
        self.multi_cube_containment(&mut result);
        debug!("complement: minimised size {}", result.len());
        result
    }

    /// The complement of `list` through recursive Shannon splitting on the most
    /// frequent binate variable. Unate levels fall back to a plain subtract from
    /// the universal cube. Slower than [`CubeProblem::complement`] on typical
    /// inputs, but exercises an independent code path.
    ///
    /// *Panics:* the recursion depth is bounded like the tautology test.
    pub fn complement_with_cofactor(&mut self, list: &CubeList) -> CubeList {
        let mut result = self.complement_with_cofactor_rec(list, 0);
        self.multi_cube_containment(&mut result);
        result
    }

    fn complement_with_cofactor_rec(&mut self, list: &CubeList, depth: usize) -> CubeList {
        assert!(depth < MAX_RECURSION_DEPTH, "Complement recursion too deep.");

        self.compute_counts(list);
        let var = match self.max_binate_split_var() {
            Some(var) => var,
            None => {
                let mut result = self.universe_list();
                self.subtract(&mut result, list, false);
                return result;
            }
        };
        debug!(
            "complement: depth {}, split var {}, size {}",
            depth,
            var,
            list.live_len()
        );

        let mut positive = self.cofactor_by_var(list, var, true);
        self.simple_expand(&mut positive);
        let mut negative = self.cofactor_by_var(list, var, false);
        self.simple_expand(&mut negative);

        let mut c_pos = self.complement_with_cofactor_rec(&positive, depth + 1);
        let mut c_neg = self.complement_with_cofactor_rec(&negative, depth + 1);

        // Re-insert the split literal: the complement of the positive cofactor
        // holds in the half-space where the variable is one, and vice versa.
        for pos in c_pos.live_positions().collect::<Vec<_>>() {
            _impl_cube::set_code(c_pos.cube_mut(pos), var, 0b10);
        }
        self.single_cube_containment(&mut c_pos);
        for pos in c_neg.live_positions().collect::<Vec<_>>() {
            _impl_cube::set_code(c_neg.cube_mut(pos), var, 0b01);
        }
        self.single_cube_containment(&mut c_neg);

        // Merge cubes that differ only in the split literal: such a pair collapses
        // into one cube with the variable freed again.
        for i in 0..c_neg.len() {
            if c_neg.is_deleted(i) {
                continue;
            }
            _impl_cube::set_code(c_neg.cube_mut(i), var, 0b10);
            for j in 0..c_pos.len() {
                if c_pos.is_deleted(j) {
                    continue;
                }
                if c_neg.cube(i) == c_pos.cube(j) {
                    _impl_cube::set_code(c_pos.cube_mut(j), var, 0b11);
                    c_neg.delete(i);
                }
            }
            _impl_cube::set_code(c_neg.cube_mut(i), var, 0b01);
        }

        c_pos.add_all(&c_neg);
        self.expand_with_off_set(&mut c_pos, list);
        self.single_cube_containment(&mut c_pos);
        c_pos
    }
}
