use crate::_impl_cube;
use crate::{CubeList, CubeProblem};

/// Cube expansion. Both operations only ever widen cubes, so the denoted function
/// can only grow; `simple_expand` keeps it equal by construction, and
/// `expand_with_off_set` keeps it equal as long as `off` is a correct off-set.
impl CubeProblem {
    /// Merge distance-one cube pairs: whenever two cubes disagree on exactly one
    /// variable and one of them covers the other everywhere else, the covering cube
    /// is widened to dontcare at the disagreement and the covered cube dies.
    /// Which side of a symmetric pair widens first depends on list order. Ends
    /// with a purge.
    pub fn simple_expand(&self, list: &mut CubeList) {
        for i in 0..list.len() {
            if list.is_deleted(i) {
                continue;
            }
            for j in (i + 1)..list.len() {
                if list.is_deleted(i) {
                    break;
                }
                if list.is_deleted(j) {
                    continue;
                }
                if _impl_cube::cube_delta(list.cube(i), list.cube(j)) != 1 {
                    continue;
                }
                let var = self
                    .conflict_var(list.cube(i), list.cube(j))
                    .expect("Delta-one cubes disagree somewhere.");
                if !self.try_widen(list, i, j, var) {
                    self.try_widen(list, j, i, var);
                }
            }
        }
        list.purge();
    }

    /// **(internal)** The first variable where the two cubes conflict.
    fn conflict_var(&self, a: &[u64], b: &[u64]) -> Option<usize> {
        (0..self.var_cnt)
            .find(|&var| _impl_cube::get_code(a, var) & _impl_cube::get_code(b, var) == 0)
    }

    /// **(internal)** Attempt to absorb the cube at `other` into the cube at `pos`
    /// by widening variable `var` to dontcare. The candidate test temporarily flips
    /// the literal of `pos` and checks that `other` is contained in the flipped
    /// cube; on success every cube subsumed by the widened `pos` is tombstoned.
    fn try_widen(&self, list: &mut CubeList, pos: usize, other: usize, var: usize) -> bool {
        let orig = _impl_cube::get_code(list.cube(pos), var);
        _impl_cube::set_code(list.cube_mut(pos), var, orig ^ 3);
        let absorbs = _impl_cube::cube_contains(list.cube(pos), list.cube(other));
        if !absorbs {
            _impl_cube::set_code(list.cube_mut(pos), var, orig);
            return false;
        }
        _impl_cube::set_code(list.cube_mut(pos), var, 0b11);
        for k in 0..list.len() {
            if k == pos || list.is_deleted(k) {
                continue;
            }
            if _impl_cube::cube_contains(list.cube(pos), list.cube(k)) {
                list.delete(k);
            }
        }
        true
    }

    /// Widen every cube of `list` to the largest implicant that stays disjoint from
    /// the off-set `off`: for every bound variable of every live cube, the literal
    /// is dropped unless the widened cube would intersect some live cube of `off`.
    ///
    /// The cube count does not change; the caller re-runs containment afterwards.
    /// Requires `off` to be a correct off-set of the current `list`.
    pub fn expand_with_off_set(&self, list: &mut CubeList, off: &CubeList) {
        for pos in 0..list.len() {
            if list.is_deleted(pos) {
                continue;
            }
            for var in 0..self.var_cnt {
                let code = _impl_cube::get_code(list.cube(pos), var);
                if code == 0b11 {
                    continue;
                }
                _impl_cube::set_code(list.cube_mut(pos), var, 0b11);
                let hits_off = off
                    .live_positions()
                    .any(|k| _impl_cube::cubes_intersect(list.cube(pos), off.cube(k)));
                if hits_off {
                    _impl_cube::set_code(list.cube_mut(pos), var, code);
                }
            }
        }
    }
}
