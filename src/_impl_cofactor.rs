use crate::_impl_cube;
use crate::{CubeList, CubeProblem};

/// Shannon cofactors of cube lists.
impl CubeProblem {
    /// The cofactor of `list` with respect to `var = value`: every cube whose
    /// value at `var` excludes `value` is dropped, every cube binding `var`
    /// compatibly is widened to dontcare there, and cubes with `var` already
    /// dontcare are kept unchanged.
    ///
    /// The transformation can make cubes subsume one another, so the result is
    /// swept with single-cube containment.
    pub fn cofactor_by_var(&self, list: &CubeList, var: usize, value: bool) -> CubeList {
        assert!(var < self.var_cnt);
        let keep = if value { 0b10u8 } else { 0b01u8 };
        let mut result = self.new_list();
        for pos in list.live_positions() {
            let code = _impl_cube::get_code(list.cube(pos), var);
            if code == 0b11 {
                result.push_copy(list.cube(pos));
            } else if code & keep != 0 {
                let new_pos = result.push_copy(list.cube(pos));
                _impl_cube::set_code(result.cube_mut(new_pos), var, 0b11);
            }
            // Cubes binding `var` to the opposite literal vanish in this subspace.
        }
        self.single_cube_containment(&mut result);
        result
    }

    /// **(internal)** The cofactor of `list` with respect to the cube `c`: every live
    /// cube except the one at `exclude` is ORed with the field-wise complement of
    /// `c`. This is equivalent to cofactoring by each literal of `c` simultaneously
    /// and is the work-horse of the coverage and redundancy tests: `c` is covered by
    /// `list` exactly when the result is a tautology.
    pub(crate) fn cofactor_by_cube(
        &mut self,
        list: &CubeList,
        c: &[u64],
        exclude: Option<usize>,
    ) -> CubeList {
        self.start_frame();
        let mask = self.temp_cube();
        for (i, &block) in c.iter().enumerate() {
            self.scratch_cube_mut(mask)[i] = !block;
        }

        let mut result = self.new_list();
        for pos in list.live_positions() {
            if Some(pos) == exclude {
                continue;
            }
            let new_pos = result.push_copy(list.cube(pos));
            let cube = result.cube_mut(new_pos);
            for (i, &m) in self.scratch.cube(mask).iter().enumerate() {
                cube[i] |= m;
            }
        }
        self.end_frame();
        self.single_cube_containment(&mut result);
        result
    }
}
