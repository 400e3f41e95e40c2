use crate::_impl_cube;
use crate::{CubeList, CubeProblem};

/// The sharp operation and list subtraction built on it.
impl CubeProblem {
    /// **(internal)** Cube sharp `a # b`: append to `accum` up to one cube per
    /// literal of `b`, whose union is `a \ b`. For every variable bound by `b`, the
    /// cube `a` is narrowed to the excluded polarity at that position and appended
    /// if the position stays legal. Appending is unconditional; the caller prunes
    /// with SCC/MCC afterwards.
    ///
    /// `a` is modified in place during the sweep and restored before returning.
    pub(crate) fn sharp_into(&self, accum: &mut CubeList, a: &mut [u64], b: &[u64]) {
        for var in 0..self.var_cnt {
            let bb = _impl_cube::get_code(b, var);
            if bb == 0b11 {
                continue;
            }
            let orig = _impl_cube::get_code(a, var);
            let narrowed = orig & (bb ^ 3);
            if narrowed != 0 {
                _impl_cube::set_code(a, var, narrowed);
                accum.push_copy(a);
                _impl_cube::set_code(a, var, orig);
            }
        }
    }

    /// Subtract `b` from `a` in place: `a := a \ b`.
    ///
    /// Every cube of `b` is sharped out of every cube of `a`, with a single-cube
    /// containment pass after each step. When `do_mcc` is set, a multi-cube
    /// containment pass runs as well; that pays off when `b` is binate (sharp then
    /// produces many overlapping cubes) and slows things down when `b` is unate.
    /// The minimisation pipeline always sets it.
    pub fn subtract(&mut self, a: &mut CubeList, b: &CubeList, do_mcc: bool) {
        let mut result = self.new_list();
        for i in b.live_positions() {
            result.clear();
            for j in 0..a.len() {
                if a.is_deleted(j) {
                    continue;
                }
                self.sharp_into(&mut result, a.cube_mut(j), b.cube(i));
            }
            a.copy_from(&result);
            self.single_cube_containment(a);
            if do_mcc {
                self.multi_cube_containment(a);
            }
        }
    }
}
