use crate::_impl_cube;
use crate::{CubeList, CubeProblem};

/// Pairwise intersection of cube lists. The union counterpart is the plain
/// [`CubeList::add_all`].
impl CubeProblem {
    /// `result := a ∩ b`: the pairwise cube intersections that stay legal, swept
    /// with single-cube containment. The borrow signature rules out aliasing
    /// between `result` and the operands.
    pub fn intersection_into(&mut self, result: &mut CubeList, a: &CubeList, b: &CubeList) {
        self.start_frame();
        let tmp = self.temp_cube();

        result.clear();
        for i in b.live_positions() {
            for j in a.live_positions() {
                let legal =
                    _impl_cube::intersect_into(self.scratch.cube_mut(tmp), a.cube(j), b.cube(i));
                if legal {
                    result.push_copy(self.scratch_cube(tmp));
                }
            }
        }
        self.single_cube_containment(result);
        self.end_frame();
    }

    /// In-place intersection: `a := a ∩ b`.
    pub fn intersection(&mut self, a: &mut CubeList, b: &CubeList) {
        let mut result = self.new_list();
        self.intersection_into(&mut result, a, b);
        a.copy_from(&result);
    }
}
