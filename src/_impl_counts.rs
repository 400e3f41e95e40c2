use crate::_impl_cube;
use crate::{CubeList, CubeProblem};

/// Counter saturation bound; counts are treated as unsigned in `0..=0x7fff`.
const COUNT_SATURATION: u16 = 0x7fff;

/// The variable-polarity counting table and split-variable selection.
///
/// The table records, for every variable, how many live cubes bind it to `Zero` and
/// how many to `One`. It is owned by the problem handle and invalidated by any
/// mutation of the counted list; consumers must recompute before reading.
impl CubeProblem {
    /// Fill the counting table from the live cubes of `list`. Dontcare positions and
    /// tombstoned cubes contribute nothing. Counters saturate at `2^15 - 1`.
    pub fn compute_counts(&mut self, list: &CubeList) {
        self.zeros.fill(0);
        self.ones.fill(0);
        for pos in list.live_positions() {
            let cube = list.cube(pos);
            for var in 0..self.var_cnt {
                match _impl_cube::get_code(cube, var) {
                    0b01 => {
                        if self.zeros[var] < COUNT_SATURATION {
                            self.zeros[var] += 1;
                        }
                    }
                    0b10 => {
                        if self.ones[var] < COUNT_SATURATION {
                            self.ones[var] += 1;
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    /// Whether the counted list is unate: no variable appears in both polarities.
    /// Requires a preceding [`CubeProblem::compute_counts`] for the same list.
    pub fn is_unate(&self) -> bool {
        (0..self.var_cnt).all(|var| self.zeros[var] == 0 || self.ones[var] == 0)
    }

    /// The binate variable occurring in the most cubes, i.e. the index maximising
    /// `zeros + ones` subject to both polarities being present. Ties are broken
    /// towards the lowest index. Returns `None` when the counted list is unate.
    ///
    /// Splitting on this variable splits the most cubes and thus produces the
    /// smallest Shannon recursion tree.
    pub fn max_binate_split_var(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        let mut best_sum = 0u32;
        for var in 0..self.var_cnt {
            if self.zeros[var] > 0 && self.ones[var] > 0 {
                let sum = u32::from(self.zeros[var]) + u32::from(self.ones[var]);
                if sum > best_sum {
                    best_sum = sum;
                    best = Some(var);
                }
            }
        }
        best
    }

    /// Like [`CubeProblem::max_binate_split_var`], but without the binateness
    /// constraint: the variable bound by the most cubes in any polarity. Returns
    /// `None` when no live cube binds any variable.
    pub fn max_split_var(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        let mut best_sum = 0u32;
        for var in 0..self.var_cnt {
            let sum = u32::from(self.zeros[var]) + u32::from(self.ones[var]);
            if sum > best_sum {
                best_sum = sum;
                best = Some(var);
            }
        }
        best
    }
}
