use crate::{CubeList, CubeProblem};
use num_bigint::BigInt;
use num_traits::{One, ToPrimitive, Zero};

/// Minterm counting.
impl CubeProblem {
    /// The exact number of minterms covered by `list`, as a `BigInt` (the count
    /// reaches `2^V` and easily overflows machine integers).
    ///
    /// Computed by Shannon recursion on [`CubeProblem::max_split_var`]: once no
    /// live cube binds any variable, the list is either empty or covers the whole
    /// space. Splitting keeps both cofactors over the full variable set, so each
    /// level halves the double-counting introduced by the freed variable.
    pub fn exact_cardinality(&mut self, list: &CubeList) -> BigInt {
        if list.is_function_empty() {
            return BigInt::zero();
        }
        self.compute_counts(list);
        match self.max_split_var() {
            None => {
                // Only all-dontcare cubes are live.
                BigInt::one() << self.var_cnt
            }
            Some(var) => {
                let positive = self.cofactor_by_var(list, var, true);
                let negative = self.cofactor_by_var(list, var, false);
                (self.exact_cardinality(&positive) + self.exact_cardinality(&negative)) / 2
            }
        }
    }

    /// The number of minterms covered by `list` as an `f64`, losing precision for
    /// wide problems. Infinite when the count does not fit.
    pub fn cardinality(&mut self, list: &CubeList) -> f64 {
        self.exact_cardinality(list)
            .to_f64()
            .unwrap_or(f64::INFINITY)
    }
}
