use crate::_impl_cube;
use crate::{CubeList, CubeProblem};
use rand::RngCore;

/// Generator of random cube lists with a known tautology status, used by the
/// regression and fuzz tests (and usable as a benchmark workload).
impl CubeProblem {
    /// Build a provably tautological list of `size` cubes, then apply
    /// `dc_to_one_cnt` dontcare→one mutations.
    ///
    /// The construction starts from the universal cube and repeatedly splits a
    /// random cube at a random dontcare variable into its zero and one halves.
    /// Every split preserves the union, so the list stays a disjoint partition of
    /// the Boolean space and is a tautology by construction. Each mutation then
    /// turns one dontcare into a literal, strictly shrinking the union; with
    /// `dc_to_one_cnt > 0` the result is never a tautology.
    ///
    /// Pass a seeded rng for reproducible lists.
    ///
    /// *Panics:* `size` must be positive and `size + dc_to_one_cnt` must leave
    /// enough dontcare positions to mutate, which holds for any sane configuration
    /// (`size + dc_to_one_cnt` well below `var_cnt * size`).
    pub fn random_tautology<R: RngCore>(
        &self,
        rng: &mut R,
        size: usize,
        dc_to_one_cnt: usize,
    ) -> CubeList {
        assert!(size > 0);
        let mut list = self.universe_list();

        while list.len() < size {
            let cube_pos = (rng.next_u32() as usize) % list.len();
            let var_pos = (rng.next_u32() as usize) % self.var_cnt;
            if _impl_cube::get_code(list.cube(cube_pos), var_pos) != 0b11 {
                continue;
            }
            _impl_cube::set_code(list.cube_mut(cube_pos), var_pos, 0b01);
            let copy_pos = list.push_clone_of(cube_pos);
            _impl_cube::set_code(list.cube_mut(copy_pos), var_pos, 0b10);
        }

        let mut mutations = 0;
        while mutations < dc_to_one_cnt {
            let cube_pos = (rng.next_u32() as usize) % list.len();
            let var_pos = (rng.next_u32() as usize) % self.var_cnt;
            if _impl_cube::get_code(list.cube(cube_pos), var_pos) == 0b11 {
                _impl_cube::set_code(list.cube_mut(cube_pos), var_pos, 0b10);
                mutations += 1;
            }
        }

        list
    }
}

#[cfg(test)]
mod tests {
    use crate::CubeProblem;
    use rand::prelude::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generated_lists_are_tautologies() {
        for seed in 0..4u64 {
            let mut problem = CubeProblem::new(12);
            let mut rng = StdRng::seed_from_u64(seed);
            let list = problem.random_tautology(&mut rng, 14, 0);
            assert_eq!(list.len(), 14);
            assert!(problem.is_tautology(&list));
        }
    }

    #[test]
    fn mutations_break_the_tautology() {
        for seed in 0..4u64 {
            let mut problem = CubeProblem::new(12);
            let mut rng = StdRng::seed_from_u64(seed);
            let list = problem.random_tautology(&mut rng, 14, 12);
            assert!(!problem.is_tautology(&list));
        }
    }

    #[test]
    fn generation_is_deterministic_per_seed() {
        let problem = CubeProblem::new(10);
        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);
        let a = problem.random_tautology(&mut rng_a, 12, 5);
        let b = problem.random_tautology(&mut rng_b, 12, 5);
        assert_eq!(problem.show(&a), problem.show(&b));
    }
}
