use crate::CubeList;

/// Container operations of the cube list. All semantics-bearing algebra lives on
/// [`crate::CubeProblem`]; the list itself only manages storage and tombstones.
impl CubeList {
    /// **(internal)** Create an empty list whose cubes occupy `blocks_per_cube` blocks.
    pub(crate) fn with_blocks(blocks_per_cube: usize) -> CubeList {
        CubeList {
            blocks_per_cube,
            data: Vec::new(),
            flags: Vec::new(),
        }
    }

    /// Number of cubes in the list, including tombstoned entries that have not been
    /// purged yet.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Whether the list holds no cubes at all.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Number of live (non-tombstoned) cubes.
    pub fn live_len(&self) -> usize {
        self.flags.iter().filter(|&&f| f == 0).count()
    }

    /// Whether the list denotes the empty function (no live cube).
    pub fn is_function_empty(&self) -> bool {
        self.flags.iter().all(|&f| f != 0)
    }

    /// Drop all cubes.
    pub fn clear(&mut self) {
        self.data.clear();
        self.flags.clear();
    }

    /// Make this list an exact copy of `other`, including tombstone flags.
    pub fn copy_from(&mut self, other: &CubeList) {
        debug_assert_eq!(self.blocks_per_cube, other.blocks_per_cube);
        self.data.clear();
        self.data.extend_from_slice(&other.data);
        self.flags.clear();
        self.flags.extend_from_slice(&other.flags);
    }

    /// Append every live cube of `other` to this list. This is the plain union of the
    /// two functions; no simplification is performed.
    pub fn add_all(&mut self, other: &CubeList) {
        debug_assert_eq!(self.blocks_per_cube, other.blocks_per_cube);
        for pos in other.live_positions() {
            self.push_copy(other.cube(pos));
        }
    }

    /// Remove tombstoned cubes, preserving the relative order of the live ones.
    /// Afterwards every flag byte is zero.
    pub fn purge(&mut self) {
        let bpc = self.blocks_per_cube;
        let mut kept = 0;
        for pos in 0..self.flags.len() {
            if self.flags[pos] == 0 {
                if kept != pos {
                    self.data.copy_within(pos * bpc..(pos + 1) * bpc, kept * bpc);
                }
                kept += 1;
            }
        }
        self.data.truncate(kept * bpc);
        self.flags.truncate(kept);
        self.flags.fill(0);
    }

    /// **(internal)** The cube at `pos` as a block slice.
    #[inline]
    pub(crate) fn cube(&self, pos: usize) -> &[u64] {
        let bpc = self.blocks_per_cube;
        &self.data[pos * bpc..(pos + 1) * bpc]
    }

    /// **(internal)** The cube at `pos` as a mutable block slice.
    #[inline]
    pub(crate) fn cube_mut(&mut self, pos: usize) -> &mut [u64] {
        let bpc = self.blocks_per_cube;
        &mut self.data[pos * bpc..(pos + 1) * bpc]
    }

    /// Whether the cube at `pos` is tombstoned.
    #[inline]
    pub fn is_deleted(&self, pos: usize) -> bool {
        self.flags[pos] != 0
    }

    /// **(internal)** Tombstone the cube at `pos`.
    #[inline]
    pub(crate) fn delete(&mut self, pos: usize) {
        self.flags[pos] = 1;
    }

    /// **(internal)** Positions of all live cubes, in list order.
    pub(crate) fn live_positions(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.flags.len()).filter(move |&i| self.flags[i] == 0)
    }

    /// **(internal)** Append a fresh all-dontcare cube and return its position.
    pub(crate) fn push_empty(&mut self) -> usize {
        self.data.extend(std::iter::repeat(!0u64).take(self.blocks_per_cube));
        self.flags.push(0);
        self.flags.len() - 1
    }

    /// **(internal)** Append a copy of `cube` (taken from a different list) and
    /// return its position.
    pub(crate) fn push_copy(&mut self, cube: &[u64]) -> usize {
        debug_assert_eq!(cube.len(), self.blocks_per_cube);
        self.data.extend_from_slice(cube);
        self.flags.push(0);
        self.flags.len() - 1
    }

    /// **(internal)** Append a copy of this list's own cube at `pos` and return the
    /// position of the copy.
    pub(crate) fn push_clone_of(&mut self, pos: usize) -> usize {
        let bpc = self.blocks_per_cube;
        self.data.extend_from_within(pos * bpc..(pos + 1) * bpc);
        self.flags.push(0);
        self.flags.len() - 1
    }

    /// **(internal)** Truncate the list to its first `len` cubes.
    pub(crate) fn truncate(&mut self, len: usize) {
        self.data.truncate(len * self.blocks_per_cube);
        self.flags.truncate(len);
    }
}
