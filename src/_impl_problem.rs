use crate::*;

impl CubeProblem {
    /// Create a new problem over `var_cnt` anonymous variables named
    /// $(x_0, \ldots, x_{n-1})$.
    ///
    /// *Panics:* `var_cnt` must be positive.
    pub fn new(var_cnt: usize) -> CubeProblem {
        let names: Vec<String> = (0..var_cnt).map(|i| format!("x_{}", i)).collect();
        let names: Vec<&str> = names.iter().map(|s| s.as_str()).collect();
        CubeProblem::with_variables(&names)
    }

    /// Create a new problem with the given named variables. Variable indices follow
    /// the order of `vars`.
    ///
    /// *Panics:* `vars` must be non-empty and contain unique names.
    pub fn with_variables(vars: &[&str]) -> CubeProblem {
        assert!(!vars.is_empty(), "A cube problem needs at least one variable.");
        let var_cnt = vars.len();
        let blk_cnt = (var_cnt + VARS_PER_BLOCK - 1) / VARS_PER_BLOCK;

        let mut var_names = Vec::with_capacity(var_cnt);
        let mut var_index_mapping = HashMap::with_capacity(var_cnt);
        for (index, name) in vars.iter().enumerate() {
            if var_index_mapping.insert(name.to_string(), index).is_some() {
                panic!("Duplicate variable name: {}.", name);
            }
            var_names.push(name.to_string());
        }

        let mut globals = CubeList::with_blocks(blk_cnt);
        for (pos, code) in [
            (GLOBAL_ILLEGAL, 0b00u8),
            (GLOBAL_ZERO, 0b01),
            (GLOBAL_ONE, 0b10),
            (GLOBAL_UNIVERSE, 0b11),
        ] {
            debug_assert_eq!(globals.len(), pos);
            let pos = globals.push_empty();
            let cube = globals.cube_mut(pos);
            for var in 0..var_cnt {
                _impl_cube::set_code(cube, var, code);
            }
        }

        CubeProblem {
            var_cnt,
            blk_cnt,
            var_names,
            var_index_mapping,
            globals,
            zeros: vec![0; var_cnt],
            ones: vec![0; var_cnt],
            scratch: CubeList::with_blocks(blk_cnt),
            frames: Vec::new(),
        }
    }

    /// The number of variables of this problem.
    pub fn var_cnt(&self) -> usize {
        self.var_cnt
    }

    /// Find the index of a variable by name, or `None` if the name is unknown.
    pub fn var_by_name(&self, name: &str) -> Option<usize> {
        self.var_index_mapping.get(name).copied()
    }

    /// The name of the variable at `var`.
    ///
    /// *Panics:* `var` must be a valid variable index.
    pub fn name_of(&self, var: usize) -> &str {
        &self.var_names[var]
    }

    /// **(internal)** One of the four constant cubes, see the `GLOBAL_*` indices.
    pub(crate) fn global_cube(&self, pos: usize) -> &[u64] {
        self.globals.cube(pos)
    }

    /// **(internal)** The all-dontcare cube of this problem.
    pub(crate) fn universal_cube(&self) -> &[u64] {
        self.globals.cube(GLOBAL_UNIVERSE)
    }

    /// Create a new empty cube list for this problem.
    pub fn new_list(&self) -> CubeList {
        CubeList::with_blocks(self.blk_cnt)
    }

    /// Create a list holding the single all-dontcare cube, i.e. the constant-true
    /// function.
    pub fn universe_list(&self) -> CubeList {
        let mut list = self.new_list();
        list.push_copy(self.universal_cube());
        list
    }

    /// Append a fresh all-dontcare cube to `list` and return its position.
    pub fn add_cube(&self, list: &mut CubeList) -> usize {
        list.push_empty()
    }

    /// Append a copy of the cube `src[pos]` to `dest` and return its position.
    pub fn add_cube_from(&self, dest: &mut CubeList, src: &CubeList, pos: usize) -> usize {
        dest.push_copy(src.cube(pos))
    }

    /// Read the value of variable `var` of the cube at `pos`.
    ///
    /// *Panics:* `pos` must be a valid cube position and `var < var_cnt`.
    pub fn get_cube_var(&self, list: &CubeList, pos: usize, var: usize) -> CubeValue {
        assert!(var < self.var_cnt);
        CubeValue::from_code(_impl_cube::get_code(list.cube(pos), var))
    }

    /// Write the value of variable `var` of the cube at `pos`.
    ///
    /// *Panics:* `pos` must be a valid cube position and `var < var_cnt`.
    pub fn set_cube_var(&self, list: &mut CubeList, pos: usize, var: usize, value: CubeValue) {
        assert!(var < self.var_cnt);
        _impl_cube::set_code(list.cube_mut(pos), var, value.code());
    }

    /// Reset the cube at `pos` to all dontcare.
    pub fn clear_cube(&self, list: &mut CubeList, pos: usize) {
        _impl_cube::clear_cube(list.cube_mut(pos));
    }

    /// Whether every variable of the cube at `pos` is dontcare.
    pub fn is_cube_tautology(&self, list: &CubeList, pos: usize) -> bool {
        _impl_cube::is_tautology_cube(list.cube(pos))
    }

    /// Whether some variable of the cube at `pos` carries the illegal code, i.e.
    /// the cube denotes the empty set.
    pub fn is_cube_illegal(&self, list: &CubeList, pos: usize) -> bool {
        _impl_cube::is_illegal_cube(list.cube(pos))
    }

    /// The number of variables the cube at `pos` binds to a literal.
    pub fn cube_variable_count(&self, list: &CubeList, pos: usize) -> usize {
        _impl_cube::variable_count(list.cube(pos))
    }

    /// The number of variables on which the cubes at `a` and `b` disagree, i.e.
    /// where their intersection would be illegal. Distance-one pairs are the
    /// mergeable ones.
    pub fn cube_delta(&self, list: &CubeList, a: usize, b: usize) -> usize {
        _impl_cube::cube_delta(list.cube(a), list.cube(b))
    }

    /// Whether the cube at `b` is a subset of the cube at `a`.
    pub fn is_cube_subset(&self, list: &CubeList, a: usize, b: usize) -> bool {
        _impl_cube::cube_contains(list.cube(a), list.cube(b))
    }

    /// Open a scratch cube frame. Every temporary cube obtained afterwards is
    /// reclaimed by the matching [`CubeProblem::end_frame`]. Frames nest strictly.
    ///
    /// *Panics:* at most [`MAX_FRAME_DEPTH`](crate::MAX_FRAME_DEPTH) frames may be
    /// open at once.
    pub fn start_frame(&mut self) {
        assert!(
            self.frames.len() < MAX_FRAME_DEPTH,
            "Scratch frame depth exceeded."
        );
        self.frames.push(self.scratch.len());
    }

    /// Close the innermost scratch frame, truncating the arena back to the length
    /// recorded when the frame was opened.
    ///
    /// *Panics:* a frame must be open.
    pub fn end_frame(&mut self) {
        let saved = self.frames.pop().expect("Scratch frame underflow.");
        self.scratch.truncate(saved);
    }

    /// **(internal)** Allocate a temporary all-dontcare cube in the innermost frame
    /// and return its arena position.
    pub(crate) fn temp_cube(&mut self) -> usize {
        assert!(!self.frames.is_empty(), "No open scratch frame.");
        self.scratch.push_empty()
    }

    /// **(internal)** The scratch cube at arena position `pos`.
    pub(crate) fn scratch_cube(&self, pos: usize) -> &[u64] {
        self.scratch.cube(pos)
    }

    /// **(internal)** The scratch cube at arena position `pos`, mutably.
    pub(crate) fn scratch_cube_mut(&mut self, pos: usize) -> &mut [u64] {
        self.scratch.cube_mut(pos)
    }
}
