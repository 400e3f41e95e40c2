use crate::_impl_cube;
use crate::{CubeList, CubeProblem, CubeValue};
use std::fmt::Write;

/// Textual encoding of cubes and cube lists.
///
/// A cube is a string of length `var_cnt` over `{'0', '1', '-', 'x'}`; space and tab
/// characters are skipped, any other character decodes to dontcare. A cube list is
/// one cube per line; blank lines are ignored. Decoding never fails: a short line
/// leaves the remaining variables at dontcare.
impl CubeProblem {
    /// Infer the variable count from the first line of a cube string: the number of
    /// characters before the line (or string) ends, not counting spaces and tabs.
    pub fn infer_var_cnt(s: &str) -> usize {
        s.chars()
            .take_while(|&c| c != '\0' && c != '\r' && c != '\n')
            .filter(|&c| c != ' ' && c != '\t')
            .count()
    }

    /// **(internal)** Decode one cube from `chars` into the cube at `pos`, consuming
    /// characters up to (not including) the line terminator.
    fn decode_cube(&self, list: &mut CubeList, pos: usize, chars: &mut std::iter::Peekable<std::str::Chars>) {
        let cube = list.cube_mut(pos);
        for var in 0..self.var_cnt {
            while let Some(&c) = chars.peek() {
                if c == ' ' || c == '\t' {
                    chars.next();
                } else {
                    break;
                }
            }
            let code = match chars.peek() {
                None | Some('\r') | Some('\n') => {
                    // Line ended early; this variable and all following stay dontcare.
                    break;
                }
                Some('0') => 0b01,
                Some('1') => 0b10,
                Some('-') => 0b11,
                Some('x') => 0b00,
                Some(_) => 0b11,
            };
            chars.next();
            _impl_cube::set_code(cube, var, code);
        }
    }

    /// Append every cube of `s` (one per line) to `list`. Blank lines and
    /// leading/trailing whitespace are ignored.
    pub fn add_cubes_from_str(&self, list: &mut CubeList, s: &str) {
        let mut chars = s.chars().peekable();
        loop {
            // Skip whitespace and control characters between cubes.
            while let Some(&c) = chars.peek() {
                if c <= ' ' {
                    chars.next();
                } else {
                    break;
                }
            }
            if chars.peek().is_none() {
                return;
            }
            let pos = list.push_empty();
            self.decode_cube(list, pos, &mut chars);
        }
    }

    /// Create a new list from a newline-separated cube string.
    pub fn list_from_str(&self, s: &str) -> CubeList {
        let mut list = self.new_list();
        self.add_cubes_from_str(&mut list, s);
        list
    }

    /// The textual representation of the cube at `pos`: one character per variable.
    pub fn cube_to_string(&self, list: &CubeList, pos: usize) -> String {
        let cube = list.cube(pos);
        (0..self.var_cnt)
            .map(|var| CubeValue::from_code(_impl_cube::get_code(cube, var)).as_char())
            .collect()
    }

    /// Dump the list row by row in the format `NNNN FF cube`, where `NNNN` is the
    /// zero-padded cube index and `FF` the flag byte. Tombstoned cubes are included.
    pub fn show(&self, list: &CubeList) -> String {
        let mut out = String::new();
        for pos in 0..list.len() {
            let flag = if list.is_deleted(pos) { 1 } else { 0 };
            writeln!(
                out,
                "{:04} {:02x} {}",
                pos,
                flag,
                self.cube_to_string(list, pos)
            )
            .expect("Cannot write cube list dump.");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use crate::{CubeProblem, CubeValue};

    #[test]
    fn infer_var_cnt_stops_at_line_end() {
        assert_eq!(CubeProblem::infer_var_cnt("10-1\n0000"), 4);
        assert_eq!(CubeProblem::infer_var_cnt(" 1 0 -\t1\n"), 4);
        assert_eq!(CubeProblem::infer_var_cnt(""), 0);
    }

    #[test]
    fn string_roundtrip() {
        let problem = CubeProblem::new(6);
        let list = problem.list_from_str("1-0-10\n110011\n");
        assert_eq!(list.len(), 2);
        assert_eq!(problem.cube_to_string(&list, 0), "1-0-10");
        assert_eq!(problem.cube_to_string(&list, 1), "110011");
    }

    #[test]
    fn short_line_pads_with_dontcare() {
        let problem = CubeProblem::new(4);
        let list = problem.list_from_str("10");
        assert_eq!(problem.cube_to_string(&list, 0), "10--");
    }

    #[test]
    fn whitespace_and_blank_lines_ignored() {
        let problem = CubeProblem::new(3);
        let list = problem.list_from_str("  1 0 -\n\n\t\n01-\n");
        assert_eq!(list.len(), 2);
        assert_eq!(problem.cube_to_string(&list, 0), "10-");
        assert_eq!(problem.cube_to_string(&list, 1), "01-");
    }

    #[test]
    fn illegal_and_default_characters() {
        let problem = CubeProblem::new(3);
        let list = problem.list_from_str("x?1");
        assert_eq!(problem.get_cube_var(&list, 0, 0), CubeValue::Illegal);
        assert_eq!(problem.get_cube_var(&list, 0, 1), CubeValue::DontCare);
        assert_eq!(problem.get_cube_var(&list, 0, 2), CubeValue::One);
        assert_eq!(problem.cube_to_string(&list, 0), "x-1");
    }

    #[test]
    fn show_format() {
        let problem = CubeProblem::new(2);
        let mut list = problem.list_from_str("1-\n0-\n");
        list.delete(1);
        assert_eq!(problem.show(&list), "0000 00 1-\n0001 01 0-\n");
    }
}
