//! # Boolcube
//!
//! This crate implements a two-level engine for Boolean functions represented as
//! *sum-of-products cube lists*. A cube is a conjunction of literals, packed two bits
//! per variable; a cube list is a disjunction of cubes. On top of this representation
//! the crate provides the full algebra needed to decide, transform and minimise
//! Boolean functions:
//!
//!  - Tautology testing through recursive Shannon expansion.
//!  - Complement construction (sharp-based, with a cofactor-based alternative).
//!  - Subtract (sharp/difference), intersection and union of cube lists.
//!  - Single- and multi-cube containment, cube expansion and the
//!    "widen-and-trim" heuristic minimiser (SCC → expand against the off-set → MCC).
//!  - Exact and approximate minterm counting.
//!  - A parser and evaluator for infix Boolean expressions (`a & !b | c`).
//!  - A JSON command interpreter for scripting the algebra (see the [`script`] module).
//!
//! All cube lists belong to a [`CubeProblem`], which fixes the variable count and owns
//! shared scratch storage. Lists created by one problem must not be mixed with another.
//!
//! ```rust
//! use boolcube::CubeProblem;
//!
//! let mut problem = CubeProblem::new(2);
//! let cover = problem.list_from_str("1-\n0-");
//!
//! // `1-` and `0-` together cover the whole Boolean space.
//! assert!(problem.is_tautology(&cover));
//! assert_eq!(problem.complement(&cover).len(), 0);
//! ```
//!
//! A problem handle is single-threaded: its scratch storage and counting table are not
//! synchronised. Distinct problems are independent and can be used in parallel.

use std::collections::HashMap;

pub mod boolean_expression;
pub mod script;

/// **(internal)** Block-level primitives of the packed cube representation.
mod _impl_cube;

/// **(internal)** The append-only cube container with tombstone flags.
mod _impl_cube_list;

/// **(internal)** Implementation of the `CubeProblem` handle (globals, scratch frames,
/// variable names).
mod _impl_problem;

/// **(internal)** Textual encoding and decoding of cubes and cube lists.
mod _impl_serialisation;

/// **(internal)** The variable-polarity counting table and split-variable selection.
mod _impl_counts;

/// **(internal)** Shannon cofactors by variable and by cube.
mod _impl_cofactor;

/// **(internal)** Single- and multi-cube containment, coverage and redundancy tests.
mod _impl_containment;

/// **(internal)** The recursive tautology decision procedure.
mod _impl_tautology;

/// **(internal)** List subset and equality tests.
mod _impl_subset;

/// **(internal)** The cube sharp operation and list subtract.
mod _impl_subtract;

/// **(internal)** Complement construction, both algorithms.
mod _impl_complement;

/// **(internal)** Pairwise list intersection and the in-place variant.
mod _impl_intersection;

/// **(internal)** Cube expansion: distance-one merging and widening against an off-set.
mod _impl_expand;

/// **(internal)** The heuristic minimisation pipeline.
mod _impl_minimize;

/// **(internal)** Exact and floating-point minterm counting.
mod _impl_cardinality;

/// **(internal)** Generator of provably tautological random cube lists.
mod _impl_random_tautology;

/// Several basic utility methods for testing cube lists.
#[cfg(test)]
mod _test_util;

/// **(internal)** Cross-module test scenarios for the cube list algebra.
#[cfg(test)]
mod _test_list;

/// Number of variables that fit into one storage block.
pub(crate) const VARS_PER_BLOCK: usize = 32;

/// Maximum nesting depth of scratch cube frames.
pub(crate) const MAX_FRAME_DEPTH: usize = 500;

/// Upper bound on the depth of the recursive decision procedures. Exceeding it
/// indicates a runaway recursion and is treated as fatal.
pub(crate) const MAX_RECURSION_DEPTH: usize = 2000;

/// The value of one variable inside a cube.
///
/// Variables are encoded with two bits. The `Illegal` code marks an empty
/// (contradictory) position; it never appears in live cubes of a list, except as the
/// transient output of cube intersection, which is checked and rejected.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum CubeValue {
    /// Contradiction: the cube denotes the empty set.
    Illegal = 0b00,
    /// The variable must be `0`.
    Zero = 0b01,
    /// The variable must be `1`.
    One = 0b10,
    /// The variable is unconstrained.
    DontCare = 0b11,
}

/// A list of cubes denoting the union (disjunction) of its live members.
///
/// Cubes are stored inline in one block vector; a parallel flag byte per cube marks
/// tombstoned entries. Deleted cubes are skipped by every algorithm and physically
/// removed by [`CubeList::purge`]. List order is irrelevant to the denoted function
/// but serves as a deterministic tie-break in the containment and expand sweeps.
#[derive(Clone, Debug)]
pub struct CubeList {
    /// Number of `u64` blocks occupied by each cube.
    blocks_per_cube: usize,
    /// Cube storage, `len() * blocks_per_cube` blocks.
    data: Vec<u64>,
    /// One flag byte per cube; `0` is live, `1` is tombstoned.
    flags: Vec<u8>,
}

/// Maintains the variable universe of a family of cube lists and owns the shared
/// working storage of the algebra.
///
/// A problem is created for a fixed variable count (with generated or explicit
/// variable names) and is then used to create, parse, combine and minimise cube
/// lists. The handle carries:
///
///  - the four constant cubes (all-illegal, all-zero, all-one, all-dontcare),
///  - the polarity counting table filled by [`CubeProblem::compute_counts`],
///  - a LIFO scratch cube arena with strictly nested frames,
///  - the name↔index tables used by the expression evaluator.
///
/// Operations that consume scratch storage or the counting table take `&mut self`;
/// this makes the single-threaded ownership of the working state explicit.
pub struct CubeProblem {
    /// Number of variables of every cube of this problem.
    var_cnt: usize,
    /// Number of `u64` blocks per cube, `ceil(var_cnt / VARS_PER_BLOCK)`.
    blk_cnt: usize,
    var_names: Vec<String>,
    var_index_mapping: HashMap<String, usize>,
    /// The four constant cubes, see the `GLOBAL_*` indices.
    globals: CubeList,
    /// Per-variable count of live cubes with a `Zero` at that position.
    zeros: Vec<u16>,
    /// Per-variable count of live cubes with a `One` at that position.
    ones: Vec<u16>,
    /// LIFO arena for temporary cubes.
    scratch: CubeList,
    /// Saved scratch lengths, one per open frame.
    frames: Vec<usize>,
}

/// **(internal)** Index of the all-illegal constant cube in the global list.
pub(crate) const GLOBAL_ILLEGAL: usize = 0;
/// **(internal)** Index of the all-zero constant cube in the global list.
pub(crate) const GLOBAL_ZERO: usize = 1;
/// **(internal)** Index of the all-one constant cube in the global list.
pub(crate) const GLOBAL_ONE: usize = 2;
/// **(internal)** Index of the all-dontcare (universal) cube in the global list.
pub(crate) const GLOBAL_UNIVERSE: usize = 3;
