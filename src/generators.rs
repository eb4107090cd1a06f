//! Perfect maze generators.
//!
//! Every generator takes the grid extents and a seed and returns `None` when a dimension is zero
//! (or the start point is outside the grid). Otherwise it returns an owned `Grid` whose passages
//! form a spanning tree: one path between any two cells.
//!
//! Randomness comes from a xorshift generator seeded per call, and each generator consumes it in a
//! fixed order, so identical arguments reproduce identical mazes.

use rand::{RngCore, SeedableRng};
use rand_xorshift::XorShiftRng;
use std::fmt;
use std::str::FromStr;

use crate::units::{ColumnLength, RowLength};

mod binary_tree;
mod depth_first_search;
mod kruskals;
mod prims;
mod recursive_division;
mod sidewinder;

pub use self::binary_tree::binary_tree;
pub use self::depth_first_search::depth_first_search;
pub use self::kruskals::kruskals;
pub use self::prims::prims;
pub use self::recursive_division::recursive_division;
pub use self::sidewinder::sidewinder;

pub type MazeRng = XorShiftRng;

pub fn seeded_rng(seed: u32) -> MazeRng {
    XorShiftRng::seed_from_u64(u64::from(seed))
}

/// Uniformly pick one of `n` candidates, `n` must be non zero.
#[inline]
pub fn random_index<R: RngCore>(rng: &mut R, n: usize) -> usize {
    debug_assert!(n > 0, "Cannot pick from zero candidates");
    rng.next_u32() as usize % n
}

#[inline]
pub fn coin_flip<R: RngCore>(rng: &mut R) -> bool {
    random_index(rng, 2) == 0
}

/// Grid extents for a generator, None if the grid would have no cells.
fn maze_extents(width: u32, height: u32) -> Option<(RowLength, ColumnLength)> {
    if width == 0 || height == 0 {
        None
    } else {
        Some((RowLength(width as usize), ColumnLength(height as usize)))
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum Algorithm {
    BinaryTree,
    Sidewinder,
    DepthFirstSearch,
    Prims,
    Kruskals,
    RecursiveDivision,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [Algorithm::BinaryTree,
                                     Algorithm::Sidewinder,
                                     Algorithm::DepthFirstSearch,
                                     Algorithm::Prims,
                                     Algorithm::Kruskals,
                                     Algorithm::RecursiveDivision];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BinaryTree => "binary_tree",
            Algorithm::Sidewinder => "sidewinder",
            Algorithm::DepthFirstSearch => "depth_first_search",
            Algorithm::Prims => "prims",
            Algorithm::Kruskals => "kruskals",
            Algorithm::RecursiveDivision => "recursive_division",
        }
    }

    /// Does the generator grow the maze out from a caller supplied start cell?
    pub fn uses_start_point(self) -> bool {
        match self {
            Algorithm::DepthFirstSearch | Algorithm::Prims => true,
            _ => false,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Eq, PartialEq, Clone, Debug)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Unknown maze generation algorithm: {}", self.0)
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Algorithm, UnknownAlgorithm> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        Algorithm::ALL
            .iter()
            .cloned()
            .find(|algorithm| algorithm.name() == wanted)
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}
