//! **mazes** generates perfect mazes on rectangular grids.
//!
//! A `grid::Grid` stores cells in a flat arena with passages as undirected graph edges. The
//! `generators` module builds reproducible spanning tree mazes on it from a seed.

pub mod cell_info;
pub mod cells;
pub mod edges;
pub mod generators;
pub mod grid;
pub mod grid_dimensions;
pub mod grid_iterators;
pub mod units;
