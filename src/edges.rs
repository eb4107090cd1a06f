use crate::cells::{Cartesian2DCoordinate, CompassPrimary};
use crate::grid_dimensions::RectGridDimensions;
use crate::grid_iterators::RectGridCellIter;

/// An unordered pair of two distinct adjacent cells.
///
/// Stored with the smaller coordinate first, so `Edge::new(a, b) == Edge::new(b, a)` and the derived
/// ordering compares `first` and then `second`.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Edge {
    first: Cartesian2DCoordinate,
    second: Cartesian2DCoordinate,
}

impl Edge {
    pub fn new(a: Cartesian2DCoordinate, b: Cartesian2DCoordinate) -> Edge {
        if a <= b {
            Edge { first: a, second: b }
        } else {
            Edge { first: b, second: a }
        }
    }

    #[inline]
    pub fn first(&self) -> Cartesian2DCoordinate {
        self.first
    }

    #[inline]
    pub fn second(&self) -> Cartesian2DCoordinate {
        self.second
    }
}

/// Every candidate passage of a grid, kept in `Edge` order.
///
/// Taking an edge out by index keeps the remaining edges ordered, so the same sequence of indices
/// always yields the same sequence of edges. The edges never move; a Fenwick tree counts the ones
/// still in the pool so finding the nth remaining edge and taking it are both `O(log n)`.
#[derive(Clone, Debug)]
pub struct EdgePool {
    edges: Vec<Edge>,
    // 1-based Fenwick tree of 0/1 presence counts over `edges`.
    remaining_counts: Vec<usize>,
    remaining: usize,
}

impl EdgePool {
    /// All pairs of a cell and its East or South neighbour within `dimensions`.
    pub fn new(dimensions: RectGridDimensions) -> EdgePool {
        let (_, edges_count) = dimensions.graph_size();
        let mut edges = Vec::with_capacity(edges_count.0);

        for coord in RectGridCellIter::new(dimensions) {
            for dir in &[CompassPrimary::East, CompassPrimary::South] {
                if let Some(neighbour) = coord.offset(*dir)
                                              .filter(|c| dimensions.contains(*c)) {
                    edges.push(Edge::new(coord, neighbour));
                }
            }
        }
        edges.sort();

        let n = edges.len();
        let mut remaining_counts = vec![1; n + 1];
        remaining_counts[0] = 0;
        for i in 1..=n {
            let parent = i + lowest_bit(i);
            if parent <= n {
                remaining_counts[parent] += remaining_counts[i];
            }
        }

        EdgePool {
            edges,
            remaining_counts,
            remaining: n,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.remaining
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    /// Remove and return the edge at `index` of the ordered pool.
    /// Returns None if the index is out of range.
    pub fn take(&mut self, index: usize) -> Option<Edge> {
        if index >= self.remaining {
            return None;
        }

        let n = self.edges.len();
        let position = self.nth_remaining_position(index);
        let mut i = position + 1;
        while i <= n {
            self.remaining_counts[i] -= 1;
            i += lowest_bit(i);
        }
        self.remaining -= 1;

        Some(self.edges[position])
    }

    /// Position in `edges` of the remaining edge with `index` remaining edges before it.
    fn nth_remaining_position(&self, index: usize) -> usize {
        let n = self.edges.len();
        let mut step = n.next_power_of_two();
        if step > n {
            step >>= 1;
        }

        let mut position = 0;
        let mut rank = index + 1;
        while step > 0 {
            let next = position + step;
            if next <= n && self.remaining_counts[next] < rank {
                position = next;
                rank -= self.remaining_counts[next];
            }
            step >>= 1;
        }
        position
    }
}

#[inline]
fn lowest_bit(i: usize) -> usize {
    i & i.wrapping_neg()
}
