//! Per cell attribute payloads.
//!
//! Each generator stores the bookkeeping it needs directly on the grid cells. The payload is a
//! type parameter of the `Grid`, so a grid built by Kruskal's algorithm exposes bucket ids while one
//! built by Prim's exposes distances from the start cell.

use std::fmt::Debug;

pub trait CellInfo: Default + Clone + Debug {
    fn is_visited(&self) -> bool;
    fn set_visited(&mut self, visited: bool);
}

#[derive(Default, Copy, Clone, Debug, Eq, PartialEq)]
pub struct BaseCellInfo {
    pub visited: bool,
}

/// Payload for generators that grow a tree out from a start cell.
#[derive(Default, Copy, Clone, Debug, Eq, PartialEq)]
pub struct DistanceCellInfo {
    pub visited: bool,
    /// Steps along the carved passages from the start cell.
    pub root_distance: u64,
}

/// Payload for Kruskal's algorithm.
#[derive(Default, Copy, Clone, Debug, Eq, PartialEq)]
pub struct BucketCellInfo {
    pub visited: bool,
    /// Disjoint set tag: cells sharing a bucket id are already joined by passages.
    /// Wide enough for any `u32 * u32` grid.
    pub bucket_id: u64,
}

macro_rules! impl_cell_info {
    ($($info:ty),*) => {
        $(
            impl CellInfo for $info {
                #[inline]
                fn is_visited(&self) -> bool {
                    self.visited
                }

                #[inline]
                fn set_visited(&mut self, visited: bool) {
                    self.visited = visited;
                }
            }
        )*
    }
}

impl_cell_info!(BaseCellInfo, DistanceCellInfo, BucketCellInfo);

#[cfg(test)]
mod tests {

    use super::*;

    fn toggle<Info: CellInfo>() {
        let mut info = Info::default();
        assert!(!info.is_visited());
        info.set_visited(true);
        assert!(info.is_visited());
        info.set_visited(false);
        assert!(!info.is_visited());
    }

    #[test]
    fn payloads_start_unvisited_and_toggle() {
        toggle::<BaseCellInfo>();
        toggle::<DistanceCellInfo>();
        toggle::<BucketCellInfo>();
    }

    #[test]
    fn payload_defaults() {
        assert_eq!(DistanceCellInfo::default().root_distance, 0);
        assert_eq!(BucketCellInfo::default().bucket_id, 0);
    }
}
