use log::{debug, trace};

use crate::cell_info::BucketCellInfo;
use crate::cells::Cartesian2DCoordinate;
use crate::edges::EdgePool;
use crate::generators::{maze_extents, random_index, seeded_rng};
use crate::grid::Grid;

/// Apply a randomised version of Kruskal's algorithm to a new grid.
///
/// Every cell starts in its own bucket. Candidate passages are taken out of the ordered edge pool
/// in random order and carved only when they join two different buckets, which are then merged.
/// Carving never happens inside a bucket so no loops are made, and every pair of buckets is joined
/// eventually, giving a perfect maze with all cells in one bucket.
pub fn kruskals(width: u32, height: u32, seed: u32) -> Option<Grid<BucketCellInfo>> {
    let (row_width, column_height) = maze_extents(width, height)?;
    debug!("Kruskal's maze {}x{} seed {}", width, height, seed);

    let mut rng = seeded_rng(seed);
    let mut grid: Grid<BucketCellInfo> = Grid::new(row_width, column_height);

    // Bucket id is the row major index of the cell the bucket started from.
    let mut buckets: Vec<Vec<Cartesian2DCoordinate>> = Vec::with_capacity(grid.size());
    for (index, coord) in grid.iter().enumerate() {
        grid[coord].bucket_id = index as u64;
        buckets.push(vec![coord]);
    }

    let mut edges = EdgePool::new(*grid.dimensions());
    let mut merges = 0;

    while !edges.is_empty() {
        let edge = match edges.take(random_index(&mut rng, edges.len())) {
            Some(edge) => edge,
            None => break,
        };
        let (first, second) = (edge.first(), edge.second());
        let first_bucket = grid[first].bucket_id as usize;
        let second_bucket = grid[second].bucket_id as usize;
        if first_bucket == second_bucket {
            continue;
        }

        grid.connect(first, second);

        let (from, into) = if buckets[first_bucket].len() > buckets[second_bucket].len() {
            (second_bucket, first_bucket)
        } else {
            (first_bucket, second_bucket)
        };
        trace!("Merging bucket {} ({} cells) into {} ({} cells)",
               from,
               buckets[from].len(),
               into,
               buckets[into].len());

        let moved = std::mem::replace(&mut buckets[from], vec![]);
        for coord in &moved {
            grid[*coord].bucket_id = into as u64;
        }
        buckets[into].extend(moved);
        merges += 1;
    }

    debug_assert_eq!(merges, grid.size() - 1, "Kruskal's must merge every bucket");
    debug!("Kruskal's maze carved {} passages", grid.links_count());
    Some(grid)
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn single_cell() {
        let g = kruskals(1, 1, 0).unwrap();
        assert_eq!(g.links_count(), 0);
        assert!(g.is_perfect_maze());
    }

    #[test]
    fn every_cell_ends_in_one_bucket() {
        let g = kruskals(9, 7, 77).unwrap();
        let bucket = g[Cartesian2DCoordinate::new(0, 0)].bucket_id;
        assert!(g.iter().all(|coord| g[coord].bucket_id == bucket));
        assert!(g.is_perfect_maze());
    }

    #[test]
    fn two_cells_join_into_the_second_bucket() {
        // Equal sized buckets: the first endpoint's bucket moves.
        let g = kruskals(2, 1, 5).unwrap();
        assert_eq!(g.links_count(), 1);
        assert!(g.iter().all(|coord| g[coord].bucket_id == 1));
    }
}
