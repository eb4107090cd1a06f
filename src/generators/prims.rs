use log::{debug, trace};
use std::collections::BTreeSet;

use crate::cell_info::{CellInfo, DistanceCellInfo};
use crate::cells::Cartesian2DCoordinate;
use crate::generators::{maze_extents, random_index, seeded_rng};
use crate::grid::Grid;
use crate::grid_dimensions::RectGridDimensions;

/// Apply a randomised version of Prim's algorithm to a new grid.
///
/// The maze grows from `start` (the north west corner by default). A frontier holds the cells next
/// to the tree; each step takes a random frontier cell, links it to a random neighbour that is
/// already in the tree and adds its own unvisited neighbours to the frontier.
///
/// The frontier is ordered by coordinate so picking by index is reproducible.
/// Returns None if the grid would be empty or `start` lies outside it.
pub fn prims(width: u32,
             height: u32,
             start: Option<Cartesian2DCoordinate>,
             seed: u32)
             -> Option<Grid<DistanceCellInfo>> {
    let (row_width, column_height) = maze_extents(width, height)?;
    let start = start.unwrap_or_default();
    if !RectGridDimensions::new(row_width, column_height).contains(start) {
        return None;
    }
    debug!("Prim's maze {}x{} from {:?} seed {}", width, height, start, seed);

    let mut rng = seeded_rng(seed);
    let mut grid: Grid<DistanceCellInfo> = Grid::new(row_width, column_height);
    grid[start].root_distance = 0;

    let mut frontier = BTreeSet::new();
    let _ = frontier.insert(start);

    while !frontier.is_empty() {
        let picked_index = random_index(&mut rng, frontier.len());
        let current = match frontier.iter().nth(picked_index) {
            Some(coord) => *coord,
            None => break,
        };
        grid[current].set_visited(true);

        let in_tree = grid.neighbours_by_visited(current, true);
        if !in_tree.is_empty() {
            let parent = in_tree[random_index(&mut rng, in_tree.len())];
            let parent_distance = grid[parent].root_distance;
            grid.connect(current, parent);
            grid[current].root_distance = parent_distance + 1;
            trace!("Prim's joined {:?} to {:?}", current, parent);
        }

        frontier.extend(grid.neighbours_by_visited(current, false));
        let _ = frontier.remove(&current);
    }

    debug!("Prim's maze carved {} passages", grid.links_count());
    Some(grid)
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn start_must_be_inside_the_grid() {
        let gc = |x, y| Cartesian2DCoordinate::new(x, y);
        assert!(prims(3, 3, Some(gc(3, 3)), 0).is_none());
        assert!(prims(3, 3, Some(gc(0, 5)), 0).is_none());
        assert!(prims(3, 3, Some(gc(2, 2)), 0).is_some());
    }

    #[test]
    fn distances_grow_one_step_per_passage() {
        let start = Cartesian2DCoordinate::new(4, 1);
        let g = prims(6, 6, Some(start), 1234).unwrap();
        assert_eq!(g[start].root_distance, 0);
        for (a, b) in g.iter_links() {
            let (da, db) = (g[a].root_distance, g[b].root_distance);
            assert!(da + 1 == db || db + 1 == da, "{:?} {} - {:?} {}", a, da, b, db);
        }
        assert!(g.iter().all(|coord| g[coord].is_visited()));
    }

    #[test]
    fn different_seeds_usually_differ() {
        let mazes = (0..4).map(|seed| prims(8, 8, None, seed).unwrap().sorted_links())
                          .collect::<Vec<_>>();
        assert!(mazes.iter().skip(1).any(|links| *links != mazes[0]));
    }
}
