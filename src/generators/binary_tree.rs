use log::debug;

use crate::cell_info::BaseCellInfo;
use crate::cells::CompassPrimary;
use crate::generators::{maze_extents, random_index, seeded_rng};
use crate::grid::Grid;

/// Apply the binary tree maze generation algorithm to a new grid
/// It works simply by visiting each cell in the grid and choosing to carve a passage
/// in one of two perpendicular directions, here West or North.
/// The directions are constant for the entire generation, otherwise we'd end up with many areas
/// with no way in or out. We would not be generating a perfect maze.
///
/// One random draw is made for every cell with a West or North neighbour, even when it only has one
/// candidate, so the north west corner is the only cell that consumes nothing.
pub fn binary_tree(width: u32, height: u32, seed: u32) -> Option<Grid<BaseCellInfo>> {
    let (row_width, column_height) = maze_extents(width, height)?;
    debug!("Binary tree maze {}x{} seed {}", width, height, seed);

    let mut rng = seeded_rng(seed);
    let mut grid = Grid::new(row_width, column_height);
    let neighbours_to_check = [CompassPrimary::West, CompassPrimary::North];

    for cell_coord in grid.iter() {

        let neighbours = grid.neighbours_at_directions(cell_coord, &neighbours_to_check)
                             .into_iter()
                             .filter_map(|coord_maybe| coord_maybe)
                             .collect::<Vec<_>>();

        if !neighbours.is_empty() {
            let link_coord = neighbours[random_index(&mut rng, neighbours.len())];
            grid.connect(cell_coord, link_coord);
        }
    }

    debug!("Binary tree maze carved {} passages", grid.links_count());
    Some(grid)
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::cells::Cartesian2DCoordinate;
    use crate::grid_dimensions::RectGridDimensions;
    use crate::grid_iterators::RectGridCellIter;
    use crate::units::{ColumnLength, RowLength};

    #[test]
    fn every_cell_links_west_or_north() {
        let g = binary_tree(8, 5, 17).unwrap();
        for coord in g.iter().skip(1) {
            let linked_back = g.is_neighbour_linked(coord, CompassPrimary::West) ||
                              g.is_neighbour_linked(coord, CompassPrimary::North);
            assert!(linked_back, "{:?} has no west or north passage", coord);
        }
    }

    #[test]
    fn edges_of_the_grid_are_corridors() {
        // Cells on the top row can only go west, cells on the left column only north.
        let g = binary_tree(6, 4, 5).unwrap();
        let gc = |x, y| Cartesian2DCoordinate::new(x, y);
        for x in 1..6 {
            assert!(g.is_linked(gc(x, 0), gc(x - 1, 0)));
        }
        for y in 1..4 {
            assert!(g.is_linked(gc(0, y), gc(0, y - 1)));
        }
    }

    #[test]
    fn single_row() {
        let g = binary_tree(4, 1, 0).unwrap();
        assert_eq!(g.links_count(), 3);
        assert!(g.is_perfect_maze());
        assert_eq!(g.dead_ends().len(), 2);
    }

    #[test]
    fn one_draw_per_cell_with_a_west_or_north_neighbour() {
        for &(w, h, seed) in &[(7, 5, 9), (1, 6, 2), (6, 1, 4), (4, 4, 0)] {
            let g = binary_tree(w, h, seed).unwrap();
            let dims = RectGridDimensions::new(RowLength(w as usize), ColumnLength(h as usize));
            let mut rng = seeded_rng(seed);

            let mut picks = 0;
            for coord in RectGridCellIter::new(dims) {
                let candidates = [coord.offset(CompassPrimary::West),
                                  coord.offset(CompassPrimary::North)];
                let candidates = candidates.iter()
                    .filter_map(|c| *c)
                    .collect::<Vec<Cartesian2DCoordinate>>();
                if !candidates.is_empty() {
                    let pick = candidates[random_index(&mut rng, candidates.len())];
                    assert!(g.is_linked(coord, pick), "{:?} should link to {:?}", coord, pick);
                    picks += 1;
                }
            }
            assert_eq!(picks, g.links_count());
        }
    }
}
