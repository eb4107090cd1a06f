use log::{debug, trace};

use crate::cell_info::BaseCellInfo;
use crate::cells::CompassPrimary;
use crate::generators::{coin_flip, maze_extents, random_index, seeded_rng};
use crate::grid::Grid;

/// Apply the sidewinder maze generation algorithm to a new grid
/// The cells are visited row by row, west to east. Like the simple binary tree algorithm it picks
/// from one of two directions. The difference is that one direction (east) just carves in that
/// direction, but when we pick to close the run we carve a passage north from a random cell of
/// the most recent run of horizontal cells.
/// This algorithm will display a vertical bias, with most passages leading north.
///
/// The top row has nothing to the north, so it is carved east completely without any draws.
pub fn sidewinder(width: u32, height: u32, seed: u32) -> Option<Grid<BaseCellInfo>> {
    let (row_width, column_height) = maze_extents(width, height)?;
    debug!("Sidewinder maze {}x{} seed {}", width, height, seed);

    let mut rng = seeded_rng(seed);
    let mut grid = Grid::new(row_width, column_height);

    for (row_index, coordinates_line) in grid.iter_row().enumerate() {

        if row_index == 0 {
            for pair in coordinates_line.windows(2) {
                grid.connect(pair[0], pair[1]);
            }
            continue;
        }

        let mut run = vec![];
        for coord in coordinates_line {
            run.push(coord);

            let next_in_run_cell = grid.neighbour_at_direction(coord, CompassPrimary::East);
            let carve_east = next_in_run_cell.is_some() && coin_flip(&mut rng);

            match next_in_run_cell {
                Some(east_coord) if carve_east => grid.connect(coord, east_coord),
                _ => {
                    let run_member = run[random_index(&mut rng, run.len())];
                    if let Some(north_coord) = grid.neighbour_at_direction(run_member,
                                                                           CompassPrimary::North) {
                        trace!("Closing run of {} cells north at {:?}", run.len(), run_member);
                        grid.connect(run_member, north_coord);
                    }
                    run.clear();
                }
            }
        }
    }

    debug!("Sidewinder maze carved {} passages", grid.links_count());
    Some(grid)
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::cells::Cartesian2DCoordinate;
    use itertools::Itertools;

    #[test]
    fn top_row_is_one_corridor() {
        let g = sidewinder(5, 10, 0).unwrap();
        assert_eq!((g.width(), g.height()), (5, 10));
        let gc = |x, y| Cartesian2DCoordinate::new(x, y);
        for x in 0..4 {
            assert!(g.is_linked(gc(x, 0), gc(x + 1, 0)));
        }
        assert_eq!(g.sorted_links(), sidewinder(5, 10, 0).unwrap().sorted_links());
    }

    #[test]
    fn every_run_below_the_top_row_exits_north_once() {
        let g = sidewinder(7, 6, 99).unwrap();
        for row in g.iter_row().skip(1) {
            // Runs are the maximal east linked stretches of a row.
            let mut north_exits_in_run = 0;
            for coord in row {
                if g.is_neighbour_linked(coord, CompassPrimary::North) {
                    north_exits_in_run += 1;
                }
                if !g.is_neighbour_linked(coord, CompassPrimary::East) {
                    assert_eq!(north_exits_in_run, 1, "run ending at {:?}", coord);
                    north_exits_in_run = 0;
                }
            }
        }
    }

    #[test]
    fn single_column_is_a_corridor() {
        let g = sidewinder(1, 5, 3).unwrap();
        assert_eq!(g.links_count(), 4);
        assert!(g.is_perfect_maze());
    }

    #[test]
    fn draws_start_on_the_second_row() {
        for &(w, h, seed) in &[(5, 10, 0), (8, 3, 41), (1, 4, 7), (3, 1, 5)] {
            let gc = |x, y| Cartesian2DCoordinate::new(x, y);
            let mut rng = seeded_rng(seed);
            let mut expected = (1..w).map(|x| (gc(x - 1, 0), gc(x, 0))).collect::<Vec<_>>();

            for y in 1..h {
                let mut run_start = 0;
                for x in 0..w {
                    if x + 1 < w && coin_flip(&mut rng) {
                        expected.push((gc(x, y), gc(x + 1, y)));
                    } else {
                        let run_length = (x - run_start + 1) as usize;
                        let member = run_start + random_index(&mut rng, run_length) as u32;
                        expected.push((gc(member, y - 1), gc(member, y)));
                        run_start = x + 1;
                    }
                }
            }

            let expected = expected.into_iter().sorted().collect::<Vec<_>>();
            assert_eq!(sidewinder(w, h, seed).unwrap().sorted_links(), expected);
        }
    }
}
