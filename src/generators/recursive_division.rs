use log::{debug, trace};

use crate::cell_info::BaseCellInfo;
use crate::cells::Cartesian2DCoordinate;
use crate::generators::{coin_flip, maze_extents, random_index, seeded_rng};
use crate::grid::Grid;
use crate::units::{ColumnIndex, ColumnLength, RowIndex, RowLength};

/// A rectangular region of the grid still to be divided.
#[derive(Debug, Copy, Clone)]
struct Chamber {
    origin: Cartesian2DCoordinate,
    width: usize,
    height: usize,
}

impl Chamber {
    #[inline]
    fn is_divisible(&self) -> bool {
        self.width >= 2 && self.height >= 2
    }
}

/// Apply the recursive division maze generation algorithm to a new grid.
/// Unlike the passage carving generators this one builds walls. It starts with every neighbouring
/// cell linked, then splits the grid with a wall that has a single gate in it, and keeps splitting
/// the two halves until the chambers are one cell wide or high.
///
/// The top (or left) half is always finished before the bottom (or right) half.
pub fn recursive_division(width: u32, height: u32, seed: u32) -> Option<Grid<BaseCellInfo>> {
    let (row_width, column_height) = maze_extents(width, height)?;
    debug!("Recursive division maze {}x{} seed {}", width, height, seed);

    let mut rng = seeded_rng(seed);
    let mut grid: Grid<BaseCellInfo> = Grid::fully_connected(row_width, column_height);

    let mut chambers = vec![Chamber {
                                origin: Cartesian2DCoordinate::new(0, 0),
                                width: row_width.0,
                                height: column_height.0,
                            }];

    while let Some(chamber) = chambers.pop() {
        if !chamber.is_divisible() {
            continue;
        }
        let Chamber { origin, width, height } = chamber;

        let (first, second) = if coin_flip(&mut rng) {
            let wall = random_index(&mut rng, height - 1);
            let gate = random_index(&mut rng, width);
            trace!("Horizontal wall at row {} of {:?}, gate {}", wall, chamber, gate);
            grid.disconnect_row(origin, RowIndex(wall), RowLength(width), ColumnIndex(gate));

            let split = wall + 1;
            (Chamber { origin, width, height: split },
             Chamber {
                 origin: Cartesian2DCoordinate::new(origin.x, origin.y + split as u32),
                 width,
                 height: height - split,
             })
        } else {
            let wall = random_index(&mut rng, width - 1);
            let gate = random_index(&mut rng, height);
            trace!("Vertical wall at column {} of {:?}, gate {}", wall, chamber, gate);
            grid.disconnect_column(origin, ColumnIndex(wall), ColumnLength(height), RowIndex(gate));

            let split = wall + 1;
            (Chamber { origin, width: split, height },
             Chamber {
                 origin: Cartesian2DCoordinate::new(origin.x + split as u32, origin.y),
                 width: width - split,
                 height,
             })
        };

        chambers.push(second);
        chambers.push(first);
    }

    debug!("Recursive division maze kept {} passages", grid.links_count());
    Some(grid)
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::generators::MazeRng;

    /// Plain recursive division drawing from the same stream, top/left chamber first.
    fn divide(grid: &mut Grid,
              rng: &mut MazeRng,
              origin: Cartesian2DCoordinate,
              width: usize,
              height: usize) {
        if width < 2 || height < 2 {
            return;
        }
        if coin_flip(rng) {
            let wall = random_index(rng, height - 1);
            let gate = random_index(rng, width);
            grid.disconnect_row(origin, RowIndex(wall), RowLength(width), ColumnIndex(gate));
            divide(grid, rng, origin, width, wall + 1);
            divide(grid,
                   rng,
                   Cartesian2DCoordinate::new(origin.x, origin.y + wall as u32 + 1),
                   width,
                   height - wall - 1);
        } else {
            let wall = random_index(rng, width - 1);
            let gate = random_index(rng, height);
            grid.disconnect_column(origin, ColumnIndex(wall), ColumnLength(height), RowIndex(gate));
            divide(grid, rng, origin, wall + 1, height);
            divide(grid,
                   rng,
                   Cartesian2DCoordinate::new(origin.x + wall as u32 + 1, origin.y),
                   width - wall - 1,
                   height);
        }
    }

    #[test]
    fn thin_grids_are_never_divided() {
        let g = recursive_division(2, 1, 0).unwrap();
        assert_eq!(g.links_count(), 1);

        let g = recursive_division(1, 6, 0).unwrap();
        assert_eq!(g.links_count(), 5);
        assert!(g.is_perfect_maze());
    }

    #[test]
    fn square_of_four() {
        for seed in 0..8 {
            let g = recursive_division(2, 2, seed).unwrap();
            assert_eq!(g.links_count(), 3);
            assert!(g.is_perfect_maze());
        }
    }

    #[test]
    fn large_grids_divide_fully() {
        let g = recursive_division(40, 25, 2024).unwrap();
        assert_eq!(g.links_count(), 40 * 25 - 1);
        assert!(g.is_perfect_maze());
    }

    #[test]
    fn chambers_divide_in_recursive_order() {
        for &(w, h, seed) in &[(12, 9, 0), (5, 17, 3), (2, 2, 8), (30, 4, 77)] {
            let mut expected: Grid = Grid::fully_connected(RowLength(w), ColumnLength(h));
            let mut rng = seeded_rng(seed);
            divide(&mut expected, &mut rng, Cartesian2DCoordinate::new(0, 0), w, h);

            let g = recursive_division(w as u32, h as u32, seed).unwrap();
            assert_eq!(g.sorted_links(), expected.sorted_links());
        }
    }
}
