use log::debug;

use crate::cell_info::{CellInfo, DistanceCellInfo};
use crate::cells::Cartesian2DCoordinate;
use crate::generators::{maze_extents, random_index, seeded_rng};
use crate::grid::Grid;
use crate::grid_dimensions::RectGridDimensions;

/// Apply a randomised depth first search (the recursive backtracker) to a new grid.
///
/// Starting from `start` (the north west corner by default) the unvisited neighbours of the cell on
/// top of the stack are all discovered at once: they are marked visited one step further from the
/// start and linked to the current cell. One of them is picked at random and pushed after the others,
/// so the walk keeps going deeper from it and only backtracks to the rest later.
///
/// Returns None if the grid would be empty or `start` lies outside it.
pub fn depth_first_search(width: u32,
                          height: u32,
                          start: Option<Cartesian2DCoordinate>,
                          seed: u32)
                          -> Option<Grid<DistanceCellInfo>> {
    let (row_width, column_height) = maze_extents(width, height)?;
    let start = start.unwrap_or_default();
    if !RectGridDimensions::new(row_width, column_height).contains(start) {
        return None;
    }
    debug!("Depth first search maze {}x{} from {:?} seed {}", width, height, start, seed);

    let mut rng = seeded_rng(seed);
    let mut grid: Grid<DistanceCellInfo> = Grid::new(row_width, column_height);

    grid[start].set_visited(true);
    grid[start].root_distance = 0;
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {

        let unvisited = grid.neighbours_by_visited(current, false);
        if unvisited.is_empty() {
            continue;
        }

        let chosen_index = random_index(&mut rng, unvisited.len());
        let next_distance = grid[current].root_distance + 1;
        for neighbour in unvisited.iter() {
            let info = &mut grid[*neighbour];
            info.set_visited(true);
            info.root_distance = next_distance;
        }
        grid.connect_all(current, &unvisited);

        stack.extend(unvisited.iter()
                              .enumerate()
                              .filter(|&(i, _)| i != chosen_index)
                              .map(|(_, coord)| *coord));
        stack.push(unvisited[chosen_index]);
    }

    debug!("Depth first search maze carved {} passages", grid.links_count());
    Some(grid)
}
