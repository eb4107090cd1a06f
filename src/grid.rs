use bit_set::BitSet;
use itertools::Itertools;
use petgraph::graph::{self, NodeIndex};
use petgraph::{Graph, Undirected};
use std::fmt;
use std::ops;
use std::slice;

use crate::cell_info::{BaseCellInfo, CellInfo};
use crate::cells::{Cartesian2DCoordinate, CompassPrimary, CoordinateOptionSmallVec,
                   CoordinateSmallVec};
use crate::grid_dimensions::RectGridDimensions;
use crate::grid_iterators::{RectBatchIter, RectGridCellIter};
use crate::units::{ColumnIndex, ColumnLength, EdgesCount, NodesCount, RowIndex, RowLength};

/// Node index width of the underlying graph.
pub type GridIndexType = u32;

/// A rectangular grid of cells whose passages form an undirected graph.
///
/// Cells live in a flat arena (the graph's node list) in row major order and carry an `Info`
/// payload. Passages are graph edges between node indices, so they are symmetric by construction
/// and cells never own one another.
#[derive(Clone)]
pub struct Grid<Info = BaseCellInfo> {
    graph: Graph<Info, (), Undirected, GridIndexType>,
    dimensions: RectGridDimensions,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CellLinkError {
    InvalidGridCoordinate,
    SelfLink,
}

impl<Info: CellInfo> fmt::Debug for Grid<Info> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "Grid :: graph: {:?}, width: {:?}, height: {:?}",
               self.graph,
               self.width(),
               self.height())
    }
}

impl<Info: CellInfo> Grid<Info> {
    /// A grid of `row_width * column_height` unconnected cells with default payloads.
    pub fn new(row_width: RowLength, column_height: ColumnLength) -> Grid<Info> {
        Grid::with_connectivity(row_width, column_height, false)
    }

    /// A grid where every cell is connected to all of its orthogonal neighbours, the starting point
    /// for wall building generators.
    pub fn fully_connected(row_width: RowLength, column_height: ColumnLength) -> Grid<Info> {
        Grid::with_connectivity(row_width, column_height, true)
    }

    fn with_connectivity(row_width: RowLength,
                         column_height: ColumnLength,
                         connected: bool)
                         -> Grid<Info> {

        let dimensions = RectGridDimensions::new(row_width, column_height);
        let (NodesCount(nodes), EdgesCount(edges)) = dimensions.graph_size();
        let edges_capacity = if connected { edges } else { nodes.saturating_sub(1) };

        let mut grid = Grid {
            graph: Graph::with_capacity(nodes, edges_capacity),
            dimensions,
        };
        for _ in 0..nodes {
            let _ = grid.graph.add_node(Info::default());
        }

        if connected {
            for coord in grid.iter() {
                for dir in &[CompassPrimary::West, CompassPrimary::North] {
                    if let Some(neighbour) = grid.neighbour_at_direction(coord, *dir) {
                        grid.connect(coord, neighbour);
                    }
                }
            }
        }

        grid
    }

    #[inline]
    pub fn dimensions(&self) -> &RectGridDimensions {
        &self.dimensions
    }

    /// Number of columns, 0 for a grid without cells.
    #[inline]
    pub fn width(&self) -> u32 {
        if self.dimensions.is_empty() {
            0
        } else {
            self.dimensions.row_length().0 as u32
        }
    }

    /// Number of rows, 0 for a grid without cells.
    #[inline]
    pub fn height(&self) -> u32 {
        if self.dimensions.is_empty() {
            0
        } else {
            self.dimensions.column_length().0 as u32
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.dimensions.size().0
    }

    #[inline]
    pub fn links_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Link two cells
    ///
    /// Linking already linked cells is a no-op.
    pub fn try_connect(&mut self,
                       a: Cartesian2DCoordinate,
                       b: Cartesian2DCoordinate)
                       -> Result<(), CellLinkError> {
        if a != b {
            let a_index_opt = self.grid_coordinate_graph_index(a);
            let b_index_opt = self.grid_coordinate_graph_index(b);
            match (a_index_opt, b_index_opt) {
                (Some(a_index), Some(b_index)) => {
                    let _ = self.graph.update_edge(a_index, b_index, ());
                    Ok(())
                }
                _ => Err(CellLinkError::InvalidGridCoordinate),
            }
        } else {
            Err(CellLinkError::SelfLink)
        }
    }

    /// Link two cells
    ///
    /// Panics if a cell does not exist or if `a == b`.
    pub fn connect(&mut self, a: Cartesian2DCoordinate, b: Cartesian2DCoordinate) {
        if let Err(e) = self.try_connect(a, b) {
            panic!("Cannot link {:?} to {:?}: {:?}", a, b, e);
        }
    }

    /// Link a cell to each of `neighbours`.
    pub fn connect_all(&mut self, a: Cartesian2DCoordinate, neighbours: &[Cartesian2DCoordinate]) {
        for &neighbour in neighbours {
            self.connect(a, neighbour);
        }
    }

    /// Unlink two cells, if the grid coordinates are valid and a link exists between them.
    /// Returns true if an unlink occurred.
    pub fn disconnect(&mut self, a: Cartesian2DCoordinate, b: Cartesian2DCoordinate) -> bool {
        let a_index_opt = self.grid_coordinate_graph_index(a);
        let b_index_opt = self.grid_coordinate_graph_index(b);

        if let (Some(a_index), Some(b_index)) = (a_index_opt, b_index_opt) {
            if let Some(edge_index) = self.graph.find_edge(a_index, b_index) {
                // Invalidates the last edge index in the graph, which is fine as we
                // are not storing them for any reason.
                self.graph.remove_edge(edge_index);
                return true;
            }
        }

        false
    }

    /// Build a horizontal wall inside the sub rectangle at `origin`: every cell of row `row`
    /// (relative to `origin`) is unlinked from the cell south of it, except at column `gate`.
    pub fn disconnect_row(&mut self,
                          origin: Cartesian2DCoordinate,
                          row: RowIndex,
                          row_length: RowLength,
                          gate: ColumnIndex) {
        let (RowIndex(row), RowLength(length), ColumnIndex(gate)) = (row, row_length, gate);
        for x in (0..length).filter(|&x| x != gate) {
            let north = Cartesian2DCoordinate::new(origin.x + x as u32, origin.y + row as u32);
            let south = Cartesian2DCoordinate::new(north.x, north.y + 1);
            let _ = self.disconnect(north, south);
        }
    }

    /// Build a vertical wall inside the sub rectangle at `origin`: every cell of column `column`
    /// (relative to `origin`) is unlinked from the cell east of it, except at row `gate`.
    pub fn disconnect_column(&mut self,
                             origin: Cartesian2DCoordinate,
                             column: ColumnIndex,
                             column_length: ColumnLength,
                             gate: RowIndex) {
        let (ColumnIndex(column), ColumnLength(length), RowIndex(gate)) =
            (column, column_length, gate);
        for y in (0..length).filter(|&y| y != gate) {
            let west = Cartesian2DCoordinate::new(origin.x + column as u32, origin.y + y as u32);
            let east = Cartesian2DCoordinate::new(west.x + 1, west.y);
            let _ = self.disconnect(west, east);
        }
    }

    /// Cell nodes that are linked to a particular node by a passage.
    pub fn links(&self, coord: Cartesian2DCoordinate) -> Option<CoordinateSmallVec> {

        self.grid_coordinate_graph_index(coord).map(|graph_node_index| {
            self.graph
                .neighbors(graph_node_index)
                .map(|linked_index| self.node_index_coordinate(linked_index))
                .collect()
        })
    }

    /// Every passage in the grid, normalised so the smaller coordinate comes first, and sorted.
    /// Two grids with equal sorted links have identical passages.
    pub fn sorted_links(&self) -> Vec<(Cartesian2DCoordinate, Cartesian2DCoordinate)> {
        self.iter_links()
            .map(|(a, b)| if a <= b { (a, b) } else { (b, a) })
            .sorted()
            .collect()
    }

    /// Cell nodes that are to the West, North, East or South of a particular node, but not
    /// necessarily linked by a passage. Always reported in that order.
    pub fn neighbours(&self, coord: Cartesian2DCoordinate) -> CoordinateSmallVec {
        CompassPrimary::ALL
            .iter()
            .filter_map(|dir| self.neighbour_at_direction(coord, *dir))
            .collect()
    }

    /// Neighbours (in `neighbours` order) whose payload visited flag equals `visited`.
    pub fn neighbours_by_visited(&self,
                                 coord: Cartesian2DCoordinate,
                                 visited: bool)
                                 -> CoordinateSmallVec {
        self.neighbours(coord)
            .into_iter()
            .filter(|neighbour| self[*neighbour].is_visited() == visited)
            .collect()
    }

    pub fn neighbours_at_directions(&self,
                                    coord: Cartesian2DCoordinate,
                                    dirs: &[CompassPrimary])
                                    -> CoordinateOptionSmallVec {
        dirs.iter()
            .map(|direction| self.neighbour_at_direction(coord, *direction))
            .collect()
    }

    pub fn neighbour_at_direction(&self,
                                  coord: Cartesian2DCoordinate,
                                  direction: CompassPrimary)
                                  -> Option<Cartesian2DCoordinate> {
        if !self.is_valid_coordinate(coord) {
            return None;
        }
        coord.offset(direction)
             .filter(|neighbour_coord| self.is_valid_coordinate(*neighbour_coord))
    }

    /// Are two cells in the grid linked?
    pub fn is_linked(&self, a: Cartesian2DCoordinate, b: Cartesian2DCoordinate) -> bool {
        let a_index_opt = self.grid_coordinate_graph_index(a);
        let b_index_opt = self.grid_coordinate_graph_index(b);
        if let (Some(a_index), Some(b_index)) = (a_index_opt, b_index_opt) {
            self.graph.find_edge(a_index, b_index).is_some()
        } else {
            false
        }
    }

    pub fn is_neighbour_linked(&self,
                               coord: Cartesian2DCoordinate,
                               direction: CompassPrimary)
                               -> bool {
        self.neighbour_at_direction(coord, direction)
            .map_or(false, |neighbour_coord| self.is_linked(coord, neighbour_coord))
    }

    /// The attribute payload of a cell, None if the coordinate is outside the grid.
    pub fn info(&self, coord: Cartesian2DCoordinate) -> Option<&Info> {
        self.grid_coordinate_graph_index(coord)
            .and_then(move |index| self.graph.node_weight(index))
    }

    pub fn info_mut(&mut self, coord: Cartesian2DCoordinate) -> Option<&mut Info> {
        match self.grid_coordinate_graph_index(coord) {
            Some(index) => self.graph.node_weight_mut(index),
            None => None,
        }
    }

    /// Convert a grid coordinate to a one dimensional index in the range 0...grid.size().
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn grid_coordinate_to_index(&self, coord: Cartesian2DCoordinate) -> Option<usize> {
        self.dimensions.coordinate_to_index(coord)
    }

    /// Is the grid coordinate valid for this grid - within the grid's dimensions
    #[inline]
    pub fn is_valid_coordinate(&self, coord: Cartesian2DCoordinate) -> bool {
        self.dimensions.contains(coord)
    }

    #[inline]
    pub fn iter(&self) -> RectGridCellIter {
        RectGridCellIter::new(self.dimensions)
    }

    #[inline]
    pub fn iter_row(&self) -> RectBatchIter {
        RectBatchIter::rows(self.dimensions)
    }

    #[inline]
    pub fn iter_column(&self) -> RectBatchIter {
        RectBatchIter::columns(self.dimensions)
    }

    pub fn iter_links(&self) -> LinksIter<'_> {
        LinksIter {
            graph_edge_iter: self.graph.raw_edges().iter(),
            dimensions: &self.dimensions,
        }
    }

    /// A perfect maze has exactly one path between any two cells: the passages form a spanning
    /// tree. An empty grid is never a maze.
    pub fn is_perfect_maze(&self) -> bool {
        let cells_count = self.size();
        if cells_count == 0 || self.links_count() != cells_count - 1 {
            return false;
        }

        let mut reached = BitSet::with_capacity(cells_count);
        let start = NodeIndex::<GridIndexType>::new(0);
        let _ = reached.insert(start.index());
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            for neighbour in self.graph.neighbors(node) {
                if reached.insert(neighbour.index()) {
                    stack.push(neighbour);
                }
            }
        }

        reached.len() == cells_count
    }

    /// Cells with exactly one passage.
    pub fn dead_ends(&self) -> Vec<Cartesian2DCoordinate> {
        self.graph
            .node_indices()
            .filter(|&node| self.graph.neighbors(node).count() == 1)
            .map(|node| self.node_index_coordinate(node))
            .collect()
    }

    #[inline]
    fn node_index_coordinate(&self, index: NodeIndex<GridIndexType>) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::from_row_major_index(index.index(), &self.dimensions)
    }

    /// Convert a grid coordinate into petgraph nodeindex
    /// Returns None if the grid coordinate is invalid (out of the grid's dimensions).
    #[inline]
    fn grid_coordinate_graph_index(&self,
                                   coord: Cartesian2DCoordinate)
                                   -> Option<NodeIndex<GridIndexType>> {
        self.grid_coordinate_to_index(coord).map(NodeIndex::<GridIndexType>::new)
    }
}

impl<Info: CellInfo> ops::Index<Cartesian2DCoordinate> for Grid<Info> {
    type Output = Info;

    /// Panics if the coordinate is outside the grid.
    fn index(&self, coord: Cartesian2DCoordinate) -> &Self::Output {
        self.info(coord)
            .unwrap_or_else(|| panic!("Index out of bounds: {:?}", coord))
    }
}

impl<Info: CellInfo> ops::IndexMut<Cartesian2DCoordinate> for Grid<Info> {
    fn index_mut(&mut self, coord: Cartesian2DCoordinate) -> &mut Self::Output {
        self.info_mut(coord)
            .unwrap_or_else(|| panic!("Index out of bounds: {:?}", coord))
    }
}

pub struct LinksIter<'a> {
    graph_edge_iter: slice::Iter<'a, graph::Edge<(), GridIndexType>>,
    dimensions: &'a RectGridDimensions,
}

impl<'a> Iterator for LinksIter<'a> {
    type Item = (Cartesian2DCoordinate, Cartesian2DCoordinate);

    fn next(&mut self) -> Option<Self::Item> {
        self.graph_edge_iter.next().map(|edge| {
            let src_cell_coord = Cartesian2DCoordinate::from_row_major_index(edge.source()
                                                                                 .index(),
                                                                             self.dimensions);
            let dst_cell_coord = Cartesian2DCoordinate::from_row_major_index(edge.target()
                                                                                 .index(),
                                                                             self.dimensions);
            (src_cell_coord, dst_cell_coord)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.graph_edge_iter.size_hint()
    }
}
impl<'a> ExactSizeIterator for LinksIter<'a> {} // default impl using size_hint()

impl<'a> fmt::Debug for LinksIter<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LinksIter :: edges iter : {:?}", self.graph_edge_iter)
    }
}
