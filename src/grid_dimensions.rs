use crate::cells::Cartesian2DCoordinate;
use crate::units::{ColumnLength, ColumnsCount, EdgesCount, NodesCount, RowLength, RowsCount};


#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RectGridDimensions {
    row_width: RowLength,
    column_height: ColumnLength,
}

impl RectGridDimensions {
    pub fn new(row_width: RowLength, column_height: ColumnLength) -> RectGridDimensions {
        RectGridDimensions {
            row_width,
            column_height,
        }
    }

    #[inline(always)]
    pub fn size(&self) -> NodesCount {
        NodesCount(self.row_width.0 * self.column_height.0)
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.size().0 == 0
    }

    #[inline(always)]
    pub fn rows(&self) -> RowsCount {
        RowsCount(self.column_height.0)
    }

    #[inline(always)]
    pub fn row_length(&self) -> RowLength {
        self.row_width
    }

    #[inline(always)]
    pub fn columns(&self) -> ColumnsCount {
        ColumnsCount(self.row_width.0)
    }

    #[inline(always)]
    pub fn column_length(&self) -> ColumnLength {
        self.column_height
    }

    /// Cells and the number of orthogonally adjacent cell pairs, the most passages a grid of these
    /// dimensions can hold.
    pub fn graph_size(&self) -> (NodesCount, EdgesCount) {
        let (w, h) = (self.row_width.0, self.column_height.0);
        let horizontal = w.saturating_sub(1) * h;
        let vertical = h.saturating_sub(1) * w;
        (self.size(), EdgesCount(horizontal + vertical))
    }

    #[inline]
    pub fn contains(&self, coord: Cartesian2DCoordinate) -> bool {
        (coord.x as usize) < self.row_width.0 && (coord.y as usize) < self.column_height.0
    }

    /// Convert a grid coordinate to a one dimensional row major index in the range 0..size.
    /// Returns None if the coordinate is outside the dimensions.
    #[inline]
    pub fn coordinate_to_index(&self, coord: Cartesian2DCoordinate) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.y as usize * self.row_width.0 + coord.x as usize)
        } else {
            None
        }
    }
}
