use std::fmt;

use crate::cells::Cartesian2DCoordinate;
use crate::grid_dimensions::RectGridDimensions;
use crate::units::{ColumnIndex, ColumnLength, ColumnsCount, RowIndex, RowLength, RowsCount};

// The iterators own a copy of the dimensions rather than borrowing the grid, so generators can
// carve passages while scanning.

#[derive(Clone)]
pub struct RectGridCellIter {
    dimensions: RectGridDimensions,
    current_cell_number: usize,
    cells_count: usize,
}

impl RectGridCellIter {
    pub fn new(dimensions: RectGridDimensions) -> RectGridCellIter {
        RectGridCellIter {
            dimensions,
            current_cell_number: 0,
            cells_count: dimensions.size().0,
        }
    }
}

impl fmt::Debug for RectGridCellIter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "CellIter :: current_cell_number: {:?}, cells_count: {:?}",
               self.current_cell_number,
               self.cells_count)
    }
}

impl ExactSizeIterator for RectGridCellIter {} // default impl using size_hint()
impl Iterator for RectGridCellIter {
    type Item = Cartesian2DCoordinate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let coord = Cartesian2DCoordinate::from_row_major_index(self.current_cell_number,
                                                                    &self.dimensions);
            self.current_cell_number += 1;
            Some(coord)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.cells_count - self.current_cell_number;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}

#[derive(Debug, Copy, Clone)]
enum BatchIterType {
    Row,
    Column,
}

#[derive(Debug, Copy, Clone)]
pub struct RectBatchIter {
    iter_type: BatchIterType,
    current_index: usize,
    row_length: RowLength,
    rows_size: RowsCount,
    col_length: ColumnLength,
    cols_size: ColumnsCount,
}

impl RectBatchIter {
    pub fn rows(dimensions: RectGridDimensions) -> RectBatchIter {
        RectBatchIter::new(BatchIterType::Row, dimensions)
    }

    pub fn columns(dimensions: RectGridDimensions) -> RectBatchIter {
        RectBatchIter::new(BatchIterType::Column, dimensions)
    }

    fn new(iter_type: BatchIterType, dimensions: RectGridDimensions) -> RectBatchIter {
        RectBatchIter {
            iter_type,
            current_index: 0,
            row_length: dimensions.row_length(),
            rows_size: dimensions.rows(),
            col_length: dimensions.column_length(),
            cols_size: dimensions.columns(),
        }
    }

    fn batches_count(&self) -> usize {
        // A batch of zero cells is never yielded.
        match self.iter_type {
            BatchIterType::Row if self.row_length.0 > 0 => self.rows_size.0,
            BatchIterType::Column if self.col_length.0 > 0 => self.cols_size.0,
            _ => 0,
        }
    }
}

impl ExactSizeIterator for RectBatchIter {} // default impl using size_hint()
impl Iterator for RectBatchIter {
    type Item = Vec<Cartesian2DCoordinate>;
    fn next(&mut self) -> Option<Self::Item> {

        if self.current_index >= self.batches_count() {
            return None;
        }

        let index = self.current_index;
        let coords = match self.iter_type {
            BatchIterType::Row => {
                (0..self.row_length.0)
                    .map(|i: usize| {
                        Cartesian2DCoordinate::from_row_column_indices(ColumnIndex(i),
                                                                       RowIndex(index))
                    })
                    .collect()
            }
            BatchIterType::Column => {
                (0..self.col_length.0)
                    .map(|i: usize| {
                        Cartesian2DCoordinate::from_row_column_indices(ColumnIndex(index),
                                                                       RowIndex(i))
                    })
                    .collect()
            }
        };
        self.current_index += 1;
        Some(coords)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.batches_count().saturating_sub(self.current_index);
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}
