use log::debug;

use crate::{pos, Cell, Pos};

/// Fixed-size grid of cells, stored row-major.
///
/// Dimensions are set once by the constructor and never change; a new
/// generation is a new `Grid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![Cell::inactive(); rows * cols],
            rows,
            cols,
        }
    }

    /// Builds an otherwise dead grid with every listed position alive.
    /// Positions outside the grid are skipped.
    pub fn with_actives(rows: usize, cols: usize, actives: impl IntoIterator<Item = Pos>) -> Self {
        let mut grid = Self::new(rows, cols);
        for pos in actives.into_iter() {
            if grid.contains(pos) {
                grid.set(pos, Cell::active());
            } else {
                debug!("seed cell {pos:?} lies outside the {rows}x{cols} grid, skipped");
            }
        }
        grid
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, Pos { row, col }: Pos) -> bool {
        row < self.rows && col < self.cols
    }

    fn index(&self, Pos { row, col }: Pos) -> usize {
        row * self.cols + col
    }

    /// Out-of-bounds positions read as dead.
    pub fn get(&self, pos: Pos) -> Cell {
        if self.contains(pos) {
            self.cells[self.index(pos)]
        } else {
            Cell::inactive()
        }
    }

    pub fn is_alive(&self, pos: Pos) -> bool {
        self.get(pos).is_active()
    }

    /// Out-of-bounds writes are ignored.
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        if self.contains(pos) {
            let index = self.index(pos);
            self.cells[index] = cell;
        }
    }

    /// `None` past the last row.
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        self.cells.get(start..start + self.cols)
    }

    pub fn actives(&self) -> Vec<Pos> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| {
                cell.is_active()
                    .then_some(pos!(index / self.cols, index % self.cols))
            })
            .collect()
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_active()).count()
    }
}
