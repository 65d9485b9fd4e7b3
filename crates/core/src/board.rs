//! Board module - manages the game grid
//!
//! The grid is `rows x cols` cells stored in a flat vector, row-major.
//! Coordinates are `(row, col)`: row 0 is the top of the visible board and row
//! `rows - 1` is the floor pieces land on.
//!
//! Win detection walks outward from a single cell in both directions along
//! each axis, clamped to the grid bounds.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::types::{Axis, Cell, Player, WIN_LENGTH};

/// A maximal run of one player's pieces through a cell along an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    pub axis: Axis,
    /// First cell of the run (walking against the axis step).
    pub start: (usize, usize),
    /// Last cell of the run (walking along the axis step).
    pub end: (usize, usize),
    pub len: usize,
}

impl Line {
    /// Iterate the cells of the run from `start` to `end`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (dr, dc) = self.axis.step();
        let (r0, c0) = (self.start.0 as isize, self.start.1 as isize);
        (0..self.len as isize).map(move |i| ((r0 + dr * i) as usize, (c0 + dc * i) as usize))
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells().any(|c| c == (row, col))
    }
}

/// Up to one winning line per axis.
pub type WinningLines = ArrayVec<Line, 4>;

/// The game grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid.
    ///
    /// Callers validate the shape; a zero dimension yields a grid with no cells.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    /// Parse a grid from text rows, top row first.
    ///
    /// `A`/`X` is player A, `B`/`O` is player B, anything else is empty.
    /// Returns `None` if rows have different lengths or there are none.
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let cols = rows.first()?.chars().count();
        if cols == 0 || rows.iter().any(|r| r.chars().count() != cols) {
            return None;
        }
        let cells = rows
            .iter()
            .flat_map(|r| r.chars())
            .map(|ch| match ch {
                'A' | 'X' => Cell::PlayerA,
                'B' | 'O' => Cell::PlayerB,
                _ => Cell::Empty,
            })
            .collect();
        Some(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get cell at `(row, col)`.
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Signed lookup used by the scan; anything outside the grid is `None`.
    fn get_signed(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        self.get(row as usize, col as usize)
    }

    /// Set cell at `(row, col)`.
    /// Returns false if out of bounds
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Bottommost empty row in `col`, or `None` if the column is full or out of range.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        (0..self.rows)
            .rev()
            .find(|&row| self.cells[row * self.cols + col].is_empty())
    }

    pub fn is_column_full(&self, col: usize) -> bool {
        self.landing_row(col).is_none()
    }

    /// Column indices that still accept a piece.
    pub fn open_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.cols).filter(|&c| !self.is_column_full(c))
    }

    /// True once no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Count consecutive `player` cells starting one step away from `(row, col)`.
    fn walk(&self, row: usize, col: usize, dr: isize, dc: isize, player: Player) -> usize {
        let want = Cell::from(player);
        let mut n = 0;
        let (mut r, mut c) = (row as isize + dr, col as isize + dc);
        while self.get_signed(r, c) == Some(want) {
            n += 1;
            r += dr;
            c += dc;
        }
        n
    }

    /// The maximal run through `(row, col)` along `axis` for the cell's owner.
    ///
    /// Returns `None` for empty or out-of-range cells.
    pub fn run_through(&self, row: usize, col: usize, axis: Axis) -> Option<Line> {
        let player = self.get(row, col)?.owner()?;
        let (dr, dc) = axis.step();
        let forward = self.walk(row, col, dr, dc, player);
        let backward = self.walk(row, col, -dr, -dc, player);

        let start = (
            (row as isize - dr * backward as isize) as usize,
            (col as isize - dc * backward as isize) as usize,
        );
        let end = (
            (row as isize + dr * forward as isize) as usize,
            (col as isize + dc * forward as isize) as usize,
        );
        Some(Line {
            axis,
            start,
            end,
            len: 1 + forward + backward,
        })
    }

    /// Every axis through `(row, col)` whose run reaches four.
    pub fn winning_lines(&self, row: usize, col: usize) -> WinningLines {
        Axis::ALL
            .iter()
            .filter_map(|&axis| self.run_through(row, col, axis))
            .filter(|line| line.len >= WIN_LENGTH)
            .collect()
    }

    /// Whole-board check: does `player` own four in a row anywhere?
    ///
    /// The engine only scans around the landing cell; this is for callers
    /// validating arbitrary positions.
    pub fn has_four(&self, player: Player) -> bool {
        let want = Cell::from(player);
        (0..self.rows).any(|row| {
            (0..self.cols).any(|col| {
                self.get(row, col) == Some(want) && !self.winning_lines(row, col).is_empty()
            })
        })
    }

    /// Mirror the grid left to right.
    pub fn mirrored(&self) -> Self {
        let mut out = Self::new(self.rows, self.cols);
        for row in 0..self.rows {
            for col in 0..self.cols {
                out.cells[row * self.cols + (self.cols - 1 - col)] = self.cells[row * self.cols + col];
            }
        }
        out
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows top to bottom as slices.
    pub fn row_slices(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks() panics on 0; an empty grid has no rows anyway
        self.cells.chunks(self.cols.max(1))
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }
}
