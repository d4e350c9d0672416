pub mod engine;
pub mod seed;

use std::fmt::{Display, Formatter, Result as FmtResult};

use rand::Rng;

use crate::{errors::GameOfLifeError, Result};
pub use engine::{count_neighbours, next_state, step, EdgePolicy, Simulation, TickStats};
pub use seed::SeedPattern;

/// Smallest board side the rule engine accepts.
pub const MIN_SIDE: usize = 3;

#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Default)]
pub enum CellState {
    Alive,
    #[default]
    Dead,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }
}

impl From<bool> for CellState {
    fn from(value: bool) -> Self {
        if value {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}

impl From<CellState> for bool {
    fn from(value: CellState) -> Self {
        value.is_alive()
    }
}

/// Fixed-size grid of cells, stored row-major.
///
/// Dimensions never change after construction. The only way a caller moves a
/// board forward is [`step`], which hands back a new board.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<Vec<CellState>>,
}

impl Board {
    pub fn empty(height: usize, width: usize) -> Result<Self> {
        if height < MIN_SIDE || width < MIN_SIDE {
            return Err(GameOfLifeError::InvalidDimension {
                height,
                width,
                min_height: MIN_SIDE,
                min_width: MIN_SIDE,
            });
        }
        Ok(Self {
            height,
            width,
            cells: vec![vec![CellState::Dead; width]; height],
        })
    }

    /// Allocates an all-dead board and seeds it with `pattern`.
    pub fn create<R: Rng + ?Sized>(
        height: usize,
        width: usize,
        pattern: &SeedPattern,
        rng: &mut R,
    ) -> Result<Self> {
        let mut board = Self::empty(height, width)?;
        pattern.apply(&mut board, rng)?;
        Ok(board)
    }

    pub fn from_cells(height: usize, width: usize, alive: &[(usize, usize)]) -> Result<Self> {
        let mut board = Self::empty(height, width)?;
        for &(row, col) in alive {
            if row >= height || col >= width {
                return Err(GameOfLifeError::InvalidDimension {
                    height,
                    width,
                    min_height: row + 1,
                    min_width: col + 1,
                });
            }
            board.set(row, col, CellState::Alive);
        }
        Ok(board)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn get(&self, row: usize, col: usize) -> Option<CellState> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(CellState::is_alive)
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, state: CellState) {
        self.cells[row][col] = state;
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.iter().map(|row| row.as_slice())
    }

    pub fn population(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| cell.is_alive())
            .count()
    }

    /// Live cells as `(row, col)`, in row-major order.
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .filter(|(_, cell)| cell.is_alive())
                    .map(move |(col, _)| (row, col))
            })
            .collect()
    }

    pub fn border_cells(&self) -> Vec<CellState> {
        (0..self.height)
            .flat_map(|row| (0..self.width).map(move |col| (row, col)))
            .filter(|&(row, col)| {
                row == 0 || col == 0 || row == self.height - 1 || col == self.width - 1
            })
            .map(|(row, col)| self.cells[row][col])
            .collect()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for row in self.rows() {
            for cell in row {
                let ch = if cell.is_alive() { 'o' } else { '.' };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
