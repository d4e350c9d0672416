use std::fmt::{Display, Formatter, Result as FmtResult};

use log::debug;
use rand::Rng;

use crate::{
    errors::GameOfLifeError,
    game::{Board, CellState, MIN_SIDE},
    Result,
};

/// One cell in thirteen starts alive.
pub const DEFAULT_DENSITY: f64 = 1.0 / 13.0;

/// Horizontal line of ten cells through the midpoint.
const BAR: [(i32, i32); 10] = [
    (0, -5),
    (0, -4),
    (0, -3),
    (0, -2),
    (0, -1),
    (0, 0),
    (0, 1),
    (0, 2),
    (0, 3),
    (0, 4),
];

/// Lightweight spaceship, travelling right.
const SPACESHIP: [(i32, i32); 9] = [
    (0, 0),
    (-2, 0),
    (0, 3),
    (-3, 1),
    (-3, 2),
    (-3, 3),
    (-3, 4),
    (-2, 4),
    (-1, 4),
];

/// Initial board layouts, selected by `--init`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SeedPattern {
    Random(f64),
    Bar,
    Spaceship,
}

impl SeedPattern {
    /// Resolves an `--init` name. `density` only matters for `rand`.
    pub fn parse(name: &str, density: f64) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "rand" | "random" => {
                check_density(density)?;
                Ok(SeedPattern::Random(density))
            }
            "bar" => Ok(SeedPattern::Bar),
            "spaceship" => Ok(SeedPattern::Spaceship),
            _ => Err(GameOfLifeError::UnknownPattern(name.to_owned())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SeedPattern::Random(_) => "rand",
            SeedPattern::Bar => "bar",
            SeedPattern::Spaceship => "spaceship",
        }
    }

    fn offsets(&self) -> &'static [(i32, i32)] {
        match self {
            SeedPattern::Random(_) => &[],
            SeedPattern::Bar => &BAR,
            SeedPattern::Spaceship => &SPACESHIP,
        }
    }

    /// Smallest `(height, width)` the pattern fits on when anchored at the midpoint.
    pub fn min_dimensions(&self) -> (usize, usize) {
        let offsets = self.offsets();
        let rows = span(offsets.iter().map(|&(dr, _)| dr));
        let cols = span(offsets.iter().map(|&(_, dc)| dc));
        (min_side(rows), min_side(cols))
    }

    /// Writes the pattern into `board`.
    pub fn apply<R: Rng + ?Sized>(&self, board: &mut Board, rng: &mut R) -> Result<()> {
        match *self {
            SeedPattern::Random(density) => {
                check_density(density)?;
                for row in 0..board.height() {
                    for col in 0..board.width() {
                        board.set(row, col, rng.random_bool(density).into());
                    }
                }
            }
            SeedPattern::Bar | SeedPattern::Spaceship => {
                let (min_height, min_width) = self.min_dimensions();
                if board.height() < min_height || board.width() < min_width {
                    return Err(GameOfLifeError::InvalidDimension {
                        height: board.height(),
                        width: board.width(),
                        min_height,
                        min_width,
                    });
                }
                let mid_row = (board.height() / 2) as i32;
                let mid_col = (board.width() / 2) as i32;
                for &(dr, dc) in self.offsets() {
                    let row = (mid_row + dr) as usize;
                    let col = (mid_col + dc) as usize;
                    board.set(row, col, CellState::Alive);
                }
            }
        }
        debug!(
            "seeded {}x{} board with {}: {} alive",
            board.height(),
            board.width(),
            self,
            board.population()
        );
        Ok(())
    }
}

impl Display for SeedPattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            SeedPattern::Random(density) => write!(f, "rand({:.4})", density),
            other => write!(f, "{}", other.name()),
        }
    }
}

fn check_density(density: f64) -> Result<()> {
    if (0.0..=1.0).contains(&density) {
        Ok(())
    } else {
        Err(GameOfLifeError::InvalidDensity(density))
    }
}

fn span(values: impl Iterator<Item = i32>) -> (i32, i32) {
    values.fold((0, 0), |(lo, hi), v| (lo.min(v), hi.max(v)))
}

// Anchor is `side / 2`: need `side / 2 >= -lo` and `side / 2 + hi <= side - 1`.
fn min_side((lo, hi): (i32, i32)) -> usize {
    let (below, above) = ((-lo) as usize, hi as usize);
    (MIN_SIDE..)
        .find(|&side| side / 2 >= below && side - side / 2 > above)
        .unwrap_or(MIN_SIDE)
}
