use std::{fmt::Display, str::FromStr};

use log::{debug, trace};

use crate::{
    errors::GameOfLifeError,
    game::{Board, CellState},
    StdResult,
};

/// How the outermost ring of the board is treated by [`step`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum EdgePolicy {
    /// Only interior cells are evaluated; the border keeps its initial value forever.
    #[default]
    Frozen,
    /// Every cell is evaluated; neighbours off the board count as dead.
    DeadHalo,
    /// Every cell is evaluated; neighbours wrap around to the opposite side.
    Toroidal,
}

impl FromStr for EdgePolicy {
    type Err = GameOfLifeError;

    fn from_str(s: &str) -> StdResult<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "frozen" => Ok(EdgePolicy::Frozen),
            "dead" | "halo" => Ok(EdgePolicy::DeadHalo),
            "torus" | "toroidal" | "wrap" => Ok(EdgePolicy::Toroidal),
            _ => Err(GameOfLifeError::UnknownEdgePolicy(s.to_owned())),
        }
    }
}

impl Display for EdgePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EdgePolicy::Frozen => "frozen",
            EdgePolicy::DeadHalo => "dead",
            EdgePolicy::Toroidal => "torus",
        };
        write!(f, "{}", name)
    }
}

/// Live cells among the eight cells around `(row, col)`.
///
/// Under [`EdgePolicy::Frozen`] the caller must pass an interior coordinate.
pub fn count_neighbours(board: &Board, row: usize, col: usize, edges: EdgePolicy) -> u8 {
    let (height, width) = (board.height() as i64, board.width() as i64);
    (0..9)
        .filter(|&z| z != 4)
        .map(|z| {
            let dy = 1 - z / 3;
            let dx = 1 - z % 3;
            (row as i64 + dy, col as i64 + dx)
        })
        .filter_map(|(y, x)| match edges {
            EdgePolicy::Toroidal => Some((y.rem_euclid(height), x.rem_euclid(width))),
            EdgePolicy::Frozen | EdgePolicy::DeadHalo => {
                (y >= 0 && x >= 0 && y < height && x < width).then_some((y, x))
            }
        })
        .filter(|&(y, x)| board.is_alive(y as usize, x as usize))
        .count() as u8
}

/// Conway B3/S23 applied to a single cell.
pub fn next_state(current: CellState, neighbours: u8) -> CellState {
    match (current, neighbours) {
        (CellState::Alive, 2 | 3) => CellState::Alive,
        // solitude
        (CellState::Alive, n) if n < 2 => CellState::Dead,
        // overpopulation
        (CellState::Alive, _) => CellState::Dead,
        (CellState::Dead, 3) => CellState::Alive,
        (state, _) => state,
    }
}

/// Computes the next generation into a freshly allocated board.
///
/// `board` is only read, so every cell sees its neighbours' current state.
pub fn step(board: &Board, edges: EdgePolicy) -> Board {
    let mut next = board.clone();
    let (rows, cols) = match edges {
        EdgePolicy::Frozen => (1..board.height() - 1, 1..board.width() - 1),
        EdgePolicy::DeadHalo | EdgePolicy::Toroidal => (0..board.height(), 0..board.width()),
    };
    for row in rows {
        for col in cols.clone() {
            let neighbours = count_neighbours(board, row, col, edges);
            let current = board.get(row, col).unwrap_or_default();
            next.set(row, col, next_state(current, neighbours));
        }
    }
    next
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct TickStats {
    pub births: usize,
    pub deaths: usize,
    pub population: usize,
}

/// Current generation plus the edge policy used to advance it.
#[derive(Debug, Clone)]
pub struct Simulation {
    board: Board,
    generation: u64,
    edges: EdgePolicy,
}

impl Simulation {
    pub fn new(board: Board, edges: EdgePolicy) -> Self {
        Self {
            board,
            generation: 0,
            edges,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn edges(&self) -> EdgePolicy {
        self.edges
    }

    /// Replaces the current board with the next generation.
    pub fn tick(&mut self) -> TickStats {
        let next = step(&self.board, self.edges);
        let stats = diff(&self.board, &next);
        self.board = next;
        self.generation += 1;
        trace!("generation {}: {:?}", self.generation, stats);
        stats
    }

    pub fn run(&mut self, generations: u64) -> TickStats {
        let mut total = TickStats {
            population: self.board.population(),
            ..TickStats::default()
        };
        for _ in 0..generations {
            let stats = self.tick();
            total.births += stats.births;
            total.deaths += stats.deaths;
            total.population = stats.population;
        }
        debug!(
            "ran {} generations, now at {}: {:?}",
            generations, self.generation, total
        );
        total
    }
}

fn diff(prev: &Board, next: &Board) -> TickStats {
    let mut stats = TickStats::default();
    for (before, after) in prev.rows().zip(next.rows()) {
        for (was, is) in before.iter().zip(after) {
            match (was.is_alive(), is.is_alive()) {
                (false, true) => stats.births += 1,
                (true, false) => stats.deaths += 1,
                _ => {}
            }
            if is.is_alive() {
                stats.population += 1;
            }
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_table() {
        use CellState::{Alive, Dead};
        for n in 0..=8u8 {
            let survives = n == 2 || n == 3;
            assert_eq!(next_state(Alive, n), survives.into(), "alive with {n}");
            assert_eq!(next_state(Dead, n), (n == 3).into(), "dead with {n}");
        }
    }

    #[test]
    fn neighbours_exclude_self() {
        let board = Board::from_cells(3, 3, &[(1, 1)]).unwrap();
        assert_eq!(count_neighbours(&board, 1, 1, EdgePolicy::Frozen), 0);

        let all: Vec<_> = (0..3).flat_map(|r| (0..3).map(move |c| (r, c))).collect();
        let full = Board::from_cells(3, 3, &all).unwrap();
        assert_eq!(count_neighbours(&full, 1, 1, EdgePolicy::Frozen), 8);
    }

    #[test]
    fn neighbours_at_corner() {
        let board = Board::from_cells(4, 4, &[(0, 1), (1, 0), (1, 1), (3, 3)]).unwrap();
        assert_eq!(count_neighbours(&board, 0, 0, EdgePolicy::DeadHalo), 3);
        assert_eq!(count_neighbours(&board, 0, 0, EdgePolicy::Toroidal), 4);
    }

    #[test]
    fn frozen_board_on_minimum_size() {
        let board = Board::from_cells(3, 3, &[(0, 0), (0, 1), (0, 2)]).unwrap();
        let next = step(&board, EdgePolicy::Frozen);
        assert_eq!(next.live_cells(), vec![(0, 0), (0, 1), (0, 2), (1, 1)]);
    }

    #[test]
    fn edge_policies_diverge_on_border_blinker() {
        let board = Board::from_cells(5, 5, &[(0, 1), (0, 2), (0, 3)]).unwrap();
        assert_eq!(
            step(&board, EdgePolicy::Frozen).live_cells(),
            vec![(0, 1), (0, 2), (0, 3), (1, 2)]
        );
        assert_eq!(
            step(&board, EdgePolicy::DeadHalo).live_cells(),
            vec![(0, 2), (1, 2)]
        );
        assert_eq!(
            step(&board, EdgePolicy::Toroidal).live_cells(),
            vec![(0, 2), (1, 2), (4, 2)]
        );
    }

    #[test]
    fn tick_counts_births_and_deaths() {
        let board = Board::from_cells(5, 5, &[(2, 1), (2, 2), (2, 3)]).unwrap();
        let mut sim = Simulation::new(board, EdgePolicy::Frozen);
        let stats = sim.tick();
        assert_eq!(sim.generation(), 1);
        assert_eq!(
            stats,
            TickStats {
                births: 2,
                deaths: 2,
                population: 3
            }
        );
        assert_eq!(sim.board().live_cells(), vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn parse_edge_policy() {
        assert_eq!("frozen".parse::<EdgePolicy>().unwrap(), EdgePolicy::Frozen);
        assert_eq!("dead".parse::<EdgePolicy>().unwrap(), EdgePolicy::DeadHalo);
        assert_eq!("Torus".parse::<EdgePolicy>().unwrap(), EdgePolicy::Toroidal);
        assert!(matches!(
            "mirror".parse::<EdgePolicy>(),
            Err(GameOfLifeError::UnknownEdgePolicy(_))
        ));
    }
}
