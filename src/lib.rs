pub mod errors;
pub mod frontend;
pub mod game;

use std::time::Duration;

use errors::GameOfLifeError;
use frontend::RenderMode;
use game::{seed::DEFAULT_DENSITY, EdgePolicy, SeedPattern};
use structopt::StructOpt;

pub type Result<T> = std::result::Result<T, GameOfLifeError>;
pub type StdResult<T, E> = std::result::Result<T, E>;

#[derive(Debug, Clone, StructOpt)]
#[structopt(name = "game_of_life", about = "Conway's Game of Life in the terminal")]
pub struct GameOfLifeOpt {
    #[structopt(long, env, default_value = "game_of_life_in_terminal=warn")]
    pub rust_log: String,

    /// Grid row count
    #[structopt(long, env = "LIFE_HEIGHT", default_value = "30")]
    pub height: usize,

    /// Grid column count
    #[structopt(long, env = "LIFE_WIDTH", default_value = "50")]
    pub width: usize,

    /// rand|bar|spaceship
    #[structopt(long, env = "LIFE_INIT", default_value = "rand")]
    pub init: String,

    /// Chance of a cell starting alive with `--init rand`
    #[structopt(long, env = "LIFE_DENSITY", parse(try_from_str = parse_density))]
    pub density: Option<f64>,

    /// Seed for `--init rand`; a fresh one is drawn when absent
    #[structopt(long, env = "LIFE_SEED")]
    pub seed: Option<u64>,

    #[structopt(long, env = "LIFE_DELAY_MS", default_value = "500")]
    pub delay_ms: u64,

    /// Stop after this many generations instead of running until Ctrl-C
    #[structopt(long, env = "LIFE_GENERATIONS")]
    pub generations: Option<u64>,

    /// frozen|dead|torus
    #[structopt(long, env = "LIFE_EDGES", default_value = "frozen")]
    pub edges: EdgePolicy,

    /// Print frames as plain text instead of a coloured full-screen view
    #[structopt(long)]
    pub plain: bool,
}

impl GameOfLifeOpt {
    pub fn pattern(&self) -> Result<SeedPattern> {
        SeedPattern::parse(&self.init, self.density.unwrap_or(DEFAULT_DENSITY))
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn render_mode(&self) -> RenderMode {
        if self.plain {
            RenderMode::Plain
        } else {
            RenderMode::Color
        }
    }
}

/// Accepts a probability (`0.1`) or a one-in-n fraction (`1/13`).
fn parse_density(src: &str) -> Result<f64> {
    let density = match src.split_once('/') {
        Some((num, den)) => {
            let num: f64 = num.trim().parse()?;
            let den: f64 = den.trim().parse()?;
            num / den
        }
        None => src.trim().parse()?,
    };
    if !(0.0..=1.0).contains(&density) {
        return Err(GameOfLifeError::InvalidDensity(density));
    }
    Ok(density)
}
