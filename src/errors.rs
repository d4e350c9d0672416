use std::{
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    num::{ParseFloatError, ParseIntError},
};

pub enum GameOfLifeError {
    /// Board (or seed pattern) does not fit the requested dimensions.
    InvalidDimension {
        height: usize,
        width: usize,
        min_height: usize,
        min_width: usize,
    },
    UnknownPattern(String),
    InvalidDensity(f64),
    UnknownEdgePolicy(String),
    Io(std::io::Error),
    Other(anyhow::Error),
}

impl Debug for GameOfLifeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            GameOfLifeError::Other(err) => {
                let anyhow_str = format!("{:?}", err).replace("\n", " ");
                f.debug_tuple("Other").field(&anyhow_str).finish()
            }
            GameOfLifeError::Io(err) => f.debug_tuple("Io").field(err).finish(),
            other => f.debug_tuple("").field(&other.to_string()).finish(),
        }
    }
}

impl Display for GameOfLifeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            GameOfLifeError::InvalidDimension {
                height,
                width,
                min_height,
                min_width,
            } => write!(
                f,
                "invalid dimension: {}x{} board, need at least {}x{}",
                height, width, min_height, min_width
            ),
            GameOfLifeError::UnknownPattern(name) => write!(
                f,
                "unknown pattern: '{}' (expected rand, bar or spaceship)",
                name
            ),
            GameOfLifeError::InvalidDensity(density) => {
                write!(f, "invalid density: {} (expected 0.0..=1.0)", density)
            }
            GameOfLifeError::UnknownEdgePolicy(name) => write!(
                f,
                "unknown edge policy: '{}' (expected frozen, dead or torus)",
                name
            ),
            GameOfLifeError::Io(err) => write!(f, "io error: '{:#}'", err),
            GameOfLifeError::Other(err) => write!(f, "({:#})", err),
        }
    }
}

impl std::error::Error for GameOfLifeError {}

impl From<anyhow::Error> for GameOfLifeError {
    fn from(err: anyhow::Error) -> GameOfLifeError {
        GameOfLifeError::Other(err)
    }
}

impl From<std::io::Error> for GameOfLifeError {
    fn from(err: std::io::Error) -> GameOfLifeError {
        GameOfLifeError::Io(err)
    }
}

impl From<ParseIntError> for GameOfLifeError {
    fn from(err: ParseIntError) -> GameOfLifeError {
        let msg = format!("parse int err: '{:#}'", err);
        GameOfLifeError::Other(anyhow::Error::msg(msg))
    }
}

impl From<ParseFloatError> for GameOfLifeError {
    fn from(err: ParseFloatError) -> GameOfLifeError {
        let msg = format!("parse float err: '{:#}'", err);
        GameOfLifeError::Other(anyhow::Error::msg(msg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimension_message_names_both_sizes() {
        let err = GameOfLifeError::InvalidDimension {
            height: 2,
            width: 50,
            min_height: 3,
            min_width: 3,
        };
        assert_eq!(
            err.to_string(),
            "invalid dimension: 2x50 board, need at least 3x3"
        );
    }

    #[test]
    fn parse_errors_become_other() {
        let err: GameOfLifeError = "x".parse::<usize>().unwrap_err().into();
        assert!(matches!(err, GameOfLifeError::Other(_)));
        assert!(err.to_string().starts_with("(parse int err"));
    }
}
