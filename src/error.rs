use thiserror::Error;

use crate::environment::{Direction, Pos};

/// Errors building a simulated fire world.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvError {
    #[error("Invalid grid dimensions: {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("Position out of bounds: ({x}, {y})")]
    OutOfBounds { x: i32, y: i32 },

    #[error("Fire placed on a protected cell: ({x}, {y})")]
    FireOnProtectedCell { x: i32, y: i32 },

    #[error("Cannot place {requested} fires, only {available} free cells")]
    TooManyFires { requested: usize, available: usize },
}

/// Failures reported by the robot when asked to move.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("Move {direction:?} from {from:?} leaves the grid")]
    OutOfBounds { from: Pos, direction: Direction },

    #[error("Move into fire at {pos:?}")]
    IntoFire { pos: Pos },
}

/// Reasons a rescue run aborts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("No safe direction from {pos:?}")]
    NoValidDirection { pos: Pos },

    #[error("Actuator failure: {0}")]
    Actuator(#[from] MoveError),
}

pub type Result<T> = std::result::Result<T, SolveError>;
