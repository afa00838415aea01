use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid board configuration: dimensions and mine count must be positive and fit the board")]
    InvalidConfiguration,
    #[error("Coordinates out of bounds")]
    OutOfBounds,
}

pub type Result<T> = core::result::Result<T, GameError>;
