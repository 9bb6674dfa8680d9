use thiserror::Error;

/// A player action the field refused. The board is left untouched.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("This cell is already open!")]
    AlreadyRevealed,
    #[error("There is a number here!")]
    CannotMarkNumber,
    #[error("Coordinates outside the field")]
    OutOfBounds,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("Too many mines: {mines} would fill a field of {cells} cells")]
    TooManyMines { mines: usize, cells: usize },
}

/// A malformed line from the player; reported and prompted again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Error! Empty input")]
    Empty,
    #[error("Error! Wrong number of arguments: {0}")]
    WrongArgumentCount(String),
    #[error("Error! Please enter only numbers for coordinates: {0}")]
    NotANumber(String),
    #[error("Error! Coordinates outside the field sizes: {col} {row}")]
    OutOfField { col: i64, row: i64 },
    #[error("Error! Command not supported: {0}")]
    UnknownCommand(String),
    #[error("Error! Enter one integer for the number of mines.")]
    MineCountNotANumber,
    #[error("Mines shouldn't fill the field")]
    MineCountTooLarge,
}
