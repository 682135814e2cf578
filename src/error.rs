use crate::chess_board::ChessField;

/// Failures of the coordinate algebra and of the checked validation entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("square (file {file}, rank {rank}) is off the board")]
    OutOfBounds { file: i16, rank: i16 },
    #[error("no piece stands on {0}")]
    EmptyOrigin(ChessField),
    #[error("move from {0} to itself")]
    DegenerateMove(ChessField),
}

/// Failures while reading squares, moves or positions from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid square notation: {0}")]
    InvalidSquare(String),
    #[error("invalid move notation: {0}")]
    InvalidMove(String),
    #[error("invalid FEN string: {0}")]
    InvalidFen(String),
}
