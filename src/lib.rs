pub mod chess_board;
pub mod error;
pub mod move_validation;

pub use chess_board::{BoardView, ChessBoard, ChessField, Color, Move, Piece, PieceType, Square};
pub use error::{ParseError, RuleError};
pub use move_validation::{is_legal, is_legal_for, legal_targets, pseudo_legal_moves, validate};
