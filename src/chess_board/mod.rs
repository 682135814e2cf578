pub mod fen;
pub mod model;
pub use model::{ChessField, Color, Direction, Move, MoveDelta, Piece, PieceType, Square};

mod chess_board;
#[cfg(test)]
pub mod test_utils;
pub use chess_board::ChessBoard;

/// Read-only occupancy queries the move predicates need from a board.
///
/// Implementations are treated as an immutable snapshot for the duration of a
/// check; nothing in this crate mutates a board through this trait.
pub trait BoardView {
    fn occupant_at(&self, field: ChessField) -> Option<Piece>;

    fn is_empty(&self, field: ChessField) -> bool {
        self.occupant_at(field).is_none()
    }
}
