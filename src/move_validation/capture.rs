use crate::chess_board::{BoardView, Move};

/// A destination is a legal landing square when it is empty or holds a piece
/// of the other color than the one standing on `mv.from`.
pub fn can_land_on<B: BoardView + ?Sized>(board: &B, mv: Move) -> bool {
    match (board.occupant_at(mv.from), board.occupant_at(mv.to)) {
        (_, None) => true,
        (Some(mover), Some(target)) => mover.color != target.color,
        (None, Some(_)) => false,
    }
}
