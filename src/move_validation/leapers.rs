use super::capture::can_land_on;
use crate::chess_board::{BoardView, Move};

/// The king moves one square in any direction. Castling and check safety are
/// decided by the caller.
pub fn king_move<B: BoardView + ?Sized>(board: &B, mv: Move) -> bool {
    !board.is_empty(mv.from) && mv.delta().is_king_step() && can_land_on(board, mv)
}

/// The knight jumps two squares along one axis and one along the other,
/// ignoring anything in between.
pub fn knight_move<B: BoardView + ?Sized>(board: &B, mv: Move) -> bool {
    !board.is_empty(mv.from) && mv.delta().is_knight_jump() && can_land_on(board, mv)
}
