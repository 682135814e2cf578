use super::capture::can_land_on;
use crate::chess_board::{BoardView, ChessField, Move, MoveDelta};

/// Squares strictly between `mv.from` and `mv.to`, walking from the origin.
///
/// Returns `None` when the move is neither along a rank or file nor along a
/// diagonal. Each square is computed afresh from the origin.
pub fn squares_between(mv: Move) -> Option<impl Iterator<Item = ChessField>> {
    let delta = mv.delta();
    if !(delta.is_orthogonal() || delta.is_diagonal()) {
        return None;
    }
    let (d_file, d_rank) = delta.unit();
    let from = mv.from;
    Some((1..delta.distance()).filter_map(move |i| from.offset(d_file * i, d_rank * i).ok()))
}

pub fn path_is_clear<B: BoardView + ?Sized>(board: &B, mv: Move) -> bool {
    squares_between(mv).is_some_and(|mut between| between.all(|field| board.is_empty(field)))
}

fn slide<B: BoardView + ?Sized>(board: &B, mv: Move, shape: fn(&MoveDelta) -> bool) -> bool {
    !board.is_empty(mv.from) && shape(&mv.delta()) && path_is_clear(board, mv) && can_land_on(board, mv)
}

/// Any number of squares along a rank or file, without leaping.
pub fn rook_move<B: BoardView + ?Sized>(board: &B, mv: Move) -> bool {
    slide(board, mv, MoveDelta::is_orthogonal)
}

/// Any number of squares along a diagonal, without leaping.
pub fn bishop_move<B: BoardView + ?Sized>(board: &B, mv: Move) -> bool {
    slide(board, mv, MoveDelta::is_diagonal)
}

pub fn queen_move<B: BoardView + ?Sized>(board: &B, mv: Move) -> bool {
    rook_move(board, mv) || bishop_move(board, mv)
}
