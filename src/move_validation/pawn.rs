use crate::chess_board::{BoardView, Color, Move};

/// Checks whether a pawn of `color` on `mv.from` may reach `mv.to`.
///
/// A pawn advances one square onto an empty square, or two from its starting
/// rank when both squares ahead are empty. It captures only diagonally forward
/// and only a piece of the other color. The capture precondition is not used:
/// forward moves never capture and diagonal moves never land on empty squares.
pub fn pawn_move<B: BoardView + ?Sized>(board: &B, mv: Move, color: Color) -> bool {
    if board.is_empty(mv.from) {
        return false;
    }
    let forward = color.forward();
    // a pawn on the far rank has nowhere to go
    let Ok(one_step) = mv.from.step(forward) else {
        return false;
    };

    if mv.to == one_step {
        return board.is_empty(mv.to);
    }

    if mv.from.rank() == color.pawn_start_rank() && one_step.step(forward) == Ok(mv.to) {
        return board.is_empty(one_step) && board.is_empty(mv.to);
    }

    if one_step.west() == Ok(mv.to) || one_step.east() == Ok(mv.to) {
        return board.occupant_at(mv.to).is_some_and(|target| target.color != color);
    }

    false
}

pub fn white_pawn_move<B: BoardView + ?Sized>(board: &B, mv: Move) -> bool {
    pawn_move(board, mv, Color::White)
}

pub fn black_pawn_move<B: BoardView + ?Sized>(board: &B, mv: Move) -> bool {
    pawn_move(board, mv, Color::Black)
}
