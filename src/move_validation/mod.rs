//! Pseudo-legal move checks: whether the piece on a move's origin may reach its
//! destination given the current occupancy. Check safety, castling, en passant
//! and promotion are left to the caller.
//!
//! Every predicate is a pure function of a board snapshot and a move.

pub mod capture;
pub mod leapers;
pub mod pawn;
pub mod sliding;

pub use capture::can_land_on;
pub use leapers::{king_move, knight_move};
pub use pawn::{black_pawn_move, pawn_move, white_pawn_move};
pub use sliding::{bishop_move, path_is_clear, queen_move, rook_move, squares_between};

use tracing::trace;

use crate::chess_board::{BoardView, ChessField, Color, Move, Piece, PieceType};
use crate::error::RuleError;

/// Runs the predicate for `piece.kind` against `mv`.
pub fn is_legal_for<B: BoardView + ?Sized>(piece: Piece, board: &B, mv: Move) -> bool {
    match piece.kind {
        PieceType::Pawn => pawn_move(board, mv, piece.color),
        PieceType::Knight => knight_move(board, mv),
        PieceType::Bishop => bishop_move(board, mv),
        PieceType::Rook => rook_move(board, mv),
        PieceType::Queen => queen_move(board, mv),
        PieceType::King => king_move(board, mv),
    }
}

/// Checks `mv` with the predicate of whatever stands on `mv.from`.
pub fn validate<B: BoardView + ?Sized>(board: &B, mv: Move) -> Result<bool, RuleError> {
    if mv.from == mv.to {
        return Err(RuleError::DegenerateMove(mv.from));
    }
    let piece = board.occupant_at(mv.from).ok_or(RuleError::EmptyOrigin(mv.from))?;
    let legal = is_legal_for(piece, board, mv);
    trace!(%mv, ?piece, legal, "validated move");
    Ok(legal)
}

pub fn is_legal<B: BoardView + ?Sized>(board: &B, mv: Move) -> bool {
    validate(board, mv).unwrap_or(false)
}

/// Every destination the piece on `from` may reach, in rank-major order.
pub fn legal_targets<B: BoardView + ?Sized>(board: &B, from: ChessField) -> Result<Vec<ChessField>, RuleError> {
    let piece = board.occupant_at(from).ok_or(RuleError::EmptyOrigin(from))?;
    Ok(ChessField::all()
        .filter(|&to| to != from && is_legal_for(piece, board, Move::new(from, to)))
        .collect())
}

/// All pseudo-legal moves of `color`'s pieces.
pub fn pseudo_legal_moves<B: BoardView + ?Sized>(board: &B, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    for from in ChessField::all() {
        if board.occupant_at(from).is_some_and(|piece| piece.color == color) {
            let targets = legal_targets(board, from).unwrap_or_default();
            moves.extend(targets.into_iter().map(|to| Move::new(from, to)));
        }
    }
    moves
}
