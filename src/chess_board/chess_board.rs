use std::fmt;

use super::{fen, BoardView, ChessField, Piece, Square};
use crate::error::ParseError;

/// Piece placement on an 8x8 board, indexed `squares[rank][file]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessBoard {
    pub squares: [[Square; 8]; 8],
}

impl Default for ChessBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessBoard {
    /// Creates an empty chess board
    pub fn new() -> Self {
        Self {
            squares: [[Square::Empty; 8]; 8],
        }
    }

    /// Delegates FEN parsing to the `fen` module.
    pub fn from_fen(fen: &str) -> Result<Self, ParseError> {
        fen::from_fen(fen)
    }

    pub fn to_fen(&self) -> String {
        fen::to_fen(self)
    }

    pub fn square(&self, field: ChessField) -> Square {
        self.squares[field.rank() as usize][field.file() as usize]
    }

    /// Places `piece` on `field` and returns whatever stood there before.
    pub fn put_piece(&mut self, field: ChessField, piece: Piece) -> Option<Piece> {
        let previous = self.square(field).piece();
        self.squares[field.rank() as usize][field.file() as usize] = Square::Occupied(piece);
        previous
    }

    pub fn remove_piece(&mut self, field: ChessField) -> Option<Piece> {
        let previous = self.square(field).piece();
        self.squares[field.rank() as usize][field.file() as usize] = Square::Empty;
        previous
    }

    /// Returns an iterator over all pieces on the chessboard along with their coordinates.
    pub fn pieces(&self) -> impl Iterator<Item = (ChessField, Piece)> + '_ {
        ChessField::all().filter_map(move |field| self.square(field).piece().map(|piece| (field, piece)))
    }

    pub fn render_to_string(&self) -> String {
        let mut board_representation = String::new();
        board_representation.push_str("    a   b   c   d   e   f   g   h  \n");
        board_representation.push_str("  ┌───┬───┬───┬───┬───┬───┬───┬───┐\n");

        for rank in (0..8).rev() {
            board_representation.push_str(&format!("{} │", rank + 1));
            for file in 0..8 {
                let square = match &self.squares[rank][file] {
                    Square::Empty => ' ',
                    Square::Occupied(piece) => piece.to_char(),
                };
                board_representation.push_str(&format!(" {} │", square));
            }
            board_representation.push_str(&format!(" {}\n", rank + 1));

            if rank > 0 {
                board_representation.push_str("  ├───┼───┼───┼───┼───┼───┼───┼───┤\n");
            }
        }

        board_representation.push_str("  └───┴───┴───┴───┴───┴───┴───┴───┘\n");
        board_representation.push_str("    a   b   c   d   e   f   g   h  \n");

        board_representation
    }
}

impl BoardView for ChessBoard {
    fn occupant_at(&self, field: ChessField) -> Option<Piece> {
        self.square(field).piece()
    }
}

impl fmt::Display for ChessBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_to_string())
    }
}
