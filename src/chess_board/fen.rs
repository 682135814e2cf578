use tracing::debug;

use super::ChessBoard;
use super::{Piece, Square};
use crate::error::ParseError;

pub const INITIAL_POSITION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Reads the piece-placement field of a FEN string into a `ChessBoard`.
///
/// Side to move, castling rights, en passant and the clocks belong to the game
/// layer; they are accepted and ignored.
pub fn from_fen(fen: &str) -> Result<ChessBoard, ParseError> {
    let mut board = ChessBoard::new();
    let placement = fen
        .split_whitespace()
        .next()
        .ok_or_else(|| ParseError::InvalidFen(String::from("empty string")))?;

    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() != 8 {
        return Err(ParseError::InvalidFen(format!("expected 8 rows, found {}", rows.len())));
    }

    for (row_index, row) in rows.iter().enumerate() {
        let rank = 7 - row_index;
        let mut file = 0;

        for c in row.chars() {
            if file > 7 {
                return Err(ParseError::InvalidFen(format!("too many squares in row {}", row_index + 1)));
            }
            if let Some(skip) = c.to_digit(10) {
                if skip == 0 || skip > 8 {
                    return Err(ParseError::InvalidFen(format!("invalid empty-square count: {}", c)));
                }
                file += skip as usize;
            } else if let Some(piece) = Piece::from_char(c) {
                board.squares[rank][file] = Square::Occupied(piece);
                file += 1;
            } else {
                return Err(ParseError::InvalidFen(format!("invalid piece character: {}", c)));
            }
        }
        if file != 8 {
            return Err(ParseError::InvalidFen(format!(
                "row {} covers {} squares instead of 8",
                row_index + 1,
                file
            )));
        }
    }

    debug!(placement, "parsed FEN placement");
    Ok(board)
}

/// Emits the piece-placement field of `board`.
pub fn to_fen(board: &ChessBoard) -> String {
    let mut board_representation = String::new();

    for rank in (0..8).rev() {
        let mut empty_count = 0;

        for file in 0..8 {
            match board.squares[rank][file] {
                Square::Occupied(piece) => {
                    if empty_count > 0 {
                        board_representation.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    board_representation.push(piece.to_char());
                }
                Square::Empty => {
                    empty_count += 1;
                }
            }
        }

        if empty_count > 0 {
            board_representation.push_str(&empty_count.to_string());
        }

        if rank > 0 {
            board_representation.push('/');
        }
    }

    board_representation
}

#[cfg(test)]
mod test {
    use super::super::{Color, PieceType};
    use super::*;

    #[test]
    fn fen_empty_board() {
        let board = ChessBoard::from_fen("8/8/8/8/8/8/8/8 w - - 0 1").expect("Failed to parse FEN");

        for row in 0..8 {
            for col in 0..8 {
                assert_eq!(board.squares[row][col], Square::Empty);
            }
        }
    }

    #[test]
    fn fen_two_pawns() {
        let board = ChessBoard::from_fen("8/8/8/8/8/8/8/P3P3 w - - 0 1").expect("Failed to parse FEN");

        assert_eq!(board.squares[0][0], Square::Occupied(Piece::new(Color::White, PieceType::Pawn)));
        assert_eq!(board.squares[0][4], Square::Occupied(Piece::new(Color::White, PieceType::Pawn)));
        assert_eq!(board.pieces().count(), 2);
    }

    #[test]
    fn fen_initial_board() {
        let board = ChessBoard::from_fen(INITIAL_POSITION).expect("Failed to parse FEN");

        for col in 0..8 {
            assert_eq!(board.squares[1][col], Square::Occupied(Piece::new(Color::White, PieceType::Pawn)));
            assert_eq!(board.squares[6][col], Square::Occupied(Piece::new(Color::Black, PieceType::Pawn)));
        }

        assert_eq!(board.squares[7][0], Square::Occupied(Piece::new(Color::Black, PieceType::Rook)));
        assert_eq!(board.squares[0][4], Square::Occupied(Piece::new(Color::White, PieceType::King)));
        assert_eq!(board.squares[3][4], Square::Empty);
        assert_eq!(board.pieces().count(), 32);
    }

    #[test]
    fn fen_placement_only_is_accepted() {
        let board = ChessBoard::from_fen("4k3/8/8/8/8/8/8/4K3").expect("Failed to parse FEN");
        assert_eq!(board.squares[7][4], Square::Occupied(Piece::new(Color::Black, PieceType::King)));
    }

    #[test]
    fn fen_invalid_square() {
        let result = ChessBoard::from_fen("8/8/8/8/8/8/8/X7 w - - 0 1");
        assert!(matches!(result, Err(ParseError::InvalidFen(_))));
    }

    #[test]
    fn fen_invalid_fen_extra_columns() {
        let fen = "rnbqkbnrr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        assert!(ChessBoard::from_fen(fen).is_err());
        assert!(ChessBoard::from_fen("7P1/8/8/8/8/8/8/8").is_err());
    }

    #[test]
    fn fen_invalid_short_row_and_row_count() {
        assert!(ChessBoard::from_fen("7/8/8/8/8/8/8/8").is_err());
        assert!(ChessBoard::from_fen("8/8/8/8/8/8/8").is_err());
        assert!(ChessBoard::from_fen("").is_err());
        assert!(ChessBoard::from_fen("08/8/8/8/8/8/8/8").is_err());
    }

    #[test]
    fn test_to_fen_initial_position() {
        let board = ChessBoard::from_fen(INITIAL_POSITION).unwrap();
        assert_eq!(board.to_fen(), "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR");
    }

    #[test]
    fn test_to_fen_custom_position() {
        let placement = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR";
        let board = ChessBoard::from_fen(&format!("{placement} b KQkq e3 0 1")).unwrap();
        assert_eq!(board.to_fen(), placement);
    }
}
